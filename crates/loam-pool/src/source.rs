//! Page acquisition: the [`PageSource`] trait and the host-backed
//! implementation.
//!
//! A page source hands out whole, page-aligned buffers of exactly one
//! system page. The pool never returns pages to the source; a buffer
//! lives until its pool is dropped.

use loam_core::{AcquireError, BootstrapError};
use memmap2::MmapMut;

/// Supplies page-sized memory buffers to a pool.
///
/// Implementations report a fixed page size for their entire lifetime;
/// the registry captures it once at bootstrap and derives every
/// capacity decision from it.
pub trait PageSource {
    /// Page granularity of this source in bytes. Constant per instance.
    fn page_size(&self) -> usize;

    /// Acquire one zero-initialized buffer of exactly
    /// [`page_size`](Self::page_size) bytes.
    ///
    /// Failure is surfaced to the caller as-is; this layer never
    /// retries.
    fn acquire(&mut self) -> Result<PageBuf, AcquireError>;
}

/// One page-sized buffer owned by the pool.
///
/// Host-backed sources map anonymous memory (page-aligned by
/// construction); test sources may substitute plain zeroed heap
/// buffers.
#[derive(Debug)]
pub struct PageBuf {
    backing: Backing,
}

#[derive(Debug)]
enum Backing {
    Mapped(MmapMut),
    Owned(Box<[u8]>),
}

impl PageBuf {
    /// Wrap an anonymous mapping.
    pub fn mapped(map: MmapMut) -> Self {
        Self {
            backing: Backing::Mapped(map),
        }
    }

    /// Allocate a zeroed heap buffer of `len` bytes.
    ///
    /// Intended for test page sources; heap buffers carry no alignment
    /// guarantee beyond the allocator's.
    pub fn owned(len: usize) -> Self {
        Self {
            backing: Backing::Owned(vec![0u8; len].into_boxed_slice()),
        }
    }

    /// Length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shared view of the buffer bytes.
    pub fn as_slice(&self) -> &[u8] {
        match &self.backing {
            Backing::Mapped(m) => m,
            Backing::Owned(b) => b,
        }
    }

    /// Mutable view of the buffer bytes.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match &mut self.backing {
            Backing::Mapped(m) => m,
            Backing::Owned(b) => b,
        }
    }
}

/// Page source backed by the host operating system.
///
/// Page size comes from `sysconf(_SC_PAGESIZE)` and pages from
/// anonymous private mappings, so every buffer is page-aligned and
/// zero-filled by the kernel.
pub struct HostPageSource {
    page_size: usize,
}

impl HostPageSource {
    /// Query the host page size and build a source around it.
    ///
    /// A non-positive `sysconf` result means the environment cannot
    /// tell us its page granularity; nothing downstream can proceed
    /// without one, so this returns
    /// [`BootstrapError::PageSizeUnavailable`].
    pub fn new() -> Result<Self, BootstrapError> {
        // Unsafe: sysconf takes no pointers and only reads libc state.
        #[allow(unsafe_code)]
        let raw = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
        if raw <= 0 {
            return Err(BootstrapError::PageSizeUnavailable);
        }
        Ok(Self {
            page_size: raw as usize,
        })
    }
}

impl PageSource for HostPageSource {
    fn page_size(&self) -> usize {
        self.page_size
    }

    fn acquire(&mut self) -> Result<PageBuf, AcquireError> {
        let map = MmapMut::map_anon(self.page_size).map_err(|e| AcquireError::OutOfMemory {
            requested: self.page_size,
            reason: e.to_string(),
        })?;
        Ok(PageBuf::mapped(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_source_reports_a_plausible_page_size() {
        let source = HostPageSource::new().unwrap();
        let size = source.page_size();
        assert!(size >= 512);
        assert!(size.is_power_of_two());
    }

    #[test]
    fn host_source_acquires_a_zeroed_page() {
        let mut source = HostPageSource::new().unwrap();
        let buf = source.acquire().unwrap();
        assert_eq!(buf.len(), source.page_size());
        assert!(buf.as_slice().iter().all(|&b| b == 0));
    }

    #[test]
    fn host_pages_are_page_aligned() {
        let mut source = HostPageSource::new().unwrap();
        let buf = source.acquire().unwrap();
        let addr = buf.as_slice().as_ptr() as usize;
        assert_eq!(addr % source.page_size(), 0);
    }

    #[test]
    fn owned_buf_is_zeroed_and_writable() {
        let mut buf = PageBuf::owned(128);
        assert_eq!(buf.len(), 128);
        assert!(buf.as_slice().iter().all(|&b| b == 0));
        buf.as_mut_slice()[0] = 0xAB;
        assert_eq!(buf.as_slice()[0], 0xAB);
    }
}
