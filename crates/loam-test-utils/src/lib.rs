//! Test utilities for loam development.
//!
//! Provides [`StubPageSource`], a deterministic [`PageSource`] double:
//! fixed page size, plain heap buffers, and an optional page limit for
//! injecting out-of-memory conditions at an exact point in a test.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use loam_core::AcquireError;
use loam_pool::{PageBuf, PageSource};

/// Deterministic page source for tests.
///
/// Hands out zeroed heap buffers of a caller-chosen page size. With a
/// page limit set, acquisition fails with
/// [`AcquireError::OutOfMemory`] once the limit is reached, which is
/// how tests exercise the no-mutation-on-OOM contract.
pub struct StubPageSource {
    page_size: usize,
    limit: Option<usize>,
    acquired: usize,
}

impl StubPageSource {
    /// A source with unlimited pages of `page_size` bytes.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            limit: None,
            acquired: 0,
        }
    }

    /// Refuse acquisition after `limit` pages have been handed out.
    pub fn with_page_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Number of pages handed out so far.
    pub fn acquired(&self) -> usize {
        self.acquired
    }
}

impl PageSource for StubPageSource {
    fn page_size(&self) -> usize {
        self.page_size
    }

    fn acquire(&mut self) -> Result<PageBuf, AcquireError> {
        if let Some(limit) = self.limit {
            if self.acquired >= limit {
                return Err(AcquireError::OutOfMemory {
                    requested: self.page_size,
                    reason: format!("stub page limit of {limit} reached"),
                });
            }
        }
        self.acquired += 1;
        Ok(PageBuf::owned(self.page_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_counts_acquisitions() {
        let mut source = StubPageSource::new(4096);
        assert_eq!(source.acquired(), 0);
        source.acquire().unwrap();
        source.acquire().unwrap();
        assert_eq!(source.acquired(), 2);
    }

    #[test]
    fn stub_enforces_its_page_limit() {
        let mut source = StubPageSource::new(4096).with_page_limit(1);
        assert!(source.acquire().is_ok());
        let err = source.acquire().unwrap_err();
        assert!(matches!(err, AcquireError::OutOfMemory { requested: 4096, .. }));
        assert_eq!(source.acquired(), 1);
    }
}
