//! The memory manager handle: bootstrap, registration, enumeration.

use indexmap::IndexMap;
use log::{debug, info};
use loam_core::{BootstrapError, PageId, RegisterError};
use loam_pool::{FamilyInfo, HostPageSource, PagePool, PageSource, FAMILY_DESC_BYTES, FAMILY_NAME_BYTES};

use crate::listing::RegistryListing;

/// Heap memory manager layering fixed-size structure families over
/// whole OS pages.
///
/// Construction is the bootstrap: the page size is read from the source
/// exactly once and every later capacity decision derives from it.
/// Registration is all-or-nothing — any error leaves the pool and the
/// catalog untouched.
pub struct MemoryManager<S: PageSource> {
    source: S,
    page_size: usize,
    pool: PagePool,
    /// Name catalog in registration order; values are the hosting page.
    /// The pool remains the source of truth for sizes and placement —
    /// this index only answers "is this name taken" and "which page"
    /// without a pool walk.
    index: IndexMap<String, PageId>,
}

impl MemoryManager<HostPageSource> {
    /// Bootstrap a manager against the host operating system.
    ///
    /// Queries the host page size; failure to determine it is fatal for
    /// the manager (there is no meaningful fallback granularity).
    pub fn host() -> Result<Self, BootstrapError> {
        Ok(Self::new(HostPageSource::new()?))
    }
}

impl<S: PageSource> MemoryManager<S> {
    /// Build a manager over an arbitrary page source.
    pub fn new(source: S) -> Self {
        let page_size = source.page_size();
        info!("memory manager bootstrapped, page size {page_size} bytes");
        Self {
            source,
            page_size,
            pool: PagePool::new(),
            index: IndexMap::new(),
        }
    }

    /// The system page size captured at bootstrap, in bytes.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The underlying page pool.
    pub fn pool(&self) -> &PagePool {
        &self.pool
    }

    /// Register a structure type as a new page family.
    ///
    /// Places the family's descriptor and one instance slot into the
    /// first pooled page with room, acquiring a fresh page from the
    /// source only when no existing page can host it. Returns the
    /// hosting page's ID.
    ///
    /// # Errors
    ///
    /// - [`RegisterError::EmptyName`], [`RegisterError::NameTooLong`],
    ///   [`RegisterError::ZeroSize`] — input validation.
    /// - [`RegisterError::SizeExceedsPage`] — the descriptor plus one
    ///   slot can never fit in a page. Recoverable; nothing is mutated.
    /// - [`RegisterError::DuplicateFamily`] — the name is already
    ///   registered. A caller contract violation
    ///   ([`RegisterError::is_contract_violation`]); strict callers
    ///   should abort.
    /// - [`RegisterError::OutOfMemory`] — the source could not supply a
    ///   page. Recoverable at the caller's discretion; no retry here.
    pub fn register_structure(
        &mut self,
        name: &str,
        struct_size: usize,
    ) -> Result<PageId, RegisterError> {
        if name.is_empty() {
            return Err(RegisterError::EmptyName);
        }
        if name.len() >= FAMILY_NAME_BYTES {
            return Err(RegisterError::NameTooLong {
                name: name.to_string(),
                max: FAMILY_NAME_BYTES - 1,
            });
        }
        if struct_size == 0 {
            return Err(RegisterError::ZeroSize {
                name: name.to_string(),
            });
        }
        if FAMILY_DESC_BYTES + struct_size > self.page_size {
            return Err(RegisterError::SizeExceedsPage {
                name: name.to_string(),
                requested: struct_size,
                page_size: self.page_size,
            });
        }
        if self.index.contains_key(name) {
            return Err(RegisterError::DuplicateFamily {
                name: name.to_string(),
            });
        }

        let size = struct_size as u32;
        let page_id = match self.pool.page_with_room(struct_size) {
            Some(page) => {
                page.host_family(name, size)
                    .expect("page_with_room guarantees the family fits");
                page.id()
            }
            None => {
                // Acquire before mutating anything so an OOM leaves the
                // pool exactly as it was.
                let buf = self.source.acquire()?;
                let page = self.pool.prepend(buf);
                page.host_family(name, size)
                    .expect("a fresh page fits any size that passed validation");
                page.id()
            }
        };

        self.index.insert(name.to_string(), page_id);
        debug!("registered family '{name}' ({struct_size} bytes) in page #{page_id}");
        Ok(page_id)
    }

    /// Whether a family with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Look up one registered family by name.
    pub fn lookup(&self, name: &str) -> Option<FamilyInfo<'_>> {
        let page_id = *self.index.get(name)?;
        self.pool
            .pages()
            .find(|p| p.id() == page_id)?
            .families()
            .find(|r| r.name == name)
            .map(|r| FamilyInfo {
                name: &r.name,
                struct_size: r.struct_size,
                page: page_id,
            })
    }

    /// Every registered family in deterministic order: newest page
    /// first, registration order within each page.
    ///
    /// Lazy and restartable — call again for a fresh traversal.
    /// Read-only: enumerating never changes pool or catalog state.
    pub fn families(&self) -> impl Iterator<Item = FamilyInfo<'_>> {
        self.pool.families()
    }

    /// Number of registered families.
    pub fn family_count(&self) -> usize {
        self.index.len()
    }

    /// Human-readable report of every page and the families it hosts.
    pub fn listing(&self) -> RegistryListing<'_> {
        RegistryListing::new(&self.pool)
    }
}
