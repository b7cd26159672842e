//! The pool of acquired virtual memory pages.
//!
//! Pages are kept newest-first: a freshly acquired page becomes the
//! traversal head, matching the prepend-to-head discipline of the
//! classic linked page list. Traversal is deterministic, so placement
//! scans and diagnostics are reproducible run to run.

use log::debug;
use loam_core::PageId;

use crate::page::VmPage;
use crate::source::PageBuf;

/// Identity and size of one registered family, as reported by
/// enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FamilyInfo<'a> {
    /// Registered structure name.
    pub name: &'a str,
    /// Per-instance size in bytes.
    pub struct_size: u32,
    /// The page hosting this family's descriptor and first slot.
    pub page: PageId,
}

/// Ordered collection of every page acquired so far.
pub struct PagePool {
    /// Head-first: `pages[0]` is the most recently acquired page.
    pages: Vec<VmPage>,
    next_id: u32,
}

impl PagePool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of pages acquired so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether the pool holds no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Pages in traversal order (newest first).
    pub fn pages(&self) -> impl Iterator<Item = &VmPage> {
        self.pages.iter()
    }

    /// First page in traversal order with room for a new family of
    /// `struct_size` bytes.
    pub fn page_with_room(&mut self, struct_size: usize) -> Option<&mut VmPage> {
        self.pages.iter_mut().find(|p| p.can_host(struct_size))
    }

    /// Adopt an acquired buffer as the new head page.
    ///
    /// The page is assigned the next sequential [`PageId`] and becomes
    /// the first page visited by scans and enumeration.
    pub fn prepend(&mut self, buf: PageBuf) -> &mut VmPage {
        let id = PageId(self.next_id);
        self.next_id += 1;
        debug!("pool adopted page #{id} ({} bytes)", buf.len());
        self.pages.insert(0, VmPage::new(id, buf));
        &mut self.pages[0]
    }

    /// Every hosted family in deterministic order: head-first over
    /// pages, registration order within each page.
    pub fn families(&self) -> impl Iterator<Item = FamilyInfo<'_>> {
        self.pages.iter().flat_map(|page| {
            page.families().map(|record| FamilyInfo {
                name: &record.name,
                struct_size: record.struct_size,
                page: page.id(),
            })
        })
    }

    /// Total number of hosted families across all pages.
    pub fn family_count(&self) -> usize {
        self.pages.iter().map(|p| p.family_count()).sum()
    }

    /// Total bytes held by the pool (page count times page size).
    pub fn memory_bytes(&self) -> usize {
        self.pages.iter().map(|p| p.capacity()).sum()
    }
}

impl Default for PagePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool_with_pages(n: usize, capacity: usize) -> PagePool {
        let mut pool = PagePool::new();
        for _ in 0..n {
            pool.prepend(PageBuf::owned(capacity));
        }
        pool
    }

    #[test]
    fn empty_pool_enumerates_nothing() {
        let pool = PagePool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.families().count(), 0);
    }

    #[test]
    fn prepend_assigns_sequential_ids_and_moves_head() {
        let pool = pool_with_pages(3, 4096);
        let ids: Vec<_> = pool.pages().map(|p| p.id().0).collect();
        // Newest page (#3) is the head.
        assert_eq!(ids, [3, 2, 1]);
    }

    #[test]
    fn page_with_room_prefers_the_head() {
        let mut pool = pool_with_pages(2, 4096);
        let id = pool.page_with_room(64).unwrap().id();
        assert_eq!(id, PageId(2));
    }

    #[test]
    fn page_with_room_skips_full_pages() {
        let mut pool = PagePool::new();
        pool.prepend(PageBuf::owned(4096));
        {
            let head = pool.page_with_room(4000).unwrap();
            head.host_family("Big", 4000).unwrap();
        }
        pool.prepend(PageBuf::owned(4096));
        pool.pages
            .iter_mut()
            .find(|p| p.id() == PageId(2))
            .unwrap()
            .host_family("Filler", 4000)
            .unwrap();

        // Both pages are nearly full; only small requests fit nowhere.
        assert!(pool.page_with_room(200).is_none());
    }

    #[test]
    fn families_attribute_to_their_hosting_page() {
        let mut pool = PagePool::new();
        pool.prepend(PageBuf::owned(4096))
            .host_family("Node", 48)
            .unwrap();
        pool.prepend(PageBuf::owned(4096))
            .host_family("Edge", 16)
            .unwrap();

        let infos: Vec<_> = pool.families().collect();
        assert_eq!(infos.len(), 2);
        // Head page (#2) hosts "Edge" and is enumerated first.
        assert_eq!(infos[0].name, "Edge");
        assert_eq!(infos[0].page, PageId(2));
        assert_eq!(infos[1].name, "Node");
        assert_eq!(infos[1].page, PageId(1));
    }

    #[test]
    fn enumeration_is_restartable() {
        let mut pool = PagePool::new();
        pool.prepend(PageBuf::owned(4096))
            .host_family("Node", 48)
            .unwrap();
        let first: Vec<_> = pool.families().collect();
        let second: Vec<_> = pool.families().collect();
        assert_eq!(first, second);
    }
}
