//! Human-readable registry report.

use std::fmt;

use loam_pool::PagePool;

/// `Display` adapter listing every pooled page and the families it
/// hosts, in traversal order.
///
/// Produced by [`MemoryManager::listing`](crate::MemoryManager::listing).
/// Borrowing and read-only: formatting never mutates the pool.
///
/// ```text
/// page #2: 4096 bytes, 1 family, 3556 bytes free
///   Edge: 16 bytes
/// page #1: 4096 bytes, 2 families, 116 bytes free
///   Node: 48 bytes
///   List: 24 bytes
/// ```
pub struct RegistryListing<'a> {
    pool: &'a PagePool,
}

impl<'a> RegistryListing<'a> {
    pub(crate) fn new(pool: &'a PagePool) -> Self {
        Self { pool }
    }
}

impl fmt::Display for RegistryListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pool.is_empty() {
            return writeln!(f, "no page families registered");
        }
        for page in self.pool.pages() {
            writeln!(
                f,
                "page #{}: {} bytes, {} {}, {} bytes free",
                page.id(),
                page.capacity(),
                page.family_count(),
                if page.family_count() == 1 {
                    "family"
                } else {
                    "families"
                },
                page.remaining(),
            )?;
            for record in page.families() {
                writeln!(f, "  {}: {} bytes", record.name, record.struct_size)?;
            }
        }
        Ok(())
    }
}
