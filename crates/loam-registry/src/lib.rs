//! Page family registry and bootstrap for the loam memory manager.
//!
//! The [`MemoryManager`] is the explicit handle tying everything
//! together: it captures the system page size once at construction,
//! owns the [`PagePool`](loam_pool::PagePool), and keeps the
//! insertion-ordered catalog of registered structure types. There is no
//! hidden process-wide state, so independent managers can coexist in
//! one process (and in one test).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod listing;
pub mod manager;

pub use listing::RegistryListing;
pub use manager::MemoryManager;

/// Register a structure type under its type name.
///
/// Expands to a [`MemoryManager::register_structure`] call with
/// `stringify!`-ed name and `size_of` size, so call sites register the
/// type itself rather than repeating its name and size:
///
/// ```
/// use loam_registry::{register_struct, MemoryManager};
/// use loam_test_utils::StubPageSource;
///
/// struct Node {
///     _left: u64,
///     _right: u64,
/// }
///
/// let mut mgr = MemoryManager::new(StubPageSource::new(4096));
/// register_struct!(mgr, Node).unwrap();
/// assert!(mgr.contains("Node"));
/// ```
#[macro_export]
macro_rules! register_struct {
    ($manager:expr, $ty:ty) => {
        $manager.register_structure(::core::stringify!($ty), ::core::mem::size_of::<$ty>())
    };
}
