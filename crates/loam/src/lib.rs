//! Loam: a page-family heap memory manager.
//!
//! Loam lets a program register named, fixed-size structure types and
//! packs many families of them into whole OS pages, amortizing
//! page-acquisition cost instead of paying a general-purpose allocator
//! per object. This is the top-level facade crate re-exporting the
//! public API from the loam sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use loam::prelude::*;
//!
//! struct Node {
//!     _left: u64,
//!     _right: u64,
//!     _value: u64,
//! }
//!
//! // Bootstrap against the host: queries the OS page size once.
//! let mut mgr = MemoryManager::host().unwrap();
//!
//! // Register structure types as page families.
//! register_struct!(mgr, Node).unwrap();
//! mgr.register_structure("Edge", 16).unwrap();
//!
//! // Registering the same name twice is a contract violation.
//! let err = mgr.register_structure("Node", 64).unwrap_err();
//! assert!(err.is_contract_violation());
//!
//! // Enumerate what is registered, or print the full report.
//! for family in mgr.families() {
//!     println!("{} is {} bytes in page #{}", family.name, family.struct_size, family.page);
//! }
//! print!("{}", mgr.listing());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `loam-core` | `PageId`, error taxonomy |
//! | [`pool`] | `loam-pool` | Page source, `VmPage`, `PagePool` |
//! | [`registry`] | `loam-registry` | `MemoryManager`, listing, `register_struct!` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core IDs and error types (`loam-core`).
pub use loam_core as types;

/// Page acquisition and the virtual memory page pool (`loam-pool`).
///
/// Provides the [`pool::PageSource`] trait, the host-backed
/// [`pool::HostPageSource`], and the [`pool::PagePool`] that owns every
/// acquired page.
pub use loam_pool as pool;

/// Page family registry and bootstrap (`loam-registry`).
///
/// The [`registry::MemoryManager`] handle is the main entry point.
pub use loam_registry as registry;

pub use loam_registry::register_struct;

/// Common imports for typical loam usage.
///
/// ```rust
/// use loam::prelude::*;
/// ```
pub mod prelude {
    pub use loam_core::{AcquireError, BootstrapError, PageId, RegisterError};
    pub use loam_pool::{FamilyInfo, HostPageSource, PageSource};
    pub use loam_registry::{register_struct, MemoryManager, RegistryListing};
}
