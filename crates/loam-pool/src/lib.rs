//! Virtual memory page pool for the loam page-family memory manager.
//!
//! Provides the page-granularity storage layer: a [`PageSource`] supplies
//! whole OS pages, a [`VmPage`] subdivides one page into family
//! descriptors and instance slots with bump-cursor accounting, and a
//! [`PagePool`] keeps every acquired page in a deterministic,
//! newest-first order.
//!
//! This crate is the only one in the workspace that may contain `unsafe`
//! code, confined to the single `sysconf` call in [`source`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod page;
pub mod pool;
pub mod source;

pub use page::{FamilyRecord, VmPage, FAMILY_DESC_BYTES, FAMILY_NAME_BYTES};
pub use pool::{FamilyInfo, PagePool};
pub use source::{HostPageSource, PageBuf, PageSource};
