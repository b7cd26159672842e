//! Core types for the loam page-family memory manager.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the strongly-typed identifiers and the error taxonomy shared by the
//! page pool and the registry.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{AcquireError, BootstrapError, RegisterError};
pub use id::PageId;
