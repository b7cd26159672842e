//! Strongly-typed identifiers.

use std::fmt;

/// Identifies one virtual memory page within a pool.
///
/// Pages are numbered in acquisition order starting at 1, so the ID
/// doubles as a stable, human-meaningful handle in diagnostics ("page #1"
/// is always the first page the pool ever acquired). IDs are never
/// reused within a pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub u32);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PageId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
