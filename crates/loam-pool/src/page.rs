//! A single virtual memory page and the family descriptors it hosts.
//!
//! Each [`VmPage`] wraps one page-sized buffer and carves it up with a
//! bump cursor: hosting a family writes a fixed-width descriptor (name
//! field plus size) into the page bytes and reserves one instance slot
//! of the structure's size directly after it. Remaining capacity stays
//! available for further families, so several small structure types
//! share a page.

use loam_core::PageId;
use smallvec::SmallVec;

use crate::source::PageBuf;

/// Width of the on-page name field in bytes. Names must leave one byte
/// spare, so the longest accepted name is `FAMILY_NAME_BYTES - 1` bytes.
pub const FAMILY_NAME_BYTES: usize = 32;

/// On-page footprint of one family descriptor: the name field, a
/// little-endian `u32` structure size, and padding to 8-byte alignment.
pub const FAMILY_DESC_BYTES: usize = 40;

/// Bookkeeping for one family hosted in a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FamilyRecord {
    /// Registered structure name.
    pub name: String,
    /// Per-instance size in bytes.
    pub struct_size: u32,
    /// Byte offset of this family's descriptor within the page.
    pub offset: u32,
}

/// One page acquired from a [`PageSource`](crate::source::PageSource),
/// subdivided into family descriptors and instance slots.
pub struct VmPage {
    id: PageId,
    buf: PageBuf,
    /// Bump cursor: next free byte within the page.
    cursor: usize,
    families: SmallVec<[FamilyRecord; 4]>,
}

impl VmPage {
    /// Wrap an acquired buffer as an empty page.
    pub fn new(id: PageId, buf: PageBuf) -> Self {
        Self {
            id,
            buf,
            cursor: 0,
            families: SmallVec::new(),
        }
    }

    /// This page's identity.
    pub fn id(&self) -> PageId {
        self.id
    }

    /// Total page capacity in bytes (the system page size).
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes consumed by descriptors and reserved slots.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Bytes still free for further families.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.cursor
    }

    /// Whether a new family of `struct_size` bytes fits in the free
    /// region (descriptor plus one instance slot).
    pub fn can_host(&self, struct_size: usize) -> bool {
        FAMILY_DESC_BYTES + struct_size <= self.remaining()
    }

    /// Host a new family in this page.
    ///
    /// Writes the descriptor into the free region, reserves one
    /// instance slot after it, and records the family. Returns `None`
    /// without mutating anything if the family does not fit.
    ///
    /// `name` must be non-empty and shorter than [`FAMILY_NAME_BYTES`];
    /// the registry validates this before calling.
    pub fn host_family(&mut self, name: &str, struct_size: u32) -> Option<&FamilyRecord> {
        debug_assert!(!name.is_empty() && name.len() < FAMILY_NAME_BYTES);
        if !self.can_host(struct_size as usize) {
            return None;
        }

        let offset = self.cursor;
        let bytes = self.buf.as_mut_slice();
        // Pages arrive zeroed and descriptors are never overwritten, so
        // the tail of the name field is already NUL padding.
        bytes[offset..offset + name.len()].copy_from_slice(name.as_bytes());
        bytes[offset + FAMILY_NAME_BYTES..offset + FAMILY_NAME_BYTES + 4]
            .copy_from_slice(&struct_size.to_le_bytes());

        self.cursor = offset + FAMILY_DESC_BYTES + struct_size as usize;
        self.families.push(FamilyRecord {
            name: name.to_string(),
            struct_size,
            offset: offset as u32,
        });
        Some(self.families.last().expect("record just pushed"))
    }

    /// Families hosted in this page, in registration order.
    pub fn families(&self) -> impl Iterator<Item = &FamilyRecord> {
        self.families.iter()
    }

    /// Number of families hosted in this page.
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Shared view of the raw page bytes.
    pub fn bytes(&self) -> &[u8] {
        self.buf.as_slice()
    }
}
