//! Error types for the loam memory manager, organized by subsystem:
//! bootstrap (page-size discovery), page acquisition, and registration.
//!
//! Recoverable conditions and contract violations share the `Result`
//! channel but are distinguishable: callers that want the strict
//! abort-on-misuse behavior check [`RegisterError::is_contract_violation`]
//! and panic, while libraries can propagate everything uniformly.

use std::error::Error;
use std::fmt;

/// Errors from one-time bootstrap of a host-backed page source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootstrapError {
    /// The host reported no usable page granularity. The manager cannot
    /// operate without one; this is a fatal environment error.
    PageSizeUnavailable,
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageSizeUnavailable => {
                write!(f, "host page size could not be determined")
            }
        }
    }
}

impl Error for BootstrapError {}

/// Errors from acquiring a page from a page source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AcquireError {
    /// The source could not supply a page.
    OutOfMemory {
        /// Number of bytes requested (one system page).
        requested: usize,
        /// Human-readable description of the underlying failure.
        reason: String,
    },
}

impl fmt::Display for AcquireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { requested, reason } => {
                write!(f, "out of memory acquiring a {requested}-byte page: {reason}")
            }
        }
    }
}

impl Error for AcquireError {}

/// Errors from registering a structure as a new page family.
///
/// All variants are all-or-nothing: a failed registration leaves the
/// pool and the registry exactly as they were.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterError {
    /// The structure name was empty.
    EmptyName,
    /// The structure name does not fit the fixed-width on-page
    /// descriptor field.
    NameTooLong {
        /// The offending name.
        name: String,
        /// Maximum accepted length in bytes.
        max: usize,
    },
    /// The structure size was zero.
    ZeroSize {
        /// Name of the structure being registered.
        name: String,
    },
    /// The structure can never be hosted: its descriptor plus one
    /// instance slot exceeds a whole page.
    SizeExceedsPage {
        /// Name of the structure being registered.
        name: String,
        /// Requested per-instance size in bytes.
        requested: usize,
        /// The system page size in bytes.
        page_size: usize,
    },
    /// A family with this name is already registered. Registering the
    /// same name twice would alias two type descriptors onto one
    /// storage region, so this is a caller contract violation rather
    /// than a runtime condition; see
    /// [`is_contract_violation`](Self::is_contract_violation).
    DuplicateFamily {
        /// The already-registered name.
        name: String,
    },
    /// The page source could not supply a fresh page for the family.
    OutOfMemory(AcquireError),
}

impl RegisterError {
    /// Whether this error indicates a programming error in the caller
    /// rather than a recoverable runtime condition.
    ///
    /// Strict callers abort on these; there is nothing sensible to
    /// retry.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::DuplicateFamily { .. })
    }
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "structure name is empty"),
            Self::NameTooLong { name, max } => {
                write!(f, "structure name '{name}' exceeds {max} bytes")
            }
            Self::ZeroSize { name } => {
                write!(f, "structure '{name}' has zero size")
            }
            Self::SizeExceedsPage {
                name,
                requested,
                page_size,
            } => {
                write!(
                    f,
                    "structure '{name}' ({requested} bytes) cannot be hosted in a \
                     {page_size}-byte page"
                )
            }
            Self::DuplicateFamily { name } => {
                write!(f, "page family '{name}' is already registered")
            }
            Self::OutOfMemory(inner) => {
                write!(f, "page family registration failed: {inner}")
            }
        }
    }
}

impl Error for RegisterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfMemory(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<AcquireError> for RegisterError {
    fn from(e: AcquireError) -> Self {
        Self::OutOfMemory(e)
    }
}
