//! Error types for tabulist-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabulist-core
///
/// Lookups that simply find nothing return `None` instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Insertion index past the end of the list
    #[error("Index {index} out of range for insertion (length: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Handle does not address a node currently linked into this list
    #[error("Node is not mapped into this list")]
    ForeignNode,
}
