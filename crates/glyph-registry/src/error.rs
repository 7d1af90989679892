//! Error types for the glyph registry
//!
//! Provides error handling for:
//! - Type parsing (user-supplied category strings)
//! - Store mutations (duplicate paths, unknown ids, invalid drafts)
//! - Line decoding in the codec
//! - File load/save in the persistence gateway
//!
//! No variant is fatal: every failing operation leaves the store as it was.

use crate::glyph::GlyphId;
use std::path::PathBuf;

/// Main registry error type
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Category string is not one of the canonical names
    #[error("invalid glyph type: '{0}'")]
    InvalidType(String),

    /// Normalized path already used by another glyph
    #[error("path already in use: '{0}'")]
    DuplicatePath(String),

    /// No glyph carries this id
    #[error("glyph not found: {0}")]
    NotFound(GlyphId),

    /// Required text field is empty after trimming
    #[error("field must not be empty: {0}")]
    EmptyField(&'static str),

    /// Size is negative or not a finite number
    #[error("size must be a finite number >= 0, got {0}")]
    NegativeSize(f64),

    /// Largest id already in use, no id left to assign
    #[error("no glyph id left after {0}")]
    IdExhausted(GlyphId),

    /// Persistence failure
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl RegistryError {
    /// Check if error came from the persistence layer
    #[inline]
    #[must_use]
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if error is a rejected field value (fixable by re-entering input)
    #[inline]
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidType(_) | Self::EmptyField(_) | Self::NegativeSize(_) | Self::DuplicatePath(_)
        )
    }
}

/// Errors during file load/save
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// File could not be opened, read or written
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line could not be decoded
    #[error("malformed record on line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// Loaded records break a collection invariant (strict load only)
    #[error("inconsistent data: {0}")]
    Inconsistent(String),
}

impl StorageError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create malformed-record error for a 1-based line number
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

/// Errors from decoding a single line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Leading token is not an integer id; no more records follow
    #[error("end of data")]
    EndOfData,

    /// One of the fields after the id is missing or unreadable
    #[error("malformed record: {0}")]
    Malformed(String),
}
