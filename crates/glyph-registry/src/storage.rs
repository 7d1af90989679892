//! Persistence gateway
//!
//! Loads and saves a whole glyph collection through the line [`codec`].
//! Each call opens its own file handle and drops it before returning, on
//! success and on failure alike.
//!
//! [`codec`]: crate::codec

use crate::codec::{decode_record, encode_record};
use crate::error::{DecodeError, RegistryError, StorageError};
use crate::glyph::Glyph;
use crate::store::GlyphStore;
use crate::text;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write every glyph, in order, one line each
///
/// The file is created or truncated. An empty slice produces an empty file.
///
/// # Errors
/// Returns [`StorageError::Io`] if the file cannot be opened or written.
pub fn save(glyphs: &[Glyph], path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| StorageError::io_error(path, e))?;
    let mut out = BufWriter::new(file);

    for glyph in glyphs {
        writeln!(out, "{}", encode_record(glyph)).map_err(|e| StorageError::io_error(path, e))?;
    }
    out.flush().map_err(|e| StorageError::io_error(path, e))?;

    tracing::info!("Saved {} glyphs to {}", glyphs.len(), path.display());
    Ok(())
}

/// Read glyphs until the data ends
///
/// Blank lines are skipped. A line whose first token is not an integer id
/// ends the data; anything after it is ignored. Uniqueness of ids and paths
/// is not checked, see [`load_validated`] for that.
///
/// # Errors
/// - [`StorageError::Io`] if the file cannot be opened or read
/// - [`StorageError::Malformed`] if a record line cannot be decoded
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Glyph>, StorageError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| StorageError::io_error(path, e))?;
    let reader = BufReader::new(file);

    let mut glyphs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| StorageError::io_error(path, e))?;
        if line.trim().is_empty() {
            continue;
        }

        match decode_record(&line) {
            Ok(glyph) => {
                tracing::debug!("Decoded glyph {} from line {}", glyph.id, idx + 1);
                glyphs.push(glyph);
            }
            Err(DecodeError::EndOfData) => {
                tracing::debug!("End of data at line {}", idx + 1);
                break;
            }
            Err(DecodeError::Malformed(reason)) => {
                tracing::warn!("Malformed record in {} at line {}: {}", path.display(), idx + 1, reason);
                return Err(StorageError::malformed(idx + 1, reason));
            }
        }
    }

    tracing::info!("Loaded {} glyphs from {}", glyphs.len(), path.display());
    Ok(glyphs)
}

/// [`load`], then reject data that breaks a collection invariant
///
/// # Errors
/// Everything [`load`] returns, plus [`StorageError::Inconsistent`] for a
/// duplicate id, a duplicate normalized path, or a negative size.
pub fn load_validated(path: impl AsRef<Path>) -> Result<Vec<Glyph>, StorageError> {
    let glyphs = load(path)?;
    check_invariants(&glyphs)?;
    Ok(glyphs)
}

/// Check id uniqueness, path uniqueness and non-negative sizes
///
/// # Errors
/// Returns [`StorageError::Inconsistent`] describing the first violation.
pub fn check_invariants(glyphs: &[Glyph]) -> Result<(), StorageError> {
    let mut ids = HashSet::with_capacity(glyphs.len());
    let mut paths = HashSet::with_capacity(glyphs.len());

    for glyph in glyphs {
        if !ids.insert(glyph.id) {
            return Err(StorageError::Inconsistent(format!("duplicate id {}", glyph.id)));
        }
        if !paths.insert(text::normalize(&glyph.path)) {
            return Err(StorageError::Inconsistent(format!(
                "duplicate path '{}'",
                glyph.path
            )));
        }
        if glyph.size_mb < 0.0 {
            return Err(StorageError::Inconsistent(format!(
                "negative size {} on glyph {}",
                glyph.size_mb, glyph.id
            )));
        }
    }
    Ok(())
}

impl GlyphStore {
    /// Save the whole collection to `path`
    ///
    /// # Errors
    /// Returns [`RegistryError::Storage`] if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), RegistryError> {
        save(self.list(), path)?;
        Ok(())
    }

    /// Replace the whole collection with the contents of `path`
    ///
    /// On failure the store is left exactly as it was. Returns the number of
    /// glyphs loaded.
    ///
    /// # Errors
    /// Returns [`RegistryError::Storage`] on IO or decode failure.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<usize, RegistryError> {
        let glyphs = load(path)?;
        Ok(self.install(glyphs))
    }

    /// Like [`load_from`](Self::load_from) but also checks the invariants
    ///
    /// # Errors
    /// Returns [`RegistryError::Storage`] on IO, decode or consistency failure.
    pub fn load_validated_from(&mut self, path: impl AsRef<Path>) -> Result<usize, RegistryError> {
        let glyphs = load_validated(path)?;
        Ok(self.install(glyphs))
    }

    fn install(&mut self, glyphs: Vec<Glyph>) -> usize {
        let count = glyphs.len();
        self.replace_all(glyphs);
        count
    }
}
