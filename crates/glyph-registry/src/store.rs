//! Glyph store
//!
//! Provides [`GlyphStore`], the single owner of the ordered glyph collection.

use crate::error::RegistryError;
use crate::glyph::{Glyph, GlyphDraft, GlyphId};
use crate::text;

/// Ordered, owned collection of glyphs
///
/// # Invariants
/// - ids are distinct
/// - paths are distinct under trim + lowercase comparison
/// - every size is `>= 0`
/// - order is insertion order; no operation re-sorts
///
/// The backing vector is private: the only way to change the collection is
/// through [`add`](Self::add), [`update`](Self::update),
/// [`remove`](Self::remove) and a successful load.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GlyphStore {
    glyphs: Vec<Glyph>,
}

impl GlyphStore {
    /// Create new empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { glyphs: Vec::new() }
    }

    /// Add a glyph, assigning the next id
    ///
    /// The new id is `max(existing ids) + 1`, or `1` for an empty store.
    ///
    /// # Errors
    /// - [`RegistryError::DuplicatePath`] if another glyph already uses the
    ///   same normalized path
    /// - [`RegistryError::IdExhausted`] if a loaded glyph holds the largest
    ///   possible id
    ///
    /// The store is unchanged on error.
    pub fn add(&mut self, draft: GlyphDraft) -> Result<GlyphId, RegistryError> {
        if self.path_in_use(draft.path()) {
            tracing::warn!("Rejected add: path already in use: {}", draft.path());
            return Err(RegistryError::DuplicatePath(draft.path().to_string()));
        }

        let id = self.next_id()?;
        self.glyphs.push(Glyph::from_draft(id, draft));
        tracing::info!("Added glyph {}", id);
        Ok(id)
    }

    /// Next id to hand out
    ///
    /// # Errors
    /// Returns [`RegistryError::IdExhausted`] if the largest id has no successor.
    pub fn next_id(&self) -> Result<GlyphId, RegistryError> {
        match self.glyphs.iter().map(|g| g.id).max() {
            None => Ok(GlyphId::FIRST),
            Some(max) => max.next().ok_or_else(|| {
                tracing::warn!("Rejected add: ids exhausted after {}", max);
                RegistryError::IdExhausted(max)
            }),
        }
    }

    /// Position of the glyph with this id
    #[must_use]
    pub fn find_by_id(&self, id: GlyphId) -> Option<usize> {
        self.glyphs.iter().position(|g| g.id == id)
    }

    /// Borrow the glyph with this id
    #[inline]
    #[must_use]
    pub fn get(&self, id: GlyphId) -> Option<&Glyph> {
        self.find_by_id(id).map(|idx| &self.glyphs[idx])
    }

    /// Check if any glyph uses this path (trim + case-insensitive)
    #[must_use]
    pub fn path_in_use(&self, path: &str) -> bool {
        let key = text::normalize(path);
        self.glyphs.iter().any(|g| g.path_key() == key)
    }

    /// Replace every mutable field of a glyph in place
    ///
    /// Id and position are unchanged. Keeping the same path (under
    /// normalization) is always allowed.
    ///
    /// # Errors
    /// - [`RegistryError::NotFound`] if no glyph has this id
    /// - [`RegistryError::DuplicatePath`] if the new path belongs to another glyph
    pub fn update(&mut self, id: GlyphId, draft: GlyphDraft) -> Result<(), RegistryError> {
        let idx = self.find_by_id(id).ok_or_else(|| {
            tracing::warn!("Rejected update: glyph {} not found", id);
            RegistryError::NotFound(id)
        })?;

        let new_key = draft.path_key();
        if new_key != self.glyphs[idx].path_key() && self.path_in_use(draft.path()) {
            tracing::warn!("Rejected update of {}: path already in use: {}", id, draft.path());
            return Err(RegistryError::DuplicatePath(draft.path().to_string()));
        }

        self.glyphs[idx].apply(draft);
        tracing::info!("Updated glyph {}", id);
        Ok(())
    }

    /// Remove a glyph, keeping the order of the rest
    ///
    /// # Errors
    /// Returns [`RegistryError::NotFound`] if no glyph has this id.
    pub fn remove(&mut self, id: GlyphId) -> Result<Glyph, RegistryError> {
        let idx = self.find_by_id(id).ok_or_else(|| {
            tracing::warn!("Rejected remove: glyph {} not found", id);
            RegistryError::NotFound(id)
        })?;

        let removed = self.glyphs.remove(idx);
        tracing::info!("Removed glyph {}", id);
        Ok(removed)
    }

    /// Read-only view in current order
    #[inline]
    #[must_use]
    pub fn list(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Iterate in current order
    pub fn iter(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.iter()
    }

    /// Number of glyphs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Check if store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Swap in a freshly loaded collection (full overwrite)
    pub(crate) fn replace_all(&mut self, glyphs: Vec<Glyph>) {
        self.glyphs = glyphs;
    }
}

impl<'a> IntoIterator for &'a GlyphStore {
    type Item = &'a Glyph;
    type IntoIter = std::slice::Iter<'a, Glyph>;

    fn into_iter(self) -> Self::IntoIter {
        self.glyphs.iter()
    }
}
