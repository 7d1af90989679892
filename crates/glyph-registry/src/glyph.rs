//! Glyph records
//!
//! A [`Glyph`] is one registered asset. A [`GlyphDraft`] carries the
//! user-editable fields of a glyph before the store assigns (or keeps) its id.

use crate::error::RegistryError;
use crate::glyph_type::GlyphType;
use crate::text;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// Store-assigned glyph identifier
///
/// Positive, unique within a store, and never reused for a new glyph while
/// a larger id is still present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GlyphId(pub u64);

impl GlyphId {
    /// First id handed out by an empty store
    pub const FIRST: GlyphId = GlyphId(1);

    /// Raw numeric value
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id following this one, or `None` once ids run out
    #[inline]
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl Display for GlyphId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GlyphId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u64> for GlyphId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A registered asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// Store-assigned identifier
    pub id: GlyphId,
    /// Display name
    pub name: String,
    /// Asset category
    pub kind: GlyphType,
    /// Location of the asset; unique per store (trim + case-insensitive)
    pub path: String,
    /// Size in megabytes, `>= 0`
    pub size_mb: f64,
    /// Free-form grouping tag, stored with original casing
    pub tag: String,
}

impl Glyph {
    /// Build a glyph from a draft and an id
    #[must_use]
    pub fn from_draft(id: GlyphId, draft: GlyphDraft) -> Self {
        Self {
            id,
            name: draft.name,
            kind: draft.kind,
            path: draft.path,
            size_mb: draft.size_mb,
            tag: draft.tag,
        }
    }

    /// Overwrite every mutable field; `id` is untouched
    pub(crate) fn apply(&mut self, draft: GlyphDraft) {
        self.name = draft.name;
        self.kind = draft.kind;
        self.path = draft.path;
        self.size_mb = draft.size_mb;
        self.tag = draft.tag;
    }

    /// Normalized path key used for uniqueness checks
    #[inline]
    #[must_use]
    pub fn path_key(&self) -> String {
        text::normalize(&self.path)
    }

    /// Normalized tag key used for filtering and grouping
    #[inline]
    #[must_use]
    pub fn tag_key(&self) -> String {
        text::normalize(&self.tag)
    }
}

impl Display for Glyph {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | {} | {} | {} MB | {}",
            self.id, self.name, self.kind, self.path, self.size_mb, self.tag
        )
    }
}

/// Validated candidate fields for `add` and `update`
///
/// Name, path and tag must be non-empty after trimming; size must be a
/// finite number `>= 0`. Values are stored as given.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphDraft {
    name: String,
    kind: GlyphType,
    path: String,
    size_mb: f64,
    tag: String,
}

impl GlyphDraft {
    /// Validate and build a draft
    ///
    /// # Errors
    /// - [`RegistryError::EmptyField`] if name, path or tag is blank
    /// - [`RegistryError::NegativeSize`] if size is negative, NaN or infinite
    pub fn new(
        name: impl Into<String>,
        kind: GlyphType,
        path: impl Into<String>,
        size_mb: f64,
        tag: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        let path = path.into();
        let tag = tag.into();

        if text::trim(&name).is_empty() {
            return Err(RegistryError::EmptyField("name"));
        }
        if text::trim(&path).is_empty() {
            return Err(RegistryError::EmptyField("path"));
        }
        if text::trim(&tag).is_empty() {
            return Err(RegistryError::EmptyField("tag"));
        }
        if !size_mb.is_finite() || size_mb < 0.0 {
            return Err(RegistryError::NegativeSize(size_mb));
        }

        Ok(Self {
            name,
            kind,
            path,
            size_mb,
            tag,
        })
    }

    /// Name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category
    #[inline]
    #[must_use]
    pub fn kind(&self) -> GlyphType {
        self.kind
    }

    /// Path as entered
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Size in megabytes
    #[inline]
    #[must_use]
    pub fn size_mb(&self) -> f64 {
        self.size_mb
    }

    /// Tag as entered
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Normalized path key
    #[inline]
    #[must_use]
    pub fn path_key(&self) -> String {
        text::normalize(&self.path)
    }
}

impl From<&Glyph> for GlyphDraft {
    fn from(glyph: &Glyph) -> Self {
        Self {
            name: glyph.name.clone(),
            kind: glyph.kind,
            path: glyph.path.clone(),
            size_mb: glyph.size_mb,
            tag: glyph.tag.clone(),
        }
    }
}
