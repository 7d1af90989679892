//! Read-only queries over a glyph snapshot
//!
//! Every function returns a new vector in collection order and leaves the
//! input untouched.

use crate::glyph::Glyph;
use crate::glyph_type::GlyphType;
use crate::text;

/// Case-insensitive substring match on `name`
///
/// The keyword is trimmed first; an empty keyword matches every glyph.
#[must_use]
pub fn search_by_name(glyphs: &[Glyph], keyword: &str) -> Vec<Glyph> {
    let key = text::normalize(keyword);
    glyphs
        .iter()
        .filter(|g| text::fold_case(&g.name).contains(&key))
        .cloned()
        .collect()
}

/// Glyphs of exactly this type
#[must_use]
pub fn filter_by_type(glyphs: &[Glyph], kind: GlyphType) -> Vec<Glyph> {
    glyphs.iter().filter(|g| g.kind == kind).cloned().collect()
}

/// Glyphs whose tag equals `tag` after trim + case-fold on both sides
#[must_use]
pub fn filter_by_tag(glyphs: &[Glyph], tag: &str) -> Vec<Glyph> {
    let key = text::normalize(tag);
    glyphs.iter().filter(|g| g.tag_key() == key).cloned().collect()
}
