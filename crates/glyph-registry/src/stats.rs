//! Aggregate statistics over a glyph snapshot

use crate::glyph::Glyph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary of a glyph collection
///
/// Map keys iterate in lexicographic order, so rendering is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlyphStats {
    /// Number of glyphs
    pub count: usize,
    /// Sum of all sizes in megabytes
    pub total_size_mb: f64,
    /// Canonical type name -> count (only types that occur)
    pub by_type: BTreeMap<String, usize>,
    /// Normalized tag -> count; blank tags count under `""`
    pub by_tag: BTreeMap<String, usize>,
}

impl GlyphStats {
    /// Check if stats describe an empty collection
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Compute count, total size and grouped counts
#[must_use]
pub fn compute_stats(glyphs: &[Glyph]) -> GlyphStats {
    let mut stats = GlyphStats {
        count: glyphs.len(),
        ..GlyphStats::default()
    };

    for glyph in glyphs {
        stats.total_size_mb += glyph.size_mb;
        *stats
            .by_type
            .entry(glyph.kind.as_str().to_string())
            .or_default() += 1;

        *stats.by_tag.entry(glyph.tag_key()).or_default() += 1;
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::GlyphId;
    use crate::glyph_type::GlyphType;

    fn glyph(id: u64, kind: GlyphType, size_mb: f64, tag: &str) -> Glyph {
        Glyph {
            id: GlyphId(id),
            name: format!("g{id}"),
            kind,
            path: format!("/p/{id}"),
            size_mb,
            tag: tag.to_string(),
        }
    }

    #[test]
    fn empty_collection() {
        let stats = compute_stats(&[]);
        assert!(stats.is_empty());
        assert_eq!(stats.total_size_mb, 0.0);
        assert!(stats.by_type.is_empty());
        assert!(stats.by_tag.is_empty());
    }

    #[test]
    fn single_texture_example() {
        let stats = compute_stats(&[glyph(1, GlyphType::Texture, 12.5, "env")]);
        assert_eq!(stats.count, 1);
        assert!((stats.total_size_mb - 12.5).abs() < f64::EPSILON);
        assert_eq!(stats.by_type, BTreeMap::from([("texture".to_string(), 1)]));
        assert_eq!(stats.by_tag, BTreeMap::from([("env".to_string(), 1)]));
    }

    #[test]
    fn groups_by_normalized_tag_and_type() {
        let stats = compute_stats(&[
            glyph(1, GlyphType::Texture, 1.0, "Env"),
            glyph(2, GlyphType::Model, 2.0, " env "),
            glyph(3, GlyphType::Texture, 3.5, "sfx"),
        ]);
        assert_eq!(stats.count, 3);
        assert!((stats.total_size_mb - 6.5).abs() < f64::EPSILON);
        assert_eq!(stats.by_type.get("texture"), Some(&2));
        assert_eq!(stats.by_type.get("model"), Some(&1));
        assert_eq!(stats.by_type.get("audio"), None);
        assert_eq!(stats.by_tag.get("env"), Some(&2));
        assert_eq!(stats.by_tag.get("sfx"), Some(&1));
    }

    #[test]
    fn blank_tags_share_empty_key() {
        let stats = compute_stats(&[
            glyph(1, GlyphType::Other, 0.0, "   "),
            glyph(2, GlyphType::Other, 0.0, ""),
            glyph(3, GlyphType::Other, 0.0, "(Empty)"),
        ]);
        assert_eq!(stats.by_tag.get(""), Some(&2));
        assert_eq!(stats.by_tag.get("(empty)"), Some(&1));
    }

    #[test]
    fn keys_are_sorted() {
        let stats = compute_stats(&[
            glyph(1, GlyphType::Texture, 0.0, "zeta"),
            glyph(2, GlyphType::Audio, 0.0, "alpha"),
        ]);
        let types: Vec<&String> = stats.by_type.keys().collect();
        let tags: Vec<&String> = stats.by_tag.keys().collect();
        assert_eq!(types, ["audio", "texture"]);
        assert_eq!(tags, ["alpha", "zeta"]);
    }
}
