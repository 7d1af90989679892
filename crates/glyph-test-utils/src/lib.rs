//! Testing utilities for the glyph workspace
//!
//! Shared test helpers and fixtures.

#![allow(missing_docs)]

use glyph_registry::{Glyph, GlyphDraft, GlyphId, GlyphStore, GlyphType};

pub fn draft(name: &str, kind: GlyphType, path: &str, size_mb: f64, tag: &str) -> GlyphDraft {
    GlyphDraft::new(name, kind, path, size_mb, tag).unwrap()
}

pub fn rock_draft() -> GlyphDraft {
    draft("Rock01", GlyphType::Texture, "/a/rock.png", 12.5, "env")
}

/// Store with three glyphs of different types and tags
pub fn sample_store() -> GlyphStore {
    let mut store = GlyphStore::new();
    store.add(rock_draft()).unwrap();
    store
        .add(draft("Hero", GlyphType::Model, "/m/hero.fbx", 40.0, "Char"))
        .unwrap();
    store
        .add(draft("Step \"left\"", GlyphType::Audio, "C:\\sfx\\step left.wav", 0.75, " sfx "))
        .unwrap();
    store
}

pub fn glyph(id: u64, name: &str, kind: GlyphType, path: &str, size_mb: f64, tag: &str) -> Glyph {
    Glyph::from_draft(GlyphId(id), draft(name, kind, path, size_mb, tag))
}

pub fn ids(store: &GlyphStore) -> Vec<u64> {
    store.iter().map(|g| g.id.get()).collect()
}
