//! Glyph type taxonomy
//!
//! Closed set of asset categories with one canonical lowercase string each.

use crate::error::RegistryError;
use crate::text;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Asset category
///
/// `Other` is a regular, explicitly selectable category. It is also what
/// [`GlyphType::decode_lenient`] falls back to for strings it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphType {
    /// 3D model / mesh
    Model,
    /// Image or texture map
    Texture,
    /// Sound or music
    Audio,
    /// Source script
    Script,
    /// GPU shader program
    Shader,
    /// Material definition
    Material,
    /// Animation clip
    Animation,
    /// Anything else
    Other,
}

impl GlyphType {
    /// Every variant, in declaration order
    pub const ALL: [GlyphType; 8] = [
        GlyphType::Model,
        GlyphType::Texture,
        GlyphType::Audio,
        GlyphType::Script,
        GlyphType::Shader,
        GlyphType::Material,
        GlyphType::Animation,
        GlyphType::Other,
    ];

    /// Canonical lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GlyphType::Model => "model",
            GlyphType::Texture => "texture",
            GlyphType::Audio => "audio",
            GlyphType::Script => "script",
            GlyphType::Shader => "shader",
            GlyphType::Material => "material",
            GlyphType::Animation => "animation",
            GlyphType::Other => "other",
        }
    }

    /// Strict parse of user input
    ///
    /// Input is trimmed and case-folded, then must equal one of the
    /// canonical names.
    ///
    /// # Errors
    /// Returns [`RegistryError::InvalidType`] for anything else.
    pub fn parse(input: &str) -> Result<Self, RegistryError> {
        let key = text::normalize(input);
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == key)
            .ok_or_else(|| RegistryError::InvalidType(input.to_string()))
    }

    /// Storage-side decode: unknown strings become [`GlyphType::Other`]
    #[inline]
    #[must_use]
    pub fn decode_lenient(input: &str) -> Self {
        Self::parse(input).unwrap_or(GlyphType::Other)
    }

    /// Slash-separated list of canonical names, for prompts and help text
    #[must_use]
    pub fn choices() -> String {
        Self::ALL.map(Self::as_str).join("/")
    }
}

impl Display for GlyphType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GlyphType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_round_trips_through_its_name() {
        for ty in GlyphType::ALL {
            assert_eq!(GlyphType::parse(ty.as_str()).unwrap(), ty);
        }
    }

    #[test]
    fn canonical_names_are_distinct() {
        let mut names: Vec<&str> = GlyphType::ALL.iter().map(|t| t.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), GlyphType::ALL.len());
    }

    #[test]
    fn parse_normalizes_input() {
        assert_eq!(GlyphType::parse("  TeXture ").unwrap(), GlyphType::Texture);
        assert_eq!("ANIMATION".parse::<GlyphType>().unwrap(), GlyphType::Animation);
    }

    #[test]
    fn parse_accepts_explicit_other() {
        assert_eq!(GlyphType::parse("other").unwrap(), GlyphType::Other);
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = GlyphType::parse("mystery").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidType(ref s) if s == "mystery"));
        assert!(GlyphType::parse("").is_err());
    }

    #[test]
    fn lenient_decode_falls_back_to_other() {
        assert_eq!(GlyphType::decode_lenient("mystery"), GlyphType::Other);
        assert_eq!(GlyphType::decode_lenient("shader"), GlyphType::Shader);
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(GlyphType::Material.to_string(), "material");
    }

    #[test]
    fn choices_lists_all_names() {
        assert_eq!(
            GlyphType::choices(),
            "model/texture/audio/script/shader/material/animation/other"
        );
    }
}
