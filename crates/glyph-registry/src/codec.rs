//! Line codec for glyph records
//!
//! One glyph per line, six space-separated fields:
//!
//! ```text
//! id "name" "type" "path" size_mb "tag"
//! ```
//!
//! Text fields are wrapped in double quotes; `"` and `\` inside them are
//! escaped with a backslash, and line breaks are written as `\n` and `\r` so
//! a record never spans lines. Every other character is written verbatim, so
//! names and paths may contain spaces, tabs or non-ASCII text.
//!
//! The id must be a positive integer. A first token that is not an integer at
//! all marks the end of the data; an integer that is zero, negative or too
//! large for an id is malformed.
//!
//! Decoding is lenient about the type field: a name that is not one of the
//! canonical categories decodes to [`GlyphType::Other`].

use crate::error::DecodeError;
use crate::glyph::{Glyph, GlyphId};
use crate::glyph_type::GlyphType;
use std::fmt::Write as _;

const QUOTE: char = '"';
const ESCAPE: char = '\\';

/// Encode one glyph as a single line (without trailing newline)
#[must_use]
pub fn encode_record(glyph: &Glyph) -> String {
    let mut line = String::with_capacity(
        glyph.name.len() + glyph.path.len() + glyph.tag.len() + 48,
    );
    // Writing into a String cannot fail.
    let _ = write!(line, "{} ", glyph.id);
    push_quoted(&mut line, &glyph.name);
    line.push(' ');
    push_quoted(&mut line, glyph.kind.as_str());
    line.push(' ');
    push_quoted(&mut line, &glyph.path);
    let _ = write!(line, " {} ", glyph.size_mb);
    push_quoted(&mut line, &glyph.tag);
    line
}

/// Quote and escape a single text field
#[must_use]
pub fn quote(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    push_quoted(&mut out, field);
    out
}

fn push_quoted(out: &mut String, field: &str) {
    out.push(QUOTE);
    for c in field.chars() {
        match c {
            QUOTE | ESCAPE => {
                out.push(ESCAPE);
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push(QUOTE);
}

/// Decode one line into a glyph
///
/// # Errors
/// - [`DecodeError::EndOfData`] if the first token is not an integer
/// - [`DecodeError::Malformed`] if the id is not positive, or any later field
///   is missing or unreadable
pub fn decode_record(line: &str) -> Result<Glyph, DecodeError> {
    let mut cursor = Cursor::new(line);

    let token = cursor.bare().ok_or(DecodeError::EndOfData)?;
    let id = decode_id(token)?;

    let name = cursor.quoted("name")?;
    let kind = GlyphType::decode_lenient(&cursor.quoted("type")?);
    let path = cursor.quoted("path")?;
    let size_mb = cursor.size()?;
    let tag = cursor.quoted("tag")?;

    if !cursor.at_end() {
        return Err(DecodeError::Malformed(
            "unexpected content after tag".to_string(),
        ));
    }

    Ok(Glyph {
        id,
        name,
        kind,
        path,
        size_mb,
        tag,
    })
}

fn decode_id(token: &str) -> Result<GlyphId, DecodeError> {
    let value: i128 = token.parse().map_err(|_| DecodeError::EndOfData)?;
    match u64::try_from(value) {
        Ok(id) if id > 0 => Ok(GlyphId(id)),
        _ => Err(DecodeError::Malformed(format!("id out of range: {value}"))),
    }
}

/// Whitespace-separated token reader over one line
struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start();
    }

    fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.rest.is_empty()
    }

    /// Next unquoted token, or `None` at end of line
    fn bare(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .find(char::is_whitespace)
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }

    fn size(&mut self) -> Result<f64, DecodeError> {
        let token = self
            .bare()
            .ok_or_else(|| DecodeError::Malformed("missing size".to_string()))?;
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(DecodeError::Malformed(format!("invalid size: '{token}'"))),
        }
    }

    /// Next quoted field, unescaped
    fn quoted(&mut self, field: &'static str) -> Result<String, DecodeError> {
        self.skip_whitespace();

        let mut chars = self.rest.char_indices();
        match chars.next() {
            Some((_, QUOTE)) => {}
            Some(_) => {
                return Err(DecodeError::Malformed(format!(
                    "{field}: expected opening quote"
                )))
            }
            None => return Err(DecodeError::Malformed(format!("missing {field}"))),
        }

        let mut value = String::new();
        while let Some((idx, c)) = chars.next() {
            match c {
                ESCAPE => match chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 'r')) => value.push('\r'),
                    Some((_, escaped)) => value.push(escaped),
                    None => break,
                },
                QUOTE => {
                    self.rest = &self.rest[idx + QUOTE.len_utf8()..];
                    return Ok(value);
                }
                other => value.push(other),
            }
        }

        Err(DecodeError::Malformed(format!("{field}: unterminated quote")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyph(name: &str, kind: GlyphType, path: &str, size_mb: f64, tag: &str) -> Glyph {
        Glyph {
            id: GlyphId(1),
            name: name.to_string(),
            kind,
            path: path.to_string(),
            size_mb,
            tag: tag.to_string(),
        }
    }

    #[test]
    fn encode_plain_record() {
        let g = glyph("Rock01", GlyphType::Texture, "/a/rock.png", 12.5, "env");
        assert_eq!(
            encode_record(&g),
            r#"1 "Rock01" "texture" "/a/rock.png" 12.5 "env""#
        );
    }

    #[test]
    fn encode_escapes_quotes_and_backslashes() {
        let g = glyph(r#"say "hi""#, GlyphType::Audio, r"C:\sfx\hi.wav", 0.0, "ui");
        assert_eq!(
            encode_record(&g),
            r#"1 "say \"hi\"" "audio" "C:\\sfx\\hi.wav" 0 "ui""#
        );
    }

    #[test]
    fn quote_helper() {
        assert_eq!(quote("a b"), "\"a b\"");
        assert_eq!(quote(r#"\""#), r#""\\\"""#);
    }

    #[test]
    fn round_trip_with_awkward_text() {
        let g = glyph(
            r#"  two  spaces "quoted" \back\ "#,
            GlyphType::Shader,
            r#"/tmp/dir with space/"x"\y.glsl"#,
            0.1 + 0.2,
            "tag\twith\ttabs",
        );
        let decoded = decode_record(&encode_record(&g)).unwrap();
        assert_eq!(decoded, g);
    }

    #[test]
    fn round_trip_with_unicode() {
        let g = glyph("Stein", GlyphType::Model, "/modèles/石.obj", 3.0, "日本");
        assert_eq!(decode_record(&encode_record(&g)).unwrap(), g);
    }

    #[test]
    fn line_breaks_are_escaped_and_restored() {
        let g = glyph("line1\nline2", GlyphType::Model, "/p\r\n", 1.0, "a\\nb");
        let line = encode_record(&g);
        assert!(!line.contains('\n') && !line.contains('\r'));
        assert_eq!(line, r#"1 "line1\nline2" "model" "/p\r\n" 1 "a\\nb""#);
        assert_eq!(decode_record(&line).unwrap(), g);
    }

    #[test]
    fn non_positive_or_oversized_id_is_malformed() {
        for id in ["-2", "0", "18446744073709551616", "99999999999999999999"] {
            let line = format!(r#"{id} "n" "model" "/p" 1 "t""#);
            assert!(
                matches!(decode_record(&line), Err(DecodeError::Malformed(_))),
                "id {id}"
            );
        }
        let max = decode_record(r#"18446744073709551615 "n" "model" "/p" 1 "t""#).unwrap();
        assert_eq!(max.id, GlyphId(u64::MAX));
    }

    #[test]
    fn decode_unknown_type_is_other() {
        let g = decode_record(r#"5 "n" "mystery" "/p" 1 "t""#).unwrap();
        assert_eq!(g.kind, GlyphType::Other);
        assert_eq!(g.id, GlyphId(5));
    }

    #[test]
    fn decode_tolerates_extra_whitespace() {
        let g = decode_record("  2\t\"n\"   \"model\" \"/p\"  4.25 \"t\"  ").unwrap();
        assert_eq!(g.id, GlyphId(2));
        assert_eq!(g.kind, GlyphType::Model);
        assert!((g.size_mb - 4.25).abs() < f64::EPSILON);
    }

    #[test]
    fn decode_non_integer_id_is_end_of_data() {
        assert_eq!(decode_record(""), Err(DecodeError::EndOfData));
        assert_eq!(decode_record("   "), Err(DecodeError::EndOfData));
        assert_eq!(
            decode_record(r#"abc "n" "model" "/p" 1 "t""#),
            Err(DecodeError::EndOfData)
        );
    }

    #[test]
    fn decode_missing_fields_is_malformed() {
        assert!(matches!(decode_record("1"), Err(DecodeError::Malformed(_))));
        assert!(matches!(
            decode_record(r#"1 "n" "model" "/p""#),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(
            decode_record(r#"1 "n" "model" "/p" 2"#),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn decode_bad_size_is_malformed() {
        let err = decode_record(r#"1 "n" "model" "/p" big "t""#).unwrap_err();
        assert_eq!(err, DecodeError::Malformed("invalid size: 'big'".to_string()));
        assert!(decode_record(r#"1 "n" "model" "/p" inf "t""#).is_err());
    }

    #[test]
    fn decode_unterminated_quote_is_malformed() {
        assert!(matches!(
            decode_record(r#"1 "n" "model" "/p" 1 "t"#),
            Err(DecodeError::Malformed(_))
        ));
        assert!(matches!(
            decode_record(r#"1 "n\"#),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn decode_unquoted_field_is_malformed() {
        assert!(matches!(
            decode_record(r#"1 name "model" "/p" 1 "t""#),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn decode_trailing_content_is_malformed() {
        assert!(matches!(
            decode_record(r#"1 "n" "model" "/p" 1 "t" extra"#),
            Err(DecodeError::Malformed(_))
        ));
    }
}
