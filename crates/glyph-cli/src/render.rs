//! Presentation of glyphs and stats for the terminal

use glyph_registry::{Glyph, GlyphStats};
use std::io::{self, Write};

/// Label shown for the blank-tag bucket
const BLANK_TAG_LABEL: &str = "(empty)";

/// Print the whole store, or a note when it is empty
pub(crate) fn glyph_list(out: &mut impl Write, glyphs: &[Glyph]) -> io::Result<()> {
    if glyphs.is_empty() {
        return writeln!(out, "No glyphs stored.");
    }
    rows(out, "Glyphs", glyphs)
}

/// Print query results, or a note when nothing matched
pub(crate) fn results(out: &mut impl Write, glyphs: &[Glyph]) -> io::Result<()> {
    if glyphs.is_empty() {
        return writeln!(out, "No results.");
    }
    rows(out, "Results", glyphs)
}

fn rows(out: &mut impl Write, title: &str, glyphs: &[Glyph]) -> io::Result<()> {
    writeln!(out, "\n--- {title} ({}) ---", glyphs.len())?;
    for glyph in glyphs {
        writeln!(out, "{glyph}")?;
    }
    Ok(())
}

/// Print the stats block
pub(crate) fn stats(out: &mut impl Write, stats: &GlyphStats) -> io::Result<()> {
    writeln!(out, "\n--- Stats ---")?;
    if stats.is_empty() {
        return writeln!(out, "No glyphs stored.");
    }

    writeln!(out, "Count: {}", stats.count)?;
    writeln!(out, "Total size (MB): {}", stats.total_size_mb)?;

    writeln!(out, "\nBy type:")?;
    for (kind, count) in &stats.by_type {
        writeln!(out, "  {kind}: {count}")?;
    }

    writeln!(out, "\nTop tags:")?;
    for (tag, count) in &stats.by_tag {
        let label = if tag.is_empty() { BLANK_TAG_LABEL } else { tag.as_str() };
        writeln!(out, "  {label}: {count}")?;
    }
    Ok(())
}
