//! Output formatting for query results, grep-style (`row:column:line`)

use crate::index::{DocumentIndex, Hit, Occurrence, Row};
use std::io::{self, Write};
use termcolor::{Color, ColorSpec, WriteColor};

/// Byte span of the token starting at 1-based `column`, clamped to the line
fn token_span(line: &str, column: u32) -> (usize, usize) {
    let skip = (column as usize).saturating_sub(1);
    let start = line
        .char_indices()
        .nth(skip)
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    let end = line[start..]
        .char_indices()
        .find(|&(_, c)| c.is_ascii_whitespace() || c == '-')
        .map(|(i, _)| start + i)
        .unwrap_or(line.len());
    (start, end)
}

fn write_row_prefix<W: WriteColor>(out: &mut W, row: Row, column: Option<u32>) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "{}", row)?;
    out.reset()?;
    write!(out, ":")?;

    if let Some(column) = column {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "{}", column)?;
        out.reset()?;
        write!(out, ":")?;
    }

    Ok(())
}

/// Write a line with the token at `column` highlighted
fn write_highlighted<W: WriteColor>(out: &mut W, line: &str, column: u32) -> io::Result<()> {
    let (start, end) = token_span(line, column);

    if start > 0 {
        write!(out, "{}", &line[..start])?;
    }
    if end > start {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(out, "{}", &line[start..end])?;
        out.reset()?;
    }
    if end < line.len() {
        write!(out, "{}", &line[end..])?;
    }
    writeln!(out)
}

/// Print occurrences with their source lines
pub fn print_occurrences<W: WriteColor>(
    out: &mut W,
    index: &DocumentIndex,
    occurrences: &[Occurrence],
) -> io::Result<()> {
    for occ in occurrences {
        write_row_prefix(out, occ.row, Some(occ.column))?;
        write_highlighted(out, index.line(occ.row).unwrap_or(""), occ.column)?;
    }
    Ok(())
}

/// Print matching rows with their source lines
pub fn print_rows<W: WriteColor>(out: &mut W, index: &DocumentIndex, rows: &[Row]) -> io::Result<()> {
    for &row in rows {
        write_row_prefix(out, row, None)?;
        writeln!(out, "{}", index.line(row).unwrap_or(""))?;
    }
    Ok(())
}

/// Print section hits, tagging each with the term that matched
pub fn print_hits<W: WriteColor>(out: &mut W, index: &DocumentIndex, hits: &[Hit]) -> io::Result<()> {
    for hit in hits {
        write_row_prefix(out, hit.row, Some(hit.column))?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, "[{}]", hit.word)?;
        out.reset()?;
        write!(out, " ")?;
        write_highlighted(out, index.line(hit.row).unwrap_or(""), hit.column)?;
    }
    Ok(())
}

/// Print a bare count (for `count`)
pub fn print_count<W: WriteColor>(out: &mut W, word: &str, count: usize) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    write!(out, "{}", word)?;
    out.reset()?;
    write!(out, ":")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    writeln!(out, "{}", count)?;
    out.reset()
}
