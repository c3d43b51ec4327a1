use crate::index::document::DocumentIndex;
use std::io::{self, Write};

/// Write index statistics in human-readable form
pub fn write_stats<W: Write>(out: &mut W, index: &DocumentIndex) -> io::Result<()> {
    let stats = index.stats();

    writeln!(out, "Index Statistics")?;
    writeln!(out, "================")?;
    writeln!(out)?;
    writeln!(out, "Lines:            {}", stats.lines)?;
    writeln!(out, "Word nodes:       {}", stats.word_nodes)?;
    writeln!(out, "Indexed words:    {}", stats.indexed_tokens)?;
    writeln!(out, "Stop-words:       {}", stats.stop_words)?;
    writeln!(out, "Stop-word hits:   {}", stats.stop_word_tokens)?;
    writeln!(out, "Sections:         {}", stats.sections)?;

    if index.sections().is_empty() {
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "Sections by size:")?;
    let mut sized: Vec<_> = index
        .table()
        .entries()
        .map(|(s, range)| (s, range.end.saturating_sub(range.start)))
        .collect();
    sized.sort_by(|a, b| b.1.cmp(&a.1));

    for (section, size) in sized.iter().take(15) {
        writeln!(
            out,
            "  {:30} line {:>6}  ({} lines)",
            section.title, section.start_line, size
        )?;
    }

    if sized.len() > 15 {
        writeln!(out, "  ... and {} more", sized.len() - 15)?;
    }

    Ok(())
}
