//! Section table: named, contiguous, half-open row ranges.

use crate::error::{EngineError, Result};
use crate::index::types::{LineRange, Row, Section};
use std::path::Path;
use tracing::warn;

/// Ordered `(title, startLine)` pairs over a document of `line_count` rows.
///
/// A section ends where the next one starts; the last one ends at
/// `line_count + 1`.
#[derive(Debug, Clone, Default)]
pub struct IndexTable {
    sections: Vec<Section>,
    line_count: usize,
}

impl IndexTable {
    pub fn new(sections: Vec<Section>, line_count: usize) -> Self {
        for section in &sections {
            if section.start_line == 0 || section.start_line as usize > line_count {
                warn!(
                    title = %section.title,
                    start_line = section.start_line,
                    line_count,
                    "section starts outside the document"
                );
            }
        }
        for pair in sections.windows(2) {
            if pair[1].start_line <= pair[0].start_line {
                warn!(
                    title = %pair[1].title,
                    start_line = pair[1].start_line,
                    previous = pair[0].start_line,
                    "sections are not in ascending order"
                );
            }
        }
        Self {
            sections,
            line_count,
        }
    }

    /// Parse index text, one `title<delimiter>startLine` entry per line.
    ///
    /// The split happens at the last delimiter, so titles may contain it.
    /// Start lines must strictly increase.
    /// `origin` only labels errors.
    pub fn parse(text: &str, delimiter: char, origin: &Path) -> Result<Vec<Section>> {
        let mut sections: Vec<Section> = Vec::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let invalid = |reason: String| EngineError::InvalidIndexEntry {
                path: origin.to_path_buf(),
                line: idx + 1,
                reason,
            };

            let (title, start) = line
                .rsplit_once(delimiter)
                .ok_or_else(|| invalid(format!("expected 'title{}line'", delimiter)))?;
            let start_line: Row = start
                .trim()
                .parse()
                .map_err(|e| invalid(format!("bad line number '{}': {}", start.trim(), e)))?;
            if start_line == 0 {
                return Err(invalid("line numbers are 1-based".to_string()));
            }
            if let Some(previous) = sections.last().map(|s| s.start_line) {
                if start_line <= previous {
                    return Err(invalid(format!(
                        "start line {} does not follow the previous section's {}",
                        start_line, previous
                    )));
                }
            }

            sections.push(Section {
                title: title.trim().to_string(),
                start_line,
            });
        }

        Ok(sections)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Range of the section at `position` in the table
    fn range_at(&self, position: usize) -> LineRange {
        let start = self.sections[position].start_line;
        let end = match self.sections.get(position + 1) {
            Some(next) => next.start_line,
            None => self.line_count as Row + 1,
        };
        LineRange::new(start, end)
    }

    /// Every section with its row range, in table order
    pub fn entries(&self) -> impl Iterator<Item = (&Section, LineRange)> + '_ {
        (0..self.sections.len()).map(|pos| (&self.sections[pos], self.range_at(pos)))
    }

    /// The whole document as a single range
    pub fn document_range(&self) -> LineRange {
        LineRange::new(1, self.line_count as Row + 1)
    }

    /// Resolve section titles to row ranges, in the order given.
    ///
    /// The first section with a matching title wins. Unknown titles are
    /// skipped, so the result may be shorter than `names`.
    pub fn resolve_ranges<S: AsRef<str>>(&self, names: &[S]) -> Vec<LineRange> {
        names
            .iter()
            .filter_map(|name| {
                self.sections
                    .iter()
                    .position(|s| s.title == name.as_ref())
                    .map(|pos| self.range_at(pos))
            })
            .collect()
    }

    /// True if `row` falls in at least one range.
    ///
    /// An empty range set means "unrestricted" and always matches.
    pub fn in_bounds(ranges: &[LineRange], row: Row) -> bool {
        ranges.is_empty() || ranges.iter().any(|r| r.contains(row))
    }
}
