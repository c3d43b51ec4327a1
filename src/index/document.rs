use crate::index::sections::IndexTable;
use crate::index::trie::Trie;
use crate::index::types::{IndexStats, Occurrence, Row, Section};
use crate::utils::normalize_word;

/// Read-only index over one document.
///
/// Built once by [`crate::index::IndexBuilder`]; owns both tries, the
/// retained lines and the section table.
#[derive(Debug, Clone)]
pub struct DocumentIndex {
    pub(crate) words: Trie,
    pub(crate) stop_words: Trie,
    pub(crate) lines: Vec<String>,
    pub(crate) table: IndexTable,
}

impl DocumentIndex {
    pub fn words(&self) -> &Trie {
        &self.words
    }

    pub fn stop_words(&self) -> &Trie {
        &self.stop_words
    }

    pub fn table(&self) -> &IndexTable {
        &self.table
    }

    pub fn sections(&self) -> &[Section] {
        self.table.sections()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Retained raw text of a 1-based row
    pub fn line(&self, row: Row) -> Option<&str> {
        let idx = (row as usize).checked_sub(1)?;
        self.lines.get(idx).map(String::as_str)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        let key = normalize_word(word);
        !key.is_empty() && self.stop_words.find_terminal(&key).is_some()
    }

    /// Complete-word occurrences of an already-normalized key in the word trie
    pub(crate) fn word_occurrences(&self, key: &str) -> Option<Vec<Occurrence>> {
        if key.is_empty() {
            return None;
        }
        self.words.lookup_occurrences(key)
    }

    /// Distinct rows `key` occurs on, in first-seen order
    pub(crate) fn word_rows(&self, key: &str) -> Vec<Row> {
        let mut rows: Vec<Row> = Vec::new();
        if let Some(occurrences) = self.word_occurrences(key) {
            for occ in occurrences {
                // occurrences are row-major, so duplicates are adjacent
                if rows.last() != Some(&occ.row) {
                    rows.push(occ.row);
                }
            }
        }
        rows
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            lines: self.lines.len(),
            word_nodes: self.words.node_count(),
            stop_word_nodes: self.stop_words.node_count(),
            stop_words: self.stop_words.word_count(),
            sections: self.table.len(),
            indexed_tokens: self.words.occurrence_count(),
            stop_word_tokens: self.stop_words.occurrence_count(),
        }
    }
}
