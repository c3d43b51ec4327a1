use crate::error::{EngineError, Result, SourceKind};
use crate::index::document::DocumentIndex;
use crate::index::sections::IndexTable;
use crate::index::trie::{LineCursor, Trie};
use crate::index::types::{EngineConfig, Row, SourceFiles};
use crate::utils::{
    column_width, count_leading_symbols, line_chunks, normalize_word, split_hyphenated,
    BuildProgress, LineChunk,
};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Read a construction input, attributing failures to its source kind
fn read_source(kind: SourceKind, path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| EngineError::Io {
        source_kind: kind,
        path: path.to_path_buf(),
        source,
    })?;
    debug!(source = %kind, path = %path.display(), bytes = text.len(), "loaded source file");
    Ok(text)
}

/// Construction state for the word and stop-word tries
struct LineIndexer {
    words: Trie,
    stop_words: Trie,
    cursor: LineCursor,
}

impl LineIndexer {
    fn new(stop_words: Trie) -> Self {
        Self {
            words: Trie::new(),
            stop_words,
            cursor: LineCursor::new(),
        }
    }

    /// Index every token of one raw line
    fn index_line(&mut self, line: &str, row: Row) {
        for chunk in line_chunks(line) {
            match chunk {
                LineChunk::Gap => self.cursor.advance(1),
                LineChunk::Text(text) => {
                    for part in split_hyphenated(text) {
                        if part.is_empty() {
                            // a hyphen with nothing before it
                            self.cursor.advance(1);
                        } else {
                            self.index_token(part, row);
                        }
                    }
                }
            }
        }
        self.cursor.reset();
    }

    fn index_token(&mut self, raw: &str, row: Row) {
        let width = column_width(raw);
        let key = normalize_word(raw);
        if key.is_empty() {
            self.cursor.advance(width + 1);
            return;
        }

        let leading = count_leading_symbols(raw);
        match self.stop_words.find_terminal(&key) {
            Some(node) => {
                let column = self.cursor.column() + leading as u32;
                self.stop_words.attach_complete_occurrence(node, row, column);
                self.cursor.advance(width + 1);
            }
            None => {
                self.words
                    .insert(&key, row, true, &mut self.cursor, width + 1 - leading, leading);
            }
        }
    }
}

/// Builds a [`DocumentIndex`] from the three construction inputs.
///
/// Order is fixed: stop-words trie, then word trie and line cache, then the
/// section table. Any failure aborts the whole build.
pub struct IndexBuilder {
    config: EngineConfig,
}

impl IndexBuilder {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Read and index the source files
    pub fn build(&self, sources: &SourceFiles) -> Result<DocumentIndex> {
        if sources.words.as_os_str().is_empty() {
            return Err(EngineError::Configuration(
                "a words file must be given".to_string(),
            ));
        }

        let stop_words = match sources.stop_words.as_deref() {
            Some(path) => read_source(SourceKind::StopWords, path)?,
            None => String::new(),
        };
        let words = read_source(SourceKind::Words, &sources.words)?;
        let index = match sources.index.as_deref() {
            Some(path) => Some((read_source(SourceKind::Index, path)?, path)),
            None => None,
        };

        let index_origin = index.as_ref().map(|(_, path)| *path);
        let index_text = index.as_ref().map(|(text, _)| text.as_str()).unwrap_or("");
        self.assemble(&words, &stop_words, index_text, index_origin.unwrap_or(Path::new("<index>")))
    }

    /// Index in-memory text; the pipeline is identical to [`IndexBuilder::build`]
    pub fn build_from_text(&self, words: &str, stop_words: &str, index: &str) -> Result<DocumentIndex> {
        self.assemble(words, stop_words, index, Path::new("<index>"))
    }

    fn assemble(
        &self,
        words: &str,
        stop_words: &str,
        index: &str,
        index_origin: &Path,
    ) -> Result<DocumentIndex> {
        let started = Instant::now();

        // Parse before doing any real work so a bad index fails fast
        let sections = IndexTable::parse(index, self.config.index_delimiter, index_origin)?;

        let stop_trie = build_stop_words(stop_words);
        debug!(stop_words = stop_trie.word_count(), "stop-word trie built");

        let lines: Vec<String> = words.lines().map(str::to_string).collect();
        let show_progress =
            self.config.progress && lines.len() >= self.config.progress_min_lines;
        let progress = if show_progress {
            BuildProgress::new(lines.len(), true)
        } else {
            BuildProgress::hidden()
        };

        let mut indexer = LineIndexer::new(stop_trie);
        for (idx, line) in lines.iter().enumerate() {
            indexer.index_line(line, (idx + 1) as Row);
            progress.line_done();
        }

        let table = IndexTable::new(sections, lines.len());
        let index = DocumentIndex {
            words: indexer.words,
            stop_words: indexer.stop_words,
            lines,
            table,
        };

        let stats = index.stats();
        progress.finish(format!("Indexed {} lines", stats.lines));
        info!(
            lines = stats.lines,
            word_nodes = stats.word_nodes,
            indexed_tokens = stats.indexed_tokens,
            stop_words = stats.stop_words,
            sections = stats.sections,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "index built"
        );

        Ok(index)
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Stop-words are case-insensitive, one per line; no occurrences are recorded
fn build_stop_words(text: &str) -> Trie {
    let mut trie = Trie::new();
    let mut cursor = LineCursor::new();

    for line in text.lines() {
        let word = line.trim().to_ascii_lowercase();
        if word.is_empty() {
            continue;
        }
        trie.insert(&word, 0, false, &mut cursor, column_width(&word) + 1, 0);
        cursor.reset();
    }

    trie
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::types::Occurrence;
    use crate::utils::normalize;

    fn build(words: &str, stop_words: &str) -> DocumentIndex {
        IndexBuilder::with_defaults()
            .build_from_text(words, stop_words, "")
            .unwrap()
    }

    #[test]
    fn test_columns_track_raw_text() {
        let index = build("The cat sat\non the mat\nA cat ran", "the\non\na");

        assert_eq!(
            index.words().lookup_occurrences("cat"),
            Some(vec![Occurrence::new(1, 5), Occurrence::new(3, 3)])
        );
        assert_eq!(
            index.words().lookup_occurrences("mat"),
            Some(vec![Occurrence::new(2, 8)])
        );
        // stop-words are never inserted into the word trie
        assert_eq!(index.words().lookup_occurrences("the"), None);
        assert_eq!(
            index.stop_words().lookup_occurrences("the"),
            Some(vec![Occurrence::new(1, 1), Occurrence::new(2, 4)])
        );
    }

    #[test]
    fn test_hyphenated_words_index_independently() {
        let index = build("well-known fact", "");
        assert_eq!(
            index.words().lookup_occurrences("well"),
            Some(vec![Occurrence::new(1, 1)])
        );
        assert_eq!(
            index.words().lookup_occurrences("known"),
            Some(vec![Occurrence::new(1, 6)])
        );
        assert_eq!(
            index.words().lookup_occurrences("fact"),
            Some(vec![Occurrence::new(1, 12)])
        );
    }

    #[test]
    fn test_punctuation_and_gaps_shift_columns() {
        let index = build("  \"Hello,\" -- (world)  42 done", "");
        assert_eq!(
            index.words().lookup_occurrences("hello"),
            Some(vec![Occurrence::new(1, 4)])
        );
        assert_eq!(
            index.words().lookup_occurrences("world"),
            Some(vec![Occurrence::new(1, 16)])
        );
        assert_eq!(
            index.words().lookup_occurrences("done"),
            Some(vec![Occurrence::new(1, 27)])
        );
    }

    #[test]
    fn test_trailing_hyphens_keep_later_columns() {
        let line = "ab-c---- de-f---- xyz";
        let index = build(line, "");
        assert_eq!(
            index.words().lookup_occurrences("c"),
            Some(vec![Occurrence::new(1, 4)])
        );
        assert_eq!(
            index.words().lookup_occurrences("de"),
            Some(vec![Occurrence::new(1, 10)])
        );
        assert_eq!(
            index.words().lookup_occurrences("xyz"),
            Some(vec![Occurrence::new(1, 19)])
        );

        for key in ["ab", "c", "de", "f", "xyz"] {
            for occ in index.words().lookup_occurrences(key).unwrap() {
                let tail: String = line.chars().skip(occ.column as usize - 1).collect();
                assert!(normalize(&tail)[0].starts_with(key), "{} at {}", key, occ.column);
            }
        }
    }

    #[test]
    fn test_stop_word_prefix_is_not_a_stop_word() {
        let index = build("th the", "the");
        assert_eq!(
            index.words().lookup_occurrences("th"),
            Some(vec![Occurrence::new(1, 1)])
        );
        assert_eq!(
            index.stop_words().lookup_occurrences("the"),
            Some(vec![Occurrence::new(1, 4)])
        );
    }

    #[test]
    fn test_missing_words_reference_is_a_configuration_error() {
        let err = IndexBuilder::with_defaults()
            .build(&SourceFiles::new(""))
            .unwrap_err();
        assert!(matches!(err, EngineError::Configuration(_)));
    }

    #[test]
    fn test_unreadable_source_names_it() {
        let dir = tempfile::tempdir().unwrap();
        let words = dir.path().join("words.txt");
        fs::write(&words, "hello").unwrap();

        let sources = SourceFiles::new(&words).with_stop_words(dir.path().join("nope.txt"));
        let err = IndexBuilder::with_defaults().build(&sources).unwrap_err();
        assert_eq!(err.source_kind(), Some(SourceKind::StopWords));

        let sources = SourceFiles::new(&words).with_index(dir.path().join("nope.txt"));
        let err = IndexBuilder::with_defaults().build(&sources).unwrap_err();
        assert_eq!(err.source_kind(), Some(SourceKind::Index));
    }
}
