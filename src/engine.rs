use crate::error::Result;
use crate::index::{
    DocumentIndex, EngineConfig, Hit, IndexBuilder, IndexStats, LineRange, Occurrence, Row,
    Section, SourceFiles,
};
use crate::query::QueryExecutor;

/// Owns a built index and answers queries over it.
///
/// Construction happens once; every query afterwards is a pure read and
/// returns owned results.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    index: DocumentIndex,
}

impl SearchEngine {
    /// Build from files with the default configuration
    pub fn open(sources: &SourceFiles) -> Result<Self> {
        Self::open_with_config(sources, EngineConfig::default())
    }

    pub fn open_with_config(sources: &SourceFiles, config: EngineConfig) -> Result<Self> {
        let index = IndexBuilder::new(config).build(sources)?;
        Ok(Self { index })
    }

    /// Build from in-memory text: the document, stop-words (one per line) and
    /// index entries (`title,startLine` per line). Never draws a progress bar.
    pub fn from_text(words: &str, stop_words: &str, index: &str) -> Result<Self> {
        Self::from_text_with_config(words, stop_words, index, EngineConfig::quiet())
    }

    pub fn from_text_with_config(
        words: &str,
        stop_words: &str,
        index: &str,
        config: EngineConfig,
    ) -> Result<Self> {
        let index = IndexBuilder::new(config).build_from_text(words, stop_words, index)?;
        Ok(Self { index })
    }

    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    fn executor(&self) -> QueryExecutor<'_> {
        QueryExecutor::new(&self.index)
    }

    pub fn word_frequency(&self, word: &str) -> usize {
        self.executor().word_frequency(word)
    }

    pub fn phrase_occurrences(&self, phrase: &str) -> Vec<Occurrence> {
        self.executor().phrase_occurrences(phrase)
    }

    pub fn prefix_occurrences(&self, prefix: &str) -> Vec<Occurrence> {
        self.executor().prefix_occurrences(prefix)
    }

    pub fn lines_containing_all<S: AsRef<str>>(&self, words: &[S]) -> Vec<Row> {
        self.executor().lines_containing_all(words)
    }

    pub fn lines_containing_any<S: AsRef<str>>(&self, words: &[S]) -> Vec<Row> {
        self.executor().lines_containing_any(words)
    }

    pub fn lines_containing_all_excluding<S: AsRef<str>, E: AsRef<str>>(
        &self,
        words: &[S],
        excluded: &[E],
    ) -> Vec<Row> {
        self.executor().lines_containing_all_excluding(words, excluded)
    }

    pub fn sections_containing_all<S: AsRef<str>, N: AsRef<str>>(
        &self,
        words: &[S],
        section_names: &[N],
    ) -> Vec<Hit> {
        self.executor().sections_containing_all(words, section_names)
    }

    pub fn sections_containing_any<S: AsRef<str>, N: AsRef<str>>(
        &self,
        words: &[S],
        section_names: &[N],
    ) -> Vec<Hit> {
        self.executor().sections_containing_any(words, section_names)
    }

    pub fn sections_containing_all_excluding<S, N, E>(
        &self,
        words: &[S],
        section_names: &[N],
        excluded: &[E],
    ) -> Vec<Hit>
    where
        S: AsRef<str>,
        N: AsRef<str>,
        E: AsRef<str>,
    {
        self.executor()
            .sections_containing_all_excluding(words, section_names, excluded)
    }

    pub fn sections_compound<S, N, O>(
        &self,
        words: &[S],
        section_names: &[N],
        or_words: &[O],
    ) -> Vec<Hit>
    where
        S: AsRef<str>,
        N: AsRef<str>,
        O: AsRef<str>,
    {
        self.executor()
            .sections_compound(words, section_names, or_words)
    }

    /// Half-open row ranges of the named sections; unknown names are skipped
    pub fn resolve_ranges<N: AsRef<str>>(&self, section_names: &[N]) -> Vec<LineRange> {
        self.index.table().resolve_ranges(section_names)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.index.is_stop_word(word)
    }

    pub fn line(&self, row: Row) -> Option<&str> {
        self.index.line(row)
    }

    pub fn line_count(&self) -> usize {
        self.index.line_count()
    }

    pub fn sections(&self) -> &[Section] {
        self.index.sections()
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}
