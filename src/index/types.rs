use crate::error::{EngineError, Result, SourceKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 1-based line number in the words file
pub type Row = u32;

/// 1-based character offset into the original (unformatted) line
pub type Column = u32;

/// Index of a node in a trie's arena
pub type NodeId = u32;

/// Location of a word or prefix in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Occurrence {
    pub row: Row,
    pub column: Column,
}

impl Occurrence {
    pub fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }
}

/// Occurrence of a query term reported by a section query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub row: Row,
    pub column: Column,
    /// Normalized query term found at this location
    pub word: String,
}

/// Half-open row range `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: Row,
    pub end: Row,
}

impl LineRange {
    pub fn new(start: Row, end: Row) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn contains(&self, row: Row) -> bool {
        self.start <= row && row < self.end
    }

    /// True if any of `rows` falls inside this range
    pub fn contains_any(&self, rows: &[Row]) -> bool {
        rows.iter().any(|&row| self.contains(row))
    }
}

/// Named section of the document starting at `start_line`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub start_line: Row,
}

/// The three construction inputs
#[derive(Debug, Clone)]
pub struct SourceFiles {
    /// Document to index, one row per line
    pub words: PathBuf,
    /// One stop-word per line
    pub stop_words: Option<PathBuf>,
    /// `title,startLine` entries
    pub index: Option<PathBuf>,
}

impl SourceFiles {
    pub fn new(words: impl Into<PathBuf>) -> Self {
        Self {
            words: words.into(),
            stop_words: None,
            index: None,
        }
    }

    pub fn with_stop_words(mut self, path: impl Into<PathBuf>) -> Self {
        self.stop_words = Some(path.into());
        self
    }

    pub fn with_index(mut self, path: impl Into<PathBuf>) -> Self {
        self.index = Some(path.into());
        self
    }
}

/// Configuration for index construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Separator between section title and start line in the index file
    pub index_delimiter: char,
    /// Show a progress bar while indexing large documents
    pub progress: bool,
    /// Documents with fewer lines never show a progress bar
    pub progress_min_lines: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            index_delimiter: ',',
            progress: true,
            progress_min_lines: 10_000,
        }
    }
}

impl EngineConfig {
    /// Defaults without a progress bar
    pub fn quiet() -> Self {
        Self {
            progress: false,
            ..Self::default()
        }
    }

    /// Load a JSON config. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| EngineError::Io {
            source_kind: SourceKind::Config,
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| EngineError::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Size summary of a built index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub lines: usize,
    pub word_nodes: usize,
    pub stop_word_nodes: usize,
    pub stop_words: usize,
    pub sections: usize,
    /// Complete-word occurrences in the word trie
    pub indexed_tokens: usize,
    /// Complete-word occurrences in the stop-word trie
    pub stop_word_tokens: usize,
}
