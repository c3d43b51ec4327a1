//! # trieseek - Trie-backed document search
//!
//! trieseek indexes a single static document in memory and answers exact
//! phrase, word frequency, prefix, line-level boolean and section-scoped
//! queries over it.
//!
//! ## Architecture
//!
//! - [`index`] - Trie construction, section table and the built index
//! - [`query`] - Phrase verification and boolean/section query execution
//! - [`engine`] - [`SearchEngine`], owning an index and exposing every query
//! - [`output`] - Terminal rendering of results
//! - [`utils`] - Tokenizer and progress reporting
//!
//! ## Quick Start
//!
//! ```
//! use trieseek::SearchEngine;
//!
//! let engine = SearchEngine::from_text(
//!     "The cat sat\non the mat\nA cat ran",
//!     "the\non\na",
//!     "",
//! )
//! .unwrap();
//!
//! assert_eq!(engine.word_frequency("cat"), 2);
//! assert_eq!(engine.lines_containing_all(&["cat"]), vec![1, 3]);
//! assert_eq!(engine.phrase_occurrences("cat sat").len(), 1);
//! ```
//!
//! ## Indexing model
//!
//! Every non-stop-word is inserted into a prefix trie with one prefix
//! occurrence per node on its path and a complete-word occurrence at its last
//! node. Stop-words live in a second trie that only tracks complete-word
//! occurrences. Columns always refer to the raw line, so matches can be
//! located and verified against the retained text.

pub mod engine;
pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod utils;

pub use engine::SearchEngine;
pub use error::{EngineError, Result, SourceKind};
pub use index::{EngineConfig, Hit, LineRange, Occurrence, Section, SourceFiles};
