pub mod build;
pub mod document;
pub mod sections;
pub mod stats;
pub mod trie;
pub mod types;

pub use build::IndexBuilder;
pub use document::DocumentIndex;
pub use sections::IndexTable;
pub use trie::{LineCursor, Trie, TrieNode};
pub use types::*;
