//! Shared on-disk fixture for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const DOCUMENT: &str = "It was the best of times, it was the worst
of times. A well-known tale.
The tale begins here.
Chapter two starts with times.
Worst case, the tale ends.
";

pub const STOP_WORDS: &str = "the\nit\nwas\nof\na\nwith\n";

pub const INDEX: &str = "Opening,1\nMiddle,3\nEnding,5\n";

/// Files written into a temp dir that lives as long as the fixture
pub struct Fixture {
    root: TempDir,
    pub words: PathBuf,
    pub stop_words: PathBuf,
    pub index: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_index(INDEX)
    }

    pub fn with_index(index: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let words = dir.path().join("words.txt");
        let stop_words = dir.path().join("stopwords.txt");
        let index_path = dir.path().join("index.txt");

        fs::write(&words, DOCUMENT).unwrap();
        fs::write(&stop_words, STOP_WORDS).unwrap();
        fs::write(&index_path, index).unwrap();

        Self {
            root: dir,
            words,
            stop_words,
            index: index_path,
        }
    }

    pub fn dir(&self) -> &std::path::Path {
        self.root.path()
    }
}
