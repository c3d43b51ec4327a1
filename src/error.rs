//! Construction errors. Queries never fail; see [`crate::query`].

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which construction input a file error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Words,
    StopWords,
    Index,
    Config,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Words => "words",
            SourceKind::StopWords => "stop-words",
            SourceKind::Index => "index",
            SourceKind::Config => "config",
        };
        f.write_str(name)
    }
}

/// Fatal error raised while building an index
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Could not read {source_kind} file '{}': {source}", .path.display())]
    Io {
        source_kind: SourceKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid index entry at '{}' line {line}: {reason}", .path.display())]
    InvalidIndexEntry {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Invalid config file '{}': {source}", .path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl EngineError {
    /// The input this error is attributed to, if any
    pub fn source_kind(&self) -> Option<SourceKind> {
        match self {
            EngineError::Configuration(_) => None,
            EngineError::Io { source_kind, .. } => Some(*source_kind),
            EngineError::InvalidIndexEntry { .. } => Some(SourceKind::Index),
            EngineError::InvalidConfig { .. } => Some(SourceKind::Config),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
