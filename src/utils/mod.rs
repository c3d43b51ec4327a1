//! Utility functions shared by construction and querying.
//!
//! ## Modules
//!
//! - [`tokenizer`] - Normalization of raw text into lookup keys
//! - [`progress`] - Optional progress bar while indexing
//!
//! ```
//! use trieseek::utils::{format_line, normalize, split_hyphenated};
//!
//! assert_eq!(normalize("The (cat), sat."), vec!["the", "cat", "sat"]);
//! assert_eq!(split_hyphenated("well-known"), vec!["well", "known"]);
//! assert_eq!(format_line("Well-known  FACT."), "well known fact");
//! ```

pub mod progress;
pub mod tokenizer;

pub use progress::BuildProgress;
pub use tokenizer::*;
