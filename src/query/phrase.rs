//! Phrase verification against the retained raw lines.

use crate::index::types::Occurrence;
use crate::utils::{count_separators, format_line};

/// Check whether the formatted `phrase` occurs in the text starting at `start`.
///
/// The raw line is read from the candidate's column; while the phrase still
/// has more word boundaries than the extracted text, following lines are
/// appended. Reading past the last line just stops.
pub fn phrase_matches_at(lines: &[String], start: Occurrence, phrase: &str) -> bool {
    let Some(row_idx) = (start.row as usize).checked_sub(1) else {
        return false;
    };
    let Some(line) = lines.get(row_idx) else {
        return false;
    };

    let skip = (start.column as usize).saturating_sub(1);
    if skip > line.chars().count() {
        return false;
    }
    let tail: String = line.chars().skip(skip).collect();

    let wanted = count_separators(phrase);
    let mut text = format_line(&tail);
    let mut next = row_idx + 1;

    while wanted > count_separators(&text) {
        let Some(more) = lines.get(next) else {
            break;
        };
        text.push(' ');
        text.push_str(more);
        text = format_line(&text);
        next += 1;
    }

    text.contains(phrase)
}
