//! Text normalization for lookup keys.
//!
//! Keys are lower-cased and stripped of leading/trailing non-letters, but the
//! column bookkeeping done during construction always measures the original
//! chunk, so recorded positions point into the raw line.

/// A chunk of a raw line, as seen by the indexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChunk<'a> {
    /// An empty chunk between two adjacent separators (one column wide).
    Gap,
    /// Text between separators, possibly carrying surrounding punctuation.
    Text(&'a str),
}

#[inline]
fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

#[inline]
fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace()
}

/// Split a raw line into chunks, one per separator-delimited span.
///
/// Every separator character is a column of its own, so runs of separators
/// produce [`LineChunk::Gap`]s. Trailing empties are not produced since they
/// cannot shift any later column.
pub fn line_chunks(line: &str) -> Vec<LineChunk<'_>> {
    let mut chunks: Vec<LineChunk<'_>> = line
        .split(is_separator)
        .map(|piece| {
            if piece.is_empty() {
                LineChunk::Gap
            } else {
                LineChunk::Text(piece)
            }
        })
        .collect();

    while chunks.last() == Some(&LineChunk::Gap) {
        chunks.pop();
    }

    chunks
}

/// Normalize a single chunk into a lookup key.
///
/// Leading and trailing non-letters are removed and the rest is lower-cased.
/// Interior punctuation survives (`"don't"` stays `"don't"`). A chunk with no
/// letters at all normalizes to the empty string.
pub fn normalize_word(chunk: &str) -> String {
    let trimmed = chunk.trim_matches(|c: char| !is_letter(c));
    trimmed.to_ascii_lowercase()
}

/// Normalize raw text into its ordered sequence of cleaned words.
///
/// Chunks without letters are dropped.
pub fn normalize(raw: &str) -> Vec<String> {
    raw.split(is_separator)
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Decompose a chunk with internal hyphens into its parts.
///
/// Parts keep their own punctuation; empty parts (from doubled or leading
/// hyphens) are kept because each still occupies one column. Trailing
/// hyphens never split: they stay on the last part so its width covers
/// them (`"ab-c--"` gives `["ab", "c--"]`, `"well-"` is returned whole).
pub fn split_hyphenated(chunk: &str) -> Vec<&str> {
    let body = chunk.trim_end_matches('-');
    let mut parts: Vec<&str> = body.split('-').collect();
    if parts.len() < 2 {
        return vec![chunk];
    }

    let last = parts.len() - 1;
    let last_start = body.len() - parts[last].len();
    parts[last] = &chunk[last_start..];
    parts
}

/// Count the non-letter characters before the first letter of `word`.
pub fn count_leading_symbols(word: &str) -> usize {
    word.chars().take_while(|&c| !is_letter(c)).count()
}

/// Width of a chunk in columns.
#[inline]
pub fn column_width(chunk: &str) -> usize {
    chunk.chars().count()
}

/// Format a stretch of raw text for phrase verification.
///
/// Hyphens become separators, separator runs collapse to a single space,
/// every word is normalized and letter-less words vanish. The result is
/// directly comparable with a phrase formatted the same way.
pub fn format_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for piece in text.split(|c: char| is_separator(c) || c == '-') {
        let word = normalize_word(piece);
        if word.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&word);
    }

    out
}

/// Count maximal runs of spaces in `text`.
///
/// On formatted text this is the number of word boundaries.
pub fn count_separators(text: &str) -> usize {
    let mut count = 0;
    let mut last_space = false;

    for ch in text.chars() {
        if ch == ' ' {
            if !last_space {
                count += 1;
            }
            last_space = true;
        } else {
            last_space = false;
        }
    }

    count
}
