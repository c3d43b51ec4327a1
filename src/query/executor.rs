use crate::index::document::DocumentIndex;
use crate::index::sections::IndexTable;
use crate::index::types::{Hit, LineRange, Occurrence, Row};
use crate::query::phrase::phrase_matches_at;
use crate::query::rows::{intersect_ordered, row_set, subtract, union_ordered};
use crate::utils::{format_line, normalize_word};
use roaring::RoaringBitmap;
use rustc_hash::FxHashSet;
use tracing::trace;

/// Normalize query terms, dropping empties and repeats (first one wins)
fn distinct_terms<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    words
        .iter()
        .map(|w| normalize_word(w.as_ref()))
        .filter(|key| !key.is_empty() && seen.insert(key.clone()))
        .collect()
}

/// Read-only query layer over a built [`DocumentIndex`].
///
/// Nothing here fails: absent words, phrases and sections give empty results.
pub struct QueryExecutor<'a> {
    index: &'a DocumentIndex,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(index: &'a DocumentIndex) -> Self {
        Self { index }
    }

    /// Number of times `word` occurs as a complete word
    pub fn word_frequency(&self, word: &str) -> usize {
        self.word_occurrences(word).len()
    }

    /// Complete-word occurrences of `word`
    pub fn word_occurrences(&self, word: &str) -> Vec<Occurrence> {
        self.index
            .word_occurrences(&normalize_word(word))
            .unwrap_or_default()
    }

    /// Start of every occurrence of `phrase`.
    ///
    /// Candidates come from the first word's occurrences (the stop-word trie
    /// stands in when the word trie has none); each is confirmed against the
    /// raw text, possibly spanning following lines.
    pub fn phrase_occurrences(&self, phrase: &str) -> Vec<Occurrence> {
        let formatted = format_line(phrase);
        let mut terms = formatted.split(' ').filter(|t| !t.is_empty());

        let Some(first) = terms.next() else {
            return Vec::new();
        };
        if terms.next().is_none() {
            return self.index.word_occurrences(first).unwrap_or_default();
        }

        // Absent, or present only as a prefix of longer words
        let candidates = match self.index.word_occurrences(first) {
            Some(found) if !found.is_empty() => found,
            _ => self
                .index
                .stop_words
                .lookup_occurrences(first)
                .unwrap_or_default(),
        };
        trace!(phrase = %formatted, candidates = candidates.len(), "phrase candidates");

        candidates
            .into_iter()
            .filter(|&occ| phrase_matches_at(&self.index.lines, occ, &formatted))
            .collect()
    }

    /// Rows containing every word (AND)
    pub fn lines_containing_all<S: AsRef<str>>(&self, words: &[S]) -> Vec<Row> {
        let Some((first, rest)) = words.split_first() else {
            return Vec::new();
        };

        let first_rows = self.rows_of(first.as_ref());
        let others: Vec<RoaringBitmap> = rest
            .iter()
            .map(|w| row_set(&self.rows_of(w.as_ref())))
            .collect();

        intersect_ordered(&first_rows, &others)
    }

    /// Rows containing at least one of the words (OR)
    pub fn lines_containing_any<S: AsRef<str>>(&self, words: &[S]) -> Vec<Row> {
        union_ordered(words.iter().map(|w| self.rows_of(w.as_ref())))
    }

    /// Rows containing every word of `words` and none of `excluded` (NOT)
    pub fn lines_containing_all_excluding<S: AsRef<str>, E: AsRef<str>>(
        &self,
        words: &[S],
        excluded: &[E],
    ) -> Vec<Row> {
        subtract(
            self.lines_containing_all(words),
            &self.lines_containing_any(excluded),
        )
    }

    /// Every occurrence of every word inside the named sections that contain
    /// all of the words.
    ///
    /// Without section names the whole document is one section.
    pub fn sections_containing_all<S: AsRef<str>, N: AsRef<str>>(
        &self,
        words: &[S],
        section_names: &[N],
    ) -> Vec<Hit> {
        let terms = distinct_terms(words);
        let ranges = self.bounded_ranges(section_names);
        self.hits_in_ranges_with_all(&terms, ranges)
    }

    /// Occurrences of any of the words inside the named sections.
    ///
    /// With no resolvable section the search is unrestricted.
    pub fn sections_containing_any<S: AsRef<str>, N: AsRef<str>>(
        &self,
        words: &[S],
        section_names: &[N],
    ) -> Vec<Hit> {
        let terms = distinct_terms(words);
        let ranges = self.index.table.resolve_ranges(section_names);
        self.hits_in_ranges(&terms, &ranges)
    }

    /// Like [`Self::sections_containing_all`], skipping any section in which
    /// one of `excluded` occurs
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
        let terms = distinct_terms(words);
        let blocked = self.lines_containing_any(excluded);

        let mut ranges = self.bounded_ranges(section_names);
        ranges.retain(|range| !range.contains_any(&blocked));

        self.hits_in_ranges_with_all(&terms, ranges)
    }

    /// Occurrences of `words` and `or_words` inside sections containing all
    /// of `words` and at least one of `or_words`
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
        let required = distinct_terms(words);
        let optional = distinct_terms(or_words);

        let mut ranges = self.bounded_ranges(section_names);
        if !optional.is_empty() {
            let optional_rows = self.lines_containing_any(&optional);
            ranges.retain(|range| range.contains_any(&optional_rows));
        }
        let ranges = self.ranges_with_all(&required, ranges);
        if ranges.is_empty() {
            return Vec::new();
        }

        let mut all = required;
        for term in optional {
            if !all.contains(&term) {
                all.push(term);
            }
        }
        self.hits_in_ranges(&all, &ranges)
    }

    /// Prefix occurrences of `prefix`: every word starting with it
    pub fn prefix_occurrences(&self, prefix: &str) -> Vec<Occurrence> {
        let key = normalize_word(prefix);
        if key.is_empty() {
            return Vec::new();
        }
        self.index
            .words
            .lookup_prefix_occurrences(&key)
            .unwrap_or_default()
    }

    fn rows_of(&self, word: &str) -> Vec<Row> {
        self.index.word_rows(&normalize_word(word))
    }

    /// Named section ranges, or the whole document when no names are given
    fn bounded_ranges<N: AsRef<str>>(&self, section_names: &[N]) -> Vec<LineRange> {
        if section_names.is_empty() {
            vec![self.index.table.document_range()]
        } else {
            self.index.table.resolve_ranges(section_names)
        }
    }

    /// Keep the ranges in which every term occurs at least once
    fn ranges_with_all(&self, terms: &[String], mut ranges: Vec<LineRange>) -> Vec<LineRange> {
        let term_rows: Vec<Vec<Row>> = terms.iter().map(|t| self.index.word_rows(t)).collect();
        ranges.retain(|range| term_rows.iter().all(|rows| range.contains_any(rows)));
        ranges
    }

    fn hits_in_ranges_with_all(&self, terms: &[String], ranges: Vec<LineRange>) -> Vec<Hit> {
        if terms.is_empty() {
            return Vec::new();
        }
        let ranges = self.ranges_with_all(terms, ranges);
        if ranges.is_empty() {
            return Vec::new();
        }
        self.hits_in_ranges(terms, &ranges)
    }

    /// Every occurrence of every term whose row is in bounds
    fn hits_in_ranges(&self, terms: &[String], ranges: &[LineRange]) -> Vec<Hit> {
        let mut hits = Vec::new();
        for term in terms {
            let Some(occurrences) = self.index.word_occurrences(term) else {
                continue;
            };
            hits.extend(
                occurrences
                    .into_iter()
                    .filter(|occ| IndexTable::in_bounds(ranges, occ.row))
                    .map(|occ| Hit {
                        row: occ.row,
                        column: occ.column,
                        word: term.clone(),
                    }),
            );
        }
        hits
    }
}
