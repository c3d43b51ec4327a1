//! End-to-end queries over an engine built from files on disk.

mod fixtures;

use fixtures::Fixture;
use std::fs;
use trieseek::{EngineConfig, EngineError, Hit, Occurrence, SearchEngine, SourceFiles, SourceKind};

const NONE: &[&str] = &[];
const ALL_SECTIONS: &[&str] = &["Opening", "Middle", "Ending"];

fn engine(fixture: &Fixture) -> SearchEngine {
    let sources = SourceFiles::new(&fixture.words)
        .with_stop_words(&fixture.stop_words)
        .with_index(&fixture.index);
    SearchEngine::open(&sources).expect("Failed to build engine")
}

fn occ(row: u32, column: u32) -> Occurrence {
    Occurrence::new(row, column)
}

fn hit(row: u32, column: u32, word: &str) -> Hit {
    Hit {
        row,
        column,
        word: word.to_string(),
    }
}

#[test]
fn test_word_frequency_matches_occurrences() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    assert_eq!(engine.word_frequency("times"), 3);
    assert_eq!(engine.word_frequency("Tale."), 3);
    assert_eq!(engine.word_frequency("worst"), 2);
    assert_eq!(engine.word_frequency("the"), 0);
    assert_eq!(engine.word_frequency("dragon"), 0);
}

#[test]
fn test_columns_point_at_the_word() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    for word in ["times", "tale", "worst", "known", "chapter", "case"] {
        for found in engine.phrase_occurrences(word) {
            let line = engine.line(found.row).unwrap().to_ascii_lowercase();
            let tail: String = line.chars().skip(found.column as usize - 1).collect();
            assert!(
                tail.starts_with(word),
                "{} at {}:{} points at '{}'",
                word,
                found.row,
                found.column,
                tail
            );
        }
    }
}

#[test]
fn test_phrase_search() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    assert_eq!(engine.phrase_occurrences("best of times"), vec![occ(1, 12)]);
    // spans the line break
    assert_eq!(engine.phrase_occurrences("worst of times"), vec![occ(1, 38)]);
    // first word is a stop-word
    assert_eq!(
        engine.phrase_occurrences("the tale"),
        vec![occ(3, 1), occ(5, 13)]
    );
    assert_eq!(engine.phrase_occurrences("well-known tale"), vec![occ(2, 13)]);
    assert_eq!(engine.phrase_occurrences("well known"), vec![occ(2, 13)]);
    assert!(engine.phrase_occurrences("tale of woe").is_empty());
    assert!(engine.phrase_occurrences("   ").is_empty());
}

#[test]
fn test_prefix_search() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    assert_eq!(
        engine.prefix_occurrences("ta"),
        vec![occ(2, 24), occ(3, 5), occ(5, 17)]
    );
    assert_eq!(
        engine.prefix_occurrences("T"),
        vec![
            occ(1, 20),
            occ(2, 4),
            occ(2, 24),
            occ(3, 5),
            occ(4, 9),
            occ(4, 25),
            occ(5, 17)
        ]
    );
    assert!(engine.prefix_occurrences("zz").is_empty());
}

#[test]
fn test_line_boolean_queries() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    assert_eq!(engine.lines_containing_all(&["tale", "times"]), vec![2]);
    assert_eq!(engine.lines_containing_any(&["worst", "begins"]), vec![1, 5, 3]);
    assert_eq!(
        engine.lines_containing_all_excluding(&["tale"], &["ends"]),
        vec![2, 3]
    );
    assert!(engine.lines_containing_all(&["tale", "dragon"]).is_empty());
}

#[test]
fn test_line_boolean_subsets() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    let a = ["times"];
    let b = ["tale", "known"];
    let union = ["times", "tale", "known"];

    let all_union = engine.lines_containing_all(&union);
    let all_a = engine.lines_containing_all(&a);
    let all_b = engine.lines_containing_all(&b);
    assert!(all_union.iter().all(|row| all_a.contains(row) && all_b.contains(row)));

    let any = engine.lines_containing_any(&union);
    assert!(all_union.iter().all(|row| any.contains(row)));

    let excluded = engine.lines_containing_any(&b);
    let not = engine.lines_containing_all_excluding(&a, &b);
    assert_eq!(not, vec![1, 4]);
    assert!(not.iter().all(|row| !excluded.contains(row)));
}

#[test]
fn test_rebuild_is_idempotent() {
    let fixture = Fixture::new();
    let first = engine(&fixture);
    let second = engine(&fixture);

    for word in ["times", "tale", "worst", "well"] {
        assert_eq!(first.phrase_occurrences(word), second.phrase_occurrences(word));
    }
    assert_eq!(first.prefix_occurrences("t"), second.prefix_occurrences("t"));
    assert_eq!(first.stats(), second.stats());
}

#[test]
fn test_queries_are_repeatable() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    assert_eq!(
        engine.phrase_occurrences("the tale"),
        engine.phrase_occurrences("the tale")
    );
    assert_eq!(
        engine.sections_compound(&["tale"], ALL_SECTIONS, &["worst"]),
        engine.sections_compound(&["tale"], ALL_SECTIONS, &["worst"])
    );
}

#[test]
fn test_section_boundaries_are_half_open() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    // row 3 starts Middle, so the Opening hit for "tale" is row 2 only
    assert_eq!(
        engine.sections_containing_any(&["tale"], &["Opening"]),
        vec![hit(2, 24, "tale")]
    );
    assert_eq!(
        engine.sections_containing_any(&["tale"], &["Middle"]),
        vec![hit(3, 5, "tale")]
    );
}

#[test]
fn test_section_ranges() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    let ranges = engine.resolve_ranges(&["Ending", "Nope", "Opening"]);
    assert_eq!(ranges.len(), 2);
    assert_eq!((ranges[0].start, ranges[0].end), (5, 6));
    assert_eq!((ranges[1].start, ranges[1].end), (1, 3));
    assert_eq!(engine.sections().len(), 3);
}

#[test]
fn test_sections_containing_all() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    assert_eq!(
        engine.sections_containing_all(&["tale", "times"], ALL_SECTIONS),
        vec![
            hit(2, 24, "tale"),
            hit(3, 5, "tale"),
            hit(1, 20, "times"),
            hit(2, 4, "times"),
            hit(4, 25, "times"),
        ]
    );
    assert!(engine.sections_containing_all(&["tale"], &["Nope"]).is_empty());
    assert_eq!(engine.sections_containing_all(&["begins"], NONE), vec![hit(3, 10, "begins")]);
}

#[test]
fn test_section_hits_stay_in_bounds() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    let ranges = engine.resolve_ranges(&["Middle"]);
    for found in engine.sections_containing_any(&["tale", "times", "worst"], &["Middle"]) {
        assert!(ranges.iter().any(|r| r.contains(found.row)));
    }
}

#[test]
fn test_sections_containing_any_and_excluding() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    assert_eq!(
        engine.sections_containing_any(&["worst"], &["Ending"]),
        vec![hit(5, 1, "worst")]
    );
    assert_eq!(
        engine.sections_containing_all_excluding(&["tale"], ALL_SECTIONS, &["begins"]),
        vec![hit(2, 24, "tale"), hit(5, 17, "tale")]
    );
}

#[test]
fn test_sections_compound() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    assert_eq!(
        engine.sections_compound(&["tale"], ALL_SECTIONS, &["worst"]),
        vec![
            hit(2, 24, "tale"),
            hit(5, 17, "tale"),
            hit(1, 38, "worst"),
            hit(5, 1, "worst"),
        ]
    );
    assert!(engine.sections_compound(&["tale"], &["Middle"], &["worst"]).is_empty());
}

#[test]
fn test_stop_words_and_stats() {
    let fixture = Fixture::new();
    let engine = engine(&fixture);

    assert!(engine.is_stop_word("The"));
    assert!(!engine.is_stop_word("tale"));

    let stats = engine.stats();
    assert_eq!(stats.lines, 5);
    assert_eq!(stats.sections, 3);
    assert_eq!(stats.stop_words, 6);
    assert_eq!(engine.line_count(), 5);
}

#[test]
fn test_missing_words_file_is_fatal() {
    let fixture = Fixture::new();
    let sources = SourceFiles::new(fixture.dir().join("missing.txt"));

    let err = SearchEngine::open(&sources).unwrap_err();
    assert!(matches!(err, EngineError::Io { .. }));
    assert_eq!(err.source_kind(), Some(SourceKind::Words));
}

#[test]
fn test_malformed_index_is_fatal() {
    let fixture = Fixture::with_index("Opening,1\nMiddle three\n");
    let sources = SourceFiles::new(&fixture.words).with_index(&fixture.index);

    match SearchEngine::open(&sources) {
        Err(EngineError::InvalidIndexEntry { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected an index error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_config_changes_index_delimiter() {
    let fixture = Fixture::with_index("Opening;1\nRest;3\n");
    let config_path = fixture.dir().join("config.json");
    fs::write(&config_path, r#"{ "index_delimiter": ";" }"#).unwrap();

    let config = EngineConfig::from_json_file(&config_path).unwrap();
    assert_eq!(config.index_delimiter, ';');
    assert!(config.progress);

    let sources = SourceFiles::new(&fixture.words)
        .with_stop_words(&fixture.stop_words)
        .with_index(&fixture.index);
    let engine = SearchEngine::open_with_config(&sources, config).unwrap();

    let ranges = engine.resolve_ranges(&["Rest"]);
    assert_eq!((ranges[0].start, ranges[0].end), (3, 6));
}

#[test]
fn test_invalid_config_is_reported() {
    let fixture = Fixture::new();
    let config_path = fixture.dir().join("config.json");
    fs::write(&config_path, "{ not json").unwrap();

    let err = EngineConfig::from_json_file(&config_path).unwrap_err();
    assert_eq!(err.source_kind(), Some(SourceKind::Config));
}

#[test]
fn test_trailing_hyphen_runs_keep_columns_aligned() {
    let engine = SearchEngine::from_text("ab-c---- de-f---- xyz", "", "").unwrap();

    assert_eq!(engine.phrase_occurrences("xyz"), vec![occ(1, 19)]);
    assert_eq!(engine.phrase_occurrences("de f xyz"), vec![occ(1, 10)]);
}

#[test]
fn test_unordered_index_is_fatal() {
    let fixture = Fixture::with_index("Body,3\nIntro,1\n");
    let sources = SourceFiles::new(&fixture.words).with_index(&fixture.index);

    let err = SearchEngine::open(&sources).unwrap_err();
    assert_eq!(err.source_kind(), Some(SourceKind::Index));
}
