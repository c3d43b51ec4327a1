#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use trieseek::utils::{format_line, normalize, normalize_word};
use trieseek::{Occurrence, SearchEngine};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    document: &'a str,
    stop_words: &'a str,
    phrase: &'a str,
    words: Vec<&'a str>,
    sections: Vec<&'a str>,
}

/// The text at a recorded column must normalize to something starting with `key`
fn assert_round_trip(engine: &SearchEngine, found: Occurrence, key: &str) {
    let line = engine.line(found.row).expect("occurrence row outside the document");
    let tail: String = line.chars().skip(found.column as usize - 1).collect();
    let first = normalize(&tail).into_iter().next().unwrap_or_default();
    assert!(
        first.starts_with(key),
        "{:?} at {}:{} reads {:?}",
        key,
        found.row,
        found.column,
        tail
    );
}

fuzz_target!(|input: Input| {
    let Ok(engine) = SearchEngine::from_text(input.document, input.stop_words, "") else {
        return;
    };

    let formatted = format_line(input.phrase);
    if let Some(first) = formatted.split(' ').next().filter(|t| !t.is_empty()) {
        for found in engine.phrase_occurrences(input.phrase) {
            assert_round_trip(&engine, found, first);
        }
    }

    let prefix = normalize_word(input.phrase);
    for found in engine.prefix_occurrences(input.phrase) {
        assert_round_trip(&engine, found, &prefix);
    }

    for word in &input.words {
        let key = normalize_word(word);
        for found in engine.index().words().lookup_occurrences(&key).unwrap_or_default() {
            assert_round_trip(&engine, found, &key);
        }
    }

    let all = engine.lines_containing_all(&input.words);
    let any = engine.lines_containing_any(&input.words);
    assert!(all.iter().all(|row| any.contains(row)));

    let _ = engine.sections_containing_all(&input.words, &input.sections);
    let _ = engine.sections_compound(&input.words, &input.sections, &input.words);
});
