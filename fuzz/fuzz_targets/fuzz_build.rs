#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Tokenizing and indexing arbitrary text must never panic
    let _ = trieseek::utils::normalize(data);
    let _ = trieseek::utils::format_line(data);
    let _ = trieseek::SearchEngine::from_text(data, "the\na", "");
});
