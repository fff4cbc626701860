//! Golden-file tests: separate every word of the reference corpus and compare
//! with the expected syllables.
//!
//! Run: cargo test -p silaba-pt --test corpus

use std::path::PathBuf;

use serde::Deserialize;
use silaba_pt::{Syllabification, insert_separators, separate, syllable_count};

#[derive(Debug, Deserialize)]
struct Entry {
    word: String,
    syllables: Vec<String>,
}

// ---------------------------------------------------------------------------
// Helper: load the corpus
// ---------------------------------------------------------------------------

fn load_corpus() -> Vec<Entry> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/corpus.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read corpus {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse corpus {}: {}", path.display(), e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn corpus_is_loaded() {
    let corpus = load_corpus();
    assert!(corpus.len() >= 100, "corpus has {} entries", corpus.len());
}

#[test]
fn corpus_separation() {
    let corpus = load_corpus();
    let mut mismatches = Vec::new();

    for entry in &corpus {
        let actual = separate(&entry.word);
        if actual != entry.syllables {
            mismatches.push(format!(
                "  {}: expected {:?}, got {:?}",
                entry.word, entry.syllables, actual
            ));
        }
    }

    assert!(
        mismatches.is_empty(),
        "{} of {} words mismatched:\n{}",
        mismatches.len(),
        corpus.len(),
        mismatches.join("\n")
    );
}

#[test]
fn corpus_round_trip() {
    for entry in load_corpus() {
        assert_eq!(separate(&entry.word).concat(), entry.word);
        assert_eq!(
            insert_separators(&entry.word, "").as_str(),
            entry.word.as_str()
        );
    }
}

#[test]
fn corpus_uppercase_matches_lowercase() {
    for entry in load_corpus() {
        let upper = entry.word.to_uppercase();
        // Uppercasing must not change the character count for the comparison
        if upper.chars().count() != entry.word.chars().count() {
            continue;
        }
        let expected: Vec<String> = entry.syllables.iter().map(|s| s.to_uppercase()).collect();
        assert_eq!(separate(&upper), expected, "{}", upper);
    }
}

#[test]
fn corpus_boundaries_match_syllables() {
    for entry in load_corpus() {
        let s = Syllabification::of(&entry.word);
        assert_eq!(s.boundaries().len() + 1, s.len(), "{}", entry.word);
        assert_eq!(syllable_count(&entry.word), entry.syllables.len());

        // Each boundary sits at the start of the matching syllable
        let mut offset = 0;
        for (syllable, boundary) in entry.syllables.iter().zip(s.boundaries()) {
            offset += syllable.len();
            assert_eq!(boundary.offset, offset, "{}", entry.word);
        }
    }
}
