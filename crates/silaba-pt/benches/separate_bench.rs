// Criterion benchmarks for silaba-pt.
//
// Words come from the golden corpus at tests/data/corpus.json.
//
// Run:
//   cargo bench -p silaba-pt

use criterion::{Criterion, criterion_group, criterion_main};
use silaba_pt::{Syllabification, insert_separators, separate};

fn load_words() -> Vec<String> {
    let path =
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/corpus.json");
    let contents = std::fs::read_to_string(&path).unwrap_or_default();
    let entries: Vec<serde_json::Value> = serde_json::from_str(&contents).unwrap_or_default();
    entries
        .iter()
        .filter_map(|e| e["word"].as_str())
        .map(|w| w.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Separate every corpus word.
fn bench_separate_corpus(c: &mut Criterion) {
    let words = load_words();
    c.bench_function("separate_corpus", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(separate(word));
            }
        });
    });
}

/// Full result with boundary rules, for the explain view.
fn bench_syllabification_corpus(c: &mut Criterion) {
    let words = load_words();
    c.bench_function("syllabification_corpus", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(Syllabification::of(word));
            }
        });
    });
}

/// One long word with many hiatuses and clusters.
fn bench_long_word(c: &mut Criterion) {
    let word = "inconstitucionalissimamente".repeat(8);
    c.bench_function("insert_separators_long_word", |b| {
        b.iter(|| std::hint::black_box(insert_separators(&word, "-")));
    });
}

criterion_group!(
    benches,
    bench_separate_corpus,
    bench_syllabification_corpus,
    bench_long_word,
);
criterion_main!(benches);
