// Syllable separation -- rule-based Portuguese syllabification
//
// The separator works in four stages:
// 1. Classify every character into a Letter (silaba_core::letter)
// 2. Scan letters into alternating consonant runs and vowel groups (scanner)
// 3. Split each run into coda/onset (onset) and each group into nuclei (nucleus)
// 4. Assemble one syllable per nucleus, attaching the onset before it and the
//    coda after it

pub mod nucleus;
pub mod onset;
pub(crate) mod scanner;

use std::fmt;
use std::ops::Range;

use silaba_core::{Letter, WordError, classify, validate_word};

use self::nucleus::{Follow, GroupContext, HiatusRule, NucleusKind, resolve_group};
use self::onset::{OnsetRule, RunPosition, RunSplit, split_run};
use self::scanner::{Segment, scan};

// ---------------------------------------------------------------------------
// Boundaries
// ---------------------------------------------------------------------------

/// The rule that placed a syllable break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryRule {
    /// The break falls inside (or just before) a consonant run.
    Consonant(OnsetRule),
    /// The break falls between two vowels.
    Hiatus(HiatusRule),
}

impl BoundaryRule {
    pub fn name(self) -> &'static str {
        match self {
            BoundaryRule::Consonant(rule) => rule.name(),
            BoundaryRule::Hiatus(rule) => rule.name(),
        }
    }
}

impl fmt::Display for BoundaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A syllable break: the byte offset where a syllable (other than the first)
/// starts, and the rule that put it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub offset: usize,
    pub rule: BoundaryRule,
}

// ---------------------------------------------------------------------------
// Syllabification
// ---------------------------------------------------------------------------

/// The full result of separating one word.
///
/// Syllables are stored as byte ranges into the word; together they cover
/// the word exactly, in order, with no gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllabification<'a> {
    word: &'a str,
    syllables: Vec<Range<usize>>,
    boundaries: Vec<Boundary>,
    nuclei: Vec<NucleusKind>,
    onset_rules: Vec<OnsetRule>,
}

impl<'a> Syllabification<'a> {
    /// Separate `word` into syllables. Never fails: any string is accepted,
    /// and the empty string has no syllables.
    pub fn of(word: &'a str) -> Self {
        let letters = classify(word);
        if letters.is_empty() {
            return Self {
                word,
                syllables: Vec::new(),
                boundaries: Vec::new(),
                nuclei: Vec::new(),
                onset_rules: Vec::new(),
            };
        }

        let segments = scan(&letters);
        let splits = split_runs(&letters, &segments);

        // Letter index where each syllable starts, and the rule for every
        // start after the first.
        let mut starts: Vec<usize> = vec![0];
        let mut rules: Vec<BoundaryRule> = Vec::new();
        let mut nuclei: Vec<NucleusKind> = Vec::new();

        for (k, segment) in segments.iter().enumerate() {
            if !segment.is_group() {
                continue;
            }
            let previous = k.checked_sub(1).map(|p| (&segments[p], splits[p]));
            let next = segments.get(k + 1).map(|s| (s, splits[k + 1]));

            let onset: &[Letter] = match previous {
                Some((run, Some(split))) => {
                    &letters[run.range.start + split.coda_len..run.range.end]
                }
                _ => &[],
            };
            let follow = match next {
                Some((run, Some(split))) => Follow::Run {
                    letters: &letters[run.range.clone()],
                    coda_len: split.coda_len,
                },
                _ => Follow::WordEnd,
            };
            let ctx = GroupContext { onset, follow };
            let group = resolve_group(&letters[segment.range.clone()], &ctx);

            // The first group's syllable always starts at 0
            if k > 1 {
                if let Some((run, Some(split))) = previous {
                    starts.push(run.range.start + split.coda_len);
                    rules.push(BoundaryRule::Consonant(split.rule));
                }
            }

            nuclei.extend(group.nuclei.iter().map(|n| n.kind));
            for (nucleus, rule) in group.nuclei.iter().skip(1).zip(&group.hiatuses) {
                starts.push(segment.range.start + nucleus.range.start);
                rules.push(BoundaryRule::Hiatus(*rule));
            }
        }

        // A vowel-less word is a single leading run: one syllable
        let onset_rules: Vec<OnsetRule> = splits.iter().flatten().map(|s| s.rule).collect();

        let result = Self::assemble(word, &letters, &starts, &rules, nuclei, onset_rules);
        log::trace!(
            "{word:?}: {:?} boundaries={:?}",
            result.syllables(),
            result.boundaries
        );
        result
    }

    /// Turn letter-index syllable starts into byte ranges.
    fn assemble(
        word: &'a str,
        letters: &[Letter],
        starts: &[usize],
        rules: &[BoundaryRule],
        nuclei: Vec<NucleusKind>,
        onset_rules: Vec<OnsetRule>,
    ) -> Self {
        let byte_at = |index: usize| letters.get(index).map_or(word.len(), |l| l.offset);

        let syllables: Vec<Range<usize>> = starts
            .iter()
            .enumerate()
            .map(|(i, &start)| {
                let end = starts.get(i + 1).copied().unwrap_or(letters.len());
                byte_at(start)..byte_at(end)
            })
            .collect();

        let boundaries: Vec<Boundary> = starts[1..]
            .iter()
            .zip(rules)
            .map(|(&start, &rule)| Boundary {
                offset: byte_at(start),
                rule,
            })
            .collect();

        // Release builds skip these; tests/properties.rs checks the same
        // invariants over generated input.
        debug_assert!(syllables.iter().all(|r| r.start < r.end));
        debug_assert!(syllables.windows(2).all(|w| w[0].end == w[1].start));
        debug_assert_eq!(syllables.first().map(|r| r.start), Some(0));
        debug_assert_eq!(syllables.last().map(|r| r.end), Some(word.len()));

        Self {
            word,
            syllables,
            boundaries,
            nuclei,
            onset_rules,
        }
    }

    /// The word that was separated.
    pub fn word(&self) -> &'a str {
        self.word
    }

    /// The syllables, in order.
    pub fn syllables(&self) -> Vec<&'a str> {
        let word = self.word;
        self.syllables.iter().map(|r| &word[r.clone()]).collect()
    }

    /// Byte ranges of the syllables.
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.syllables
    }

    /// One entry per syllable break.
    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    /// Nucleus shape of every syllable. Empty for a vowel-less word, whose
    /// single syllable has no nucleus.
    pub fn nuclei(&self) -> &[NucleusKind] {
        &self.nuclei
    }

    /// The rule applied to every consonant run, leading and trailing runs
    /// included, in word order.
    pub fn onset_rules(&self) -> &[OnsetRule] {
        &self.onset_rules
    }

    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn into_syllables(self) -> Vec<&'a str> {
        self.syllables()
    }

    /// One character per input character: `'-'` where a syllable other than
    /// the first starts, `' '` elsewhere.
    pub fn pattern(&self) -> String {
        let mut breaks = self.boundaries.iter().map(|b| b.offset).peekable();
        self.word
            .char_indices()
            .map(|(offset, _)| {
                if breaks.next_if_eq(&offset).is_some() {
                    '-'
                } else {
                    ' '
                }
            })
            .collect()
    }
}

/// Coda/onset split for every run segment; `None` for groups.
fn split_runs(letters: &[Letter], segments: &[Segment]) -> Vec<Option<RunSplit>> {
    let last = segments.len().saturating_sub(1);
    segments
        .iter()
        .enumerate()
        .map(|(k, segment)| {
            if !segment.is_run() {
                return None;
            }
            let position = if k == 0 {
                RunPosition::Leading
            } else if k == last {
                RunPosition::Trailing
            } else {
                RunPosition::Interior
            };
            Some(split_run(&letters[segment.range.clone()], position))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Convenience functions
// ---------------------------------------------------------------------------

/// Separate `word` into syllables.
///
/// Each syllable is a sub-slice of `word`, case preserved, and concatenating
/// them gives `word` back. Empty input gives no syllables.
pub fn separate(word: &str) -> Vec<&str> {
    Syllabification::of(word).into_syllables()
}

/// Like [`separate`], but rejects empty words and words containing anything
/// other than letters.
pub fn separate_checked(word: &str) -> Result<Vec<&str>, WordError> {
    validate_word(word)?;
    Ok(separate(word))
}

pub fn syllable_count(word: &str) -> usize {
    Syllabification::of(word).len()
}

/// The word with `separator` between syllables: `insert_separators("bola", "-")`
/// gives `"bo-la"`.
pub fn insert_separators(word: &str, separator: &str) -> String {
    separate(word).join(separator)
}

/// See [`Syllabification::pattern`].
pub fn syllable_pattern(word: &str) -> String {
    Syllabification::of(word).pattern()
}
