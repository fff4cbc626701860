// Boundary resolver for consonant runs: coda/onset split.

use std::fmt;

use silaba_core::Letter;

use crate::portuguese::constants::{DIGRAPHS, GEMINATES, LABIAL_ONSETS, WORD_INITIAL_CLUSTERS};

/// The rule that decided how a consonant run was split.
///
/// Variants are listed in precedence order for interior runs:
/// `Digraph` and `LabialOnset` first, `SingleOnset` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnsetRule {
    /// Leading run: everything is onset of the first syllable.
    WordStart,
    /// Leading run equal to a Greek/Latin cluster such as `pn` or `ps`.
    InitialCluster,
    /// Trailing run: everything is coda of the last syllable.
    WordEnd,
    /// Run ends in `ch`, `lh` or `nh`.
    Digraph,
    /// Run ends in `gu`/`qu` with a silent `u`.
    LabialOnset,
    /// Run is exactly `rr` or `ss`.
    Geminate,
    /// Run ends in an obstruent followed by `l` or `r`.
    LiquidCluster,
    /// Only the last consonant starts the next syllable.
    SingleOnset,
}

impl OnsetRule {
    pub fn name(self) -> &'static str {
        match self {
            OnsetRule::WordStart => "word-start",
            OnsetRule::InitialCluster => "initial-cluster",
            OnsetRule::WordEnd => "word-end",
            OnsetRule::Digraph => "digraph",
            OnsetRule::LabialOnset => "labial-onset",
            OnsetRule::Geminate => "geminate",
            OnsetRule::LiquidCluster => "liquid-cluster",
            OnsetRule::SingleOnset => "single-onset",
        }
    }
}

impl fmt::Display for OnsetRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a run sits in the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunPosition {
    /// Before the first vowel group.
    Leading,
    /// Between two vowel groups.
    Interior,
    /// After the last vowel group.
    Trailing,
}

/// Result of splitting one run: the first `coda_len` letters close the
/// preceding syllable, the rest open the following one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunSplit {
    pub coda_len: usize,
    pub rule: OnsetRule,
}

/// Split a consonant run into coda and onset.
pub(crate) fn split_run(run: &[Letter], position: RunPosition) -> RunSplit {
    let len = run.len();
    match position {
        RunPosition::Leading => {
            let rule = if is_initial_cluster(run) {
                OnsetRule::InitialCluster
            } else {
                OnsetRule::WordStart
            };
            return RunSplit { coda_len: 0, rule };
        }
        RunPosition::Trailing => {
            return RunSplit {
                coda_len: len,
                rule: OnsetRule::WordEnd,
            };
        }
        RunPosition::Interior => {}
    }

    if let Some(pair) = pair_at_end(run) {
        if DIGRAPHS.contains(&pair) {
            return with_onset(len, 2, OnsetRule::Digraph);
        }
        if LABIAL_ONSETS.contains(&pair) {
            return with_onset(len, 2, OnsetRule::LabialOnset);
        }
        if len == 2 && GEMINATES.contains(&pair) {
            return with_onset(len, 1, OnsetRule::Geminate);
        }
        if run[len - 2].is_obstruent && run[len - 1].is_liquid {
            return with_onset(len, 2, OnsetRule::LiquidCluster);
        }
    }

    with_onset(len, len.min(1), OnsetRule::SingleOnset)
}

/// The last two letters of the run, lowercased.
fn pair_at_end(run: &[Letter]) -> Option<[char; 2]> {
    match run {
        [.., a, b] => Some([a.lower, b.lower]),
        _ => None,
    }
}

fn is_initial_cluster(run: &[Letter]) -> bool {
    run.len() == 2 && pair_at_end(run).is_some_and(|p| WORD_INITIAL_CLUSTERS.contains(&p))
}

fn with_onset(len: usize, onset_len: usize, rule: OnsetRule) -> RunSplit {
    RunSplit {
        coda_len: len - onset_len,
        rule,
    }
}
