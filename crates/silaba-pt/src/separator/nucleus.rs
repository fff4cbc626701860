// Boundary resolver for vowel groups: diphthong or hiatus.
//
// A group is scanned left to right. Each adjacent pair is either merged into
// one nucleus (consuming both letters) or split, in which case the left
// letter becomes a nucleus of its own and scanning resumes at the right one.

use std::fmt;
use std::ops::Range;

use silaba_core::Letter;

use crate::portuguese::constants::{
    GLIDE_TOLERATED_CODA, NASAL_DIPHTHONGS, PALATAL_NASAL, UI_DIPHTHONG_ONSET,
};

/// Shape of one syllable nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NucleusKind {
    /// A single vowel letter.
    Monophthong,
    /// Vowel followed by an unstressed `i`/`u` glide: ai, eu, ou, ui...
    FallingDiphthong,
    /// ãe, õe, ão.
    NasalDiphthong,
}

impl NucleusKind {
    pub fn name(self) -> &'static str {
        match self {
            NucleusKind::Monophthong => "monophthong",
            NucleusKind::FallingDiphthong => "falling-diphthong",
            NucleusKind::NasalDiphthong => "nasal-diphthong",
        }
    }
}

impl fmt::Display for NucleusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why two adjacent vowels ended up in different syllables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HiatusRule {
    /// `í` or `ú` on either side of the pair.
    StressedHighVowel,
    /// Unstressed `i`/`u` followed by another vowel (pi-or, su-a-ve).
    RisingSequence,
    /// Two non-high vowels outside the nasal diphthongs (mo-e-da).
    VowelSequence,
    /// The glide would be closed by a coda or by `nh` (ca-ir, ra-i-nha).
    ClosedGlide,
    /// `u` + `i` without a vowel after it or an `l` onset before it (flu-i-do).
    HighPair,
    /// The previous pair already formed a diphthong (i-dei-a).
    AfterDiphthong,
}

impl HiatusRule {
    pub fn name(self) -> &'static str {
        match self {
            HiatusRule::StressedHighVowel => "stressed-high-vowel",
            HiatusRule::RisingSequence => "rising-sequence",
            HiatusRule::VowelSequence => "vowel-sequence",
            HiatusRule::ClosedGlide => "closed-glide",
            HiatusRule::HighPair => "high-pair",
            HiatusRule::AfterDiphthong => "after-diphthong",
        }
    }
}

impl fmt::Display for HiatusRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What comes right after a vowel group.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Follow<'a> {
    /// Nothing: the group ends the word.
    WordEnd,
    /// A consonant run whose first `coda_len` letters close the group's
    /// last syllable.
    Run { letters: &'a [Letter], coda_len: usize },
}

/// Neighbourhood of a vowel group: the onset attached before it and the
/// consonants after it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GroupContext<'a> {
    pub onset: &'a [Letter],
    pub follow: Follow<'a>,
}

/// One nucleus, by letter index relative to the group start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Nucleus {
    pub range: Range<usize>,
    pub kind: NucleusKind,
}

/// A group split into nuclei; `hiatuses[k]` explains the break between
/// `nuclei[k]` and `nuclei[k + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GroupSplit {
    pub nuclei: Vec<Nucleus>,
    pub hiatuses: Vec<HiatusRule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pair {
    Merge(NucleusKind),
    Split(HiatusRule),
}

/// Split a vowel group into nuclei.
pub(crate) fn resolve_group(group: &[Letter], ctx: &GroupContext<'_>) -> GroupSplit {
    let mut nuclei = Vec::new();
    let mut hiatuses = Vec::new();
    let mut i = 0;

    while i < group.len() {
        if i + 1 == group.len() {
            nuclei.push(Nucleus {
                range: i..i + 1,
                kind: NucleusKind::Monophthong,
            });
            break;
        }
        match decide_pair(group, i, ctx) {
            Pair::Merge(kind) => {
                nuclei.push(Nucleus {
                    range: i..i + 2,
                    kind,
                });
                if i + 2 < group.len() {
                    hiatuses.push(HiatusRule::AfterDiphthong);
                }
                i += 2;
            }
            Pair::Split(rule) => {
                nuclei.push(Nucleus {
                    range: i..i + 1,
                    kind: NucleusKind::Monophthong,
                });
                hiatuses.push(rule);
                i += 1;
            }
        }
    }

    GroupSplit { nuclei, hiatuses }
}

/// Decide the pair `group[i]`, `group[i + 1]`.
fn decide_pair(group: &[Letter], i: usize, ctx: &GroupContext<'_>) -> Pair {
    let first = &group[i];
    let second = &group[i + 1];

    if first.is_stressed_high() || second.is_stressed_high() {
        return Pair::Split(HiatusRule::StressedHighVowel);
    }
    if first.is_nasal && NASAL_DIPHTHONGS.contains(&[first.lower, second.lower]) {
        return Pair::Merge(NucleusKind::NasalDiphthong);
    }

    if first.is_high {
        if first.lower == 'u' && second.lower == 'i' {
            return decide_high_pair(group, i, ctx);
        }
        // Also covers the u of gu/qu before a or o, which the scanner leaves
        // in the group: qu-an-do, á-gu-a
        return Pair::Split(HiatusRule::RisingSequence);
    }

    if second.is_high && first.is_non_high_vowel() {
        if glide_is_closed(group, i + 1, ctx) {
            return Pair::Split(HiatusRule::ClosedGlide);
        }
        return Pair::Merge(NucleusKind::FallingDiphthong);
    }

    Pair::Split(HiatusRule::VowelSequence)
}

/// `u` + `i`: a diphthong when a vowel follows inside the group (con-lui-o)
/// or when the `u` opens a syllable whose onset is a lone `l` (to-lui-co).
fn decide_high_pair(group: &[Letter], i: usize, ctx: &GroupContext<'_>) -> Pair {
    if glide_is_closed(group, i + 1, ctx) {
        return Pair::Split(HiatusRule::ClosedGlide);
    }
    if i + 2 < group.len() {
        return Pair::Merge(NucleusKind::FallingDiphthong);
    }
    if i == 0 && matches!(ctx.onset, [l] if l.lower == UI_DIPHTHONG_ONSET) {
        return Pair::Merge(NucleusKind::FallingDiphthong);
    }
    Pair::Split(HiatusRule::HighPair)
}

/// True when the glide at `glide` would have to carry a coda: it is the last
/// vowel of the group and is followed by `nh`, or by a coda other than a
/// lone `s`.
fn glide_is_closed(group: &[Letter], glide: usize, ctx: &GroupContext<'_>) -> bool {
    if glide + 1 < group.len() {
        return false;
    }
    match ctx.follow {
        Follow::WordEnd => false,
        Follow::Run { letters, coda_len } => {
            if let [a, b, ..] = letters {
                if [a.lower, b.lower] == PALATAL_NASAL {
                    return true;
                }
            }
            match &letters[..coda_len] {
                [] => false,
                [s] => s.lower != GLIDE_TOLERATED_CODA,
                _ => true,
            }
        }
    }
}
