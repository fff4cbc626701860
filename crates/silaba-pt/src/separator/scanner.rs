// Token scanner: alternating consonant runs and vowel groups.

use std::ops::Range;

use silaba_core::Letter;

use crate::portuguese::constants::{SILENT_U, SILENT_U_CARRIERS, SILENT_U_TRIGGERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegmentKind {
    /// Maximal run of consonants.
    Run,
    /// Maximal run of vowels.
    Group,
}

/// A contiguous slice of the classified letters, by letter index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segment {
    pub kind: SegmentKind,
    pub range: Range<usize>,
}

impl Segment {
    pub fn is_run(&self) -> bool {
        self.kind == SegmentKind::Run
    }

    pub fn is_group(&self) -> bool {
        self.kind == SegmentKind::Group
    }
}

/// Partition `letters` into alternating runs and groups.
///
/// Segments are never empty: a word starting with a vowel simply has no
/// leading run, and one ending with a vowel has no trailing run. A silent
/// `u` after `g`/`q` is moved from the group into the preceding run.
pub(crate) fn scan(letters: &[Letter]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut start = 0;

    while start < letters.len() {
        let vowel = letters[start].is_vowel();
        let mut end = start + 1;
        while end < letters.len() && letters[end].is_vowel() == vowel {
            end += 1;
        }
        let kind = if vowel {
            SegmentKind::Group
        } else {
            SegmentKind::Run
        };
        segments.push(Segment {
            kind,
            range: start..end,
        });
        start = end;
    }

    absorb_silent_u(letters, &mut segments);
    segments
}

/// Move the `u` of `gue`, `gui`, `que`, `qui` (and `ü` forms) out of its
/// vowel group and into the preceding consonant run.
///
/// The group keeps at least one vowel because the `u` must be followed by
/// `e` or `i` for the rule to apply.
fn absorb_silent_u(letters: &[Letter], segments: &mut [Segment]) {
    for i in 0..segments.len().saturating_sub(1) {
        if !segments[i].is_run() || !segments[i + 1].is_group() {
            continue;
        }
        let run_last = letters[segments[i].range.end - 1].lower;
        let group = segments[i + 1].range.clone();
        if group.len() < 2 {
            continue;
        }
        let first = letters[group.start].lower;
        let second = letters[group.start + 1].lower;
        if SILENT_U_CARRIERS.contains(&run_last)
            && SILENT_U.contains(&first)
            && SILENT_U_TRIGGERS.contains(&second)
        {
            segments[i].range.end += 1;
            segments[i + 1].range.start += 1;
        }
    }
}
