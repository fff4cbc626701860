// Letter classifier: one classified Letter per input character.

use crate::character::{
    is_high_vowel, is_liquid, is_nasal_vowel, is_obstruent, is_stressed_vowel, is_vowel,
    simple_lower,
};

/// Phonological role of a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Vowel,
    Consonant,
}

/// One input character plus the flags the syllable rules look at.
///
/// Vowel flags are only ever set on vowels and consonant flags only on
/// consonants. Digits, punctuation and other non-letters get the consonant
/// role with every flag cleared; the cluster rules match on lowercase letter
/// tables, which no such character appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
    /// The character as written (case preserved).
    pub ch: char,
    /// Simple lowercase form, used for all rule matching.
    pub lower: char,
    /// Byte offset of `ch` in the input string.
    pub offset: usize,
    pub role: Role,
    /// `i` or `u` with no diacritic.
    pub is_high: bool,
    /// Acute or circumflex mark.
    pub is_stressed: bool,
    /// Nasal tilde.
    pub is_nasal: bool,
    /// `l` or `r`.
    pub is_liquid: bool,
    /// `b c d f g p t v`.
    pub is_obstruent: bool,
}

impl Letter {
    /// Classify a single character found at byte `offset`.
    pub fn classify(ch: char, offset: usize) -> Self {
        let lower = simple_lower(ch);
        let vowel = is_vowel(lower);
        Self {
            ch,
            lower,
            offset,
            role: if vowel { Role::Vowel } else { Role::Consonant },
            is_high: vowel && is_high_vowel(lower),
            is_stressed: vowel && is_stressed_vowel(lower),
            is_nasal: vowel && is_nasal_vowel(lower),
            is_liquid: !vowel && is_liquid(lower),
            is_obstruent: !vowel && is_obstruent(lower),
        }
    }

    pub fn is_vowel(&self) -> bool {
        self.role == Role::Vowel
    }

    /// A vowel that is neither `i` nor `u` (nor `í`, `ú`): a, e, o and
    /// their stressed or nasal forms.
    pub fn is_non_high_vowel(&self) -> bool {
        self.is_vowel() && !matches!(self.lower, 'i' | 'u' | '\u{00ED}' | '\u{00FA}' | '\u{00FC}')
    }

    /// `í` or `ú`.
    pub fn is_stressed_high(&self) -> bool {
        matches!(self.lower, '\u{00ED}' | '\u{00FA}')
    }
}

/// Classify every character of `word`, in order.
///
/// Empty input gives an empty sequence.
pub fn classify(word: &str) -> Vec<Letter> {
    word.char_indices()
        .map(|(offset, ch)| Letter::classify(ch, offset))
        .collect()
}
