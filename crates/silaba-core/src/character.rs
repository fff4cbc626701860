// Character classification for Portuguese orthography

// ---------------------------------------------------------------------------
// Portuguese phonological constants
// ---------------------------------------------------------------------------

/// Portuguese vowel letters (lowercase), plain and diacritic forms.
const PORTUGUESE_VOWELS: &[char] = &[
    'a', 'e', 'i', 'o', 'u', //
    '\u{00E1}', // á
    '\u{00E0}', // à
    '\u{00E2}', // â
    '\u{00E3}', // ã
    '\u{00E9}', // é
    '\u{00EA}', // ê
    '\u{00ED}', // í
    '\u{00F3}', // ó
    '\u{00F4}', // ô
    '\u{00F5}', // õ
    '\u{00FA}', // ú
    '\u{00FC}', // ü
];

/// Vowels carrying an acute or circumflex stress mark.
const STRESSED_VOWELS: &[char] = &[
    '\u{00E1}', '\u{00E9}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{00E2}', '\u{00EA}', '\u{00F4}',
];

/// Vowels carrying the nasal tilde: ã õ
const NASAL_VOWELS: &[char] = &['\u{00E3}', '\u{00F5}'];

/// Liquid consonants: l r
const LIQUIDS: &[char] = &['l', 'r'];

/// Obstruents that form an inseparable onset when followed by a liquid.
const OBSTRUENTS: &[char] = &['b', 'c', 'd', 'f', 'g', 'p', 't', 'v'];

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

impl CharType {
    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            CharType::Unknown => "symbol",
            CharType::Letter => "letter",
            CharType::Digit => "digit",
            CharType::Whitespace => "whitespace",
            CharType::Punctuation => "punctuation",
        }
    }
}

/// Returns the character type for a given character.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

fn is_punctuation_char(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{00AB}' // «
                | '\u{00BB}' // »
                | '\u{2010}' // HYPHEN
                | '\u{2011}' // NON-BREAKING HYPHEN
                | '\u{2013}' // EN DASH
                | '\u{2014}' // EM DASH
                | '\u{2018}' // LEFT SINGLE QUOTATION MARK
                | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
                | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
                | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
                | '\u{2026}' // HORIZONTAL ELLIPSIS
        )
}

// ---------------------------------------------------------------------------
// Portuguese phonological classification
// ---------------------------------------------------------------------------

/// Check whether a character is a Portuguese vowel (case-insensitive).
pub fn is_vowel(c: char) -> bool {
    PORTUGUESE_VOWELS.contains(&simple_lower(c))
}

/// `i` or `u` without any diacritic. Expects a lowercase character.
pub fn is_high_vowel(c: char) -> bool {
    c == 'i' || c == 'u'
}

/// Acute or circumflex vowel. Expects a lowercase character.
pub fn is_stressed_vowel(c: char) -> bool {
    STRESSED_VOWELS.contains(&c)
}

/// `ã` or `õ`. Expects a lowercase character.
pub fn is_nasal_vowel(c: char) -> bool {
    NASAL_VOWELS.contains(&c)
}

/// `l` or `r`. Expects a lowercase character.
pub fn is_liquid(c: char) -> bool {
    LIQUIDS.contains(&c)
}

/// One of `b c d f g p t v`. Expects a lowercase character.
pub fn is_obstruent(c: char) -> bool {
    OBSTRUENTS.contains(&c)
}

// ---------------------------------------------------------------------------
// Simple case conversion
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
///
/// For characters with multi-character lowercase expansions, returns only
/// the first character so that the mapping stays one-to-one.
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    iter.next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- CharType tests --

    #[test]
    fn char_type_letters() {
        assert_eq!(get_char_type('A'), CharType::Letter);
        assert_eq!(get_char_type('z'), CharType::Letter);
        assert_eq!(get_char_type('\u{00E7}'), CharType::Letter); // ç
        assert_eq!(get_char_type('\u{00C3}'), CharType::Letter); // Ã
    }

    #[test]
    fn char_type_digits() {
        assert_eq!(get_char_type('0'), CharType::Digit);
        assert_eq!(get_char_type('9'), CharType::Digit);
    }

    #[test]
    fn char_type_whitespace() {
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\t'), CharType::Whitespace);
    }

    #[test]
    fn char_type_punctuation() {
        assert_eq!(get_char_type('-'), CharType::Punctuation);
        assert_eq!(get_char_type('\''), CharType::Punctuation);
        assert_eq!(get_char_type('\u{00AB}'), CharType::Punctuation); // «
        assert_eq!(get_char_type('\u{2014}'), CharType::Punctuation); // EM DASH
    }

    #[test]
    fn char_type_unknown() {
        assert_eq!(get_char_type('\u{20AC}'), CharType::Unknown); // €
        assert_eq!(CharType::Unknown.name(), "symbol");
    }

    // -- Vowel / Consonant tests --

    #[test]
    fn portuguese_vowels() {
        for c in "aeiouáàâãéêíóôõúü".chars() {
            assert!(is_vowel(c), "{c} should be a vowel");
        }
        assert!(is_vowel('A'));
        assert!(is_vowel('\u{00C3}')); // Ã
        assert!(is_vowel('\u{00DA}')); // Ú
        assert!(!is_vowel('y'));
        assert!(!is_vowel('\u{00E7}')); // ç
    }

    #[test]
    fn vowel_flags() {
        assert!(is_high_vowel('i'));
        assert!(is_high_vowel('u'));
        assert!(!is_high_vowel('\u{00ED}')); // í
        assert!(!is_high_vowel('\u{00FC}')); // ü
        assert!(is_stressed_vowel('\u{00ED}'));
        assert!(is_stressed_vowel('\u{00EA}')); // ê
        assert!(!is_stressed_vowel('\u{00E0}')); // à is not a stress mark
        assert!(is_nasal_vowel('\u{00E3}'));
        assert!(is_nasal_vowel('\u{00F5}'));
        assert!(!is_nasal_vowel('a'));
    }

    #[test]
    fn consonant_flags() {
        assert!(is_liquid('l'));
        assert!(is_liquid('r'));
        assert!(!is_liquid('n'));
        for c in "bcdfgptv".chars() {
            assert!(is_obstruent(c));
        }
        assert!(!is_obstruent('s'));
        assert!(!is_obstruent('\u{00E7}'));
    }

    // -- Case functions --

    #[test]
    fn simple_lower_basic_latin() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_lower('a'), 'a');
    }

    #[test]
    fn simple_lower_extended() {
        assert_eq!(simple_lower('\u{00C3}'), '\u{00E3}'); // Ã -> ã
        assert_eq!(simple_lower('\u{00C7}'), '\u{00E7}'); // Ç -> ç
        assert_eq!(simple_lower('\u{00CD}'), '\u{00ED}'); // Í -> í
    }
}
