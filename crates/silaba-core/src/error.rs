// Word validation for callers that want non-letters rejected.
//
// The syllable separator itself is total: digits and punctuation are
// treated as degenerate consonants. Validation is an opt-in layer on top.

use crate::character::{CharType, get_char_type};

/// Reasons a word is refused by [`validate_word`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    /// The word has no characters.
    #[error("empty word")]
    Empty,

    /// The word contains a character that is not a letter.
    /// `position` counts characters, not bytes.
    #[error("unexpected {} {ch:?} at position {position}", .kind.name())]
    NonLetter {
        ch: char,
        position: usize,
        kind: CharType,
    },
}

/// Check that `word` is non-empty and made of letters only.
pub fn validate_word(word: &str) -> Result<(), WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    for (position, ch) in word.chars().enumerate() {
        let kind = get_char_type(ch);
        if kind != CharType::Letter {
            return Err(WordError::NonLetter { ch, position, kind });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_accented_words() {
        assert_eq!(validate_word("transpiração"), Ok(()));
        assert_eq!(validate_word("PAÍS"), Ok(()));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(validate_word(""), Err(WordError::Empty));
    }

    #[test]
    fn rejects_digit_with_char_position() {
        // 'ç' is multi-byte; the position is still a character index
        let err = validate_word("ç1").unwrap_err();
        assert_eq!(
            err,
            WordError::NonLetter {
                ch: '1',
                position: 1,
                kind: CharType::Digit
            }
        );
    }

    #[test]
    fn error_messages() {
        let err = validate_word("guarda-chuva").unwrap_err();
        assert_eq!(err.to_string(), "unexpected punctuation '-' at position 6");
        assert_eq!(WordError::Empty.to_string(), "empty word");
        let err = validate_word("a b").unwrap_err();
        assert_eq!(err.to_string(), "unexpected whitespace ' ' at position 1");
    }
}
