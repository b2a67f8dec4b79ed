//! Character classification.
//!
//! Every `char` falls into exactly one [`CharClass`]. Only the ASCII ranges
//! `a..=z` and `A..=Z` are letters; accented or other non-ASCII alphabetic
//! characters classify as [`CharClass::Other`] and pass through unchanged.

/// The class of a single character, which selects its shift rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `a..=m`
    LowerFirst,
    /// `n..=z`
    LowerSecond,
    /// `A..=M`
    UpperFirst,
    /// `N..=Z`
    UpperSecond,
    /// Anything else (digits, punctuation, whitespace, non-ASCII).
    Other,
}

impl CharClass {
    /// All five classes, letters first.
    pub const ALL: [CharClass; 5] = [
        CharClass::LowerFirst,
        CharClass::LowerSecond,
        CharClass::UpperFirst,
        CharClass::UpperSecond,
        CharClass::Other,
    ];

    /// Returns the start of the alphabet this class rotates within
    /// (`'a'` or `'A'`), or `None` for [`CharClass::Other`].
    pub fn base(self) -> Option<char> {
        match self {
            CharClass::LowerFirst | CharClass::LowerSecond => Some('a'),
            CharClass::UpperFirst | CharClass::UpperSecond => Some('A'),
            CharClass::Other => None,
        }
    }

    /// Returns true for the four letter classes.
    pub fn is_letter(self) -> bool {
        !matches!(self, CharClass::Other)
    }

    /// Short human-readable name, used in verbose output.
    pub fn name(self) -> &'static str {
        match self {
            CharClass::LowerFirst => "lower-first",
            CharClass::LowerSecond => "lower-second",
            CharClass::UpperFirst => "upper-first",
            CharClass::UpperSecond => "upper-second",
            CharClass::Other => "other",
        }
    }
}

/// Classifies a character. Pure function of the character's value.
pub fn classify(c: char) -> CharClass {
    match c {
        'a'..='m' => CharClass::LowerFirst,
        'n'..='z' => CharClass::LowerSecond,
        'A'..='M' => CharClass::UpperFirst,
        'N'..='Z' => CharClass::UpperSecond,
        _ => CharClass::Other,
    }
}

/// Zero-based offset of a letter within its alphabet, or `None` for non-letters.
pub fn letter_value(c: char) -> Option<u8> {
    let base = classify(c).base()?;
    Some(c as u8 - base as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_alphabet_boundaries() {
        assert_eq!(classify('a'), CharClass::LowerFirst);
        assert_eq!(classify('m'), CharClass::LowerFirst);
        assert_eq!(classify('n'), CharClass::LowerSecond);
        assert_eq!(classify('z'), CharClass::LowerSecond);
        assert_eq!(classify('A'), CharClass::UpperFirst);
        assert_eq!(classify('M'), CharClass::UpperFirst);
        assert_eq!(classify('N'), CharClass::UpperSecond);
        assert_eq!(classify('Z'), CharClass::UpperSecond);
    }

    #[test]
    fn test_neighbours_of_letter_ranges_are_other() {
        // '`' and '{' sit just outside a..z, '@' and '[' just outside A..Z
        for c in ['`', '{', '@', '[', '0', '9', ' ', '\n', '!'] {
            assert_eq!(classify(c), CharClass::Other, "{:?}", c);
        }
    }

    #[test]
    fn test_non_ascii_letters_are_other() {
        for c in ['é', 'Ñ', 'ß', 'ø', 'Ω', '中'] {
            assert_eq!(classify(c), CharClass::Other, "{:?}", c);
        }
    }

    #[test]
    fn test_every_ascii_letter_is_classified_once() {
        let mut counts = [0usize; 5];
        for c in ('a'..='z').chain('A'..='Z') {
            let idx = CharClass::ALL.iter().position(|&k| k == classify(c)).unwrap();
            counts[idx] += 1;
        }
        assert_eq!(counts, [13, 13, 13, 13, 0]);
    }

    #[test]
    fn test_letter_value() {
        assert_eq!(letter_value('a'), Some(0));
        assert_eq!(letter_value('z'), Some(25));
        assert_eq!(letter_value('A'), Some(0));
        assert_eq!(letter_value('M'), Some(12));
        assert_eq!(letter_value('5'), None);
    }

    #[test]
    fn test_base_and_is_letter() {
        assert_eq!(CharClass::LowerSecond.base(), Some('a'));
        assert_eq!(CharClass::UpperFirst.base(), Some('A'));
        assert_eq!(CharClass::Other.base(), None);
        assert!(CharClass::UpperSecond.is_letter());
        assert!(!CharClass::Other.is_letter());
    }
}
