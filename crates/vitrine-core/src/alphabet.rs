//! The fixed glyph set for the letter-drop screen.

/// The 26 uppercase letters, in drop order.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Case-sensitive vowel test over the fixed uppercase alphabet.
pub fn is_vowel(letter: char) -> bool {
    matches!(letter, 'A' | 'E' | 'I' | 'O' | 'U')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowels_are_exactly_aeiou() {
        let vowels: Vec<char> = ALPHABET.iter().copied().filter(|&c| is_vowel(c)).collect();
        assert_eq!(vowels, ['A', 'E', 'I', 'O', 'U']);
    }

    #[test]
    fn test_consonant_is_not_vowel() {
        assert!(!is_vowel('B'));
    }

    #[test]
    fn test_classification_is_case_sensitive() {
        assert!(!is_vowel('a'));
        assert!(!is_vowel('e'));
    }

    #[test]
    fn test_alphabet_is_contiguous() {
        for (index, &letter) in ALPHABET.iter().enumerate() {
            assert_eq!(letter, (b'A' + index as u8) as char);
        }
    }
}
