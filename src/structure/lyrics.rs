//! Syllable counting for lyric lines.
//!
//! A spelling heuristic, not a dictionary lookup: good enough to estimate how
//! long a section takes to sing.

/// Count the syllables in one word.
///
/// Words of three letters or fewer count as one. Longer words count their
/// vowel groups (`aeiouy`), minus one for a trailing silent `e`, plus one back
/// for a trailing `le` ("table"). Never less than one.
pub fn count_syllables_in_word(word: &str) -> u32 {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let mut groups: i32 = 0;
    let mut in_vowels = false;
    for c in word.chars() {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_vowels {
            groups += 1;
        }
        in_vowels = vowel;
    }
    if groups == 0 {
        return 1;
    }

    if word.ends_with('e') {
        groups -= 1;
    }
    if word.ends_with("le") {
        groups += 1;
    }

    groups.max(1) as u32
}

/// Count the syllables in a line of lyrics.
///
/// The line is lowercased and everything except ASCII letters and whitespace is
/// dropped before splitting into words.
pub fn count_syllables_in_line(line: &str) -> u32 {
    let cleaned: String = line
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().map(count_syllables_in_word).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_are_one_syllable() {
        assert_eq!(count_syllables_in_word("the"), 1);
        assert_eq!(count_syllables_in_word("sky"), 1);
        assert_eq!(count_syllables_in_word("a"), 1);
    }

    #[test]
    fn test_vowel_groups() {
        assert_eq!(count_syllables_in_word("music"), 2);
        assert_eq!(count_syllables_in_word("beautiful"), 3);
        assert_eq!(count_syllables_in_word("rhythm"), 1);
    }

    #[test]
    fn test_trailing_e_rules() {
        // silent e
        assert_eq!(count_syllables_in_word("stone"), 1);
        // -le keeps its syllable
        assert_eq!(count_syllables_in_word("table"), 2);
        // never below one
        assert_eq!(count_syllables_in_word("shhe"), 1);
    }

    #[test]
    fn test_line_strips_punctuation() {
        assert_eq!(count_syllables_in_line("Hello, darkness, my old friend!"), 7);
        assert_eq!(count_syllables_in_line(""), 0);
        assert_eq!(count_syllables_in_line("  --  "), 0);
    }
}
