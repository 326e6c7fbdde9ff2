//! Chunk-to-filename derivation.
//!
//! The output base name is built from the first few words of a snippet so
//! the generated images stay recognizable in the output directory.

/// Fallback stem used when every word is empty after character filtering.
pub const FALLBACK_STEM: &str = "snippet";

/// Derives a filename stem from the first `word_limit` words of a chunk.
///
/// Words are split on runs of whitespace. Every character outside the
/// allowed set (ASCII letters and digits, Cyrillic letters including both
/// yo variants, underscore, hyphen) is stripped; words that become empty
/// are dropped. Surviving words are joined with underscores. Returns
/// [`FALLBACK_STEM`] when nothing survives.
///
/// The caller appends the chunk sequence number, so identical stems from
/// different chunks never collide.
#[must_use]
pub fn stem_from_chunk(chunk: &str, word_limit: usize) -> String {
    let stem = chunk
        .split_whitespace()
        .take(word_limit)
        .map(|word| word.chars().filter(|&c| is_allowed(c)).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if stem.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}

/// Allowed set: `[a-zA-Zа-яА-ЯёЁ0-9_-]`.
const fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё' | '_' | '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_words_joined_with_underscore() {
        assert_eq!(stem_from_chunk("hello brave new world", 6), "hello_brave_new_world");
    }

    #[test]
    fn test_word_limit_caps_contribution() {
        assert_eq!(stem_from_chunk("one two three four", 2), "one_two");
    }

    #[test]
    fn test_punctuation_stripped_from_words() {
        assert_eq!(stem_from_chunk("fn main() { println!(\"hi\"); }", 6), "fn_main_printlnhi");
    }

    #[test]
    fn test_cyrillic_preserved() {
        assert_eq!(stem_from_chunk("привет, мир! ёлка Ёж", 6), "привет_мир_ёлка_Ёж");
    }

    #[test]
    fn test_hyphen_and_underscore_preserved() {
        assert_eq!(stem_from_chunk("snake_case kebab-case", 6), "snake_case_kebab-case");
    }

    #[test]
    fn test_all_punctuation_falls_back() {
        assert_eq!(stem_from_chunk("!!! ??? ... ///", 6), FALLBACK_STEM);
    }

    #[test]
    fn test_whitespace_only_falls_back() {
        assert_eq!(stem_from_chunk("   \n\t  ", 6), FALLBACK_STEM);
    }

    #[test]
    fn test_empty_words_after_filter_dropped() {
        // the middle word is pure punctuation and vanishes entirely
        assert_eq!(stem_from_chunk("left +++ right", 6), "left_right");
    }

    #[test]
    fn test_output_stays_in_allowed_set() {
        let inputs = [
            "fn main() {}",
            "日本語 text кириллица",
            "emoji 🦀 crab",
            "tabs\tand\nnewlines",
        ];

        for input in inputs {
            let stem = stem_from_chunk(input, 6);
            assert!(
                stem.chars().all(is_allowed),
                "stem '{stem}' contains disallowed characters"
            );
        }
    }

    #[test]
    fn test_multiline_chunk_uses_leading_words() {
        let chunk = "first line of code\nsecond line here";
        assert_eq!(stem_from_chunk(chunk, 6), "first_line_of_code_second_line");
    }
}
