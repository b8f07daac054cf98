//! Gopher-speak translator
//!
//! Translates English words and sentences into Gopher-speak with a small set of ordered
//! rewrite rules, and keeps a history of what was translated.
//!
//! | Rule                | Example                |
//! |---------------------|------------------------|
//! | apostrophe / number | `don't` → `don't`      |
//! | vowel start         | `apple` → `gapple`     |
//! | `xr` start          | `xray` → `gexray`      |
//! | consonants + `qu`   | `square` → `aresquogo` |
//! | consonants          | `chair` → `airchogo`   |
//!
//! # Example
//!
//! ```
//! use gopher_translator::{HistoryStore, translate_sentence, translate_word};
//!
//! let history = HistoryStore::new();
//!
//! let word = translate_word("alien");
//! history.record("alien", &word);
//! assert_eq!(word, "galien");
//!
//! let sentence = translate_sentence("Hey there!");
//! history.record("Hey there!", &sentence);
//! assert_eq!(sentence, "eyHogo erethogo !");
//!
//! assert_eq!(history.len(), 2);
//! ```

pub mod classifier;
pub mod error;
pub mod history;
pub mod tokenizer;
pub mod transformer;

pub use classifier::{Classification, classify};
pub use error::{GopherError, GopherResult};
pub use history::{HistoryEntry, HistoryStore};
pub use tokenizer::{Tokens, tokenize};
pub use transformer::{transform, translate_token};

/// Translate a single word. Surrounding whitespace is ignored.
///
/// The word is not checked for inner whitespace; see [`check_single_word`].
pub fn translate_word(word: &str) -> String {
    translate_token(word.trim())
}

/// Translate a sentence token by token and join the results with single spaces.
pub fn translate_sentence(sentence: &str) -> String {
    tokenize(sentence)
        .iter()
        .map(|token| translate_token(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trim `input` and make sure what is left is a single word.
pub fn check_single_word(input: &str) -> GopherResult<&str> {
    let word = input.trim();
    // Only ASCII spacing separates words; NBSP and vertical tab do not
    if word.contains([' ', '\t', '\n', '\x0C', '\r']) {
        return Err(GopherError::NotASingleWord(word.to_string()));
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_word() {
        assert_eq!(translate_word("alien"), "galien");
        assert_eq!(translate_word("xray"), "gexray");
        assert_eq!(translate_word("chair"), "airchogo");
        assert_eq!(translate_word("square"), "aresquogo");
        assert_eq!(translate_word("don't"), "don't");
        assert_eq!(translate_word("  apple\n"), "gapple");
        assert_eq!(translate_word("0x1p4"), "0x1p4");
        assert_eq!(translate_word(""), "");
    }

    #[test]
    fn test_translate_sentence() {
        let cases = [
            ("Hey there", "eyHogo erethogo"),
            ("Hey there!", "eyHogo erethogo !"),
            ("hey", "eyhogo"),
            ("Hi, how are you doing?", "iHogo , owhogo gare ouyogo oingdogo ?"),
            ("Let's eat, Grandma!", "Let's geat , andmaGrogo !"),
            ("I'm  a   square", "I'm ga aresquogo"),
            ("", ""),
        ];
        for (sentence, expected) in cases {
            assert_eq!(translate_sentence(sentence), expected, "{:?}", sentence);
        }
    }

    #[test]
    fn test_check_single_word() {
        assert_eq!(check_single_word(" square "), Ok("square"));
        assert_eq!(check_single_word("don't"), Ok("don't"));
        assert_eq!(
            check_single_word("Hey there"),
            Err(GopherError::NotASingleWord("Hey there".to_string()))
        );
        assert!(check_single_word("tab\tseparated").is_err());
        assert!(check_single_word("form\x0Cfeed").is_err());
        assert_eq!(check_single_word("a\u{a0}b"), Ok("a\u{a0}b"));
        assert_eq!(check_single_word("a\u{b}b"), Ok("a\u{b}b"));
    }

    #[test]
    fn test_history_of_translations() {
        let history = HistoryStore::new();
        for word in ["square", "alien", "aapple"] {
            history.record(word, &translate_word(word));
        }
        let listing: Vec<(String, String)> = history
            .snapshot()
            .into_iter()
            .map(|e| (e.original, e.translated))
            .collect();
        assert_eq!(
            listing,
            vec![
                ("aapple".to_string(), "gaapple".to_string()),
                ("alien".to_string(), "galien".to_string()),
                ("square".to_string(), "aresquogo".to_string()),
            ]
        );
    }
}
