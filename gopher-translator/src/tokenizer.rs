//! Sentence tokenizer
//!
//! Splits a sentence into words and standalone punctuation marks so that each piece can
//! be translated on its own and the results joined back with single spaces.

use regex::Regex;
use std::sync::LazyLock;

/// A word directly followed by one of `, . ! ? ; :`
static TRAILING_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9A-Za-z_]+)([,.!?;:])").expect("valid regex"));

/// Ordered tokens of a sentence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokens(Vec<String>);

impl Tokens {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Join the tokens with single spaces
    pub fn join(&self) -> String {
        self.0.join(" ")
    }
}

impl<'a> IntoIterator for &'a Tokens {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Tokens {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Split `sentence` into tokens.
///
/// Punctuation glued to the end of a word is separated first (`"Hi,"` becomes
/// `"Hi"`, `","`), then the text is split on whitespace.
pub fn tokenize(sentence: &str) -> Tokens {
    let spaced = TRAILING_PUNCTUATION.replace_all(sentence, "${1} ${2}");
    Tokens(spaced.split_whitespace().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: &Tokens) -> Vec<&str> {
        tokens.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_tokenize() {
        let cases: [(&str, &[&str]); 7] = [
            (
                "Hi, how are you doing?",
                &["Hi", ",", "how", "are", "you", "doing", "?"],
            ),
            ("Let's eat, Grandma!", &["Let's", "eat", ",", "Grandma", "!"]),
            (
                "I'm sorry; I love you",
                &["I'm", "sorry", ";", "I", "love", "you"],
            ),
            ("Hey there!", &["Hey", "there", "!"]),
            ("  spaced \t out\n", &["spaced", "out"]),
            ("Wait!! What:", &["Wait", "!!", "What", ":"]),
            ("", &[]),
        ];
        for (sentence, expected) in cases {
            assert_eq!(words(&tokenize(sentence)), expected, "{:?}", sentence);
        }
    }

    #[test]
    fn test_tokenize_round_trip() {
        for sentence in [
            "Hi, how are you doing?",
            "a.b.c",
            "one,two;three:four",
            "Let's eat, Grandma!",
            "  ",
        ] {
            let tokens = tokenize(sentence);
            assert_eq!(tokenize(&tokens.join()), tokens, "{:?}", sentence);
        }
    }

    #[test]
    fn test_tokens_are_restartable() {
        let tokens = tokenize("Hey there!");
        let first: Vec<&String> = tokens.iter().collect();
        let second: Vec<&String> = (&tokens).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens.as_slice(), ["Hey", "there", "!"]);
        assert!(!tokens.is_empty());
    }
}
