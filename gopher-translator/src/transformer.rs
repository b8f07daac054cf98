//! Token rewriting
//!
//! Applies the rule picked by [`classify`](crate::classifier::classify). The consonant
//! rules move the leading cluster to the end of the token and append `ogo`; every
//! character of the input survives exactly once, in its original case.

use crate::classifier::{Classification, classify};

const VOWEL_PREFIX: &str = "g";
const XR_PREFIX: &str = "ge";
const CLUSTER_SUFFIX: &str = "ogo";

/// Rewrite `token` according to `classification`.
///
/// The cluster lengths carried by `classification` must come from classifying this same
/// token; an out-of-range length leaves the token unchanged.
pub fn transform(token: &str, classification: Classification) -> String {
    match classification {
        Classification::Passthrough => token.to_string(),
        Classification::VowelStart => format!("{}{}", VOWEL_PREFIX, token),
        Classification::XRStart => format!("{}{}", XR_PREFIX, token),
        Classification::ConsonantQu { cluster_len }
        | Classification::ConsonantOnly { cluster_len } => move_cluster(token, cluster_len),
    }
}

/// Classify and rewrite a single token.
pub fn translate_token(token: &str) -> String {
    transform(token, classify(token))
}

fn move_cluster(token: &str, cluster_len: usize) -> String {
    let Some((cluster, rest)) = token.split_at_checked(cluster_len) else {
        return token.to_string();
    };
    let mut out = String::with_capacity(token.len() + CLUSTER_SUFFIX.len());
    out.push_str(rest);
    out.push_str(cluster);
    out.push_str(CLUSTER_SUFFIX);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_chars(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_translate_token() {
        let cases = [
            ("apple", "gapple"),
            ("alien", "galien"),
            ("xray", "gexray"),
            ("APple", "gAPple"),
            ("XRray", "geXRray"),
            ("chair", "airchogo"),
            ("CHair", "airCHogo"),
            ("mambo", "ambomogo"),
            ("flambe", "ambeflogo"),
            ("square", "aresquogo"),
            ("SQUare", "areSQUogo"),
            ("brmquare", "arebrmquogo"),
            ("m", "mogo"),
            ("mquy", "ymquogo"),
            ("msdsdquare", "aremsdsdquogo"),
            ("quit", "uitqogo"),
            ("don't", "don't"),
            ("shouldn't", "shouldn't"),
            ("on-the-move", "gon-the-move"),
            ("well-defined", "ell-definedwogo"),
            ("insta360", "ginsta360"),
            ("grinsta360", "insta360grogo"),
            ("doing", "oingdogo"),
            (".", "."),
            ("?", "?"),
            ("!!", "!!"),
            ("doing?", "oing?dogo"),
            ("sure_", "ure_sogo"),
            ("1453665679", "1453665679"),
        ];
        for (word, expected) in cases {
            assert_eq!(translate_token(word), expected, "translate_token({:?})", word);
        }
    }

    #[test]
    fn test_passthrough_is_identity() {
        for token in [
            "don't",
            "'",
            "rock'n'roll",
            "-10",
            "1.25",
            "3e8",
            "NaN",
            "!!",
            "0x1p4",
            "0X1P-2",
            "0x1.8p1",
            "0x_1p0",
        ] {
            assert_eq!(classify(token), Classification::Passthrough);
            assert_eq!(transform(token, Classification::Passthrough), token);
        }
    }

    #[test]
    fn test_consonant_rules_conserve_characters() {
        for token in [
            "chair", "square", "SQUare", "rhythm", "m", "bcdfqu", "grinsta360", "doing?",
            "Strängé",
        ] {
            let classification = classify(token);
            assert!(
                matches!(
                    classification,
                    Classification::ConsonantQu { .. } | Classification::ConsonantOnly { .. }
                ),
                "{} classified as {}",
                token,
                classification
            );
            let translated = transform(token, classification);
            assert!(translated.ends_with(CLUSTER_SUFFIX));
            let mut expected = sorted_chars(token);
            expected.extend(CLUSTER_SUFFIX.chars());
            expected.sort_unstable();
            assert_eq!(sorted_chars(&translated), expected, "{}", token);
        }
    }

    #[test]
    fn test_out_of_range_cluster_is_ignored() {
        assert_eq!(
            transform("ab", Classification::ConsonantOnly { cluster_len: 9 }),
            "ab"
        );
    }
}
