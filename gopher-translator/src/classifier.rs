//! Token classification
//!
//! Every token falls into exactly one [`Classification`]. The rules are tried in a
//! fixed order and the first one that matches wins:
//!
//! 1. apostrophes and numerals are left alone ([`Classification::Passthrough`])
//! 2. a leading vowel ([`Classification::VowelStart`])
//! 3. a leading `x` ([`Classification::XRStart`])
//! 4. a consonant cluster ending in `qu` ([`Classification::ConsonantQu`])
//! 5. any other consonant cluster ([`Classification::ConsonantOnly`])
//!
//! Anything else, such as a bare punctuation mark, is passed through as well.
//!
//! Matching ignores case, but the cluster lengths carried by the consonant rules are
//! byte offsets into the original token, so the transformer can cut the token without
//! touching its casing.

use std::fmt;

/// Which rewrite rule applies to a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Returned unchanged
    Passthrough,
    /// Starts with `a`, `e`, `i`, `o` or `u`
    VowelStart,
    /// Starts with `x`, optionally followed by `r`s
    XRStart,
    /// Leading consonants followed by `qu`; `cluster_len` includes the `qu`
    ConsonantQu { cluster_len: usize },
    /// Leading consonants only
    ConsonantOnly { cluster_len: usize },
}

impl Classification {
    pub fn name(&self) -> &'static str {
        match self {
            Classification::Passthrough => "passthrough",
            Classification::VowelStart => "vowel-start",
            Classification::XRStart => "xr-start",
            Classification::ConsonantQu { .. } => "consonant-qu",
            Classification::ConsonantOnly { .. } => "consonant-only",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::ConsonantQu { cluster_len }
            | Classification::ConsonantOnly { cluster_len } => {
                write!(f, "{} ({} leading)", self.name(), cluster_len)
            }
            _ => write!(f, "{}", self.name()),
        }
    }
}

/// Classify a single token.
pub fn classify(token: &str) -> Classification {
    if token.contains('\'') || is_numeric(token) {
        return Classification::Passthrough;
    }

    let Some(first) = token.chars().next() else {
        return Classification::Passthrough;
    };

    if is_vowel(first) {
        return Classification::VowelStart;
    }

    // `x r*` is satisfied by the `x` alone
    if first.eq_ignore_ascii_case(&'x') {
        return Classification::XRStart;
    }

    if let Some(cluster_len) = qu_cluster_len(token) {
        return Classification::ConsonantQu { cluster_len };
    }

    match consonant_run_len(token) {
        0 => Classification::Passthrough,
        cluster_len => Classification::ConsonantOnly { cluster_len },
    }
}

/// Whether the whole token parses as a floating point number.
///
/// Accepts decimal literals (`"-10"`, `"1.25"`, `"1e5"`), hexadecimal literals with a
/// binary exponent (`"0x1p4"`, `"0x1.8p1"`), `_` between digits (`"1_000"`, `"0x_1p0"`)
/// and the words `inf`, `infinity` and `nan`. Finite literals too large to represent
/// are rejected.
pub fn is_numeric(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    if unsigned.contains('_') && !underscores_separate_digits(unsigned) {
        return false;
    }

    if let Some(digits) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        return parse_hex_float(digits).is_some_and(f64::is_finite);
    }

    // `nan` takes no sign
    if unsigned.len() != token.len() && unsigned.eq_ignore_ascii_case("nan") {
        return false;
    }

    match token.replace('_', "").parse::<f64>() {
        Ok(value) if value.is_infinite() => spells_infinity(unsigned),
        Ok(_) => true,
        Err(_) => false,
    }
}

fn spells_infinity(unsigned: &str) -> bool {
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Last {
    Start,
    Digit,
    Underscore,
    Other,
}

/// Every `_` must sit between two digits, or between a base prefix and a digit.
fn underscores_separate_digits(unsigned: &str) -> bool {
    let bytes = unsigned.as_bytes();
    let (hex, rest, mut last) = match bytes {
        [b'0', b'x' | b'X', rest @ ..] => (true, rest, Last::Digit),
        [b'0', b'b' | b'B' | b'o' | b'O', rest @ ..] => (false, rest, Last::Digit),
        _ => (false, bytes, Last::Start),
    };

    for &b in rest {
        if b.is_ascii_digit() || (hex && b.is_ascii_hexdigit()) {
            last = Last::Digit;
        } else if b == b'_' {
            if last != Last::Digit {
                return false;
            }
            last = Last::Underscore;
        } else if last == Last::Underscore {
            return false;
        } else {
            last = Last::Other;
        }
    }
    last != Last::Underscore
}

/// Value of a hexadecimal float written after its `0x` prefix, e.g. `1.8p1`.
///
/// The `p` exponent is required. Only the first 16 significant digits are kept; the
/// result is precise enough to tell a finite value from an overflow.
fn parse_hex_float(digits: &str) -> Option<f64> {
    let (mantissa, exponent) = digits.split_once(['p', 'P'])?;

    let mut value: u64 = 0;
    let mut kept = 0;
    let mut shift: i64 = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for c in mantissa.chars() {
        match c {
            '_' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => {
                let d = u64::from(c.to_digit(16)?);
                seen_digit = true;
                if value == 0 && d == 0 {
                    if seen_dot {
                        shift -= 4;
                    }
                } else if kept < 16 {
                    value = value * 16 + d;
                    kept += 1;
                    if seen_dot {
                        shift -= 4;
                    }
                } else if !seen_dot {
                    shift += 4;
                }
            }
        }
    }
    if !seen_digit {
        return None;
    }

    let (negative, exp_digits) = match exponent.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, exponent.strip_prefix('+').unwrap_or(exponent)),
    };
    if !exp_digits.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let mut exp: i64 = 0;
    for c in exp_digits.chars().filter(|&c| c != '_') {
        let d = i64::from(c.to_digit(10)?);
        exp = exp.saturating_mul(10).saturating_add(d);
    }
    if negative {
        exp = -exp;
    }

    let power = shift.saturating_add(exp).clamp(-1100, 1100) as i32;
    Some(value as f64 * 2f64.powi(power))
}

pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// ASCII word character: `[0-9A-Za-z_]`
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_consonant(c: char) -> bool {
    is_word_char(c) && !is_vowel(c)
}

/// Length in bytes of the leading run of consonants.
///
/// Consonants are ASCII, so the returned length is always a char boundary.
pub fn consonant_run_len(token: &str) -> usize {
    token.chars().take_while(|&c| is_consonant(c)).count()
}

/// Length in bytes of the shortest leading cluster of the form `consonant+ qu`.
///
/// Looks for the earliest `i >= 1` where `token[..i]` is all consonants and the next
/// two bytes are `qu` in any case.
pub fn qu_cluster_len(token: &str) -> Option<usize> {
    let bytes = token.as_bytes();
    let run = consonant_run_len(token);
    (1..=run)
        .find(|&i| {
            bytes
                .get(i..i + 2)
                .is_some_and(|pair| pair.eq_ignore_ascii_case(b"qu"))
        })
        .map(|i| i + 2)
}
