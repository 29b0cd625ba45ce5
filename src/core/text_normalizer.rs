//! Text Normalization
//!
//! Folds raw utterances into the form the intent table matches against.

use std::fmt;

/// Typographic marks speech engines and keyboards emit besides ASCII punctuation
const EXTRA_PUNCTUATION: &[char] = &[
    '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2013}', '\u{2014}', '\u{2026}',
];

/// Utterance text with punctuation removed and case folded
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedCommand(String);

impl NormalizedCommand {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedCommand {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c)
}

/// Lowercase, drop punctuation and collapse whitespace.
///
/// Total and idempotent: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> NormalizedCommand {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !is_punctuation(*c))
        .collect();

    NormalizedCommand(stripped.split_whitespace().collect::<Vec<_>>().join(" "))
}
