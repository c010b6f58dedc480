//! Irreversible masking of bank account numbers.

use std::fmt;

use serde::Serialize;

/// A bank account number with its middle digits destroyed.
///
/// The unmasked digits are never stored: the constructor consumes a borrowed
/// digit string and keeps only the redacted rendering, so nothing downstream
/// (logging, serialization, error paths) can leak the full number.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MaskedAccount(String);

impl MaskedAccount {
    /// Mask a string of digits.
    ///
    /// More than 8 digits: keep the first and last 4, one `*` per hidden digit.
    /// Otherwise keep the first 4 and star the remainder.
    pub fn mask(digits: &str) -> Self {
        let chars: Vec<char> = digits.chars().collect();
        let len = chars.len();
        let head: String = chars.iter().take(4).collect();

        let masked = if len > 8 {
            let tail: String = chars[len - 4..].iter().collect();
            format!("{head}{}{tail}", "*".repeat(len - 8))
        } else {
            format!("{head}{}", "*".repeat(len.saturating_sub(4)))
        };
        Self(masked)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MaskedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
