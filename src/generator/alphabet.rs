//! Alphabet Module
//!
//! Maps a complexity tier to its cumulative character set.

use std::fmt;

use serde::Serialize;

use crate::error::PasswordError;
use crate::generator::{DEFAULT_SYMBOLS, DIGITS, LETTERS};

// == Complexity ==
/// Which character classes a generated password draws from.
///
/// Tiers are cumulative: each level includes everything below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum Complexity {
    /// `0-9`
    Digits = 1,
    /// Digits plus `a-z` and `A-Z`
    Alphanumeric = 2,
    /// Alphanumeric plus the configured symbol set
    Full = 3,
}

impl Complexity {
    /// All tiers, lowest first.
    pub const ALL: [Complexity; 3] = [
        Complexity::Digits,
        Complexity::Alphanumeric,
        Complexity::Full,
    ];

    /// Numeric level of this tier (1 to 3).
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Complexity {
    type Error = PasswordError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(Complexity::Digits),
            2 => Ok(Complexity::Alphanumeric),
            3 => Ok(Complexity::Full),
            other => Err(PasswordError::InvalidRequest(format!(
                "Complexity must be between 1 and 3, got {}",
                other
            ))),
        }
    }
}

impl From<Complexity> for u8 {
    fn from(complexity: Complexity) -> Self {
        complexity.level()
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

// == Alphabet ==
/// Builds character sets for each complexity tier.
///
/// Only the symbol set is configurable; digits and letters are fixed.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: String,
}

impl Alphabet {
    /// Creates an alphabet builder with a custom symbol set.
    pub fn new(symbols: impl Into<String>) -> Self {
        Self {
            symbols: symbols.into(),
        }
    }

    /// Returns the symbol set used at [`Complexity::Full`].
    pub fn symbols(&self) -> &str {
        &self.symbols
    }

    /// Returns the concatenated character set for `complexity`.
    pub fn characters(&self, complexity: Complexity) -> String {
        let mut chars = String::from(DIGITS);
        if complexity >= Complexity::Alphanumeric {
            chars.push_str(LETTERS);
        }
        if complexity >= Complexity::Full {
            chars.push_str(&self.symbols);
        }
        chars
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        let chars = Alphabet::default().characters(Complexity::Digits);
        assert_eq!(chars, "0123456789");
    }

    #[test]
    fn test_alphanumeric_has_62_symbols() {
        let chars = Alphabet::default().characters(Complexity::Alphanumeric);
        assert_eq!(chars.chars().count(), 62);
        assert!(chars.starts_with(DIGITS));
        assert!(chars.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_full_is_cumulative() {
        let alphabet = Alphabet::default();
        let full = alphabet.characters(Complexity::Full);
        let alnum = alphabet.characters(Complexity::Alphanumeric);

        assert!(full.starts_with(&alnum));
        assert_eq!(full.len(), 62 + DEFAULT_SYMBOLS.len());
    }

    #[test]
    fn test_custom_symbols() {
        let alphabet = Alphabet::new("~");
        assert_eq!(alphabet.symbols(), "~");
        assert!(alphabet.characters(Complexity::Full).ends_with("Z~"));
        assert!(!alphabet.characters(Complexity::Alphanumeric).contains('~'));
    }

    #[test]
    fn test_complexity_try_from() {
        assert_eq!(Complexity::try_from(1).unwrap(), Complexity::Digits);
        assert_eq!(Complexity::try_from(3).unwrap(), Complexity::Full);
        assert!(matches!(
            Complexity::try_from(0),
            Err(PasswordError::InvalidRequest(_))
        ));
        assert!(Complexity::try_from(4).is_err());
    }

    #[test]
    fn test_complexity_serializes_as_level() {
        let json = serde_json::to_string(&Complexity::Alphanumeric).unwrap();
        assert_eq!(json, "2");
    }
}
