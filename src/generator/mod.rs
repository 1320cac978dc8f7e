//! Generator Module
//!
//! Derives the character alphabet for a complexity tier and draws random
//! passwords from it with the operating system CSPRNG.

mod alphabet;
mod random;

// Re-export public types
pub use alphabet::{Alphabet, Complexity};
pub use random::generate;

// == Public Constants ==
/// Digits, always part of the alphabet
pub const DIGITS: &str = "0123456789";

/// Lower then upper case ASCII letters, added at complexity 2
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default symbol set, added at complexity 3
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()_-+=<>?/{}[]|";

/// Shortest password the HTTP layer accepts
pub const MIN_LENGTH: usize = 4;

/// Longest password the HTTP layer accepts
pub const MAX_LENGTH: usize = 30;
