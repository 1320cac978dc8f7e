//! Random Password Module
//!
//! Draws passwords from an alphabet using the operating system CSPRNG.

use rand::rngs::OsRng;
use rand::{Rng, TryRngCore};

/// Generates a password of `length` characters drawn uniformly from `alphabet`.
///
/// Every character is sampled independently from `OsRng`; no state is shared
/// between calls. An empty alphabet yields an empty string.
pub fn generate(length: usize, alphabet: &str) -> String {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let mut rng = OsRng.unwrap_err();
    (0..length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_exact_length() {
        for length in [1, 4, 17, 30] {
            assert_eq!(generate(length, "abc").chars().count(), length);
        }
    }

    #[test]
    fn test_generate_digits_only() {
        let password = generate(8, "0123456789");
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_single_symbol_alphabet() {
        assert_eq!(generate(5, "x"), "xxxxx");
    }

    #[test]
    fn test_generate_empty_inputs() {
        assert_eq!(generate(0, "abc"), "");
        assert_eq!(generate(10, ""), "");
    }

    #[test]
    fn test_generate_multibyte_alphabet() {
        let password = generate(12, "äöü");
        assert_eq!(password.chars().count(), 12);
        assert!(password.chars().all(|c| "äöü".contains(c)));
    }

    #[test]
    fn test_generate_covers_alphabet() {
        // 2000 draws over 10 symbols miss one with probability ~ 10 * 0.9^2000
        let seen: HashSet<char> = generate(2000, "0123456789").chars().collect();
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_generate_is_not_repeatable() {
        let alphabet = "abcdefghijklmnopqrstuvwxyz0123456789";
        assert_ne!(generate(30, alphabet), generate(30, alphabet));
    }
}
