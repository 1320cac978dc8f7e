//! Secret Hashing Module
//!
//! One-way hashing of password secrets before they reach the repository.

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::config::Config;
use crate::error::{PasswordError, Result};

// == Secret Hasher Trait ==
/// Irreversible hashing applied on every create and update.
pub trait SecretHasher: Send + Sync {
    /// Hashes `plaintext` into a self-describing encoded string.
    fn hash(&self, plaintext: &str) -> Result<String>;

    /// Checks `plaintext` against a value produced by [`SecretHasher::hash`].
    fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool>;
}

// == Argon2 Hasher ==
/// Argon2id hasher producing PHC strings with a fresh random salt per call.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Creates a hasher with explicit cost parameters.
    ///
    /// # Arguments
    /// * `memory_kib` - Memory cost in KiB (at least 8 per lane)
    /// * `iterations` - Number of passes
    /// * `parallelism` - Number of lanes
    pub fn new(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| PasswordError::Hashing(format!("Invalid Argon2 params: {e}")))?;
        Ok(Self { params })
    }

    /// Creates a hasher from the `ARGON2_*` settings.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.argon2_memory_kib,
            config.argon2_iterations,
            config.argon2_parallelism,
        )
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl SecretHasher for Argon2Hasher {
    fn hash(&self, plaintext: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::Hashing(format!("Failed to hash secret: {e}")))
    }

    fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool> {
        let parsed = PasswordHash::new(hashed)
            .map_err(|e| PasswordError::Hashing(format!("Malformed hash: {e}")))?;
        Ok(self
            .argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_hasher() -> Argon2Hasher {
        Argon2Hasher::new(8, 1, 1).unwrap()
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hashed = cheap_hasher().hash("hunter2").unwrap();
        assert_ne!(hashed, "hunter2");
        assert!(!hashed.contains("hunter2"));
        assert!(hashed.starts_with("$argon2id$"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = cheap_hasher();
        assert_ne!(hasher.hash("same").unwrap(), hasher.hash("same").unwrap());
    }

    #[test]
    fn test_verify() {
        let hasher = cheap_hasher();
        let hashed = hasher.hash("hunter2").unwrap();

        assert!(hasher.verify("hunter2", &hashed).unwrap());
        assert!(!hasher.verify("hunter3", &hashed).unwrap());
    }

    #[test]
    fn test_verify_malformed_hash() {
        let result = cheap_hasher().verify("hunter2", "not a hash");
        assert!(matches!(result, Err(PasswordError::Hashing(_))));
    }

    #[test]
    fn test_invalid_params() {
        assert!(matches!(
            Argon2Hasher::new(1, 1, 1),
            Err(PasswordError::Hashing(_))
        ));
    }
}
