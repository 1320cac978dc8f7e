//! Password Service Module
//!
//! Orchestrates the generator, the cache and the repository. Reads are
//! cache-first; writes hash the secret, persist, then invalidate the record
//! partitions.

mod hasher;

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{CacheStats, PasswordCache};
use crate::config::Config;
use crate::error::{PasswordError, Result};
use crate::generator::{self, Alphabet, Complexity};
use crate::models::PasswordRecord;
use crate::store::PasswordRepository;

pub use hasher::{Argon2Hasher, SecretHasher};

// == Password Service ==
/// Entry point for every password operation.
///
/// Repository failures are returned unchanged; nothing is retried.
pub struct PasswordService {
    repository: Arc<dyn PasswordRepository>,
    cache: Arc<PasswordCache>,
    hasher: Arc<dyn SecretHasher>,
    alphabet: Alphabet,
    cache_generated: bool,
}

impl PasswordService {
    // == Constructor ==
    /// Creates a service over the given collaborators.
    ///
    /// Generated passwords are cached by default; see
    /// [`PasswordService::with_generated_caching`].
    pub fn new(
        repository: Arc<dyn PasswordRepository>,
        cache: Arc<PasswordCache>,
        hasher: Arc<dyn SecretHasher>,
        alphabet: Alphabet,
    ) -> Self {
        Self {
            repository,
            cache,
            hasher,
            alphabet,
            cache_generated: true,
        }
    }

    /// Creates a service with a fresh cache, an Argon2 hasher and the
    /// configured symbol set.
    pub fn from_config(config: &Config, repository: Arc<dyn PasswordRepository>) -> Result<Self> {
        let hasher = Argon2Hasher::from_config(config)?;
        Ok(Self::new(
            repository,
            Arc::new(PasswordCache::new()),
            Arc::new(hasher),
            Alphabet::new(config.password_symbols.clone()),
        )
        .with_generated_caching(config.cache_generated))
    }

    /// Turns the generated-password partition on or off.
    ///
    /// With caching on, repeated calls with the same length and complexity
    /// return the same password.
    pub fn with_generated_caching(mut self, enabled: bool) -> Self {
        self.cache_generated = enabled;
        self
    }

    /// The cache this service reads through.
    pub fn cache(&self) -> &Arc<PasswordCache> {
        &self.cache
    }

    // == Generate ==
    /// Returns a random password of `length` characters for `complexity`.
    ///
    /// `length` is expected to be validated by the caller.
    pub async fn generate_password(&self, length: usize, complexity: Complexity) -> String {
        if self.cache_generated {
            if let Some(cached) = self.cache.get_generated(length, complexity).await {
                debug!("Generated password cache hit for ({}, {})", length, complexity);
                return cached;
            }
        }

        let password = generator::generate(length, &self.alphabet.characters(complexity));
        if self.cache_generated {
            self.cache
                .put_generated(length, complexity, password.clone())
                .await;
        }
        password
    }

    /// Generates a password and stores it (hashed) for `owner`.
    ///
    /// Returns the plaintext alongside the persisted record, which only
    /// carries the hash.
    pub async fn generate_and_store(
        &self,
        length: usize,
        complexity: Complexity,
        owner: impl Into<String>,
    ) -> Result<(String, PasswordRecord)> {
        let password = self.generate_password(length, complexity).await;
        let record = self
            .create(PasswordRecord::new(password.clone(), owner))
            .await?;
        Ok((password, record))
    }

    // == Create ==
    /// Hashes the secret and stores a new record.
    ///
    /// Any id on the incoming record is ignored; the repository assigns one.
    pub async fn create(&self, mut record: PasswordRecord) -> Result<PasswordRecord> {
        record.id = None;
        record.password = self.hash_secret(record.password).await?;

        let saved = self.repository.save(record).await?;
        self.cache.clear_records().await;
        info!("Created password record {:?} for '{}'", saved.id, saved.owner);
        Ok(saved)
    }

    // == Update ==
    /// Hashes the new secret and replaces the stored record with the same id.
    pub async fn update(&self, mut record: PasswordRecord) -> Result<PasswordRecord> {
        if record.id.is_none() {
            return Err(PasswordError::InvalidRequest(
                "Update requires a record id".to_string(),
            ));
        }
        record.password = self.hash_secret(record.password).await?;

        let saved = self.repository.save(record).await?;
        self.cache.clear_records().await;
        info!("Updated password record {:?}", saved.id);
        Ok(saved)
    }

    // == Delete ==
    /// Removes the record with `id`. Unknown ids still invalidate the cache.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.repository.delete_by_id(id).await?;
        self.cache.clear_records().await;
        info!("Deleted password record {}", id);
        Ok(())
    }

    // == Find All ==
    pub async fn find_all(&self) -> Result<Vec<PasswordRecord>> {
        let epoch = self.cache.epoch().await;
        if let Some(cached) = self.cache.get_all().await {
            debug!("All-records cache hit");
            return Ok(cached);
        }

        let records = self.repository.find_all().await?;
        self.cache.put_all(epoch, records.clone()).await;
        Ok(records)
    }

    // == Find By Id ==
    /// Returns the record with `id`. Absence is `None`, never an error, and
    /// is not cached.
    pub async fn find_by_id(&self, id: u64) -> Result<Option<PasswordRecord>> {
        let epoch = self.cache.epoch().await;
        if let Some(cached) = self.cache.get_by_id(id).await {
            debug!("By-id cache hit for {}", id);
            return Ok(Some(cached));
        }

        let record = self.repository.find_by_id(id).await?;
        if let Some(found) = &record {
            self.cache.put_by_id(epoch, id, found.clone()).await;
        }
        Ok(record)
    }

    // == Find By Tag ==
    /// Returns the records carrying a tag named `tag_name`.
    ///
    /// Empty listings are not cached, so arbitrary tag names do not grow
    /// the by-tag partition.
    pub async fn find_passwords_by_tag_name(&self, tag_name: &str) -> Result<Vec<PasswordRecord>> {
        let epoch = self.cache.epoch().await;
        if let Some(cached) = self.cache.get_by_tag(tag_name).await {
            debug!("By-tag cache hit for '{}'", tag_name);
            return Ok(cached);
        }

        let records = self.repository.find_by_tag_name(tag_name).await?;
        if !records.is_empty() {
            self.cache
                .put_by_tag(epoch, tag_name, records.clone())
                .await;
        }
        Ok(records)
    }

    // == Stats ==
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    async fn hash_secret(&self, plaintext: String) -> Result<String> {
        let hasher = self.hasher.clone();
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| PasswordError::Hashing(format!("Hashing task failed: {e}")))?
    }
}
