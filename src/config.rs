//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::generator::DEFAULT_SYMBOLS;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Symbol set appended to the alphabet at the highest complexity
    pub password_symbols: String,
    /// Whether generated passwords are cached by (length, complexity)
    pub cache_generated: bool,
    /// Argon2 memory cost in KiB
    pub argon2_memory_kib: u32,
    /// Argon2 number of passes
    pub argon2_iterations: u32,
    /// Argon2 degree of parallelism
    pub argon2_parallelism: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `PASSWORD_SYMBOLS` - Symbol set for complexity 3 (default: `!@#$%^&*()_-+=<>?/{}[]|`)
    /// - `CACHE_GENERATED` - Cache generated passwords (default: true)
    /// - `ARGON2_MEMORY_KIB` - Argon2 memory cost (default: 19456)
    /// - `ARGON2_ITERATIONS` - Argon2 time cost (default: 2)
    /// - `ARGON2_PARALLELISM` - Argon2 lanes (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            password_symbols: env::var("PASSWORD_SYMBOLS")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.password_symbols),
            cache_generated: parse_var("CACHE_GENERATED").unwrap_or(defaults.cache_generated),
            argon2_memory_kib: parse_var("ARGON2_MEMORY_KIB")
                .unwrap_or(defaults.argon2_memory_kib),
            argon2_iterations: parse_var("ARGON2_ITERATIONS")
                .unwrap_or(defaults.argon2_iterations),
            argon2_parallelism: parse_var("ARGON2_PARALLELISM")
                .unwrap_or(defaults.argon2_parallelism),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            password_symbols: DEFAULT_SYMBOLS.to_string(),
            cache_generated: true,
            argon2_memory_kib: 19 * 1024,
            argon2_iterations: 2,
            argon2_parallelism: 1,
        }
    }
}
