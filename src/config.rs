//! Configuration Module
//!
//! Handles loading and managing CLI configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI base URL.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/";

/// Default response-cache TTL in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 10;

/// CLI configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Response-cache TTL; the reaper sweep interval equals this value
    pub cache_ttl: Duration,
    /// Base URL of the remote creature catalog API
    pub base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 10)
    /// - `POKEDEX_API_URL` - API base URL (default: `https://pokeapi.co/api/v2/`)
    ///
    /// A zero TTL from the environment is treated as unset; the cache
    /// rejects non-positive TTLs at construction.
    pub fn from_env() -> Self {
        let ttl_secs = env::var("POKEDEX_CACHE_TTL")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_CACHE_TTL_SECS);

        Self {
            cache_ttl: Duration::from_secs(ttl_secs),
            base_url: env::var("POKEDEX_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
