//! Runtime configuration from environment variables.
//!
//! Everything is optional: the formatter needs no configuration at all, and the
//! cache falls back to the platform data directory and unscoped keys.

use std::env;
use std::path::PathBuf;

use crate::cache;
use crate::paths;

/// Default prefix for cache keys.
pub const DEFAULT_CACHE_PREFIX: &str = "documind";

#[derive(Debug, Clone)]
pub struct Config {
    /// Cache key prefix (`DOCUMIND_PREFIX`, default "documind").
    pub cache_prefix: String,
    /// Bearer token used to scope cache keys per user (`DOCUMIND_TOKEN`).
    pub bearer_token: Option<String>,
    /// Override for the artifact store root (`DOCUMIND_DATA_DIR`).
    pub data_dir: Option<PathBuf>,
}

/// Load configuration from environment. Missing variables fall back to defaults.
pub fn load() -> Config {
    let cache_prefix =
        env::var("DOCUMIND_PREFIX").unwrap_or_else(|_| DEFAULT_CACHE_PREFIX.to_string());
    let bearer_token = env::var("DOCUMIND_TOKEN").ok().filter(|t| !t.is_empty());
    let data_dir = env::var("DOCUMIND_DATA_DIR")
        .ok()
        .filter(|d| !d.is_empty())
        .map(PathBuf::from);

    Config {
        cache_prefix,
        bearer_token,
        data_dir,
    }
}

impl Config {
    /// Root directory for the on-disk artifact store.
    /// Returns `None` when no override is set and the platform data dir is unavailable.
    pub fn store_root(&self) -> Option<PathBuf> {
        self.data_dir.clone().or_else(paths::artifacts_dir)
    }

    /// Cache configuration with the user-id resolver wired to the bearer token.
    pub fn cache_config(&self) -> cache::CacheConfig {
        let token = self.bearer_token.clone();
        cache::CacheConfig::new(&self.cache_prefix).with_user_id_resolver(move || {
            token.as_deref().and_then(cache::token::user_id_from_token)
        })
    }
}
