//! Namespaced artifact cache: conversation and analysis artifacts keyed by
//! document id (and, when a bearer token is in scope, user id).
//!
//! The core is `Result`-returning so failures stay observable in tests; the
//! `*_logged` / `load_or_default` surface is the documented boundary where any
//! failure collapses to a logged default and never reaches the caller.

mod key;
mod store;
pub mod token;

pub use key::{ArtifactKey, ArtifactKind};
pub use store::{FileStore, MemoryStore, Store};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Error reading or writing a cached artifact.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

type UserIdResolver = Box<dyn Fn() -> Option<String> + Send + Sync>;

/// Injected cache configuration: the fixed key prefix and an optional
/// user-id resolver consulted on every key render.
pub struct CacheConfig {
    prefix: String,
    user_id_resolver: Option<UserIdResolver>,
}

impl CacheConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            user_id_resolver: None,
        }
    }

    /// Scope keys per user. The resolver runs on every operation, so a token
    /// change between calls takes effect immediately.
    pub fn with_user_id_resolver(
        mut self,
        resolver: impl Fn() -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.user_id_resolver = Some(Box::new(resolver));
        self
    }

    fn user_id(&self) -> Option<String> {
        self.user_id_resolver.as_ref().and_then(|r| r())
    }
}

/// Stored shape of every artifact: the document ids it belongs to, the
/// caller's payload, and the save timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub document_ids: Vec<String>,
    pub payload: T,
    pub saved_at: DateTime<Utc>,
}

/// The artifact cache over a storage backend. Last write wins; there is no
/// merge and no cross-key transaction.
pub struct ArtifactCache<S: Store> {
    store: S,
    config: CacheConfig,
}

impl<S: Store> ArtifactCache<S> {
    pub fn new(store: S, config: CacheConfig) -> Self {
        Self { store, config }
    }

    /// The storage key this cache renders for `key`, user scope included.
    pub fn storage_key(&self, key: &ArtifactKey) -> String {
        key.render(&self.config.prefix, self.config.user_id().as_deref())
    }

    /// Serialize `payload` into an envelope stamped with the current time and
    /// write it under `key`, replacing any previous value.
    pub fn save<T: Serialize>(&self, key: &ArtifactKey, payload: &T) -> Result<(), CacheError> {
        let envelope = Envelope {
            document_ids: key.document_ids().to_vec(),
            payload,
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string(&envelope)?;
        self.store.set(&self.storage_key(key), &json)
    }

    /// Load the payload under `key`. A never-written key is `Ok(None)`;
    /// malformed stored data is a `Json` error.
    pub fn load<T: DeserializeOwned>(&self, key: &ArtifactKey) -> Result<Option<T>, CacheError> {
        Ok(self.load_envelope(key)?.map(|env| env.payload))
    }

    /// As `load`, but keeps the envelope (document ids and save timestamp).
    pub fn load_envelope<T: DeserializeOwned>(
        &self,
        key: &ArtifactKey,
    ) -> Result<Option<Envelope<T>>, CacheError> {
        match self.store.get(&self.storage_key(key))? {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    /// Remove exactly the entry under `key`.
    pub fn clear(&self, key: &ArtifactKey) -> Result<(), CacheError> {
        self.store.remove(&self.storage_key(key))
    }

    /// Remove every entry of `kind` in the current user scope. Returns how
    /// many entries were removed.
    pub fn clear_kind(&self, kind: ArtifactKind) -> Result<usize, CacheError> {
        let keys = self.list_keys(kind)?;
        for key in &keys {
            self.store.remove(key)?;
        }
        Ok(keys.len())
    }

    /// Storage keys of every entry of `kind` in the current user scope.
    pub fn list_keys(&self, kind: ArtifactKind) -> Result<Vec<String>, CacheError> {
        let prefix = key::kind_prefix(&self.config.prefix, kind, self.config.user_id().as_deref());
        Ok(self
            .store
            .keys()?
            .into_iter()
            .filter(|k| k.starts_with(&prefix))
            .collect())
    }

    // Never-throwing adapter surface. UI callers get a safe default on any
    // failure; the failure itself goes to the log.

    /// Load the payload under `key`, mapping a miss or any failure to `T::default()`.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &ArtifactKey) -> T {
        match self.load(key) {
            Ok(Some(payload)) => payload,
            Ok(None) => T::default(),
            Err(e) => {
                log::warn!("cache load failed for {}: {}", self.storage_key(key), e);
                T::default()
            }
        }
    }

    /// Save, absorbing any failure into a log line.
    pub fn save_logged<T: Serialize>(&self, key: &ArtifactKey, payload: &T) {
        if let Err(e) = self.save(key, payload) {
            log::warn!("cache save failed for {}: {}", self.storage_key(key), e);
        }
    }

    /// Clear, absorbing any failure into a log line.
    pub fn clear_logged(&self, key: &ArtifactKey) {
        if let Err(e) = self.clear(key) {
            log::warn!("cache clear failed for {}: {}", self.storage_key(key), e);
        }
    }
}
