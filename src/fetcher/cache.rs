//! In-memory TTL cache for fetched model lists.
//!
//! One entry per provider ID. Entries are written whole and copied out
//! whole, so readers never observe a half-updated list. Concurrent fetches
//! for the same provider are allowed; the last writer wins.

use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;

use crate::error::{LlmError, Result};

/// A cached model list with its expiry bookkeeping.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    pub(crate) models: Vec<String>,
    /// Unix timestamp of the write, in seconds
    pub(crate) timestamp: i64,
    /// Time-to-live in seconds
    pub(crate) ttl: i64,
}

impl CacheEntry {
    fn age_seconds(&self, now: i64) -> i64 {
        now - self.timestamp
    }

    fn is_valid(&self, now: i64) -> bool {
        self.age_seconds(now) < self.ttl
    }
}

/// Snapshot of one cache entry's state, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct CacheInfo {
    /// Provider the entry belongs to
    pub provider_id: String,
    /// Number of cached model names
    pub model_count: usize,
    /// Seconds since the entry was written
    pub age_seconds: i64,
    /// Time-to-live the entry was written with, in seconds
    pub ttl_seconds: i64,
    /// Whether the entry is still fresh
    pub is_valid: bool,
    /// Seconds until expiry, floored at zero
    pub expires_in: i64,
}

/// Model list cache keyed by provider ID.
///
/// Reads under a poisoned lock degrade to a miss rather than propagating
/// the panic; the fallible write path reports it instead.
#[derive(Debug, Default)]
pub(crate) struct ModelCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ModelCache {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    /// Store a model list. The TTL must be a positive number of seconds;
    /// anything else is a caller bug and leaves the cache untouched.
    pub(crate) fn insert(&self, provider_id: &str, models: &[String], ttl_seconds: i64) -> Result<()> {
        if ttl_seconds <= 0 {
            return Err(LlmError::InvalidParameter(format!(
                "Cache TTL must be a positive number of seconds, got {ttl_seconds}"
            )));
        }
        let entry = CacheEntry {
            models: models.to_vec(),
            timestamp: Self::now(),
            ttl: ttl_seconds,
        };
        let mut entries = self
            .entries
            .write()
            .map_err(|_| LlmError::InternalError("model cache lock poisoned".to_string()))?;
        entries.insert(provider_id.to_string(), entry);
        Ok(())
    }

    /// Models for a provider whose entry is still fresh.
    pub(crate) fn valid_models(&self, provider_id: &str) -> Option<Vec<String>> {
        let now = Self::now();
        let entries = self.entries.read().ok()?;
        let entry = entries.get(provider_id)?;
        entry.is_valid(now).then(|| entry.models.clone())
    }

    /// Models for a provider regardless of freshness.
    pub(crate) fn any_models(&self, provider_id: &str) -> Option<Vec<String>> {
        let entries = self.entries.read().ok()?;
        entries.get(provider_id).map(|entry| entry.models.clone())
    }

    /// Drop the entry for one provider.
    pub(crate) fn remove(&self, provider_id: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.remove(provider_id);
        }
    }

    /// Drop every entry.
    pub(crate) fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Diagnostic snapshot of a provider's entry, if one exists.
    pub(crate) fn info(&self, provider_id: &str) -> Option<CacheInfo> {
        let now = Self::now();
        let entries = self.entries.read().ok()?;
        let entry = entries.get(provider_id)?;
        let age = entry.age_seconds(now);
        Some(CacheInfo {
            provider_id: provider_id.to_string(),
            model_count: entry.models.len(),
            age_seconds: age,
            ttl_seconds: entry.ttl,
            is_valid: entry.is_valid(now),
            expires_in: (entry.ttl - age).max(0),
        })
    }

    /// Test hook: plant an entry with an arbitrary timestamp.
    #[cfg(test)]
    pub(crate) fn insert_entry(&self, provider_id: &str, entry: CacheEntry) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(provider_id.to_string(), entry);
        }
    }
}
