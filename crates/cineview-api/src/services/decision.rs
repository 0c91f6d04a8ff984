//! Decision evaluation service with caller-side memoization.
//!
//! The engine itself never memoizes; this service is the external caching
//! layer that wraps it. Keys are derived from a canonical serialization of
//! `(analysis, context)`, so two requests with the same resolved JSON hit
//! the same entry. Entries are bounded by capacity and TTL.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use tracing::warn;

use cineview_decision::{build_creative_decision_from_value, DecisionResult};
use cineview_models::{DecisionContext, DecisionOutput};

use crate::metrics;

struct CacheEntry {
    output: Arc<DecisionOutput>,
    inserted_at: Instant,
}

/// Bounded, TTL-evicting cache of decision outputs.
#[derive(Clone)]
pub struct DecisionCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    capacity: usize,
    ttl: Duration,
}

impl DecisionCache {
    /// Create a new cache.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Derive the cache key for an analysis/context pair.
    ///
    /// serde_json orders object keys deterministically, so the serialized
    /// form is canonical for equal inputs.
    pub fn cache_key(analysis: &serde_json::Value, context: Option<&DecisionContext>) -> String {
        let canonical = serde_json::json!({
            "analysis": analysis,
            "context": context,
        });
        let digest = Sha256::digest(canonical.to_string().as_bytes());
        URL_SAFE_NO_PAD.encode(digest)
    }

    /// Look up a live entry.
    pub async fn get(&self, key: &str) -> Option<Arc<DecisionOutput>> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| entry.inserted_at.elapsed() < self.ttl)
            .map(|entry| Arc::clone(&entry.output))
    }

    /// Insert an entry, evicting expired and oldest entries at capacity.
    pub async fn insert(&self, key: String, output: Arc<DecisionOutput>) {
        let mut entries = self.entries.write().await;

        if entries.len() >= self.capacity {
            let ttl = self.ttl;
            entries.retain(|_, entry| entry.inserted_at.elapsed() < ttl);

            if entries.len() >= self.capacity {
                let mut by_age: Vec<_> = entries
                    .iter()
                    .map(|(key, entry)| (key.clone(), entry.inserted_at))
                    .collect();
                by_age.sort_by_key(|(_, inserted_at)| *inserted_at);

                let to_remove = entries.len() + 1 - self.capacity;
                for (key, _) in by_age.into_iter().take(to_remove) {
                    entries.remove(&key);
                }
                warn!("Decision cache exceeded capacity, removed {} entries", to_remove);
            }
        }

        entries.insert(
            key,
            CacheEntry {
                output,
                inserted_at: Instant::now(),
            },
        );
    }

    /// Number of cached entries (including any not yet expired-swept).
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

/// Evaluates creative decisions, memoizing through [`DecisionCache`].
#[derive(Clone)]
pub struct DecisionService {
    cache: DecisionCache,
}

impl DecisionService {
    /// Create a new service with the given cache bounds.
    pub fn new(cache_capacity: usize, cache_ttl: Duration) -> Self {
        Self {
            cache: DecisionCache::new(cache_capacity, cache_ttl),
        }
    }

    /// Evaluate a decision, returning the output and whether it was served
    /// from cache.
    pub async fn evaluate(
        &self,
        analysis: &serde_json::Value,
        context: Option<&DecisionContext>,
    ) -> DecisionResult<(Arc<DecisionOutput>, bool)> {
        let key = DecisionCache::cache_key(analysis, context);

        if let Some(hit) = self.cache.get(&key).await {
            metrics::record_cache_hit();
            return Ok((hit, true));
        }
        metrics::record_cache_miss();

        let output = Arc::new(build_creative_decision_from_value(analysis, context)?);
        self.cache.insert(key, Arc::clone(&output)).await;

        Ok((output, false))
    }
}
