// ABOUTME: In-memory TTL cache for analysis results with compute-once slots
// ABOUTME: Content-derived keys; concurrent identical requests compute at most once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis result cache
//!
//! Keys are SHA-256 digests of the canonical JSON serialization of the
//! inputs, so equality is content equality, never object identity. Each key
//! maps to a compute-once slot: concurrent callers racing on the same key
//! share one computation, with later arrivals blocking on the slot instead
//! of recomputing. An entry is VALID until its TTL elapses and EXPIRED
//! afterwards, evicted on the next access or sweep; there is no third state.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::models::{AnalysisContext, SelectionAnalysisResult, UserProfile, WorkoutSelections};

/// A computed result with its validity window
#[derive(Debug, Clone)]
struct StoredAnalysis {
    result: SelectionAnalysisResult,
    cached_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl StoredAnalysis {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Compute-once slot for one cache key
#[derive(Debug, Default)]
struct CacheSlot {
    cell: OnceLock<StoredAnalysis>,
}

/// Thread-safe in-memory cache for selection analysis results
#[derive(Debug, Default)]
pub struct AnalysisCache {
    slots: RwLock<HashMap<String, Arc<CacheSlot>>>,
}

/// Cache observability counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    /// Slots currently held (computed or in flight)
    pub total_entries: usize,
    /// Computed entries already past their TTL, pending eviction
    pub expired_entries: usize,
    /// Slots whose computation has not completed yet
    pub in_flight: usize,
}

/// Deterministic content-derived cache key
///
/// Model types serialize with fixed field order, so equal inputs always
/// produce equal keys.
#[must_use]
pub fn cache_key(
    profile: &UserProfile,
    selections: &WorkoutSelections,
    context: &AnalysisContext,
) -> String {
    let canonical = serde_json::json!({
        "userProfile": profile,
        "selections": selections,
        "context": context,
    });

    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_string(&canonical).unwrap_or_default().as_bytes());
    hex::encode(hasher.finalize())
}

impl AnalysisCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a valid entry; an expired entry is evicted and misses
    #[must_use]
    pub fn get(&self, key: &str) -> Option<SelectionAnalysisResult> {
        let now = Utc::now();

        {
            let slots = self.slots.read().ok()?;
            let slot = slots.get(key)?;
            match slot.cell.get() {
                Some(stored) if !stored.is_expired(now) => {
                    debug!(key, "analysis cache hit");
                    return Some(stored.result.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }

        // Entry was expired: evict under the write lock, re-checking first.
        if let Ok(mut slots) = self.slots.write() {
            let still_expired = slots
                .get(key)
                .and_then(|slot| slot.cell.get())
                .is_some_and(|stored| stored.is_expired(now));
            if still_expired {
                slots.remove(key);
                debug!(key, "evicted expired analysis cache entry");
            }
        }
        None
    }

    /// Return the cached result or compute and store it
    ///
    /// Concurrent callers with the same key perform at most one real
    /// computation; later arrivals block on the winner's slot and receive
    /// its result. If the lock is poisoned the computation runs uncached.
    pub fn get_or_compute(
        &self,
        key: &str,
        ttl: Duration,
        max_entries: usize,
        compute: impl FnOnce() -> SelectionAnalysisResult,
    ) -> SelectionAnalysisResult {
        if let Some(result) = self.get(key) {
            return result;
        }

        let slot = {
            let Ok(mut slots) = self.slots.write() else {
                return compute();
            };

            let mut evict_expired = false;
            if let Some(existing) = slots.get(key) {
                match existing.cell.get() {
                    Some(stored) if stored.is_expired(Utc::now()) => evict_expired = true,
                    Some(stored) => return stored.result.clone(),
                    None => {}
                }
            }
            if evict_expired {
                slots.remove(key);
            }

            Self::enforce_capacity(&mut slots, max_entries);
            Arc::clone(slots.entry(key.to_string()).or_default())
        };

        let stored = slot.cell.get_or_init(|| {
            debug!(key, "analysis cache miss, computing");
            let now = Utc::now();
            StoredAnalysis {
                result: compute(),
                cached_at: now,
                expires_at: now + ttl,
            }
        });

        stored.result.clone()
    }

    /// Remove every entry unconditionally
    pub fn clear(&self) {
        if let Ok(mut slots) = self.slots.write() {
            slots.clear();
        }
    }

    /// Sweep computed entries past their TTL
    pub fn cleanup_expired(&self) {
        let now = Utc::now();
        if let Ok(mut slots) = self.slots.write() {
            slots.retain(|_, slot| match slot.cell.get() {
                Some(stored) => !stored.is_expired(now),
                None => true,
            });
        }
    }

    /// Observability counters; zeroed if the lock is poisoned
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let Ok(slots) = self.slots.read() else {
            return CacheStats {
                total_entries: 0,
                expired_entries: 0,
                in_flight: 0,
            };
        };

        let now = Utc::now();
        let mut expired = 0;
        let mut in_flight = 0;
        for slot in slots.values() {
            match slot.cell.get() {
                Some(stored) if stored.is_expired(now) => expired += 1,
                Some(_) => {}
                None => in_flight += 1,
            }
        }

        CacheStats {
            total_entries: slots.len(),
            expired_entries: expired,
            in_flight,
        }
    }

    /// Keep the map under its entry cap: expired first, then oldest
    fn enforce_capacity(slots: &mut HashMap<String, Arc<CacheSlot>>, max_entries: usize) {
        if slots.len() < max_entries {
            return;
        }

        let now = Utc::now();
        slots.retain(|_, slot| match slot.cell.get() {
            Some(stored) => !stored.is_expired(now),
            None => true,
        });

        while slots.len() >= max_entries {
            let oldest = slots
                .iter()
                .filter_map(|(key, slot)| {
                    slot.cell.get().map(|stored| (key.clone(), stored.cached_at))
                })
                .min_by_key(|(_, cached_at)| *cached_at)
                .map(|(key, _)| key);

            match oldest {
                Some(key) => {
                    slots.remove(&key);
                }
                // Only in-flight slots remain; nothing sensible to evict.
                None => break,
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::config::FactorWeights;
    use crate::models::{
        AnalysisMetadata, FactorScore, FactorScores, ScoreStatus,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn factor() -> FactorScore {
        FactorScore {
            score: 0.8,
            status: ScoreStatus::Good,
            reasoning: String::new(),
            impact: String::new(),
            details: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    fn result() -> SelectionAnalysisResult {
        SelectionAnalysisResult {
            overall_score: 0.8,
            factors: FactorScores {
                goal_alignment: factor(),
                intensity_match: factor(),
                duration_fit: factor(),
                recovery_respect: factor(),
                equipment_optimization: factor(),
            },
            insights: Vec::new(),
            suggestions: Vec::new(),
            educational_content: Vec::new(),
            metadata: AnalysisMetadata {
                analysis_time_ms: 1,
                factor_weights: FactorWeights::default(),
                data_quality: 1.0,
                version: "test".to_string(),
                timestamp: Utc::now(),
                analysis_id: uuid::Uuid::new_v4(),
            },
        }
    }

    #[test]
    fn keys_are_content_derived_and_deterministic() {
        let profile = UserProfile::default();
        let selections = WorkoutSelections::default();
        let context = AnalysisContext::default();

        let a = cache_key(&profile, &selections, &context);
        let b = cache_key(&profile.clone(), &selections.clone(), &context.clone());
        assert_eq!(a, b);

        let mut other = profile;
        other.goals.push("strength".to_string());
        assert_ne!(a, cache_key(&other, &selections, &context));
    }

    #[test]
    fn hit_returns_original_result() {
        let cache = AnalysisCache::new();
        let first = cache.get_or_compute("k", Duration::seconds(60), 16, result);
        let second = cache.get_or_compute("k", Duration::seconds(60), 16, || {
            panic!("must not recompute within TTL")
        });
        assert_eq!(
            first.metadata.analysis_id,
            second.metadata.analysis_id
        );
    }

    #[test]
    fn expired_entries_miss_and_are_evicted() {
        let cache = AnalysisCache::new();
        cache.get_or_compute("k", Duration::milliseconds(1), 16, result);
        std::thread::sleep(std::time::Duration::from_millis(10));

        assert!(cache.get("k").is_none());
        assert_eq!(cache.stats().total_entries, 0);
    }

    #[test]
    fn clear_empties_unconditionally() {
        let cache = AnalysisCache::new();
        cache.get_or_compute("a", Duration::seconds(60), 16, result);
        cache.get_or_compute("b", Duration::seconds(60), 16, result);
        assert_eq!(cache.stats().total_entries, 2);

        cache.clear();
        assert_eq!(cache.stats().total_entries, 0);
        assert!(cache.get("a").is_none());
    }

    #[test]
    fn concurrent_identical_requests_compute_once() {
        let cache = Arc::new(AnalysisCache::new());
        let computations = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let computations = Arc::clone(&computations);
                std::thread::spawn(move || {
                    cache.get_or_compute("shared", Duration::seconds(60), 16, || {
                        computations.fetch_add(1, Ordering::SeqCst);
                        std::thread::sleep(std::time::Duration::from_millis(20));
                        result()
                    })
                })
            })
            .collect();

        let ids: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().unwrap().metadata.analysis_id)
            .collect();

        assert_eq!(computations.load(Ordering::SeqCst), 1);
        assert!(ids.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn capacity_is_enforced() {
        let cache = AnalysisCache::new();
        for i in 0..8 {
            cache.get_or_compute(&format!("k{i}"), Duration::seconds(60), 4, result);
        }
        assert!(cache.stats().total_entries <= 4);
    }
}
