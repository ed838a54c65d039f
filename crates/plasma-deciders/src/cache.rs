//! Concurrent memoization of witness-free decisions

use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

use crate::error::DeciderError;
use crate::property::{Decision, Property};

/// Shared cache keyed by property, i.e. `(decider id, canonical input encoding)`.
///
/// Clones share the same entries, so equivalent decider instances with the same id see each
/// other's results. Entries are never evicted: an unbounded cache grows with every distinct
/// property decided. With a capacity limit, properties first seen once the cache is full are
/// still decided but not stored. The limit is checked before inserting, so concurrent writers
/// may overshoot it by at most one entry each.
#[derive(Debug, Clone, Default)]
pub struct DecisionCache {
    entries: Arc<DashMap<Property, Decision>>,
    capacity: Option<usize>,
}

impl DecisionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::with_capacity(capacity)),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn get(&self, property: &Property) -> Option<Decision> {
        self.entries.get(property).map(|entry| entry.value().clone())
    }

    /// Store `decision`; returns false when the cache is full and `property` is not yet cached
    pub fn insert(&self, property: Property, decision: Decision) -> bool {
        if let Some(capacity) = self.capacity {
            if self.entries.len() >= capacity && !self.entries.contains_key(&property) {
                trace!("Decision cache full ({} entries), not storing", capacity);
                return false;
            }
        }
        self.entries.insert(property, decision);
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

/// Return the cached decision for `property` unless `no_cache` is set; otherwise evaluate,
/// store and return a fresh atomic decision. Errors are never cached.
pub(crate) fn memoize(
    cache: Option<&DecisionCache>,
    property: Property,
    no_cache: bool,
    evaluate: impl FnOnce() -> Result<bool, DeciderError>,
) -> Result<Decision, DeciderError> {
    if let (Some(cache), false) = (cache, no_cache) {
        if let Some(decision) = cache.get(&property) {
            trace!("Decision cache hit for decider {:?}", property.decider);
            return Ok(decision);
        }
    }

    let outcome = evaluate()?;
    let decision = Decision::atomic(property.clone(), None, outcome);
    if let Some(cache) = cache {
        cache.insert(property, decision.clone());
    }
    Ok(decision)
}
