//! Resolution of decider ids to decider instances

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use tracing::{debug, warn};

use crate::cache::DecisionCache;
use crate::config::EngineConfig;
use crate::decider::{DecideOptions, Decider};
use crate::deciders::{
    AndDecider, EqualityDecider, ForAllDecider, GreaterThanDecider, HashPreimageExistenceDecider,
    LessThanDecider, MessageNonceLessThanDecider, NotDecider, OrDecider,
};
use crate::error::DeciderError;
use crate::property::{Decision, DeciderId, Property};

/// Set of deciders properties can be resolved against.
///
/// Composite deciders hold a [`Weak`] handle to the registry they are registered in, which
/// is why registries are built through [`DeciderRegistry::new_cyclic`].
pub struct DeciderRegistry {
    config: EngineConfig,
    cache: DecisionCache,
    deciders: HashMap<DeciderId, Arc<dyn Decider>>,
}

impl DeciderRegistry {
    /// Build a registry from the deciders returned by `build`, which receives a handle to the
    /// registry under construction for injection into composite deciders
    pub fn new_cyclic(
        config: EngineConfig,
        cache: DecisionCache,
        build: impl FnOnce(&Weak<DeciderRegistry>) -> Vec<Arc<dyn Decider>>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|registry| {
            let mut deciders = HashMap::new();
            for decider in build(registry) {
                if deciders.insert(decider.id(), decider).is_some() {
                    warn!("Duplicate decider id registered, keeping the last one");
                }
            }
            Self {
                config,
                cache,
                deciders,
            }
        })
    }

    /// Registry with every built-in decider under the ids from `config`
    pub fn with_defaults(config: EngineConfig) -> Arc<Self> {
        let cache = match config.cache_capacity {
            Some(capacity) => DecisionCache::with_capacity_limit(capacity),
            None => DecisionCache::new(),
        };
        let shared = config.cache_enabled.then(|| cache.clone());
        let ids = config.decider_ids.clone();

        Self::new_cyclic(config, cache, |registry| {
            let deciders: Vec<Arc<dyn Decider>> = vec![
                Arc::new(AndDecider::new(ids.and, registry.clone())),
                Arc::new(OrDecider::new(ids.or, registry.clone())),
                Arc::new(ForAllDecider::new(ids.for_all, registry.clone())),
                Arc::new(NotDecider::new(ids.not, registry.clone())),
                Arc::new(EqualityDecider::new(ids.equality, shared.clone())),
                Arc::new(LessThanDecider::new(ids.less_than, shared.clone())),
                Arc::new(GreaterThanDecider::new(ids.greater_than, shared.clone())),
                Arc::new(MessageNonceLessThanDecider::new(
                    ids.message_nonce_less_than,
                    shared.clone(),
                )),
                Arc::new(HashPreimageExistenceDecider::new(ids.hash_preimage_existence)),
            ];
            deciders
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache(&self) -> &DecisionCache {
        &self.cache
    }

    pub fn get(&self, id: &DeciderId) -> Option<Arc<dyn Decider>> {
        self.deciders.get(id).cloned()
    }

    /// Decide `property` with its registered decider
    pub async fn decide_property(
        &self,
        property: &Property,
        witness: Option<&[u8]>,
        options: DecideOptions,
    ) -> Result<Decision, DeciderError> {
        if options.depth > self.config.max_depth {
            return Err(DeciderError::unresolved(
                property.decider,
                &property.input,
                format!("maximum evaluation depth {} exceeded", self.config.max_depth),
            ));
        }
        let decider = self
            .get(&property.decider)
            .ok_or(DeciderError::UnknownDecider(property.decider))?;

        debug!(
            "Deciding property of {:?} at depth {}",
            property.decider, options.depth
        );
        decider.decide(&property.input, witness, options).await
    }
}

/// Resolve a composite decider's registry handle
pub(crate) fn upgrade(
    registry: &Weak<DeciderRegistry>,
    decider: DeciderId,
    input: &[u8],
) -> Result<Arc<DeciderRegistry>, DeciderError> {
    registry
        .upgrade()
        .ok_or_else(|| DeciderError::unresolved(decider, input, "decider registry dropped"))
}
