//! Engine configuration

use serde::{Deserialize, Serialize};

use crate::property::{default_decider_id, DeciderId};

/// Configuration parameters of the decider engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum nesting of composite properties before evaluation is abandoned as unresolved
    pub max_depth: usize,
    /// Memoize witness-free atomic decisions
    pub cache_enabled: bool,
    /// Upper bound on memoized decisions; `None` keeps every decision for the engine's lifetime
    pub cache_capacity: Option<usize>,
    /// Ids under which the built-in deciders are registered
    pub decider_ids: DeciderIds,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 32,
            cache_enabled: true,
            cache_capacity: None,
            decider_ids: DeciderIds::default(),
        }
    }
}

/// Ids of the built-in deciders, matching the addresses of their on-chain counterparts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeciderIds {
    pub and: DeciderId,
    pub or: DeciderId,
    pub for_all: DeciderId,
    pub not: DeciderId,
    pub equality: DeciderId,
    pub less_than: DeciderId,
    pub greater_than: DeciderId,
    pub message_nonce_less_than: DeciderId,
    pub hash_preimage_existence: DeciderId,
}

impl Default for DeciderIds {
    fn default() -> Self {
        Self {
            and: default_decider_id("AndDecider"),
            or: default_decider_id("OrDecider"),
            for_all: default_decider_id("ForAllDecider"),
            not: default_decider_id("NotDecider"),
            equality: default_decider_id("EqualityDecider"),
            less_than: default_decider_id("LessThanDecider"),
            greater_than: default_decider_id("GreaterThanDecider"),
            message_nonce_less_than: default_decider_id("MessageNonceLessThanDecider"),
            hash_preimage_existence: default_decider_id("HashPreimageExistenceDecider"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"max_depth": 4}"#).unwrap();
        assert_eq!(config.max_depth, 4);
        assert!(config.cache_enabled);
        assert_eq!(config.cache_capacity, None);
        assert_eq!(config.decider_ids, DeciderIds::default());
    }

    #[test]
    fn test_cache_capacity_from_json() {
        let config: EngineConfig = serde_json::from_str(r#"{"cache_capacity": 1000}"#).unwrap();
        assert_eq!(config.cache_capacity, Some(1000));
    }

    #[test]
    fn test_override_single_id() {
        let config: EngineConfig = serde_json::from_str(
            r#"{"decider_ids": {"and": "0x0000000000000000000000000000000000000001"}}"#,
        )
        .unwrap();
        assert_eq!(config.decider_ids.and, DeciderId::from_low_u64_be(1));
        assert_eq!(config.decider_ids.or, DeciderIds::default().or);
    }
}
