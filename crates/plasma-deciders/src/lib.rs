//! Predicate evaluation engine for Plasma dispute adjudication
//!
//! A [`Property`] binds a decider to an encoded input. Evaluating it through its [`Decider`]
//! yields a [`Decision`]: the outcome plus a justification, the ordered chain of implication
//! steps an on-chain adjudicator replays head to tail to reach the same outcome.
//!
//! Composite deciders resolve sub-properties through a [`DeciderRegistry`] and evaluate their
//! branches concurrently. Witness-free atomic deciders memoize through a shared
//! [`DecisionCache`].

pub mod cache;
pub mod config;
pub mod decider;
pub mod deciders;
pub mod error;
pub mod inputs;
pub mod property;
pub mod registry;

pub use cache::DecisionCache;
pub use config::{DeciderIds, EngineConfig};
pub use decider::{DecideOptions, Decider};
pub use error::DeciderError;
pub use property::{
    default_decider_id, get_decision, Decision, DeciderId, ImplicationProofItem, Property,
};
pub use registry::DeciderRegistry;
