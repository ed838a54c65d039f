//! Built-in deciders.
//!
//! Atomic deciders decide base facts from their input alone and memoize through the shared
//! [`DecisionCache`](crate::DecisionCache). Composite deciders reduce their property to
//! sub-properties resolved through the [`DeciderRegistry`](crate::DeciderRegistry).

mod and;
mod comparison;
mod equality;
mod for_all;
mod hash_preimage;
mod message_nonce;
mod not;
mod or;

pub use and::AndDecider;
pub use comparison::{GreaterThanDecider, LessThanDecider};
pub use equality::EqualityDecider;
pub use for_all::ForAllDecider;
pub use hash_preimage::HashPreimageExistenceDecider;
pub use message_nonce::MessageNonceLessThanDecider;
pub use not::NotDecider;
pub use or::OrDecider;
