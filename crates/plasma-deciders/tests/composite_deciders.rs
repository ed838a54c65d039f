use std::sync::{Arc, Weak};

use async_trait::async_trait;
use plasma_deciders::deciders::{AndDecider, ForAllDecider, NotDecider, OrDecider};
use plasma_deciders::inputs::{BinaryInput, BinaryWitness, ForAllInput, NotInput};
use plasma_deciders::{
    default_decider_id, DecideOptions, Decider, DeciderError, DeciderId, DeciderRegistry,
    Decision, DecisionCache, EngineConfig, Property,
};

/// Decides every input to a fixed outcome
struct FixedDecider {
    id: DeciderId,
    outcome: bool,
}

#[async_trait]
impl Decider for FixedDecider {
    fn id(&self) -> DeciderId {
        self.id
    }

    async fn decide(
        &self,
        input: &[u8],
        witness: Option<&[u8]>,
        _options: DecideOptions,
    ) -> Result<Decision, DeciderError> {
        Ok(Decision::atomic(
            Property::new(self.id, input.to_vec()),
            witness.map(<[u8]>::to_vec),
            self.outcome,
        ))
    }
}

/// Never reaches a conclusion
struct FailingDecider {
    id: DeciderId,
}

#[async_trait]
impl Decider for FailingDecider {
    fn id(&self) -> DeciderId {
        self.id
    }

    async fn decide(
        &self,
        input: &[u8],
        _witness: Option<&[u8]>,
        _options: DecideOptions,
    ) -> Result<Decision, DeciderError> {
        Err(DeciderError::unresolved(self.id, input, "stub failure"))
    }
}

fn and_id() -> DeciderId {
    default_decider_id("AndDecider")
}
fn or_id() -> DeciderId {
    default_decider_id("OrDecider")
}
fn for_all_id() -> DeciderId {
    default_decider_id("ForAllDecider")
}
fn not_id() -> DeciderId {
    default_decider_id("NotDecider")
}
fn true_id() -> DeciderId {
    default_decider_id("True")
}
fn false_id() -> DeciderId {
    default_decider_id("False")
}
fn failing_id() -> DeciderId {
    default_decider_id("Failing")
}

fn registry_with(config: EngineConfig) -> Arc<DeciderRegistry> {
    DeciderRegistry::new_cyclic(config, DecisionCache::new(), |registry| {
        let deciders: Vec<Arc<dyn Decider>> = vec![
            Arc::new(AndDecider::new(and_id(), registry.clone())),
            Arc::new(OrDecider::new(or_id(), registry.clone())),
            Arc::new(ForAllDecider::new(for_all_id(), registry.clone())),
            Arc::new(NotDecider::new(not_id(), registry.clone())),
            Arc::new(FixedDecider {
                id: true_id(),
                outcome: true,
            }),
            Arc::new(FixedDecider {
                id: false_id(),
                outcome: false,
            }),
            Arc::new(FailingDecider { id: failing_id() }),
        ];
        deciders
    })
}

fn registry() -> Arc<DeciderRegistry> {
    registry_with(EngineConfig::default())
}

fn leaf(outcome: bool, tag: u8) -> Property {
    let id = if outcome { true_id() } else { false_id() };
    Property::new(id, vec![tag])
}

fn and(left: Property, right: Property) -> Property {
    Property::new(and_id(), BinaryInput::new(left, right).encode())
}

fn or(left: Property, right: Property) -> Property {
    Property::new(or_id(), BinaryInput::new(left, right).encode())
}

fn not(property: Property) -> Property {
    Property::new(not_id(), NotInput::new(property).encode())
}

async fn decide(registry: &DeciderRegistry, property: &Property) -> Result<Decision, DeciderError> {
    registry
        .decide_property(property, None, DecideOptions::default())
        .await
}

#[tokio::test]
async fn test_and_true_true_accumulates_both_branches() {
    let registry = registry();
    let (left, right) = (leaf(true, 1), leaf(true, 2));
    let property = and(left.clone(), right.clone());

    let decision = decide(&registry, &property).await.expect("AND must decide");

    assert!(decision.outcome);
    assert_eq!(decision.justification.len(), 3);
    assert_eq!(decision.justification[0].implication, property);
    assert_eq!(decision.justification[0].implication_witness, None);
    assert_eq!(decision.justification[1].implication, left);
    assert_eq!(decision.justification[2].implication, right);
}

#[tokio::test]
async fn test_and_false_branch_is_the_whole_justification() {
    let registry = registry();
    let cases = [
        (true, false, leaf(false, 2)),
        (false, true, leaf(false, 1)),
        // left priority when both are false
        (false, false, leaf(false, 1)),
    ];

    for (left, right, expected) in cases {
        let property = and(leaf(left, 1), leaf(right, 2));
        let decision = decide(&registry, &property).await.expect("AND must decide");
        assert!(!decision.outcome, "AND({left}, {right}) must be false");
        assert_eq!(decision.justification.len(), 1);
        assert_eq!(decision.justification[0].implication, expected);
    }
}

#[tokio::test]
async fn test_nested_and_length() {
    let registry = registry();
    let inner = and(leaf(true, 1), leaf(true, 2));
    let property = and(inner, leaf(true, 3));

    let decision = decide(&registry, &property).await.unwrap();
    assert!(decision.outcome);
    // outer step + (inner step + 2 leaves) + 1 leaf
    assert_eq!(decision.justification.len(), 5);
    assert_eq!(decision.encode_claim().len(), 5);
}

#[tokio::test]
async fn test_branch_error_aborts_the_composite() {
    let registry = registry();
    let failing = Property::new(failing_id(), vec![7]);

    // A false sibling must not mask the error
    let property = and(leaf(false, 1), failing.clone());
    let err = decide(&registry, &property).await.unwrap_err();
    assert!(matches!(err, DeciderError::Unresolved { input, .. } if input == vec![7]));

    let property = or(leaf(true, 1), failing);
    assert!(decide(&registry, &property).await.is_err());
}

#[tokio::test]
async fn test_left_error_is_reported_first() {
    let registry = registry();
    let property = and(
        Property::new(failing_id(), vec![1]),
        Property::new(failing_id(), vec![2]),
    );
    let err = decide(&registry, &property).await.unwrap_err();
    assert_eq!(err, DeciderError::unresolved(failing_id(), &[1], "stub failure"));
}

#[tokio::test]
async fn test_unknown_decider() {
    let registry = registry();
    let unknown = default_decider_id("Nobody");
    let property = and(leaf(true, 1), Property::new(unknown, vec![]));
    assert_eq!(
        decide(&registry, &property).await.unwrap_err(),
        DeciderError::UnknownDecider(unknown)
    );
}

#[tokio::test]
async fn test_malformed_input_is_invalid_not_false() {
    let registry = registry();
    let property = Property::new(and_id(), vec![0xde, 0xad]);
    assert!(matches!(
        decide(&registry, &property).await,
        Err(DeciderError::InvalidInput { decider, .. }) if decider == and_id()
    ));
}

#[tokio::test]
async fn test_witnesses_are_routed_to_branches() {
    let registry = registry();
    let property = and(leaf(true, 1), leaf(true, 2));
    let witness = BinaryWitness {
        left: None,
        right: Some(vec![0xbe, 0xef]),
    }
    .encode();

    let decision = registry
        .decide_property(&property, Some(witness.as_slice()), DecideOptions::default())
        .await
        .unwrap();
    assert_eq!(decision.justification[0].implication_witness, None);
    assert_eq!(decision.justification[1].implication_witness, None);
    assert_eq!(
        decision.justification[2].implication_witness,
        Some(vec![0xbe, 0xef])
    );
}

#[tokio::test]
async fn test_or_truth_table() {
    let registry = registry();

    let decision = decide(&registry, &or(leaf(false, 1), leaf(true, 2)))
        .await
        .unwrap();
    assert!(decision.outcome);
    assert_eq!(decision.justification.len(), 2);
    assert_eq!(decision.justification[1].implication, leaf(true, 2));

    let decision = decide(&registry, &or(leaf(true, 1), leaf(true, 2)))
        .await
        .unwrap();
    assert_eq!(decision.justification[1].implication, leaf(true, 1));

    let property = or(leaf(false, 1), leaf(false, 2));
    let decision = decide(&registry, &property).await.unwrap();
    assert!(!decision.outcome);
    assert_eq!(decision.justification.len(), 3);
    assert_eq!(decision.justification[0].implication, property);
}

#[tokio::test]
async fn test_for_all() {
    let registry = registry();

    let empty = Property::new(for_all_id(), ForAllInput::new(vec![]).encode());
    let decision = decide(&registry, &empty).await.unwrap();
    assert!(decision.outcome);
    assert_eq!(decision.justification.len(), 1);

    let all_true = Property::new(
        for_all_id(),
        ForAllInput::new(vec![leaf(true, 1), leaf(true, 2), leaf(true, 3)]).encode(),
    );
    let decision = decide(&registry, &all_true).await.unwrap();
    assert!(decision.outcome);
    assert_eq!(decision.justification.len(), 4);

    let with_false = Property::new(
        for_all_id(),
        ForAllInput::new(vec![leaf(true, 1), leaf(false, 2), leaf(false, 3)]).encode(),
    );
    let decision = decide(&registry, &with_false).await.unwrap();
    assert!(!decision.outcome);
    assert_eq!(decision.justification[0].implication, leaf(false, 2));
}

#[tokio::test]
async fn test_not_negates() {
    let registry = registry();
    let property = not(leaf(false, 1));
    let decision = decide(&registry, &property).await.unwrap();
    assert!(decision.outcome);
    assert_eq!(decision.justification.len(), 2);
    assert_eq!(decision.justification[0].implication, property);
    assert_eq!(decision.justification[1].implication, leaf(false, 1));
}

#[tokio::test]
async fn test_depth_limit() {
    let config = EngineConfig {
        max_depth: 2,
        ..EngineConfig::default()
    };
    let registry = registry_with(config);

    // NOT at depths 0 and 1, leaf at depth 2
    let shallow = not(not(leaf(true, 1)));
    assert!(decide(&registry, &shallow).await.unwrap().outcome);

    let deep = not(not(not(leaf(true, 1))));
    assert!(matches!(
        decide(&registry, &deep).await,
        Err(DeciderError::Unresolved { .. })
    ));
}

#[tokio::test]
async fn test_dropped_registry_is_unresolved() {
    let decider = AndDecider::new(and_id(), Weak::new());
    let input = BinaryInput::new(leaf(true, 1), leaf(true, 2)).encode();
    assert!(matches!(
        decider.check_decision(&input).await,
        Err(DeciderError::Unresolved { .. })
    ));
}
