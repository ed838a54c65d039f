use plasma_merkle::{
    verify_and_recover_bounds, verify_range_inclusion, InclusionProof, MerkleError,
    MerkleIntervalTree, ProofFailure, StateTree, TreeNode,
};
use plasma_primitives::{keccak256, Address, Range, StateObject, StateUpdate, U256};

fn build_tree(bounds: &[u64]) -> MerkleIntervalTree {
    MerkleIntervalTree::new(
        bounds
            .iter()
            .enumerate()
            .map(|(i, b)| (format!("h{i}").into_bytes(), U256::from(*b))),
    )
    .unwrap()
}

#[test]
fn test_every_leaf_verifies_against_root() {
    for count in 1..=17u64 {
        let bounds: Vec<u64> = (0..count).map(|i| i * 7 + 1).collect();
        let tree = build_tree(&bounds);
        let root = tree.root();
        for i in 0..count as usize {
            let proof = tree.inclusion_proof(i).unwrap();
            let recovered =
                verify_and_recover_bounds(tree.leaf(i).unwrap(), &proof, &root.hash).unwrap();
            assert_eq!(recovered.root, root, "leaf {i} of {count}");
        }
    }
}

#[test]
fn test_single_bit_flip_in_any_sibling_is_detected() {
    let tree = build_tree(&[0, 10, 25, 40, 41, 100]);
    let root = tree.root().hash;

    for i in 0..tree.leaf_count() {
        let leaf = tree.leaf(i).unwrap();
        let proof = tree.inclusion_proof(i).unwrap();
        for s in 0..proof.siblings.len() {
            for byte in 0..32 {
                for bit in 0..8 {
                    let mut tampered = proof.clone();
                    tampered.siblings[s].hash.0[byte] ^= 1 << bit;
                    let result = verify_and_recover_bounds(leaf, &tampered, &root);
                    assert!(
                        matches!(
                            result,
                            Err(MerkleError::InvalidProof(ProofFailure::RootMismatch { .. }))
                        ),
                        "leaf {i} sibling {s} byte {byte} bit {bit} not detected"
                    );
                }
            }
        }
    }
}

#[test]
fn test_recovered_bound_is_next_leaf_bound() {
    let bounds = [3u64, 8, 9, 20, 21, 50, 51];
    let tree = build_tree(&bounds);
    let root = tree.root().hash;

    for i in 0..bounds.len() {
        let proof = tree.inclusion_proof(i).unwrap();
        let recovered = verify_and_recover_bounds(tree.leaf(i).unwrap(), &proof, &root).unwrap();
        let expected = bounds
            .get(i + 1)
            .map(|b| U256::from(*b))
            .unwrap_or(U256::MAX);
        assert_eq!(recovered.upper_bound, expected, "leaf {i}");
    }
}

#[test]
fn test_tampered_sibling_bound_is_detected() {
    let tree = build_tree(&[0, 10, 25]);
    let mut proof = tree.inclusion_proof(0).unwrap();
    // Widening the leaf's territory by lying about the neighbour's bound changes the root
    proof.siblings[0].lower_bound = U256::from(20);
    assert!(verify_and_recover_bounds(tree.leaf(0).unwrap(), &proof, &tree.root().hash).is_err());
}

#[test]
fn test_wrong_root_is_rejected() {
    let tree = build_tree(&[0, 10, 25]);
    let proof = tree.inclusion_proof(1).unwrap();
    let err = verify_and_recover_bounds(tree.leaf(1).unwrap(), &proof, &keccak256(b"other"))
        .unwrap_err();
    assert!(matches!(
        err,
        MerkleError::InvalidProof(ProofFailure::RootMismatch { .. })
    ));
}

#[test]
fn test_range_scenario_at_bound_ten() {
    let tree = MerkleIntervalTree::new(vec![
        (b"h0".to_vec(), U256::from(0)),
        (b"h1".to_vec(), U256::from(10)),
        (b"h2".to_vec(), U256::from(25)),
    ])
    .unwrap();
    let root = tree.root().hash;
    let leaf = *tree.leaf(1).unwrap();
    let proof = tree.inclusion_proof(1).unwrap();

    let recovered = verify_and_recover_bounds(&leaf, &proof, &root).unwrap();
    assert_eq!(recovered.upper_bound, U256::from(25));

    let too_long = Range::new(U256::from(10), U256::from(30)).unwrap();
    assert_eq!(
        verify_range_inclusion(&leaf, &too_long, &proof, &root),
        Err(MerkleError::InvalidProof(ProofFailure::BoundExceeded {
            range_end: U256::from(30),
            upper_bound: U256::from(25),
        }))
    );

    let fits = Range::new(U256::from(10), U256::from(20)).unwrap();
    assert!(verify_range_inclusion(&leaf, &fits, &proof, &root).is_ok());

    let wrong_start = Range::new(U256::from(11), U256::from(20)).unwrap();
    assert!(matches!(
        verify_range_inclusion(&leaf, &wrong_start, &proof, &root),
        Err(MerkleError::InvalidProof(ProofFailure::StartMismatch { .. }))
    ));
}

#[test]
fn test_state_update_scenario() {
    let make = |start: u64, end: u64| StateUpdate {
        state_object: StateObject::new(Address::repeat_byte(0x42), vec![0x01]),
        range: Range::new(U256::from(start), U256::from(end)).unwrap(),
        plasma_block_number: U256::from(1),
        deposit_address: Address::repeat_byte(0x07),
    };

    // The committed update at bound 10 claims [10, 20)
    let tree = StateTree::new(vec![make(0, 10), make(10, 20), make(25, 40)]).unwrap();
    let root = tree.root().hash;
    let proof = tree.state_update_inclusion_proof(1).unwrap();
    let bounds = StateTree::verify_state_update(&make(10, 20), &proof, &root).unwrap();
    assert_eq!(bounds.upper_bound, U256::from(25));

    // A leaf committed for [10, 30) cannot be proven: its neighbour starts at 25
    let overlapping = StateTree::new(vec![make(0, 10), make(10, 30), make(25, 40)]).unwrap();
    let proof = overlapping.state_update_inclusion_proof(1).unwrap();
    assert!(matches!(
        StateTree::verify_state_update(&make(10, 30), &proof, &overlapping.root().hash),
        Err(MerkleError::InvalidProof(ProofFailure::BoundExceeded { .. }))
    ));
}

#[test]
fn test_proof_json_shape() {
    let tree = build_tree(&[0, 10, 25]);
    let proof = tree.inclusion_proof(2).unwrap();
    let json = serde_json::to_value(&proof).unwrap();
    assert_eq!(json["leaf_position"], 2);
    assert_eq!(json["siblings"].as_array().unwrap().len(), 2);
    let back: InclusionProof = serde_json::from_value(json).unwrap();
    assert_eq!(back, proof);
    assert!(back.siblings[0] == TreeNode::sentinel());
}
