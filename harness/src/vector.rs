use kzg_blob_vectors_primitives::{helpers, point_evaluation::PointEvaluationInput};
use serde::Serialize;

use crate::kzg::{KzgCommitment, KzgProof};

/// One verified opening of the index blob, hex-encoded for reporting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestVector {
    pub index: usize,
    pub bit_reversed_index: usize,
    pub commitment: String,
    pub versioned_hash: String,
    pub z: String,
    pub y: String,
    pub proof: String,
    pub point_evaluation_input: String,
}

impl TestVector {
    pub fn new(
        index: usize,
        bit_reversed_index: usize,
        commitment: &KzgCommitment,
        proof: &KzgProof,
        input: &PointEvaluationInput,
    ) -> Self {
        TestVector {
            index,
            bit_reversed_index,
            commitment: commitment.to_hex(),
            versioned_hash: input.versioned_hash.to_hex(),
            z: helpers::to_hex(&input.z),
            y: helpers::to_hex(&input.y),
            proof: proof.to_hex(),
            point_evaluation_input: helpers::to_hex(&input.encode()),
        }
    }
}
