//! Input layout of the EIP-4844 point-evaluation precompile.
//!
//! ```text
//! [  0.. 32)  versioned hash
//! [ 32.. 64)  z
//! [ 64.. 96)  y
//! [ 96..144)  commitment
//! [144..192)  proof
//! ```

use crate::{
    consts::{
        BYTES_PER_COMMITMENT, BYTES_PER_FIELD_ELEMENT, BYTES_PER_PROOF, BYTES_PER_VERSIONED_HASH,
        POINT_EVALUATION_INPUT_LENGTH,
    },
    errors::KzgError,
    helpers,
    versioned_hash::VersionedHash,
    Bytes32, Bytes48,
};

const Z_OFFSET: usize = BYTES_PER_VERSIONED_HASH;
const Y_OFFSET: usize = Z_OFFSET + BYTES_PER_FIELD_ELEMENT;
const COMMITMENT_OFFSET: usize = Y_OFFSET + BYTES_PER_FIELD_ELEMENT;
const PROOF_OFFSET: usize = COMMITMENT_OFFSET + BYTES_PER_COMMITMENT;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointEvaluationInput {
    pub versioned_hash: VersionedHash,
    pub z: Bytes32,
    pub y: Bytes32,
    pub commitment: Bytes48,
    pub proof: Bytes48,
}

impl PointEvaluationInput {
    /// Builds the input for an opening, deriving the versioned hash from the
    /// commitment.
    pub fn new(z: Bytes32, y: Bytes32, commitment: Bytes48, proof: Bytes48) -> Self {
        Self {
            versioned_hash: VersionedHash::from_commitment(&commitment),
            z,
            y,
            commitment,
            proof,
        }
    }

    pub fn encode(&self) -> [u8; POINT_EVALUATION_INPUT_LENGTH] {
        let mut out = [0u8; POINT_EVALUATION_INPUT_LENGTH];
        out[..Z_OFFSET].copy_from_slice(self.versioned_hash.as_bytes());
        out[Z_OFFSET..Y_OFFSET].copy_from_slice(&self.z);
        out[Y_OFFSET..COMMITMENT_OFFSET].copy_from_slice(&self.y);
        out[COMMITMENT_OFFSET..PROOF_OFFSET].copy_from_slice(&self.commitment);
        out[PROOF_OFFSET..].copy_from_slice(&self.proof);
        out
    }

    /// Splits a precompile input into its fields. Only the length is
    /// checked; use [`PointEvaluationInput::has_consistent_hash`] to check the
    /// versioned hash against the embedded commitment.
    pub fn decode(input: &[u8]) -> Result<Self, KzgError> {
        if input.len() != POINT_EVALUATION_INPUT_LENGTH {
            return Err(KzgError::InvalidInputLength {
                expected: POINT_EVALUATION_INPUT_LENGTH,
                actual: input.len(),
            });
        }
        Ok(Self {
            versioned_hash: VersionedHash::from_bytes(helpers::to_fixed_bytes(&input[..Z_OFFSET])?),
            z: helpers::to_fixed_bytes(&input[Z_OFFSET..Y_OFFSET])?,
            y: helpers::to_fixed_bytes(&input[Y_OFFSET..COMMITMENT_OFFSET])?,
            commitment: helpers::to_fixed_bytes(&input[COMMITMENT_OFFSET..PROOF_OFFSET])?,
            proof: helpers::to_fixed_bytes::<BYTES_PER_PROOF>(&input[PROOF_OFFSET..])?,
        })
    }

    pub fn has_consistent_hash(&self) -> bool {
        self.versioned_hash.matches_commitment(&self.commitment)
    }
}
