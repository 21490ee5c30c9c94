use std::path::Path;

use kzg_blob_vectors_primitives::{
    bit_reversal::reverse_bits, blob::Blob, domain::EvaluationDomain, helpers,
    point_evaluation::PointEvaluationInput, versioned_hash::VersionedHash,
};
use tracing::{debug, info, warn};

use crate::{
    errors::HarnessError,
    kzg::{Kzg, KzgBackend, KzgCommitment},
    vector::TestVector,
};

/// The index blob together with its commitment, shared by every opening in
/// a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommittedBlob {
    pub blob: Blob,
    pub commitment: KzgCommitment,
    pub versioned_hash: VersionedHash,
}

/// Drives a KZG backend through the vector pipeline:
/// generate blob, commit, derive versioned hash, then per index derive the
/// point, open, check `y`, verify, reject a forged `y` and encode the
/// precompile input.
///
/// Every check failure is returned as a [`HarnessError`]; the first one ends
/// the run.
pub struct VectorHarness<B: KzgBackend> {
    kzg: Kzg<B>,
    domain: EvaluationDomain,
}

impl<B: KzgBackend> VectorHarness<B> {
    pub fn new(kzg: Kzg<B>, domain: EvaluationDomain) -> Self {
        Self { kzg, domain }
    }

    /// Loads the trusted setup at `path` and uses the mainnet domain.
    pub fn from_trusted_setup(path: &Path) -> Result<Self, HarnessError> {
        info!(path = %path.display(), "loading trusted setup");
        let kzg =
            Kzg::load_trusted_setup(path).inspect_err(|e| warn!(error = %e, "setup failed"))?;
        Ok(Self::new(kzg, EvaluationDomain::mainnet()?))
    }

    pub fn kzg(&self) -> &Kzg<B> {
        &self.kzg
    }

    pub fn domain(&self) -> &EvaluationDomain {
        &self.domain
    }

    /// Generates the index blob and commits to it twice, failing if the two
    /// commitments differ.
    pub fn commit_fixture(&self) -> Result<CommittedBlob, HarnessError> {
        let blob = Blob::index_blob(&self.domain);
        let commitment = self.kzg.blob_to_kzg_commitment(&blob)?;
        let again = self.kzg.blob_to_kzg_commitment(&blob)?;
        if commitment != again {
            warn!("commitment is not deterministic");
            return Err(HarnessError::CommitmentMismatch {
                first: commitment.to_hex(),
                second: again.to_hex(),
            });
        }

        let versioned_hash = VersionedHash::from_commitment(&commitment.0);
        info!(
            commitment = %commitment.to_hex(),
            versioned_hash = %versioned_hash,
            "committed to index blob"
        );
        Ok(CommittedBlob {
            blob,
            commitment,
            versioned_hash,
        })
    }

    /// Opens `fixture` at the point stored at `index` and runs every
    /// per-index check.
    pub fn open_index(
        &self,
        fixture: &CommittedBlob,
        index: usize,
    ) -> Result<TestVector, HarnessError> {
        let bit_reversed_index = reverse_bits(index, self.domain.size())?;
        let z = self.domain.root_power(bit_reversed_index)?;
        debug!(index, bit_reversed_index, z = %helpers::to_hex(&z), "derived evaluation point");

        let (proof, y) = self.kzg.compute_kzg_proof(&fixture.blob, &z)?;
        debug!(index, y = %helpers::to_hex(&y), proof = %proof.to_hex(), "opened blob");

        let expected = helpers::u64_to_field_element_bytes(index as u64);
        if y != expected {
            warn!(index, "evaluation does not match stored value");
            return Err(HarnessError::EvaluationMismatch {
                index,
                expected: helpers::to_hex(&expected),
                actual: helpers::to_hex(&y),
            });
        }

        if !self.kzg.verify_kzg_proof(&fixture.commitment, &z, &y, &proof)? {
            warn!(index, "verifier rejected proof");
            return Err(HarnessError::ProofRejected { index });
        }

        // index + 1 stays canonical for any index inside the domain
        let forged = helpers::u64_to_field_element_bytes(index as u64 + 1);
        if self.kzg.verify_kzg_proof(&fixture.commitment, &z, &forged, &proof)? {
            warn!(index, "verifier accepted forged evaluation");
            return Err(HarnessError::ForgedEvaluationAccepted { index });
        }

        let input = PointEvaluationInput::new(z, y, fixture.commitment.0, proof.0);
        if input.versioned_hash != fixture.versioned_hash || !input.has_consistent_hash() {
            warn!(index, "point-evaluation input carries a stale versioned hash");
            return Err(HarnessError::VersionedHashMismatch);
        }

        info!(index, z = %helpers::to_hex(&z), "vector verified");
        Ok(TestVector::new(
            index,
            bit_reversed_index,
            &fixture.commitment,
            &proof,
            &input,
        ))
    }

    /// Full pipeline for a single index.
    pub fn run(&self, index: usize) -> Result<TestVector, HarnessError> {
        let fixture = self.commit_fixture()?;
        self.open_index(&fixture, index)
    }

    /// Runs `indices` against one shared commitment, stopping at the first
    /// failure.
    pub fn run_indices(&self, indices: &[usize]) -> Result<Vec<TestVector>, HarnessError> {
        let fixture = self.commit_fixture()?;
        let vectors = indices
            .iter()
            .map(|&index| self.open_index(&fixture, index))
            .collect::<Result<Vec<_>, _>>()?;
        info!(count = vectors.len(), "all vectors verified");
        Ok(vectors)
    }
}
