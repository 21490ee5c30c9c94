//! A deterministic stand-in for a KZG library.
//!
//! [`MockBackend`] evaluates the blob polynomial honestly, so it agrees with
//! a real library on every `y`, but its "commitments" and "proofs" are plain
//! SHA-256 tags. It binds a proof to `(commitment, z, y)` and nothing more:
//! useful for exercising the harness without a trusted setup, worthless as a
//! commitment scheme.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use ark_bls12_381::Fr;
use ark_ff::{batch_inversion, Field, One, Zero};
use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
use kzg_blob_vectors_primitives::{
    bit_reversal::bit_reversal_permutation,
    blob::Blob,
    consts::{BYTES_PER_COMMITMENT, FIELD_ELEMENTS_PER_BLOB},
    errors::KzgError,
    traits::{ReadFrFromBytes, WriteFrToBytes},
    Bytes32, Bytes48,
};
use sha2::{Digest, Sha256};

use crate::{
    errors::HarnessError,
    kzg::{KzgBackend, KzgCommitment, KzgProof},
};

const COMMITMENT_TAG: &[u8] = b"MOCK_KZG_COMMITMENT_V1";
const PROOF_TAG: &[u8] = b"MOCK_KZG_PROOF_V1";
/// G2 points in the Ethereum trusted setup.
const NUM_G2_POINTS: usize = 65;

pub struct MockBackend;

/// Roots of unity of the evaluation domain in bit-reversed order, i.e. in the
/// order blob elements are stored.
#[derive(Clone, Debug, PartialEq)]
pub struct MockSettings {
    roots_of_unity_brp: Vec<Fr>,
}

impl MockSettings {
    /// Settings for a domain of `size` points, `size` a power of two.
    pub fn new(size: usize) -> Result<Self, HarnessError> {
        let domain = Radix2EvaluationDomain::<Fr>::new(size)
            .filter(|domain| domain.size() == size)
            .ok_or(KzgError::InvalidDomainSize(size))?;
        let roots: Vec<Fr> = domain.elements().collect();
        Ok(Self {
            roots_of_unity_brp: bit_reversal_permutation(&roots)?,
        })
    }

    pub fn mainnet() -> Result<Self, HarnessError> {
        Self::new(FIELD_ELEMENTS_PER_BLOB)
    }

    pub fn roots_of_unity_brp(&self) -> &[Fr] {
        &self.roots_of_unity_brp
    }
}

/// SHA-256 based stand-in for a 48-byte group element.
fn tag48(tag: &[u8], parts: &[&[u8]]) -> Bytes48 {
    let mut out = [0u8; BYTES_PER_COMMITMENT];
    for (counter, chunk) in out.chunks_mut(32).enumerate() {
        let mut hasher = Sha256::new();
        hasher.update(tag);
        hasher.update([counter as u8]);
        for part in parts {
            hasher.update(part);
        }
        let digest = hasher.finalize();
        chunk.copy_from_slice(&digest[..chunk.len()]);
    }
    out
}

fn read_fr(operation: &'static str, bytes: &[u8]) -> Result<Fr, HarnessError> {
    Fr::deserialize_from_bytes_be(bytes).map_err(|e| HarnessError::backend(operation, e))
}

fn blob_to_evaluations(
    operation: &'static str,
    blob: &Blob,
    settings: &MockSettings,
) -> Result<Vec<Fr>, HarnessError> {
    let evaluations = blob
        .field_elements()
        .map(|chunk| read_fr(operation, chunk))
        .collect::<Result<Vec<_>, _>>()?;
    if evaluations.len() != settings.roots_of_unity_brp.len() || blob.len() % 32 != 0 {
        return Err(HarnessError::backend(
            operation,
            KzgError::InvalidInputLength {
                expected: settings.roots_of_unity_brp.len() * 32,
                actual: blob.len(),
            },
        ));
    }
    Ok(evaluations)
}

/// Evaluates the polynomial given by `evaluations` over `roots_brp` at `z`.
///
/// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#evaluate_polynomial_in_evaluation_form
pub fn evaluate_polynomial_in_evaluation_form(
    evaluations: &[Fr],
    z: &Fr,
    roots_brp: &[Fr],
) -> Result<Fr, KzgError> {
    let width = evaluations.len();
    if width != roots_brp.len() {
        return Err(KzgError::InvalidInputLength {
            expected: roots_brp.len(),
            actual: width,
        });
    }

    // z in the domain: the value is stored directly
    if let Some(index) = roots_brp.iter().position(|root| root == z) {
        return Ok(evaluations[index]);
    }

    let inverse_width = Fr::from(width as u64)
        .inverse()
        .ok_or(KzgError::InvalidDomainSize(width))?;

    // f(z) = (z^n - 1) / n * sum(f_i * w_i / (z - w_i))
    let mut denominators: Vec<Fr> = roots_brp.iter().map(|root| *z - root).collect();
    batch_inversion(&mut denominators);

    let sum = evaluations
        .iter()
        .zip(roots_brp)
        .zip(&denominators)
        .fold(Fr::zero(), |acc, ((f_i, w_i), inv)| acc + *f_i * w_i * inv);

    let r = z.pow([width as u64]) - Fr::one();
    Ok(sum * r * inverse_width)
}

impl KzgBackend for MockBackend {
    type Settings = MockSettings;

    /// Checks the header of a c-kzg text setup: the G1 point count must equal
    /// the blob width and the G2 count must be 65. The points themselves are
    /// not parsed.
    fn load_trusted_setup(path: &Path) -> Result<MockSettings, HarnessError> {
        if !path.is_file() {
            return Err(HarnessError::TrustedSetup(format!(
                "{} does not exist",
                path.display()
            )));
        }
        let file = File::open(path)
            .map_err(|e| HarnessError::TrustedSetup(format!("{}: {}", path.display(), e)))?;
        let mut lines = BufReader::new(file).lines();
        for expected in [FIELD_ELEMENTS_PER_BLOB, NUM_G2_POINTS] {
            let count = lines
                .next()
                .and_then(|line| line.ok())
                .and_then(|line| line.trim().parse::<usize>().ok());
            if count != Some(expected) {
                return Err(HarnessError::TrustedSetup(format!(
                    "{}: malformed header, expected point count {}",
                    path.display(),
                    expected
                )));
            }
        }
        MockSettings::mainnet()
    }

    fn blob_to_kzg_commitment(
        blob: &Blob,
        settings: &MockSettings,
    ) -> Result<KzgCommitment, HarnessError> {
        blob_to_evaluations("blob_to_kzg_commitment", blob, settings)?;
        Ok(KzgCommitment(tag48(COMMITMENT_TAG, &[blob.data()])))
    }

    fn compute_kzg_proof(
        blob: &Blob,
        z: &Bytes32,
        settings: &MockSettings,
    ) -> Result<(KzgProof, Bytes32), HarnessError> {
        const OP: &str = "compute_kzg_proof";
        let evaluations = blob_to_evaluations(OP, blob, settings)?;
        let z_fr = read_fr(OP, z)?;
        let y_fr = evaluate_polynomial_in_evaluation_form(
            &evaluations,
            &z_fr,
            &settings.roots_of_unity_brp,
        )
        .map_err(|e| HarnessError::backend(OP, e))?;
        let y = y_fr.serialize_to_bytes_be();

        let commitment = Self::blob_to_kzg_commitment(blob, settings)?;
        let proof = tag48(PROOF_TAG, &[&commitment.0, z, &y]);
        Ok((KzgProof(proof), y))
    }

    fn verify_kzg_proof(
        commitment: &KzgCommitment,
        z: &Bytes32,
        y: &Bytes32,
        proof: &KzgProof,
        _settings: &MockSettings,
    ) -> Result<bool, HarnessError> {
        const OP: &str = "verify_kzg_proof";
        read_fr(OP, z)?;
        read_fr(OP, y)?;
        Ok(tag48(PROOF_TAG, &[&commitment.0, z, y]) == proof.0)
    }
}
