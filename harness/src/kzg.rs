use std::path::Path;

use kzg_blob_vectors_primitives::{blob::Blob, helpers, Bytes32, Bytes48};

use crate::errors::HarnessError;

/// Opaque commitment bytes (a compressed G1 point), never decoded here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KzgCommitment(pub Bytes48);

/// Opaque opening-proof bytes (a compressed G1 point).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KzgProof(pub Bytes48);

impl KzgCommitment {
    pub fn to_hex(&self) -> String {
        helpers::to_hex(&self.0)
    }
}

impl KzgProof {
    pub fn to_hex(&self) -> String {
        helpers::to_hex(&self.0)
    }
}

/// The four primitives consumed from a KZG library.
///
/// Implementations hold no state of their own: everything they need lives in
/// [`KzgBackend::Settings`], which is loaded once and then only read.
pub trait KzgBackend {
    type Settings;

    /// Fails if the file is missing or malformed.
    fn load_trusted_setup(path: &Path) -> Result<Self::Settings, HarnessError>;

    /// Fails if the blob has the wrong size or holds a non-canonical element.
    fn blob_to_kzg_commitment(
        blob: &Blob,
        settings: &Self::Settings,
    ) -> Result<KzgCommitment, HarnessError>;

    /// Opens the blob polynomial at `z`, returning the proof and `y = p(z)`.
    /// Fails on a malformed blob or a non-canonical `z`.
    fn compute_kzg_proof(
        blob: &Blob,
        z: &Bytes32,
        settings: &Self::Settings,
    ) -> Result<(KzgProof, Bytes32), HarnessError>;

    /// Returns `Ok(false)` for a well-formed but invalid proof.
    fn verify_kzg_proof(
        commitment: &KzgCommitment,
        z: &Bytes32,
        y: &Bytes32,
        proof: &KzgProof,
        settings: &Self::Settings,
    ) -> Result<bool, HarnessError>;
}

/// A wrapper over a KZG backend that holds the trusted setup parameters.
pub struct Kzg<B: KzgBackend> {
    settings: B::Settings,
}

impl<B: KzgBackend> Kzg<B> {
    pub fn new(settings: B::Settings) -> Self {
        Self { settings }
    }

    /// Loads the trusted setup from `path` through the backend.
    pub fn load_trusted_setup(path: &Path) -> Result<Self, HarnessError> {
        Ok(Self::new(B::load_trusted_setup(path)?))
    }

    pub fn settings(&self) -> &B::Settings {
        &self.settings
    }

    /// Converts a blob to a kzg commitment.
    pub fn blob_to_kzg_commitment(&self, blob: &Blob) -> Result<KzgCommitment, HarnessError> {
        B::blob_to_kzg_commitment(blob, &self.settings)
    }

    /// Computes the kzg proof for a given `blob` and an evaluation point `z`
    pub fn compute_kzg_proof(
        &self,
        blob: &Blob,
        z: &Bytes32,
    ) -> Result<(KzgProof, Bytes32), HarnessError> {
        B::compute_kzg_proof(blob, z, &self.settings)
    }

    /// Verifies a `proof` for a `commitment` that evaluating a polynomial at `z` results in `y`
    pub fn verify_kzg_proof(
        &self,
        commitment: &KzgCommitment,
        z: &Bytes32,
        y: &Bytes32,
        proof: &KzgProof,
    ) -> Result<bool, HarnessError> {
        B::verify_kzg_proof(commitment, z, y, proof, &self.settings)
    }
}
