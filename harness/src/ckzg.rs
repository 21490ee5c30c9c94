//! [`KzgBackend`] over the `c-kzg` bindings of the reference C library.

use std::path::Path;

use c_kzg::{Bytes32 as CBytes32, Bytes48 as CBytes48, KzgSettings};
use kzg_blob_vectors_primitives::{blob::Blob, helpers, Bytes32};
use tracing::debug;

use crate::{
    errors::HarnessError,
    kzg::{KzgBackend, KzgCommitment, KzgProof},
};

/// No precomputed tables; proofs are computed once per vector.
const PRECOMPUTE: u64 = 0;

pub struct CKzgBackend;

/// Trusted setup handed to `c-kzg`, either read from a file or the mainnet
/// ceremony output bundled with the crate.
pub enum CKzgSettings {
    Loaded(Box<KzgSettings>),
    Ethereum(&'static KzgSettings),
}

impl CKzgSettings {
    /// The mainnet trusted setup embedded in `c-kzg`.
    pub fn ethereum() -> Self {
        CKzgSettings::Ethereum(c_kzg::ethereum_kzg_settings(PRECOMPUTE))
    }

    fn inner(&self) -> &KzgSettings {
        match self {
            CKzgSettings::Loaded(settings) => settings.as_ref(),
            CKzgSettings::Ethereum(settings) => *settings,
        }
    }
}

fn to_c_blob(blob: &Blob) -> Result<Box<c_kzg::Blob>, HarnessError> {
    c_kzg::Blob::from_bytes(blob.data())
        .map(Box::new)
        .map_err(|e| HarnessError::backend("blob conversion", format!("{:?}", e)))
}

fn to_c_bytes32(operation: &'static str, bytes: &[u8]) -> Result<CBytes32, HarnessError> {
    CBytes32::from_bytes(bytes).map_err(|e| HarnessError::backend(operation, format!("{:?}", e)))
}

fn to_c_bytes48(operation: &'static str, bytes: &[u8]) -> Result<CBytes48, HarnessError> {
    CBytes48::from_bytes(bytes).map_err(|e| HarnessError::backend(operation, format!("{:?}", e)))
}

impl KzgBackend for CKzgBackend {
    type Settings = CKzgSettings;

    fn load_trusted_setup(path: &Path) -> Result<CKzgSettings, HarnessError> {
        if !path.is_file() {
            return Err(HarnessError::TrustedSetup(format!(
                "{} does not exist",
                path.display()
            )));
        }
        debug!(path = %path.display(), "loading trusted setup");
        KzgSettings::load_trusted_setup_file(path, PRECOMPUTE)
            .map(|settings| CKzgSettings::Loaded(Box::new(settings)))
            .map_err(|e| HarnessError::TrustedSetup(format!("{}: {:?}", path.display(), e)))
    }

    fn blob_to_kzg_commitment(
        blob: &Blob,
        settings: &CKzgSettings,
    ) -> Result<KzgCommitment, HarnessError> {
        const OP: &str = "blob_to_kzg_commitment";
        let c_blob = to_c_blob(blob)?;
        let commitment = settings
            .inner()
            .blob_to_kzg_commitment(&c_blob)
            .map_err(|e| HarnessError::backend(OP, format!("{:?}", e)))?;
        Ok(KzgCommitment(helpers::to_fixed_bytes(commitment.as_slice())?))
    }

    fn compute_kzg_proof(
        blob: &Blob,
        z: &Bytes32,
        settings: &CKzgSettings,
    ) -> Result<(KzgProof, Bytes32), HarnessError> {
        const OP: &str = "compute_kzg_proof";
        let c_blob = to_c_blob(blob)?;
        let (proof, y) = settings
            .inner()
            .compute_kzg_proof(&c_blob, &to_c_bytes32(OP, z)?)
            .map_err(|e| HarnessError::backend(OP, format!("{:?}", e)))?;
        Ok((
            KzgProof(helpers::to_fixed_bytes(proof.as_slice())?),
            helpers::to_fixed_bytes(y.as_slice())?,
        ))
    }

    fn verify_kzg_proof(
        commitment: &KzgCommitment,
        z: &Bytes32,
        y: &Bytes32,
        proof: &KzgProof,
        settings: &CKzgSettings,
    ) -> Result<bool, HarnessError> {
        const OP: &str = "verify_kzg_proof";
        settings
            .inner()
            .verify_kzg_proof(
                &to_c_bytes48(OP, &commitment.0)?,
                &to_c_bytes32(OP, z)?,
                &to_c_bytes32(OP, y)?,
                &to_c_bytes48(OP, &proof.0)?,
            )
            .map_err(|e| HarnessError::backend(OP, format!("{:?}", e)))
    }
}
