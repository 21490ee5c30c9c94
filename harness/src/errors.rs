use kzg_blob_vectors_primitives::errors::KzgError;
use thiserror::Error;

/// Everything that can abort a vector run.
///
/// Configuration and backend errors come from the KZG library, malformed
/// input from the primitives, and the remaining variants are failed checks.
/// None of them is retryable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HarnessError {
    /// The trusted setup could not be loaded.
    #[error("trusted setup error: {0}")]
    TrustedSetup(String),

    /// The KZG library rejected an input or failed internally.
    #[error("{operation} failed: {message}")]
    Backend {
        operation: &'static str,
        message: String,
    },

    /// Wraps malformed-input errors from vector construction.
    #[error("malformed input: {0}")]
    Primitives(#[from] KzgError),

    /// Two commitments over the same blob differ.
    #[error("commitment is not deterministic: {first} != {second}")]
    CommitmentMismatch { first: String, second: String },

    /// The opened value differs from the value stored at the index.
    #[error("evaluation at index {index} returned {actual}, expected {expected}")]
    EvaluationMismatch {
        index: usize,
        expected: String,
        actual: String,
    },

    /// The verifier reported the honest proof as invalid.
    #[error("proof for index {index} was rejected by the verifier")]
    ProofRejected { index: usize },

    /// The verifier accepted the proof for a wrong evaluation.
    #[error("proof for index {index} verified against a forged evaluation")]
    ForgedEvaluationAccepted { index: usize },

    /// The assembled precompile input carries a stale versioned hash.
    #[error("versioned hash in point-evaluation input does not match its commitment")]
    VersionedHashMismatch,
}

impl HarnessError {
    pub(crate) fn backend(operation: &'static str, message: impl ToString) -> Self {
        HarnessError::Backend {
            operation,
            message: message.to_string(),
        }
    }
}
