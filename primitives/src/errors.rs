use thiserror::Error;

/// Errors raised while building or validating test-vector inputs.
///
/// Every variant signals malformed input (a logic bug in vector generation),
/// never a transient condition, so callers should surface them as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KzgError {
    /// The evaluation domain size is not a power of two.
    #[error("domain size {0} is not a power of two")]
    InvalidDomainSize(usize),

    /// A domain index falls outside `[0, domain_size)`.
    #[error("domain index {index} out of range for domain of size {domain_size}")]
    IndexOutOfRange { index: usize, domain_size: usize },

    /// Byte input has the wrong length.
    #[error("invalid input length: expected {expected} bytes, got {actual}")]
    InvalidInputLength { expected: usize, actual: usize },

    /// A 32-byte chunk encodes an integer that is not below the field modulus.
    #[error("invalid field element: {0}")]
    InvalidFieldElement(String),

    /// The field modulus is wider than a serialized field element.
    #[error("field modulus of {0} bits does not fit in a 32-byte field element")]
    ModulusTooWide(u64),

    /// The configured root does not generate a subgroup of the domain's order.
    #[error("root of unity is not a primitive {0}-th root")]
    NotPrimitiveRoot(usize),

    /// Error related to (de)serialization with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),
}
