use num_bigint::BigUint;

use crate::{
    consts::{BLS_MODULUS, BYTES_PER_FIELD_ELEMENT},
    errors::KzgError,
    Bytes32,
};

/// Order of the BLS12-381 scalar field as an integer.
pub fn bls_modulus() -> BigUint {
    BigUint::from_bytes_be(&BLS_MODULUS)
}

/// Interprets `data` as a big-endian unsigned integer.
pub fn bytes_to_biguint(data: &[u8]) -> BigUint {
    BigUint::from_bytes_be(data)
}

/// Serializes `value` as a fixed-width 32-byte big-endian unsigned integer.
///
/// # Returns
/// * `Err(KzgError::SerializationError)` if `value` does not fit in 32 bytes.
pub fn biguint_to_bytes32(value: &BigUint) -> Result<Bytes32, KzgError> {
    let be = value.to_bytes_be();
    if be.len() > BYTES_PER_FIELD_ELEMENT {
        return Err(KzgError::SerializationError(format!(
            "integer needs {} bytes, field elements hold {}",
            be.len(),
            BYTES_PER_FIELD_ELEMENT
        )));
    }
    let mut out = [0u8; BYTES_PER_FIELD_ELEMENT];
    out[BYTES_PER_FIELD_ELEMENT - be.len()..].copy_from_slice(&be);
    Ok(out)
}

/// Encodes a small integer as a field element: 32 bytes, big-endian,
/// zero-padded on the left.
pub fn u64_to_field_element_bytes(value: u64) -> Bytes32 {
    let mut out = [0u8; BYTES_PER_FIELD_ELEMENT];
    out[BYTES_PER_FIELD_ELEMENT - 8..].copy_from_slice(&value.to_be_bytes());
    out
}

/// Checks that a 32-byte chunk encodes an integer strictly below `modulus`.
pub fn validate_field_element(chunk: &[u8], modulus: &BigUint) -> Result<(), KzgError> {
    if chunk.len() != BYTES_PER_FIELD_ELEMENT {
        return Err(KzgError::InvalidInputLength {
            expected: BYTES_PER_FIELD_ELEMENT,
            actual: chunk.len(),
        });
    }
    if &bytes_to_biguint(chunk) >= modulus {
        return Err(KzgError::InvalidFieldElement(format!(
            "0x{} is not below the field modulus",
            hex::encode(chunk)
        )));
    }
    Ok(())
}

/// `0x`-prefixed lowercase hex, the format used in every vector we print.
pub fn to_hex(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

/// Copies `data` into a fixed-size array, failing on any other length.
pub fn to_fixed_bytes<const N: usize>(data: &[u8]) -> Result<[u8; N], KzgError> {
    data.try_into().map_err(|_| KzgError::InvalidInputLength {
        expected: N,
        actual: data.len(),
    })
}
