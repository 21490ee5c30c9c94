use ark_bls12_381::Fr;
use ark_ff::{BigInteger, Field, PrimeField};
use ark_serialize::CanonicalDeserialize;

use crate::{consts::BYTES_PER_FIELD_ELEMENT, errors::KzgError, helpers, Bytes32};

// A new trait for Fr for reading from bytes in big endian format
pub trait ReadFrFromBytes: Field {
    /// Rejects anything that is not exactly 32 bytes or not below the modulus.
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Self, KzgError>;
}

impl ReadFrFromBytes for Fr {
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Fr, KzgError> {
        let mut bytes_le: Bytes32 = helpers::to_fixed_bytes(bytes)?;
        bytes_le.reverse();
        Fr::deserialize_uncompressed(&bytes_le[..]).map_err(|_| {
            KzgError::InvalidFieldElement(format!(
                "{} is not below the field modulus",
                helpers::to_hex(bytes)
            ))
        })
    }
}

pub trait WriteFrToBytes {
    fn serialize_to_bytes_be(&self) -> Bytes32;
}

impl WriteFrToBytes for Fr {
    fn serialize_to_bytes_be(&self) -> Bytes32 {
        let be = self.into_bigint().to_bytes_be();
        let mut out = [0u8; BYTES_PER_FIELD_ELEMENT];
        out[BYTES_PER_FIELD_ELEMENT - be.len()..].copy_from_slice(&be);
        out
    }
}
