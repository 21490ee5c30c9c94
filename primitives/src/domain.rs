use num_bigint::BigUint;

use crate::{
    bit_reversal,
    consts::{BLS_MODULUS, BYTES_PER_FIELD_ELEMENT, FIELD_ELEMENTS_PER_BLOB, ROOT_OF_UNITY},
    errors::KzgError,
    field, helpers, Bytes32,
};

const MAX_MODULUS_BITS: u64 = 8 * BYTES_PER_FIELD_ELEMENT as u64;

/// The multiplicative subgroup a blob is evaluated over.
///
/// Holds the field modulus, a primitive root of unity and the domain size.
/// Callers pass it explicitly to everything that needs the field constants,
/// so alternative (e.g. smaller) domains can be exercised in tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationDomain {
    modulus: BigUint,
    root_of_unity: BigUint,
    size: usize,
}

impl EvaluationDomain {
    /// Creates a domain of `size` points generated by `root_of_unity`.
    ///
    /// # Errors
    /// * `KzgError::InvalidDomainSize` if `size` is not a power of two.
    /// * `KzgError::ModulusTooWide` if the modulus needs more than 256 bits.
    /// * `KzgError::InvalidFieldElement` if the root is not below the modulus.
    /// * `KzgError::NotPrimitiveRoot` if the root does not have order `size`.
    pub fn new(modulus: BigUint, root_of_unity: BigUint, size: usize) -> Result<Self, KzgError> {
        bit_reversal::log2_domain_size(size)?;
        if modulus.bits() > MAX_MODULUS_BITS {
            return Err(KzgError::ModulusTooWide(modulus.bits()));
        }
        if root_of_unity >= modulus {
            return Err(KzgError::InvalidFieldElement(
                "root of unity is not below the field modulus".to_string(),
            ));
        }
        if !field::is_primitive_root_of_unity(&root_of_unity, size as u64, &modulus) {
            return Err(KzgError::NotPrimitiveRoot(size));
        }
        Ok(Self {
            modulus,
            root_of_unity,
            size,
        })
    }

    /// The EIP-4844 domain: 4096 points of the BLS12-381 scalar field.
    pub fn mainnet() -> Result<Self, KzgError> {
        Self::new(
            BigUint::from_bytes_be(&BLS_MODULUS),
            BigUint::from_bytes_be(&ROOT_OF_UNITY),
            FIELD_ELEMENTS_PER_BLOB,
        )
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn root_of_unity(&self) -> &BigUint {
        &self.root_of_unity
    }

    /// `root_of_unity^exponent`, serialized big-endian.
    pub fn root_power(&self, exponent: usize) -> Result<Bytes32, KzgError> {
        field::pow_mod_bytes(&self.root_of_unity, exponent as u64, &self.modulus)
    }

    /// Evaluation point `z` whose value is stored at blob position `index`:
    /// `root_of_unity^reverse_bits(index, size)`.
    ///
    /// # Example
    /// ```
    /// use kzg_blob_vectors_primitives::domain::EvaluationDomain;
    ///
    /// let domain = EvaluationDomain::mainnet().unwrap();
    /// let mut one = [0u8; 32];
    /// one[31] = 1;
    /// assert_eq!(domain.evaluation_point(0).unwrap(), one);
    /// ```
    pub fn evaluation_point(&self, index: usize) -> Result<Bytes32, KzgError> {
        let exponent = bit_reversal::reverse_bits(index, self.size)?;
        self.root_power(exponent)
    }

    /// All evaluation points in blob order.
    pub fn evaluation_points(&self) -> Result<Vec<Bytes32>, KzgError> {
        (0..self.size).map(|i| self.evaluation_point(i)).collect()
    }

    /// Checks that `bytes` is a canonical element of this domain's field.
    pub fn validate_field_element(&self, bytes: &[u8]) -> Result<(), KzgError> {
        helpers::validate_field_element(bytes, &self.modulus)
    }
}
