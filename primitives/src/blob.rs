use serde::{Deserialize, Serialize};

use crate::{
    consts::BYTES_PER_FIELD_ELEMENT, domain::EvaluationDomain, errors::KzgError, helpers, Bytes32,
};

/// A blob in evaluation form: `domain.size()` field elements, each a
/// canonical 32-byte big-endian integer, stored in natural index order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    /// The binary data contained within the blob.
    blob_data: Vec<u8>,
}

/// Validates that `data` holds exactly one canonical field element per domain
/// point.
fn validate_blob_data(data: &[u8], domain: &EvaluationDomain) -> Result<(), KzgError> {
    let expected = domain.size() * BYTES_PER_FIELD_ELEMENT;
    if data.len() != expected {
        return Err(KzgError::InvalidInputLength {
            expected,
            actual: data.len(),
        });
    }

    for (i, chunk) in data.chunks_exact(BYTES_PER_FIELD_ELEMENT).enumerate() {
        domain.validate_field_element(chunk).map_err(|_| {
            KzgError::InvalidFieldElement(format!(
                "Field element at position {} is not canonical",
                i
            ))
        })?;
    }

    Ok(())
}

impl Blob {
    /// Creates a new `Blob` from already serialized field elements.
    ///
    /// Returns an error if the data is not exactly `domain.size() * 32` bytes
    /// or if any 32-byte chunk is not below the field modulus.
    pub fn new(blob_data: &[u8], domain: &EvaluationDomain) -> Result<Self, KzgError> {
        validate_blob_data(blob_data, domain)?;
        Ok(Blob {
            blob_data: blob_data.to_vec(),
        })
    }

    /// The deterministic fixture blob: the element at position `i` has value
    /// `i`. Calling this twice with the same domain yields identical bytes.
    ///
    /// # Example
    /// ```
    /// use kzg_blob_vectors_primitives::{blob::Blob, domain::EvaluationDomain};
    ///
    /// let domain = EvaluationDomain::mainnet().unwrap();
    /// let blob = Blob::index_blob(&domain);
    /// assert_eq!(blob.len(), 4096 * 32);
    /// assert_eq!(blob.field_element(7).unwrap()[31], 7);
    /// ```
    pub fn index_blob(domain: &EvaluationDomain) -> Self {
        let mut blob_data = Vec::with_capacity(domain.size() * BYTES_PER_FIELD_ELEMENT);
        for i in 0..domain.size() {
            blob_data.extend_from_slice(&helpers::u64_to_field_element_bytes(i as u64));
        }
        Blob { blob_data }
    }

    /// Returns the blob data
    pub fn data(&self) -> &[u8] {
        &self.blob_data
    }

    /// Returns the length of the blob data in bytes.
    pub fn len(&self) -> usize {
        self.blob_data.len()
    }

    /// Checks whether the blob data is empty.
    pub fn is_empty(&self) -> bool {
        self.blob_data.is_empty()
    }

    /// Number of field elements in the blob.
    pub fn num_field_elements(&self) -> usize {
        self.blob_data.len() / BYTES_PER_FIELD_ELEMENT
    }

    /// The serialized field element stored at `index`.
    pub fn field_element(&self, index: usize) -> Result<Bytes32, KzgError> {
        let chunk = index
            .checked_mul(BYTES_PER_FIELD_ELEMENT)
            .and_then(|start| Some(start..start.checked_add(BYTES_PER_FIELD_ELEMENT)?))
            .and_then(|range| self.blob_data.get(range))
            .ok_or(KzgError::IndexOutOfRange {
                index,
                domain_size: self.num_field_elements(),
            })?;
        helpers::to_fixed_bytes(chunk)
    }

    /// Iterator over the 32-byte field elements in blob order.
    pub fn field_elements(&self) -> impl Iterator<Item = &[u8]> {
        self.blob_data.chunks_exact(BYTES_PER_FIELD_ELEMENT)
    }
}

impl From<Blob> for Vec<u8> {
    fn from(blob: Blob) -> Self {
        blob.blob_data
    }
}
