//! Radix-2 bit-reversal permutation.
//!
//! Blobs store evaluations in natural index order while the evaluation
//! domain is enumerated in bit-reversed order, so blob position `i` lives at
//! the root of unity raised to `reverse_bits(i, n)`.

use crate::errors::KzgError;

/// Number of bits needed to address a domain of `order` elements.
///
/// # Returns
/// * `Err(KzgError::InvalidDomainSize)` unless `order` is a power of two.
pub fn log2_domain_size(order: usize) -> Result<u32, KzgError> {
    if !order.is_power_of_two() {
        return Err(KzgError::InvalidDomainSize(order));
    }
    Ok(order.trailing_zeros())
}

/// Reverses the low `log2(order)` bits of `index`.
///
/// `index` is written most significant bit first, zero padded to exactly
/// `log2(order)` bits, and the bit string is read back in reverse. Applying
/// the function twice returns the original index.
///
/// # Errors
/// * `KzgError::InvalidDomainSize` if `order` is not a power of two.
/// * `KzgError::IndexOutOfRange` if `index >= order`.
///
/// # Example
/// ```
/// use kzg_blob_vectors_primitives::bit_reversal::reverse_bits;
///
/// assert_eq!(reverse_bits(1, 4096).unwrap(), 2048);
/// assert_eq!(reverse_bits(0b0000_0000_0110, 4096).unwrap(), 0b0110_0000_0000);
/// assert!(reverse_bits(4096, 4096).is_err());
/// ```
pub fn reverse_bits(index: usize, order: usize) -> Result<usize, KzgError> {
    let bits = log2_domain_size(order)?;
    if index >= order {
        return Err(KzgError::IndexOutOfRange {
            index,
            domain_size: order,
        });
    }
    if bits == 0 {
        return Ok(0);
    }
    Ok(index.reverse_bits() >> (usize::BITS - bits))
}

/// Reorders `items` so that position `i` holds `items[reverse_bits(i, len)]`.
///
/// The length of `items` is the domain order and must be a power of two.
pub fn bit_reversal_permutation<T: Clone>(items: &[T]) -> Result<Vec<T>, KzgError> {
    let order = items.len();
    log2_domain_size(order)?;
    (0..order)
        .map(|i| reverse_bits(i, order).map(|j| items[j].clone()))
        .collect()
}
