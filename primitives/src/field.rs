use num_bigint::BigUint;
use num_traits::One;

use crate::{errors::KzgError, helpers, Bytes32};

/// Computes `base^exponent mod modulus` and serializes the result as a
/// 32-byte big-endian unsigned integer.
///
/// # Returns
/// * `Err(KzgError::SerializationError)` if the result does not fit in 32
///   bytes, which can only happen for a modulus wider than 256 bits.
pub fn pow_mod_bytes(
    base: &BigUint,
    exponent: u64,
    modulus: &BigUint,
) -> Result<Bytes32, KzgError> {
    let result = base.modpow(&BigUint::from(exponent), modulus);
    helpers::biguint_to_bytes32(&result)
}

/// Returns true when `root` has multiplicative order exactly `order` modulo
/// `modulus`. `order` must be a power of two: it is then enough to check
/// `root^order == 1` and `root^(order / 2) != 1`.
pub fn is_primitive_root_of_unity(root: &BigUint, order: u64, modulus: &BigUint) -> bool {
    if order == 0 || !order.is_power_of_two() {
        return false;
    }
    let one = BigUint::one();
    if root.modpow(&BigUint::from(order), modulus) != one {
        return false;
    }
    order == 1 || root.modpow(&BigUint::from(order / 2), modulus) != one
}
