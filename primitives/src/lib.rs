//! ## Library Design / Architecture
//!
//! Building blocks for deterministic EIP-4844 KZG test vectors. Nothing in
//! this crate touches curve points: commitments and proofs are opaque bytes
//! produced elsewhere. What lives here is the field-side bookkeeping that has
//! to agree with the commitment library's conventions.
//!
//! The vector pipeline goes:
//! > [domain::EvaluationDomain] -> [blob::Blob::index_blob] -> commitment
//! > (external) -> [versioned_hash::VersionedHash]
//!
//! and, for a chosen blob index,
//! > index -> [bit_reversal::reverse_bits] -> [field::pow_mod_bytes] -> `z`
//! > -> `(proof, y)` (external) -> [point_evaluation::PointEvaluationInput]
//!
//! - Blob: 4096 BLS12-381 scalar field elements, big-endian, stored in
//!   natural order. The fixture blob stores `i` at position `i`, so opening it
//!   at the point of position `i` must yield `i`.
//! - Evaluation domain: the order-4096 subgroup generated by
//!   [consts::ROOT_OF_UNITY]. Points are enumerated in bit-reversed order,
//!   hence blob position `i` is evaluated at `root^reverse_bits(i)`.
//! - Versioned hash: `0x01 || sha256(commitment)[1..]`.
//!
//! ## Examples
//!
//! ```rust
//! use kzg_blob_vectors_primitives::{blob::Blob, domain::EvaluationDomain};
//!
//! let domain = EvaluationDomain::mainnet().unwrap();
//! let blob = Blob::index_blob(&domain);
//! let z = domain.evaluation_point(1).unwrap();
//! assert_eq!(blob.len(), 131072);
//! assert_eq!(z[31], 0x00); // root^2048 == -1 == modulus - 1
//! ```

pub mod bit_reversal;
pub mod blob;
pub mod consts;
pub mod domain;
pub mod errors;
pub mod field;
pub mod helpers;
pub mod point_evaluation;
pub mod traits;
pub mod versioned_hash;

pub type Bytes32 = [u8; 32];
pub type Bytes48 = [u8; 48];
