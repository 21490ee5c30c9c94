use core::fmt;

use serde::{Serialize, Serializer};
use sha2::{Digest, Sha256};

use crate::{
    consts::{BYTES_PER_VERSIONED_HASH, VERSIONED_HASH_VERSION_KZG},
    helpers,
};

/// Reference to a KZG commitment as carried by blob transactions:
/// `VERSIONED_HASH_VERSION_KZG || sha256(commitment)[1..]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VersionedHash([u8; BYTES_PER_VERSIONED_HASH]);

impl VersionedHash {
    /// Derives the versioned hash of an opaque commitment.
    ///
    /// # Example
    /// ```
    /// use kzg_blob_vectors_primitives::versioned_hash::VersionedHash;
    ///
    /// let hash = VersionedHash::from_commitment(&[0u8; 48]);
    /// assert_eq!(hash.version(), 0x01);
    /// ```
    pub fn from_commitment(commitment: &[u8]) -> Self {
        let mut hash: [u8; BYTES_PER_VERSIONED_HASH] = Sha256::digest(commitment).into();
        hash[0] = VERSIONED_HASH_VERSION_KZG;
        Self(hash)
    }

    pub fn from_bytes(bytes: [u8; BYTES_PER_VERSIONED_HASH]) -> Self {
        Self(bytes)
    }

    pub fn version(&self) -> u8 {
        self.0[0]
    }

    pub fn as_bytes(&self) -> &[u8; BYTES_PER_VERSIONED_HASH] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        helpers::to_hex(&self.0)
    }

    /// True when this hash was derived from `commitment`.
    pub fn matches_commitment(&self, commitment: &[u8]) -> bool {
        *self == Self::from_commitment(commitment)
    }
}

impl fmt::Display for VersionedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for VersionedHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl From<VersionedHash> for [u8; BYTES_PER_VERSIONED_HASH] {
    fn from(hash: VersionedHash) -> Self {
        hash.0
    }
}
