pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096; // EIP-4844 mainnet preset
pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT;

/// Compressed BLS12-381 G1 point, used for both commitments and proofs.
pub const BYTES_PER_COMMITMENT: usize = 48;
pub const BYTES_PER_PROOF: usize = 48;

pub const VERSIONED_HASH_VERSION_KZG: u8 = 0x01;
pub const BYTES_PER_VERSIONED_HASH: usize = 32;

/// versioned_hash || z || y || commitment || proof
pub const POINT_EVALUATION_INPUT_LENGTH: usize = BYTES_PER_VERSIONED_HASH
    + 2 * BYTES_PER_FIELD_ELEMENT
    + BYTES_PER_COMMITMENT
    + BYTES_PER_PROOF;

/// Order of the BLS12-381 scalar field, big-endian.
pub const BLS_MODULUS: [u8; BYTES_PER_FIELD_ELEMENT] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8, 0x05,
    0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
];

/// Primitive `FIELD_ELEMENTS_PER_BLOB`-th root of unity of the scalar field,
/// `7^((BLS_MODULUS - 1) / 4096)`, big-endian.
pub const ROOT_OF_UNITY: [u8; BYTES_PER_FIELD_ELEMENT] = [
    0x56, 0x4c, 0x0a, 0x11, 0xa0, 0xf7, 0x04, 0xf4, 0xfc, 0x3e, 0x8a, 0xcf, 0xe0, 0xf8, 0x24, 0x5f,
    0x0a, 0xd1, 0x34, 0x7b, 0x37, 0x8f, 0xbf, 0x96, 0xe2, 0x06, 0xda, 0x11, 0xa5, 0xd3, 0x63, 0x06,
];
