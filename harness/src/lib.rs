//! ## Harness Design
//!
//! Drives a KZG library through the EIP-4844 vector pipeline and checks that
//! the library's domain convention agrees with ours:
//!
//! > index blob -> commitment -> versioned hash
//! > index -> bit-reversed exponent -> z -> (proof, y) -> checks
//!
//! - [kzg::KzgBackend]: the four primitives consumed from a KZG library.
//!   [ckzg::CKzgBackend] wraps `c-kzg`; [mock::MockBackend] evaluates blobs
//!   honestly but fakes commitments and proofs, so the harness can be tested
//!   without a trusted setup.
//! - [harness::VectorHarness]: the orchestrator. Each check returns a typed
//!   [errors::HarnessError] instead of panicking.
//! - [vector::TestVector]: the hex-encoded record emitted for each verified
//!   index.

pub mod ckzg;
pub mod errors;
pub mod harness;
pub mod kzg;
pub mod mock;
pub mod vector;
