#[cfg(test)]
mod tests {
    use std::{
        fs,
        path::Path,
        sync::atomic::{AtomicU8, Ordering},
    };

    use kzg_blob_vectors::{
        errors::HarnessError,
        harness::VectorHarness,
        kzg::{Kzg, KzgBackend, KzgCommitment, KzgProof},
        mock::{MockBackend, MockSettings},
    };
    use kzg_blob_vectors_primitives::{
        blob::Blob,
        domain::EvaluationDomain,
        errors::KzgError,
        helpers,
        point_evaluation::PointEvaluationInput,
        Bytes32,
    };
    use lazy_static::lazy_static;
    use rand::Rng;

    lazy_static! {
        static ref HARNESS: VectorHarness<MockBackend> = VectorHarness::new(
            Kzg::new(MockSettings::mainnet().unwrap()),
            EvaluationDomain::mainnet().unwrap()
        );
    }

    fn harness_with<B: KzgBackend<Settings = MockSettings>>() -> VectorHarness<B> {
        VectorHarness::new(
            Kzg::new(MockSettings::mainnet().unwrap()),
            EvaluationDomain::mainnet().unwrap(),
        )
    }

    fn field_element(value: u64) -> String {
        helpers::to_hex(&helpers::u64_to_field_element_bytes(value))
    }

    /// Returns zero for every evaluation.
    struct ZeroEvaluationBackend;

    impl KzgBackend for ZeroEvaluationBackend {
        type Settings = MockSettings;

        fn load_trusted_setup(path: &Path) -> Result<MockSettings, HarnessError> {
            MockBackend::load_trusted_setup(path)
        }

        fn blob_to_kzg_commitment(
            blob: &Blob,
            settings: &MockSettings,
        ) -> Result<KzgCommitment, HarnessError> {
            MockBackend::blob_to_kzg_commitment(blob, settings)
        }

        fn compute_kzg_proof(
            blob: &Blob,
            z: &Bytes32,
            settings: &MockSettings,
        ) -> Result<(KzgProof, Bytes32), HarnessError> {
            let (proof, _) = MockBackend::compute_kzg_proof(blob, z, settings)?;
            Ok((proof, [0u8; 32]))
        }

        fn verify_kzg_proof(
            commitment: &KzgCommitment,
            z: &Bytes32,
            y: &Bytes32,
            proof: &KzgProof,
            settings: &MockSettings,
        ) -> Result<bool, HarnessError> {
            MockBackend::verify_kzg_proof(commitment, z, y, proof, settings)
        }
    }

    /// Verifier answers a fixed value regardless of its inputs.
    struct ConstantVerifierBackend<const ANSWER: bool>;

    impl<const ANSWER: bool> KzgBackend for ConstantVerifierBackend<ANSWER> {
        type Settings = MockSettings;

        fn load_trusted_setup(path: &Path) -> Result<MockSettings, HarnessError> {
            MockBackend::load_trusted_setup(path)
        }

        fn blob_to_kzg_commitment(
            blob: &Blob,
            settings: &MockSettings,
        ) -> Result<KzgCommitment, HarnessError> {
            MockBackend::blob_to_kzg_commitment(blob, settings)
        }

        fn compute_kzg_proof(
            blob: &Blob,
            z: &Bytes32,
            settings: &MockSettings,
        ) -> Result<(KzgProof, Bytes32), HarnessError> {
            MockBackend::compute_kzg_proof(blob, z, settings)
        }

        fn verify_kzg_proof(
            _commitment: &KzgCommitment,
            _z: &Bytes32,
            _y: &Bytes32,
            _proof: &KzgProof,
            _settings: &MockSettings,
        ) -> Result<bool, HarnessError> {
            Ok(ANSWER)
        }
    }

    static COMMIT_COUNTER: AtomicU8 = AtomicU8::new(0);

    /// Commitments change on every call.
    struct CountingCommitmentBackend;

    impl KzgBackend for CountingCommitmentBackend {
        type Settings = MockSettings;

        fn load_trusted_setup(path: &Path) -> Result<MockSettings, HarnessError> {
            MockBackend::load_trusted_setup(path)
        }

        fn blob_to_kzg_commitment(
            blob: &Blob,
            settings: &MockSettings,
        ) -> Result<KzgCommitment, HarnessError> {
            let mut commitment = MockBackend::blob_to_kzg_commitment(blob, settings)?;
            commitment.0[47] ^= COMMIT_COUNTER.fetch_add(1, Ordering::SeqCst);
            Ok(commitment)
        }

        fn compute_kzg_proof(
            blob: &Blob,
            z: &Bytes32,
            settings: &MockSettings,
        ) -> Result<(KzgProof, Bytes32), HarnessError> {
            MockBackend::compute_kzg_proof(blob, z, settings)
        }

        fn verify_kzg_proof(
            commitment: &KzgCommitment,
            z: &Bytes32,
            y: &Bytes32,
            proof: &KzgProof,
            settings: &MockSettings,
        ) -> Result<bool, HarnessError> {
            MockBackend::verify_kzg_proof(commitment, z, y, proof, settings)
        }
    }

    #[test]
    fn test_round_trip_index_one() {
        let vector = HARNESS.run(1).unwrap();
        assert_eq!(vector.index, 1);
        assert_eq!(vector.bit_reversed_index, 2048);
        assert_eq!(vector.y, field_element(1));
        // root^2048 is -1
        assert_eq!(
            vector.z,
            "0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000000"
        );
    }

    #[test]
    fn test_index_zero_opens_at_one() {
        let vector = HARNESS.run(0).unwrap();
        assert_eq!(vector.bit_reversed_index, 0);
        assert_eq!(vector.z, field_element(1));
        assert_eq!(vector.y, field_element(0));
    }

    #[test]
    fn test_evaluation_correctness_all_indices() {
        let indices: Vec<usize> = (0..HARNESS.domain().size()).collect();
        let vectors = HARNESS.run_indices(&indices).unwrap();
        assert_eq!(vectors.len(), indices.len());
        for (index, vector) in vectors.iter().enumerate() {
            assert_eq!(vector.index, index);
            assert_eq!(vector.y, field_element(index as u64));
        }
    }

    #[test]
    fn test_run_indices_shares_commitment() {
        let mut rng = rand::thread_rng();
        let indices: Vec<usize> = (0..8).map(|_| rng.gen_range(0..4096)).collect();
        let vectors = HARNESS.run_indices(&indices).unwrap();
        let fixture = HARNESS.commit_fixture().unwrap();
        for (vector, index) in vectors.iter().zip(&indices) {
            assert_eq!(vector.index, *index);
            assert_eq!(vector.commitment, fixture.commitment.to_hex());
            assert_eq!(vector.versioned_hash, fixture.versioned_hash.to_hex());
        }
    }

    #[test]
    fn test_run_indices_stops_at_first_failure() {
        let result = HARNESS.run_indices(&[3, 4096, 5000]);
        assert_eq!(
            result,
            Err(HarnessError::Primitives(KzgError::IndexOutOfRange {
                index: 4096,
                domain_size: 4096
            }))
        );
    }

    #[test]
    fn test_vectors_are_deterministic() {
        let first = HARNESS.run(77).unwrap();
        let second = HARNESS.run(77).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_point_evaluation_input_in_vector() {
        let vector = HARNESS.run(42).unwrap();
        let raw = hex::decode(vector.point_evaluation_input.trim_start_matches("0x")).unwrap();
        let input = PointEvaluationInput::decode(&raw).unwrap();
        assert!(input.has_consistent_hash());
        assert_eq!(input.versioned_hash.to_hex(), vector.versioned_hash);
        assert_eq!(helpers::to_hex(&input.z), vector.z);
        assert_eq!(helpers::to_hex(&input.y), vector.y);
        assert_eq!(helpers::to_hex(&input.proof), vector.proof);
    }

    #[test]
    fn test_forged_evaluation_rejected_by_mock() {
        let fixture = HARNESS.commit_fixture().unwrap();
        let z = HARNESS.domain().evaluation_point(9).unwrap();
        let (proof, y) = HARNESS.kzg().compute_kzg_proof(&fixture.blob, &z).unwrap();
        assert!(HARNESS
            .kzg()
            .verify_kzg_proof(&fixture.commitment, &z, &y, &proof)
            .unwrap());
        let forged = helpers::u64_to_field_element_bytes(10);
        assert!(!HARNESS
            .kzg()
            .verify_kzg_proof(&fixture.commitment, &z, &forged, &proof)
            .unwrap());
    }

    #[test]
    fn test_small_domain() {
        let mainnet = EvaluationDomain::mainnet().unwrap();
        let root = helpers::bytes_to_biguint(&mainnet.root_power(4096 / 16).unwrap());
        let domain = EvaluationDomain::new(mainnet.modulus().clone(), root, 16).unwrap();
        let harness: VectorHarness<MockBackend> =
            VectorHarness::new(Kzg::new(MockSettings::new(16).unwrap()), domain);

        let vectors = harness.run_indices(&(0..16).collect::<Vec<_>>()).unwrap();
        for (index, vector) in vectors.iter().enumerate() {
            assert_eq!(vector.y, field_element(index as u64));
        }
    }

    #[test]
    fn test_missing_trusted_setup() {
        let result =
            VectorHarness::<MockBackend>::from_trusted_setup(Path::new("does/not/exist.txt"));
        assert!(matches!(result, Err(HarnessError::TrustedSetup(_))));
    }

    #[test]
    fn test_trusted_setup_header_accepted() {
        let path = std::env::temp_dir().join("kzg_blob_vectors_mock_setup.txt");
        fs::write(&path, "4096\n65\n97f1d3a73197d7942695638c4fa9ac0f\n").unwrap();
        let result = VectorHarness::<MockBackend>::from_trusted_setup(&path);
        fs::remove_file(&path).unwrap();

        let harness = result.unwrap();
        assert_eq!(harness.domain().size(), 4096);
        assert_eq!(harness.run(5).unwrap().y, field_element(5));
    }

    #[test]
    fn test_malformed_trusted_setup_rejected() {
        let result = VectorHarness::<MockBackend>::from_trusted_setup(Path::new("Cargo.toml"));
        assert!(matches!(result, Err(HarnessError::TrustedSetup(_))));

        let path = std::env::temp_dir().join("kzg_blob_vectors_mock_setup_wrong_width.txt");
        fs::write(&path, "4\n65\n").unwrap();
        let result = VectorHarness::<MockBackend>::from_trusted_setup(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(HarnessError::TrustedSetup(_))));
    }

    #[test]
    fn test_evaluation_mismatch() {
        let harness = harness_with::<ZeroEvaluationBackend>();
        assert_eq!(harness.run(0).unwrap().y, field_element(0));
        assert_eq!(
            harness.run(1),
            Err(HarnessError::EvaluationMismatch {
                index: 1,
                expected: field_element(1),
                actual: field_element(0),
            })
        );
    }

    #[test]
    fn test_proof_rejected() {
        let harness = harness_with::<ConstantVerifierBackend<false>>();
        assert_eq!(harness.run(1), Err(HarnessError::ProofRejected { index: 1 }));
    }

    #[test]
    fn test_forged_evaluation_accepted() {
        let harness = harness_with::<ConstantVerifierBackend<true>>();
        assert_eq!(
            harness.run(2),
            Err(HarnessError::ForgedEvaluationAccepted { index: 2 })
        );
    }

    #[test]
    fn test_commitment_mismatch() {
        let harness = harness_with::<CountingCommitmentBackend>();
        assert!(matches!(
            harness.commit_fixture(),
            Err(HarnessError::CommitmentMismatch { .. })
        ));
    }

    #[test]
    fn test_mock_rejects_non_canonical_z() {
        let fixture = HARNESS.commit_fixture().unwrap();
        let z = [0xffu8; 32];
        let result = HARNESS.kzg().compute_kzg_proof(&fixture.blob, &z);
        assert!(matches!(
            result,
            Err(HarnessError::Backend {
                operation: "compute_kzg_proof",
                ..
            })
        ));
    }
}
