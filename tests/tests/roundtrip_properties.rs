//! Property-based round-trip tests for McEliece encryption

use std::sync::OnceLock;

use mecs_algorithms::BinaryVector;
use mecs_pke::{decrypt, encrypt, PublicKey, SecretKey};
use mecs_tests::{keypair, rng};
use proptest::prelude::*;

fn toy_keys() -> &'static (PublicKey, SecretKey) {
    static KEYS: OnceLock<(PublicKey, SecretKey)> = OnceLock::new();
    KEYS.get_or_init(|| keypair(6, 5, 0xA11CE))
}

fn medium_keys() -> &'static (PublicKey, SecretKey) {
    static KEYS: OnceLock<(PublicKey, SecretKey)> = OnceLock::new();
    KEYS.get_or_init(|| keypair(8, 12, 0xB0B))
}

fn plaintext(k: usize) -> impl Strategy<Value = BinaryVector> {
    prop::collection::vec(any::<bool>(), k).prop_map(|bits| BinaryVector::from_bits(&bits))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn toy_round_trip(pt in plaintext(34), seed in any::<u64>()) {
        let (pk, sk) = toy_keys();
        let ct = encrypt(pk, &pt, &mut rng(seed)).unwrap();
        prop_assert_eq!(ct.len(), 64);
        prop_assert_eq!(decrypt(sk, &ct).unwrap(), pt);
    }

    #[test]
    fn error_weight_is_exactly_t(pt in plaintext(34), seed in any::<u64>()) {
        let (pk, _) = toy_keys();
        let codeword = pk.generator().vector_mul(&pt).unwrap();
        let ct = encrypt(pk, &pt, &mut rng(seed)).unwrap();
        prop_assert_eq!(ct.xor(&codeword).unwrap().weight(), 5);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn medium_round_trip(pt in plaintext(160), seed in any::<u64>()) {
        let (pk, sk) = medium_keys();
        let ct = encrypt(pk, &pt, &mut rng(seed)).unwrap();
        prop_assert_eq!(decrypt(sk, &ct).unwrap(), pt);
    }
}
