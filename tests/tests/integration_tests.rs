//! End-to-end tests across the api, algorithms and pke crates

use mecs_algorithms::BinaryVector;
use mecs_api::{Error, Pke, Serialize, SerializeSecret};
use mecs_params::pqc::mceliece::{MECS_1024_50, MECS_TOY_4_2};
use mecs_pke::{
    decrypt, encrypt, generate_keypair, McEliece, McElieceContext, McElieceParams, PublicKey,
    SecretKey,
};
use mecs_tests::{init_logging, keypair, rng, to_hex};

/// Seed of the m = 4, t = 2 known-answer scenario
const S1: u64 = 0x5EED_0001;

/// Public key generated from `S1`
const PK1_HEX: &str = "01040200011b9de5a135fe71da10dafb88c8b7d5";

/// Encryption of `00000000` under `PK1_HEX` with the RNG seeded by `S1 + 1`
const C1_HEX: &str = "0440";

fn toy_scenario() -> (Vec<u8>, Vec<u8>, BinaryVector) {
    let (pk, sk) = keypair(MECS_TOY_4_2.m, MECS_TOY_4_2.t, S1);
    let plaintext = BinaryVector::new(8);
    let ciphertext = encrypt(&pk, &plaintext, &mut rng(S1 + 1)).unwrap();
    assert_eq!(decrypt(&sk, &ciphertext).unwrap(), plaintext);
    (pk.to_bytes(), sk.to_bytes_zeroizing().to_vec(), ciphertext)
}

#[test]
fn toy_scenario_is_reproducible() {
    let (pk_a, sk_a, ct_a) = toy_scenario();
    let (pk_b, sk_b, ct_b) = toy_scenario();
    assert_eq!(pk_a, pk_b);
    assert_eq!(sk_a, sk_b);
    assert_eq!(ct_a, ct_b, "C1 = {}", to_hex(&ct_a));
    assert_eq!(ct_a.len(), 16);
    // the all-zero plaintext encrypts to the error vector alone
    assert_eq!(ct_a.weight(), 2);
}

#[test]
fn toy_scenario_matches_known_answer() {
    let (pk, _, c1) = toy_scenario();
    assert_eq!(hex::encode(&pk), PK1_HEX);
    assert_eq!(to_hex(&c1), C1_HEX);

    let (_, sk) = keypair(MECS_TOY_4_2.m, MECS_TOY_4_2.t, S1);
    let c1 = BinaryVector::from_bytes(16, &hex::decode(C1_HEX).unwrap()).unwrap();
    assert_eq!(decrypt(&sk, &c1).unwrap(), BinaryVector::new(8));
}

#[test]
fn plaintext_length_mismatch() {
    let (pk, _) = keypair(4, 2, 1);
    let short = BinaryVector::from_bits(&[false; 7]);
    let err = encrypt(&pk, &short, &mut rng(2)).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidLength {
            expected: 8,
            actual: 7,
            ..
        }
    ));
    assert!(err.is_invalid_input());
}

#[test]
fn ciphertext_length_mismatch() {
    let (_, sk) = keypair(4, 2, 3);
    for len in [0, 8, 15, 17, 32] {
        assert!(matches!(
            decrypt(&sk, &BinaryVector::new(len)),
            Err(Error::InvalidLength { expected: 16, .. })
        ));
    }
}

#[test]
fn unsupported_parameters() {
    for (m, t) in [(1, 2), (17, 2), (10, 1), (10, 103), (4, 4)] {
        let err = McElieceParams::new(m, t).unwrap_err();
        assert!(matches!(err, Error::UnsupportedParameter { .. }), "{}", err);
    }
    let params = McElieceParams::from_set(&MECS_1024_50).unwrap();
    assert_eq!((params.n(), params.k()), (1024, 524));
}

#[test]
fn keys_survive_an_encoding_round_trip() {
    init_logging();
    let params = McElieceParams::new(6, 5).unwrap();
    let mut rng = rng(4);
    let (pk, sk) = generate_keypair(&params, &mut rng).unwrap();

    let pk_bytes = pk.to_bytes();
    let sk_bytes = sk.to_bytes_zeroizing();
    assert_eq!(pk_bytes.len(), params.public_key_bytes());
    assert_eq!(sk_bytes.len(), params.secret_key_bytes());

    let pk2 = PublicKey::from_bytes(&pk_bytes).unwrap();
    let sk2 = SecretKey::from_bytes(&sk_bytes).unwrap();
    drop(sk);

    let plaintext = BinaryVector::random(params.k(), &mut rng);
    let ciphertext = encrypt(&pk2, &plaintext, &mut rng).unwrap();
    assert_eq!(decrypt(&sk2, &ciphertext).unwrap(), plaintext);

    let vector_bytes = ciphertext.to_bytes();
    assert_eq!(vector_bytes.len(), params.ciphertext_bytes());
    assert_eq!(BinaryVector::from_bytes(params.n(), &vector_bytes).unwrap(), ciphertext);
}

#[test]
fn public_key_bytes_do_not_open_secret_keys() {
    let (pk, _) = keypair(4, 2, 5);
    assert!(SecretKey::from_bytes(&pk.to_bytes()).is_err());
}

#[test]
fn context_matches_free_functions() {
    init_logging();
    let params = McElieceParams::new(5, 3).unwrap();
    let ctx = McElieceContext::generate(params.clone(), &mut rng(6)).unwrap();
    let (pk, sk) = generate_keypair(&params, &mut rng(6)).unwrap();
    assert_eq!(ctx.public_key(), &pk);
    assert_eq!(ctx.secret_key(), &sk);

    let plaintext = BinaryVector::random(params.k(), &mut rng(7));
    let c1 = ctx.encrypt(&plaintext, &mut rng(8)).unwrap();
    let c2 = encrypt(&pk, &plaintext, &mut rng(8)).unwrap();
    assert_eq!(c1, c2);
    assert_eq!(decrypt(&sk, &c1).unwrap(), plaintext);
    ctx.destroy();
}

fn round_trip_with<P: Pke>(params: &P::Params, plaintext: P::Plaintext) -> P::Plaintext {
    let mut rng = rng(9);
    let (pk, sk) = P::keypair(params, &mut rng).unwrap();
    let ct = P::encrypt(&pk, &plaintext, &mut rng).unwrap();
    P::decrypt(&sk, &ct).unwrap()
}

#[test]
fn generic_pke_usage() {
    let params = McElieceParams::new(6, 4).unwrap();
    let plaintext = BinaryVector::random(params.k(), &mut rng(10));
    assert_eq!(round_trip_with::<McEliece>(&params, plaintext.clone()), plaintext);
}
