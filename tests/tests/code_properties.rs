//! Goppa code invariants: systematic form, H * G^T = 0 and the decoding radius

use mecs_algorithms::{patterson, BinaryMatrix, BinaryVector, Error};
use mecs_tests::{init_logging, random_code, rng, systematic_generator};

const CODES: [(usize, usize); 4] = [(4, 2), (5, 3), (6, 5), (8, 10)];

#[test]
fn systematic_form_leads_with_identity() {
    init_logging();
    let mut reduced = 0;
    for (m, t) in CODES {
        for seed in 0..8 {
            let code = random_code(m, t, seed);
            if let Some((h, _)) = systematic_generator(&code) {
                assert!(h.is_systematic());
                assert_eq!(h.columns(0, m * t).unwrap(), BinaryMatrix::identity(m * t));
                reduced += 1;
            }
        }
    }
    assert!(reduced > 0);
}

#[test]
fn generator_is_orthogonal_to_parity_check() {
    init_logging();
    for (m, t) in CODES {
        for seed in 0..8 {
            let code = random_code(m, t, seed);
            let Some((h_sys, g)) = systematic_generator(&code) else {
                continue;
            };
            let n = 1usize << m;
            assert_eq!((g.rows(), g.cols()), (n - m * t, n));

            let gt = g.transpose();
            let zero = BinaryMatrix::zeros(m * t, n - m * t);
            assert_eq!(h_sys.mul(&gt).unwrap(), zero);
            // row operations keep the null space of the original H
            assert_eq!(code.parity_check_matrix().mul(&gt).unwrap(), zero);

            for r in 0..g.rows() {
                assert!(code.syndrome(&g.row(r).unwrap()).unwrap().is_zero());
            }
        }
    }
}

#[test]
fn decoder_corrects_up_to_t_errors() {
    init_logging();
    let mut rng = rng(0xDEC0);
    for (m, t) in CODES {
        let code = random_code(m, t, 1);
        for _ in 0..10 {
            let error = BinaryVector::random_with_weight(code.len(), t, &mut rng).unwrap();
            assert_eq!(patterson::decode(&code, &error).unwrap(), error);
        }
    }
}

#[test]
fn decoder_never_succeeds_with_wrong_error_count() {
    init_logging();
    let mut rng = rng(0xBAD);
    for (m, t) in CODES {
        let code = random_code(m, t, 2);
        for extra in 1..=3 {
            for _ in 0..10 {
                let word =
                    BinaryVector::random_with_weight(code.len(), t + extra, &mut rng).unwrap();
                match patterson::decode(&code, &word) {
                    Ok(error) => {
                        // a different codeword within distance t
                        assert_eq!(error.weight(), t);
                        let corrected = word.xor(&error).unwrap();
                        assert!(code.syndrome(&corrected).unwrap().is_zero());
                    }
                    Err(Error::DecodingFailure { expected, located }) => {
                        assert_eq!(expected, t);
                        assert_ne!(located, t);
                    }
                    Err(e) => panic!("unexpected error {:?}", e),
                }
            }
        }
    }
}

#[test]
fn error_free_words_fail_to_decode() {
    let code = random_code(6, 5, 3);
    assert!(matches!(
        patterson::decode(&code, &BinaryVector::new(64)),
        Err(Error::DecodingFailure { located: 0, .. })
    ));
}
