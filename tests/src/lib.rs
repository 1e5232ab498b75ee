//! Shared fixtures for the mecs integration and property tests

use std::sync::Arc;

use mecs_algorithms::{BinaryMatrix, BinaryVector, Gf2m, GfElement, GfPoly, GoppaCode, Permutation};
use mecs_pke::{generate_keypair, McElieceParams, PublicKey, SecretKey};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Install `env_logger` once, honouring `RUST_LOG`
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic RNG for reproducible vectors
pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// Key pair for `(m, t)` drawn from a seeded RNG
pub fn keypair(m: usize, t: usize, seed: u64) -> (PublicKey, SecretKey) {
    init_logging();
    let params = McElieceParams::new(m, t).expect("valid parameters");
    generate_keypair(&params, &mut rng(seed)).expect("key generation")
}

/// A Goppa code over the whole field in shuffled support order
pub fn random_code(m: usize, t: usize, seed: u64) -> GoppaCode {
    let mut rng = rng(seed);
    let field = Arc::new(Gf2m::new(m).expect("supported field"));
    let goppa = GfPoly::random_irreducible(&field, t, 10_000, &mut rng).expect("irreducible");
    let elements: Vec<GfElement> = field.elements().collect();
    let support = Permutation::random(field.order(), &mut rng)
        .apply_slice(&elements)
        .expect("full support");
    GoppaCode::new(field, goppa, support).expect("valid code")
}

/// Reduce the parity-check matrix of `code` and build `G = [M^T | I]`
///
/// Returns `None` when the support order leaves the matrix without a
/// pivot in its leading columns.
pub fn systematic_generator(code: &GoppaCode) -> Option<(BinaryMatrix, BinaryMatrix)> {
    let mut h = code.parity_check_matrix();
    let (mt, n) = (h.rows(), h.cols());
    h.systematic_form().ok()?;
    let g = h
        .columns(mt, n)
        .ok()?
        .transpose()
        .hconcat(&BinaryMatrix::identity(n - mt))
        .ok()?;
    Some((h, g))
}

/// Hex rendering of a bit vector's byte encoding
pub fn to_hex(v: &BinaryVector) -> String {
    hex::encode(v.to_bytes())
}
