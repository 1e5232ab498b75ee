//! McEliece key generation

use mecs_algorithms::error::Error as PrimitiveError;
use mecs_algorithms::{BinaryMatrix, GfElement, GfPoly, GoppaCode, Permutation};
use mecs_params::pqc::mceliece::{
    MAX_GOPPA_ATTEMPTS, MAX_IRREDUCIBLE_ATTEMPTS, MAX_SCRAMBLER_ATTEMPTS, MAX_SUPPORT_SHUFFLES,
};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use super::keys::{PublicKey, SecretKey};
use super::params::McElieceParams;
use crate::error::{Error, Result};

/// Find a Goppa code whose parity-check matrix reduces to `[I | M]` and
/// return it with the systematic generator `G = [M^T | I]`
///
/// Each Goppa polynomial gets a bounded number of support shuffles. A
/// parity-check matrix of rank below `m*t` cannot be fixed by reordering
/// the support, so the polynomial is dropped right away in that case.
fn systematic_code<R: RngCore + CryptoRng + ?Sized>(
    params: &McElieceParams,
    rng: &mut R,
) -> Result<(GoppaCode, BinaryMatrix)> {
    let field = params.field();
    let (n, k, mt) = (params.n(), params.k(), params.redundancy());
    let elements: Vec<GfElement> = field.elements().collect();

    for attempt in 1..=MAX_GOPPA_ATTEMPTS {
        let goppa = GfPoly::random_irreducible(field, params.t(), MAX_IRREDUCIBLE_ATTEMPTS, rng)?;

        for shuffle in 1..=MAX_SUPPORT_SHUFFLES {
            let support = Permutation::random(n, rng).apply_slice(&elements)?;
            let code = GoppaCode::new(field.clone(), goppa.clone(), support)?;
            let mut h = code.parity_check_matrix();

            match h.systematic_form() {
                Ok(()) => {
                    let generator = h
                        .columns(mt, n)?
                        .transpose()
                        .hconcat(&BinaryMatrix::identity(k))?;
                    h.zeroize();
                    log::debug!(
                        "systematic Goppa code found (polynomial {}, shuffle {})",
                        attempt,
                        shuffle
                    );
                    return Ok((code, generator));
                }
                Err(PrimitiveError::RankDeficient { column }) => {
                    let rank = h.rank();
                    h.zeroize();
                    log::trace!(
                        "parity-check matrix has no pivot in column {} (rank {} of {})",
                        column,
                        rank,
                        mt
                    );
                    if rank < mt {
                        break;
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }
        log::debug!("rejecting Goppa polynomial {} of {}", attempt, MAX_GOPPA_ATTEMPTS);
    }

    log::warn!("no systematic Goppa code after {} polynomials", MAX_GOPPA_ATTEMPTS);
    Err(Error::KeyGeneration("Goppa code search exhausted its retry cap"))
}

/// Draw random `k x k` matrices until one is invertible, returning `(S, S^-1)`
fn random_scrambler<R: RngCore + CryptoRng + ?Sized>(
    k: usize,
    rng: &mut R,
) -> Result<(BinaryMatrix, BinaryMatrix)> {
    for attempt in 1..=MAX_SCRAMBLER_ATTEMPTS {
        let mut s = BinaryMatrix::random(k, k, rng);
        match s.inverse() {
            Ok(s_inv) => {
                log::trace!("invertible scrambler after {} draws", attempt);
                return Ok((s, s_inv));
            }
            Err(PrimitiveError::RankDeficient { .. }) => s.zeroize(),
            Err(e) => return Err(e.into()),
        }
    }
    log::warn!("no invertible scrambler after {} draws", MAX_SCRAMBLER_ATTEMPTS);
    Err(Error::KeyGeneration("scrambler search exhausted its retry cap"))
}

/// Generate a key pair for `params`
///
/// The public generator is `G' = S * G * P` with `G` the systematic
/// generator of a random Goppa code, `S` a random invertible `k x k`
/// matrix and `P` a random column permutation. The secret key keeps the
/// code, `P^-1` and `S^-1`.
pub(crate) fn generate<R: RngCore + CryptoRng + ?Sized>(
    params: &McElieceParams,
    rng: &mut R,
) -> Result<(PublicKey, SecretKey)> {
    log::debug!(
        "generating McEliece key pair: m = {}, t = {}, n = {}, k = {}",
        params.m(),
        params.t(),
        params.n(),
        params.k()
    );

    let (code, mut generator) = systematic_code(params, rng)?;
    let (mut scrambler, scrambler_inv) = random_scrambler(params.k(), rng)?;
    let mut permutation = Permutation::random(params.n(), rng);

    let mut scrambled = scrambler.mul(&generator)?;
    let public = scrambled.permute_columns(&permutation)?;
    scrambled.zeroize();
    scrambler.zeroize();
    generator.zeroize();

    let permutation_inv = permutation.inverse();
    permutation.zeroize();

    Ok((
        PublicKey::new(params.clone(), public),
        SecretKey::new(params.clone(), code, permutation_inv, scrambler_inv),
    ))
}
