//! Permutations of bit positions

use rand::seq::SliceRandom;
use rand::RngCore;
use zeroize::Zeroize;

use super::vector::BinaryVector;
use crate::error::{validate, Error, Result};

/// A permutation `pi` of `0..n`
///
/// Applying it to a sequence gathers: `out[i] = in[pi[i]]`.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Permutation {
    map: Vec<usize>,
}

impl Permutation {
    /// Identity on `0..n`
    pub fn identity(n: usize) -> Self {
        Self {
            map: (0..n).collect(),
        }
    }

    /// Uniformly random permutation of `0..n`
    pub fn random<R: RngCore + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut map: Vec<usize> = (0..n).collect();
        map.shuffle(rng);
        Self { map }
    }

    /// Wrap an explicit mapping, checking that it is a bijection
    pub fn from_vec(map: Vec<usize>) -> Result<Self> {
        let n = map.len();
        let mut seen = vec![false; n];
        for &p in &map {
            if p >= n || seen[p] {
                return Err(Error::InvalidInput {
                    context: "permutation",
                    reason: "mapping is not a bijection",
                });
            }
            seen[p] = true;
        }
        Ok(Self { map })
    }

    /// Size of the permuted set
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True for the empty permutation
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The mapping as a slice
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }

    /// Inverse permutation: `inv[pi[i]] = i`
    pub fn inverse(&self) -> Self {
        let mut map = vec![0; self.map.len()];
        for (i, &p) in self.map.iter().enumerate() {
            map[p] = i;
        }
        Self { map }
    }

    /// Gather bits: `out[i] = v[pi[i]]`
    pub fn apply(&self, v: &BinaryVector) -> Result<BinaryVector> {
        validate::length("permutation input", v.len(), self.map.len())?;
        let mut out = BinaryVector::new(v.len());
        for (i, &p) in self.map.iter().enumerate() {
            out.set(i, v.get(p));
        }
        Ok(out)
    }

    /// Gather arbitrary items: `out[i] = items[pi[i]]`
    pub fn apply_slice<T: Copy>(&self, items: &[T]) -> Result<Vec<T>> {
        validate::length("permutation input", items.len(), self.map.len())?;
        Ok(self.map.iter().map(|&p| items[p]).collect())
    }
}
