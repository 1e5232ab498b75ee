//! Fixed-length bit vectors over GF(2)

use core::fmt;

use mecs_internal::constant_time::{ct_eq, ct_mask_u64};
use rand::{Rng, RngCore};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

/// Bits per storage word
pub const WORD_BITS: usize = 64;

/// Number of words needed for `bits` bits
#[inline]
pub(crate) const fn words_for(bits: usize) -> usize {
    (bits + WORD_BITS - 1) / WORD_BITS
}

/// Number of bytes needed for `bits` bits
#[inline]
pub const fn bytes_for(bits: usize) -> usize {
    (bits + 7) / 8
}

/// Mask of the valid bits in the last word of a `bits`-bit row
#[inline]
pub(crate) const fn tail_mask(bits: usize) -> u64 {
    match bits % WORD_BITS {
        0 => u64::MAX,
        r => (1u64 << r) - 1,
    }
}

/// A bit vector of fixed length, packed into 64-bit words
///
/// Bit `i` lives in word `i / 64` at position `i % 64`. Bits past `len` in
/// the last word are always zero, so word-wise equality and popcount are
/// exact.
#[derive(Clone, Zeroize)]
pub struct BinaryVector {
    len: usize,
    words: Vec<u64>,
}

impl BinaryVector {
    /// All-zero vector of `len` bits
    pub fn new(len: usize) -> Self {
        Self {
            len,
            words: vec![0; words_for(len)],
        }
    }

    /// Vector from a slice of bits
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut v = Self::new(bits.len());
        for (i, &b) in bits.iter().enumerate() {
            v.set(i, b);
        }
        v
    }

    /// Uniformly random vector of `len` bits
    pub fn random<R: RngCore + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut v = Self::new(len);
        for w in v.words.iter_mut() {
            *w = rng.next_u64();
        }
        v.clear_tail();
        v
    }

    /// Uniformly random vector of `len` bits with Hamming weight exactly `weight`
    ///
    /// Positions are chosen by a partial Fisher-Yates shuffle of `0..len`.
    pub fn random_with_weight<R: RngCore + ?Sized>(
        len: usize,
        weight: usize,
        rng: &mut R,
    ) -> Result<Self> {
        validate::parameter(weight <= len, "weight", "weight exceeds vector length")?;

        let mut positions: Vec<usize> = (0..len).collect();
        let mut v = Self::new(len);
        for i in 0..weight {
            let j = rng.gen_range(i..len);
            positions.swap(i, j);
            v.set(positions[i], true);
        }
        positions.zeroize();
        Ok(v)
    }

    /// Length in bits
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True for the zero-length vector
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed storage words
    #[inline]
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Read bit `i`
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        assert!(i < self.len, "bit index {} out of range for length {}", i, self.len);
        self.words[i / WORD_BITS] >> (i % WORD_BITS) & 1 == 1
    }

    /// Write bit `i` without branching on `value`
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    #[inline]
    pub fn set(&mut self, i: usize, value: bool) {
        assert!(i < self.len, "bit index {} out of range for length {}", i, self.len);
        let shift = i % WORD_BITS;
        let w = &mut self.words[i / WORD_BITS];
        *w = (*w & !(1u64 << shift)) | ((value as u64) << shift);
    }

    /// Toggle bit `i`
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    #[inline]
    pub fn flip(&mut self, i: usize) {
        assert!(i < self.len, "bit index {} out of range for length {}", i, self.len);
        self.words[i / WORD_BITS] ^= 1u64 << (i % WORD_BITS);
    }

    /// Hamming weight
    pub fn weight(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Indices of the set bits, in increasing order
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).filter(move |&i| self.get(i))
    }

    /// XOR `other` into `self`
    pub fn xor_assign(&mut self, other: &Self) -> Result<()> {
        validate::length("vector xor", other.len, self.len)?;
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a ^= b;
        }
        Ok(())
    }

    /// Bitwise XOR
    pub fn xor(&self, other: &Self) -> Result<Self> {
        let mut out = self.clone();
        out.xor_assign(other)?;
        Ok(out)
    }

    /// Bitwise AND
    pub fn and(&self, other: &Self) -> Result<Self> {
        validate::length("vector and", other.len, self.len)?;
        let mut out = self.clone();
        for (a, b) in out.words.iter_mut().zip(&other.words) {
            *a &= b;
        }
        Ok(out)
    }

    /// XOR `other` into `self` when `bit` is set, in constant time
    pub(crate) fn xor_words_masked(&mut self, other: &[u64], bit: u64) {
        let mask = ct_mask_u64(bit);
        for (a, b) in self.words.iter_mut().zip(other) {
            *a ^= b & mask;
        }
    }

    /// Inner product over GF(2)
    pub fn dot(&self, other: &Self) -> Result<bool> {
        validate::length("vector dot product", other.len, self.len)?;
        let acc = self
            .words
            .iter()
            .zip(&other.words)
            .fold(0u64, |acc, (a, b)| acc ^ (a & b));
        Ok(acc.count_ones() & 1 == 1)
    }

    /// Constant-time equality; vectors of different length are unequal
    pub fn ct_eq(&self, other: &Self) -> bool {
        self.len == other.len && ct_eq(&self.words, &other.words)
    }

    /// Concatenation `self || other`
    pub fn concat(&self, other: &Self) -> Self {
        let mut out = Self::new(self.len + other.len);
        out.words[..self.words.len()].copy_from_slice(&self.words);
        for i in 0..other.len {
            out.set(self.len + i, other.get(i));
        }
        out
    }

    /// Copy of bits `start..end`
    pub fn slice(&self, start: usize, end: usize) -> Result<Self> {
        if start > end || end > self.len {
            return Err(Error::InvalidInput {
                context: "vector slice",
                reason: "range out of bounds",
            });
        }
        let mut out = Self::new(end - start);
        if start % WORD_BITS == 0 {
            let first = start / WORD_BITS;
            let count = out.words.len();
            out.words.copy_from_slice(&self.words[first..first + count]);
            out.clear_tail();
        } else {
            for i in 0..out.len {
                out.set(i, self.get(start + i));
            }
        }
        Ok(out)
    }

    /// Encode as `ceil(len / 8)` bytes, bit `i` at byte `i / 8`, bit `i % 8`
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(bytes_for(self.len));
        for w in &self.words {
            out.extend_from_slice(&w.to_le_bytes());
        }
        out.truncate(bytes_for(self.len));
        out
    }

    /// Decode a `len`-bit vector written by [`BinaryVector::to_bytes`]
    ///
    /// Padding bits in the last byte must be zero.
    pub fn from_bytes(len: usize, bytes: &[u8]) -> Result<Self> {
        validate::length("vector bytes", bytes.len(), bytes_for(len))?;
        let mut v = Self::new(len);
        for (w, chunk) in v.words.iter_mut().zip(bytes.chunks(8)) {
            let mut buf = [0u8; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            *w = u64::from_le_bytes(buf);
        }
        if let Some(last) = v.words.last() {
            if last & !tail_mask(len) != 0 {
                return Err(Error::InvalidInput {
                    context: "vector bytes",
                    reason: "non-zero padding bits",
                });
            }
        }
        Ok(v)
    }

    fn clear_tail(&mut self) {
        let mask = tail_mask(self.len);
        if let Some(last) = self.words.last_mut() {
            *last &= mask;
        }
    }

    pub(crate) fn from_words(len: usize, words: Vec<u64>) -> Self {
        let mut v = Self { len, words };
        v.clear_tail();
        v
    }
}

impl PartialEq for BinaryVector {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other)
    }
}

impl Eq for BinaryVector {}

impl fmt::Debug for BinaryVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinaryVector({}; ", self.len)?;
        for i in 0..self.len {
            f.write_str(if self.get(i) { "1" } else { "0" })?;
        }
        f.write_str(")")
    }
}
