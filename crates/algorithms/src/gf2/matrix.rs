//! Dense bit matrices over GF(2)

use core::fmt;

use rand::RngCore;
use zeroize::Zeroize;

use super::permutation::Permutation;
use super::vector::{bytes_for, tail_mask, words_for, BinaryVector, WORD_BITS};
use crate::error::{validate, Error, Result};

/// A `rows x cols` bit matrix stored row-major, each row packed into words
///
/// Every row has the same word count and keeps its padding bits zero.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct BinaryMatrix {
    rows: usize,
    cols: usize,
    stride: usize,
    data: Vec<u64>,
}

impl BinaryMatrix {
    /// All-zero matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let stride = words_for(cols);
        Self {
            rows,
            cols,
            stride,
            data: vec![0; rows * stride],
        }
    }

    /// `n x n` identity
    pub fn identity(n: usize) -> Self {
        let mut out = Self::zeros(n, n);
        for i in 0..n {
            out.set(i, i, true);
        }
        out
    }

    /// Uniformly random matrix
    pub fn random<R: RngCore + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let mut out = Self::zeros(rows, cols);
        let mask = tail_mask(cols);
        for r in 0..rows {
            let row = out.row_words_mut(r);
            for w in row.iter_mut() {
                *w = rng.next_u64();
            }
            if let Some(last) = row.last_mut() {
                *last &= mask;
            }
        }
        out
    }

    /// Matrix whose rows are the given vectors
    pub fn from_rows(rows: &[BinaryVector]) -> Result<Self> {
        let cols = rows.first().map_or(0, BinaryVector::len);
        let mut out = Self::zeros(rows.len(), cols);
        for (r, v) in rows.iter().enumerate() {
            out.set_row(r, v)?;
        }
        Ok(out)
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub(crate) fn row_words(&self, r: usize) -> &[u64] {
        &self.data[r * self.stride..(r + 1) * self.stride]
    }

    #[inline]
    fn row_words_mut(&mut self, r: usize) -> &mut [u64] {
        &mut self.data[r * self.stride..(r + 1) * self.stride]
    }

    /// Read entry `(r, c)`
    ///
    /// # Panics
    ///
    /// Panics if the entry is out of range.
    #[inline]
    pub fn get(&self, r: usize, c: usize) -> bool {
        assert!(r < self.rows && c < self.cols, "entry ({}, {}) out of range", r, c);
        self.data[r * self.stride + c / WORD_BITS] >> (c % WORD_BITS) & 1 == 1
    }

    /// Write entry `(r, c)`
    ///
    /// # Panics
    ///
    /// Panics if the entry is out of range.
    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: bool) {
        assert!(r < self.rows && c < self.cols, "entry ({}, {}) out of range", r, c);
        let shift = c % WORD_BITS;
        let w = &mut self.data[r * self.stride + c / WORD_BITS];
        *w = (*w & !(1u64 << shift)) | ((value as u64) << shift);
    }

    /// Copy of row `r`
    pub fn row(&self, r: usize) -> Result<BinaryVector> {
        validate::index("matrix row", r, self.rows)?;
        Ok(BinaryVector::from_words(self.cols, self.row_words(r).to_vec()))
    }

    /// Overwrite row `r`
    pub fn set_row(&mut self, r: usize, v: &BinaryVector) -> Result<()> {
        validate::index("matrix row", r, self.rows)?;
        validate::length("matrix row", v.len(), self.cols)?;
        self.row_words_mut(r).copy_from_slice(v.words());
        Ok(())
    }

    fn xor_row_into(&mut self, src: usize, dst: usize) {
        for w in 0..self.stride {
            let v = self.data[src * self.stride + w];
            self.data[dst * self.stride + w] ^= v;
        }
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for w in 0..self.stride {
            self.data.swap(a * self.stride + w, b * self.stride + w);
        }
    }

    /// Row-vector product `v * M`
    ///
    /// Sums the rows selected by the bits of `v`. Every row is visited and
    /// combined through a mask, so the running time does not depend on `v`.
    pub fn vector_mul(&self, v: &BinaryVector) -> Result<BinaryVector> {
        validate::length("vector-matrix product", v.len(), self.rows)?;
        let mut out = BinaryVector::new(self.cols);
        for r in 0..self.rows {
            out.xor_words_masked(self.row_words(r), v.get(r) as u64);
        }
        Ok(out)
    }

    /// Matrix-vector product `M * v`
    pub fn mul_vector(&self, v: &BinaryVector) -> Result<BinaryVector> {
        validate::length("matrix-vector product", v.len(), self.cols)?;
        let mut out = BinaryVector::new(self.rows);
        for r in 0..self.rows {
            let acc = self
                .row_words(r)
                .iter()
                .zip(v.words())
                .fold(0u64, |acc, (a, b)| acc ^ (a & b));
            out.set(r, acc.count_ones() & 1 == 1);
        }
        Ok(out)
    }

    /// Matrix product `self * other`
    pub fn mul(&self, other: &Self) -> Result<Self> {
        validate::length("matrix product", other.rows, self.cols)?;
        let mut out = Self::zeros(self.rows, other.cols);
        for r in 0..self.rows {
            let mut acc = BinaryVector::new(other.cols);
            for i in 0..self.cols {
                acc.xor_words_masked(other.row_words(i), self.get(r, i) as u64);
            }
            out.row_words_mut(r).copy_from_slice(acc.words());
        }
        Ok(out)
    }

    /// Transpose
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.get(r, c) {
                    out.set(c, r, true);
                }
            }
        }
        out
    }

    /// Column permutation: `out[r][i] = self[r][perm[i]]`
    pub fn permute_columns(&self, perm: &Permutation) -> Result<Self> {
        validate::length("column permutation", perm.len(), self.cols)?;
        let mut out = Self::zeros(self.rows, self.cols);
        for r in 0..self.rows {
            for (i, &src) in perm.as_slice().iter().enumerate() {
                out.set(r, i, self.get(r, src));
            }
        }
        Ok(out)
    }

    /// Copy of columns `start..end`
    pub fn columns(&self, start: usize, end: usize) -> Result<Self> {
        if start > end || end > self.cols {
            return Err(Error::InvalidInput {
                context: "matrix columns",
                reason: "range out of bounds",
            });
        }
        let mut out = Self::zeros(self.rows, end - start);
        for r in 0..self.rows {
            for c in start..end {
                out.set(r, c - start, self.get(r, c));
            }
        }
        Ok(out)
    }

    /// Horizontal concatenation `[self | other]`
    pub fn hconcat(&self, other: &Self) -> Result<Self> {
        validate::length("matrix concatenation", other.rows, self.rows)?;
        let mut out = Self::zeros(self.rows, self.cols + other.cols);
        for r in 0..self.rows {
            out.row_words_mut(r)[..self.stride].copy_from_slice(self.row_words(r));
            for c in 0..other.cols {
                out.set(r, self.cols + c, other.get(r, c));
            }
        }
        Ok(out)
    }

    /// Gauss-Jordan reduction to `[I | M]`
    ///
    /// Makes the leading `rows` columns the identity using row operations
    /// only. Fails with `RankDeficient` naming the first leading column that
    /// has no pivot; the matrix is left partially reduced in that case.
    pub fn systematic_form(&mut self) -> Result<()> {
        validate::parameter(
            self.rows <= self.cols,
            "matrix",
            "systematic form needs at least as many columns as rows",
        )?;

        for col in 0..self.rows {
            let pivot = (col..self.rows)
                .find(|&r| self.get(r, col))
                .ok_or(Error::RankDeficient { column: col })?;
            self.swap_rows(col, pivot);
            for r in 0..self.rows {
                if r != col && self.get(r, col) {
                    self.xor_row_into(col, r);
                }
            }
        }
        Ok(())
    }

    /// True if the leading `rows` columns form the identity
    pub fn is_systematic(&self) -> bool {
        self.rows <= self.cols
            && (0..self.rows).all(|r| (0..self.rows).all(|c| self.get(r, c) == (r == c)))
    }

    /// Rank over GF(2)
    pub fn rank(&self) -> usize {
        let mut work = self.clone();
        let mut rank = 0;
        for col in 0..work.cols {
            if rank == work.rows {
                break;
            }
            if let Some(pivot) = (rank..work.rows).find(|&r| work.get(r, col)) {
                work.swap_rows(rank, pivot);
                for r in rank + 1..work.rows {
                    if work.get(r, col) {
                        work.xor_row_into(rank, r);
                    }
                }
                rank += 1;
            }
        }
        work.zeroize();
        rank
    }

    /// Inverse of a square matrix
    ///
    /// Reduces `[A | I]` to `[I | A^-1]`. A singular matrix fails with
    /// `RankDeficient`.
    pub fn inverse(&self) -> Result<Self> {
        validate::length("matrix inverse", self.cols, self.rows)?;
        let mut aug = self.hconcat(&Self::identity(self.rows))?;
        let reduced = aug.systematic_form();
        let out = reduced.and_then(|()| aug.columns(self.cols, 2 * self.cols));
        aug.zeroize();
        out
    }

    /// Encode as `rows` consecutive rows of `ceil(cols / 8)` bytes each
    pub fn to_bytes(&self) -> Vec<u8> {
        let row_bytes = bytes_for(self.cols);
        let mut out = Vec::with_capacity(self.rows * row_bytes);
        for r in 0..self.rows {
            let start = out.len();
            for w in self.row_words(r) {
                out.extend_from_slice(&w.to_le_bytes());
            }
            out.truncate(start + row_bytes);
        }
        out
    }

    /// Decode a matrix written by [`BinaryMatrix::to_bytes`]
    pub fn from_bytes(rows: usize, cols: usize, bytes: &[u8]) -> Result<Self> {
        let row_bytes = bytes_for(cols);
        validate::length("matrix bytes", bytes.len(), rows * row_bytes)?;
        let mut out = Self::zeros(rows, cols);
        if row_bytes == 0 {
            return Ok(out);
        }
        for (r, chunk) in bytes.chunks(row_bytes).enumerate() {
            let v = BinaryVector::from_bytes(cols, chunk)?;
            out.row_words_mut(r).copy_from_slice(v.words());
        }
        Ok(out)
    }
}

impl fmt::Debug for BinaryMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BinaryMatrix({} x {})", self.rows, self.cols)?;
        for r in 0..self.rows {
            for c in 0..self.cols {
                f.write_str(if self.get(r, c) { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
