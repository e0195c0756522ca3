//! Fixed-width bit vectors.
//!
//! [`FixedBitVector`] reports the length requested at construction, never the
//! word-aligned storage length. A 3-bit vector occupies one `u64` word but still has
//! `len() == 3`, and only indices `0..3` are addressable.

use std::fmt;

use bitvec::prelude::*;
use thiserror::Error;

use crate::constants::BitWord;

#[cfg(test)]
mod tests;

/// Two vectors of different declared length were combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bit vector lengths differ: {left} vs {right}")]
pub struct LengthMismatch {
    pub left: usize,
    pub right: usize,
}

/// Boolean vector with a declared logical length and word-packed storage.
///
/// `Clone` copies the storage, so mutating a clone never affects the original.
#[derive(Clone, PartialEq, Eq)]
pub struct FixedBitVector {
    bits: BitVec<BitWord, Lsb0>,
}

impl FixedBitVector {
    /// Creates an all-zero vector of `len` bits.
    pub fn new(len: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, len),
        }
    }

    pub fn from_bools(values: &[bool]) -> Self {
        values.iter().copied().collect()
    }

    /// Declared length, as requested at construction.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[cfg(test)]
    fn storage_words(&self) -> usize {
        self.bits.as_raw_slice().len()
    }

    /// Returns the bit at `index`, or `None` past the declared length.
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    /// Sets the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn set(&mut self, index: usize, value: bool) {
        assert!(
            index < self.len(),
            "bit index {} out of range for length {}",
            index,
            self.len()
        );
        self.bits.set(index, value);
    }

    /// Population count.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// Indices of set bits, ascending.
    pub fn iter_ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    pub fn and_assign(&mut self, other: &Self) -> Result<(), LengthMismatch> {
        self.zip_words(other, |a, b| a & b)
    }

    pub fn or_assign(&mut self, other: &Self) -> Result<(), LengthMismatch> {
        self.zip_words(other, |a, b| a | b)
    }

    pub fn xor_assign(&mut self, other: &Self) -> Result<(), LengthMismatch> {
        self.zip_words(other, |a, b| a ^ b)
    }

    /// Bitwise AND into a new vector; `self` is left untouched.
    pub fn and(&self, other: &Self) -> Result<Self, LengthMismatch> {
        let mut out = self.clone();
        out.and_assign(other)?;
        Ok(out)
    }

    pub fn or(&self, other: &Self) -> Result<Self, LengthMismatch> {
        let mut out = self.clone();
        out.or_assign(other)?;
        Ok(out)
    }

    pub fn xor(&self, other: &Self) -> Result<Self, LengthMismatch> {
        let mut out = self.clone();
        out.xor_assign(other)?;
        Ok(out)
    }

    /// Every bit inverted, within the declared length only.
    pub fn complement(&self) -> Self {
        self.iter().map(|bit| !bit).collect()
    }

    fn zip_words(
        &mut self,
        other: &Self,
        op: impl Fn(BitWord, BitWord) -> BitWord,
    ) -> Result<(), LengthMismatch> {
        if self.len() != other.len() {
            return Err(LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }

        // Padding bits past `len` are zero in both operands and stay zero under and/or/xor.
        for (lhs, rhs) in self
            .bits
            .as_raw_mut_slice()
            .iter_mut()
            .zip(other.bits.as_raw_slice())
        {
            *lhs = op(*lhs, *rhs);
        }
        Ok(())
    }
}

impl FromIterator<bool> for FixedBitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for FixedBitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for FixedBitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBitVector")
            .field("len", &self.len())
            .field("bits", &self.to_string())
            .finish()
    }
}
