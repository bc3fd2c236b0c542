//! In-place boolean algebra for `MutableBitVector`.

use crate::{BitVector, MutableBitVector, storage::extend_exact};

impl MutableBitVector {
    /// Performs a logical **AND** with `other`.
    ///
    /// A bit stays set only if it is also set in `other`. Words past the end
    /// of `other` are zeroed, since `other` is implicitly zero there.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, bits};
    ///
    /// let mut a = bits![0, 1, 2, 3, 120, 130];
    /// a.and(&bits![0, 1, 2, 120, 121, 130]);
    /// assert_eq!(a, bits![0, 1, 2, 120, 130]);
    /// ```
    pub fn and<B: BitVector + ?Sized>(&mut self, other: &B) {
        let other = other.words();
        let words = self.words_mut();
        let common = words.len().min(other.len());
        for (dst, src) in words.iter_mut().zip(other) {
            *dst &= *src;
        }
        words[common..].fill(0);
    }

    /// Clears every bit that is set in `other`.
    ///
    /// Words past the end of `other` are left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::bits;
    ///
    /// let mut a = bits![0, 1, 2, 3, 120, 130];
    /// a.and_not(&bits![0, 1, 2, 120, 121, 130]);
    /// assert_eq!(a, bits![3]);
    /// ```
    pub fn and_not<B: BitVector + ?Sized>(&mut self, other: &B) {
        for (dst, src) in self.words_mut().iter_mut().zip(other.words()) {
            *dst &= !*src;
        }
    }

    /// Performs a logical **OR** with `other`, growing to its word count.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, bits};
    ///
    /// let mut a = bits![0, 3];
    /// a.or(&bits![1, 121]);
    /// assert_eq!(a.iter().collect::<Vec<_>>(), [0, 1, 3, 121]);
    /// ```
    pub fn or<B: BitVector + ?Sized>(&mut self, other: &B) {
        let other = other.words();
        let words = self.words_mut();
        let common = words.len().min(other.len());
        for (dst, src) in words.iter_mut().zip(other) {
            *dst |= *src;
        }
        extend_exact(words, &other[common..]);
    }

    /// Performs a logical **XOR** with `other`, growing to its word count.
    ///
    /// A bit ends up set if exactly one of the two operands had it set.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::bits;
    ///
    /// let mut a = bits![0, 1, 2, 3, 120, 130];
    /// a.xor(&bits![0, 1, 2, 120, 121, 122, 123, 130]);
    /// assert_eq!(a, bits![3, 121, 122, 123]);
    /// ```
    pub fn xor<B: BitVector + ?Sized>(&mut self, other: &B) {
        let other = other.words();
        let words = self.words_mut();
        let common = words.len().min(other.len());
        for (dst, src) in words.iter_mut().zip(other) {
            *dst ^= *src;
        }
        // XOR with the implicit zeros of `self` is a plain copy.
        extend_exact(words, &other[common..]);
    }

    /// Returns the intersection of `self` and `other` as a new vector.
    #[must_use]
    pub fn intersection<B: BitVector + ?Sized>(&self, other: &B) -> Self {
        let mut result = self.clone();
        result.and(other);
        result
    }

    /// Returns the union of `self` and `other` as a new vector.
    #[must_use]
    pub fn union<B: BitVector + ?Sized>(&self, other: &B) -> Self {
        let mut result = self.clone();
        result.or(other);
        result
    }

    /// Returns the bits of `self` that are not set in `other` as a new
    /// vector.
    #[must_use]
    pub fn difference<B: BitVector + ?Sized>(&self, other: &B) -> Self {
        let mut result = self.clone();
        result.and_not(other);
        result
    }

    /// Returns the symmetric difference of `self` and `other` as a new
    /// vector.
    #[must_use]
    pub fn symmetric_difference<B: BitVector + ?Sized>(&self, other: &B) -> Self {
        let mut result = self.clone();
        result.xor(other);
        result
    }
}
