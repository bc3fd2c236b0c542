//! Trait implementations for the bit vector kinds.

use alloc::vec::Vec;
use core::{
    fmt,
    hash::{Hash, Hasher},
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign,
    },
    str::FromStr,
};

use crate::{
    BitVector, BitVectorView, FrozenBitVector, MutableBitVector, error::ParseBitVectorError,
    storage::Word,
};

/// Writes the set bits as `[1, 2, 4]`.
fn fmt_bits<B: BitVector + ?Sized>(bv: &B, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("[")?;
    let mut first = true;
    for bit in bv.iter() {
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        write!(f, "{bit}")?;
    }
    f.write_str("]")
}

macro_rules! impl_bit_vector_traits {
    ($($ty:ty),+ $(,)?) => {$(
        impl<B: BitVector + ?Sized> PartialEq<B> for $ty {
            /// Two vectors are equal when they have the same set bits,
            /// regardless of how many trailing zero words each stores.
            fn eq(&self, other: &B) -> bool {
                self.eq_bits(other)
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.hash_words(state);
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_bits(self, f)
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_set().entries(self.iter()).finish()
            }
        }

        impl AsRef<[Word]> for $ty {
            fn as_ref(&self) -> &[Word] {
                self.words()
            }
        }
    )+};
}

impl_bit_vector_traits!(MutableBitVector, FrozenBitVector, BitVectorView<'_>);

impl FromStr for MutableBitVector {
    type Err = ParseBitVectorError;

    /// Parses the [`Display`](fmt::Display) form, a bracketed list of bit
    /// indices such as `[1, 2, 4]`. Indices may repeat and appear in any
    /// order.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseBitVectorError`] if the brackets are missing or an
    /// element is not a non-negative integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, MutableBitVector};
    ///
    /// let bv: MutableBitVector = "[1, 2, 4]".parse()?;
    /// assert!(bv.get(4));
    /// assert_eq!(bv.to_string(), "[1, 2, 4]");
    ///
    /// assert!("[]".parse::<MutableBitVector>()?.is_empty());
    /// assert!("[1, -2]".parse::<MutableBitVector>().is_err());
    /// # Ok::<(), dense_bitvector::ParseBitVectorError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or(ParseBitVectorError::MissingBrackets)?
            .trim();

        let mut bv = Self::new();
        if inner.is_empty() {
            return Ok(bv);
        }
        for (pos, token) in inner.split(',').enumerate() {
            let token = token.trim();
            let bit = token
                .parse::<usize>()
                .map_err(|_| ParseBitVectorError::InvalidIndex {
                    token: token.into(),
                    pos,
                })?;
            bv.set(bit);
        }
        Ok(bv)
    }
}

impl From<Vec<Word>> for MutableBitVector {
    fn from(words: Vec<Word>) -> Self {
        Self::from_words(words)
    }
}

impl From<&[Word]> for MutableBitVector {
    fn from(words: &[Word]) -> Self {
        Self::from_words(words.to_vec())
    }
}

impl<const N: usize> From<[Word; N]> for MutableBitVector {
    fn from(words: [Word; N]) -> Self {
        Self::from_words(words.to_vec())
    }
}

impl From<BitVectorView<'_>> for MutableBitVector {
    fn from(view: BitVectorView<'_>) -> Self {
        view.to_mutable()
    }
}

impl From<FrozenBitVector> for MutableBitVector {
    fn from(frozen: FrozenBitVector) -> Self {
        frozen.thaw()
    }
}

impl From<MutableBitVector> for Vec<Word> {
    fn from(bv: MutableBitVector) -> Self {
        bv.into_words()
    }
}

// ============================================================================
// Bitwise Operator Implementations
// ============================================================================

impl<B: BitVector + ?Sized> BitAndAssign<&B> for MutableBitVector {
    /// In-place [`and`](MutableBitVector::and).
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::bits;
    ///
    /// let mut a = bits![0, 1];
    /// a &= &bits![1, 2];
    /// assert_eq!(a, bits![1]);
    /// ```
    #[inline]
    fn bitand_assign(&mut self, rhs: &B) {
        self.and(rhs);
    }
}

impl<B: BitVector + ?Sized> BitOrAssign<&B> for MutableBitVector {
    /// In-place [`or`](MutableBitVector::or).
    #[inline]
    fn bitor_assign(&mut self, rhs: &B) {
        self.or(rhs);
    }
}

impl<B: BitVector + ?Sized> BitXorAssign<&B> for MutableBitVector {
    /// In-place [`xor`](MutableBitVector::xor).
    #[inline]
    fn bitxor_assign(&mut self, rhs: &B) {
        self.xor(rhs);
    }
}

impl<B: BitVector + ?Sized> SubAssign<&B> for MutableBitVector {
    /// In-place [`and_not`](MutableBitVector::and_not).
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::bits;
    ///
    /// let mut a = bits![0, 1, 2];
    /// a -= &bits![1];
    /// assert_eq!(a, bits![0, 2]);
    /// ```
    #[inline]
    fn sub_assign(&mut self, rhs: &B) {
        self.and_not(rhs);
    }
}

impl<B: BitVector + ?Sized> BitAnd<&B> for &MutableBitVector {
    type Output = MutableBitVector;

    #[inline]
    fn bitand(self, rhs: &B) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<B: BitVector + ?Sized> BitOr<&B> for &MutableBitVector {
    type Output = MutableBitVector;

    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::bits;
    ///
    /// let a = bits![0, 64];
    /// let b = bits![1];
    /// assert_eq!(&a | &b, bits![0, 1, 64]);
    /// ```
    #[inline]
    fn bitor(self, rhs: &B) -> Self::Output {
        self.union(rhs)
    }
}

impl<B: BitVector + ?Sized> BitXor<&B> for &MutableBitVector {
    type Output = MutableBitVector;

    #[inline]
    fn bitxor(self, rhs: &B) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<B: BitVector + ?Sized> Sub<&B> for &MutableBitVector {
    type Output = MutableBitVector;

    #[inline]
    fn sub(self, rhs: &B) -> Self::Output {
        self.difference(rhs)
    }
}
