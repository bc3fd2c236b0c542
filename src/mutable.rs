//! [`MutableBitVector`], the owning and growable bit vector.

use alloc::{vec, vec::Vec};
use core::ops::RangeBounds;

use crate::{
    BitVector, BitVectorView, FrozenBitVector,
    error::BitVectorError,
    macros::bitpos,
    storage::{
        ALL_ONES, WORD_BITS, Word, checked_bounds, first_word_mask, grow_to_fit, last_word_mask,
        shrink, word_index, words_for,
    },
};

/// An uncompressed, dynamically growable bit set packed into 32-bit words.
///
/// # Overview
///
/// `MutableBitVector` exclusively owns its words. Every mutation and every
/// growth goes through it; read-only access is shared through the
/// [`BitVector`] trait, a borrowing [`BitVectorView`] or an owning
/// [`FrozenBitVector`] snapshot.
///
/// # Validated and unchecked operations
///
/// Operations come in two tiers:
///
/// - **Validated** (`set`, `flip`, `put`, `fill`, `clear`, ...): grow storage
///   as needed and reject malformed ranges with a [`BitVectorError`].
/// - **Unchecked** (`*_unchecked`): write the word directly, without growth
///   or bounds handling. The caller sizes storage first with
///   [`ensure_capacity`](Self::ensure_capacity); addressing an unallocated
///   word panics.
///
/// # Growth
///
/// Storage grows exactly to the highest addressed word and never shrinks on
/// its own; see [`shrink_to_fit`](Self::shrink_to_fit).
///
/// # Examples
///
/// ```
/// use dense_bitvector::{BitVector, MutableBitVector};
///
/// let mut bv = MutableBitVector::new();
/// bv.set(0);
/// bv.set(2);
/// bv.set(49);
/// assert_eq!(bv.word_count(), 2);
///
/// bv.unset(2);
/// assert_eq!(bv.iter().collect::<Vec<_>>(), [0, 49]);
///
/// bv.ensure_capacity(100);
/// bv.set_unchecked(100);
/// assert!(bv.get_unchecked(100));
/// ```
#[derive(Clone)]
pub struct MutableBitVector {
    words: Vec<Word>,
}

impl MutableBitVector {
    /// Creates an empty bit vector holding one zeroed word.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, MutableBitVector};
    ///
    /// let bv = MutableBitVector::new();
    /// assert_eq!(bv.capacity(), 32);
    /// assert_eq!(bv.first_zero_in(5..), Some(5));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(WORD_BITS)
    }

    /// Creates an empty bit vector with storage for at least `bits` bits,
    /// rounded up to a whole word. At least one word is always allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, MutableBitVector};
    ///
    /// let bv = MutableBitVector::with_capacity(33);
    /// assert_eq!(bv.capacity(), 64);
    /// assert!(bv.is_empty());
    ///
    /// assert_eq!(MutableBitVector::with_capacity(0).word_count(), 1);
    /// ```
    #[must_use]
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            words: vec![0; words_for(bits).max(1)],
        }
    }

    /// Wraps raw words, lowest bits first, without copying.
    #[must_use]
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Creates a bit vector holding a copy of the words of `other`.
    ///
    /// This is how a [`BitVectorView`], a [`FrozenBitVector`] or
    /// [`EMPTY`](crate::EMPTY) is turned into something mutable.
    #[must_use]
    pub fn copy_of<B: BitVector + ?Sized>(other: &B) -> Self {
        Self {
            words: other.words().to_vec(),
        }
    }

    /// Returns a zero-copy read-only view of the current words.
    #[must_use]
    pub fn view(&self) -> BitVectorView<'_> {
        BitVectorView::new(&self.words)
    }

    /// Returns an immutable copy of the current words.
    #[must_use]
    pub fn snapshot(&self) -> FrozenBitVector {
        FrozenBitVector::from(self.words.as_slice())
    }

    /// Consumes the bit vector, returning its words.
    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    /// Grows storage so that bit index `bits` is addressable. Mostly useful
    /// ahead of the `*_unchecked` operations.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, MutableBitVector};
    ///
    /// let mut bv = MutableBitVector::new();
    /// bv.ensure_capacity(40);
    /// assert_eq!(bv.word_count(), 2);
    ///
    /// bv.ensure_capacity(3);
    /// assert_eq!(bv.word_count(), 2);
    /// ```
    #[inline]
    pub fn ensure_capacity(&mut self, bits: usize) {
        grow_to_fit(&mut self.words, word_index(bits));
    }

    /// Sets the bit at `index`, growing storage if needed.
    #[inline]
    pub fn set(&mut self, index: usize) {
        let (wi, bi) = bitpos!(index);
        grow_to_fit(&mut self.words, wi);
        self.words[wi] |= 1 << bi;
    }

    /// Clears the bit at `index`. Clearing a bit beyond storage does nothing.
    #[inline]
    pub fn unset(&mut self, index: usize) {
        let (wi, bi) = bitpos!(index);
        if let Some(word) = self.words.get_mut(wi) {
            *word &= !(1 << bi);
        }
    }

    /// Sets the bit at `index` to `value`.
    #[inline]
    pub fn set_value(&mut self, index: usize, value: bool) {
        if value {
            self.set(index);
        } else {
            self.unset(index);
        }
    }

    /// Complements the bit at `index`, growing storage if needed.
    #[inline]
    pub fn flip(&mut self, index: usize) {
        let (wi, bi) = bitpos!(index);
        grow_to_fit(&mut self.words, wi);
        self.words[wi] ^= 1 << bi;
    }

    /// Sets the bit at `index` to `value` and returns its previous value.
    ///
    /// Storage grows to cover `index` whatever `value` is.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, MutableBitVector};
    ///
    /// let mut bv = MutableBitVector::new();
    /// assert!(!bv.put(10, true));
    /// assert!(bv.put(10, false));
    /// assert!(!bv.put(500, false));
    /// assert_eq!(bv.word_count(), 16);
    /// ```
    pub fn put(&mut self, index: usize, value: bool) -> bool {
        let (wi, bi) = bitpos!(index);
        grow_to_fit(&mut self.words, wi);

        let word = &mut self.words[wi];
        let mask: Word = 1 << bi;
        let prev = *word;
        if value {
            *word = prev | mask;
        } else {
            *word = prev & !mask;
        }
        prev & mask != 0
    }

    /// Sets the bit at `index` without growing storage.
    ///
    /// # Panics
    ///
    /// Panics if `index` is at or beyond [`capacity`](BitVector::capacity).
    #[inline(always)]
    pub fn set_unchecked(&mut self, index: usize) {
        let (wi, bi) = bitpos!(index);
        self.words[wi] |= 1 << bi;
    }

    /// Clears the bit at `index` without checking storage.
    ///
    /// # Panics
    ///
    /// Panics if `index` is at or beyond [`capacity`](BitVector::capacity).
    #[inline(always)]
    pub fn unset_unchecked(&mut self, index: usize) {
        let (wi, bi) = bitpos!(index);
        self.words[wi] &= !(1 << bi);
    }

    /// Sets the bit at `index` to `value` without growing storage.
    ///
    /// # Panics
    ///
    /// Panics if `index` is at or beyond [`capacity`](BitVector::capacity).
    #[inline(always)]
    pub fn set_value_unchecked(&mut self, index: usize, value: bool) {
        if value {
            self.set_unchecked(index);
        } else {
            self.unset_unchecked(index);
        }
    }

    /// Complements the bit at `index` without growing storage.
    ///
    /// # Panics
    ///
    /// Panics if `index` is at or beyond [`capacity`](BitVector::capacity).
    #[inline(always)]
    pub fn flip_unchecked(&mut self, index: usize) {
        let (wi, bi) = bitpos!(index);
        self.words[wi] ^= 1 << bi;
    }

    /// Sets the bit at `index` without growing storage and returns its
    /// previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is at or beyond [`capacity`](BitVector::capacity).
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::MutableBitVector;
    ///
    /// let mut bv = MutableBitVector::with_capacity(64);
    /// assert!(!bv.get_and_set_unchecked(7));
    /// assert!(bv.get_and_set_unchecked(7));
    /// ```
    #[inline(always)]
    pub fn get_and_set_unchecked(&mut self, index: usize) -> bool {
        let (wi, bi) = bitpos!(index);
        let mask: Word = 1 << bi;
        let word = &mut self.words[wi];
        let prev = *word;
        *word = prev | mask;
        prev & mask != 0
    }

    /// Clears the bit at `index` without checking storage and returns its
    /// previous value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is at or beyond [`capacity`](BitVector::capacity).
    #[inline(always)]
    pub fn get_and_unset_unchecked(&mut self, index: usize) -> bool {
        let (wi, bi) = bitpos!(index);
        let mask: Word = 1 << bi;
        let word = &mut self.words[wi];
        let prev = *word;
        *word = prev & !mask;
        prev & mask != 0
    }

    /// Sets every bit in `range`, growing storage to cover it.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidRange`] if the range ends before it
    /// starts, and [`BitVectorError::UnboundedRange`] if it has no end.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, bits};
    ///
    /// let mut bv = bits![96];
    /// bv.fill(2..=2)?;
    /// assert_eq!(bv.iter().collect::<Vec<_>>(), [2, 96]);
    ///
    /// bv.fill(30..40)?;
    /// assert_eq!(bv.cardinality(), 12);
    /// # Ok::<(), dense_bitvector::BitVectorError>(())
    /// ```
    pub fn fill(&mut self, range: impl RangeBounds<usize>) -> Result<(), BitVectorError> {
        let (from, to) = checked_bounds(&range, None)?;
        if from == to {
            return Ok(());
        }

        let start_wi = word_index(from);
        let end_wi = word_index(to - 1);
        grow_to_fit(&mut self.words, end_wi);

        let first_mask = first_word_mask(from);
        let last_mask = last_word_mask(to);
        let words = &mut self.words;
        if start_wi == end_wi {
            words[start_wi] |= first_mask & last_mask;
        } else {
            words[start_wi] |= first_mask;
            words[start_wi + 1..end_wi].fill(ALL_ONES);
            words[end_wi] |= last_mask;
        }
        Ok(())
    }

    /// Clears every bit in `range`.
    ///
    /// Storage never grows. When the range reaches past the stored words, its
    /// end is clamped to the logical [`len`](BitVector::len); an unbounded
    /// end clears through the last stored word.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidRange`] if the range ends before it
    /// starts.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, bits};
    ///
    /// let mut bv = bits![1, 2, 3, 31, 32, 33, 63, 64, 65, 70, 95, 96];
    /// bv.clear(0..=1)?;
    /// bv.clear(4..=32)?;
    /// assert_eq!(
    ///     bv.iter().collect::<Vec<_>>(),
    ///     [2, 3, 33, 63, 64, 65, 70, 95, 96]
    /// );
    ///
    /// bv.clear(64..1000)?;
    /// assert_eq!(bv.last(), Some(63));
    /// # Ok::<(), dense_bitvector::BitVectorError>(())
    /// ```
    pub fn clear(&mut self, range: impl RangeBounds<usize>) -> Result<(), BitVectorError> {
        let (from, mut to) = checked_bounds(&range, Some(self.capacity()))?;
        if from == to {
            return Ok(());
        }

        let words_in_use = self.words.len();
        let start_wi = word_index(from);
        if start_wi >= words_in_use {
            return Ok(());
        }
        let mut end_wi = word_index(to - 1);
        if end_wi >= words_in_use {
            to = self.len();
            end_wi = words_in_use - 1;
        }

        let first_mask = first_word_mask(from);
        let last_mask = last_word_mask(to);
        let words = &mut self.words;
        if start_wi == end_wi {
            words[start_wi] &= !(first_mask & last_mask);
        } else {
            words[start_wi] &= !first_mask;
            words[start_wi + 1..end_wi].fill(0);
            words[end_wi] &= !last_mask;
        }
        Ok(())
    }

    /// Clears every bit, keeping the storage.
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// Complements every bit strictly below `nbits`, growing storage to cover
    /// them. Bits at or above `nbits` are left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, bits};
    ///
    /// let mut bv = bits![1, 2, 4];
    /// bv.invert(7);
    /// assert_eq!(bv.iter().collect::<Vec<_>>(), [0, 2, 3, 5, 6]);
    /// ```
    pub fn invert(&mut self, nbits: usize) {
        if nbits == 0 {
            return;
        }
        grow_to_fit(&mut self.words, word_index(nbits - 1));

        let full = nbits / WORD_BITS;
        for word in &mut self.words[..full] {
            *word = !*word;
        }
        if nbits % WORD_BITS != 0 {
            self.words[full] ^= last_word_mask(nbits);
        }
    }

    /// Drops trailing zero words and releases unused memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, bits};
    ///
    /// let mut bv = bits![3, 300];
    /// bv.unset(300);
    /// bv.shrink_to_fit();
    /// assert_eq!(bv.word_count(), 1);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        shrink(&mut self.words);
    }

    /// Mutable access to the words for the in-place set operations.
    #[inline(always)]
    pub(crate) fn words_mut(&mut self) -> &mut Vec<Word> {
        &mut self.words
    }
}

impl Default for MutableBitVector {
    fn default() -> Self {
        Self::new()
    }
}

impl BitVector for MutableBitVector {
    #[inline(always)]
    fn words(&self) -> &[Word] {
        &self.words
    }
}
