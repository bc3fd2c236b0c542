//! The read-only [`BitVector`] capability shared by every vector kind.

use core::{
    hash::Hasher,
    ops::{ControlFlow, RangeBounds},
};

use crate::{
    iter::{BitIter, Iter, SelectIter},
    macros::bitpos,
    storage::{
        WORD_BITS, WORD_SHIFT, Word, bounds, first_word_mask, isolated_offset, lowest_bit, rtrim0,
        word_index,
    },
};

/// Read-only operations over a sequence of packed 32-bit words.
///
/// The words form a conceptually infinite bit sequence: bit `i` lives in word
/// `i / 32` at offset `i % 32`, and every bit past the stored words reads as
/// zero. Implementors only provide [`words`](Self::words); all queries are
/// derived from it.
///
/// Implemented by [`MutableBitVector`](crate::MutableBitVector), the owning
/// [`FrozenBitVector`](crate::FrozenBitVector) snapshot and the borrowing
/// [`BitVectorView`](crate::BitVectorView). None of the methods here mutate
/// or grow storage.
///
/// # Examples
///
/// ```
/// use dense_bitvector::{BitVector, bits};
///
/// let bv = bits![1, 2, 56, 64];
/// assert!(bv.get(56));
/// assert!(!bv.get(3));
/// assert_eq!(bv.first(true), Some(1));
/// assert_eq!(bv.last(), Some(64));
/// assert_eq!(bv.iter().collect::<Vec<_>>(), [1, 2, 56, 64]);
/// ```
pub trait BitVector {
    /// Returns the stored words, lowest bits first.
    fn words(&self) -> &[Word];

    /// Returns the number of stored words.
    #[inline]
    fn word_count(&self) -> usize {
        self.words().len()
    }

    /// Returns the number of bits covered by the stored words.
    #[inline]
    fn capacity(&self) -> usize {
        self.words().len() * WORD_BITS
    }

    /// Returns the stored words without trailing zero words.
    #[inline]
    fn trimmed_words(&self) -> &[Word] {
        rtrim0(self.words())
    }

    /// Returns the value of the bit at `index`.
    ///
    /// Bits beyond the stored words read as `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, bits};
    ///
    /// let bv = bits![0, 2, 49];
    /// assert!(bv.get(49));
    /// assert!(!bv.get(1));
    /// assert!(!bv.get(128));
    /// ```
    #[inline]
    fn get(&self, index: usize) -> bool {
        let (wi, bi) = bitpos!(index);
        self.words().get(wi).is_some_and(|w| (w >> bi) & 1 != 0)
    }

    /// Returns the value of the bit at `index` without checking that its word
    /// is stored.
    ///
    /// # Panics
    ///
    /// Panics if `index` is at or beyond [`capacity`](Self::capacity).
    #[inline]
    fn get_unchecked(&self, index: usize) -> bool {
        let (wi, bi) = bitpos!(index);
        (self.words()[wi] >> bi) & 1 != 0
    }

    /// Returns the number of set bits.
    fn cardinality(&self) -> usize {
        self.words().iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the logical size: one past the highest set bit, or zero when
    /// no bit is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, MutableBitVector, bits};
    ///
    /// assert_eq!(bits![3, 40].len(), 41);
    /// assert_eq!(MutableBitVector::with_capacity(256).len(), 0);
    /// ```
    fn len(&self) -> usize {
        let words = self.words();
        words.iter().rposition(|&w| w != 0).map_or(0, |wi| {
            (wi << WORD_SHIFT) + WORD_BITS - words[wi].leading_zeros() as usize
        })
    }

    /// Returns `true` if no bit is set.
    fn is_empty(&self) -> bool {
        self.words().iter().all(|&w| w == 0)
    }

    /// Visits every bit equal to `bit` in ascending order until `visitor`
    /// breaks.
    ///
    /// Clear bits are only reported up to [`capacity`](Self::capacity); the
    /// implicit zeros past the stored words are not enumerated.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ops::ControlFlow;
    /// use dense_bitvector::{BitVector, bits};
    ///
    /// let bv = bits![3, 9, 27, 81];
    /// let found = bv.for_each_bit_breakable(true, |i| {
    ///     if i > 10 { ControlFlow::Break(i) } else { ControlFlow::Continue(()) }
    /// });
    /// assert_eq!(found, ControlFlow::Break(27));
    /// ```
    fn for_each_bit_breakable<B>(
        &self,
        bit: bool,
        mut visitor: impl FnMut(usize) -> ControlFlow<B>,
    ) -> ControlFlow<B> {
        let flip = if bit { 0 } else { Word::MAX };
        for (wi, &word) in self.words().iter().enumerate() {
            let base = wi << WORD_SHIFT;
            let mut word = word ^ flip;
            while word != 0 {
                let t = lowest_bit(word);
                word ^= t;
                visitor(base + isolated_offset(t))?;
            }
        }
        ControlFlow::Continue(())
    }

    /// Visits every set bit in ascending order.
    ///
    /// Cheaper than driving [`iter`](Self::iter) when the caller consumes
    /// every bit anyway.
    fn for_each_bit(&self, mut f: impl FnMut(usize)) {
        let _ = self.for_each_bit_breakable::<()>(true, |i| {
            f(i);
            ControlFlow::Continue(())
        });
    }

    /// Visits every clear bit below [`capacity`](Self::capacity) in ascending
    /// order.
    fn for_each_zero_bit(&self, mut f: impl FnMut(usize)) {
        let _ = self.for_each_bit_breakable::<()>(false, |i| {
            f(i);
            ControlFlow::Continue(())
        });
    }

    /// Returns the index of the first bit equal to `bit`.
    ///
    /// Searching for a set bit returns [`None`] when the vector is empty.
    /// Searching for a clear bit always succeeds: if every stored bit is set,
    /// the first implicit zero at [`capacity`](Self::capacity) is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, MutableBitVector, bits};
    ///
    /// assert_eq!(bits![].first(true), None);
    /// assert_eq!(bits![].first(false), Some(0));
    ///
    /// let full = MutableBitVector::from(vec![u32::MAX]);
    /// assert_eq!(full.first(false), Some(32));
    /// ```
    fn first(&self, bit: bool) -> Option<usize> {
        let flip = if bit { 0 } else { Word::MAX };
        for (wi, &word) in self.words().iter().enumerate() {
            let word = word ^ flip;
            if word != 0 {
                return Some((wi << WORD_SHIFT) + isolated_offset(lowest_bit(word)));
            }
        }
        if bit { None } else { Some(self.capacity()) }
    }

    /// Returns the index of the first bit equal to `bit` within `range`.
    ///
    /// An unbounded end stops at [`capacity`](Self::capacity). Returns
    /// [`None`] when the range is empty or holds no matching bit. Clear bits
    /// past the stored words count as matches when the range reaches them.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, MutableBitVector};
    ///
    /// let mut bv = MutableBitVector::new();
    /// bv.fill(34..70)?;
    /// bv.unset(60);
    /// bv.unset(61);
    ///
    /// assert_eq!(bv.first_in(60.., true), Some(62));
    /// assert_eq!(bv.first_in(60..62, true), None);
    /// assert_eq!(bv.first_in(34..100, false), Some(60));
    /// assert_eq!(bv.first_in(100..200, false), Some(100));
    /// # Ok::<(), dense_bitvector::BitVectorError>(())
    /// ```
    fn first_in(&self, range: impl RangeBounds<usize>, bit: bool) -> Option<usize> {
        let (start, end) = bounds(&range);
        let end = end.unwrap_or_else(|| self.capacity());
        if start >= end {
            return None;
        }

        let words = self.words();
        let flip = if bit { 0 } else { Word::MAX };
        let word_start = word_index(start);
        let word_end = (word_index(end) + 1).min(words.len());
        for wi in word_start..word_end {
            let mut word = words[wi] ^ flip;
            if wi == word_start {
                word &= first_word_mask(start);
            }
            if word != 0 {
                let idx = (wi << WORD_SHIFT) + isolated_offset(lowest_bit(word));
                return (idx < end).then_some(idx);
            }
        }

        if bit {
            return None;
        }
        // The implicit zeros begin right after the stored words.
        let zeros_start = self.capacity();
        if zeros_start <= start {
            Some(start)
        } else if zeros_start >= end {
            None
        } else {
            Some(zeros_start)
        }
    }

    /// Returns the index of the first clear bit, see [`first`](Self::first).
    #[inline]
    fn first_zero(&self) -> usize {
        self.first(false).unwrap_or_else(|| self.capacity())
    }

    /// Returns the index of the first clear bit within `range`, see
    /// [`first_in`](Self::first_in).
    #[inline]
    fn first_zero_in(&self, range: impl RangeBounds<usize>) -> Option<usize> {
        self.first_in(range, false)
    }

    /// Returns the first set bit, or `default` if the vector is empty.
    #[inline]
    fn first_or(&self, default: usize) -> usize {
        self.first(true).unwrap_or(default)
    }

    /// Returns the index of the highest set bit.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, bits};
    ///
    /// assert_eq!(bits![].last(), None);
    /// assert_eq!(bits![0, 14, 29].last(), Some(29));
    /// assert_eq!(bits![31, 63].last(), Some(63));
    /// ```
    fn last(&self) -> Option<usize> {
        let words = self.words();
        for wi in (0..words.len()).rev() {
            let word = words[wi];
            if word != 0 {
                let bi = WORD_BITS - 1 - word.leading_zeros() as usize;
                return Some((wi << WORD_SHIFT) + bi);
            }
        }
        None
    }

    /// Returns the highest set bit, or `default` if the vector is empty.
    #[inline]
    fn last_or(&self, default: usize) -> usize {
        self.last().unwrap_or(default)
    }

    /// Returns `true` if `other` has at least one set bit that is also set
    /// in `self`.
    fn intersects<B: BitVector + ?Sized>(&self, other: &B) -> bool {
        self.words()
            .iter()
            .zip(other.words())
            .any(|(&a, &b)| a & b != 0)
    }

    /// Returns `true` if `self` is a superset of `other`: every bit set in
    /// `other` is also set in `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, bits};
    ///
    /// let bv = bits![0, 1, 2, 3, 7, 8, 9];
    /// assert!(bv.contains(&bits![1, 8, 9]));
    /// assert!(!bits![1, 8, 9].contains(&bv));
    /// assert!(!bv.contains(&bits![100]));
    /// ```
    fn contains<B: BitVector + ?Sized>(&self, other: &B) -> bool {
        let words = self.words();
        let other = other.words();
        if other.len() > words.len() && other[words.len()..].iter().any(|&w| w != 0) {
            return false;
        }
        words.iter().zip(other).all(|(&a, &b)| a & b == b)
    }

    /// Compares the bits of two vectors, ignoring trailing zero words.
    fn eq_bits<B: BitVector + ?Sized>(&self, other: &B) -> bool {
        let words = self.words();
        let other_words = other.words();
        let common = words.len().min(other_words.len());
        if words[..common] != other_words[..common] {
            return false;
        }
        words.len() == other_words.len() || self.len() == other.len()
    }

    /// Polynomial hash (`hash = 127 * hash + word`) over the words up to the
    /// highest set bit. Vectors that compare equal hash identically no matter
    /// how many trailing zero words they store. The word after the highest
    /// set bit is never folded in, even when [`len`](Self::len) is a multiple
    /// of the word size.
    fn hash_code(&self) -> u32 {
        self.trimmed_words()
            .iter()
            .fold(0u32, |hash, &w| hash.wrapping_mul(127).wrapping_add(w))
    }

    /// Feeds the canonical word prefix to `state`. Used by the [`Hash`]
    /// implementations of the vector kinds.
    ///
    /// [`Hash`]: core::hash::Hash
    fn hash_words<H: Hasher>(&self, state: &mut H) {
        let words = self.trimmed_words();
        state.write_usize(words.len());
        for &w in words {
            state.write_u32(w);
        }
    }

    /// Returns an iterator over the indices of set bits, in ascending order.
    #[inline]
    fn iter(&self) -> Iter<'_> {
        BitIter::new(self.words(), true)
    }

    /// Returns an iterator over the indices of clear bits below
    /// [`capacity`](Self::capacity), in ascending order.
    #[inline]
    fn zeros(&self) -> Iter<'_> {
        BitIter::new(self.words(), false)
    }

    /// Returns an iterator yielding the elements of `iter` whose positions
    /// are set in this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_bitvector::{BitVector, bits};
    ///
    /// let mask = bits![0, 2, 4];
    /// let items = ["a", "b", "c", "d", "e"];
    /// let selected: Vec<_> = mask.select(items).collect();
    /// assert_eq!(selected, ["a", "c", "e"]);
    /// ```
    #[inline]
    fn select<I: IntoIterator>(&self, iter: I) -> SelectIter<'_, I::IntoIter> {
        SelectIter::new(self.trimmed_words(), iter)
    }
}
