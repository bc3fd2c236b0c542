//! Iterators over bit vectors.

use alloc::vec::Vec;
use core::{borrow::Borrow, iter::FusedIterator};

use crate::{
    BitVector, BitVectorView, FrozenBitVector, MutableBitVector,
    macros::bitpos,
    storage::{WORD_SHIFT, Word, isolated_offset, lowest_bit},
};

/// A borrowing iterator over the indices of set (or clear) bits.
///
/// Created by [`BitVector::iter`] and [`BitVector::zeros`].
pub type Iter<'a> = BitIter<&'a [Word]>;

/// An owning iterator over the indices of set bits of a
/// [`MutableBitVector`].
pub type IntoIter = BitIter<Vec<Word>>;

/// An iterator over the indices of bits with one polarity, in ascending
/// order.
///
/// Each step isolates the lowest remaining bit of the current word with
/// `word & -word`, so the cost is proportional to the number of yielded bits
/// plus the number of words. The generic parameter `S` lets the iterator
/// borrow or own its words.
///
/// # Examples
///
/// ```
/// use dense_bitvector::{BitVector, bits};
///
/// let bv = bits![5, 10, 15];
/// let mut iter = bv.iter();
/// assert_eq!(iter.len(), 3);
/// assert_eq!(iter.next(), Some(5));
/// assert_eq!(iter.collect::<Vec<_>>(), [10, 15]);
/// ```
#[derive(Clone)]
pub struct BitIter<S: Borrow<[Word]>> {
    words: S,
    flip: Word,
    word_idx: usize,
    word: Word,
    remaining: usize,
}

impl<S: Borrow<[Word]>> BitIter<S> {
    /// Yields set bits when `bit` is `true`, clear bits below the stored
    /// capacity otherwise.
    pub(crate) fn new(words: S, bit: bool) -> Self {
        let flip = if bit { 0 } else { Word::MAX };
        let slice = words.borrow();
        let remaining = slice
            .iter()
            .map(|w| (w ^ flip).count_ones() as usize)
            .sum();
        let word = slice.first().map_or(0, |w| w ^ flip);
        Self {
            words,
            flip,
            word_idx: 0,
            word,
            remaining,
        }
    }
}

impl<S: Borrow<[Word]>> Iterator for BitIter<S> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // `remaining` guarantees another matching bit exists further on.
        let slice = self.words.borrow();
        while self.word == 0 {
            self.word_idx += 1;
            self.word = slice[self.word_idx] ^ self.flip;
        }

        let t = lowest_bit(self.word);
        self.word ^= t;
        self.remaining -= 1;
        Some((self.word_idx << WORD_SHIFT) + isolated_offset(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: Borrow<[Word]>> ExactSizeIterator for BitIter<S> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<S: Borrow<[Word]>> FusedIterator for BitIter<S> {}

/// An iterator that selects elements from another iterator based on set bits
/// in a mask.
///
/// Created by [`BitVector::select`]. Stops at whichever runs out first: the
/// mask's set bits or the underlying iterator.
pub struct SelectIter<'a, I> {
    words: &'a [Word],
    next: usize,
    it: I,
}

impl<'a, I: Iterator> SelectIter<'a, I> {
    pub(crate) fn new(words: &'a [Word], it: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            words,
            next: 0,
            it: it.into_iter(),
        }
    }

    fn next_pos(&mut self) -> Option<usize> {
        let (mut wi, mut bi) = bitpos!(self.next);
        while let Some(&word) = self.words.get(wi) {
            let word = word >> bi;
            if word == 0 {
                wi += 1;
                bi = 0;
                continue;
            }
            let pos = (wi << WORD_SHIFT) + bi as usize + isolated_offset(lowest_bit(word));
            self.next = pos + 1;
            return Some(pos);
        }
        None
    }

    fn popcnt_rem(&self) -> usize {
        let (wi, bi) = bitpos!(self.next);
        self.words
            .iter()
            .skip(wi)
            .enumerate()
            .map(|(i, &w)| {
                let w = if i == 0 { w >> bi } else { w };
                w.count_ones() as usize
            })
            .sum()
    }
}

impl<I: Iterator> Iterator for SelectIter<'_, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let base = self.next;
        if let Some(pos) = self.next_pos()
            && let Some(item) = self.it.nth(pos - base)
        {
            return Some(item);
        }

        self.words = &[];
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (omin, omax) = self.it.size_hint();
        let limit = self.popcnt_rem();
        (omin.min(limit), omax.map(|omax| omax.min(limit)))
    }
}

impl<I: FusedIterator> FusedIterator for SelectIter<'_, I> {}

impl<'a> IntoIterator for &'a MutableBitVector {
    type IntoIter = Iter<'a>;
    type Item = usize;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a FrozenBitVector {
    type IntoIter = Iter<'a>;
    type Item = usize;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for BitVectorView<'a> {
    type IntoIter = Iter<'a>;
    type Item = usize;

    fn into_iter(self) -> Self::IntoIter {
        BitIter::new(self.as_slice(), true)
    }
}

impl IntoIterator for MutableBitVector {
    type IntoIter = IntoIter;
    type Item = usize;

    fn into_iter(self) -> Self::IntoIter {
        BitIter::new(self.into_words(), true)
    }
}

impl FromIterator<usize> for MutableBitVector {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut bv = Self::new();
        bv.extend(iter);
        bv
    }
}

impl Extend<usize> for MutableBitVector {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for bit in iter {
            self.set(bit);
        }
    }
}

impl<'a> Extend<&'a usize> for MutableBitVector {
    fn extend<I: IntoIterator<Item = &'a usize>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
