//! Read-only vector kinds and the shared empty vector.

use alloc::{boxed::Box, vec::Vec};

use crate::{BitVector, MutableBitVector, storage::Word};

/// The shared empty bit vector: no words, no allocation.
///
/// To build on it, copy it into a [`MutableBitVector`] first.
///
/// # Examples
///
/// ```
/// use dense_bitvector::{BitVector, EMPTY, MutableBitVector};
///
/// assert!(EMPTY.is_empty());
/// assert_eq!(EMPTY.word_count(), 0);
///
/// let mut bv = MutableBitVector::copy_of(&EMPTY);
/// bv.set(3);
/// assert!(EMPTY.is_empty());
/// ```
pub const EMPTY: BitVectorView<'static> = BitVectorView::new(&[]);

/// A borrowed, read-only view over packed words.
///
/// Views are `Copy` and never allocate. Taking a view of a
/// [`MutableBitVector`] borrows it, so it cannot change while the view is
/// alive.
///
/// # Examples
///
/// ```
/// use dense_bitvector::{BitVector, bits};
///
/// let mask = bits![1, 8, 9];
/// let view = mask.view();
/// assert!(view.get(8));
///
/// let mut other = bits![0, 1, 8, 9, 12];
/// other.and(&view);
/// assert_eq!(other, view);
/// ```
#[derive(Clone, Copy)]
pub struct BitVectorView<'a> {
    words: &'a [Word],
}

impl<'a> BitVectorView<'a> {
    /// Creates a view over `words`, lowest bits first.
    #[must_use]
    pub const fn new(words: &'a [Word]) -> Self {
        Self { words }
    }

    /// Returns the viewed words with the lifetime of the underlying borrow.
    #[must_use]
    pub const fn as_slice(&self) -> &'a [Word] {
        self.words
    }

    /// Copies the viewed words into a new [`MutableBitVector`].
    #[must_use]
    pub fn to_mutable(&self) -> MutableBitVector {
        MutableBitVector::copy_of(self)
    }
}

impl BitVector for BitVectorView<'_> {
    #[inline(always)]
    fn words(&self) -> &[Word] {
        self.words
    }
}

/// An immutable, owned snapshot of a bit vector.
///
/// Created with [`MutableBitVector::snapshot`] (copying) or by converting a
/// [`MutableBitVector`] (moving its words).
///
/// # Examples
///
/// ```
/// use dense_bitvector::{BitVector, FrozenBitVector, bits};
///
/// let mut bv = bits![4, 40];
/// let snapshot = bv.snapshot();
/// bv.set(5);
/// assert!(!snapshot.get(5));
///
/// let frozen = FrozenBitVector::from(bv);
/// assert_eq!(frozen.cardinality(), 3);
/// ```
#[derive(Clone, Default)]
pub struct FrozenBitVector {
    words: Box<[Word]>,
}

impl FrozenBitVector {
    /// Returns a zero-copy view of the snapshot.
    #[must_use]
    pub fn view(&self) -> BitVectorView<'_> {
        BitVectorView::new(&self.words)
    }

    /// Turns the snapshot back into a [`MutableBitVector`] without copying.
    #[must_use]
    pub fn thaw(self) -> MutableBitVector {
        MutableBitVector::from_words(self.words.into_vec())
    }
}

impl BitVector for FrozenBitVector {
    #[inline(always)]
    fn words(&self) -> &[Word] {
        &self.words
    }
}

impl From<&[Word]> for FrozenBitVector {
    fn from(words: &[Word]) -> Self {
        Self {
            words: words.into(),
        }
    }
}

impl From<Vec<Word>> for FrozenBitVector {
    fn from(words: Vec<Word>) -> Self {
        Self {
            words: words.into_boxed_slice(),
        }
    }
}

impl From<MutableBitVector> for FrozenBitVector {
    fn from(bv: MutableBitVector) -> Self {
        Self::from(bv.into_words())
    }
}

impl<'a> From<&'a MutableBitVector> for BitVectorView<'a> {
    fn from(bv: &'a MutableBitVector) -> Self {
        bv.view()
    }
}

impl<'a> From<&'a FrozenBitVector> for BitVectorView<'a> {
    fn from(bv: &'a FrozenBitVector) -> Self {
        bv.view()
    }
}
