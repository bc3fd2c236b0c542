//! Word geometry and growth of the packed word buffer.

use alloc::vec::Vec;
use core::ops::{Bound, RangeBounds};

use crate::error::BitVectorError;

/// The unsigned integer type packing [`WORD_BITS`] consecutive bits.
pub type Word = u32;

/// Number of bits held by one [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// `log2(WORD_BITS)`, the shift turning a bit index into a word index.
pub const WORD_SHIFT: u32 = WORD_BITS.trailing_zeros();

pub(crate) const ALL_ONES: Word = !0;

/// Word index holding bit `idx`.
#[inline(always)]
pub const fn word_index(idx: usize) -> usize {
    idx >> WORD_SHIFT
}

/// Number of words needed to hold `bits` bits.
#[inline(always)]
pub const fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

/// Mask covering bit `from % WORD_BITS` and everything above it.
#[inline(always)]
pub(crate) const fn first_word_mask(from: usize) -> Word {
    ALL_ONES << (from & (WORD_BITS - 1))
}

/// Mask covering the bits strictly below `to % WORD_BITS`; all ones when `to`
/// is word aligned.
#[inline(always)]
pub(crate) const fn last_word_mask(to: usize) -> Word {
    let rem = to & (WORD_BITS - 1);
    if rem == 0 {
        ALL_ONES
    } else {
        ALL_ONES >> (WORD_BITS - rem)
    }
}

/// Isolates the least significant set bit of `word`.
#[inline(always)]
pub(crate) const fn lowest_bit(word: Word) -> Word {
    word & word.wrapping_neg()
}

/// Offset within its word of an isolated bit produced by [`lowest_bit`].
#[inline(always)]
pub(crate) const fn isolated_offset(isolated: Word) -> usize {
    (isolated - 1).count_ones() as usize
}

/// Removes trailing zero words from a slice.
#[inline(always)]
pub(crate) const fn rtrim0(mut slice: &[Word]) -> &[Word] {
    while let [rest @ .., 0] = slice {
        slice = rest;
    }
    slice
}

/// Resolves a range into `(start, end)` with an exclusive end. An unbounded
/// end is reported as `None`.
pub(crate) fn bounds(range: &impl RangeBounds<usize>) -> (usize, Option<usize>) {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => Some(e.saturating_add(1)),
        Bound::Excluded(&e) => Some(e),
        Bound::Unbounded => None,
    };
    (start, end)
}

/// Like [`bounds`], but rejects reversed ranges and substitutes
/// `unbounded_end` for an open end, failing when there is none.
pub(crate) fn checked_bounds(
    range: &impl RangeBounds<usize>,
    unbounded_end: Option<usize>,
) -> Result<(usize, usize), BitVectorError> {
    let (start, end) = bounds(range);
    let end = end
        .or(unbounded_end)
        .ok_or(BitVectorError::UnboundedRange { start })?;
    if end < start {
        return Err(BitVectorError::InvalidRange { start, end });
    }
    Ok((start, end))
}

/// Grows `words` so that `word_idx` is addressable. New words are zeroed and
/// no spare capacity is reserved.
#[inline(always)]
pub(crate) fn grow_to_fit(words: &mut Vec<Word>, word_idx: usize) {
    if word_idx >= words.len() {
        grow_exact(words, word_idx + 1);
    }
}

#[cold]
fn grow_exact(words: &mut Vec<Word>, new_len: usize) {
    log::trace!(
        "growing bit vector storage from {} to {} words",
        words.len(),
        new_len
    );
    words.reserve_exact(new_len - words.len());
    words.resize(new_len, 0);
}

/// Appends `tail` to `words`, growing exactly.
pub(crate) fn extend_exact(words: &mut Vec<Word>, tail: &[Word]) {
    if tail.is_empty() {
        return;
    }
    log::trace!(
        "growing bit vector storage from {} to {} words",
        words.len(),
        words.len() + tail.len()
    );
    words.reserve_exact(tail.len());
    words.extend_from_slice(tail);
}

/// Drops trailing zero words and releases the spare allocation.
pub(crate) fn shrink(words: &mut Vec<Word>) {
    let used = rtrim0(words).len();
    if used < words.len() {
        log::debug!(
            "shrinking bit vector storage from {} to {} words",
            words.len(),
            used
        );
        words.truncate(used);
    }
    words.shrink_to_fit();
}
