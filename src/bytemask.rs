//! Bit enumeration over raw byte masks.
//!
//! For callers that hold a mask as bytes rather than as a
//! [`BitVector`](crate::BitVector). Bit `i` is bit `i % 8` of byte `i / 8`.

use core::iter::FusedIterator;

/// Calls `body` with the index of every set bit in `mask`, in ascending
/// order.
///
/// # Examples
///
/// ```
/// use dense_bitvector::bytemask;
///
/// let mut seen = Vec::new();
/// bytemask::for_each_bit(&[0b1000_0101, 0, 0b10], |i| seen.push(i));
/// assert_eq!(seen, [0, 2, 7, 17]);
/// ```
pub fn for_each_bit(mask: &[u8], body: impl FnMut(usize)) {
    ByteMaskBits::new(mask).for_each(body);
}

/// An iterator over the indices of set bits in a byte mask.
///
/// # Examples
///
/// ```
/// use dense_bitvector::bytemask::ByteMaskBits;
///
/// let bits: Vec<_> = ByteMaskBits::new(&[0, 0b1_0000]).collect();
/// assert_eq!(bits, [12]);
/// ```
#[derive(Clone)]
pub struct ByteMaskBits<'a> {
    bytes: &'a [u8],
    byte_idx: usize,
    byte: u8,
}

impl<'a> ByteMaskBits<'a> {
    /// Creates an iterator over the set bits of `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            byte_idx: 0,
            byte: bytes.first().copied().unwrap_or(0),
        }
    }
}

impl Iterator for ByteMaskBits<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.byte == 0 {
            self.byte_idx += 1;
            self.byte = *self.bytes.get(self.byte_idx)?;
        }
        let t = self.byte & self.byte.wrapping_neg();
        self.byte ^= t;
        Some((self.byte_idx << 3) + (t - 1).count_ones() as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self
            .bytes
            .get(self.byte_idx + 1..)
            .unwrap_or_default()
            .iter()
            .map(|b| b.count_ones() as usize)
            .sum::<usize>();
        let n = rest + self.byte.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for ByteMaskBits<'_> {}

impl FusedIterator for ByteMaskBits<'_> {}
