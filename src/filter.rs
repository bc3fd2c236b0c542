//! Selecting slice elements through a bit mask.

use alloc::vec::Vec;
use core::ops::ControlFlow;

use crate::BitVector;

/// Extension methods filtering a slice by a bit mask.
///
/// Bit `i` of the mask selects element `offset + i` of the slice. Filtering
/// stops at the end of the slice; mask bits pointing past it are ignored.
///
/// # Examples
///
/// ```
/// use dense_bitvector::{MaskFilter, bits};
///
/// let items = ["a", "b", "c", "d", "e"];
/// let mask = bits![0, 2, 7];
///
/// assert_eq!(items.filter_with(&mask, 0), ["a", "c"]);
/// assert_eq!(items.filter_with(&mask, 1), ["b", "d"]);
/// assert_eq!(items.filter_with_not(&mask, 0), ["b", "d", "e"]);
/// ```
pub trait MaskFilter<T> {
    /// Returns the elements whose mask bit is set, in order.
    fn filter_with<B: BitVector + ?Sized>(&self, mask: &B, offset: usize) -> Vec<T>
    where
        T: Clone;

    /// Returns the elements whose mask bit is clear, in order.
    ///
    /// Only positions covered by the mask's stored words are considered.
    fn filter_with_not<B: BitVector + ?Sized>(&self, mask: &B, offset: usize) -> Vec<T>
    where
        T: Clone;

    /// Maps the elements whose mask bit is set, in order.
    fn filter_and_map<B: BitVector + ?Sized, R>(
        &self,
        mask: &B,
        f: impl FnMut(&T) -> R,
    ) -> Vec<R>;
}

impl<T> MaskFilter<T> for [T] {
    fn filter_with<B: BitVector + ?Sized>(&self, mask: &B, offset: usize) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(mask.cardinality().min(self.len()));
        let _ = mask.for_each_bit_breakable(true, |bit| {
            match offset.checked_add(bit).and_then(|i| self.get(i)) {
                Some(item) => {
                    out.push(item.clone());
                    ControlFlow::Continue(())
                }
                None => ControlFlow::Break(()),
            }
        });
        out
    }

    fn filter_with_not<B: BitVector + ?Sized>(&self, mask: &B, offset: usize) -> Vec<T>
    where
        T: Clone,
    {
        let zeros = mask.capacity() - mask.cardinality();
        let mut out = Vec::with_capacity(zeros.min(self.len()));
        let _ = mask.for_each_bit_breakable(false, |bit| {
            match offset.checked_add(bit).and_then(|i| self.get(i)) {
                Some(item) => {
                    out.push(item.clone());
                    ControlFlow::Continue(())
                }
                None => ControlFlow::Break(()),
            }
        });
        out
    }

    fn filter_and_map<B: BitVector + ?Sized, R>(
        &self,
        mask: &B,
        mut f: impl FnMut(&T) -> R,
    ) -> Vec<R> {
        let mut out = Vec::with_capacity(mask.cardinality().min(self.len()));
        for bit in mask.iter() {
            let Some(item) = self.get(bit) else {
                break;
            };
            out.push(f(item));
        }
        out
    }
}
