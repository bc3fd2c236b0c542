macro_rules! bitpos {
    ($idx:expr) => {{
        let idx: usize = $idx;
        (
            idx >> $crate::storage::WORD_SHIFT,
            (idx & ($crate::storage::WORD_BITS - 1)) as u32,
        )
    }};
}

pub(crate) use bitpos;

/// Creates a [`MutableBitVector`](crate::MutableBitVector) with the given bit
/// indices set.
///
/// Indices may repeat and appear in any order.
///
/// # Examples
///
/// ```
/// use dense_bitvector::{BitVector, bits};
///
/// let bv = bits![1, 2, 4, 1230];
/// assert!(bv.get(1230));
/// assert_eq!(bv.cardinality(), 4);
///
/// let empty = bits![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! bits {
    () => {
        $crate::MutableBitVector::new()
    };
    ($($bit:expr),+ $(,)?) => {{
        let mut bv = $crate::MutableBitVector::new();
        $(bv.set($bit);)+
        bv
    }};
}
