//! A growable bit vector packed into 32-bit words.
//!
//! This crate provides [`MutableBitVector`], an uncompressed bit set in the
//! spirit of `java.util.BitSet`, tuned for dense masks such as component
//! membership in an entity-component system. Bits live in a `Vec<u32>`; every
//! bit past the stored words reads as zero.
//!
//! # Features
//!
//! - **Fast enumeration** of set bits through lowest-set-bit isolation
//!   (`word & -word`), via [`BitVector::iter`] or the callback form
//!   [`BitVector::for_each_bit`]
//! - **Range operations** [`fill`](MutableBitVector::fill),
//!   [`clear`](MutableBitVector::clear) and
//!   [`invert`](MutableBitVector::invert) that touch boundary words with a
//!   single mask and interior words whole
//! - **In-place set algebra**: [`and`](MutableBitVector::and),
//!   [`or`](MutableBitVector::or), [`xor`](MutableBitVector::xor),
//!   [`and_not`](MutableBitVector::and_not), plus
//!   [`intersects`](BitVector::intersects) and
//!   [`contains`](BitVector::contains)
//! - **Read-only capability** through the [`BitVector`] trait, a zero-copy
//!   [`BitVectorView`] and an owned [`FrozenBitVector`] snapshot
//! - **Unchecked fast paths** (`*_unchecked`) for callers that size storage
//!   up front with [`ensure_capacity`](MutableBitVector::ensure_capacity)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use dense_bitvector::{BitVector, MutableBitVector, bits};
//!
//! let mut bv = MutableBitVector::new();
//! bv.set(1);
//! bv.set(2);
//! bv.set(1230);
//! assert!(bv.get(1230));
//! assert_eq!(bv.cardinality(), 3);
//!
//! // Range operations validate their bounds.
//! bv.fill(64..96)?;
//! bv.clear(1000..)?;
//! assert_eq!(bv.last(), Some(95));
//!
//! // Set algebra works against any vector kind.
//! let mask = bits![2, 64, 500];
//! bv.and(&mask.view());
//! assert_eq!(bv.iter().collect::<Vec<_>>(), [2, 64]);
//! # Ok::<(), dense_bitvector::BitVectorError>(())
//! ```
//!
//! # Logging
//!
//! Storage growth is reported at `trace` level and explicit shrinking at
//! `debug` level through the [`log`] facade. No logger is installed by the
//! crate.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod filter;
mod iter;
mod macros;
mod mutable;
mod set_ops;
mod traits;
mod vector;
mod view;

pub mod bytemask;
pub mod storage;

// Re-exports
pub use error::{BitVectorError, ParseBitVectorError};
pub use filter::MaskFilter;
pub use iter::{BitIter, IntoIter, Iter, SelectIter};
pub use mutable::MutableBitVector;
pub use storage::{WORD_BITS, Word};
pub use vector::BitVector;
pub use view::{BitVectorView, EMPTY, FrozenBitVector};
