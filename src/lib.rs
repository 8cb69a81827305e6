//! A fixed-capacity bitset packed into 64-bit words.
//!
//! The number of bits is chosen at runtime but never changes afterwards.
//! Bits live in a `Vec<u64>` whose *last* word holds bits `0..64`, so the
//! words read most-significant first, just like the bitset's [`Display`]
//! form.
//!
//! [`Bitset`] is the main struct in this library. Its [features](#features)
//! are listed below.
//!
//! # Examples
//! ```
//! use word_bitset::Bitset;
//!
//! let mut bitset = Bitset::new(10)?;
//! assert_eq!(bitset.popcount(), 0);
//! assert!(!bitset.get(3)?);
//! bitset.set(3, true)?;
//! assert!(bitset.get(3)?);
//! assert_eq!(bitset.popcount(), 1);
//! assert_eq!(bitset.to_string(), "[0000001000]");
//! # Ok::<(), word_bitset::Error>(())
//! ```
//!
//! # Features
//!
//! - `no_std` + `alloc` compatible (disable the default `std` feature)
//! - Bounds-checked access returning [`Result`] instead of panicking
//! - Scans: `popcount`, `clz`, `ctz`, `find_first`, `find_last`, `find_next`
//! - Iteration over all, set or unset bits:
//!   - `iter()` (all bits as bools)
//!   - `iter_ones()` (indices of set bits)
//!   - `iter_zeros()` (indices of unset bits)
//! - Bitwise ops between bitsets of *different* sizes, aligned at bit 0:
//!   - `and_assign`, `or_assign`, `xor_assign`, `not_assign`
//!   - `&`, `|`, `^`, `!`, `&=`, `|=`, `^=`
//!
//! [`Display`]: core::fmt::Display

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitset;
mod error;

pub use bitset::{Bitset, BitsetIter, IterOnes, IterZeros, WORD_BITS};
pub use error::{Error, Result};
