use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Display, Formatter};
use core::iter::FusedIterator;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Number of bits stored per word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// The main type that stores the information.
///
/// Holds a fixed number of bits chosen at construction (see [`new`]). Bits
/// are packed into `u64` words, most-significant word first: bit 0 is the
/// lowest bit of the *last* word. Unused high bits of the first word are
/// padding and always stay unset.
///
/// [`new`]: Bitset::new
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct Bitset {
    bit_count: usize,
    prefix_size: usize,
    words: Vec<u64>,
}

impl Bitset {
    /// Creates a new bitset of `bit_count` bits, all unset.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBitCount`] if `bit_count == 0`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::{Bitset, Error};
    ///
    /// let bitset = Bitset::new(100)?;
    /// assert_eq!(bitset.popcount(), 0);
    /// assert_eq!(bitset.word_count(), 2);
    /// assert_eq!(Bitset::new(0), Err(Error::InvalidBitCount));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(bit_count: usize) -> Result<Self> {
        if bit_count == 0 {
            debug!("rejected bitset with zero bits");
            return Err(Error::InvalidBitCount);
        }
        let size = bit_count.div_ceil(WORD_BITS);
        let prefix_size = (WORD_BITS - bit_count % WORD_BITS) % WORD_BITS;
        trace!(bit_count, words = size, prefix_size, "allocated bitset");
        Ok(Self {
            bit_count,
            prefix_size,
            words: vec![0; size],
        })
    }

    /// Creates a new bitset of `bit_count` bits, all set.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBitCount`] if `bit_count == 0`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let bitset = Bitset::with_all_set(70)?;
    /// assert_eq!(bitset.popcount(), 70);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    pub fn with_all_set(bit_count: usize) -> Result<Self> {
        let mut bitset = Self::new(bit_count)?;
        bitset.words.fill(!0);
        bitset.clean_unused_bits();
        Ok(bitset)
    }

    /// Constructs a bitset from a boolean slice, where `true` means set.
    ///
    /// `bits[0]` becomes bit 0 and the bit count is `bits.len()`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBitCount`] if the slice is empty.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let bitset = Bitset::from_slice(&[true, false, true, false])?;
    /// assert_eq!(bitset.to_string(), "[0101]");
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    pub fn from_slice(bits: &[bool]) -> Result<Self> {
        let mut bitset = Self::new(bits.len())?;
        for (idx, bit) in bits.iter().enumerate() {
            if *bit {
                let (word_idx, bit_idx) = bitset.idxs(idx);
                bitset.words[word_idx] |= 1 << bit_idx;
            }
        }
        Ok(bitset)
    }

    /// Constructs a bitset by setting only the indices provided in the
    /// iterator.
    ///
    /// All unspecified indices are left unset.
    ///
    /// # Errors
    /// Returns [`Error::InvalidBitCount`] if `bit_count == 0` and
    /// [`Error::IndexOutOfBounds`] for the first index `>= bit_count`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let bitset = Bitset::from_ones_iter(5, [0, 2, 4])?;
    /// assert!(bitset.get(0)?);
    /// assert!(!bitset.get(1)?);
    /// assert_eq!(bitset.popcount(), 3);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    pub fn from_ones_iter<I: IntoIterator<Item = usize>>(bit_count: usize, iter: I) -> Result<Self> {
        let mut bitset = Self::new(bit_count)?;
        for idx in iter {
            bitset.set(idx, true)?;
        }
        Ok(bitset)
    }

    /// Returns the number of addressable bits.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Returns the number of `u64` words backing the bitset.
    #[inline]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the raw words, most-significant word first.
    ///
    /// The last word holds bits `0..64`. Padding bits at the top of the
    /// first word are always zero.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let bitset = Bitset::from_ones_iter(70, [0, 64, 69])?;
    /// assert_eq!(bitset.as_words(), &[0b100001, 1]);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    #[inline]
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Sets the bit at the given index to `bit`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `idx >= bit_count`. The bitset
    /// is left untouched in that case.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let mut bitset = Bitset::new(8)?;
    /// bitset.set(3, true)?;
    /// assert!(bitset.get(3)?);
    /// bitset.set(3, false)?;
    /// assert!(!bitset.get(3)?);
    /// assert!(bitset.set(8, true).is_err());
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    #[inline]
    pub fn set(&mut self, idx: usize, bit: bool) -> Result<()> {
        self.check_index(idx)?;
        let (word_idx, bit_idx) = self.idxs(idx);
        if bit {
            self.words[word_idx] |= 1 << bit_idx;
        } else {
            self.words[word_idx] &= !(1 << bit_idx);
        }
        Ok(())
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `idx >= bit_count`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let bitset = Bitset::from_ones_iter(8, [1])?;
    /// assert!(bitset.get(1)?);
    /// assert!(!bitset.get(0)?);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    #[inline]
    pub fn get(&self, idx: usize) -> Result<bool> {
        self.check_index(idx)?;
        let (word_idx, bit_idx) = self.idxs(idx);
        Ok(self.words[word_idx] >> bit_idx & 1 != 0)
    }

    /// Toggles the bit at the given index.
    ///
    /// Returns the previous value of the bit (before the toggle).
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `idx >= bit_count`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let mut bitset = Bitset::new(8)?;
    /// assert_eq!(bitset.toggle(4)?, false); // flipped from false to true
    /// assert_eq!(bitset.toggle(4)?, true); // flipped from true to false
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    #[inline]
    pub fn toggle(&mut self, idx: usize) -> Result<bool> {
        self.check_index(idx)?;
        let (word_idx, bit_idx) = self.idxs(idx);
        let bit = self.words[word_idx] >> bit_idx & 1 != 0;
        self.words[word_idx] ^= 1 << bit_idx;
        Ok(bit)
    }

    /// Unsets every bit.
    #[inline]
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    #[inline]
    fn check_index(&self, idx: usize) -> Result<()> {
        if idx < self.bit_count {
            return Ok(());
        }
        debug!(index = idx, bit_count = self.bit_count, "bit index out of bounds");
        Err(Error::IndexOutOfBounds {
            index: idx,
            bit_count: self.bit_count,
        })
    }

    /// Maps a logical bit index to `(word index, bit within word)`.
    #[inline]
    fn idxs(&self, idx: usize) -> (usize, usize) {
        (self.words.len() - 1 - idx / WORD_BITS, idx % WORD_BITS)
    }

    /// Returns an iterator over all bits as `bool`, from least to most
    /// significant.
    ///
    /// The iterator yields exactly `bit_count` items in order.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let bitset = Bitset::from_slice(&[true, false, true, false])?;
    /// let bits: Vec<bool> = bitset.iter().collect();
    /// assert_eq!(bits, [true, false, true, false]);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    #[inline]
    pub fn iter(&self) -> BitsetIter<'_> {
        BitsetIter {
            bitset: self,
            idx: 0,
        }
    }

    /// Returns an iterator over the indices of all set bits, in ascending
    /// order.
    ///
    /// Iterating through the entire iterator runs in O(max(k, w)) where k is
    /// the number of set bits and w is the number of words.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let bitset = Bitset::from_ones_iter(130, [0, 64, 129])?;
    /// let ones: Vec<usize> = bitset.iter_ones().collect();
    /// assert_eq!(ones, [0, 64, 129]);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_> {
        let (current, words) = split_lowest(&self.words);
        IterOnes {
            words,
            current,
            base_bit_idx: 0,
        }
    }

    /// Returns an iterator over the indices of all unset bits, in ascending
    /// order. Padding bits are never yielded.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let bitset = Bitset::from_slice(&[true, false, true, false, true])?;
    /// let zeros: Vec<usize> = bitset.iter_zeros().collect();
    /// assert_eq!(zeros, [1, 3]);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    #[inline]
    pub fn iter_zeros(&self) -> IterZeros<'_> {
        let (current, words) = split_lowest(&self.words);
        IterZeros {
            words,
            current: !current,
            base_bit_idx: 0,
            bit_count: self.bit_count,
        }
    }

    /// Returns the number of set bits in the bitset.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let bitset = Bitset::from_slice(&[true, false, true, false])?;
    /// assert_eq!(bitset.popcount(), 2);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    #[inline]
    pub fn popcount(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Counts the unset bits above the highest set bit.
    ///
    /// Padding bits are not counted, so an empty bitset returns `bit_count`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let mut bitset = Bitset::new(100)?;
    /// assert_eq!(bitset.clz(), 100);
    /// bitset.set(90, true)?;
    /// assert_eq!(bitset.clz(), 9);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    pub fn clz(&self) -> usize {
        let mut n = 0;
        for word in &self.words {
            if *word == 0 {
                n += WORD_BITS;
            } else {
                n += word.leading_zeros() as usize;
                break;
            }
        }
        // padding bits are zero, so they were always counted
        n - self.prefix_size
    }

    /// Counts the unset bits below the lowest set bit.
    ///
    /// An empty bitset returns `bit_count`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let mut bitset = Bitset::new(100)?;
    /// assert_eq!(bitset.ctz(), 100);
    /// bitset.set(70, true)?;
    /// assert_eq!(bitset.ctz(), 70);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    pub fn ctz(&self) -> usize {
        let mut n = 0;
        for word in self.words.iter().rev() {
            if *word == 0 {
                n += WORD_BITS;
            } else {
                n += word.trailing_zeros() as usize;
                break;
            }
        }
        n.min(self.bit_count)
    }

    /// Returns the index of the lowest set bit or `bit_count` if all bits are
    /// unset.
    ///
    /// Same as [`ctz`](Bitset::ctz).
    #[inline]
    pub fn find_first(&self) -> usize {
        self.ctz()
    }

    /// Returns the index of the highest set bit or `bit_count` if all bits are
    /// unset.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let mut bitset = Bitset::new(10)?;
    /// assert_eq!(bitset.find_last(), 10);
    /// bitset.set(2, true)?;
    /// bitset.set(7, true)?;
    /// assert_eq!(bitset.find_last(), 7);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    pub fn find_last(&self) -> usize {
        match self.clz() {
            clz if clz == self.bit_count => self.bit_count,
            clz => self.bit_count - clz - 1,
        }
    }

    /// Returns the index of the lowest set bit strictly above `idx`, or
    /// `bit_count` if there is none.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `idx >= bit_count`.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let bitset = Bitset::from_ones_iter(10, [2, 5, 9])?;
    /// assert_eq!(bitset.find_next(0)?, 2);
    /// assert_eq!(bitset.find_next(2)?, 5);
    /// assert_eq!(bitset.find_next(5)?, 9);
    /// assert_eq!(bitset.find_next(9)?, 10);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    pub fn find_next(&self, idx: usize) -> Result<usize> {
        self.check_index(idx)?;
        let (word_idx, bit_idx) = self.idxs(idx);

        // remaining bits of the word holding `idx`
        if bit_idx != WORD_BITS - 1 {
            let rest = self.words[word_idx] >> (bit_idx + 1);
            if rest != 0 {
                return Ok(idx + rest.trailing_zeros() as usize + 1);
            }
        }

        let size = self.words.len();
        let next = self.words[..word_idx]
            .iter()
            .enumerate()
            .rev()
            .find(|(_, word)| **word != 0)
            .map_or(self.bit_count, |(i, word)| {
                WORD_BITS * (size - i - 1) + word.trailing_zeros() as usize
            });
        Ok(next)
    }

    /// Returns a new bitset representing the bitwise OR of `self` and `other`.
    ///
    /// The result has the bit count of `self`; see [`or_assign`].
    ///
    /// [`or_assign`]: Bitset::or_assign
    #[inline]
    pub fn bit_or(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.or_assign(other);
        result
    }

    /// Performs an in-place bitwise OR with another bitset.
    ///
    /// Both bitsets are aligned at bit 0. Bits of `self` above `other`'s words
    /// are kept; bits of `other` at or above `self.bit_count()` are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let mut a = Bitset::from_ones_iter(100, [0, 99])?;
    /// let b = Bitset::from_ones_iter(10, [1])?;
    /// a.or_assign(&b);
    /// assert_eq!(a.iter_ones().collect::<Vec<_>>(), [0, 1, 99]);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    pub fn or_assign(&mut self, other: &Self) {
        for (self_word, other_word) in self.words.iter_mut().rev().zip(other.words.iter().rev()) {
            *self_word |= other_word;
        }
        self.clean_unused_bits();
    }

    /// Returns a new bitset representing the bitwise AND of `self` and
    /// `other`.
    ///
    /// The result has the bit count of `self`; see [`and_assign`].
    ///
    /// [`and_assign`]: Bitset::and_assign
    #[inline]
    pub fn bit_and(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.and_assign(other);
        result
    }

    /// Performs an in-place bitwise AND with another bitset.
    ///
    /// Both bitsets are aligned at bit 0. Words of `self` beyond the length of
    /// `other` are cleared, as if `other` were zero-extended.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let mut a = Bitset::from_ones_iter(100, [3, 4, 99])?;
    /// let b = Bitset::from_ones_iter(10, [4, 5])?;
    /// a.and_assign(&b);
    /// assert_eq!(a.iter_ones().collect::<Vec<_>>(), [4]);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    pub fn and_assign(&mut self, other: &Self) {
        for (self_word, other_word) in self.words.iter_mut().rev().zip(other.words.iter().rev()) {
            *self_word &= other_word;
        }
        let unmatched = self.words.len().saturating_sub(other.words.len());
        self.words[..unmatched].fill(0);
    }

    /// Returns a new bitset representing the bitwise XOR of `self` and
    /// `other`.
    ///
    /// The result has the bit count of `self`; see [`xor_assign`].
    ///
    /// [`xor_assign`]: Bitset::xor_assign
    #[inline]
    pub fn bit_xor(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.xor_assign(other);
        result
    }

    /// Performs an in-place bitwise XOR with another bitset.
    ///
    /// Both bitsets are aligned at bit 0. Bits of `self` above `other`'s words
    /// are kept; bits of `other` at or above `self.bit_count()` are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let mut a = Bitset::from_slice(&[true, true, true, true, false, false, false, false])?;
    /// let b = Bitset::from_slice(&[true, true, false, false, true, true, false, false])?;
    /// a.xor_assign(&b);
    /// assert_eq!(a.to_string(), "[00111100]");
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    pub fn xor_assign(&mut self, other: &Self) {
        for (self_word, other_word) in self.words.iter_mut().rev().zip(other.words.iter().rev()) {
            *self_word ^= other_word;
        }
        self.clean_unused_bits();
    }

    /// Returns a new bitset with each bit inverted (bitwise NOT).
    #[inline]
    pub fn bit_not(&self) -> Self {
        let mut result = self.clone();
        result.not_assign();
        result
    }

    /// Inverts each bit of the bitset in-place (bitwise NOT).
    ///
    /// Padding bits stay unset.
    ///
    /// # Examples
    /// ```
    /// use word_bitset::Bitset;
    ///
    /// let mut a = Bitset::from_slice(&[true, false, true, false])?;
    /// a.not_assign();
    /// assert_eq!(a.to_string(), "[1010]");
    /// assert_eq!(a.popcount(), 2);
    /// # Ok::<(), word_bitset::Error>(())
    /// ```
    pub fn not_assign(&mut self) {
        for word in &mut self.words {
            *word = !*word;
        }
        self.clean_unused_bits();
    }

    #[inline]
    fn clean_unused_bits(&mut self) {
        self.words[0] &= !0u64 >> self.prefix_size;
    }
}

/// Splits off the least-significant word, which is stored last.
#[inline]
fn split_lowest(words: &[u64]) -> (u64, &[u64]) {
    match words.split_last() {
        Some((lowest, rest)) => (*lowest, rest),
        None => (0, words),
    }
}

impl<'bitset> IntoIterator for &'bitset Bitset {
    type Item = bool;
    type IntoIter = BitsetIter<'bitset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the bits most-significant first, e.g. `[0101]` for bits 0 and 2
/// of a 4-bit bitset.
impl Display for Bitset {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str("[")?;
        for (i, word) in self.words.iter().enumerate() {
            let width = if i == 0 {
                WORD_BITS - self.prefix_size
            } else {
                WORD_BITS
            };
            for bit in (0..width).rev() {
                f.write_str(if word >> bit & 1 != 0 { "1" } else { "0" })?;
            }
        }
        f.write_str("]")
    }
}

impl Debug for Bitset {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "LSB -> ")?;
        for (i, bit) in self.iter().enumerate() {
            if i % WORD_BITS == 0 {
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if bit { '1' } else { '0' })?;
            if i % WORD_BITS == WORD_BITS - 1 && i < self.bit_count - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")?;
        Ok(())
    }
}

impl BitAnd for &Bitset {
    type Output = Bitset;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.bit_and(rhs)
    }
}

impl BitAndAssign<&Bitset> for Bitset {
    fn bitand_assign(&mut self, rhs: &Bitset) {
        self.and_assign(rhs)
    }
}

impl BitOr for &Bitset {
    type Output = Bitset;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.bit_or(rhs)
    }
}

impl BitOrAssign<&Bitset> for Bitset {
    fn bitor_assign(&mut self, rhs: &Bitset) {
        self.or_assign(rhs)
    }
}

impl BitXor for &Bitset {
    type Output = Bitset;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.bit_xor(rhs)
    }
}

impl BitXorAssign<&Bitset> for Bitset {
    fn bitxor_assign(&mut self, rhs: &Bitset) {
        self.xor_assign(rhs)
    }
}

impl Not for Bitset {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        self.not_assign();
        self
    }
}

impl Not for &Bitset {
    type Output = Bitset;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}

/// Iterator over all bits in the bitset as `bool` values.
///
/// Yields `true` for set bits and `false` for unset bits, starting from index 0.
///
/// Returned by [`Bitset::iter()`].
#[derive(Clone, Copy)]
pub struct BitsetIter<'bitset> {
    bitset: &'bitset Bitset,
    idx: usize,
}

impl Iterator for BitsetIter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.bitset.bit_count {
            return None;
        }
        let (word_idx, bit_idx) = self.bitset.idxs(self.idx);
        self.idx += 1;
        Some(self.bitset.words[word_idx] >> bit_idx & 1 != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bitset.bit_count.saturating_sub(self.idx);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitsetIter<'_> {}

impl FusedIterator for BitsetIter<'_> {}

/// Iterator over the indices of set bits in the bitset.
///
/// Yields the positions of all bits that are set, in ascending order.
///
/// Returned by [`Bitset::iter_ones()`].
#[derive(Clone, Copy)]
pub struct IterOnes<'bitset> {
    // words not yet loaded, least-significant last
    words: &'bitset [u64],
    current: u64,
    base_bit_idx: usize,
}

impl Iterator for IterOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            let (next, rest) = self.words.split_last()?;
            self.words = rest;
            self.current = *next;
            self.base_bit_idx += WORD_BITS;
        }
        let tz = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1; // unset LSB
        Some(self.base_bit_idx + tz)
    }
}

impl FusedIterator for IterOnes<'_> {}

/// Iterator over the indices of unset bits in the bitset.
///
/// Yields the positions of all bits that are unset, in ascending order.
///
/// Returned by [`Bitset::iter_zeros()`].
#[derive(Clone, Copy)]
pub struct IterZeros<'bitset> {
    words: &'bitset [u64],
    current: u64,
    base_bit_idx: usize,
    bit_count: usize,
}

impl Iterator for IterZeros<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            let (next, rest) = self.words.split_last()?;
            self.words = rest;
            self.current = !*next;
            self.base_bit_idx += WORD_BITS;
        }
        let tz = self.current.trailing_zeros() as usize;
        let idx = self.base_bit_idx + tz;
        if idx >= self.bit_count {
            // only padding is left
            self.current = 0;
            return None;
        }
        self.current &= self.current - 1; // unset LSB
        Some(idx)
    }
}

impl FusedIterator for IterZeros<'_> {}
