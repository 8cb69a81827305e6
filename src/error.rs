use thiserror::Error;

/// Errors returned by fallible [`Bitset`](crate::Bitset) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A bitset was requested with zero bits.
    #[error("bit count must be greater than zero")]
    InvalidBitCount,
    /// An index was not below the bitset's bit count.
    #[error("bit index {index} out of bounds for length {bit_count}")]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Bit count of the bitset that rejected it.
        bit_count: usize,
    },
}

/// Result alias defaulting to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;
