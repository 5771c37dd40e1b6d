//! Error types for NBT decoding.
//!
//! This module contains the [`Error`] type which represents all possible
//! errors that can occur when reading NBT data. Each variant carries the byte
//! offset at which decoding failed, so callers can report where in the input
//! the problem lies.
//!
//! # Example
//!
//! ```
//! use nbt_tree::{read, BigEndian, Result, Error};
//!
//! fn try_parse(data: &[u8]) -> Result<()> {
//!     match read::<BigEndian>(data) {
//!         Ok(_doc) => Ok(()),
//!         Err(Error::EndOfFile(offset)) => {
//!             println!("data truncated at byte {offset}");
//!             Err(Error::EndOfFile(offset))
//!         }
//!         Err(Error::InvalidTagType(tag, offset)) => {
//!             println!("unknown tag type {tag:#04x} at byte {offset}");
//!             Err(Error::InvalidTagType(tag, offset))
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

use std::fmt::{self, Display};

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// This type represents all possible errors that can occur when reading
/// NBT data.
///
/// Decoding has no partial-success mode: a failed read yields exactly one of
/// these errors and no tree. After an error the reader's position is
/// unspecified and it must not be reused.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The input ended unexpectedly.
    ///
    /// A read needed more bytes than remain in the buffer. The payload is
    /// the offset at which the failing read started.
    EndOfFile(usize),

    /// An invalid NBT tag type was encountered.
    ///
    /// NBT defines tag types 0-12. If a byte outside this range is found
    /// where a tag type is expected, this error is returned with the
    /// invalid byte value and its offset.
    InvalidTagType(u8, usize),

    /// Extra bytes remain after parsing the NBT document.
    ///
    /// A document should be consumed completely. If bytes remain after the
    /// root tag ends, this error is returned with the count of remaining
    /// bytes.
    TrailingData(usize),
}

impl Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EndOfFile(offset) => formatter.write_str(&format!(
                "unexpected end of input at offset {offset}"
            )),
            Error::InvalidTagType(tag, offset) => formatter.write_str(&format!(
                "invalid NBT tag type {tag:#04x} at offset {offset}"
            )),
            Error::TrailingData(remaining_bytes) => formatter.write_str(&format!(
                "trailing data after end of document: {remaining_bytes} bytes remaining"
            )),
        }
    }
}

impl std::error::Error for Error {}
