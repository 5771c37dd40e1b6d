//! Decoder for the NBT (Named Binary Tag) binary format.
//!
//! This crate parses an NBT document from a byte slice into an owned tree of
//! [`Value`] nodes. Composite values hold their children behind [`Arc`]
//! handles, so consumers can keep references into subtrees alive independently
//! of the rest of the tree.
//!
//! # Quick Start
//!
//! ```
//! use nbt_tree::{read, Value, BigEndian};
//!
//! // Compound { "answer": Int(42) }
//! let data = [
//!     0x0A, 0x00, 0x00, // root compound, empty name
//!     0x03, 0x00, 0x06, b'a', b'n', b's', b'w', b'e', b'r',
//!     0x00, 0x00, 0x00, 0x2A,
//!     0x00, // End
//! ];
//!
//! let doc = read::<BigEndian>(&data).unwrap();
//! assert_eq!(doc.root().get("answer").and_then(Value::as_i32), Some(42));
//! ```
//!
//! [`Arc`]: std::sync::Arc

pub use zerocopy::BigEndian;
pub use zerocopy::LittleEndian;

mod error;
mod index;
mod read;
mod reader;
mod tag;
mod util;
mod value;

pub use error::*;
pub use index::*;
pub use read::*;
pub use reader::*;
pub use tag::*;
pub use util::*;
pub use value::*;
