//! Recursive NBT decoding.
//!
//! [`read`] decodes a whole document (root tag byte, root name, payload) and
//! rejects trailing bytes. [`read_value`] is the per-tag decoder it is built
//! on: callers that know a payload's tag out of band, such as a root known to
//! be a list, can drive it directly with their own [`Reader`].

use std::sync::Arc;

use crate::{ByteOrder, Compound, Error, List, Reader, Result, Tag, Value, cold_path};

/// A fully decoded NBT document: the root value and its name.
#[derive(Debug)]
pub struct Document {
    name: String,
    root: Arc<Value>,
}

impl Document {
    /// The root tag's name. Empty for most documents in the wild.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Consumes the document, returning a shareable handle to the root.
    pub fn into_root(self) -> Arc<Value> {
        self.root
    }
}

/// Reads an NBT document from a byte slice.
///
/// The slice must contain exactly one document: `[tag][name][payload]`, with
/// the name omitted when the root tag is [`Tag::End`]. Bytes remaining after
/// the root payload are reported as [`Error::TrailingData`].
///
/// # Example
///
/// ```
/// use nbt_tree::{read, BigEndian, Tag};
///
/// // Root list of two shorts, named "s".
/// let data = [
///     0x09, 0x00, 0x01, b's',
///     0x02, 0x00, 0x00, 0x00, 0x02,
///     0x00, 0x01, 0x00, 0x02,
/// ];
/// let doc = read::<BigEndian>(&data).unwrap();
/// assert_eq!(doc.name(), "s");
/// assert_eq!(doc.root().tag(), Tag::List);
/// ```
pub fn read<O: ByteOrder>(source: &[u8]) -> Result<Document> {
    let mut reader = Reader::<O>::new(source);

    let root_byte = reader.get_u8()?;
    let Some(root_tag) = Tag::from_u8(root_byte) else {
        cold_path();
        return Err(Error::InvalidTagType(root_byte, 0));
    };

    let (name, root) = if root_tag == Tag::End {
        cold_path();
        (String::new(), Value::End)
    } else {
        let name = read_string(&mut reader)?;
        (name, read_value(root_tag, &mut reader)?)
    };

    if reader.remaining() != 0 {
        cold_path();
        return Err(Error::TrailingData(reader.remaining()));
    }

    Ok(Document {
        name,
        root: Arc::new(root),
    })
}

/// Decodes one value of kind `tag` from `reader`.
///
/// The reader must be positioned at the start of the value's payload; any
/// preceding tag byte or name belongs to the caller. On success the reader
/// ends positioned exactly past the payload. On error the reader's position
/// is unspecified and it must not be reused.
///
/// Errors raised by nested values propagate unchanged.
pub fn read_value<O: ByteOrder>(tag: Tag, reader: &mut Reader<'_, O>) -> Result<Value> {
    match tag {
        Tag::End => Ok(Value::End),
        Tag::Byte => Ok(Value::Byte(reader.get_i8()?)),
        Tag::Short => Ok(Value::Short(reader.get_i16()?)),
        Tag::Int => Ok(Value::Int(reader.get_i32()?)),
        Tag::Long => Ok(Value::Long(reader.get_i64()?)),
        Tag::Float => Ok(Value::Float(reader.get_f32()?)),
        Tag::Double => Ok(Value::Double(reader.get_f64()?)),
        Tag::ByteArray => {
            let len = reader.get_u32()? as usize;
            let data = reader.get_slice(len)?;
            Ok(Value::ByteArray(data.iter().map(|&b| b as i8).collect()))
        }
        Tag::String => Ok(Value::String(read_string(reader)?)),
        Tag::List => read_list(reader).map(Value::List),
        Tag::Compound => read_compound(reader).map(Value::Compound),
        Tag::IntArray => {
            let len = reader.get_u32()? as usize;
            let mut data = Vec::with_capacity(len.min(reader.remaining() / 4));
            for _ in 0..len {
                data.push(reader.get_i32()?);
            }
            Ok(Value::IntArray(data))
        }
        Tag::LongArray => {
            let len = reader.get_u32()? as usize;
            let mut data = Vec::with_capacity(len.min(reader.remaining() / 8));
            for _ in 0..len {
                data.push(reader.get_i64()?);
            }
            Ok(Value::LongArray(data))
        }
    }
}

/// List body: `[element tag: u8][count: u32][count payloads back-to-back]`.
///
/// The element tag is validated as soon as it is read, so an unrecognized
/// byte fails with `InvalidTagType` even when the count is zero.
fn read_list<O: ByteOrder>(reader: &mut Reader<'_, O>) -> Result<List> {
    let tag_offset = reader.position();
    let tag_byte = reader.get_u8()?;
    let Some(element_tag) = Tag::from_u8(tag_byte) else {
        cold_path();
        return Err(Error::InvalidTagType(tag_byte, tag_offset));
    };

    let count = reader.get_u32()? as usize;

    // Capacity is a hint only. A hostile count is caught by per-element
    // bounds checks, never by pre-validation against the buffer, since
    // element sizes vary by kind.
    let mut elements = Vec::with_capacity(count.min(reader.remaining()));
    for _ in 0..count {
        elements.push(Arc::new(read_value(element_tag, reader)?));
    }

    Ok(List::new(element_tag, elements))
}

/// Compound body: `[tag: u8][name][payload]` entries, terminated by `End`.
fn read_compound<O: ByteOrder>(reader: &mut Reader<'_, O>) -> Result<Compound> {
    let mut entries = Vec::new();

    loop {
        let tag_offset = reader.position();
        let tag_byte = reader.get_u8()?;
        if tag_byte == Tag::End as u8 {
            break;
        }
        let Some(tag) = Tag::from_u8(tag_byte) else {
            cold_path();
            return Err(Error::InvalidTagType(tag_byte, tag_offset));
        };

        let name = read_string(reader)?;
        let value = read_value(tag, reader)?;
        entries.push((name, Arc::new(value)));
    }

    Ok(Compound::new(entries))
}

/// `[len: u16][len bytes of MUTF-8]`, shared by names and string payloads.
fn read_string<O: ByteOrder>(reader: &mut Reader<'_, O>) -> Result<String> {
    let len = reader.get_u16()? as usize;
    let data = reader.get_slice(len)?;
    Ok(simd_cesu8::mutf8::decode_lossy(data).into_owned())
}
