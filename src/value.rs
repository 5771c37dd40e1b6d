//! The decoded NBT value tree.

use std::slice;
use std::sync::Arc;

use crate::{Index, Tag};

/// One decoded NBT node.
///
/// Scalar and array variants own their payloads; [`List`] and [`Compound`]
/// hold their children behind [`Arc`] handles, so a consumer can clone a
/// handle to a subtree and keep it alive after dropping the rest of the tree.
///
/// Values are immutable once decoded. Equality is structural.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

/// A homogeneous, ordered sequence of NBT values.
///
/// Every element shares one element tag, discovered when the list header was
/// decoded. Element order is the decode order and is positional data. An
/// empty list is valid for any recognized element tag, including
/// [`Tag::End`].
#[derive(Clone, Debug, PartialEq)]
pub struct List {
    element_tag: Tag,
    elements: Vec<Arc<Value>>,
}

impl List {
    /// Invariant upheld by the decoder: every element's kind equals
    /// `element_tag`.
    pub(crate) fn new(element_tag: Tag, elements: Vec<Arc<Value>>) -> Self {
        debug_assert!(elements.iter().all(|e| e.tag() == element_tag));
        Self {
            element_tag,
            elements,
        }
    }

    /// The tag shared by every element of this list.
    #[inline]
    pub fn element_tag(&self) -> Tag {
        self.element_tag
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a handle to the element at `index`, if in bounds.
    ///
    /// Cloning the returned [`Arc`] keeps the subtree alive independently of
    /// this list.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Arc<Value>> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Arc<Value>> {
        self.elements.iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Arc<Value>;
    type IntoIter = slice::Iter<'a, Arc<Value>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A keyed map of NBT values, preserving decode order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Compound {
    entries: Vec<(String, Arc<Value>)>,
}

impl Compound {
    pub(crate) fn new(entries: Vec<(String, Arc<Value>)>) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a handle to the value stored under `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Arc<Value>> {
        self.entries
            .iter()
            .find_map(|(key, value)| (key == name).then_some(value))
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates entries in decode order.
    pub fn iter(&self) -> slice::Iter<'_, (String, Arc<Value>)> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a (String, Arc<Value>);
    type IntoIter = slice::Iter<'a, (String, Arc<Value>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Value {
    /// The type tag of this value's kind.
    pub const fn tag(&self) -> Tag {
        match self {
            Value::End => Tag::End,
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
            Value::IntArray(_) => Tag::IntArray,
            Value::LongArray(_) => Tag::LongArray,
        }
    }

    /// Looks up a child by a `usize` list position or a string compound key.
    ///
    /// Returns `None` if the index kind does not match the value kind or the
    /// child does not exist.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_tree::{read, BigEndian};
    ///
    /// let data = [
    ///     0x0A, 0x00, 0x00,
    ///     0x09, 0x00, 0x02, b'x', b's', // "xs": List
    ///     0x01, 0x00, 0x00, 0x00, 0x01, 0x2A, // [Byte(42)]
    ///     0x00,
    /// ];
    /// let doc = read::<BigEndian>(&data).unwrap();
    /// let first = doc.root().get("xs").and_then(|xs| xs.get(0));
    /// assert_eq!(first.and_then(|v| v.as_i8()), Some(42));
    /// ```
    pub fn get(&self, index: impl Index) -> Option<&Value> {
        index.index_dispatch(
            self,
            |value, n| match value {
                Value::List(list) => list.get(n).map(Arc::as_ref),
                _ => None,
            },
            |value, s| match value {
                Value::Compound(compound) => compound.get(s).map(Arc::as_ref),
                _ => None,
            },
        )
    }

    pub const fn is_end(&self) -> bool {
        matches!(self, Value::End)
    }

    pub const fn as_i8(&self) -> Option<i8> {
        match self {
            Value::Byte(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_i16(&self) -> Option<i16> {
        match self {
            Value::Short(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Value::ByteArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Value::IntArray(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Value::LongArray(v) => Some(v),
            _ => None,
        }
    }
}
