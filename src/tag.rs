/// The type tag identifying each NBT value kind.
///
/// Every tag in an NBT stream is introduced by one of these byte codes.
/// The set is closed: bytes outside `0..=12` are rejected by the decoder
/// with [`Error::InvalidTagType`](crate::Error::InvalidTagType).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Tag {
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
    IntArray = 11,
    LongArray = 12,
}

impl Tag {
    /// Creates a `Tag` from a raw byte value, returning `None` for bytes
    /// outside the recognized range.
    ///
    /// # Example
    ///
    /// ```
    /// use nbt_tree::Tag;
    ///
    /// assert_eq!(Tag::from_u8(9), Some(Tag::List));
    /// assert_eq!(Tag::from_u8(13), None);
    /// ```
    pub const fn from_u8(value: u8) -> Option<Self> {
        if value <= Tag::LongArray as u8 {
            // SAFETY: value is within the contiguous 0..=12 discriminant range.
            Some(unsafe { std::mem::transmute::<u8, Tag>(value) })
        } else {
            None
        }
    }

    /// Returns `true` if this is a primitive tag type.
    ///
    /// Primitive tags are: Byte, Short, Int, Long, Float, Double.
    /// These tags store their values directly without additional structure.
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Self::Byte | Self::Short | Self::Int | Self::Long | Self::Float | Self::Double
        )
    }

    /// Returns `true` if this is an array tag type.
    ///
    /// Array tags are: ByteArray, IntArray, LongArray.
    /// These store contiguous sequences of primitive values.
    pub const fn is_array(self) -> bool {
        matches!(self, Self::ByteArray | Self::IntArray | Self::LongArray)
    }

    /// Returns `true` if this is a composite tag type.
    ///
    /// Composite tags are: List, Compound.
    /// These contain other NBT values as children.
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::List | Self::Compound)
    }
}
