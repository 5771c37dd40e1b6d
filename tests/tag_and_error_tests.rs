use nbt_tree::{Error, Tag};

#[test]
fn tag_properties() {
    assert!(Tag::Byte.is_primitive());
    assert!(Tag::Short.is_primitive());
    assert!(Tag::Int.is_primitive());
    assert!(Tag::Long.is_primitive());
    assert!(Tag::Float.is_primitive());
    assert!(Tag::Double.is_primitive());

    assert!(!Tag::End.is_primitive());
    assert!(!Tag::ByteArray.is_primitive());
    assert!(!Tag::String.is_primitive());
    assert!(!Tag::List.is_primitive());
    assert!(!Tag::Compound.is_primitive());

    assert!(Tag::ByteArray.is_array());
    assert!(Tag::IntArray.is_array());
    assert!(Tag::LongArray.is_array());
    assert!(!Tag::List.is_array()); // List is composite, not an array tag
    assert!(!Tag::Byte.is_array());

    assert!(Tag::List.is_composite());
    assert!(Tag::Compound.is_composite());
    assert!(!Tag::ByteArray.is_composite());
    assert!(!Tag::String.is_composite());
}

#[test]
fn tag_from_u8_covers_the_closed_set() {
    for byte in 0u8..=12 {
        let tag = Tag::from_u8(byte).unwrap();
        assert_eq!(tag as u8, byte);
    }
    assert_eq!(Tag::from_u8(13), None);
    assert_eq!(Tag::from_u8(0xFF), None);
}

#[test]
fn error_display() {
    let e = Error::EndOfFile(17);
    assert_eq!(e.to_string(), "unexpected end of input at offset 17");

    let e = Error::InvalidTagType(0xFF, 3);
    assert_eq!(e.to_string(), "invalid NBT tag type 0xff at offset 3");

    let e = Error::TrailingData(5);
    assert_eq!(
        e.to_string(),
        "trailing data after end of document: 5 bytes remaining"
    );
}
