use std::sync::Arc;

use nbt_tree::{BigEndian as BE, Tag, Value, read};

fn inventory_document() -> Vec<u8> {
    let mut data = vec![0x0A, 0x00, 0x00];
    data.extend_from_slice(&[0x09, 0x00, 0x05]);
    data.extend_from_slice(b"slots");
    data.push(0x0A); // Compound elements
    data.extend_from_slice(&1u32.to_be_bytes());
    // slots[0] = { "id": Short(7) }
    data.extend_from_slice(&[0x02, 0x00, 0x02, b'i', b'd']);
    data.extend_from_slice(&7i16.to_be_bytes());
    data.push(0x00);
    data.push(0x00);
    data
}

#[test]
fn subtree_handles_outlive_the_document() {
    let data = inventory_document();
    let doc = read::<BE>(&data).unwrap();

    let slot: Arc<Value> = doc
        .root()
        .as_compound()
        .unwrap()
        .get("slots")
        .unwrap()
        .as_list()
        .unwrap()
        .get(0)
        .unwrap()
        .clone();

    drop(doc);

    assert_eq!(slot.get("id").and_then(Value::as_i16), Some(7));
}

#[test]
fn cloned_handles_alias_the_same_node() {
    let data = inventory_document();
    let doc = read::<BE>(&data).unwrap();
    let list = doc.root().as_compound().unwrap().get("slots").unwrap();

    let a = list.as_list().unwrap().get(0).unwrap().clone();
    let b = list.as_list().unwrap().get(0).unwrap().clone();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn two_decodes_are_structurally_equal() {
    let data = inventory_document();
    let first = read::<BE>(&data).unwrap();
    let second = read::<BE>(&data).unwrap();
    assert_eq!(first.root(), second.root());
}

#[test]
fn into_root_keeps_the_tree_alive() {
    let data = inventory_document();
    let root = read::<BE>(&data).unwrap().into_root();
    assert_eq!(root.tag(), Tag::Compound);
    assert!(root.get("slots").is_some());
}

#[test]
fn accessors_reject_other_kinds() {
    let data = inventory_document();
    let doc = read::<BE>(&data).unwrap();
    let root = doc.root();

    assert!(root.as_list().is_none());
    assert!(root.as_i32().is_none());
    assert!(root.as_str().is_none());
    assert!(root.as_compound().is_some());

    // Index kind must match the value kind.
    assert!(root.get(0).is_none());
    let slots = root.get("slots").unwrap();
    assert!(slots.get("id").is_none());
    assert!(slots.get(0).is_some());
}

#[test]
fn get_accepts_string_and_borrowed_indexes() {
    let data = inventory_document();
    let doc = read::<BE>(&data).unwrap();
    let root = doc.root();

    assert!(root.get("slots").is_some());
    assert!(root.get(String::from("slots")).is_some());
    assert!(root.get(&String::from("slots")).is_some());
}

#[test]
fn compound_lookup_and_iteration_agree() {
    let data = inventory_document();
    let doc = read::<BE>(&data).unwrap();
    let root = doc.root().as_compound().unwrap();

    assert_eq!(root.len(), 1);
    assert!(root.contains_key("slots"));
    assert!(!root.contains_key("Slots"));

    for (key, value) in root {
        assert_eq!(root.get(key).map(Arc::as_ref), Some(value.as_ref()));
    }
}
