use ticklist_core::Item;

#[test]
fn new_sets_fields() {
    let item = Item::new(1, "Buy milk");

    assert_eq!(item.id, 1);
    assert_eq!(item.text, "Buy milk");
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let item = Item::new(7, "Walk dog");

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["_id"], 7);
    assert_eq!(json["_item"], "Walk dog");

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn list_payload_matches_stored_format() {
    let items = vec![Item::new(1, "Buy milk"), Item::new(2, "Walk dog")];

    // Exact stored shape; previously saved lists depend on it.
    let payload = serde_json::to_string(&items).unwrap();
    assert_eq!(
        payload,
        r#"[{"_id":1,"_item":"Buy milk"},{"_id":2,"_item":"Walk dog"}]"#
    );
}

#[test]
fn deserialization_accepts_stored_payload() {
    let payload = r#"[{"_id":3,"_item":"Water plants"},{"_id":5,"_item":"Read"}]"#;

    let items: Vec<Item> = serde_json::from_str(payload).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Item::new(3, "Water plants"));
    assert_eq!(items[1], Item::new(5, "Read"));
}
