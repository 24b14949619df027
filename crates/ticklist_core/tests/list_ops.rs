use ticklist_core::{Item, ToDoList};

#[test]
fn add_appends_in_order() {
    let mut list = ToDoList::new();

    list.add_item(Item::new(1, "first"));
    list.add_item(Item::new(2, "second"));
    list.add_item(Item::new(3, "third"));

    assert_eq!(list.len(), 3);
    let texts: Vec<&str> = list.items().iter().map(|item| item.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second", "third"]);
}

#[test]
fn next_id_starts_at_one_and_follows_last_item() {
    let mut list = ToDoList::new();
    assert_eq!(list.next_id(), 1);

    list.add_item(Item::new(list.next_id(), "first"));
    assert_eq!(list.next_id(), 2);

    list.add_item(Item::new(list.next_id(), "second"));
    assert_eq!(list.next_id(), 3);
}

#[test]
fn next_id_never_collides_after_removals() {
    let mut list = ToDoList::new();
    for text in ["a", "b", "c"] {
        list.add_item(Item::new(list.next_id(), text));
    }

    // Removing a middle element leaves the highest id in place.
    list.remove_item(2).unwrap();
    assert_eq!(list.next_id(), 4);

    // Removing the last element steps back to one past the new maximum.
    list.remove_item(3).unwrap();
    assert_eq!(list.next_id(), 2);
}

#[test]
fn remove_present_id_keeps_order_of_survivors() {
    let mut list = ToDoList::new();
    for text in ["a", "b", "c", "d"] {
        list.add_item(Item::new(list.next_id(), text));
    }

    let removed = list.remove_item(2).unwrap();
    assert_eq!(removed.text, "b");
    assert_eq!(list.len(), 3);

    let ids: Vec<i64> = list.items().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn remove_absent_id_is_a_silent_noop() {
    let mut list = ToDoList::new();
    list.add_item(Item::new(1, "only"));

    assert!(list.remove_item(99).is_none());
    assert_eq!(list.len(), 1);
    assert_eq!(list.items()[0].id, 1);
}

#[test]
fn clear_empties_unconditionally() {
    let mut list = ToDoList::new();
    list.add_item(Item::new(1, "a"));
    list.add_item(Item::new(2, "b"));

    list.clear();
    assert!(list.is_empty());

    // Clearing an already-empty list stays a no-op.
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.next_id(), 1);
}

#[test]
fn from_items_preserves_stored_order() {
    let list = ToDoList::from_items(vec![Item::new(2, "kept"), Item::new(5, "order")]);

    let ids: Vec<i64> = list.items().iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![2, 5]);
    assert_eq!(list.next_id(), 6);
}
