use ticklist_core::db::open_db_in_memory;
use ticklist_core::{Item, ListStore, SqliteListStore, ToDoList, LIST_SLOT_KEY};

#[test]
fn save_and_load_roundtrip_preserves_ids_text_and_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteListStore::new(&conn);

    let mut list = ToDoList::new();
    list.add_item(Item::new(1, "Buy milk"));
    list.add_item(Item::new(2, "Walk dog"));
    store.save_list(&list).unwrap();

    let loaded = store.load_list().unwrap();
    assert_eq!(loaded, list);
}

#[test]
fn load_without_saved_slot_yields_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteListStore::new(&conn);

    let loaded = store.load_list().unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn load_with_malformed_slot_yields_empty_list() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO slots (key, value) VALUES (?1, 'not a json array');",
        [LIST_SLOT_KEY],
    )
    .unwrap();

    let store = SqliteListStore::new(&conn);
    let loaded = store.load_list().unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn save_overwrites_the_single_slot_row() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteListStore::new(&conn);

    let mut list = ToDoList::new();
    list.add_item(Item::new(1, "first version"));
    store.save_list(&list).unwrap();

    list.clear();
    list.add_item(Item::new(1, "second version"));
    store.save_list(&list).unwrap();

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM slots;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);

    let loaded = store.load_list().unwrap();
    assert_eq!(loaded.items().len(), 1);
    assert_eq!(loaded.items()[0].text, "second version");
}

#[test]
fn saving_an_empty_list_persists_an_empty_array() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteListStore::new(&conn);

    let mut list = ToDoList::new();
    list.add_item(Item::new(1, "soon gone"));
    store.save_list(&list).unwrap();

    list.clear();
    store.save_list(&list).unwrap();

    let payload: String = conn
        .query_row(
            "SELECT value FROM slots WHERE key = ?1;",
            [LIST_SLOT_KEY],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(payload, "[]");

    let loaded = store.load_list().unwrap();
    assert!(loaded.is_empty());
}
