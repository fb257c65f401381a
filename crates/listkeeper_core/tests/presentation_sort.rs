use listkeeper_core::{list_class, progress, sorted_items, sorted_lists, Collection, ListId};

fn collection_with_mixed_lists() -> Collection {
    let mut collection = Collection::new();
    let a = collection.create_list("Incomplete A").unwrap();
    let b = collection.create_list("Complete B").unwrap();
    // Left empty, so it counts as incomplete.
    collection.create_list("Incomplete C").unwrap();

    collection.add_item(a, "open").unwrap();
    let done = collection.add_item(b, "done").unwrap();
    collection.toggle_item(b, done, true).unwrap();
    collection
}

#[test]
fn sorted_lists_puts_complete_last_with_storage_positions() {
    let collection = collection_with_mixed_lists();

    let placed: Vec<(&str, usize, ListId)> = sorted_lists(collection.list_all())
        .map(|placed| (placed.entry.name(), placed.index, placed.id))
        .collect();

    assert_eq!(
        placed,
        vec![
            ("Incomplete A", 0, ListId(1)),
            ("Incomplete C", 2, ListId(3)),
            ("Complete B", 1, ListId(2)),
        ]
    );
}

#[test]
fn sorted_lists_does_not_touch_storage_and_restarts() {
    let collection = collection_with_mixed_lists();
    let before: Vec<ListId> = collection.list_all().iter().map(|list| list.id()).collect();

    let first: Vec<usize> = sorted_lists(collection.list_all())
        .map(|placed| placed.index)
        .collect();
    let second: Vec<usize> = sorted_lists(collection.list_all())
        .map(|placed| placed.index)
        .collect();

    assert_eq!(first, second);
    let after: Vec<ListId> = collection.list_all().iter().map(|list| list.id()).collect();
    assert_eq!(before, after);
}

#[test]
fn sorted_items_keeps_relative_order_within_groups() {
    let mut collection = Collection::new();
    let list_id = collection.create_list("Week").unwrap();
    let mon = collection.add_item(list_id, "Mon").unwrap();
    collection.add_item(list_id, "Tue").unwrap();
    let wed = collection.add_item(list_id, "Wed").unwrap();
    collection.add_item(list_id, "Thu").unwrap();
    collection.toggle_item(list_id, mon, true).unwrap();
    collection.toggle_item(list_id, wed, true).unwrap();

    let list = collection.get_list(list_id).unwrap();
    let placed: Vec<(&str, usize)> = sorted_items(list.items())
        .map(|placed| (placed.entry.name(), placed.index))
        .collect();

    assert_eq!(
        placed,
        vec![("Tue", 1), ("Thu", 3), ("Mon", 0), ("Wed", 2)]
    );
}

#[test]
fn sorting_empty_sequences_yields_nothing() {
    let collection = Collection::new();
    assert_eq!(sorted_lists(collection.list_all()).count(), 0);
    assert_eq!(sorted_items(&[]).count(), 0);
}

#[test]
fn progress_and_class_follow_completion() {
    let collection = collection_with_mixed_lists();
    let lists = collection.list_all();

    assert_eq!(progress(&lists[0]).to_string(), "0 / 1");
    assert_eq!(progress(&lists[1]).to_string(), "1 / 1");
    assert_eq!(progress(&lists[2]).to_string(), "0 / 0");
    assert_eq!(list_class(&lists[0]), None);
    assert_eq!(list_class(&lists[1]), Some("complete"));
    assert_eq!(list_class(&lists[2]), None);
}
