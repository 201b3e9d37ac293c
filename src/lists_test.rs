use super::*;

fn sample() -> Vec<ShoppingList> {
    let mut groceries = ShoppingList::new(1, "Groceries");
    groceries.items.push(Item::new(2, "Milk"));
    groceries.items.push(Item { id: 3, text: "Eggs".into(), completed: true });
    let hardware = ShoppingList::new(4, "Hardware");
    vec![groceries, hardware]
}

// =============================================================================
// Pure operations
// =============================================================================

#[test]
fn create_list_appends_collapsed_empty_list() {
    let lists = create_list(&sample(), 10, "Pharmacy");
    assert_eq!(lists.len(), 3);
    let created = &lists[2];
    assert_eq!(created.id, 10);
    assert_eq!(created.name, "Pharmacy");
    assert!(created.items.is_empty());
    assert!(!created.completed);
    assert!(!created.expanded);
}

#[test]
fn create_list_rejects_blank_names() {
    let before = sample();
    assert_eq!(create_list(&before, 10, ""), before);
    assert_eq!(create_list(&before, 10, "   "), before);
    assert_eq!(create_list(&before, 10, "\t\n"), before);
}

#[test]
fn create_list_keeps_name_as_given() {
    let lists = create_list(&[], 1, "  Party  ");
    assert_eq!(lists[0].name, "  Party  ");
}

#[test]
fn create_item_appends_to_matching_list_only() {
    let lists = create_item(&sample(), 1, 20, "Bread");
    assert_eq!(lists[0].items.len(), 3);
    assert_eq!(lists[0].items[2], Item::new(20, "Bread"));
    assert!(lists[1].items.is_empty());
}

#[test]
fn create_item_on_missing_list_is_noop() {
    let before = sample();
    let after = create_item(&before, 999, 20, "Bread");
    assert_eq!(after, before);
}

#[test]
fn create_item_rejects_blank_text() {
    let before = sample();
    assert_eq!(create_item(&before, 1, 20, "  "), before);
}

#[test]
fn delete_list_is_idempotent() {
    let once = delete_list(&sample(), 1);
    assert_eq!(once.len(), 1);
    assert_eq!(once[0].id, 4);
    let twice = delete_list(&once, 1);
    assert_eq!(twice, once);
}

#[test]
fn delete_item_removes_only_that_item() {
    let lists = delete_item(&sample(), 1, 2);
    assert_eq!(lists[0].items.len(), 1);
    assert_eq!(lists[0].items[0].id, 3);
    assert_eq!(delete_item(&lists, 1, 2), lists);
}

#[test]
fn delete_item_ignores_item_of_other_list() {
    let before = sample();
    assert_eq!(delete_item(&before, 4, 2), before);
}

#[test]
fn toggle_item_twice_restores_flag() {
    let before = sample();
    let once = toggle_item_completed(&before, 1, 2);
    assert!(once[0].items[0].completed);
    let twice = toggle_item_completed(&once, 1, 2);
    assert_eq!(twice, before);
}

#[test]
fn toggle_item_on_missing_ids_is_noop() {
    let before = sample();
    assert_eq!(toggle_item_completed(&before, 1, 999), before);
    assert_eq!(toggle_item_completed(&before, 999, 2), before);
}

#[test]
fn toggle_list_expanded_flips_only_that_list() {
    let lists = toggle_list_expanded(&sample(), 4);
    assert!(!lists[0].expanded);
    assert!(lists[1].expanded);
    assert_eq!(toggle_list_expanded(&lists, 4), sample());
}

#[test]
fn clear_items_keeps_the_list() {
    let lists = clear_items(&sample(), 1);
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].name, "Groceries");
    assert!(lists[0].items.is_empty());
}

#[test]
fn remove_completed_items_keeps_open_items_in_order() {
    let mut before = sample();
    before[0].items.push(Item::new(5, "Butter"));
    let lists = remove_completed_items(&before, 1);
    let texts: Vec<&str> = lists[0].items.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, ["Milk", "Butter"]);
}

#[test]
fn operations_do_not_touch_input() {
    let before = sample();
    let snapshot = before.clone();
    let _ = delete_list(&before, 1);
    let _ = toggle_item_completed(&before, 1, 2);
    let _ = clear_items(&before, 1);
    assert_eq!(before, snapshot);
}

// =============================================================================
// ListStore
// =============================================================================

#[test]
fn store_create_list_assigns_unique_ids() {
    let mut store = ListStore::new();
    let ids: Vec<ListId> = (0..50)
        .map(|n| store.create_list(&format!("List {n}")).expect("accepted"))
        .collect();
    assert_eq!(store.len(), 50);
    let mut unique = ids.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn store_rejects_blank_list_names() {
    let mut store = ListStore::new();
    assert_eq!(store.create_list(""), None);
    assert_eq!(store.create_list("   "), None);
    assert!(store.is_empty());
}

#[test]
fn store_groceries_scenario() {
    let mut store = ListStore::new();
    let list_id = store.create_list("Groceries").unwrap();
    let item_id = store.create_item(list_id, "Milk").unwrap();
    store.toggle_item_completed(list_id, item_id);

    assert_eq!(store.len(), 1);
    let list = &store.lists()[0];
    assert_eq!(list.name, "Groceries");
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].text, "Milk");
    assert!(list.items[0].completed);
    assert!(!list.expanded);
}

#[test]
fn store_create_item_on_missing_list_returns_none() {
    let mut store = ListStore::from_lists(sample());
    let before = store.lists().to_vec();
    assert_eq!(store.create_item(999, "Bread"), None);
    assert_eq!(store.lists(), before.as_slice());
}

#[test]
fn store_from_lists_draws_ids_above_loaded_ones() {
    let far_future = i64::MAX / 2;
    let mut list = ShoppingList::new(far_future, "Loaded");
    list.items.push(Item::new(far_future + 5, "Item"));
    let mut store = ListStore::from_lists(vec![list]);

    let list_id = store.create_list("New").unwrap();
    assert!(list_id > far_future + 5);
    let item_id = store.create_item(far_future, "Another").unwrap();
    assert!(item_id > list_id);
}

#[test]
fn store_find_and_mutations() {
    let mut store = ListStore::from_lists(sample());
    store.toggle_list_expanded(1);
    assert!(store.find(1).unwrap().expanded);

    store.remove_completed_items(1);
    assert_eq!(store.find(1).unwrap().items.len(), 1);

    store.delete_item(1, 2);
    assert!(store.find(1).unwrap().items.is_empty());

    store.clear_items(4);
    store.delete_list(4);
    assert!(store.find(4).is_none());
    assert_eq!(store.len(), 1);
}
