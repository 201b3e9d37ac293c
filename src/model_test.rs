use super::*;

fn groceries() -> ShoppingList {
    let mut list = ShoppingList::new(10, "Groceries");
    list.items.push(Item::new(11, "Milk"));
    list.items.push(Item { id: 12, text: "Bread".into(), completed: true });
    list
}

#[test]
fn new_list_is_empty_and_collapsed() {
    let list = ShoppingList::new(1, "Hardware");
    assert_eq!(list.name, "Hardware");
    assert!(list.items.is_empty());
    assert!(!list.completed);
    assert!(!list.expanded);
}

#[test]
fn serializes_with_snapshot_field_names() {
    let value = serde_json::to_value(groceries()).unwrap();
    assert_eq!(value["listName"], "Groceries");
    assert_eq!(value["isExpanded"], false);
    assert_eq!(value["completed"], false);
    assert_eq!(value["text"][0]["text"], "Milk");
    assert_eq!(value["text"][1]["completed"], true);
    assert!(value.get("name").is_none());
    assert!(value.get("items").is_none());
}

#[test]
fn reads_snapshot_written_by_mobile_app() {
    let raw = r#"[{"id":1700000000000,"listName":"Weekend","text":[{"id":1700000000500,"text":"Eggs","completed":false}],"completed":false,"isExpanded":true}]"#;
    let lists: Vec<ShoppingList> = serde_json::from_str(raw).unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].id, 1_700_000_000_000);
    assert_eq!(lists[0].name, "Weekend");
    assert!(lists[0].expanded);
    assert_eq!(lists[0].items[0].text, "Eggs");
}

#[test]
fn missing_flags_default_to_false() {
    let raw = r#"{"id":3,"listName":"Bare","text":[{"id":4,"text":"Salt"}]}"#;
    let list: ShoppingList = serde_json::from_str(raw).unwrap();
    assert!(!list.expanded);
    assert!(!list.completed);
    assert!(!list.items[0].completed);
}

#[test]
fn find_item_and_completed_count() {
    let list = groceries();
    assert_eq!(list.find_item(12).map(|i| i.text.as_str()), Some("Bread"));
    assert!(list.find_item(99).is_none());
    assert_eq!(list.completed_count(), 1);
}

#[test]
fn max_id_covers_items() {
    assert_eq!(groceries().max_id(), 12);
    assert_eq!(ShoppingList::new(7, "Empty").max_id(), 7);
}
