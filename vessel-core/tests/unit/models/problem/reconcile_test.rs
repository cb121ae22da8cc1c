use super::*;
use crate::helpers::models::create_sample_dataset;
use std::sync::{Arc, Mutex};

#[test]
fn can_replace_different_spelling() {
    let targets = ["AB-1", "Ab:2", "aB 3", "ab4", "AB-5"];
    let canonical = ["AB 2", "AB 4", "AB 1", "AB 3"];

    let result = reconcile_names(&targets, &canonical);

    assert_eq!(result.names, vec!["AB 1", "AB 2", "AB 3", "AB 4", "AB-5"]);
    assert_eq!(result.unmatched, vec!["AB-5"]);
}

#[test]
fn can_use_last_canonical_name_on_collision() {
    let result = reconcile_names(&["ab"], &["A-B", "a b"]);

    assert_eq!(result.names, vec!["a b"]);
    assert!(result.unmatched.is_empty());
}

#[test]
fn can_normalize_name() {
    assert_eq!(normalize_name("Platform_One - North!"), "platform_onenorth");
}

#[test]
fn can_reconcile_item_locations_and_report_unmatched() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };
    let mut dataset = create_sample_dataset();
    dataset.items[0].pickup = "PORT".to_string();
    dataset.items[0].delivery = "O-n-e".to_string();
    dataset.items[1].delivery = "four".to_string();

    let unmatched = reconcile_item_locations(&mut dataset, &logger);

    assert_eq!(dataset.items[0].pickup, "Port");
    assert_eq!(dataset.items[0].delivery, "one");
    assert_eq!(dataset.items[1].delivery, "four");
    assert_eq!(unmatched, vec!["four"]);
    assert_eq!(messages.lock().unwrap().len(), 1);
}
