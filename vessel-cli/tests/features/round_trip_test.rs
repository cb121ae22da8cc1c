use crate::extensions::compare::{compare_leg_tables, read_leg_table};
use crate::extensions::output::write_legs;
use crate::helpers::*;
use crate::solve_data_source;
use std::io::BufReader;
use std::path::Path;

fn solve_to_csv(data_source: &str) -> Vec<u8> {
    let environment = create_silent_environment();
    let legs =
        solve_data_source(Path::new("../data"), data_source, create_test_overrides(), environment).unwrap().unwrap();
    let mut buffer = vec![];
    write_legs(legs.as_slice(), &mut buffer).unwrap();

    buffer
}

#[test]
fn can_reproduce_sample_leg_table() {
    let expected = solve_to_csv("sample");
    let actual = solve_to_csv("sample");

    let expected = read_leg_table(BufReader::new(expected.as_slice())).unwrap();
    let actual = read_leg_table(BufReader::new(actual.as_slice())).unwrap();
    let comparison = compare_leg_tables(&expected, &actual);

    assert!(comparison.is_same(), "{:?}", comparison.describe());
    assert_eq!(expected.headers.len(), 22);
}

#[test]
fn can_detect_changed_leg_table() {
    let expected = read_leg_table(BufReader::new(solve_to_csv("sample_2").as_slice())).unwrap();
    let mut actual = expected.clone();
    let time_idx = actual.headers.iter().position(|header| header == "Time").unwrap();
    actual.rows[0][time_idx] = "100000".to_string();

    let comparison = compare_leg_tables(&expected, &actual);

    assert!(!comparison.is_same());
    assert_eq!(comparison.cells.len(), 1);
    assert_eq!(comparison.totals.len(), 1);
}
