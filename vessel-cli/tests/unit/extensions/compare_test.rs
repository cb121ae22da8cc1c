use super::*;

const EXPECTED: &str = "Vessel,Leg,Current Node Location,Distance,Time\n\
                        Vessel1,0,Port,0.0,0\n\
                        Vessel1,1,Port,130.3,514\n\
                        Vessel1,2,one,130.3,504\n";

fn read_table(data: &str) -> LegTable {
    read_leg_table(BufReader::new(data.as_bytes())).unwrap()
}

#[test]
fn can_read_leg_table() {
    let table = read_table(EXPECTED);

    assert_eq!(table.headers, vec!["Vessel", "Leg", "Current Node Location", "Distance", "Time"]);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(table.total("Time"), Some(1018.));
    assert_eq!(table.total("Cost"), None);
}

#[test]
fn can_detect_same_tables() {
    let actual = EXPECTED.replace("130.3,514", "130.30,514");

    let comparison = compare_leg_tables(&read_table(EXPECTED), &read_table(&actual));

    assert!(comparison.is_same());
    assert!(comparison.describe().is_empty());
}

#[test]
fn can_detect_cell_and_total_differences() {
    let actual = EXPECTED.replace("one,130.3,504", "two,130.3,510");

    let comparison = compare_leg_tables(&read_table(EXPECTED), &read_table(&actual));

    assert!(!comparison.is_same());
    assert_eq!(
        comparison.cells,
        vec![
            CellDifference {
                row: 2,
                column: "Current Node Location".to_string(),
                expected: "one".to_string(),
                actual: "two".to_string()
            },
            CellDifference {
                row: 2,
                column: "Time".to_string(),
                expected: "504".to_string(),
                actual: "510".to_string()
            },
        ]
    );
    assert_eq!(comparison.totals, vec![("Time".to_string(), 1018., 1024.)]);
    assert_eq!(comparison.describe().len(), 3);
}

#[test]
fn can_detect_row_count_difference() {
    let actual = EXPECTED.lines().take(3).map(|line| format!("{line}\n")).collect::<String>();

    let comparison = compare_leg_tables(&read_table(EXPECTED), &read_table(&actual));

    assert_eq!(comparison.row_counts, Some((3, 2)));
    assert!(comparison.cells.is_empty());
    assert_eq!(comparison.totals.len(), 2);
}

#[test]
fn can_detect_header_difference() {
    let actual = EXPECTED.replace("Distance", "距離");

    let comparison = compare_leg_tables(&read_table(EXPECTED), &read_table(&actual));

    assert!(comparison.headers.is_some());
    assert!(comparison.cells.is_empty());
    assert!(comparison.describe()[0].starts_with("columns differ"));
}
