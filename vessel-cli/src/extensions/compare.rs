//! Compares two leg tables, e.g. an expected result with a fresh one.

#[cfg(test)]
#[path = "../../tests/unit/extensions/compare_test.rs"]
mod compare_test;

use std::io::{BufReader, Read};
use vessel_core::prelude::GenericResult;

const DISTANCE_COLUMN: &str = "Distance";
const TIME_COLUMN: &str = "Time";
const TOTAL_TOLERANCE: f64 = 1E-6;

/// A leg table kept as raw csv values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LegTable {
    /// Column names.
    pub headers: Vec<String>,
    /// Rows of values.
    pub rows: Vec<Vec<String>>,
}

impl LegTable {
    /// Returns a sum of the numeric column or `None` when there is no such column.
    pub fn total(&self, column: &str) -> Option<f64> {
        let idx = self.headers.iter().position(|header| header == column)?;

        Some(self.rows.iter().filter_map(|row| row.get(idx)).filter_map(|value| value.parse::<f64>().ok()).sum())
    }
}

/// A value which differs between expected and actual tables.
#[derive(Clone, Debug, PartialEq)]
pub struct CellDifference {
    pub row: usize,
    pub column: String,
    pub expected: String,
    pub actual: String,
}

/// A result of leg tables comparison.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Comparison {
    /// Column names mismatch.
    pub headers: Option<(Vec<String>, Vec<String>)>,
    /// Row count mismatch.
    pub row_counts: Option<(usize, usize)>,
    /// Cell differences within rows present in both tables.
    pub cells: Vec<CellDifference>,
    /// Mismatched totals as (column, expected, actual).
    pub totals: Vec<(String, f64, f64)>,
}

impl Comparison {
    /// Returns true if tables are the same.
    pub fn is_same(&self) -> bool {
        self.headers.is_none() && self.row_counts.is_none() && self.cells.is_empty() && self.totals.is_empty()
    }

    /// Returns a human readable description of differences.
    pub fn describe(&self) -> Vec<String> {
        let headers = self.headers.iter().map(|(expected, actual)| {
            format!("columns differ: expected [{}], actual [{}]", expected.join(", "), actual.join(", "))
        });

        let rows = self
            .row_counts
            .iter()
            .map(|(expected, actual)| format!("row count differs: expected {expected}, actual {actual}"));

        let cells = self.cells.iter().map(|cell| {
            let (row, column) = (cell.row, &cell.column);
            format!("row {row}, column '{column}': expected '{}', actual '{}'", cell.expected, cell.actual)
        });

        let totals = self
            .totals
            .iter()
            .map(|(column, expected, actual)| format!("total {column} differs: expected {expected}, actual {actual}"));

        headers.chain(rows).chain(cells).chain(totals).collect()
    }
}

/// Reads a leg table from csv with a header row.
pub fn read_leg_table<R: Read>(reader: BufReader<R>) -> GenericResult<LegTable> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|err| format!("cannot read csv headers: '{err}'"))?
        .iter()
        .map(|header| header.to_string())
        .collect();

    let rows = reader
        .records()
        .map(|record| {
            record
                .map(|record| record.iter().map(|value| value.to_string()).collect::<Vec<_>>())
                .map_err(|err| format!("cannot read csv record: '{err}'"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LegTable { headers, rows })
}

/// Compares two leg tables cell by cell within their common rows and checks their total distance
/// and time.
pub fn compare_leg_tables(expected: &LegTable, actual: &LegTable) -> Comparison {
    let headers = if expected.headers != actual.headers {
        Some((expected.headers.clone(), actual.headers.clone()))
    } else {
        None
    };

    let row_counts =
        if expected.rows.len() != actual.rows.len() { Some((expected.rows.len(), actual.rows.len())) } else { None };

    let cells = if headers.is_none() {
        expected
            .rows
            .iter()
            .zip(actual.rows.iter())
            .enumerate()
            .flat_map(|(row, (expected_row, actual_row))| {
                expected.headers.iter().enumerate().filter_map(move |(col, column)| {
                    let expected_value = expected_row.get(col).cloned().unwrap_or_default();
                    let actual_value = actual_row.get(col).cloned().unwrap_or_default();

                    if is_same_value(&expected_value, &actual_value) {
                        None
                    } else {
                        let column = column.clone();
                        Some(CellDifference { row, column, expected: expected_value, actual: actual_value })
                    }
                })
            })
            .collect()
    } else {
        vec![]
    };

    let totals = [DISTANCE_COLUMN, TIME_COLUMN]
        .iter()
        .filter_map(|column| match (expected.total(column), actual.total(column)) {
            (Some(expected), Some(actual)) if (expected - actual).abs() > TOTAL_TOLERANCE => {
                Some((column.to_string(), expected, actual))
            }
            _ => None,
        })
        .collect();

    Comparison { headers, row_counts, cells, totals }
}

/// Numeric values are compared as numbers, so `8` and `8.0` are the same.
fn is_same_value(expected: &str, actual: &str) -> bool {
    if expected == actual {
        return true;
    }

    match (expected.parse::<f64>(), actual.parse::<f64>()) {
        (Ok(expected), Ok(actual)) => (expected - actual).abs() <= TOTAL_TOLERANCE,
        _ => false,
    }
}
