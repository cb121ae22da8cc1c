#[cfg(test)]
#[path = "../../../tests/unit/models/common/matrix_test.rs"]
mod matrix_test;

/// A dense square matrix stored in row major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    size: usize,
    values: Vec<T>,
}

impl<T: Copy + Default> Matrix<T> {
    /// Creates a matrix of given size filled with default values.
    pub fn new(size: usize) -> Self {
        Self { size, values: vec![T::default(); size * size] }
    }

    /// Creates a matrix from rows, returns `None` if rows do not form a square.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }

        Some(Self { size, values: rows.into_iter().flatten().collect() })
    }

    /// Returns matrix size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns value at given cell.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.values[row * self.size + col]
    }

    /// Sets value at given cell.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.values[row * self.size + col] = value;
    }

    /// Returns a row as slice.
    pub fn row(&self, row: usize) -> &[T] {
        &self.values[row * self.size..(row + 1) * self.size]
    }

    /// Converts matrix into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.size).map(|row| self.row(row).to_vec()).collect()
    }
}

impl<T: Copy + Default + PartialEq> Matrix<T> {
    /// Checks whether the matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|row| (row + 1..self.size).all(|col| self.get(row, col) == self.get(col, row)))
    }
}
