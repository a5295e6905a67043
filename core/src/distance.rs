//! Edit-distance table over whole lines.
//!
//! Cell `(i, j)` holds the minimum number of single-line insert, delete or
//! replace operations turning the first `i` original lines into the first `j`
//! modified lines. Lines compare by exact equality; there is no whitespace or
//! case normalization.

use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl DistanceMatrix {
    /// Number of rows, `len(original) + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `len(modified) + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Panics if `row >= rows()` or `col >= cols()`.
    pub fn get(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} distance matrix",
            self.rows,
            self.cols
        );
        self.cells[self.idx(row, col)]
    }

    /// Edit distance between the full sequences: the bottom-right cell.
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

pub fn build_distance_matrix<T: PartialEq>(old: &[T], new: &[T]) -> DistanceMatrix {
    let rows = old.len() + 1;
    let cols = new.len() + 1;
    let mut matrix = DistanceMatrix {
        rows,
        cols,
        cells: vec![0usize; rows * cols],
    };

    for row in 1..rows {
        let at = matrix.idx(row, 0);
        matrix.cells[at] = row;
    }
    for col in 1..cols {
        matrix.cells[col] = col;
    }

    for row in 1..rows {
        for col in 1..cols {
            let up = matrix.cells[matrix.idx(row - 1, col)];
            let left = matrix.cells[matrix.idx(row, col - 1)];
            let diag = matrix.cells[matrix.idx(row - 1, col - 1)];
            let substitution = if old[row - 1] == new[col - 1] { 0 } else { 1 };
            let at = matrix.idx(row, col);
            matrix.cells[at] = (up + 1).min(left + 1).min(diag + substitution);
        }
    }

    debug!(
        rows,
        cols,
        distance = matrix.distance(),
        "built distance matrix"
    );
    matrix
}
