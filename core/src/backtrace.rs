//! Recovers an edit script by walking the distance matrix from `(n, m)` back
//! to `(0, 0)`.
//!
//! Steps are discovered last-line-first; they are buffered and reversed once
//! so callers always receive the script in document order.

use crate::config::BacktraceMode;
use crate::diff::{EditKind, EditOp};
use crate::distance::DistanceMatrix;
use tracing::debug;

pub fn recover_edit_script<T: PartialEq>(
    matrix: &DistanceMatrix,
    old: &[T],
    new: &[T],
    mode: BacktraceMode,
) -> Vec<EditOp> {
    assert_eq!(matrix.rows(), old.len() + 1, "matrix rows do not match original");
    assert_eq!(matrix.cols(), new.len() + 1, "matrix cols do not match modified");

    let mut reversed = Vec::with_capacity(old.len().max(new.len()));
    let mut row = old.len();
    let mut col = new.len();

    while row > 0 || col > 0 {
        let (kind, next_row, next_col) = if row == 0 {
            (EditKind::Insert, row, col - 1)
        } else if col == 0 {
            (EditKind::Delete, row - 1, col)
        } else if old[row - 1] == new[col - 1] {
            (EditKind::Unchanged, row - 1, col - 1)
        } else {
            let kind = choose_edit(matrix, row, col);
            match (mode, kind) {
                (BacktraceMode::Standard, EditKind::Insert) => (kind, row, col - 1),
                (BacktraceMode::Standard, EditKind::Delete) => (kind, row - 1, col),
                _ => (kind, row - 1, col - 1),
            }
        };

        reversed.push(EditOp::new(kind, next_row, next_col));
        row = next_row;
        col = next_col;
    }

    reversed.reverse();
    debug!(ops = reversed.len(), ?mode, "recovered edit script");
    reversed
}

/// Picks the operation explaining cell `(row, col)` when its lines differ.
/// Priority is replace, then insert, then delete.
fn choose_edit(matrix: &DistanceMatrix, row: usize, col: usize) -> EditKind {
    let curr = matrix.get(row, col);
    let diag = matrix.get(row - 1, col - 1);
    let left = matrix.get(row, col - 1);
    if curr == diag + 1 {
        EditKind::Replace
    } else if curr == left + 1 {
        EditKind::Insert
    } else {
        EditKind::Delete
    }
}
