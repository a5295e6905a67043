//! Line Diff: line-oriented edit distance between two texts.
//!
//! This crate provides functionality for:
//! - Building the full edit-distance table between two line sequences
//! - Backtracing that table into a per-line edit script
//! - Compressing the script into runs of unchanged, replaced, deleted and
//!   inserted lines
//! - Reading files into line sequences
//!
//! # Quick Start
//!
//! ```
//! use line_diff::{DiffConfig, EditKind, diff_lines};
//!
//! let old: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
//! let new: Vec<String> = vec!["a".into(), "x".into(), "c".into()];
//! let report = diff_lines(&old, &new, &DiffConfig::default());
//!
//! assert_eq!(report.distance, 1);
//! assert_eq!(report.segments[1].kind, EditKind::Replace);
//! ```

mod backtrace;
mod config;
mod diff;
mod distance;
mod segments;
mod source;

pub use backtrace::recover_edit_script;
pub use config::{BacktraceMode, ColorMode, DiffConfig};
pub use diff::{
    DiffReport, DiffSegment, DiffSummary, EditKind, EditOp, LineMarker, RenderedLine,
};
pub use distance::{DistanceMatrix, build_distance_matrix};
pub use segments::compress_edit_script;
pub use source::{SourceError, read_lines, read_lines_from_path};

/// Runs the whole pipeline: distance table, backtrace, compression.
///
/// The matrix is dropped before returning; the report only borrows the two
/// line sequences.
pub fn diff_lines<'a>(old: &'a [String], new: &'a [String], config: &DiffConfig) -> DiffReport<'a> {
    let matrix = build_distance_matrix(old, new);
    let ops = recover_edit_script(&matrix, old, new, config.backtrace);
    let segments = compress_edit_script(&ops);
    tracing::debug!(
        distance = matrix.distance(),
        segments = segments.len(),
        "diffed line sequences"
    );
    DiffReport {
        distance: matrix.distance(),
        segments,
        old,
        new,
    }
}
