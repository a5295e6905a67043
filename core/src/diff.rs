//! Diff operations and reports for line sequences.
//!
//! This module defines the types flowing out of the diff pipeline:
//! - [`EditOp`]: a single per-line step recovered from the distance matrix
//! - [`DiffSegment`]: a run of consecutive operations of the same kind
//! - [`DiffReport`]: the distance, the segments in document order and the two
//!   line sequences they index into

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    /// The line is the same on both sides.
    Unchanged,
    /// An original line was replaced by a modified line.
    Replace,
    /// An original line was removed.
    Delete,
    /// A modified line was added.
    Insert,
}

/// One step of the edit script, in document order.
///
/// `old_index` and `new_index` are the matrix cell the step starts from. For
/// kinds that show an original line (`Unchanged`, `Replace`, `Delete`),
/// `old_index` is that line's index; for kinds that show a modified line
/// (`Unchanged`, `Replace`, `Insert`), `new_index` is. The remaining index is
/// the cursor position on the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EditOp {
    pub kind: EditKind,
    pub old_index: usize,
    pub new_index: usize,
}

impl EditOp {
    pub fn new(kind: EditKind, old_index: usize, new_index: usize) -> Self {
        Self {
            kind,
            old_index,
            new_index,
        }
    }
}

/// A maximal run of same-kind operations.
///
/// The start indices belong to the first operation of the run; the lines the
/// segment shows are `old_start..old_start + count` and/or
/// `new_start..new_start + count`, depending on the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: EditKind,
    pub old_start: usize,
    pub new_start: usize,
    pub count: usize,
}

impl DiffSegment {
    pub fn old_range(&self) -> std::ops::Range<usize> {
        self.old_start..self.old_start + self.count
    }

    pub fn new_range(&self) -> std::ops::Range<usize> {
        self.new_start..self.new_start + self.count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineMarker {
    Context,
    Removed,
    Added,
}

impl LineMarker {
    /// Two-character prefix printed before the line text.
    pub fn prefix(self) -> &'static str {
        match self {
            LineMarker::Context => "  ",
            LineMarker::Removed => "- ",
            LineMarker::Added => "+ ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderedLine<'a> {
    pub marker: LineMarker,
    pub text: &'a str,
}

/// Line counts per edit kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub unchanged: usize,
    pub replaced: usize,
    pub deleted: usize,
    pub inserted: usize,
}

impl DiffSummary {
    pub fn edited(&self) -> usize {
        self.replaced + self.deleted + self.inserted
    }
}

/// Result of diffing two line sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffReport<'a> {
    pub distance: usize,
    pub segments: Vec<DiffSegment>,
    #[serde(skip)]
    pub old: &'a [String],
    #[serde(skip)]
    pub new: &'a [String],
}

impl<'a> DiffReport<'a> {
    pub fn is_identical(&self) -> bool {
        self.segments
            .iter()
            .all(|segment| segment.kind == EditKind::Unchanged)
    }

    pub fn summary(&self) -> DiffSummary {
        let mut summary = DiffSummary::default();
        for segment in &self.segments {
            let slot = match segment.kind {
                EditKind::Unchanged => &mut summary.unchanged,
                EditKind::Replace => &mut summary.replaced,
                EditKind::Delete => &mut summary.deleted,
                EditKind::Insert => &mut summary.inserted,
            };
            *slot += segment.count;
        }
        summary
    }

    /// Lines to display, top to bottom.
    ///
    /// Replace segments interleave: each original line is followed
    /// immediately by its replacement.
    pub fn rendered_lines(&self) -> Vec<RenderedLine<'a>> {
        let old = self.old;
        let new = self.new;
        let mut out = Vec::new();
        for segment in &self.segments {
            match segment.kind {
                EditKind::Unchanged => {
                    out.extend(old[segment.old_range()].iter().map(|line| RenderedLine {
                        marker: LineMarker::Context,
                        text: line.as_str(),
                    }));
                }
                EditKind::Replace => {
                    let pairs = old[segment.old_range()]
                        .iter()
                        .zip(&new[segment.new_range()]);
                    for (before, after) in pairs {
                        out.push(RenderedLine {
                            marker: LineMarker::Removed,
                            text: before.as_str(),
                        });
                        out.push(RenderedLine {
                            marker: LineMarker::Added,
                            text: after.as_str(),
                        });
                    }
                }
                EditKind::Delete => {
                    out.extend(old[segment.old_range()].iter().map(|line| RenderedLine {
                        marker: LineMarker::Removed,
                        text: line.as_str(),
                    }));
                }
                EditKind::Insert => {
                    out.extend(new[segment.new_range()].iter().map(|line| RenderedLine {
                        marker: LineMarker::Added,
                        text: line.as_str(),
                    }));
                }
            }
        }
        out
    }
}
