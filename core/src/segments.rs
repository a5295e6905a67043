use crate::diff::{DiffSegment, EditOp};

/// Run-length compresses a document-ordered edit script.
///
/// Adjacent operations of the same kind fold into one segment that keeps the
/// indices of its first operation.
pub fn compress_edit_script(ops: &[EditOp]) -> Vec<DiffSegment> {
    let mut segments: Vec<DiffSegment> = Vec::new();
    for op in ops {
        match segments.last_mut() {
            Some(last) if last.kind == op.kind => last.count += 1,
            _ => segments.push(DiffSegment {
                kind: op.kind,
                old_start: op.old_index,
                new_start: op.new_index,
                count: 1,
            }),
        }
    }
    segments
}
