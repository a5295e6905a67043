use anyhow::Result;
use line_diff::{DiffReport, DiffSegment, DiffSummary, RenderedLine};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonReport<'r, 'a> {
    distance: usize,
    summary: DiffSummary,
    segments: &'r [DiffSegment],
    lines: Vec<RenderedLine<'a>>,
}

pub fn write_json_report<W: Write>(w: &mut W, report: &DiffReport<'_>) -> Result<()> {
    let json = JsonReport {
        distance: report.distance,
        summary: report.summary(),
        segments: &report.segments,
        lines: report.rendered_lines(),
    };
    serde_json::to_writer_pretty(&mut *w, &json)?;
    writeln!(w)?;
    Ok(())
}
