use anyhow::Result;
use line_diff::{DiffReport, LineMarker, RenderedLine};
use std::io::Write;

const RED: &str = "\x1b[0;31m";
const GREEN: &str = "\x1b[0;32m";
const RESET: &str = "\x1b[0m";

/// Escape sequences wrapped around removed and added lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    removed: &'static str,
    added: &'static str,
    reset: &'static str,
}

impl Palette {
    pub fn ansi() -> Self {
        Self {
            removed: RED,
            added: GREEN,
            reset: RESET,
        }
    }

    pub fn plain() -> Self {
        Self {
            removed: "",
            added: "",
            reset: "",
        }
    }

    pub fn for_color(use_color: bool) -> Self {
        if use_color { Self::ansi() } else { Self::plain() }
    }
}

pub fn write_text_diff<W: Write>(
    w: &mut W,
    report: &DiffReport<'_>,
    palette: &Palette,
) -> Result<()> {
    for line in report.rendered_lines() {
        write_line(w, &line, palette)?;
    }
    Ok(())
}

fn write_line<W: Write>(w: &mut W, line: &RenderedLine<'_>, palette: &Palette) -> Result<()> {
    let prefix = line.marker.prefix();
    match line.marker {
        LineMarker::Context => writeln!(w, "{}{}", prefix, line.text)?,
        LineMarker::Removed => writeln!(
            w,
            "{}{}{}{}",
            palette.removed, prefix, line.text, palette.reset
        )?,
        LineMarker::Added => writeln!(
            w,
            "{}{}{}{}",
            palette.added, prefix, line.text, palette.reset
        )?,
    }
    Ok(())
}

pub fn write_summary<W: Write>(w: &mut W, report: &DiffReport<'_>) -> Result<()> {
    let summary = report.summary();
    writeln!(
        w,
        "distance: {} ({} unchanged, {} replaced, {} deleted, {} inserted)",
        report.distance, summary.unchanged, summary.replaced, summary.deleted, summary.inserted
    )?;
    Ok(())
}
