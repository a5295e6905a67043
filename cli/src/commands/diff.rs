use crate::OutputFormat;
use crate::output::{json, text};
use anyhow::Result;
use line_diff::{BacktraceMode, ColorMode, DiffConfig, diff_lines, read_lines_from_path};
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

#[derive(Debug, Clone)]
pub struct DiffOptions {
    pub format: OutputFormat,
    pub color: ColorMode,
    pub backtrace: BacktraceMode,
    pub summary: bool,
}

pub fn run(old_path: &Path, new_path: &Path, options: &DiffOptions) -> Result<ExitCode> {
    info!(old = %old_path.display(), new = %new_path.display(), "comparing files");

    let old_lines = read_lines_from_path(old_path)?;
    let new_lines = read_lines_from_path(new_path)?;

    let config = DiffConfig::default().with_backtrace(options.backtrace);
    let report = diff_lines(&old_lines, &new_lines, &config);

    let stdout = io::stdout();
    let use_color = options
        .color
        .should_colorize(stdout.is_terminal(), no_color_requested());
    let mut writer = BufWriter::new(stdout.lock());

    match options.format {
        OutputFormat::Text => {
            let palette = text::Palette::for_color(use_color);
            text::write_text_diff(&mut writer, &report, &palette)?;
            if options.summary {
                text::write_summary(&mut writer, &report)?;
            }
        }
        OutputFormat::Json => {
            json::write_json_report(&mut writer, &report)?;
        }
    }

    writer.flush()?;
    Ok(ExitCode::SUCCESS)
}

/// `NO_COLOR` set to any non-empty value opts out of automatic color.
fn no_color_requested() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}
