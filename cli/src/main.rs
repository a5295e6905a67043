mod commands;
mod output;

use clap::{Parser, ValueEnum};
use commands::diff::DiffOptions;
use line_diff::{BacktraceMode, ColorMode};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "line-diff")]
#[command(about = "Show line-by-line differences between two text files")]
#[command(version)]
pub struct Cli {
    #[arg(value_name = "FILE1", help = "Path to the original file")]
    pub old: Option<PathBuf>,
    #[arg(value_name = "FILE2", help = "Path to the modified file")]
    pub new: Option<PathBuf>,
    /// Extra positional arguments are accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true)]
    pub rest: Vec<OsString>,
    #[arg(long, short, value_enum, default_value = "text", help = "Output format")]
    pub format: OutputFormat,
    #[arg(
        long,
        value_enum,
        default_value = "auto",
        env = "LINE_DIFF_COLOR",
        help = "When to color removed and added lines (always keeps escapes when piped)"
    )]
    pub color: ColorArg,
    #[arg(
        long,
        value_enum,
        default_value = "standard",
        env = "LINE_DIFF_BACKTRACE",
        help = "How differing lines are attributed (lockstep reproduces legacy output)"
    )]
    pub backtrace: BacktraceArg,
    #[arg(long, help = "Print the edit distance and per-kind line counts after the diff")]
    pub summary: bool,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq, Debug)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq, Debug)]
pub enum BacktraceArg {
    Standard,
    Lockstep,
}

impl From<BacktraceArg> for BacktraceMode {
    fn from(arg: BacktraceArg) -> Self {
        match arg {
            BacktraceArg::Standard => BacktraceMode::Standard,
            BacktraceArg::Lockstep => BacktraceMode::Lockstep,
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "line-diff".to_string());
    let cli = Cli::parse();

    let Some(old) = cli.old else {
        return usage_error(&program, "<file1path>");
    };
    let Some(new) = cli.new else {
        return usage_error(&program, "<file2path>");
    };

    if !cli.rest.is_empty() {
        tracing::debug!(ignored = cli.rest.len(), "ignoring extra positional arguments");
    }

    let options = DiffOptions {
        format: cli.format,
        color: cli.color.into(),
        backtrace: cli.backtrace.into(),
        summary: cli.summary,
    };

    match commands::diff::run(&old, &new, &options) {
        Ok(code) => code,
        Err(e) => {
            println!("ERROR: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn usage_error(program: &str, missing: &str) -> ExitCode {
    println!("ERROR: {} not provided.", missing);
    println!("Usage: {} <file1path> <file2path>", program);
    ExitCode::from(1)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();
}
