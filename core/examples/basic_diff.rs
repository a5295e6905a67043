use line_diff::{DiffConfig, diff_lines, read_lines_from_path};

fn usage() -> ! {
    eprintln!("Usage: basic_diff <OLD> <NEW> [N]");
    eprintln!("  N: optionally print the first N segments (debug)");
    std::process::exit(2);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let old_path = args.next().unwrap_or_else(|| usage());
    let new_path = args.next().unwrap_or_else(|| usage());
    let show_n: Option<usize> = args.next().map(|s| s.parse()).transpose()?;

    let old_lines = read_lines_from_path(&old_path)?;
    let new_lines = read_lines_from_path(&new_path)?;

    let report = diff_lines(&old_lines, &new_lines, &DiffConfig::default());
    let summary = report.summary();

    println!("distance: {}", report.distance);
    println!("segments: {}", report.segments.len());
    println!("edited lines: {}", summary.edited());

    if let Some(n) = show_n {
        for (i, segment) in report.segments.iter().take(n).enumerate() {
            println!("{:>4}: {:?}", i, segment);
        }
    }

    Ok(())
}
