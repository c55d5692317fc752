use std::path::PathBuf;

use clap::Parser;
use miette::*;

use aoc2023_day_3::part1;

/// Sums every part number in an engine schematic.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Puzzle input file
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let input = std::fs::read_to_string(&args.input)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", args.input.display()))?;
    let result = part1::process(&input)?;
    println!(
        "The solution to part 1 for {} is {}",
        args.input.display(),
        result
    );
    Ok(())
}
