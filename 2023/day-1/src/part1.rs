use miette::*;

/// Combines the first and last digit of a line into a two-digit number.
///
/// A lone digit is both first and last; a line without digits is worth 0.
fn calibration_value(line: &str) -> u32 {
    let mut digits = line.chars().filter_map(|c| c.to_digit(10));

    let Some(first) = digits.next() else {
        return 0;
    };
    let last = digits.last().unwrap_or(first);

    first * 10 + last
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let sum: u32 = input
        .lines()
        .map(str::trim)
        .map(calibration_value)
        .sum();

    Ok(sum.to_string())
}
