use miette::*;
use rayon::prelude::*;

use crate::schematic::{Grid, NumberSpan};

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid: Grid = input.parse()?;
    tracing::debug!(rows = grid.rows(), cols = grid.cols(), "parsed schematic");

    // Rows only read the grid, so they can be scanned independently.
    // Collecting keeps row order and stops at the first bad row.
    let spans = (0..grid.rows())
        .into_par_iter()
        .map(|row| grid.spans_in_row(row))
        .collect::<std::result::Result<Vec<Vec<NumberSpan>>, _>>()?;

    let total: u64 = spans
        .iter()
        .flatten()
        .filter(|span| {
            let part = span.is_part_number(&grid);
            if !part {
                tracing::trace!(value = span.value, row = span.row, "not a part number");
            }
            part
        })
        .map(|span| span.value)
        .sum();

    Ok(total.to_string())
}
