//! Engine schematic grid and the part-number scan over it.

use std::num::ParseIntError;
use std::ops::Range;
use std::str::FromStr;

use miette::Diagnostic;
use thiserror::Error;

/// The character used for empty space in a schematic.
pub const FILLER: char = '.';

#[derive(Debug, Error, Diagnostic)]
pub enum SchematicError {
    #[error("schematic has no rows")]
    #[diagnostic(code(schematic::empty), help("the input file should contain at least one line"))]
    Empty,

    #[error("row {row} is {found} columns wide, expected {expected}")]
    #[diagnostic(
        code(schematic::ragged_row),
        help("every row of a schematic must have the same width")
    )]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("digits {digits:?} at row {row}, column {col} do not form a valid part number")]
    #[diagnostic(code(schematic::bad_number))]
    BadNumber {
        digits: String,
        row: usize,
        col: usize,
        #[source]
        source: ParseIntError,
    },
}

/// Returns true for anything that is neither a decimal digit nor filler.
pub fn is_symbol(c: char) -> bool {
    !c.is_ascii_digit() && c != FILLER
}

/// Returns true if any character in the window is a symbol.
pub fn has_symbol(window: &[char]) -> bool {
    window.iter().copied().any(is_symbol)
}

/// A rectangular, read-only grid of schematic characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Builds a grid from already-split lines.
    ///
    /// All lines must have the width of the first one.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, SchematicError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut cells = Vec::new();
        let mut rows = 0;
        let mut cols = 0;

        for (row, line) in lines.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(line.chars());
            let found = cells.len() - before;

            if row == 0 {
                cols = found;
            } else if found != cols {
                return Err(SchematicError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            rows += 1;
        }

        if rows == 0 {
            return Err(SchematicError::Empty);
        }

        Ok(Grid { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the character at (row, col), or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Returns a whole row, or `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[char]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Extracts every digit run of the given row, left to right.
    pub fn spans_in_row(&self, row: usize) -> Result<Vec<NumberSpan>, SchematicError> {
        match self.row(row) {
            Some(cells) => extract_spans(row, cells),
            None => Ok(Vec::new()),
        }
    }
}

impl FromStr for Grid {
    type Err = SchematicError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        // Blank lines (trailing newline at EOF, mostly) are not rows
        Grid::from_lines(input.lines().map(str::trim).filter(|l| !l.is_empty()))
    }
}

/// A maximal run of digits within one row of the schematic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSpan {
    pub value: u64,
    pub row: usize,
    /// First digit's column.
    pub start_col: usize,
    /// One past the last digit's column.
    pub end_col: usize,
}

impl NumberSpan {
    pub fn columns(&self) -> Range<usize> {
        self.start_col..self.end_col
    }

    /// Checks whether a symbol touches this span, diagonals included.
    pub fn is_part_number(&self, grid: &Grid) -> bool {
        let left = self
            .start_col
            .checked_sub(1)
            .and_then(|col| grid.get(self.row, col));
        // `get` is None when the span ends on the last column
        let right = grid.get(self.row, self.end_col);

        if left.into_iter().chain(right).any(is_symbol) {
            return true;
        }

        let window = self.start_col.saturating_sub(1)..(self.end_col + 1).min(grid.cols());

        self.row
            .checked_sub(1)
            .into_iter()
            .chain(Some(self.row + 1))
            .filter_map(|row| grid.row(row))
            .any(|cells| has_symbol(&cells[window.clone()]))
    }
}

/// Scans one row for digit runs.
///
/// Runs are split by any non-digit, filler included, so `12.34` is two spans.
pub fn extract_spans(row: usize, cells: &[char]) -> Result<Vec<NumberSpan>, SchematicError> {
    let mut spans = Vec::new();
    let mut start = None;

    for (col, c) in cells.iter().enumerate() {
        if c.is_ascii_digit() {
            if start.is_none() {
                start = Some(col);
            }
        } else if let Some(s) = start.take() {
            spans.push(close_span(row, cells, s, col)?);
        }
    }
    if let Some(s) = start {
        spans.push(close_span(row, cells, s, cells.len())?);
    }

    Ok(spans)
}

fn close_span(
    row: usize,
    cells: &[char],
    start_col: usize,
    end_col: usize,
) -> Result<NumberSpan, SchematicError> {
    let digits: String = cells[start_col..end_col].iter().collect();
    let value = digits
        .parse::<u64>()
        .map_err(|source| SchematicError::BadNumber {
            digits,
            row,
            col: start_col,
            source,
        })?;

    Ok(NumberSpan {
        value,
        row,
        start_col,
        end_col,
    })
}
