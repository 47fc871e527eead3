//! Minesweeper-style adjacency counter over a rectangular 0/1 grid.

use crate::diagnostics::DiagnosticSink;
use crate::error::GridError;

pub const MINE: i64 = 1;
/// Output value for a cell that holds a mine.
pub const MINE_MARKER: u8 = 9;

/// Checks that the grid is non-empty, rectangular, and holds only 0 and 1. Returns the column count.
pub fn validate(grid: &[Vec<i64>]) -> Result<usize, GridError> {
    let first = grid.first().ok_or(GridError::Empty)?;
    let cols = first.len();
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != cols { return Err(GridError::IrregularRows { row, expected: cols, found: cells.len() }); }
        if let Some((col, &value)) = cells.iter().enumerate().find(|(_, v)| !matches!(**v, 0 | 1)) {
            return Err(GridError::DisallowedValue { row, col, value });
        }
    }
    Ok(cols)
}

/// Number of mines among the up-to-8 neighbours of `(row, col)`, clipped at the edges.
pub fn adjacent_mines(grid: &[Vec<i64>], row: usize, col: usize) -> u8 {
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    let mut count = 0;
    for i in row.saturating_sub(1)..(row + 2).min(rows) {
        for j in col.saturating_sub(1)..(col + 2).min(cols) {
            if (i, j) != (row, col) && grid[i][j] == MINE { count += 1; }
        }
    }
    count
}

/// Replaces mines with [`MINE_MARKER`] and every other cell with its adjacent mine count.
pub fn annotate(grid: &[Vec<i64>], sink: &dyn DiagnosticSink) -> Result<Vec<Vec<u8>>, GridError> {
    let cols = validate(grid).map_err(|e| { sink.error(&e.to_string()); e })?;
    sink.info(&format!("computing adjacency for {}x{} grid", grid.len(), cols));
    let out: Vec<Vec<u8>> = grid.iter().enumerate().map(|(i, cells)| {
        cells.iter().enumerate().map(|(j, &c)| if c == MINE { MINE_MARKER } else { adjacent_mines(grid, i, j) }).collect()
    }).collect();
    for row in &out { sink.debug(&format!("{row:?}")); }
    Ok(out)
}
