use serde::{Deserialize, Serialize};

/// square matrix of point counts stored in row-major order.
/// row 0 is the northernmost band and column 0 the westernmost band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyGrid {
    size: usize,
    cells: Vec<u64>,
}

impl FrequencyGrid {
    /// an all-zero grid with `size` rows and `size` columns
    pub fn zeros(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        if row < self.size && col < self.size {
            self.cells.get(row * self.size + col).copied()
        } else {
            None
        }
    }

    pub(crate) fn increment(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.cells.get_mut(row * self.size + col) {
            *cell += 1;
        }
    }

    /// sum over all cells
    pub fn total(&self) -> u64 {
        self.cells.iter().sum()
    }

    /// the largest cell value, 0 for an empty grid
    pub fn max(&self) -> u64 {
        self.cells.iter().copied().max().unwrap_or_default()
    }

    /// rows from north to south
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> {
        // chunks panics on a zero chunk size; a 0x0 grid has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// (row, col, count) for every cell, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.rows().enumerate().flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(move |(col, count)| (row, col, *count))
        })
    }
}
