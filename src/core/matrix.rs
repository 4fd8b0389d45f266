//! Occupancy matrix shared by header resolution and table extraction
//!
//! The matrix is sized up front and indexed directly. Positions outside the
//! grid read as free and are never stored, so malformed spans degrade to
//! clipped claims instead of out-of-bounds access.

/// Where a cell landed and whether its span had to be cut at the grid edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Logical column of the cell's top-left corner (may be `>= cols()`)
    pub column: usize,
    /// The rowspan x colspan rectangle reached past the grid bounds
    pub clipped: bool,
}

impl Placement {
    /// Whether the cell landed on a column inside the grid
    pub fn in_grid(&self, cols: usize) -> bool {
        self.column < cols
    }
}

/// Fixed-size `rows x cols` grid of claimed positions
#[derive(Debug, Clone)]
pub struct OccupancyMatrix {
    rows: usize,
    cols: usize,
    claimed: Vec<bool>,
}

impl OccupancyMatrix {
    /// Create a matrix with every position unclaimed
    ///
    /// A grid too large to address has no columns; every placement lands
    /// outside it.
    pub fn new(rows: usize, cols: usize) -> Self {
        let cols = if rows.checked_mul(cols).is_some() { cols } else { 0 };
        OccupancyMatrix {
            rows,
            cols,
            claimed: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` is claimed; positions outside the grid are free
    pub fn is_claimed(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.claimed[row * self.cols + col]
    }

    /// First unclaimed column at or after `from` in `row`
    ///
    /// Returns a column `>= cols()` when the rest of the row is full.
    pub fn first_free(&self, row: usize, from: usize) -> usize {
        let mut col = from;
        while self.is_claimed(row, col) {
            col += 1;
        }
        col
    }

    /// Claim the `rowspan x colspan` rectangle whose top-left is `(row, col)`
    ///
    /// Returns true when part of the rectangle fell outside the grid.
    pub fn claim(&mut self, row: usize, col: usize, rowspan: usize, colspan: usize) -> bool {
        let row_end = row.saturating_add(rowspan);
        let col_end = col.saturating_add(colspan);

        for r in row..row_end.min(self.rows) {
            for c in col..col_end.min(self.cols) {
                self.claimed[r * self.cols + c] = true;
            }
        }

        row_end > self.rows || col_end > self.cols
    }

    /// Find the first free column at or after `from` and claim the cell's span there
    pub fn place(&mut self, row: usize, from: usize, rowspan: usize, colspan: usize) -> Placement {
        let column = self.first_free(row, from);
        let clipped = self.claim(row, column, rowspan, colspan);
        Placement { column, clipped }
    }

    /// Number of claimed positions in `row`
    pub fn claimed_in_row(&self, row: usize) -> usize {
        if row >= self.rows {
            return 0;
        }
        let start = row * self.cols;
        self.claimed[start..start + self.cols]
            .iter()
            .filter(|&&c| c)
            .count()
    }
}
