/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.row >= 0
            && self.col >= 0
            && self.row < i32::from(bounds.height)
            && self.col < i32::from(bounds.width)
    }

    /// Returns this position shifted by `(d_row, d_col)`.
    #[must_use]
    pub fn offset(self, (d_row, d_col): (i32, i32)) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Board dimensions, fixed for the whole session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub height: u16,
    pub width: u16,
}

impl GridSize {
    #[must_use]
    pub const fn new(height: u16, width: u16) -> Self {
        Self { height, width }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the middle cell, rounding towards the origin.
    #[must_use]
    pub fn center(self) -> Position {
        Position {
            row: i32::from(self.height / 2),
            col: i32::from(self.width / 2),
        }
    }
}
