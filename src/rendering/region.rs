use super::{Location, Size};

/// A rectangular area of the screen that something was drawn into.
///
/// Regions are used to decide what a mouse click landed on.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub location: Location,
    pub size: Size,
}

impl Region {
    pub fn new(row: usize, column: usize, rows: usize, columns: usize) -> Self {
        Self {
            location: Location::new(row, column),
            size: Size::new(rows, columns),
        }
    }

    /// Return a region spanning a single row.
    pub fn row(row: usize, column: usize, columns: usize) -> Self {
        Self::new(row, column, 1, columns)
    }

    pub fn contains(&self, location: Location) -> bool {
        location.row >= self.location.row
            && location.row < self.location.row + self.size.rows
            && location.column >= self.location.column
            && location.column < self.location.column + self.size.columns
    }
}
