use std::cmp::Ordering;

/// Coordinates of a single cell on the unbounded grid.
///
/// Cells are ordered row-major, which gives the canonical order used by
/// the CSV writer and the persistence record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    // field order matters: derived `Ord` compares `row` first
    row: i32,
    column: i32,
}

impl Cell {
    /// Offsets of the Moore neighbourhood, the cell itself excluded.
    const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    pub const fn row(&self) -> i32 {
        self.row
    }

    pub const fn column(&self) -> i32 {
        self.column
    }

    /// Row-major comparison, same as [`Ord::cmp`].
    pub fn compare(left: Cell, right: Cell) -> Ordering {
        left.cmp(&right)
    }

    /// Returns the cell shifted by `(drow, dcolumn)`.
    ///
    /// Coordinates wrap around at the `i32` bounds.
    pub const fn offset(&self, drow: i32, dcolumn: i32) -> Self {
        Self {
            row: self.row.wrapping_add(drow),
            column: self.column.wrapping_add(dcolumn),
        }
    }

    /// The 8 cells adjacent to this one.
    pub fn neighbours(self) -> impl Iterator<Item = Cell> + Clone {
        Self::NEIGHBOUR_OFFSETS
            .into_iter()
            .map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// The 3x3 block centred on this cell, the cell itself included.
    pub fn neighbourhood(self) -> impl Iterator<Item = Cell> + Clone {
        std::iter::once(self).chain(self.neighbours())
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(cell: Cell) -> Self {
        (cell.row, cell.column)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.row, self.column)
    }
}
