//! Grid coordinates.

use std::fmt::{self, Display};

/// A coordinate inside the crossword grid.
///
/// `x` is the column and `y` the row. Both are always within
/// [`Position::COLUMNS`] and [`Position::ROWS`].
///
/// # Examples
///
/// ```
/// use crossword_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!((pos.row(), pos.col()), (2, 4));
///
/// assert!(Position::try_new(12, 0).is_none());
/// assert!(Position::try_new(11, 10).is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Number of rows in the grid.
    pub const ROWS: usize = 11;
    /// Number of columns in the grid.
    pub const COLUMNS: usize = 12;

    /// Creates a position from column `x` and row `y`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!((x as usize) < Self::COLUMNS && (y as usize) < Self::ROWS);
        Self { x, y }
    }

    /// Creates a position from signed coordinates, returning `None` when the
    /// coordinate is outside the grid.
    #[must_use]
    pub fn try_new(x: i64, y: i64) -> Option<Self> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        Self::from_row_col(y, x)
    }

    /// Creates a position from a `(row, col)` pair.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < Self::ROWS && col < Self::COLUMNS {
            Some(Self {
                x: col as u8,
                y: row as u8,
            })
        } else {
            None
        }
    }

    /// Returns the row as an index.
    #[must_use]
    pub const fn row(self) -> usize {
        self.y as usize
    }

    /// Returns the column as an index.
    #[must_use]
    pub const fn col(self) -> usize {
        self.x as usize
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::ROWS)
            .flat_map(|row| (0..Self::COLUMNS).filter_map(move |col| Self::from_row_col(row, col)))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
