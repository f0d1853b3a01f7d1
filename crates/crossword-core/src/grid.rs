//! The crossword cell grid.

use std::sync::Arc;

use crate::{GridError, Orientation, PlacementError, Position, WordPlacement, submission::PLACEHOLDER};

type Row = [Cell; Position::COLUMNS];

/// A cell occupied by a letter of some word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCell {
    /// The word this cell was written by.
    pub word: String,
    /// Number of that word.
    pub word_nbr: u32,
    /// Orientation of that word.
    pub orientation: Orientation,
    /// Index of the letter within the word.
    pub position_in_word: usize,
    /// The solution letter.
    pub letter: char,
    /// What the player has typed; empty when unanswered.
    pub current_value: String,
}

/// A single grid cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum Cell {
    /// No word passes through this cell.
    #[default]
    Empty,
    /// A letter of a word.
    Letter(LetterCell),
}

impl Cell {
    /// Returns the letter cell, if any.
    #[must_use]
    pub fn as_letter(&self) -> Option<&LetterCell> {
        match self {
            Cell::Letter(cell) => Some(cell),
            Cell::Empty => None,
        }
    }

    /// Returns the player's value, if this is a letter cell.
    #[must_use]
    pub fn current_value(&self) -> Option<&str> {
        self.as_letter().map(|cell| cell.current_value.as_str())
    }
}

/// A crossing where a later word overwrote a different letter of an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingConflict {
    /// Where the words cross.
    pub position: Position,
    /// Number of the overwritten word.
    pub word_nbr: u32,
    /// The letter the overwritten word expects.
    pub expected: char,
    /// The letter the grid holds.
    pub actual: char,
}

/// The 11×12 crossword grid, indexed by row then column.
///
/// A grid is a value: [`with_cell_value`](Self::with_cell_value) returns a new
/// grid and leaves the receiver untouched. Rows are reference-counted, so an
/// edit copies only the row it changes and every other row is shared with the
/// grid it was derived from.
///
/// # Examples
///
/// ```
/// use crossword_core::{Grid, Orientation, Position, WordPlacement};
///
/// let placements = vec![
///     WordPlacement::new("CAT", 1, "Feline", Orientation::Across, 0, 0),
///     WordPlacement::new("COW", 1, "Bovine", Orientation::Down, 0, 0),
/// ];
/// let grid = Grid::build(&placements).unwrap();
///
/// // The later placement wins the shared cell.
/// let cell = grid.cell(Position::new(0, 0)).as_letter().unwrap();
/// assert_eq!(cell.orientation, Orientation::Down);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [Arc<Row>; Position::ROWS],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates a grid with every cell empty.
    #[must_use]
    pub fn new() -> Self {
        Self::from_cells(std::array::from_fn(|_| Row::default()))
    }

    fn from_cells(cells: [Row; Position::ROWS]) -> Self {
        Self {
            rows: cells.map(Arc::new),
        }
    }

    /// Builds a grid from placements in input order.
    ///
    /// Each letter is written at the coordinate given by
    /// [`WordPlacement::position_at`]; a later placement overwrites any cell an
    /// earlier one wrote. The current value of each cell is seeded from the
    /// placement's entered value, with placeholders and missing characters
    /// left empty.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::OutOfBounds`] if any letter of any placement
    /// falls outside the grid. No partial grid is produced.
    pub fn build(placements: &[WordPlacement]) -> Result<Self, PlacementError> {
        let mut cells: [Row; Position::ROWS] = std::array::from_fn(|_| Row::default());
        for placement in placements {
            for (position_in_word, (pos, letter, entered)) in
                placement.letters()?.into_iter().enumerate()
            {
                let current_value = match entered {
                    Some(PLACEHOLDER) | None => String::new(),
                    Some(ch) => ch.to_string(),
                };
                cells[pos.row()][pos.col()] = Cell::Letter(LetterCell {
                    word: placement.word.clone(),
                    word_nbr: placement.word_nbr,
                    orientation: placement.orientation,
                    position_in_word,
                    letter,
                    current_value,
                });
            }
        }
        Ok(Self::from_cells(cells))
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.rows[pos.row()][pos.col()]
    }

    /// Returns the cell at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(col))
    }

    /// Returns the rows in top to bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// Returns every letter cell with its position, in row-major order.
    pub fn letter_cells(&self) -> impl Iterator<Item = (Position, &LetterCell)> {
        Position::all().filter_map(|pos| self.cell(pos).as_letter().map(|cell| (pos, cell)))
    }

    /// Returns a new grid whose cell at `(row, col)` holds `value`.
    ///
    /// The value is stored verbatim; no length or character checks are made.
    /// Only the affected row is copied.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] for a coordinate outside the grid and
    /// [`GridError::EmptyCell`] for a cell that belongs to no word.
    pub fn with_cell_value(
        &self,
        row: usize,
        col: usize,
        value: impl Into<String>,
    ) -> Result<Self, GridError> {
        let pos = Position::from_row_col(row, col).ok_or(GridError::OutOfBounds { row, col })?;
        if self.cell(pos).is_empty() {
            return Err(GridError::EmptyCell { row, col });
        }

        let mut grid = self.clone();
        if let Cell::Letter(cell) = &mut Arc::make_mut(&mut grid.rows[row])[col] {
            cell.current_value = value.into();
        }
        Ok(grid)
    }

    /// Returns the crossings where a later placement overwrote a different
    /// letter of an earlier one.
    ///
    /// The grid must have been built from `placements`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::OutOfBounds`] if a placement leaves the grid.
    pub fn conflicts(
        &self,
        placements: &[WordPlacement],
    ) -> Result<Vec<CrossingConflict>, PlacementError> {
        let mut conflicts = vec![];
        for placement in placements {
            for (position, expected, _) in placement.letters()? {
                if let Some(cell) = self.cell(position).as_letter()
                    && cell.letter != expected
                {
                    conflicts.push(CrossingConflict {
                        position,
                        word_nbr: placement.word_nbr,
                        expected,
                        actual: cell.letter,
                    });
                }
            }
        }
        Ok(conflicts)
    }

    /// Checks whether every letter cell holds its solution letter.
    ///
    /// Comparison ignores ASCII case. A grid without letter cells is not solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let mut cells = self.letter_cells().peekable();
        cells.peek().is_some()
            && cells.all(|(_, cell)| {
                let mut chars = cell.current_value.chars();
                matches!(
                    (chars.next(), chars.next()),
                    (Some(ch), None) if ch.eq_ignore_ascii_case(&cell.letter)
                )
            })
    }
}
