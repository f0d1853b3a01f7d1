//! Core data structures for crossword puzzle clients.
//!
//! This crate turns the flat list of word placements delivered by a puzzle
//! backend into a fixed-size cell grid, applies player input to that grid
//! without mutating previous versions, and encodes the grid back into
//! per-word answers for submission.
//!
//! # Overview
//!
//! - [`placement`]: [`WordPlacement`] and [`Orientation`], the wire-level unit
//!   of a puzzle, plus the coordinate walk shared by grid building and
//!   answer encoding.
//! - [`position`]: [`Position`] coordinates inside the 11×12 grid.
//! - [`grid`]: [`Grid`] and [`Cell`], built from placements with
//!   last-write-wins semantics for crossing words.
//! - [`hint`]: clue lists grouped by orientation and ordered by word number.
//! - [`submission`]: answer encoding and the clear path.
//!
//! # Examples
//!
//! ```
//! use crossword_core::{Grid, Orientation, WordPlacement, encode_submission};
//!
//! let placements = vec![WordPlacement::new("DOG", 1, "Barks", Orientation::Across, 2, 3)];
//! let grid = Grid::build(&placements).unwrap();
//!
//! let grid = grid.with_cell_value(3, 2, "D").unwrap();
//! let grid = grid.with_cell_value(3, 3, "O").unwrap();
//! let grid = grid.with_cell_value(3, 4, "G").unwrap();
//!
//! let submission = encode_submission(&grid, &placements).unwrap();
//! assert_eq!(submission[0].entered_value, "DOG");
//! ```

pub use self::{
    error::{GridError, PlacementError, SubmissionError},
    grid::{Cell, CrossingConflict, Grid, LetterCell},
    hint::{Hint, build_hints},
    placement::{Orientation, WordPlacement},
    position::Position,
    submission::{PLACEHOLDER, clear_submission, encode_submission},
};

mod error;
pub mod grid;
pub mod hint;
pub mod placement;
pub mod position;
pub mod submission;
