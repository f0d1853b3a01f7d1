//! Word placements and the coordinate walk along them.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{PlacementError, Position};

/// Direction in which a word is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Orientation {
    /// Left to right; `x` increases.
    Across,
    /// Top to bottom; `y` increases.
    Down,
}

impl Orientation {
    /// Both orientations, down first as clue lists are usually shown.
    pub const ALL: [Self; 2] = [Self::Down, Self::Across];

    /// Returns the wire name of the orientation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Orientation::Across => "across",
            Orientation::Down => "down",
        }
    }

    /// Returns the coordinate of the `index`-th letter of a word starting at
    /// `(start_x, start_y)`.
    #[must_use]
    pub fn offset(self, start_x: i64, start_y: i64, index: i64) -> (i64, i64) {
        match self {
            Orientation::Across => (start_x + index, start_y),
            Orientation::Down => (start_x, start_y + index),
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "across" => Ok(Orientation::Across),
            "down" => Ok(Orientation::Down),
            _ => Err(PlacementError::InvalidOrientation {
                value: s.to_owned(),
            }),
        }
    }
}

/// A single word's text, clue, and location within the puzzle.
///
/// Everything except [`entered_value`](Self::entered_value) is fixed by the
/// puzzle author. `entered_value` carries the player's answer, one character
/// per letter, with [`PLACEHOLDER`](crate::PLACEHOLDER) for unanswered letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPlacement {
    /// The solution word.
    pub word: String,
    /// Clue number shown in the hint lists.
    pub word_nbr: u32,
    /// Clue text.
    pub hint: String,
    /// Writing direction.
    pub orientation: Orientation,
    /// Column of the first letter.
    pub start_x: i64,
    /// Row of the first letter.
    pub start_y: i64,
    /// The player's answer as last submitted.
    pub entered_value: String,
}

impl WordPlacement {
    /// Creates a placement with an empty answer.
    #[must_use]
    pub fn new(
        word: impl Into<String>,
        word_nbr: u32,
        hint: impl Into<String>,
        orientation: Orientation,
        start_x: i64,
        start_y: i64,
    ) -> Self {
        Self {
            word: word.into(),
            word_nbr,
            hint: hint.into(),
            orientation,
            start_x,
            start_y,
            entered_value: String::new(),
        }
    }

    /// Returns the placement with `entered_value` replaced.
    #[must_use]
    pub fn with_entered_value(mut self, entered_value: impl Into<String>) -> Self {
        self.entered_value = entered_value.into();
        self
    }

    /// Returns the number of letters in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Returns `true` if the word has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Returns the grid position of the `index`-th letter.
    ///
    /// This is the only place the across/down coordinate formula lives; grid
    /// building and answer encoding both walk words through it.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::OutOfBounds`] if the letter falls outside the grid.
    pub fn position_at(&self, index: usize) -> Result<Position, PlacementError> {
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        let (x, y) = self
            .orientation
            .offset(self.start_x, self.start_y, index);
        Position::try_new(x, y).ok_or(PlacementError::OutOfBounds {
            word_nbr: self.word_nbr,
            x,
            y,
        })
    }

    /// Returns the grid positions of every letter, in word order.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::OutOfBounds`] if any letter falls outside the grid.
    pub fn positions(&self) -> Result<Vec<Position>, PlacementError> {
        (0..self.len()).map(|i| self.position_at(i)).collect()
    }

    /// Returns `(position, letter, entered character)` for every letter.
    ///
    /// The entered character is `None` past the end of `entered_value`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::OutOfBounds`] if any letter falls outside the grid.
    pub fn letters(&self) -> Result<Vec<(Position, char, Option<char>)>, PlacementError> {
        let mut entered = self.entered_value.chars();
        self.word
            .chars()
            .enumerate()
            .map(|(i, letter)| Ok((self.position_at(i)?, letter, entered.next())))
            .collect()
    }
}
