//! Clue lists.

use crate::{Orientation, WordPlacement};

/// A numbered clue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    /// Word number.
    pub number: u32,
    /// Clue text.
    pub text: String,
}

/// Returns the clues of all placements with the given orientation, ordered by
/// word number.
///
/// The sort is stable: placements sharing a number keep their input order.
///
/// # Examples
///
/// ```
/// use crossword_core::{Orientation, WordPlacement, build_hints};
///
/// let placements = vec![
///     WordPlacement::new("EMU", 3, "Flightless bird", Orientation::Down, 0, 0),
///     WordPlacement::new("DOG", 2, "Barks", Orientation::Across, 0, 5),
///     WordPlacement::new("ANT", 1, "Colony insect", Orientation::Down, 4, 0),
/// ];
///
/// let down = build_hints(&placements, Orientation::Down);
/// let numbers: Vec<_> = down.iter().map(|hint| hint.number).collect();
/// assert_eq!(numbers, vec![1, 3]);
/// ```
#[must_use]
pub fn build_hints(placements: &[WordPlacement], orientation: Orientation) -> Vec<Hint> {
    let mut hints: Vec<_> = placements
        .iter()
        .filter(|placement| placement.orientation == orientation)
        .map(|placement| Hint {
            number: placement.word_nbr,
            text: placement.hint.clone(),
        })
        .collect();
    hints.sort_by_key(|hint| hint.number);
    hints
}
