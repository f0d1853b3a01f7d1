//! Encoding player input back into per-word answers.

use crate::{Grid, SubmissionError, WordPlacement};

/// Character standing in for an unanswered letter.
pub const PLACEHOLDER: char = '*';

/// Reads every placement's answer off the grid.
///
/// Each word is walked with [`WordPlacement::position_at`], the same
/// coordinate formula [`Grid::build`] writes with. Empty values and cells
/// without a letter encode as [`PLACEHOLDER`]. All other fields of the
/// placements are copied unchanged.
///
/// # Errors
///
/// Returns [`SubmissionError::Placement`] if a word leaves the grid and
/// [`SubmissionError::Mismatch`] if a cell value longer than one character
/// makes the answer longer than the word.
pub fn encode_submission(
    grid: &Grid,
    placements: &[WordPlacement],
) -> Result<Vec<WordPlacement>, SubmissionError> {
    placements
        .iter()
        .map(|placement| -> Result<WordPlacement, SubmissionError> {
            let expected = placement.len();
            let mut entered_value = String::with_capacity(expected);
            for i in 0..expected {
                let pos = placement.position_at(i)?;
                match grid.cell(pos).current_value() {
                    Some(value) if !value.is_empty() => entered_value.push_str(value),
                    _ => entered_value.push(PLACEHOLDER),
                }
            }

            let actual = entered_value.chars().count();
            if actual != expected {
                return Err(SubmissionError::Mismatch {
                    word_nbr: placement.word_nbr,
                    expected,
                    actual,
                });
            }

            Ok(placement.clone().with_entered_value(entered_value))
        })
        .collect()
}

/// Resets every placement's answer to placeholders, one per letter.
///
/// The grid is not consulted.
#[must_use]
pub fn clear_submission(placements: &[WordPlacement]) -> Vec<WordPlacement> {
    placements
        .iter()
        .map(|placement| {
            let entered_value = std::iter::repeat_n(PLACEHOLDER, placement.len()).collect::<String>();
            placement.clone().with_entered_value(entered_value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Orientation, PlacementError, Position};

    #[test]
    fn test_end_to_end_dog() {
        let placements = vec![WordPlacement::new("DOG", 1, "Barks", Orientation::Across, 2, 3)];
        let grid = Grid::build(&placements)
            .unwrap()
            .with_cell_value(3, 2, "D")
            .unwrap()
            .with_cell_value(3, 3, "O")
            .unwrap()
            .with_cell_value(3, 4, "G")
            .unwrap();

        let submission = encode_submission(&grid, &placements).unwrap();
        assert_eq!(submission.len(), 1);
        assert_eq!(submission[0].entered_value, "DOG");
        assert_eq!(submission[0].word, "DOG");
        assert_eq!(submission[0].hint, "Barks");
    }

    #[test]
    fn test_partial_answer_uses_placeholders() {
        let placements = vec![WordPlacement::new("EMU", 2, "", Orientation::Down, 5, 5)];
        let grid = Grid::build(&placements)
            .unwrap()
            .with_cell_value(6, 5, "M")
            .unwrap();
        let submission = encode_submission(&grid, &placements).unwrap();
        assert_eq!(submission[0].entered_value, "*M*");
    }

    #[test]
    fn test_crossing_words_share_the_crossing_value() {
        let placements = vec![
            WordPlacement::new("CAT", 1, "", Orientation::Across, 0, 0),
            WordPlacement::new("COW", 2, "", Orientation::Down, 0, 0),
        ];
        let grid = Grid::build(&placements)
            .unwrap()
            .with_cell_value(0, 0, "C")
            .unwrap()
            .with_cell_value(0, 2, "T")
            .unwrap()
            .with_cell_value(1, 0, "O")
            .unwrap();
        let submission = encode_submission(&grid, &placements).unwrap();
        assert_eq!(submission[0].entered_value, "C*T");
        assert_eq!(submission[1].entered_value, "CO*");
    }

    #[test]
    fn test_previous_answer_round_trips_through_grid() {
        let placements = vec![
            WordPlacement::new("DOG", 1, "", Orientation::Across, 0, 0).with_entered_value("D*G"),
        ];
        let grid = Grid::build(&placements).unwrap();
        let submission = encode_submission(&grid, &placements).unwrap();
        assert_eq!(submission, placements);
    }

    #[test]
    fn test_multi_character_value_is_a_mismatch() {
        let placements = vec![WordPlacement::new("DOG", 9, "", Orientation::Across, 0, 0)];
        let grid = Grid::build(&placements)
            .unwrap()
            .with_cell_value(0, 1, "OO")
            .unwrap();
        assert_eq!(
            encode_submission(&grid, &placements),
            Err(SubmissionError::Mismatch {
                word_nbr: 9,
                expected: 3,
                actual: 4
            })
        );
    }

    #[test]
    fn test_placement_leaving_grid_is_rejected() {
        let grid = Grid::new();
        let placements = vec![WordPlacement::new("ABC", 3, "", Orientation::Down, 0, 10)];
        assert_eq!(
            encode_submission(&grid, &placements),
            Err(SubmissionError::Placement(PlacementError::OutOfBounds {
                word_nbr: 3,
                x: 0,
                y: 11
            }))
        );
    }

    #[test]
    fn test_clear_ignores_prior_answers() {
        let placements = vec![
            WordPlacement::new("LION", 1, "", Orientation::Across, 0, 0).with_entered_value("LI*N"),
            WordPlacement::new("OX", 2, "", Orientation::Down, 3, 0).with_entered_value(""),
        ];
        let cleared = clear_submission(&placements);
        assert_eq!(cleared[0].entered_value, "****");
        assert_eq!(cleared[1].entered_value, "**");
        assert_eq!(cleared[0].word, "LION");
        assert_eq!(placements[0].entered_value, "LI*N");
    }

    fn disjoint_rows() -> impl Strategy<Value = Vec<WordPlacement>> {
        proptest::collection::vec(("[A-Z]{1,12}", any::<bool>()), Position::ROWS).prop_map(
            |words| {
                words
                    .into_iter()
                    .enumerate()
                    .filter(|(_, (_, keep))| *keep)
                    .map(|(y, (word, _))| {
                        WordPlacement::new(
                            word,
                            u32::try_from(y).unwrap(),
                            "",
                            Orientation::Across,
                            0,
                            i64::try_from(y).unwrap(),
                        )
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn prop_unedited_grid_encodes_placeholders(placements in disjoint_rows()) {
            let grid = Grid::build(&placements).unwrap();
            let submission = encode_submission(&grid, &placements).unwrap();
            prop_assert_eq!(submission.len(), placements.len());
            for (encoded, placement) in submission.iter().zip(&placements) {
                prop_assert_eq!(&encoded.entered_value, &"*".repeat(placement.len()));
            }
        }

        #[test]
        fn prop_filled_grid_encodes_words(placements in disjoint_rows()) {
            let mut grid = Grid::build(&placements).unwrap();
            for (pos, cell) in grid.clone().letter_cells() {
                grid = grid.with_cell_value(pos.row(), pos.col(), cell.letter.to_string()).unwrap();
            }
            let submission = encode_submission(&grid, &placements).unwrap();
            for (encoded, placement) in submission.iter().zip(&placements) {
                prop_assert_eq!(&encoded.entered_value, &placement.word);
            }
        }
    }
}
