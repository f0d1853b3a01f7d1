use crossword_core::{PlacementError, WordPlacement};
use serde::{Deserialize, Serialize};

/// DTO for a puzzle as exchanged with the backend.
///
/// Field names follow the backend's JSON (`id`, `puzzleData`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleDto {
    pub id: String,
    pub puzzle_data: Vec<WordPlacementDto>,
}

/// DTO for a single word placement.
///
/// The orientation stays a plain string here so that unknown values surface
/// as [`PlacementError::InvalidOrientation`] on conversion instead of a
/// deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPlacementDto {
    pub word: String,
    pub word_nbr: u32,
    #[serde(default)]
    pub hint: String,
    pub word_orientation: String,
    pub startx: i64,
    pub starty: i64,
    #[serde(default)]
    pub entered_value: String,
}

impl From<&WordPlacement> for WordPlacementDto {
    fn from(placement: &WordPlacement) -> Self {
        Self {
            word: placement.word.clone(),
            word_nbr: placement.word_nbr,
            hint: placement.hint.clone(),
            word_orientation: placement.orientation.as_str().to_owned(),
            startx: placement.start_x,
            starty: placement.start_y,
            entered_value: placement.entered_value.clone(),
        }
    }
}

impl TryFrom<WordPlacementDto> for WordPlacement {
    type Error = PlacementError;

    fn try_from(dto: WordPlacementDto) -> Result<Self, Self::Error> {
        let orientation = dto.word_orientation.parse()?;
        Ok(WordPlacement {
            word: dto.word,
            word_nbr: dto.word_nbr,
            hint: dto.hint,
            orientation,
            start_x: dto.startx,
            start_y: dto.starty,
            entered_value: dto.entered_value,
        })
    }
}

impl PuzzleDto {
    /// Converts the placement DTOs, failing on the first invalid one.
    pub fn placements(&self) -> Result<Vec<WordPlacement>, PlacementError> {
        self.puzzle_data
            .iter()
            .cloned()
            .map(WordPlacement::try_from)
            .collect()
    }
}

/// Converts placements into their wire form.
#[must_use]
pub fn to_dtos(placements: &[WordPlacement]) -> Vec<WordPlacementDto> {
    placements.iter().map(WordPlacementDto::from).collect()
}

#[cfg(test)]
mod tests {
    use crossword_core::Orientation;

    use super::*;

    const PUZZLE_JSON: &str = r#"{
        "id": "puzzle-42",
        "puzzleData": [
            {
                "word": "DOG",
                "wordNbr": 1,
                "hint": "Barks",
                "wordOrientation": "across",
                "startx": 2,
                "starty": 3,
                "enteredValue": "D**"
            },
            {
                "word": "DUCK",
                "wordNbr": 1,
                "hint": "Quacks",
                "wordOrientation": "down",
                "startx": 2,
                "starty": 3
            }
        ]
    }"#;

    #[test]
    fn test_parse_backend_json() {
        let dto: PuzzleDto = serde_json::from_str(PUZZLE_JSON).unwrap();
        assert_eq!(dto.id, "puzzle-42");

        let placements = dto.placements().unwrap();
        assert_eq!(
            placements[0],
            WordPlacement::new("DOG", 1, "Barks", Orientation::Across, 2, 3).with_entered_value("D**")
        );
        assert_eq!(placements[1].orientation, Orientation::Down);
        assert_eq!(placements[1].entered_value, "");
    }

    #[test]
    fn test_serialize_uses_backend_field_names() {
        let placement =
            WordPlacement::new("EMU", 4, "Bird", Orientation::Down, 0, 1).with_entered_value("E**");
        let value = serde_json::to_value(WordPlacementDto::from(&placement)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "word": "EMU",
                "wordNbr": 4,
                "hint": "Bird",
                "wordOrientation": "down",
                "startx": 0,
                "starty": 1,
                "enteredValue": "E**",
            })
        );
    }

    #[test]
    fn test_invalid_orientation_is_a_placement_error() {
        let mut dto: PuzzleDto = serde_json::from_str(PUZZLE_JSON).unwrap();
        dto.puzzle_data[1].word_orientation = "sideways".to_owned();
        assert_eq!(
            dto.placements(),
            Err(PlacementError::InvalidOrientation {
                value: "sideways".to_owned()
            })
        );
    }

    #[test]
    fn test_round_trip_through_dto() {
        let dto: PuzzleDto = serde_json::from_str(PUZZLE_JSON).unwrap();
        let placements = dto.placements().unwrap();
        assert_eq!(to_dtos(&placements), dto.puzzle_data);
    }
}
