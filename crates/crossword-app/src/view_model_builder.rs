use crossword_core::{Cell, Grid, Hint, Orientation};

use crate::{
    state::{AppState, Status},
    ui::{
        game_screen::GameScreenViewModel,
        grid::{CellId, GridCell, GridViewModel},
        hints::{HintItem, HintListViewModel},
        status_line::{PuzzleStatus, StatusLineViewModel},
    },
};

#[must_use]
pub fn build_grid_vm(grid: &Grid) -> GridViewModel {
    let rows = grid
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| build_cell(CellId { row, col }, cell))
                .collect()
        })
        .collect();
    GridViewModel { rows }
}

fn build_cell(id: CellId, cell: &Cell) -> GridCell {
    match cell {
        Cell::Empty => GridCell {
            id,
            is_empty: true,
            orientation: None,
            letter: None,
            value: None,
            position_in_word: None,
            word_nbr: None,
        },
        Cell::Letter(letter) => GridCell {
            id,
            is_empty: false,
            orientation: Some(letter.orientation),
            letter: Some(letter.letter),
            value: Some(letter.current_value.clone()),
            position_in_word: Some(letter.position_in_word),
            word_nbr: Some(letter.word_nbr),
        },
    }
}

fn build_hint_list_vm(orientation: Orientation, hints: &[Hint]) -> HintListViewModel {
    HintListViewModel {
        orientation,
        items: hints
            .iter()
            .map(|hint| HintItem {
                number: hint.number,
                text: hint.text.clone(),
            })
            .collect(),
    }
}

#[must_use]
pub fn build_status_line_vm(app_state: &AppState) -> StatusLineViewModel {
    let status = match app_state.status() {
        Status::Idle if app_state.puzzle().is_none() => PuzzleStatus::NoPuzzle,
        Status::Loading => PuzzleStatus::Loading,
        Status::Sending => PuzzleStatus::Sending,
        Status::Failed(message) => PuzzleStatus::Failed(message.clone()),
        Status::Idle | Status::Ready if app_state.grid().is_solved() => PuzzleStatus::Solved,
        Status::Idle | Status::Ready => PuzzleStatus::InProgress,
    };
    StatusLineViewModel {
        puzzle_id: app_state.puzzle().map(|puzzle| puzzle.id.clone()),
        status,
        last_action_type: app_state.last_action_type(),
        error_count: app_state.errors().len(),
    }
}

#[must_use]
pub fn build_game_screen_vm(app_state: &AppState) -> GameScreenViewModel {
    GameScreenViewModel {
        grid: build_grid_vm(app_state.grid()),
        down_hints: build_hint_list_vm(Orientation::Down, app_state.down_hints()),
        across_hints: build_hint_list_vm(Orientation::Across, app_state.across_hints()),
        status_line: build_status_line_vm(app_state),
    }
}

#[cfg(test)]
mod tests {
    use crossword_core::Position;

    use super::*;
    use crate::{
        action::Action,
        action_handler::handle,
        async_work::WorkResponse,
        backend::testing::sample_puzzle,
        ui::game_screen,
    };

    fn loaded() -> AppState {
        let mut state = AppState::default();
        handle(
            &mut state,
            Action::ApplyWorkResponse(WorkResponse::PuzzleLoaded(sample_puzzle())),
        );
        state
    }

    #[test]
    fn test_grid_vm_has_one_prop_set_per_cell() {
        let vm = build_grid_vm(loaded().grid());
        assert_eq!(vm.rows.len(), Position::ROWS);
        assert!(vm.rows.iter().all(|row| row.len() == Position::COLUMNS));

        let empty = &vm.rows[0][0];
        assert_eq!(empty.id.to_string(), "cell-0-0");
        assert!(empty.is_empty);
        assert_eq!(empty.letter, None);

        let start = &vm.rows[3][2];
        assert!(!start.is_empty);
        assert_eq!(start.position_in_word, Some(0));
        assert_eq!(start.letter, Some('D'));
        assert_eq!(start.word_nbr, Some(1));
        assert_eq!(start.orientation, Some(Orientation::Down));
        assert_eq!(start.value.as_deref(), Some(""));

        let middle = &vm.rows[3][3];
        assert_eq!(middle.position_in_word, Some(1));
        assert_eq!(middle.orientation, Some(Orientation::Across));
    }

    #[test]
    fn test_status_line_tracks_state() {
        let state = AppState::default();
        assert!(build_status_line_vm(&state).status.is_no_puzzle());

        let mut state = loaded();
        let vm = build_status_line_vm(&state);
        assert_eq!(vm.puzzle_id.as_deref(), Some("sample"));
        assert!(vm.status.is_in_progress());

        for (row, col, value) in [
            (3, 2, "D"),
            (3, 3, "O"),
            (3, 4, "G"),
            (4, 2, "U"),
            (5, 2, "C"),
            (6, 2, "K"),
            (8, 0, "E"),
            (8, 1, "M"),
            (8, 2, "U"),
        ] {
            handle(
                &mut state,
                Action::SetCellValue {
                    row,
                    col,
                    value: value.to_owned(),
                },
            );
        }
        assert!(build_status_line_vm(&state).status.is_solved());
    }

    #[test]
    fn test_render_game_screen() {
        let mut state = loaded();
        handle(&mut state, Action::cell_input("cell-3-3", "O").unwrap());
        let text = game_screen::render(&build_game_screen_vm(&state));

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "[sample] in progress (GET_PUZZLE_DATA_SUCCESS)"
        );
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "############");
        assert_eq!(lines[5], "##.O.#######");
        assert_eq!(lines[6], "##.#########");
        assert_eq!(lines[10], "...#########");
        assert!(text.contains("Down\n  1. clue for DUCK\n"));
        assert!(text.contains("Across\n  2. clue for DOG\n  3. clue for EMU\n"));
    }
}
