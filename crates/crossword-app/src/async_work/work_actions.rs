//! Applying completed background work to the app state.

use crossword_core::{Grid, PlacementError, WordPlacement};
use log::{info, warn};

use super::{
    WorkResponse,
    puzzle_dto::{PuzzleDto, WordPlacementDto},
};
use crate::{
    action_type::PuzzleActionType,
    state::{AppState, CrossingPolicy, Puzzle, Status},
};

/// Reasons a received puzzle is not loaded.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    #[display("invalid placement: {_0}")]
    Placement(#[from] PlacementError),
    #[display("{count} crossing letters disagree")]
    ConflictingCrossings { count: usize },
}

/// Apply a completed background response, updating app state.
pub fn apply_work_response(app_state: &mut AppState, response: WorkResponse) {
    app_state.last_action_type = Some(response.action_type());
    match response {
        WorkResponse::PuzzleLoaded(dto) => match load_puzzle(app_state, dto) {
            Ok(()) => {
                app_state.dismiss_errors();
                app_state.status = Status::Ready;
            }
            Err(err) => {
                warn!("rejected puzzle data: {err}");
                app_state.last_action_type = Some(PuzzleActionType::GetPuzzleDataFailure);
                app_state.record_failure(err.to_string());
            }
        },
        WorkResponse::PuzzleSubmitted {
            puzzle_id,
            submission,
        } => {
            info!("puzzle {puzzle_id} submitted");
            app_state.status = Status::Ready;
            if let Err(err) = apply_submission(app_state, &puzzle_id, submission) {
                warn!("could not refresh grid from submission: {err}");
                app_state.record_failure(err.to_string());
            }
        }
        WorkResponse::FetchFailed(err) | WorkResponse::SubmitFailed(err) => {
            warn!("background work failed: {err}");
            app_state.record_failure(err.to_string());
        }
    }
}

fn build_checked(app_state: &AppState, placements: &[WordPlacement]) -> Result<Grid, LoadError> {
    let grid = Grid::build(placements)?;
    let conflicts = grid.conflicts(placements)?;
    if !conflicts.is_empty() {
        for conflict in &conflicts {
            warn!(
                "word {} expects {:?} at {} but the grid holds {:?}",
                conflict.word_nbr, conflict.expected, conflict.position, conflict.actual
            );
        }
        if app_state.settings.crossing_policy == CrossingPolicy::Strict {
            return Err(LoadError::ConflictingCrossings {
                count: conflicts.len(),
            });
        }
    }
    Ok(grid)
}

fn load_puzzle(app_state: &mut AppState, dto: PuzzleDto) -> Result<(), LoadError> {
    let placements = dto.placements()?;
    let grid = build_checked(app_state, &placements)?;
    info!("loaded puzzle {} with {} words", dto.id, placements.len());
    app_state.load_puzzle(
        Puzzle {
            id: dto.id,
            placements,
        },
        grid,
    );
    Ok(())
}

// The backend now holds the submitted answers; mirror them locally.
fn apply_submission(
    app_state: &mut AppState,
    puzzle_id: &str,
    submission: Vec<WordPlacementDto>,
) -> Result<(), LoadError> {
    if app_state.puzzle().is_none_or(|puzzle| puzzle.id != puzzle_id) {
        return Ok(());
    }
    load_puzzle(
        app_state,
        PuzzleDto {
            id: puzzle_id.to_owned(),
            puzzle_data: submission,
        },
    )
}
