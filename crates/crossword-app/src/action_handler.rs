use crossword_core::{clear_submission, encode_submission};
use log::{debug, warn};

use crate::{
    action::{Action, ActionRequestQueue},
    action_type::PuzzleActionType,
    async_work::{WorkRequest, puzzle_dto, work_actions},
    state::{AppState, Status},
};

/// Side effects requested while handling actions.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ActionEffect {
    pub work_requests: Vec<WorkRequest>,
}

pub fn handle_all(app_state: &mut AppState, action_queue: &mut ActionRequestQueue) -> ActionEffect {
    let mut effect = ActionEffect::default();
    for action in action_queue.take_all() {
        let ActionEffect { work_requests } = handle(app_state, action);
        effect.work_requests.extend(work_requests);
    }
    effect
}

/// Applies one action to the state.
///
/// Backend calls are not made here; they are returned as work requests for
/// the caller to run.
pub fn handle(app_state: &mut AppState, action: Action) -> ActionEffect {
    let mut effect = ActionEffect::default();

    match action {
        Action::Reload => {
            app_state.status = Status::Loading;
            effect.work_requests.push(WorkRequest::FetchPuzzle);
        }
        Action::Clear => {
            if let Some(puzzle) = app_state.puzzle() {
                let submission = clear_submission(&puzzle.placements);
                effect.work_requests.push(submit_request(&puzzle.id, &submission));
                mark_sending(app_state);
            } else {
                no_puzzle(app_state, "clear");
            }
        }
        Action::Submit => {
            if let Some(puzzle) = app_state.puzzle() {
                match encode_submission(app_state.grid(), &puzzle.placements) {
                    Ok(submission) => {
                        effect.work_requests.push(submit_request(&puzzle.id, &submission));
                        mark_sending(app_state);
                    }
                    Err(err) => {
                        warn!("cannot submit puzzle {}: {err}", puzzle.id);
                        app_state.record_failure(err.to_string());
                    }
                }
            } else {
                no_puzzle(app_state, "submit");
            }
        }
        Action::SetCellValue { row, col, value } => {
            match app_state.grid().with_cell_value(row, col, value) {
                Ok(grid) => {
                    debug!("cell ({row}, {col}) updated");
                    app_state.grid = grid;
                }
                Err(err) => {
                    warn!("ignored cell input: {err}");
                    app_state.record_failure(err.to_string());
                }
            }
        }
        Action::DismissErrors => app_state.dismiss_errors(),
        Action::ApplyWorkResponse(response) => {
            work_actions::apply_work_response(app_state, response);
        }
    }

    effect
}

fn submit_request(puzzle_id: &str, submission: &[crossword_core::WordPlacement]) -> WorkRequest {
    WorkRequest::SubmitPuzzle {
        puzzle_id: puzzle_id.to_owned(),
        submission: puzzle_dto::to_dtos(submission),
    }
}

fn mark_sending(app_state: &mut AppState) {
    app_state.status = Status::Sending;
    app_state.last_action_type = Some(PuzzleActionType::SendingData);
}

fn no_puzzle(app_state: &mut AppState, what: &str) {
    warn!("cannot {what}: no puzzle loaded");
    app_state.record_failure(format!("cannot {what}: no puzzle loaded"));
}
