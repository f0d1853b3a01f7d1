//! Backend calls run off the UI loop.
//!
//! Requests are sent to a single worker thread that owns a handle to the
//! [`PuzzleBackend`]. Each request yields a [`WorkHandle`] that the UI loop
//! polls without blocking; completed responses are fed back as actions.

pub mod executor;
pub mod puzzle_dto;
pub mod work_actions;
mod worker;

use puzzle_dto::{PuzzleDto, WordPlacementDto};

use crate::{action_type::PuzzleActionType, backend::PuzzleBackend};

pub use worker::{WorkHandle, Worker};

/// A request that can be offloaded to the background worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkRequest {
    /// Fetch the current puzzle.
    FetchPuzzle,
    /// Submit answers for a puzzle.
    SubmitPuzzle {
        puzzle_id: String,
        submission: Vec<WordPlacementDto>,
    },
}

/// A response produced by background work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkResponse {
    /// Puzzle data is ready.
    PuzzleLoaded(PuzzleDto),
    /// The backend accepted a submission.
    PuzzleSubmitted {
        puzzle_id: String,
        submission: Vec<WordPlacementDto>,
    },
    /// Fetching failed.
    FetchFailed(WorkError),
    /// Submitting failed.
    SubmitFailed(WorkError),
}

/// Errors that can occur while scheduling or performing background work.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WorkError {
    /// The backend reported a failure.
    #[display("backend error: {message}")]
    Backend { message: String },
    /// The background channel was disconnected unexpectedly.
    #[display("worker disconnected")]
    WorkerDisconnected,
}

impl WorkRequest {
    /// Handle a request against `backend` and produce the corresponding response.
    #[must_use]
    pub fn handle(&self, backend: &dyn PuzzleBackend) -> WorkResponse {
        match self {
            WorkRequest::FetchPuzzle => match backend.fetch_puzzle() {
                Ok(puzzle) => WorkResponse::PuzzleLoaded(puzzle),
                Err(err) => WorkResponse::FetchFailed(WorkError::Backend {
                    message: err.to_string(),
                }),
            },
            WorkRequest::SubmitPuzzle {
                puzzle_id,
                submission,
            } => match backend.submit_puzzle(puzzle_id, submission) {
                Ok(()) => WorkResponse::PuzzleSubmitted {
                    puzzle_id: puzzle_id.clone(),
                    submission: submission.clone(),
                },
                Err(err) => WorkResponse::SubmitFailed(WorkError::Backend {
                    message: err.to_string(),
                }),
            },
        }
    }

    /// Returns the response reported when the request is lost before completing.
    #[must_use]
    pub fn failure(&self, error: WorkError) -> WorkResponse {
        match self {
            WorkRequest::FetchPuzzle => WorkResponse::FetchFailed(error),
            WorkRequest::SubmitPuzzle { .. } => WorkResponse::SubmitFailed(error),
        }
    }
}

impl WorkResponse {
    /// Returns the store action type this response corresponds to.
    #[must_use]
    pub fn action_type(&self) -> PuzzleActionType {
        match self {
            WorkResponse::PuzzleLoaded(_) => PuzzleActionType::GetPuzzleDataSuccess,
            WorkResponse::PuzzleSubmitted { .. } => PuzzleActionType::SubmitPuzzleDataSuccess,
            WorkResponse::FetchFailed(_) => PuzzleActionType::GetPuzzleDataFailure,
            WorkResponse::SubmitFailed(_) => PuzzleActionType::SubmitPuzzleDataFailure,
        }
    }
}
