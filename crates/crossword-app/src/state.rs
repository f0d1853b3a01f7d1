use crossword_core::{Grid, Hint, Orientation, WordPlacement, build_hints};

use crate::action_type::PuzzleActionType;

/// How crossings whose letters disagree are treated when a puzzle loads.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum CrossingPolicy {
    /// The later word overwrites the shared cell.
    #[default]
    Overwrite,
    /// Puzzles with disagreeing crossings are rejected.
    Strict,
}

#[derive(Debug, Default, Clone)]
pub struct Settings {
    pub crossing_policy: CrossingPolicy,
}

/// The loaded puzzle as last received from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub id: String,
    pub placements: Vec<WordPlacement>,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Status {
    Idle,
    Loading,
    Sending,
    Ready,
    Failed(String),
}

/// Everything a renderer needs, plus the loaded placements.
///
/// The grid and hint lists are derived from `puzzle`; the grid additionally
/// carries the player's unsent edits. `status` only reflects the latest
/// action, while `errors` keeps every failure until a fresh load or
/// [`Action::DismissErrors`](crate::action::Action::DismissErrors).
#[derive(Debug, Clone)]
pub struct AppState {
    puzzle: Option<Puzzle>,
    pub(crate) grid: Grid,
    down_hints: Vec<Hint>,
    across_hints: Vec<Hint>,
    pub(crate) status: Status,
    errors: Vec<String>,
    pub(crate) last_action_type: Option<PuzzleActionType>,
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            puzzle: None,
            grid: Grid::new(),
            down_hints: Vec::new(),
            across_hints: Vec::new(),
            status: Status::Idle,
            errors: Vec::new(),
            last_action_type: None,
            settings,
        }
    }

    /// Replaces the puzzle and everything derived from it.
    pub(crate) fn load_puzzle(&mut self, puzzle: Puzzle, grid: Grid) {
        self.down_hints = build_hints(&puzzle.placements, Orientation::Down);
        self.across_hints = build_hints(&puzzle.placements, Orientation::Across);
        self.grid = grid;
        self.puzzle = Some(puzzle);
    }

    /// Marks the latest action as failed and keeps the message.
    pub(crate) fn record_failure(&mut self, message: String) {
        self.errors.push(message.clone());
        self.status = Status::Failed(message);
    }

    pub(crate) fn dismiss_errors(&mut self) {
        self.errors.clear();
        if self.status.is_failed() {
            self.status = if self.puzzle.is_some() {
                Status::Ready
            } else {
                Status::Idle
            };
        }
    }

    #[must_use]
    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn down_hints(&self) -> &[Hint] {
        &self.down_hints
    }

    #[must_use]
    pub fn across_hints(&self) -> &[Hint] {
        &self.across_hints
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Failures recorded since the last fresh load, oldest first.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// The store action type most recently recorded.
    #[must_use]
    pub fn last_action_type(&self) -> Option<PuzzleActionType> {
        self.last_action_type
    }
}
