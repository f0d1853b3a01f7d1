use std::mem;

use crate::{async_work::WorkResponse, ui::grid::CellId};

/// Events that drive the app state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch the puzzle again.
    Reload,
    /// Submit placeholder answers for every word.
    Clear,
    /// Submit the answers currently in the grid.
    Submit,
    /// Replace the value of one cell.
    SetCellValue {
        row: usize,
        col: usize,
        value: String,
    },
    /// Forget recorded failures.
    DismissErrors,
    /// Apply the result of background work.
    ApplyWorkResponse(WorkResponse),
}

impl Action {
    /// Builds a cell edit from an input named after a cell id (`cell-{row}-{col}`).
    #[must_use]
    pub fn cell_input(name: &str, value: impl Into<String>) -> Option<Self> {
        let CellId { row, col } = name.parse().ok()?;
        Some(Action::SetCellValue {
            row,
            col,
            value: value.into(),
        })
    }
}

#[derive(Debug, Default)]
pub struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
