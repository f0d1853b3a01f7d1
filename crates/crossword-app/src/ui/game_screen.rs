use super::{
    grid::{self, GridViewModel},
    hints::{self, HintListViewModel},
    status_line::{self, StatusLineViewModel},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameScreenViewModel {
    pub grid: GridViewModel,
    pub down_hints: HintListViewModel,
    pub across_hints: HintListViewModel,
    pub status_line: StatusLineViewModel,
}

/// Renders the whole screen: status, grid, then the down and across clues.
#[must_use]
pub fn render(vm: &GameScreenViewModel) -> String {
    format!(
        "{}\n\n{}\n{}\n{}",
        status_line::render(&vm.status_line),
        grid::render(&vm.grid),
        hints::render(&vm.down_hints),
        hints::render(&vm.across_hints),
    )
}
