use crate::action_type::PuzzleActionType;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum PuzzleStatus {
    NoPuzzle,
    Loading,
    Sending,
    InProgress,
    Solved,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLineViewModel {
    pub puzzle_id: Option<String>,
    pub status: PuzzleStatus,
    pub last_action_type: Option<PuzzleActionType>,
    /// Failures kept since the last fresh load.
    pub error_count: usize,
}

#[must_use]
pub fn render(vm: &StatusLineViewModel) -> String {
    let status = match &vm.status {
        PuzzleStatus::NoPuzzle => "no puzzle loaded".to_owned(),
        PuzzleStatus::Loading => "loading...".to_owned(),
        PuzzleStatus::Sending => "sending...".to_owned(),
        PuzzleStatus::InProgress => "in progress".to_owned(),
        PuzzleStatus::Solved => "solved".to_owned(),
        PuzzleStatus::Failed(message) => format!("error: {message}"),
    };
    let mut line = match &vm.puzzle_id {
        Some(id) => format!("[{id}] {status}"),
        None => status,
    };
    if let Some(action_type) = vm.last_action_type {
        line.push_str(&format!(" ({action_type})"));
    }
    match vm.error_count {
        0 => {}
        1 => line.push_str(" [1 error]"),
        n => line.push_str(&format!(" [{n} errors]")),
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_status_line() {
        let vm = StatusLineViewModel {
            puzzle_id: Some("p1".to_owned()),
            status: PuzzleStatus::Failed("worker disconnected".to_owned()),
            last_action_type: Some(PuzzleActionType::SubmitPuzzleDataFailure),
            error_count: 1,
        };
        assert_eq!(
            render(&vm),
            "[p1] error: worker disconnected (SUBMIT_PUZZLE_DATA_FAILURE) [1 error]"
        );

        let vm = StatusLineViewModel {
            puzzle_id: None,
            status: PuzzleStatus::NoPuzzle,
            last_action_type: None,
            error_count: 0,
        };
        assert_eq!(render(&vm), "no puzzle loaded");

        let vm = StatusLineViewModel {
            puzzle_id: Some("p1".to_owned()),
            status: PuzzleStatus::InProgress,
            last_action_type: Some(PuzzleActionType::SubmitPuzzleDataSuccess),
            error_count: 2,
        };
        assert_eq!(
            render(&vm),
            "[p1] in progress (SUBMIT_PUZZLE_DATA_SUCCESS) [2 errors]"
        );
    }
}
