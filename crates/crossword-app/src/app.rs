//! The app loop: actions in, state out, backend work on the side.

use std::{sync::Arc, thread, time::Duration};

use crate::{
    action::{Action, ActionRequestQueue},
    action_handler::{self, ActionEffect},
    async_work::{Worker, executor::WorkExecutor},
    backend::PuzzleBackend,
    state::{AppState, Settings},
    ui::game_screen::GameScreenViewModel,
    view_model_builder,
};

#[derive(Debug)]
pub struct CrosswordApp {
    app_state: AppState,
    action_queue: ActionRequestQueue,
    executor: WorkExecutor,
}

impl CrosswordApp {
    #[must_use]
    pub fn new(backend: Arc<dyn PuzzleBackend>, settings: Settings) -> Self {
        Self {
            app_state: AppState::new(settings),
            action_queue: ActionRequestQueue::default(),
            executor: WorkExecutor::new(Worker::spawn(backend)),
        }
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.app_state
    }

    /// Queues an action for the next [`update`](Self::update).
    pub fn dispatch(&mut self, action: Action) {
        self.action_queue.request(action);
    }

    /// Runs one loop turn: collects finished work, handles queued actions and
    /// starts any work they request.
    pub fn update(&mut self) {
        self.executor.poll(&mut self.action_queue);
        while !self.action_queue.is_empty() {
            let ActionEffect { work_requests } =
                action_handler::handle_all(&mut self.app_state, &mut self.action_queue);
            for request in work_requests {
                self.executor.start(request, &mut self.action_queue);
            }
        }
    }

    /// Returns true if no actions are queued and no work is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.action_queue.is_empty() && self.executor.is_idle()
    }

    /// Calls [`update`](Self::update) until the app is idle, sleeping
    /// `poll_interval` between turns.
    pub fn run_until_idle(&mut self, poll_interval: Duration) {
        loop {
            self.update();
            if self.is_idle() {
                break;
            }
            thread::sleep(poll_interval);
        }
    }

    #[must_use]
    pub fn game_screen_vm(&self) -> GameScreenViewModel {
        view_model_builder::build_game_screen_vm(&self.app_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        action_type::PuzzleActionType,
        async_work::puzzle_dto::PuzzleDto,
        backend::{MemoryBackend, testing::placement_dto},
    };

    const TICK: Duration = Duration::from_millis(1);

    fn dog_puzzle() -> PuzzleDto {
        PuzzleDto {
            id: "dog".to_owned(),
            puzzle_data: vec![
                placement_dto("DOG", 1, "across", 2, 3),
                placement_dto("LION", 2, "down", 6, 0),
            ],
        }
    }

    #[test]
    fn test_load_edit_submit_reload() {
        let backend = Arc::new(MemoryBackend::new(dog_puzzle()));
        let mut app = CrosswordApp::new(backend.clone(), Settings::default());

        app.dispatch(Action::Reload);
        app.run_until_idle(TICK);
        assert_eq!(
            app.state().last_action_type(),
            Some(PuzzleActionType::GetPuzzleDataSuccess)
        );

        for (col, value) in [(2, "D"), (3, "O"), (4, "G")] {
            app.dispatch(Action::SetCellValue {
                row: 3,
                col,
                value: value.to_owned(),
            });
        }
        app.dispatch(Action::Submit);
        app.run_until_idle(TICK);

        assert_eq!(
            app.state().last_action_type(),
            Some(PuzzleActionType::SubmitPuzzleDataSuccess)
        );
        let submissions = backend.submissions().unwrap();
        assert_eq!(submissions.len(), 1);
        let answers: Vec<_> = submissions[0]
            .1
            .iter()
            .map(|dto| dto.entered_value.as_str())
            .collect();
        assert_eq!(answers, vec!["DOG", "****"]);

        app.dispatch(Action::Reload);
        app.run_until_idle(TICK);
        assert_eq!(
            app.state().grid().get(3, 3).and_then(|c| c.current_value()),
            Some("O")
        );
    }

    #[test]
    fn test_rejected_edit_survives_successful_submit() {
        let backend = Arc::new(MemoryBackend::new(dog_puzzle()));
        let mut app = CrosswordApp::new(backend.clone(), Settings::default());
        app.dispatch(Action::Reload);
        app.run_until_idle(TICK);

        app.dispatch(Action::SetCellValue {
            row: 0,
            col: 0,
            value: "X".to_owned(),
        });
        app.dispatch(Action::Submit);
        app.run_until_idle(TICK);

        assert_eq!(backend.submissions().unwrap().len(), 1);
        assert!(app.state().status().is_ready());
        assert_eq!(app.state().errors().len(), 1);
        let line = &app.game_screen_vm().status_line;
        assert_eq!(line.error_count, 1);

        app.dispatch(Action::Reload);
        app.run_until_idle(TICK);
        assert!(app.state().errors().is_empty());
    }

    #[test]
    fn test_clear_resets_backend_and_grid() {
        let mut puzzle = dog_puzzle();
        puzzle.puzzle_data[1].entered_value = "LI*N".to_owned();
        let backend = Arc::new(MemoryBackend::new(puzzle));
        let mut app = CrosswordApp::new(backend.clone(), Settings::default());

        app.dispatch(Action::Reload);
        app.run_until_idle(TICK);
        assert_eq!(
            app.state().grid().get(1, 6).and_then(|c| c.current_value()),
            Some("I")
        );

        app.dispatch(Action::Clear);
        app.run_until_idle(TICK);

        let stored = backend.fetch_puzzle().unwrap();
        assert_eq!(stored.puzzle_data[0].entered_value, "***");
        assert_eq!(stored.puzzle_data[1].entered_value, "****");
        assert_eq!(
            app.state().grid().get(1, 6).and_then(|c| c.current_value()),
            Some("")
        );
    }
}
