use log::{debug, warn};

use super::{WorkHandle, WorkRequest, WorkResponse, Worker};
use crate::action::{Action, ActionRequestQueue};

struct PendingWork {
    request: WorkRequest,
    handle: WorkHandle,
}

/// Tracks in-flight background work and turns completions into actions.
///
/// Polled from the app loop; never blocks.
pub struct WorkExecutor {
    worker: Worker,
    pending: Vec<PendingWork>,
}

impl std::fmt::Debug for WorkExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkExecutor")
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl WorkExecutor {
    #[must_use]
    pub fn new(worker: Worker) -> Self {
        Self {
            worker,
            pending: Vec::new(),
        }
    }

    /// Returns true if no work is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Sends a request to the worker.
    ///
    /// If the worker is gone, the request's failure response is queued at once.
    pub fn start(&mut self, request: WorkRequest, action_queue: &mut ActionRequestQueue) {
        debug!("starting work: {request:?}");
        match self.worker.enqueue(request.clone()) {
            Ok(handle) => self.pending.push(PendingWork { request, handle }),
            Err(err) => {
                warn!("failed to enqueue work: {err}");
                action_queue.request(Action::ApplyWorkResponse(request.failure(err)));
            }
        }
    }

    /// Polls all in-flight work and queues an action for each completion.
    pub fn poll(&mut self, action_queue: &mut ActionRequestQueue) {
        let mut i = 0;
        while i < self.pending.len() {
            let work = &mut self.pending[i];
            let response: Option<WorkResponse> = match work.handle.poll() {
                Ok(response) => response,
                Err(err) => {
                    warn!("lost background work {:?}: {err}", work.request);
                    Some(work.request.failure(err))
                }
            };
            if let Some(response) = response {
                action_queue.request(Action::ApplyWorkResponse(response));
                self.pending.remove(i);
            } else {
                i += 1;
            }
        }
    }
}
