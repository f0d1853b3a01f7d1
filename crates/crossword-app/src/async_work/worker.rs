//! Background worker thread and pollable handles.
use std::sync::{Arc, mpsc};

use log::debug;

use super::{WorkError, WorkRequest, WorkResponse};
use crate::backend::PuzzleBackend;

struct WorkRequestEnvelope {
    request: WorkRequest,
    response_tx: mpsc::Sender<WorkResponse>,
}

/// A worker thread serving requests against one backend, in arrival order.
pub struct Worker {
    sender: mpsc::Sender<WorkRequestEnvelope>,
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker").finish_non_exhaustive()
    }
}

impl Worker {
    /// Starts the worker thread.
    ///
    /// The thread exits once the worker is dropped and the queue has drained.
    #[must_use]
    pub fn spawn(backend: Arc<dyn PuzzleBackend>) -> Self {
        let (tx, rx) = mpsc::channel::<WorkRequestEnvelope>();
        std::thread::spawn(move || {
            while let Ok(envelope) = rx.recv() {
                debug!("worker handling {:?}", envelope.request);
                let response = envelope.request.handle(backend.as_ref());
                let _ = envelope.response_tx.send(response);
            }
        });
        Self { sender: tx }
    }

    /// Enqueues a request and returns a handle for polling completion.
    pub fn enqueue(&self, request: WorkRequest) -> Result<WorkHandle, WorkError> {
        let (response_tx, response_rx) = mpsc::channel();
        self.sender
            .send(WorkRequestEnvelope {
                request,
                response_tx,
            })
            .map_err(|_| WorkError::WorkerDisconnected)?;

        Ok(WorkHandle {
            receiver: response_rx,
        })
    }
}

/// A handle for polling background work completion.
pub struct WorkHandle {
    receiver: mpsc::Receiver<WorkResponse>,
}

impl std::fmt::Debug for WorkHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkHandle").finish()
    }
}

impl WorkHandle {
    /// Attempts to poll for a completed response.
    pub fn poll(&mut self) -> Result<Option<WorkResponse>, WorkError> {
        use mpsc::TryRecvError;

        match self.receiver.try_recv() {
            Ok(response) => Ok(Some(response)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkError::WorkerDisconnected),
        }
    }
}
