//! Oracles that answer from another thread.
//!
//! [`IsolatedOracle`] moves an agent onto a dedicated worker thread and
//! talks to it only through bincode-encoded requests, so the agent never
//! shares memory with the engine. [`HumanSeat`] forwards requests to
//! whatever drives a human player (usually a UI event loop) and waits for
//! its answer.

use log::{debug, warn};
use std::sync::mpsc;
use std::thread::JoinHandle;

use crate::core::{MoveDecision, OracleError};

use super::request::{MoveRequest, MoveSender, PendingMove};
use super::MoveOracle;

struct Job {
    payload: Vec<u8>,
    reply: MoveSender,
}

/// An agent running on its own worker thread.
pub struct IsolatedOracle {
    jobs: Option<mpsc::Sender<Job>>,
    join: Option<JoinHandle<()>>,
}

impl IsolatedOracle {
    /// Move `inner` onto a new worker thread.
    pub fn spawn<O>(mut inner: O) -> Result<Self, OracleError>
    where
        O: MoveOracle + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<Job>();
        let join = std::thread::Builder::new()
            .name("move-oracle".into())
            .spawn(move || {
                for job in rx {
                    let reply = match MoveRequest::from_bytes(&job.payload) {
                        Ok(request) => inner.request_move(request).wait(None),
                        Err(e) => Err(OracleError::Codec(e)),
                    };
                    if !job.reply.complete(reply) {
                        debug!("move oracle reply dropped: requester gone");
                    }
                }
            })
            .map_err(|e| OracleError::Rejected(format!("spawn worker: {e}")))?;

        Ok(Self {
            jobs: Some(tx),
            join: Some(join),
        })
    }
}

impl MoveOracle for IsolatedOracle {
    fn request_move(&mut self, request: MoveRequest) -> PendingMove {
        let payload = match request.to_bytes() {
            Ok(bytes) => bytes,
            Err(e) => return PendingMove::ready(Err(OracleError::Codec(e))),
        };
        let Some(jobs) = &self.jobs else {
            return PendingMove::ready(Err(OracleError::Disconnected));
        };

        let (reply, pending) = PendingMove::channel();
        if jobs.send(Job { payload, reply }).is_err() {
            warn!("move oracle worker has exited");
            return PendingMove::ready(Err(OracleError::Disconnected));
        }
        pending
    }
}

impl Drop for IsolatedOracle {
    fn drop(&mut self) {
        // Closing the job channel ends the worker loop.
        self.jobs.take();
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// A move request waiting on a human decision.
pub struct MovePrompt {
    pub request: MoveRequest,
    reply: MoveSender,
}

impl MovePrompt {
    /// Answer the prompt. Returns `false` if the engine stopped waiting.
    pub fn respond(self, decision: MoveDecision) -> bool {
        self.reply.send(decision)
    }

    /// Refuse to move; the engine surfaces this as an oracle failure.
    pub fn decline(self, reason: impl Into<String>) -> bool {
        self.reply.fail(OracleError::Rejected(reason.into()))
    }
}

/// Seat driven by an external decision maker through a prompt channel.
pub struct HumanSeat {
    prompts: mpsc::Sender<MovePrompt>,
}

impl HumanSeat {
    /// Create a seat and the receiver its prompts arrive on.
    pub fn channel() -> (Self, mpsc::Receiver<MovePrompt>) {
        let (prompts, rx) = mpsc::channel();
        (Self { prompts }, rx)
    }
}

impl MoveOracle for HumanSeat {
    fn request_move(&mut self, request: MoveRequest) -> PendingMove {
        let (reply, pending) = PendingMove::channel();
        match self.prompts.send(MovePrompt { request, reply }) {
            Ok(()) => pending,
            Err(_) => PendingMove::ready(Err(OracleError::Disconnected)),
        }
    }
}
