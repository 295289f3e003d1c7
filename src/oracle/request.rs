//! Move requests and pending replies.

use serde::{Deserialize, Serialize};
use std::sync::mpsc;
use std::time::Duration;

use crate::core::{Direction, GraphError, MoveDecision, OracleError, PlayerId, PlayerMap};
use crate::graph::BoardSnapshot;

/// Everything an oracle sees when asked for a move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub player: PlayerId,
    pub board: BoardSnapshot,
    /// The mover's hand, by index.
    pub hand: Vec<Direction>,
    pub scores: PlayerMap<i64>,
}

impl MoveRequest {
    /// Every (empty vertex, hand index) combination, vertices in snapshot order.
    pub fn legal_decisions(&self) -> Vec<MoveDecision> {
        self.board
            .empty_vertices()
            .flat_map(|vertex| {
                self.hand
                    .iter()
                    .enumerate()
                    .map(move |(index, &direction)| MoveDecision::new(vertex, index, direction))
            })
            .collect()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, GraphError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GraphError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

type Reply = Result<MoveDecision, OracleError>;

/// Completion side of a [`PendingMove`].
#[derive(Debug)]
pub struct MoveSender {
    tx: mpsc::Sender<Reply>,
}

impl MoveSender {
    /// Deliver a decision. Returns `false` if nobody is waiting any more.
    pub fn send(self, decision: MoveDecision) -> bool {
        self.tx.send(Ok(decision)).is_ok()
    }

    pub fn fail(self, error: OracleError) -> bool {
        self.tx.send(Err(error)).is_ok()
    }

    pub fn complete(self, reply: Reply) -> bool {
        self.tx.send(reply).is_ok()
    }
}

#[derive(Debug)]
enum PendingState {
    Ready(Reply),
    Waiting(mpsc::Receiver<Reply>),
    Taken,
}

/// A move that may not have been decided yet.
///
/// In-process agents return one already resolved; worker-thread agents and
/// human seats resolve it later through a [`MoveSender`].
#[derive(Debug)]
pub struct PendingMove {
    state: PendingState,
}

impl PendingMove {
    pub fn ready(reply: Reply) -> Self {
        Self {
            state: PendingState::Ready(reply),
        }
    }

    /// An unresolved move and the handle that resolves it.
    pub fn channel() -> (MoveSender, Self) {
        let (tx, rx) = mpsc::channel();
        (
            MoveSender { tx },
            Self {
                state: PendingState::Waiting(rx),
            },
        )
    }

    /// Non-blocking poll. Yields the reply at most once.
    pub fn try_take(&mut self) -> Option<Reply> {
        if let PendingState::Waiting(rx) = &self.state {
            let reply = match rx.try_recv() {
                Ok(reply) => reply,
                Err(mpsc::TryRecvError::Empty) => return None,
                Err(mpsc::TryRecvError::Disconnected) => Err(OracleError::Disconnected),
            };
            self.state = PendingState::Ready(reply);
        }
        match std::mem::replace(&mut self.state, PendingState::Taken) {
            PendingState::Ready(reply) => Some(reply),
            _ => None,
        }
    }

    /// Block until the move is decided, optionally bounded by `timeout`.
    pub fn wait(self, timeout: Option<Duration>) -> Reply {
        match self.state {
            PendingState::Ready(reply) => reply,
            PendingState::Waiting(rx) => match timeout {
                Some(limit) => rx.recv_timeout(limit).unwrap_or_else(|e| match e {
                    mpsc::RecvTimeoutError::Timeout => Err(OracleError::Timeout(limit)),
                    mpsc::RecvTimeoutError::Disconnected => Err(OracleError::Disconnected),
                }),
                None => rx.recv().unwrap_or(Err(OracleError::Disconnected)),
            },
            PendingState::Taken => Err(OracleError::Disconnected),
        }
    }
}
