//! Move oracles: whoever decides the next placement for a seat.
//!
//! The engine only ever calls [`MoveOracle::request_move`] and waits on the
//! returned [`PendingMove`]. Implementations:
//!
//! - `GreedyAgent`: in-process one-ply search, answers immediately
//! - `IsolatedOracle`: any agent moved onto a worker thread, requests crossing
//!   the boundary as bincode bytes
//! - `HumanSeat`: forwards prompts to an external decision maker
//!
//! Seats are built from [`PlayerKind`] through an [`OracleFactory`], which is
//! also the hook the level evaluator uses to construct fresh agents per game.

pub mod request;
pub mod greedy;
pub mod worker;

pub use request::{MoveRequest, MoveSender, PendingMove};
pub use greedy::GreedyAgent;
pub use worker::{HumanSeat, IsolatedOracle, MovePrompt};

use crate::core::{AgentConfig, OracleError, PlayerConfig, PlayerId, PlayerKind};

/// Decides moves for one seat.
pub trait MoveOracle {
    /// Ask for a move. The reply may arrive later.
    fn request_move(&mut self, request: MoveRequest) -> PendingMove;
}

impl<O: MoveOracle + ?Sized> MoveOracle for Box<O> {
    fn request_move(&mut self, request: MoveRequest) -> PendingMove {
        (**self).request_move(request)
    }
}

/// Builds the oracle for a seat at the start of a game.
pub trait OracleFactory: Send + Sync {
    fn build(
        &self,
        seat: PlayerId,
        config: &PlayerConfig,
        seed: u64,
    ) -> Result<Box<dyn MoveOracle>, OracleError>;
}

/// Build an automated seat from its configuration.
pub fn agent_oracle(config: &AgentConfig, seed: u64) -> Result<Box<dyn MoveOracle>, OracleError> {
    let agent = GreedyAgent::from_config(config, seed);
    if config.isolated {
        Ok(Box::new(IsolatedOracle::spawn(agent)?))
    } else {
        Ok(Box::new(agent))
    }
}

/// Builds agents from configuration. Human seats are rejected: they need an
/// interactive oracle supplied by the caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct AgentFactory;

impl OracleFactory for AgentFactory {
    fn build(
        &self,
        seat: PlayerId,
        config: &PlayerConfig,
        seed: u64,
    ) -> Result<Box<dyn MoveOracle>, OracleError> {
        match &config.kind {
            PlayerKind::Agent(agent) => agent_oracle(agent, seed),
            PlayerKind::Human => Err(OracleError::Rejected(format!(
                "{seat} ({}) is a human seat",
                config.name
            ))),
        }
    }
}
