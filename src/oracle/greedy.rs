//! One-ply greedy search agent.
//!
//! Tries every distinct (empty vertex, direction) placement on a cloned board
//! and plays the one that scores most right now, breaking ties at random.
//! With a non-zero blunder rate it sometimes plays a uniformly random legal
//! move instead, which is how weaker level opponents are configured.

use log::trace;

use crate::board::Board;
use crate::core::{AgentConfig, Direction, GameRng, MoveDecision, OracleError, VertexId};
use crate::scoring::total_points;

use super::request::{MoveRequest, PendingMove};
use super::MoveOracle;

/// In-process greedy agent.
#[derive(Clone, Debug)]
pub struct GreedyAgent {
    blunder_rate: f64,
    rng: GameRng,
}

impl GreedyAgent {
    pub fn new(blunder_rate: f64, seed: u64) -> Self {
        Self {
            blunder_rate,
            rng: GameRng::new(seed).for_context("greedy-agent"),
        }
    }

    pub fn from_config(config: &AgentConfig, seed: u64) -> Self {
        Self::new(config.blunder_rate, seed)
    }

    /// Full-strength agent used as the evaluation reference.
    pub fn reference(seed: u64) -> Self {
        Self::new(0.0, seed)
    }

    /// Pick a move for `request` synchronously.
    pub fn decide(&mut self, request: &MoveRequest) -> Result<MoveDecision, OracleError> {
        let legal = request.legal_decisions();
        if legal.is_empty() {
            return Err(OracleError::NoLegalMove);
        }

        if self.blunder_rate > 0.0 && self.rng.gen_bool(self.blunder_rate) {
            return self.rng.choose(&legal).copied().ok_or(OracleError::NoLegalMove);
        }

        let board = Board::from_snapshot(&request.board)?;
        let mut best_points = i64::MIN;
        let mut best: Vec<MoveDecision> = Vec::new();

        // Cards with the same direction score identically; try each once.
        let mut tried: Vec<(VertexId, Direction)> = Vec::new();
        for decision in legal {
            if tried.contains(&(decision.vertex, decision.direction)) {
                continue;
            }
            tried.push((decision.vertex, decision.direction));

            let mut trial = board.clone();
            let points = match trial.make_move(&decision.into_move(request.player)) {
                Ok(scores) => total_points(&scores),
                Err(_) => continue,
            };

            if points > best_points {
                best_points = points;
                best.clear();
            }
            if points == best_points {
                best.push(decision);
            }
        }

        trace!("{} best of {} candidates scores {}", request.player, tried.len(), best_points);
        self.rng.choose(&best).copied().ok_or(OracleError::NoLegalMove)
    }
}

impl MoveOracle for GreedyAgent {
    fn request_move(&mut self, request: MoveRequest) -> PendingMove {
        PendingMove::ready(self.decide(&request))
    }
}
