//! Core types: directions, identifiers, players, moves, RNG, configuration, errors.
//!
//! Everything here is independent of the board topology and of how moves are
//! chosen; the graph, scoring, engine, and evaluator layers build on it.

pub mod direction;
pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use direction::{Direction, Rotation};
pub use entity::{CardId, IdGenerator, RandomIds, SequentialIds, VertexId};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{AgentConfig, GameConfig, PlayerConfig, PlayerKind};
pub use action::{Move, MoveDecision};
pub use error::{EvaluatorError, GameError, GraphError, OracleError};
