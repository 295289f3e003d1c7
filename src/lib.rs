//! # compass-board
//!
//! Rules engine for a two-player directional card placement game played on
//! an arbitrary graph, plus a self-play harness that rates level difficulty.
//!
//! ## Design Principles
//!
//! 1. **Graph-Agnostic**: Boards are any undirected graph, authored as a
//!    serializable snapshot. Nothing assumes a grid.
//!
//! 2. **Oracles at the Seam**: The engine never knows who is playing. Humans,
//!    in-process agents, and isolated worker agents all implement
//!    `MoveOracle`.
//!
//! 3. **Deterministic by Seed**: Deck order, vertex ids, and agent choices all
//!    derive from `GameRng`, so a seed reproduces a game exactly.
//!
//! ## Architecture
//!
//! - **Persistent Board**: Vertices live in an `im-rs` map, so agents clone
//!   the board in O(1) to try moves.
//!
//! - **Ordered Scoring**: Pair, cancel, and sequence calculators run in that
//!   order and return every combination a placement formed.
//!
//! ## Modules
//!
//! - `core`: Directions, ids, players, RNG, configuration, errors
//! - `graph`: Vertices, links, snapshots, and board authoring
//! - `board`: The live board and move application
//! - `scoring`: Combination calculators and sequence search
//! - `oracle`: Move oracles and agents
//! - `engine`: Deck, seats, and the turn loop
//! - `evaluator`: Parallel difficulty estimation

pub mod core;
pub mod graph;
pub mod board;
pub mod scoring;
pub mod oracle;
pub mod engine;
pub mod evaluator;

// Re-export commonly used types
pub use crate::core::{
    Direction, Rotation,
    VertexId, CardId, IdGenerator, SequentialIds, RandomIds,
    PlayerId, PlayerMap, GameRng,
    GameConfig, AgentConfig, PlayerConfig, PlayerKind,
    Move, MoveDecision,
    GraphError, GameError, OracleError, EvaluatorError,
};

pub use crate::graph::{BoardBuilder, BoardSnapshot, Link, Position, Vertex, VertexSnapshot};

pub use crate::board::Board;

pub use crate::scoring::{
    ComboCalculator, MoveScore, ScoreKind,
    PairCalculator, CancelCalculator, SequenceCalculator, SequenceFinder,
};

pub use crate::oracle::{
    MoveOracle, OracleFactory, AgentFactory, MoveRequest, PendingMove, MoveSender,
    GreedyAgent, IsolatedOracle, HumanSeat, MovePrompt,
};

pub use crate::engine::{
    Card, GameEngine, GamePhase, GameResult, GameSummary, TurnOutcome, TurnRecord,
};

pub use crate::evaluator::{EvaluationReport, EvaluatorConfig, LevelConfig, LevelEvaluator};
