//! Error types.
//!
//! Each layer has its own enum; higher layers wrap lower ones with `#[from]`
//! so `?` carries a graph failure up through the engine into the evaluator.

use thiserror::Error;

use super::direction::Direction;
use super::entity::VertexId;
use super::player::PlayerId;

/// Malformed board descriptions and snapshot codec failures.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {0} appears more than once")]
    DuplicateVertex(VertexId),
    #[error("vertex {vertex} lists unknown neighbor {neighbor}")]
    UnknownNeighbor { vertex: VertexId, neighbor: VertexId },
    #[error("vertex {0} cannot link to itself")]
    SelfLink(VertexId),
    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("snapshot encoding: {0}")]
    Binary(#[from] bincode::Error),
}

/// Failures surfaced by a move oracle.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("no decision within {0:?}")]
    Timeout(std::time::Duration),
    #[error("oracle disconnected")]
    Disconnected,
    #[error("no legal move available")]
    NoLegalMove,
    #[error("oracle rejected request: {0}")]
    Rejected(String),
    #[error("request encoding: {0}")]
    Codec(#[from] GraphError),
}

/// Errors raised while setting up or playing a game.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("vertex {0} is already occupied")]
    InvalidPlacement(VertexId),
    #[error("vertex {0} is not on the board")]
    UnknownVertex(VertexId),
    #[error("deck holds {available} cards after dealing but the board has {empty} empty vertices")]
    InsufficientDeck { empty: usize, available: usize },
    #[error("{player} has no card at hand index {index}")]
    InvalidHandIndex { player: PlayerId, index: usize },
    #[error("{player} claimed {claimed} but the card at hand index {index} is {actual}")]
    DirectionMismatch {
        player: PlayerId,
        index: usize,
        claimed: Direction,
        actual: Direction,
    },
    #[error("game needs between 1 and 255 players, got {0}")]
    NoPlayers(usize),
    #[error("{players} players configured but {oracles} oracles supplied")]
    SeatMismatch { players: usize, oracles: usize },
    #[error("game is already finished")]
    GameFinished,
    #[error("oracle failure for {player}: {source}")]
    Oracle {
        player: PlayerId,
        #[source]
        source: OracleError,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors raised by the level evaluator.
#[derive(Debug, Error)]
pub enum EvaluatorError {
    #[error("level has no human seat to replace with the reference agent")]
    NoReferenceSeat,
    #[error("level has no opponent seats")]
    NoOpponents,
    #[error("oracle construction failed: {0}")]
    Oracle(#[from] OracleError),
    #[error("lane {lane} failed in game {game}: {source}")]
    Lane {
        lane: usize,
        game: u64,
        #[source]
        source: GameError,
    },
    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::InvalidPlacement(VertexId(4));
        assert_eq!(err.to_string(), "vertex 4 is already occupied");

        let err = GameError::InsufficientDeck { empty: 9, available: 4 };
        assert!(err.to_string().contains("9 empty vertices"));
    }

    #[test]
    fn test_graph_error_converts() {
        let graph = GraphError::DuplicateVertex(VertexId(1));
        let game: GameError = graph.into();
        assert!(matches!(game, GameError::Graph(GraphError::DuplicateVertex(_))));
    }
}
