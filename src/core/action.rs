//! Placement actions.
//!
//! An oracle answers with a [`MoveDecision`]: which vertex, which card from
//! the hand, and the direction it believes that card carries. The engine
//! checks the decision against the mover's hand and turns it into a
//! [`Move`] for the board.

use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::entity::VertexId;
use super::player::PlayerId;

/// A placement applied to the board.
///
/// ```
/// use compass_board::core::{Direction, Move, PlayerId, VertexId};
///
/// let mv = Move::new(VertexId(4), Direction::NE, PlayerId::new(0), 2);
/// assert_eq!(mv.vertex, VertexId(4));
/// assert_eq!(mv.hand_index, 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target vertex; must be empty when the move is applied.
    pub vertex: VertexId,
    pub direction: Direction,
    pub player: PlayerId,
    /// Index into the mover's hand of the card being consumed.
    pub hand_index: usize,
}

impl Move {
    #[must_use]
    pub const fn new(
        vertex: VertexId,
        direction: Direction,
        player: PlayerId,
        hand_index: usize,
    ) -> Self {
        Self {
            vertex,
            direction,
            player,
            hand_index,
        }
    }
}

/// What an oracle returns for a move request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDecision {
    pub vertex: VertexId,
    pub hand_index: usize,
    pub direction: Direction,
}

impl MoveDecision {
    #[must_use]
    pub const fn new(vertex: VertexId, hand_index: usize, direction: Direction) -> Self {
        Self {
            vertex,
            hand_index,
            direction,
        }
    }

    /// Attach the acting player.
    #[must_use]
    pub const fn into_move(self, player: PlayerId) -> Move {
        Move::new(self.vertex, self.direction, player, self.hand_index)
    }
}
