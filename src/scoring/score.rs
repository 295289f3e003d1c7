//! Scored combinations.

use serde::{Deserialize, Serialize};

use crate::core::VertexId;

/// Kind of combination a score came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreKind {
    Pair,
    Cancel,
    Sequence,
    /// End-of-game ownership bonus.
    Bonus,
}

/// One scored combination and the vertices that formed it.
///
/// For pairs and cancels the placed vertex comes first; sequences list their
/// vertices in clockwise order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    pub kind: ScoreKind,
    pub points: i64,
    pub vertices: Vec<VertexId>,
}

impl MoveScore {
    pub const PAIR_POINTS: i64 = 1;
    pub const CANCEL_POINTS: i64 = 2;

    #[must_use]
    pub fn pair(placed: VertexId, neighbor: VertexId) -> Self {
        Self {
            kind: ScoreKind::Pair,
            points: Self::PAIR_POINTS,
            vertices: vec![placed, neighbor],
        }
    }

    #[must_use]
    pub fn cancel(placed: VertexId, neighbor: VertexId) -> Self {
        Self {
            kind: ScoreKind::Cancel,
            points: Self::CANCEL_POINTS,
            vertices: vec![placed, neighbor],
        }
    }

    /// One point per vertex in the path.
    #[must_use]
    pub fn sequence(path: Vec<VertexId>) -> Self {
        Self {
            kind: ScoreKind::Sequence,
            points: path.len() as i64,
            vertices: path,
        }
    }

    /// One point per owned vertex.
    #[must_use]
    pub fn bonus(owned: Vec<VertexId>) -> Self {
        Self {
            kind: ScoreKind::Bonus,
            points: owned.len() as i64,
            vertices: owned,
        }
    }
}

/// Total points across a list of scores.
pub fn total_points(scores: &[MoveScore]) -> i64 {
    scores.iter().map(|score| score.points).sum()
}
