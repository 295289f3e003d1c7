//! Pair and cancel detection.
//!
//! Both scan the placed vertex's occupied neighbours and emit one score per
//! qualifying neighbour.

use crate::board::Board;
use crate::core::{Direction, Move, VertexId};

use super::score::MoveScore;
use super::ComboCalculator;

/// Neighbour holds the same direction: 1 point each.
#[derive(Clone, Copy, Debug, Default)]
pub struct PairCalculator;

/// Neighbour holds the opposite direction: 2 points each.
#[derive(Clone, Copy, Debug, Default)]
pub struct CancelCalculator;

fn scan_neighbors(
    board: &Board,
    mv: &Move,
    matches: impl Fn(Direction, Direction) -> bool,
    make: impl Fn(&Move, VertexId) -> MoveScore,
) -> Vec<MoveScore> {
    board
        .neighbors(mv.vertex)
        .filter(|neighbor| neighbor.direction().is_some_and(|d| matches(mv.direction, d)))
        .map(|neighbor| make(mv, neighbor.id()))
        .collect()
}

impl ComboCalculator for PairCalculator {
    fn name(&self) -> &'static str {
        "pair"
    }

    fn calculate(&self, board: &Board, mv: &Move) -> Vec<MoveScore> {
        scan_neighbors(
            board,
            mv,
            |placed, other| placed == other,
            |mv, n| MoveScore::pair(mv.vertex, n),
        )
    }
}

impl ComboCalculator for CancelCalculator {
    fn name(&self) -> &'static str {
        "cancel"
    }

    fn calculate(&self, board: &Board, mv: &Move) -> Vec<MoveScore> {
        scan_neighbors(board, mv, Direction::is_opposite, |mv, n| MoveScore::cancel(mv.vertex, n))
    }
}
