//! Combination scoring.
//!
//! Three independent calculators inspect a just-applied move:
//!
//! - `PairCalculator`: neighbour with the same direction (1 point)
//! - `CancelCalculator`: neighbour with the opposite direction (2 points)
//! - `SequenceCalculator`: clockwise chains of three or more (1 point per vertex)
//!
//! The board runs them in that fixed order after every placement.

pub mod score;
pub mod pair;
pub mod sequence;

pub use score::{total_points, MoveScore, ScoreKind};
pub use pair::{CancelCalculator, PairCalculator};
pub use sequence::{
    backward_sequences, forward_sequences, merge_sequences, path_key, Path, SequenceCalculator,
    SequenceFinder, MIN_SEQUENCE_LEN,
};

use crate::board::Board;
use crate::core::Move;

/// A detector for one kind of scoring combination.
///
/// Calculators only read the board; the move has already been applied.
pub trait ComboCalculator {
    fn name(&self) -> &'static str;

    fn calculate(&self, board: &Board, mv: &Move) -> Vec<MoveScore>;
}

/// Calculators in the order their results are reported.
pub const CALCULATORS: [&(dyn ComboCalculator + Sync); 3] =
    [&PairCalculator, &CancelCalculator, &SequenceCalculator];

/// Run every calculator against an applied move.
pub fn score_move(board: &Board, mv: &Move) -> Vec<MoveScore> {
    CALCULATORS
        .iter()
        .flat_map(|calculator| calculator.calculate(board, mv))
        .collect()
}
