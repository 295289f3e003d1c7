//! Sequence detection.
//!
//! A sequence is a simple path whose directions advance one clockwise step
//! per edge, e.g. `N -> NE -> E`. The placed vertex may sit anywhere in the
//! chain, so detection runs in two phases:
//!
//! 1. **Search**: walk clockwise from the placed vertex (forward set) and
//!    counter-clockwise (backward set, each path reversed so it ends at the
//!    placed vertex). The board may contain cycles and directions repeat, so
//!    a vertex is never revisited within one path and a per-run memo of path
//!    signatures stops identical prefixes from being expanded twice.
//! 2. **Merge**: join every backward path with every forward path through
//!    the placed vertex, deduplicating by path key.
//!
//! Paths shorter than [`MIN_SEQUENCE_LEN`] are discarded. Every distinct
//! maximal path through the placement scores on its own, so branching
//! chains can count shared vertices more than once.

use log::trace;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{Move, Rotation, VertexId};

use super::score::MoveScore;
use super::ComboCalculator;

/// Shortest path that scores as a sequence.
pub const MIN_SEQUENCE_LEN: usize = 3;

/// Ordered vertex ids of a path.
pub type Path = Vec<VertexId>;

/// Canonical key of a path: ids joined in path order.
pub fn path_key(path: &[VertexId]) -> String {
    let mut key = String::with_capacity(path.len() * 4);
    for (i, id) in path.iter().enumerate() {
        if i > 0 {
            key.push('-');
        }
        key.push_str(&id.to_string());
    }
    key
}

/// Depth-first search for maximal monotone paths starting at one vertex.
pub struct SequenceFinder<'a> {
    board: &'a Board,
    rotation: Rotation,
    memo: FxHashSet<String>,
    found: Vec<Path>,
}

impl<'a> SequenceFinder<'a> {
    pub fn new(board: &'a Board, rotation: Rotation) -> Self {
        Self {
            board,
            rotation,
            memo: FxHashSet::default(),
            found: Vec::new(),
        }
    }

    /// All maximal paths of two or more vertices that start at `start` and
    /// step once in this finder's rotation per edge.
    ///
    /// Returns nothing if `start` is empty or absent.
    pub fn find(mut self, start: VertexId) -> Vec<Path> {
        let placed = self.board.vertex(start).and_then(|v| v.direction());
        if placed.is_none() {
            return Vec::new();
        }

        let mut path = vec![start];
        self.explore(&mut path);
        trace!(
            "{:?} search from {}: {} paths, {} prefixes",
            self.rotation,
            start,
            self.found.len(),
            self.memo.len()
        );
        self.found
    }

    fn explore(&mut self, path: &mut Path) {
        if !self.memo.insert(path_key(path)) {
            return;
        }

        let Some(&current) = path.last() else {
            return;
        };
        let Some(wanted) = self
            .board
            .vertex(current)
            .and_then(|v| v.direction())
            .map(|d| d.step(self.rotation))
        else {
            return;
        };

        let board = self.board;
        let next: SmallVec<[VertexId; 4]> = board
            .neighbors(current)
            .filter(|n| n.direction() == Some(wanted) && !path.contains(&n.id()))
            .map(|n| n.id())
            .collect();

        if next.is_empty() {
            if path.len() >= 2 {
                self.found.push(path.clone());
            }
            return;
        }

        for id in next {
            path.push(id);
            self.explore(path);
            path.pop();
        }
    }
}

/// Clockwise paths starting at `start`.
pub fn forward_sequences(board: &Board, start: VertexId) -> Vec<Path> {
    SequenceFinder::new(board, Rotation::Clockwise).find(start)
}

/// Counter-clockwise paths from `start`, reversed so each ends at `start`
/// and reads in clockwise order.
pub fn backward_sequences(board: &Board, start: VertexId) -> Vec<Path> {
    let mut paths = SequenceFinder::new(board, Rotation::CounterClockwise).find(start);
    for path in &mut paths {
        path.reverse();
    }
    paths
}

/// Join backward and forward halves through their shared placed vertex.
///
/// Each merged path is `B` followed by `A` from its first vertex not already
/// in `B`; the tail stops early rather than revisit a vertex of `B`. If
/// either side is empty the other side is returned alone. A path key is
/// emitted at most once per call.
pub fn merge_sequences(backward: &[Path], forward: &[Path]) -> Vec<Path> {
    let mut seen = FxHashSet::default();
    let mut merged = Vec::new();
    let mut emit = |path: Path| {
        if seen.insert(path_key(&path)) {
            merged.push(path);
        }
    };

    if backward.is_empty() || forward.is_empty() {
        for path in backward.iter().chain(forward) {
            emit(path.clone());
        }
        return merged;
    }

    for b in backward {
        for a in forward {
            let mut path = b.clone();
            if let Some(start) = a.iter().position(|v| !b.contains(v)) {
                path.extend(a[start..].iter().take_while(|v| !b.contains(v)));
            }
            emit(path);
        }
    }

    merged
}

/// Scores every merged sequence of at least [`MIN_SEQUENCE_LEN`] vertices.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequenceCalculator;

impl ComboCalculator for SequenceCalculator {
    fn name(&self) -> &'static str {
        "sequence"
    }

    fn calculate(&self, board: &Board, mv: &Move) -> Vec<MoveScore> {
        let forward = forward_sequences(board, mv.vertex);
        let backward = backward_sequences(board, mv.vertex);

        merge_sequences(&backward, &forward)
            .into_iter()
            .filter(|path| path.len() >= MIN_SEQUENCE_LEN)
            .map(MoveScore::sequence)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, PlayerId};
    use crate::graph::BoardBuilder;
    use crate::scoring::ScoreKind;

    fn ids(raw: &[u64]) -> Path {
        raw.iter().copied().map(VertexId).collect()
    }

    fn place(board: &mut Board, vertex: u64, direction: Direction) -> Vec<MoveScore> {
        board
            .make_move(&Move::new(VertexId(vertex), direction, PlayerId::new(0), 0))
            .unwrap()
    }

    fn sequences(scores: &[MoveScore]) -> Vec<&MoveScore> {
        scores.iter().filter(|s| s.kind == ScoreKind::Sequence).collect()
    }

    #[test]
    fn test_path_key() {
        assert_eq!(path_key(&ids(&[3, 10, 2])), "3-10-2");
        assert_eq!(path_key(&[]), "");
    }

    #[test]
    fn test_chain_placing_last() {
        let mut board = BoardBuilder::chain(4).build().unwrap();
        place(&mut board, 0, Direction::N);
        place(&mut board, 1, Direction::NE);
        place(&mut board, 2, Direction::E);
        let scores = place(&mut board, 3, Direction::SE);

        let found = sequences(&scores);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].vertices, ids(&[0, 1, 2, 3]));
        assert_eq!(found[0].points, 4);
    }

    #[test]
    fn test_chain_placing_first_reads_clockwise() {
        let mut board = BoardBuilder::chain(3).build().unwrap();
        place(&mut board, 1, Direction::E);
        place(&mut board, 2, Direction::SE);
        let scores = place(&mut board, 0, Direction::NE);

        let found = sequences(&scores);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].vertices, ids(&[0, 1, 2]));
    }

    #[test]
    fn test_placing_in_the_middle_merges_both_halves() {
        let mut board = BoardBuilder::chain(5).build().unwrap();
        place(&mut board, 0, Direction::W);
        place(&mut board, 1, Direction::NW);
        place(&mut board, 3, Direction::NE);
        place(&mut board, 4, Direction::E);
        let scores = place(&mut board, 2, Direction::N);

        let found = sequences(&scores);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].vertices, ids(&[0, 1, 2, 3, 4]));
        assert_eq!(found[0].points, 5);
    }

    #[test]
    fn test_two_vertices_never_score() {
        let mut board = BoardBuilder::chain(2).build().unwrap();
        place(&mut board, 0, Direction::S);
        let scores = place(&mut board, 1, Direction::SW);

        assert!(sequences(&scores).is_empty());
    }

    #[test]
    fn test_wrap_around_north() {
        let mut board = BoardBuilder::chain(3).build().unwrap();
        place(&mut board, 0, Direction::W);
        place(&mut board, 1, Direction::NW);
        let scores = place(&mut board, 2, Direction::N);

        assert_eq!(sequences(&scores)[0].vertices, ids(&[0, 1, 2]));
    }

    #[test]
    fn test_branches_score_independently() {
        // 0(N) - 1(NE) - 2(E), with 1 also linked to 3(E).
        let mut builder = BoardBuilder::chain(3);
        let extra = builder.add_vertex(Default::default());
        builder.link(VertexId(1), extra);
        let mut board = builder.build().unwrap();

        place(&mut board, 0, Direction::N);
        place(&mut board, 2, Direction::E);
        place(&mut board, 3, Direction::E);
        let scores = place(&mut board, 1, Direction::NE);

        let mut paths: Vec<_> = sequences(&scores).iter().map(|s| s.vertices.clone()).collect();
        paths.sort();
        assert_eq!(paths, vec![ids(&[0, 1, 2]), ids(&[0, 1, 3])]);
    }

    #[test]
    fn test_cycle_of_all_eight_terminates() {
        // Ring of 8 vertices holding N..NW in order: every step is clockwise.
        let mut builder = BoardBuilder::chain(8);
        builder.link(VertexId(7), VertexId(0));
        let mut board = builder.build().unwrap();

        for i in 0..7 {
            place(&mut board, i, Direction::from_index(i as usize));
        }
        let scores = place(&mut board, 7, Direction::NW);

        let found = sequences(&scores);
        assert!(!found.is_empty());
        for score in found {
            let unique: FxHashSet<_> = score.vertices.iter().collect();
            assert_eq!(
                unique.len(),
                score.vertices.len(),
                "vertex repeated in {:?}",
                score.vertices
            );
        }
        assert!(sequences(&scores).iter().any(|s| s.points == 8));
    }

    #[test]
    fn test_forward_and_backward_sets() {
        let mut board = BoardBuilder::chain(3).build().unwrap();
        place(&mut board, 0, Direction::S);
        place(&mut board, 2, Direction::W);
        place(&mut board, 1, Direction::SW);

        assert_eq!(forward_sequences(&board, VertexId(1)), vec![ids(&[1, 2])]);
        assert_eq!(backward_sequences(&board, VertexId(1)), vec![ids(&[0, 1])]);
        assert!(forward_sequences(&board, VertexId(2)).is_empty());
    }

    #[test]
    fn test_empty_start_finds_nothing() {
        let board = BoardBuilder::chain(3).build().unwrap();
        assert!(forward_sequences(&board, VertexId(0)).is_empty());
        assert!(forward_sequences(&board, VertexId(42)).is_empty());
    }

    #[test]
    fn test_merge_with_one_side_empty() {
        let forward = vec![ids(&[1, 2, 3]), ids(&[1, 2, 3])];
        assert_eq!(merge_sequences(&[], &forward), vec![ids(&[1, 2, 3])]);
        assert_eq!(merge_sequences(&forward, &[]), vec![ids(&[1, 2, 3])]);
        assert!(merge_sequences(&[], &[]).is_empty());
    }

    #[test]
    fn test_merge_skips_overlap_by_identity() {
        let backward = vec![ids(&[7, 8, 1])];
        let forward = vec![ids(&[1, 8, 4]), ids(&[1, 5])];

        let merged = merge_sequences(&backward, &forward);
        assert_eq!(merged, vec![ids(&[7, 8, 1, 4]), ids(&[7, 8, 1, 5])]);
    }

    #[test]
    fn test_merge_deduplicates_across_pairs() {
        let backward = vec![ids(&[0, 1]), ids(&[0, 1])];
        let forward = vec![ids(&[1, 2])];

        assert_eq!(merge_sequences(&backward, &forward), vec![ids(&[0, 1, 2])]);
    }
}
