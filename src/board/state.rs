//! The board: vertex storage, placement, and ownership.

use im::OrdMap;
use log::trace;

use crate::core::{GameError, GraphError, Move, PlayerId, PlayerMap, VertexId};
use crate::graph::{BoardSnapshot, Link, Vertex, VertexSnapshot};
use crate::scoring::{self, MoveScore};

/// Game board.
///
/// Backed by a persistent ordered map, so `clone()` is O(1) and the clone is
/// fully independent: mutating either side never affects the other. Agents
/// lean on this to try every candidate placement.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    vertices: OrdMap<VertexId, Vertex>,
}

impl Board {
    /// Build a board from a snapshot, wiring every listed adjacency in both
    /// directions.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, GraphError> {
        let mut vertices = OrdMap::new();

        for desc in &snapshot.vertices {
            let mut vertex = Vertex::new(desc.id, desc.position);
            vertex.restore(desc.direction, desc.owner);
            if vertices.insert(desc.id, vertex).is_some() {
                return Err(GraphError::DuplicateVertex(desc.id));
            }
        }

        for desc in &snapshot.vertices {
            for &neighbor in &desc.neighbors {
                if neighbor == desc.id {
                    return Err(GraphError::SelfLink(desc.id));
                }
                if !vertices.contains_key(&neighbor) {
                    return Err(GraphError::UnknownNeighbor {
                        vertex: desc.id,
                        neighbor,
                    });
                }

                let link = Link::new(desc.id, neighbor);
                for end in [desc.id, neighbor] {
                    if let Some(vertex) = vertices.get_mut(&end) {
                        vertex.attach(link);
                    }
                }
            }
        }

        Ok(Self { vertices })
    }

    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Self::from_snapshot(&BoardSnapshot::from_json(json)?)
    }

    /// Describe the current state. Neighbor lists are complete on both ends.
    pub fn snapshot(&self) -> BoardSnapshot {
        let vertices = self
            .vertices
            .values()
            .map(|vertex| VertexSnapshot {
                id: vertex.id(),
                position: vertex.position(),
                direction: vertex.direction(),
                owner: vertex.owner(),
                neighbors: vertex.neighbor_ids().collect(),
            })
            .collect();

        BoardSnapshot::new(vertices)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Vertices in id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// Adjacent vertices. Empty if `id` is not on the board.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices
            .get(&id)
            .into_iter()
            .flat_map(|vertex| vertex.neighbor_ids())
            .filter_map(move |neighbor| self.vertices.get(&neighbor))
    }

    /// Every link once, sorted.
    pub fn links(&self) -> Vec<Link> {
        let mut links: Vec<Link> = self
            .vertices
            .values()
            .flat_map(|vertex| vertex.links().iter().copied())
            .collect();
        links.sort_unstable();
        links.dedup();
        links
    }

    pub fn empty_vertices(&self) -> Vec<VertexId> {
        self.vertices
            .values()
            .filter(|vertex| vertex.is_empty())
            .map(Vertex::id)
            .collect()
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.vertices.values().filter(|vertex| vertex.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.vertices.values().all(|vertex| !vertex.is_empty())
    }

    /// Place a card and score it.
    ///
    /// Runs the pair, cancel, and sequence calculators in that order and
    /// returns their concatenated results. Ownership is left to the caller
    /// (see [`claim`](Self::claim)). On error the board is unchanged.
    pub fn make_move(&mut self, mv: &Move) -> Result<Vec<MoveScore>, GameError> {
        let vertex = self
            .vertices
            .get_mut(&mv.vertex)
            .ok_or(GameError::UnknownVertex(mv.vertex))?;

        if !vertex.is_empty() {
            return Err(GameError::InvalidPlacement(mv.vertex));
        }
        vertex.set_direction(mv.direction);

        let scores = scoring::score_move(self, mv);
        trace!(
            "{} placed {} on {}: {} combinations",
            mv.player,
            mv.direction,
            mv.vertex,
            scores.len()
        );

        Ok(scores)
    }

    /// Give `player` ownership of every vertex in `scores`.
    ///
    /// Returns the number of distinct vertices touched.
    pub fn claim(&mut self, scores: &[MoveScore], player: PlayerId) -> usize {
        let mut touched = Vec::new();
        for id in scores.iter().flat_map(|score| score.vertices.iter()) {
            if touched.contains(id) {
                continue;
            }
            if let Some(vertex) = self.vertices.get_mut(id) {
                vertex.set_owner(player);
                touched.push(*id);
            }
        }
        touched.len()
    }

    /// Owned vertex ids per seat of `seats`, in id order. Owners without a
    /// seat in `seats` are ignored.
    pub fn ownership<T>(&self, seats: &PlayerMap<T>) -> PlayerMap<Vec<VertexId>> {
        let mut owned = seats.map(|_, _| Vec::new());
        for vertex in self.vertices() {
            if let Some(ids) = vertex.owner().and_then(|owner| owned.get_mut(owner)) {
                ids.push(vertex.id());
            }
        }
        owned
    }

    /// Vertices currently owned by anyone.
    #[must_use]
    pub fn owned_count(&self) -> usize {
        self.vertices.values().filter(|vertex| vertex.owner().is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;
    use crate::graph::BoardBuilder;
    use crate::scoring::ScoreKind;

    fn p0() -> PlayerId {
        PlayerId::new(0)
    }

    #[test]
    fn test_make_move_on_empty_board_scores_nothing() {
        let mut board = BoardBuilder::grid(2, 2).build().unwrap();
        let scores = board.make_move(&Move::new(VertexId(0), Direction::N, p0(), 0)).unwrap();

        assert!(scores.is_empty());
        assert_eq!(board.vertex(VertexId(0)).unwrap().direction(), Some(Direction::N));
        assert_eq!(board.empty_count(), 3);
    }

    #[test]
    fn test_occupied_vertex_is_rejected() {
        let mut board = BoardBuilder::grid(2, 2).build().unwrap();
        board.make_move(&Move::new(VertexId(0), Direction::N, p0(), 0)).unwrap();
        let before = board.clone();

        let err = board
            .make_move(&Move::new(VertexId(0), Direction::S, PlayerId::new(1), 0))
            .unwrap_err();

        assert!(matches!(err, GameError::InvalidPlacement(VertexId(0))));
        assert_eq!(board, before);
    }

    #[test]
    fn test_unknown_vertex_is_rejected() {
        let mut board = BoardBuilder::chain(2).build().unwrap();
        let err = board.make_move(&Move::new(VertexId(7), Direction::N, p0(), 0)).unwrap_err();
        assert!(matches!(err, GameError::UnknownVertex(VertexId(7))));
    }

    #[test]
    fn test_calculators_run_in_order() {
        // Centre 0 touches a matching N, an opposite S, and the head of NE -> E.
        let json = r#"{"vertices": [
            {"id": 0, "neighbors": [1, 2, 3]},
            {"id": 1, "direction": "N"},
            {"id": 2, "direction": "S"},
            {"id": 3, "direction": "NE", "neighbors": [4]},
            {"id": 4, "direction": "E"}
        ]}"#;
        let mut board = Board::from_json(json).unwrap();

        let scores = board.make_move(&Move::new(VertexId(0), Direction::N, p0(), 0)).unwrap();
        let kinds: Vec<_> = scores.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![ScoreKind::Pair, ScoreKind::Cancel, ScoreKind::Sequence]);
        assert_eq!(scores.iter().map(|s| s.points).sum::<i64>(), 1 + 2 + 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let board = BoardBuilder::grid(2, 2).build().unwrap();
        let mut copy = board.clone();
        copy.make_move(&Move::new(VertexId(3), Direction::E, p0(), 0)).unwrap();

        assert!(board.vertex(VertexId(3)).unwrap().is_empty());
        assert!(!copy.vertex(VertexId(3)).unwrap().is_empty());
    }

    #[test]
    fn test_claim_and_ownership() {
        let mut board = BoardBuilder::chain(3).build().unwrap();
        board.make_move(&Move::new(VertexId(0), Direction::W, p0(), 0)).unwrap();
        let scores = board
            .make_move(&Move::new(VertexId(1), Direction::W, PlayerId::new(1), 0))
            .unwrap();

        assert_eq!(board.claim(&scores, PlayerId::new(1)), 2);

        let owned = board.ownership(&PlayerMap::with_value(2, ()));
        assert!(owned[PlayerId::new(0)].is_empty());
        assert_eq!(owned[PlayerId::new(1)], vec![VertexId(0), VertexId(1)]);
        assert_eq!(board.owned_count(), 2);
    }

    #[test]
    fn test_ownership_ignores_unseated_owners() {
        let mut board = BoardBuilder::chain(2).build().unwrap();
        board.make_move(&Move::new(VertexId(0), Direction::N, p0(), 0)).unwrap();
        let scores = board
            .make_move(&Move::new(VertexId(1), Direction::N, PlayerId::new(3), 0))
            .unwrap();
        board.claim(&scores, PlayerId::new(3));

        let owned = board.ownership(&PlayerMap::with_value(1, ()));
        assert_eq!(owned.player_count(), 1);
        assert!(owned[p0()].is_empty());
        assert_eq!(board.owned_count(), 2);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut board = BoardBuilder::grid(3, 2).build().unwrap();
        board.make_move(&Move::new(VertexId(1), Direction::SW, p0(), 0)).unwrap();
        board.make_move(&Move::new(VertexId(2), Direction::SW, p0(), 0)).unwrap();
        let scores = board.make_move(&Move::new(VertexId(5), Direction::SW, p0(), 0)).unwrap();
        board.claim(&scores, p0());

        let rebuilt = Board::from_snapshot(&board.snapshot()).unwrap();
        assert_eq!(rebuilt, board);
        assert_eq!(rebuilt.links(), board.links());
    }

    #[test]
    fn test_one_sided_adjacency_is_wired_both_ways() {
        let json = r#"{"vertices": [{"id": 1, "neighbors": [2]}, {"id": 2}]}"#;
        let board = Board::from_json(json).unwrap();

        assert_eq!(
            board.neighbors(VertexId(2)).map(|v| v.id()).collect::<Vec<_>>(),
            vec![VertexId(1)]
        );
    }

    #[test]
    fn test_invalid_snapshots() {
        let duplicate = r#"{"vertices": [{"id": 1}, {"id": 1}]}"#;
        assert!(matches!(Board::from_json(duplicate), Err(GraphError::DuplicateVertex(_))));

        let self_link = r#"{"vertices": [{"id": 1, "neighbors": [1]}]}"#;
        assert!(matches!(Board::from_json(self_link), Err(GraphError::SelfLink(_))));

        let dangling = r#"{"vertices": [{"id": 1, "neighbors": [5]}]}"#;
        assert!(matches!(Board::from_json(dangling), Err(GraphError::UnknownNeighbor { .. })));
    }
}
