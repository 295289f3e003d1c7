//! Programmatic board authoring.
//!
//! ```
//! use compass_board::core::SequentialIds;
//! use compass_board::graph::{BoardBuilder, Position};
//!
//! let mut builder = BoardBuilder::new(SequentialIds::new());
//! let a = builder.add_vertex(Position::new(0.0, 0.0));
//! let b = builder.add_vertex(Position::new(1.0, 0.0));
//! builder.link(a, b);
//!
//! let board = builder.build().unwrap();
//! assert_eq!(board.len(), 2);
//! assert_eq!(board.links().len(), 1);
//! ```

use crate::board::Board;
use crate::core::{GraphError, IdGenerator, SequentialIds, VertexId};

use super::snapshot::{BoardSnapshot, VertexSnapshot};
use super::vertex::Position;

/// Collects vertices and links, then builds a validated [`Board`].
pub struct BoardBuilder<G: IdGenerator> {
    ids: G,
    vertices: Vec<VertexSnapshot>,
}

impl<G: IdGenerator> BoardBuilder<G> {
    pub fn new(ids: G) -> Self {
        Self {
            ids,
            vertices: Vec::new(),
        }
    }

    /// Add an empty vertex with a fresh id.
    pub fn add_vertex(&mut self, position: Position) -> VertexId {
        let id = self.ids.next_id();
        let mut vertex = VertexSnapshot::new(id);
        vertex.position = position;
        self.vertices.push(vertex);
        id
    }

    /// Connect two vertices. Unknown ids surface as errors from [`build`](Self::build).
    pub fn link(&mut self, a: VertexId, b: VertexId) -> &mut Self {
        let (from, to) = if self.vertices.iter().any(|v| v.id == a) { (a, b) } else { (b, a) };
        if let Some(vertex) = self.vertices.iter_mut().find(|v| v.id == from) {
            vertex.neighbors.push(to);
        }
        self
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.vertices.clone())
    }

    pub fn build(&self) -> Result<Board, GraphError> {
        Board::from_snapshot(&self.snapshot())
    }
}

impl BoardBuilder<SequentialIds> {
    /// `width x height` grid with 4-neighbour adjacency, ids assigned row by row from 0.
    pub fn grid(width: usize, height: usize) -> Self {
        let mut builder = Self::new(SequentialIds::new());
        let mut ids = Vec::with_capacity(width * height);

        for row in 0..height {
            for col in 0..width {
                ids.push(builder.add_vertex(Position::new(col as f32, row as f32)));
            }
        }

        for row in 0..height {
            for col in 0..width {
                let here = ids[row * width + col];
                if col + 1 < width {
                    builder.link(here, ids[row * width + col + 1]);
                }
                if row + 1 < height {
                    builder.link(here, ids[(row + 1) * width + col]);
                }
            }
        }

        builder
    }

    /// Straight path of `length` vertices, ids 0..length.
    pub fn chain(length: usize) -> Self {
        let mut builder = Self::new(SequentialIds::new());
        let ids: Vec<_> = (0..length)
            .map(|i| builder.add_vertex(Position::new(i as f32, 0.0)))
            .collect();

        for pair in ids.windows(2) {
            builder.link(pair[0], pair[1]);
        }

        builder
    }
}
