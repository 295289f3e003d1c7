//! Board vertices.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Direction, PlayerId, VertexId};

use super::link::Link;

/// Authoring position of a vertex. Game logic never reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A node that can hold one placed card.
///
/// Only the [`Board`](crate::board::Board) mutates direction and owner.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    id: VertexId,
    position: Position,
    direction: Option<Direction>,
    owner: Option<PlayerId>,
    /// Typical boards have degree <= 4.
    links: SmallVec<[Link; 4]>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId, position: Position) -> Self {
        Self {
            id,
            position,
            direction: None,
            owner: None,
            links: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.direction.is_none()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Ids of adjacent vertices, in link insertion order.
    pub fn neighbor_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.links.iter().filter_map(move |link| link.other(self.id))
    }

    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    pub(crate) fn set_owner(&mut self, owner: PlayerId) {
        self.owner = Some(owner);
    }

    /// Add a link if it touches this vertex and is not already present.
    pub(crate) fn attach(&mut self, link: Link) -> bool {
        if !link.touches(self.id) || self.links.contains(&link) {
            return false;
        }
        self.links.push(link);
        true
    }

    pub(crate) fn restore(&mut self, direction: Option<Direction>, owner: Option<PlayerId>) {
        self.direction = direction;
        self.owner = owner;
    }
}
