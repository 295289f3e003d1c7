//! Serializable board description.
//!
//! This is both the level authoring format and the view handed to oracles.
//! A board rebuilt from its own snapshot has the same vertex ids, directions,
//! owners, and adjacency.

use serde::{Deserialize, Serialize};

use crate::core::{Direction, GraphError, PlayerId, VertexId};

use super::vertex::Position;

/// One vertex as it appears in a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexSnapshot {
    pub id: VertexId,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub direction: Option<Direction>,
    #[serde(default)]
    pub owner: Option<PlayerId>,
    #[serde(default)]
    pub neighbors: Vec<VertexId>,
}

impl VertexSnapshot {
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            position: Position::default(),
            direction: None,
            owner: None,
            neighbors: Vec::new(),
        }
    }

    pub fn with_neighbors(mut self, neighbors: impl IntoIterator<Item = VertexId>) -> Self {
        self.neighbors = neighbors.into_iter().collect();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_owner(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }
}

/// Full board description: vertices in id order with their adjacency.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub vertices: Vec<VertexSnapshot>,
}

impl BoardSnapshot {
    pub fn new(vertices: Vec<VertexSnapshot>) -> Self {
        Self { vertices }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&VertexSnapshot> {
        self.vertices.iter().find(|v| v.id == id)
    }

    /// Ids of vertices without a direction.
    pub fn empty_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().filter(|v| v.direction.is_none()).map(|v| v.id)
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact encoding used across the isolated-oracle boundary.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GraphError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GraphError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
