//! Undirected edges between vertices.

use serde::{Deserialize, Serialize};

use crate::core::VertexId;

/// An undirected edge. Endpoints are stored lowest id first, so `Link::new(a, b)`
/// and `Link::new(b, a)` compare equal.
///
/// ```
/// use compass_board::core::VertexId;
/// use compass_board::graph::Link;
///
/// let link = Link::new(VertexId(7), VertexId(2));
/// assert_eq!(link.id(), "2-7");
/// assert_eq!(link.other(VertexId(2)), Some(VertexId(7)));
/// assert_eq!(link, Link::new(VertexId(2), VertexId(7)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Link {
    a: VertexId,
    b: VertexId,
}

impl Link {
    #[must_use]
    pub fn new(a: VertexId, b: VertexId) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Derived id `"<a>-<b>"`.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}-{}", self.a, self.b)
    }

    #[must_use]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.a, self.b)
    }

    #[must_use]
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.a == vertex || self.b == vertex
    }

    /// The endpoint opposite `vertex`, or `None` if the link does not touch it.
    #[must_use]
    pub fn other(&self, vertex: VertexId) -> Option<VertexId> {
        if self.a == vertex {
            Some(self.b)
        } else if self.b == vertex {
            Some(self.a)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}
