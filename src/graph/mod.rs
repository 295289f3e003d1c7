//! Graph model: vertices, links, and the snapshot format.
//!
//! The board topology is fixed for a whole game. Vertices gain a direction
//! and possibly an owner as play proceeds; links never change.

pub mod vertex;
pub mod link;
pub mod snapshot;
pub mod builder;

pub use vertex::{Position, Vertex};
pub use link::Link;
pub use snapshot::{BoardSnapshot, VertexSnapshot};
pub use builder::BoardBuilder;
