//! The game board.
//!
//! Owns every vertex for the lifetime of one game and is the only place
//! directions and owners change.

mod state;

pub use state::Board;
