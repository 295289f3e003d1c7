//! Game engine: deck, seats, and the turn loop.
//!
//! One [`GameEngine`] plays one game. It owns the board, asks each seat's
//! oracle for moves in turn order, and awards the ownership bonus at the end.

pub mod deck;
pub mod game;
pub mod player;

pub use deck::{Card, Deck};
pub use game::{GameEngine, GamePhase, GameResult, GameSummary, TurnOutcome, TurnRecord};
pub use player::Player;
