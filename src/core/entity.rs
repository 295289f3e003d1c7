//! Identifiers for board vertices and cards, and the generators that mint them.
//!
//! Ids are handed out by an injected [`IdGenerator`] rather than a
//! process-wide registry. Tests use [`SequentialIds`] for predictable ids;
//! authoring tools can use [`RandomIds`] seeded from a [`GameRng`].
//!
//! ```
//! use compass_board::core::{IdGenerator, SequentialIds, VertexId};
//!
//! let mut ids = SequentialIds::new();
//! assert_eq!(ids.next_id(), VertexId(0));
//! assert_eq!(ids.next_id(), VertexId(1));
//! ```

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Stable identifier of a board vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a single card in a deck.
///
/// Two cards with the same direction are still distinct cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Source of fresh vertex ids.
///
/// Generators are not required to guarantee uniqueness on their own; the
/// board builder rejects duplicates.
pub trait IdGenerator {
    fn next_id(&mut self) -> VertexId;
}

/// Counts up from a starting value.
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting at `first`.
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> VertexId {
        let id = VertexId(self.next);
        self.next += 1;
        id
    }
}

/// Draws 64-bit ids from a seeded RNG.
#[derive(Clone, Debug)]
pub struct RandomIds {
    rng: GameRng,
}

impl RandomIds {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed).for_context("vertex-ids"),
        }
    }
}

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> VertexId {
        VertexId(self.rng.next_u64())
    }
}
