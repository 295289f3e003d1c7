//! Per-seat game state.

use crate::core::{Direction, GameError, PlayerConfig, PlayerId, PlayerKind};

use super::deck::Card;

/// A seat's hand and running score.
///
/// Only the engine mutates players, and only while applying a move.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    kind: PlayerKind,
    hand: Vec<Card>,
    score: i64,
}

impl Player {
    pub(crate) fn new(id: PlayerId, config: &PlayerConfig) -> Self {
        Self {
            id,
            name: config.name.clone(),
            kind: config.kind.clone(),
            hand: Vec::new(),
            score: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Position in turn order.
    #[must_use]
    pub fn order(&self) -> usize {
        self.id.index()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &PlayerKind {
        &self.kind
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Hand as the directions an oracle sees.
    pub fn hand_directions(&self) -> Vec<Direction> {
        self.hand.iter().map(|card| card.direction).collect()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Check that `index` holds a card with `direction`.
    pub(crate) fn check_card(&self, index: usize, direction: Direction) -> Result<Card, GameError> {
        let card = *self.hand.get(index).ok_or(GameError::InvalidHandIndex {
            player: self.id,
            index,
        })?;
        if card.direction != direction {
            return Err(GameError::DirectionMismatch {
                player: self.id,
                index,
                claimed: direction,
                actual: card.direction,
            });
        }
        Ok(card)
    }

    pub(crate) fn take_card(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    pub(crate) fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub(crate) fn add_points(&mut self, points: i64) {
        self.score += points;
    }
}
