//! Cards and the shared draw pile.

use serde::{Deserialize, Serialize};

use crate::core::{CardId, Direction, GameConfig, GameRng};

/// An unplaced directional card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub direction: Direction,
}

/// Shuffled draw pile. Cards are drawn from the top (end) until exhausted.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Every configured direction `cards_per_direction` times, shuffled once.
    pub fn shuffled(config: &GameConfig, rng: &mut GameRng) -> Self {
        let mut cards: Vec<Card> = config
            .directions
            .iter()
            .flat_map(|&direction| std::iter::repeat(direction).take(config.cards_per_direction))
            .enumerate()
            .map(|(i, direction)| Card {
                id: CardId(i as u32),
                direction,
            })
            .collect();

        rng.shuffle(&mut cards);
        Self { cards }
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_composition() {
        let config = GameConfig::default().with_cards_per_direction(3);
        let mut deck = Deck::shuffled(&config, &mut GameRng::new(42));
        assert_eq!(deck.remaining(), 24);

        let mut counts = [0usize; 8];
        while let Some(card) = deck.draw() {
            counts[card.direction.index()] += 1;
        }
        assert_eq!(counts, [3; 8]);
        assert!(deck.is_empty());
        assert!(deck.draw().is_none());
    }

    #[test]
    fn test_card_ids_unique() {
        let config = GameConfig::default();
        let mut deck = Deck::shuffled(&config, &mut GameRng::new(1));
        let mut ids = Vec::new();
        while let Some(card) = deck.draw() {
            assert!(!ids.contains(&card.id));
            ids.push(card.id);
        }
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let config = GameConfig::default();
        let draw_all = |seed| {
            let mut deck = Deck::shuffled(&config, &mut GameRng::new(seed));
            std::iter::from_fn(move || deck.draw()).collect::<Vec<_>>()
        };

        assert_eq!(draw_all(5), draw_all(5));
        assert_ne!(draw_all(5), draw_all(6));
    }
}
