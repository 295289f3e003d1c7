//! Game and seat configuration.
//!
//! Levels configure the engine by providing:
//! - `GameConfig`: deck composition, hand size, oracle timeout
//! - `PlayerConfig`: one entry per seat, in turn order
//!
//! All types deserialize from level JSON with defaults for omitted fields.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::direction::Direction;

/// Rules parameters for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Copies of each direction in the deck.
    pub cards_per_direction: usize,

    /// Cards dealt to each player at setup.
    pub cards_per_player: usize,

    /// Directions the deck is built from.
    pub directions: Vec<Direction>,

    /// How long the engine waits on an oracle before failing the move.
    /// `None` waits indefinitely.
    pub move_timeout_ms: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cards_per_direction: 3,
            cards_per_player: 5,
            directions: Direction::ALL.to_vec(),
            move_timeout_ms: None,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cards_per_direction(mut self, count: usize) -> Self {
        self.cards_per_direction = count;
        self
    }

    pub fn with_cards_per_player(mut self, count: usize) -> Self {
        self.cards_per_player = count;
        self
    }

    /// Restrict the deck to a subset of directions.
    pub fn with_directions(mut self, directions: impl Into<Vec<Direction>>) -> Self {
        self.directions = directions.into();
        self
    }

    pub fn with_move_timeout(mut self, timeout: Duration) -> Self {
        self.move_timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// Total cards in a fresh deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.directions.len() * self.cards_per_direction
    }

    #[must_use]
    pub fn move_timeout(&self) -> Option<Duration> {
        self.move_timeout_ms.map(Duration::from_millis)
    }
}

/// Tuning for an automated seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Probability of playing a uniformly random legal move instead of the
    /// best-scoring one. 0.0 is full strength.
    pub blunder_rate: f64,

    /// Run the agent on its own worker thread behind a channel boundary.
    pub isolated: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            blunder_rate: 0.0,
            isolated: false,
        }
    }
}

impl AgentConfig {
    /// Full-strength greedy agent.
    pub fn reference() -> Self {
        Self::default()
    }

    pub fn with_blunder_rate(mut self, rate: f64) -> Self {
        self.blunder_rate = rate;
        self
    }

    pub fn isolated(mut self) -> Self {
        self.isolated = true;
        self
    }
}

/// Who decides a seat's moves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerKind {
    Human,
    Agent(AgentConfig),
}

impl PlayerKind {
    #[must_use]
    pub fn is_human(&self) -> bool {
        matches!(self, PlayerKind::Human)
    }
}

/// One seat in turn order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    #[serde(flatten)]
    pub kind: PlayerKind,
}

impl PlayerConfig {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    pub fn agent(name: impl Into<String>, config: AgentConfig) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Agent(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deck_size() {
        let config = GameConfig::default();
        assert_eq!(config.deck_size(), 24);
        assert_eq!(config.with_cards_per_direction(5).deck_size(), 40);
    }

    #[test]
    fn test_restricted_directions() {
        let config = GameConfig::new()
            .with_directions([Direction::N, Direction::S])
            .with_cards_per_direction(2);
        assert_eq!(config.deck_size(), 4);
    }

    #[test]
    fn test_timeout() {
        assert_eq!(GameConfig::default().move_timeout(), None);
        let config = GameConfig::default().with_move_timeout(Duration::from_millis(250));
        assert_eq!(config.move_timeout(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_game_config_json_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"cards_per_player": 4}"#).unwrap();
        assert_eq!(config.cards_per_player, 4);
        assert_eq!(config.cards_per_direction, 3);
        assert_eq!(config.directions.len(), 8);
    }

    #[test]
    fn test_player_config_json() {
        let json = r#"[
            {"name": "you", "kind": "human"},
            {"name": "bot", "kind": "agent", "blunder_rate": 0.25}
        ]"#;
        let players: Vec<PlayerConfig> = serde_json::from_str(json).unwrap();

        assert!(players[0].kind.is_human());
        match &players[1].kind {
            PlayerKind::Agent(agent) => {
                assert_eq!(agent.blunder_rate, 0.25);
                assert!(!agent.isolated);
            }
            PlayerKind::Human => panic!("expected agent"),
        }
    }
}
