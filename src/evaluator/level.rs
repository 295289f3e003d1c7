//! Level descriptions as authored and loaded.

use serde::{Deserialize, Serialize};

use crate::core::{
    AgentConfig, EvaluatorError, GameConfig, GraphError, PlayerConfig, PlayerId, PlayerKind,
};
use crate::graph::BoardSnapshot;

/// A playable level: board, rules, and seats.
///
/// ```
/// use compass_board::evaluator::LevelConfig;
///
/// let level = LevelConfig::from_json(r#"{
///     "name": "pair",
///     "board": { "vertices": [ { "id": 0, "neighbors": [1] }, { "id": 1 } ] },
///     "players": [ { "name": "you", "kind": "human" }, { "name": "cpu", "kind": "agent" } ]
/// }"#).unwrap();
///
/// assert_eq!(level.board.len(), 2);
/// assert_eq!(level.game.cards_per_player, 5);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub name: String,
    pub board: BoardSnapshot,
    #[serde(default)]
    pub game: GameConfig,
    pub players: Vec<PlayerConfig>,
}

impl LevelConfig {
    pub fn new(name: impl Into<String>, board: BoardSnapshot, players: Vec<PlayerConfig>) -> Self {
        Self {
            name: name.into(),
            board,
            game: GameConfig::default(),
            players,
        }
    }

    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// First human seat, the one a reference agent stands in for.
    pub fn human_seat(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .position(|player| player.kind.is_human())
            .map(|index| PlayerId::new(index as u8))
    }

    /// Seats with the human seat replaced by `reference`.
    pub(crate) fn with_reference(
        &self,
        reference: &AgentConfig,
    ) -> Result<(PlayerId, Vec<PlayerConfig>), EvaluatorError> {
        let seat = self.human_seat().ok_or(EvaluatorError::NoReferenceSeat)?;
        if self.players.len() < 2 {
            return Err(EvaluatorError::NoOpponents);
        }

        let mut players = self.players.clone();
        players[seat.index()].kind = PlayerKind::Agent(reference.clone());
        Ok((seat, players))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::BoardBuilder;

    fn level() -> LevelConfig {
        LevelConfig::new(
            "grid",
            BoardBuilder::grid(2, 2).snapshot(),
            vec![
                PlayerConfig::agent("cpu", AgentConfig::default().with_blunder_rate(0.5)),
                PlayerConfig::human("you"),
            ],
        )
    }

    #[test]
    fn test_json_round_trip() {
        let level = level().with_game(GameConfig::default().with_cards_per_player(3));
        let parsed = LevelConfig::from_json(&level.to_json().unwrap()).unwrap();
        assert_eq!(parsed, level);
    }

    #[test]
    fn test_reference_replaces_human() {
        let level = level();
        assert_eq!(level.human_seat(), Some(PlayerId::new(1)));

        let (seat, players) = level.with_reference(&AgentConfig::reference()).unwrap();
        assert_eq!(seat, PlayerId::new(1));
        assert_eq!(players[1].name, "you");
        assert_eq!(players[1].kind, PlayerKind::Agent(AgentConfig::reference()));
        assert_eq!(players[0], level.players[0]);
    }

    #[test]
    fn test_reference_needs_human_and_opponent() {
        let mut level = level();
        level.players.remove(1);
        assert!(matches!(
            level.with_reference(&AgentConfig::reference()),
            Err(EvaluatorError::NoReferenceSeat)
        ));

        level.players = vec![PlayerConfig::human("alone")];
        assert!(matches!(
            level.with_reference(&AgentConfig::reference()),
            Err(EvaluatorError::NoOpponents)
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(LevelConfig::from_json("{"), Err(GraphError::Json(_))));
    }
}
