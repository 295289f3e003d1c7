//! Turn-driven game engine.
//!
//! ## Lifecycle
//!
//! - **Setup** (in [`GameEngine::new`]): shuffle the deck, build the board,
//!   deal hands in seat order, and reject boards the deck cannot fill.
//! - **Turn**: the seat whose turn it is picks a move through its oracle; the
//!   board scores it; the mover banks the points, takes ownership of every
//!   scored vertex, and draws a replacement card.
//! - **Finished**: reached when, before a turn, the deck is empty or the board
//!   is full. Each player then earns one bonus point per owned vertex.
//!
//! Moves are strictly sequential; only the oracle wait may block.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{GameConfig, GameError, GameRng, Move, PlayerConfig, PlayerId, PlayerMap};
use crate::graph::BoardSnapshot;
use crate::oracle::{MoveOracle, MoveRequest};
use crate::scoring::{total_points, MoveScore};

use super::deck::{Card, Deck};
use super::player::Player;

/// Where the engine is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Dealt and ready; no turn played yet.
    Setup,
    /// The given seat moved last.
    Turn(PlayerId),
    Finished,
}

/// Outcome of a completed game by score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single highest score.
    Winner(PlayerId),
    /// Several seats share the highest score.
    Draw(Vec<PlayerId>),
}

impl GameResult {
    fn from_scores(scores: &PlayerMap<i64>) -> Self {
        let best = scores.values().copied().max().unwrap_or(0);
        let leaders: Vec<_> = scores.iter().filter(|&(_, &s)| s == best).map(|(p, _)| p).collect();
        match leaders.as_slice() {
            [only] => GameResult::Winner(*only),
            _ => GameResult::Draw(leaders),
        }
    }

    /// Check if a player won outright.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// One applied turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 0-based turn number.
    pub turn: usize,
    pub mv: Move,
    pub card: Card,
    pub scores: Vec<MoveScore>,
    pub points: i64,
    /// Replacement card, if the deck had one.
    pub drawn: Option<Card>,
}

/// Final state of a finished game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Final scores including the ownership bonus.
    pub scores: PlayerMap<i64>,
    pub bonus: PlayerMap<MoveScore>,
    pub turns: usize,
    pub result: GameResult,
}

impl GameSummary {
    /// Sum of every score except `player`'s.
    #[must_use]
    pub fn opponents_total(&self, player: PlayerId) -> i64 {
        self.scores.iter().filter(|(p, _)| *p != player).map(|(_, s)| *s).sum()
    }
}

/// What [`GameEngine::play_turn`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnOutcome {
    Played(TurnRecord),
    Finished(GameSummary),
}

/// Runs one game from deal to bonus.
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    deck: Deck,
    players: PlayerMap<Player>,
    oracles: Vec<Box<dyn MoveOracle>>,
    phase: GamePhase,
    history: Vec<TurnRecord>,
    summary: Option<GameSummary>,
}

impl GameEngine {
    /// Set up a game: shuffle, build the board, deal.
    ///
    /// `oracles[i]` decides for `players[i]`. Fails with
    /// [`GameError::InsufficientDeck`] if the cards left after dealing cannot
    /// cover every empty vertex.
    pub fn new(
        config: GameConfig,
        snapshot: &BoardSnapshot,
        players: &[PlayerConfig],
        oracles: Vec<Box<dyn MoveOracle>>,
        seed: u64,
    ) -> Result<Self, GameError> {
        if players.is_empty() || players.len() > u8::MAX as usize {
            return Err(GameError::NoPlayers(players.len()));
        }
        if oracles.len() != players.len() {
            return Err(GameError::SeatMismatch {
                players: players.len(),
                oracles: oracles.len(),
            });
        }

        let mut deck = Deck::shuffled(&config, &mut GameRng::new(seed).for_context("deck"));
        let board = Board::from_snapshot(snapshot)?;

        let mut seats: Vec<Player> = players
            .iter()
            .enumerate()
            .map(|(i, cfg)| Player::new(PlayerId::new(i as u8), cfg))
            .collect();
        for player in &mut seats {
            for card in std::iter::from_fn(|| deck.draw()).take(config.cards_per_player) {
                player.receive(card);
            }
        }

        let empty = board.empty_count();
        if empty > deck.remaining() {
            return Err(GameError::InsufficientDeck {
                empty,
                available: deck.remaining(),
            });
        }

        debug!(
            "game set up: {} players, {} vertices ({} empty), {} cards in deck",
            seats.len(),
            board.len(),
            empty,
            deck.remaining()
        );

        Ok(Self {
            config,
            board,
            deck,
            players: PlayerMap::from_vec(seats),
            oracles,
            phase: GamePhase::Setup,
            history: Vec::new(),
            summary: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Running scores keyed by seat.
    pub fn scores(&self) -> PlayerMap<i64> {
        self.players.map(|_, player| player.score())
    }

    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Final summary once finished.
    pub fn summary(&self) -> Option<&GameSummary> {
        self.summary.as_ref()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == GamePhase::Finished
    }

    /// Seat that moves next (turn order is circular from seat 0).
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new((self.history.len() % self.players.player_count()) as u8)
    }

    /// Whether the game ends before the next turn.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.deck.is_empty() || self.board.is_full()
    }

    /// Play one turn, or finish the game if it is over.
    pub fn play_turn(&mut self) -> Result<TurnOutcome, GameError> {
        if self.is_finished() {
            return Err(GameError::GameFinished);
        }
        if self.is_terminal() {
            return Ok(TurnOutcome::Finished(self.finish()));
        }

        let player = self.current_player();
        let request = MoveRequest {
            player,
            board: self.board.snapshot(),
            hand: self.players[player].hand_directions(),
            scores: self.scores(),
        };

        let decision = self.oracles[player.index()]
            .request_move(request)
            .wait(self.config.move_timeout())
            .map_err(|source| {
                warn!("{player} failed to move: {source}");
                GameError::Oracle { player, source }
            })?;

        let card = self.players[player].check_card(decision.hand_index, decision.direction)?;
        let mv = decision.into_move(player);
        let scores = self.board.make_move(&mv)?;

        self.players[player].take_card(mv.hand_index);
        let points = total_points(&scores);
        self.players[player].add_points(points);
        self.board.claim(&scores, player);

        let drawn = self.deck.draw();
        if let Some(card) = drawn {
            self.players[player].receive(card);
        }

        let record = TurnRecord {
            turn: self.history.len(),
            mv,
            card,
            scores,
            points,
            drawn,
        };
        debug!(
            "turn {}: {} played {} on {} for {} points",
            record.turn, player, mv.direction, mv.vertex, points
        );

        self.history.push(record.clone());
        self.phase = GamePhase::Turn(player);
        Ok(TurnOutcome::Played(record))
    }

    /// Play until finished and return the summary.
    pub fn run(&mut self) -> Result<GameSummary, GameError> {
        if let Some(summary) = &self.summary {
            return Ok(summary.clone());
        }
        loop {
            if let TurnOutcome::Finished(summary) = self.play_turn()? {
                return Ok(summary);
            }
        }
    }

    fn finish(&mut self) -> GameSummary {
        let bonus = self
            .board
            .ownership(&self.players)
            .map(|_, owned| MoveScore::bonus(owned.clone()));
        for (player, score) in bonus.iter() {
            self.players[player].add_points(score.points);
        }

        let scores = self.scores();
        let summary = GameSummary {
            result: GameResult::from_scores(&scores),
            scores,
            bonus,
            turns: self.history.len(),
        };
        info!("game finished after {} turns: {:?}", summary.turns, summary.result);

        self.phase = GamePhase::Finished;
        self.summary = Some(summary.clone());
        summary
    }
}
