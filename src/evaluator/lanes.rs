//! Parallel self-play difficulty estimation.
//!
//! Each lane owns its engines end to end and plays its share of games in
//! order. Lanes only share the stop flag and the active-lane counter; the
//! tallies are summed once every lane has returned.

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::core::{AgentConfig, EvaluatorError, GameRng, PlayerConfig, PlayerId};
use crate::engine::GameEngine;
use crate::oracle::{AgentFactory, MoveOracle, OracleFactory};

use super::level::LevelConfig;

/// Configuration for difficulty evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Number of concurrent lanes.
    pub lanes: usize,

    /// Seed offset (combined with the game index for per-game seeds).
    pub seed_offset: u64,

    /// Agent that plays the human seat.
    pub reference: AgentConfig,

    /// How often `terminate` checks for lanes still running.
    pub poll_interval_ms: u64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            lanes: 4,
            seed_offset: 0,
            reference: AgentConfig::reference(),
            poll_interval_ms: 5,
        }
    }
}

impl EvaluatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lane count (at least one lane always runs).
    pub fn with_lanes(mut self, lanes: usize) -> Self {
        self.lanes = lanes.max(1);
        self
    }

    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }

    pub fn with_reference(mut self, reference: AgentConfig) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval_ms = interval.as_millis() as u64;
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    /// Split `total` games into contiguous per-lane ranges. Earlier lanes
    /// take the remainder; lanes with nothing to do are dropped.
    pub fn partition(&self, total: u64) -> Vec<Range<u64>> {
        let lanes = self.lanes.max(1) as u64;
        let (share, extra) = (total / lanes, total % lanes);

        let mut start = 0;
        (0..lanes)
            .map(|lane| {
                let len = share + u64::from(lane < extra);
                let range = start..start + len;
                start += len;
                range
            })
            .filter(|range| !range.is_empty())
            .collect()
    }
}

/// Result of one evaluation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Fraction of completed games the reference lost, in `[0, 1]`.
    pub difficulty: f64,
    pub games_played: u64,
    pub reference_losses: u64,
    /// Whether lanes stopped early on request.
    pub terminated: bool,
}

#[derive(Default)]
struct LaneTally {
    games: u64,
    losses: u64,
    stopped: bool,
}

/// Decrements the active-lane counter when a lane returns, however it returns.
struct ActiveLane<'a>(&'a AtomicUsize);

impl Drop for ActiveLane<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Estimates how hard a level is for a reference agent.
///
/// `evaluate` and `terminate` both take `&self`, so a shared evaluator can be
/// stopped from another thread while it runs.
pub struct LevelEvaluator {
    level: LevelConfig,
    config: EvaluatorConfig,
    factory: Arc<dyn OracleFactory>,
    terminating: AtomicBool,
    active: AtomicUsize,
}

impl LevelEvaluator {
    /// Evaluator whose seats are all built by [`AgentFactory`].
    pub fn new(level: LevelConfig, config: EvaluatorConfig) -> Self {
        Self {
            level,
            config,
            factory: Arc::new(AgentFactory),
            terminating: AtomicBool::new(false),
            active: AtomicUsize::new(0),
        }
    }

    /// Build seats through a custom factory instead.
    pub fn with_factory(mut self, factory: Arc<dyn OracleFactory>) -> Self {
        self.factory = factory;
        self
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Lanes that have not yet reported completion.
    #[must_use]
    pub fn active_lanes(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_terminating(&self) -> bool {
        self.terminating.load(Ordering::Acquire)
    }

    /// Play `total_iterations` games and report the reference loss rate.
    ///
    /// A game the reference loses is one where its score is strictly below
    /// the sum of its opponents' scores. The first failing game stops every
    /// lane and its error is returned.
    ///
    /// The stop flag is cleared once every lane has joined, so a
    /// [`terminate`](Self::terminate) that lands before the lanes start still
    /// stops this run.
    pub fn evaluate(&self, total_iterations: u64) -> Result<EvaluationReport, EvaluatorError> {
        let (reference, players) = self.level.with_reference(&self.config.reference)?;
        let lanes = self.config.partition(total_iterations);

        self.active.fetch_add(lanes.len(), Ordering::AcqRel);

        info!(
            "evaluating level {:?}: {} games over {} lanes",
            self.level.name,
            total_iterations,
            lanes.len()
        );

        let results: Vec<Result<LaneTally, EvaluatorError>> = if lanes.is_empty() {
            Vec::new()
        } else {
            let pool = match rayon::ThreadPoolBuilder::new()
                .num_threads(lanes.len())
                .thread_name(|i| format!("level-lane-{i}"))
                .build()
            {
                Ok(pool) => pool,
                Err(e) => {
                    self.active.fetch_sub(lanes.len(), Ordering::AcqRel);
                    self.terminating.store(false, Ordering::Release);
                    return Err(e.into());
                }
            };

            pool.install(|| {
                lanes
                    .into_par_iter()
                    .with_max_len(1)
                    .enumerate()
                    .map(|(lane, games)| {
                        let _active = ActiveLane(&self.active);
                        self.run_lane(lane, games, reference, &players)
                    })
                    .collect()
            })
        };
        self.terminating.store(false, Ordering::Release);

        let mut report = EvaluationReport {
            difficulty: 0.0,
            games_played: 0,
            reference_losses: 0,
            terminated: false,
        };
        for tally in results {
            let tally = tally?;
            report.games_played += tally.games;
            report.reference_losses += tally.losses;
            report.terminated |= tally.stopped;
        }
        if report.games_played > 0 {
            report.difficulty = report.reference_losses as f64 / report.games_played as f64;
        }

        info!(
            "level {:?}: difficulty {:.3} ({} of {} games lost{})",
            self.level.name,
            report.difficulty,
            report.reference_losses,
            report.games_played,
            if report.terminated { ", terminated" } else { "" }
        );
        Ok(report)
    }

    /// Ask every lane to stop and wait until they all have.
    ///
    /// Lanes check the flag before each game, so a game in flight finishes
    /// first. Returns immediately if nothing is running; the request then
    /// stops the next run before its first game.
    pub fn terminate(&self) {
        self.terminating.store(true, Ordering::Release);
        let interval = self.config.poll_interval();
        while self.active_lanes() > 0 {
            std::thread::sleep(interval);
        }
        debug!("evaluator for level {:?} stopped", self.level.name);
    }

    fn run_lane(
        &self,
        lane: usize,
        games: Range<u64>,
        reference: PlayerId,
        players: &[PlayerConfig],
    ) -> Result<LaneTally, EvaluatorError> {
        let mut tally = LaneTally::default();

        for game in games {
            if self.is_terminating() {
                tally.stopped = true;
                break;
            }

            match self.play_game(lane, game, reference, players) {
                Ok(lost) => {
                    tally.games += 1;
                    tally.losses += u64::from(lost);
                }
                Err(e) => {
                    warn!("lane {lane} aborted: {e}");
                    self.terminating.store(true, Ordering::Release);
                    return Err(e);
                }
            }
        }

        debug!("lane {lane}: {} games, {} losses", tally.games, tally.losses);
        Ok(tally)
    }

    /// Play one game; `true` if the reference lost.
    fn play_game(
        &self,
        lane: usize,
        game: u64,
        reference: PlayerId,
        players: &[PlayerConfig],
    ) -> Result<bool, EvaluatorError> {
        let seed = self.config.seed_offset.wrapping_add(game);
        let mut seat_rng = GameRng::new(seed).for_context("seats");

        let oracles = players
            .iter()
            .enumerate()
            .map(|(i, config)| {
                let seat_seed = seat_rng.fork().seed();
                self.factory.build(PlayerId::new(i as u8), config, seat_seed)
            })
            .collect::<Result<Vec<Box<dyn MoveOracle>>, _>>()?;

        let summary = GameEngine::new(
            self.level.game.clone(),
            &self.level.board,
            players,
            oracles,
            seed,
        )
        .and_then(|mut engine| engine.run())
            .map_err(|source| EvaluatorError::Lane { lane, game, source })?;

        Ok(summary.scores[reference] < summary.opponents_total(reference))
    }
}
