//! Level difficulty estimation.
//!
//! ## Overview
//!
//! - **LevelConfig**: board, rules, and seats of one level (JSON loadable)
//! - **LevelEvaluator**: replaces the human seat with a reference agent and
//!   plays many games across parallel lanes
//! - **EvaluationReport**: loss rate of the reference agent
//!
//! ## Usage
//!
//! ```rust,ignore
//! use compass_board::evaluator::{EvaluatorConfig, LevelConfig, LevelEvaluator};
//!
//! let level = LevelConfig::from_json(&std::fs::read_to_string("level.json")?)?;
//! let evaluator = LevelEvaluator::new(level, EvaluatorConfig::default().with_lanes(8));
//!
//! let report = evaluator.evaluate(1_000)?;
//! println!("difficulty {:.2}", report.difficulty);
//! ```

pub mod lanes;
pub mod level;

pub use lanes::{EvaluationReport, EvaluatorConfig, LevelEvaluator};
pub use level::LevelConfig;
