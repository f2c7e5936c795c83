// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Droids: a deterministic terminal grid-pursuit game.
//!
//! A player token evades and destroys pursuing enemy tokens on a square
//! board across escalating levels. This crate provides:
//! - Bit-exact deterministic turn resolution from a seed
//! - A greedy-chase enemy rule with simultaneous-move semantics
//! - Wreck collisions, scoring, and win/loss detection
//! - Highscore persistence
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │     CLI / TUI (rendering, input)    │
//! ├─────────────────────────────────────┤
//! │   GameEngine (level lifecycle)      │
//! ├─────────────────────────────────────┤
//! │   Turn resolution + Spawner + RNG   │
//! └─────────────────────────────────────┘
//! ```
//!
//! The engine never renders and never blocks: the caller owns the input
//! loop, feeds one [`Action`](game::Action) per turn, and reads the
//! resulting state back to draw it.

pub mod game;
pub mod highscore;

// Re-export key types at crate root for convenience
pub use game::{
    Action, Cell, ConfigError, Direction, GameConfig, GameEngine, GameState, Position, SpawnError,
    TurnStatus,
};
pub use highscore::HighscoreEntry;
