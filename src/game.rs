//! Simulation core for Droids.
//!
//! Implements the grid-pursuit rules:
//! - Board geometry and cell projection
//! - Seeded deterministic RNG
//! - Enemy spawn placement
//! - Two-phase turn resolution (player action, then simultaneous chase
//!   and collision resolution)
//! - Level lifecycle orchestration

mod action;
mod board;
mod engine;
mod invariants;
mod rng;
mod spawn;
mod state;
mod turn;

pub use action::{Action, Direction, QUIT_KEY};
pub use board::{Cell, Position};
pub use engine::GameEngine;
pub use invariants::{check_invariants, InvariantViolation};
pub use rng::GameRng;
pub use spawn::{enemy_count, spawn_enemies, SpawnError};
pub use state::{
    ConfigError, GameConfig, GameState, DEFAULT_BOARD_SIZE, DEFAULT_SAFE_TELEPORTS, MIN_BOARD_SIZE,
};
pub use turn::{
    apply_action, free_cells, resolve_turn, ActionOutcome, TurnStatus, ENEMY_POINTS,
    LEVEL_CLEAR_POINTS,
};
