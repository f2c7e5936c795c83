//! Game configuration and per-level state.

use std::collections::HashSet;
use std::fmt;

use crate::game::Position;

/// Smallest playable board.
pub const MIN_BOARD_SIZE: u16 = 5;

/// Default board size when none is configured.
pub const DEFAULT_BOARD_SIZE: u16 = 20;

/// Default safe-teleport budget per run.
pub const DEFAULT_SAFE_TELEPORTS: u32 = 3;

/// Engine construction parameters.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    /// Side length of the square board. Must be at least [`MIN_BOARD_SIZE`].
    pub board_size: u16,
    /// Seed for deterministic runs. `None` means one is drawn from the
    /// clock at engine construction.
    pub seed: Option<u64>,
    /// Safe teleports granted for the whole run.
    pub safe_teleports_per_run: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            seed: None,
            safe_teleports_per_run: DEFAULT_SAFE_TELEPORTS,
        }
    }
}

impl GameConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the board is smaller than
    /// [`MIN_BOARD_SIZE`].
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                size: self.board_size,
            });
        }
        Ok(())
    }
}

/// Fatal configuration error, reported before any state is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Board side length below the playable minimum.
    BoardTooSmall {
        /// The rejected size.
        size: u16,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BoardTooSmall { size } => {
                write!(f, "board size must be at least {MIN_BOARD_SIZE}, got {size}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Full simulation state for one level.
///
/// Created fresh by the engine at each level start (score and remaining
/// safe teleports carried over), mutated turn by turn, and discarded when
/// the level is won or the run is lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Current level, starting at 1.
    pub level: u32,
    /// Accumulated score; never decreases within a run.
    pub score: u64,
    /// The player's cell.
    pub player: Position,
    /// Live enemies. Order is significant: collision resolution iterates
    /// in this order and survivors keep it.
    pub enemies: Vec<Position>,
    /// Permanent wreck obstacles. Never overlaps `enemies` in a persisted
    /// state.
    pub wrecks: HashSet<Position>,
    /// Safe teleports remaining for the run.
    pub safe_teleports_left: u32,
    /// Turns resolved this level.
    pub turn_count: u32,
}
