//! Level lifecycle orchestration.

use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::game::turn::{self, ActionOutcome, TurnStatus};
use crate::game::{
    spawn_enemies, Action, Cell, ConfigError, GameConfig, GameRng, GameState, Position, SpawnError,
};

/// The turn-resolution engine.
///
/// Owns the configuration and the RNG; the rendering/input loop it does
/// not own drives it one turn at a time: apply an action, resolve the
/// turn, read the state back.
#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    rng: GameRng,
}

impl GameEngine {
    /// Create an engine, validating the configuration.
    ///
    /// When no seed is configured one is drawn from the clock, so the
    /// effective seed is always known and a run can be replayed from it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a board smaller than the minimum.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(clock_seed);
        Ok(Self {
            config,
            rng: GameRng::new(seed),
        })
    }

    /// The engine's configuration.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The seed actually in use (configured or clock-drawn).
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Begin a level: centered player spawn, fresh enemies, no wrecks.
    ///
    /// Score and remaining safe teleports carry over from the previous
    /// level; everything else resets.
    ///
    /// # Errors
    ///
    /// Returns [`SpawnError`] if the level's enemies do not fit on the
    /// board.
    pub fn start_level(
        &mut self,
        level: u32,
        score: u64,
        safe_teleports_left: u32,
    ) -> Result<GameState, SpawnError> {
        let size = self.config.board_size;
        let player = Position::new(size / 2, size / 2);
        let enemies = spawn_enemies(level, size, &mut self.rng, &[player])?;
        Ok(GameState {
            level,
            score,
            player,
            enemies,
            wrecks: HashSet::new(),
            safe_teleports_left,
            turn_count: 0,
        })
    }

    /// Phase A of a turn: apply the player's action.
    pub fn apply_action(&mut self, state: &mut GameState, action: Action) -> ActionOutcome {
        turn::apply_action(state, action, self.config.board_size, &mut self.rng)
    }

    /// Phase B of a turn: move enemies, resolve collisions, report status.
    pub fn resolve_turn(&self, state: &mut GameState) -> TurnStatus {
        debug_assert!(state.player.in_bounds(self.config.board_size));
        turn::resolve_turn(state)
    }

    /// Project the state onto a renderable grid of cells.
    ///
    /// Wrecks are drawn first, then enemies, then the player, so the
    /// player symbol wins visually even on the losing frame.
    #[must_use]
    pub fn build_board(&self, state: &GameState) -> Vec<Vec<Cell>> {
        let size = usize::from(self.config.board_size);
        let mut board = vec![vec![Cell::Empty; size]; size];
        for wreck in &state.wrecks {
            board[usize::from(wreck.row)][usize::from(wreck.col)] = Cell::Wreck;
        }
        for enemy in &state.enemies {
            board[usize::from(enemy.row)][usize::from(enemy.col)] = Cell::Enemy;
        }
        board[usize::from(state.player.row)][usize::from(state.player.col)] = Cell::Player;
        board
    }
}

/// Seed source for unseeded runs.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(42, |d| {
            u64::try_from(d.as_nanos() & u128::from(u64::MAX)).unwrap_or(42)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    fn engine(seed: u64) -> GameEngine {
        GameEngine::new(GameConfig {
            board_size: 10,
            seed: Some(seed),
            safe_teleports_per_run: 3,
        })
        .unwrap()
    }

    #[test]
    fn test_construction_rejects_small_board() {
        let result = GameEngine::new(GameConfig {
            board_size: 4,
            ..GameConfig::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_start_level_centers_player() {
        let mut engine = engine(42);
        let state = engine.start_level(1, 0, 3).unwrap();
        assert_eq!(state.player, Position::new(5, 5));
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.turn_count, 0);
        assert!(state.wrecks.is_empty());
        assert_eq!(state.enemies.len(), 4);
        assert!(state.enemies.iter().all(|e| *e != state.player));
    }

    #[test]
    fn test_start_level_carries_score_and_teleports() {
        let mut engine = engine(42);
        let state = engine.start_level(2, 130, 1).unwrap();
        assert_eq!(state.level, 2);
        assert_eq!(state.score, 130);
        assert_eq!(state.safe_teleports_left, 1);
        assert_eq!(state.enemies.len(), 8);
    }

    #[test]
    fn test_seed_is_reported() {
        let engine = engine(99);
        assert_eq!(engine.seed(), 99);
    }

    #[test]
    fn test_build_board_draws_player_last() {
        let mut engine = engine(42);
        let mut state = engine.start_level(1, 0, 3).unwrap();
        // Force the player onto a wreck cell to check draw order.
        state.wrecks.insert(state.player);
        let board = engine.build_board(&state);
        assert_eq!(board.len(), 10);
        assert!(board.iter().all(|row| row.len() == 10));
        assert_eq!(
            board[usize::from(state.player.row)][usize::from(state.player.col)],
            Cell::Player
        );
        let enemy_cells = board
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Enemy)
            .count();
        assert_eq!(enemy_cells, state.enemies.len());
    }

    #[test]
    fn test_full_turn_contract() {
        let mut engine = engine(42);
        let mut state = engine.start_level(1, 0, 3).unwrap();
        let before = state.enemies.clone();
        let outcome = engine.apply_action(&mut state, Action::Move(Direction::North));
        assert_eq!(outcome, ActionOutcome::Moved);
        let status = engine.resolve_turn(&mut state);
        assert_eq!(state.turn_count, 1);
        // Every enemy moved at most one cell per axis.
        if status == TurnStatus::Playing {
            for after in &state.enemies {
                assert!(before.iter().any(|b| {
                    i32::from(b.row).abs_diff(i32::from(after.row)) <= 1
                        && i32::from(b.col).abs_diff(i32::from(after.col)) <= 1
                }));
            }
        }
        assert!(matches!(
            status,
            TurnStatus::Playing | TurnStatus::Won | TurnStatus::Lost
        ));
    }
}
