//! Enemy spawn placement.
//!
//! Placement is rejection sampling against an accumulating blocked set, so
//! no two enemies (or the player) share a starting cell. The loop carries
//! an explicit retry ceiling: near board capacity it reports exhaustion
//! instead of spinning forever.

// Capacity accounting uses intentional casts between count types
#![allow(clippy::cast_possible_truncation)]

use std::collections::HashSet;
use std::fmt;

use crate::game::{GameRng, Position};

/// Rejected draws tolerated before spawning reports exhaustion.
const MAX_REJECTED_DRAWS: u32 = 100_000;

/// Enemies spawned for a level.
#[must_use]
pub fn enemy_count(level: u32) -> u32 {
    level.saturating_mul(4).max(2)
}

/// Error placing enemies on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnError {
    /// Description of the failure.
    pub reason: String,
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enemy spawn failed: {}", self.reason)
    }
}

impl std::error::Error for SpawnError {}

/// Place the level's enemies on distinct free cells.
///
/// `initial_blocked` holds cells that must stay free (the player's spawn);
/// each accepted enemy joins the blocked set before the next draw.
///
/// # Errors
///
/// Returns [`SpawnError`] if the board cannot hold the enemies plus the
/// blocked cells, or if the retry ceiling is hit.
pub fn spawn_enemies(
    level: u32,
    board_size: u16,
    rng: &mut GameRng,
    initial_blocked: &[Position],
) -> Result<Vec<Position>, SpawnError> {
    let count = enemy_count(level);
    let cells = u64::from(board_size) * u64::from(board_size);
    let needed = u64::from(count) + initial_blocked.len() as u64;
    if needed > cells {
        return Err(SpawnError {
            reason: format!("need {needed} free cells, board has {cells}"),
        });
    }

    let mut blocked: HashSet<Position> = initial_blocked.iter().copied().collect();
    let mut spots = Vec::with_capacity(count as usize);
    let mut rejected = 0u32;

    while spots.len() < count as usize {
        let spot = rng.position(board_size);
        if blocked.contains(&spot) {
            rejected += 1;
            if rejected >= MAX_REJECTED_DRAWS {
                return Err(SpawnError {
                    reason: format!("gave up after {rejected} rejected draws"),
                });
            }
            continue;
        }
        blocked.insert(spot);
        spots.push(spot);
    }

    Ok(spots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_count_floor() {
        // Level scaling never drops below two enemies
        assert_eq!(enemy_count(0), 2);
        assert_eq!(enemy_count(1), 4);
        assert_eq!(enemy_count(3), 12);
    }

    #[test]
    fn test_spawn_positions_distinct_and_in_bounds() {
        let mut rng = GameRng::new(42);
        let player = Position::new(10, 10);
        let spots = spawn_enemies(2, 20, &mut rng, &[player]).unwrap();
        assert_eq!(spots.len(), 8);

        let unique: HashSet<_> = spots.iter().copied().collect();
        assert_eq!(unique.len(), spots.len());
        assert!(!unique.contains(&player));
        assert!(spots.iter().all(|p| p.in_bounds(20)));
    }

    #[test]
    fn test_spawn_deterministic() {
        let player = Position::new(2, 2);
        let mut rng1 = GameRng::new(7);
        let mut rng2 = GameRng::new(7);
        let a = spawn_enemies(1, 5, &mut rng1, &[player]).unwrap();
        let b = spawn_enemies(1, 5, &mut rng2, &[player]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_spawn_rejects_overfull_board() {
        // Level 7 wants 28 enemies; a 5x5 board has 25 cells and one is
        // reserved for the player.
        let mut rng = GameRng::new(0);
        let player = Position::new(2, 2);
        let result = spawn_enemies(7, 5, &mut rng, &[player]);
        assert!(result.is_err());
    }

    #[test]
    fn test_spawn_fills_tight_board() {
        // 24 enemies on 25 cells: legal but tight, must still terminate.
        let mut rng = GameRng::new(123);
        let player = Position::new(2, 2);
        let spots = spawn_enemies(6, 5, &mut rng, &[player]).unwrap();
        assert_eq!(spots.len(), 24);
        let unique: HashSet<_> = spots.iter().copied().collect();
        assert_eq!(unique.len(), 24);
    }
}
