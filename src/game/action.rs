//! Player actions and the classic key bindings.

/// Eight compass directions plus staying put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up.
    North,
    /// Up-right.
    NorthEast,
    /// Right.
    East,
    /// Down-right.
    SouthEast,
    /// Down.
    South,
    /// Down-left.
    SouthWest,
    /// Left.
    West,
    /// Up-left.
    NorthWest,
    /// Stay in place (still consumes the turn).
    Stay,
}

impl Direction {
    /// Unit `(row, col)` delta for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::Stay => (0, 0),
        }
    }
}

/// One player action per turn.
///
/// The vocabulary is closed: adding or removing an action is a
/// compile-time-checked change at every match site. Quit is not an
/// action; the input loop handles it before the engine is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Step one cell (or stay), clamped at the board edge.
    Move(Direction),
    /// Relocate to a random unoccupied cell, limited budget.
    SafeTeleport,
    /// Relocate to a random cell regardless of occupancy, unlimited.
    RiskyTeleport,
}

/// Key that quits the game, handled by the input loop.
pub const QUIT_KEY: char = 'x';

impl Action {
    /// Parse the classic key layout: `q w e` / `a . d` / `z s c` to move,
    /// `t` for safe teleport, `r` for risky teleport.
    ///
    /// Returns `None` for any other key, including the quit key.
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        let action = match key {
            'w' => Action::Move(Direction::North),
            'e' => Action::Move(Direction::NorthEast),
            'd' => Action::Move(Direction::East),
            'c' => Action::Move(Direction::SouthEast),
            's' => Action::Move(Direction::South),
            'z' => Action::Move(Direction::SouthWest),
            'a' => Action::Move(Direction::West),
            'q' => Action::Move(Direction::NorthWest),
            '.' => Action::Move(Direction::Stay),
            't' => Action::SafeTeleport,
            'r' => Action::RiskyTeleport,
            _ => return None,
        };
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_parse() {
        for key in ['w', 'a', 's', 'd', 'q', 'e', 'z', 'c', '.', 't', 'r'] {
            assert!(Action::from_key(key).is_some(), "key {key:?} should parse");
        }
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert_eq!(Action::from_key('x'), None);
        assert_eq!(Action::from_key('?'), None);
        assert_eq!(Action::from_key('W'), None);
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        for key in ['w', 'a', 's', 'd', 'q', 'e', 'z', 'c', '.'] {
            let Some(Action::Move(dir)) = Action::from_key(key) else {
                panic!("key {key:?} should be a move");
            };
            let (dr, dc) = dir.delta();
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
        }
    }

    #[test]
    fn test_stay_delta() {
        assert_eq!(Direction::Stay.delta(), (0, 0));
    }
}
