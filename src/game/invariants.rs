//! Simulation invariants - sanity checks that detect bugs.
//!
//! A correct engine never violates these; they are bug detectors used by
//! tests, not gameplay rules.

use std::collections::HashSet;

use crate::game::GameState;

/// Invariant violation found in a state.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all simulation invariants against a persisted state.
///
/// Returns the violations found, empty if the state is well-formed:
/// every position in bounds, no enemy sharing a cell with a wreck, no
/// duplicate enemies, and the teleport budget within its configured cap.
#[must_use]
pub fn check_invariants(
    state: &GameState,
    board_size: u16,
    teleport_budget: u32,
) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if !state.player.in_bounds(board_size) {
        violations.push(InvariantViolation {
            message: format!("player at {:?} is out of bounds", state.player),
        });
    }

    let mut seen = HashSet::new();
    for enemy in &state.enemies {
        if !enemy.in_bounds(board_size) {
            violations.push(InvariantViolation {
                message: format!("enemy at {enemy:?} is out of bounds"),
            });
        }
        if state.wrecks.contains(enemy) {
            violations.push(InvariantViolation {
                message: format!("enemy at {enemy:?} shares a cell with a wreck"),
            });
        }
        if !seen.insert(*enemy) {
            violations.push(InvariantViolation {
                message: format!("duplicate enemy at {enemy:?}"),
            });
        }
    }

    for wreck in &state.wrecks {
        if !wreck.in_bounds(board_size) {
            violations.push(InvariantViolation {
                message: format!("wreck at {wreck:?} is out of bounds"),
            });
        }
    }

    if state.safe_teleports_left > teleport_budget {
        violations.push(InvariantViolation {
            message: format!(
                "{} safe teleports left exceeds budget {teleport_budget}",
                state.safe_teleports_left
            ),
        });
    }

    if state.level == 0 {
        violations.push(InvariantViolation {
            message: "level must be at least 1".to_string(),
        });
    }

    violations
}
