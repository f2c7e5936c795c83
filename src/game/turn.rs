//! Turn resolution: player action application, simultaneous enemy
//! movement, and collision resolution.
//!
//! A turn has two phases. Phase A applies the player's action and is fully
//! reflected before phase B starts, so enemies always chase the player's
//! already-updated cell. Phase B computes every enemy move from a frozen
//! pre-move snapshot and only then commits the results; enemies never see
//! each other's new positions when deciding their own move.

use std::collections::{HashMap, HashSet};

use crate::game::{Action, GameRng, GameState, Position};

/// Points per destroyed enemy.
pub const ENEMY_POINTS: u64 = 10;

/// Points per level on clearing it, multiplied by the level number.
pub const LEVEL_CLEAR_POINTS: u64 = 25;

/// Player-visible result of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// A directional move (possibly clamped at the edge, possibly a stay).
    Moved,
    /// Safe teleport succeeded; budget decremented.
    SafeTeleported,
    /// Safe teleport refused: budget exhausted. State unchanged.
    NoSafeTeleportsLeft,
    /// Safe teleport refused: every cell holds an enemy or wreck.
    /// State unchanged.
    NoFreeCell,
    /// Risky teleport landed somewhere, occupied or not.
    RiskyTeleported,
}

impl ActionOutcome {
    /// Message shown to the player.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ActionOutcome::Moved => "Moved.",
            ActionOutcome::SafeTeleported => "Used safe teleport.",
            ActionOutcome::NoSafeTeleportsLeft => "No safe teleports left.",
            ActionOutcome::NoFreeCell => "No safe cells available for teleport.",
            ActionOutcome::RiskyTeleported => "Used risky teleport.",
        }
    }
}

/// Result of resolving one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// The level continues.
    Playing,
    /// All enemies destroyed; the level is clear.
    Won,
    /// The player was caught; the run is over.
    Lost,
}

/// Phase A: apply the player's action to the state.
///
/// Directional moves clamp at the board edge and never fail. Safe teleport
/// refuses (leaving the state untouched) when the budget is spent or no
/// free cell exists; risky teleport always succeeds and may land on an
/// enemy or wreck. That risk is the point of the mechanic; the following
/// [`resolve_turn`] treats such a landing as an immediate loss.
pub fn apply_action(
    state: &mut GameState,
    action: Action,
    board_size: u16,
    rng: &mut GameRng,
) -> ActionOutcome {
    match action {
        Action::Move(direction) => {
            state.player = state.player.offset_clamped(direction.delta(), board_size);
            ActionOutcome::Moved
        }
        Action::SafeTeleport => {
            if state.safe_teleports_left == 0 {
                return ActionOutcome::NoSafeTeleportsLeft;
            }
            let choices = free_cells(state, board_size);
            let Some(&spot) = rng.choose(&choices) else {
                return ActionOutcome::NoFreeCell;
            };
            state.player = spot;
            state.safe_teleports_left -= 1;
            ActionOutcome::SafeTeleported
        }
        Action::RiskyTeleport => {
            state.player = rng.position(board_size);
            ActionOutcome::RiskyTeleported
        }
    }
}

/// Phase B: advance enemies, resolve collisions, detect win/loss.
///
/// Exactly one of the three statuses is produced for any well-formed
/// state; there are no recoverable mid-turn errors.
pub fn resolve_turn(state: &mut GameState) -> TurnStatus {
    state.turn_count += 1;

    // The player may have moved or teleported into an occupied cell.
    if state.enemies.contains(&state.player) || state.wrecks.contains(&state.player) {
        return TurnStatus::Lost;
    }

    // Simultaneous movement: every step computed from the pre-move
    // snapshot before any is committed.
    let moved: Vec<Position> = state
        .enemies
        .iter()
        .map(|enemy| enemy.step_toward(state.player))
        .collect();

    if moved.contains(&state.player) {
        return TurnStatus::Lost;
    }

    let destroyed = resolve_collisions(&moved, state);
    state.score += u64::from(destroyed) * ENEMY_POINTS;

    if state.enemies.is_empty() {
        state.score += u64::from(state.level) * LEVEL_CLEAR_POINTS;
        return TurnStatus::Won;
    }

    TurnStatus::Playing
}

/// Destroy enemies that landed on a wreck or on each other.
///
/// An enemy dies if its landing cell already holds a wreck, or if two or
/// more enemies land there this turn (the cell becomes a wreck, once).
/// Survivors replace `state.enemies` in input order. Returns the number
/// destroyed.
fn resolve_collisions(moved: &[Position], state: &mut GameState) -> u32 {
    let mut counts: HashMap<Position, u32> = HashMap::with_capacity(moved.len());
    for &spot in moved {
        *counts.entry(spot).or_insert(0) += 1;
    }

    let mut survivors = Vec::with_capacity(moved.len());
    let mut destroyed = 0u32;
    for &spot in moved {
        if state.wrecks.contains(&spot) {
            // Absorbed by an existing wreck; no duplicate entry.
            destroyed += 1;
            continue;
        }
        if counts[&spot] > 1 {
            state.wrecks.insert(spot);
            destroyed += 1;
            continue;
        }
        survivors.push(spot);
    }

    state.enemies = survivors;
    destroyed
}

/// Cells holding neither an enemy nor a wreck, in row-major order.
///
/// The player's own cell counts as free. Row-major enumeration keeps the
/// safe-teleport draw deterministic for a given state and RNG cursor.
#[must_use]
pub fn free_cells(state: &GameState, board_size: u16) -> Vec<Position> {
    let occupied: HashSet<Position> = state
        .enemies
        .iter()
        .copied()
        .chain(state.wrecks.iter().copied())
        .collect();

    let mut cells = Vec::new();
    for row in 0..board_size {
        for col in 0..board_size {
            let spot = Position::new(row, col);
            if !occupied.contains(&spot) {
                cells.push(spot);
            }
        }
    }
    cells
}
