//! Property-based tests for turn resolution.
//!
//! These verify the engine's invariants over random seeds, positions, and
//! action sequences. Run with: cargo test --release prop_engine

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use std::collections::HashSet;

use droids::game::{
    apply_action, check_invariants, free_cells, resolve_turn, spawn_enemies, Action, GameConfig,
    GameEngine, GameRng, GameState, Position, TurnStatus,
};

/// Strategy for a playable action key.
fn action_key() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['w', 'a', 's', 'd', 'q', 'e', 'z', 'c', '.', 't', 'r'])
}

/// Chebyshev distance between two positions.
fn chebyshev(a: Position, b: Position) -> u16 {
    a.row.abs_diff(b.row).max(a.col.abs_diff(b.col))
}

/// Run a whole scripted game on a fresh engine. Returns the final state.
fn run_script(board_size: u16, seed: u64, keys: &[char]) -> GameState {
    let mut engine = GameEngine::new(GameConfig {
        board_size,
        seed: Some(seed),
        safe_teleports_per_run: 3,
    })
    .unwrap();
    let mut state = engine.start_level(1, 0, 3).unwrap();

    for &key in keys {
        let action = Action::from_key(key).unwrap();
        engine.apply_action(&mut state, action);
        match engine.resolve_turn(&mut state) {
            TurnStatus::Playing => {}
            TurnStatus::Won => {
                let next = state.level + 1;
                let Ok(next_state) =
                    engine.start_level(next, state.score, state.safe_teleports_left)
                else {
                    break;
                };
                state = next_state;
            }
            TurnStatus::Lost => break,
        }
    }
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// All reachable states keep every position in bounds and never show
    /// an enemy and a wreck on the same cell.
    #[test]
    fn prop_invariants_hold_for_any_script(
        seed in any::<u64>(),
        board_size in 5u16..16,
        keys in prop::collection::vec(action_key(), 0..40)
    ) {
        let mut engine = GameEngine::new(GameConfig {
            board_size,
            seed: Some(seed),
            safe_teleports_per_run: 3,
        }).unwrap();
        let mut state = engine.start_level(1, 0, 3).unwrap();
        prop_assert!(check_invariants(&state, board_size, 3).is_empty());

        for &key in &keys {
            let action = Action::from_key(key).unwrap();
            engine.apply_action(&mut state, action);
            let status = engine.resolve_turn(&mut state);
            if status == TurnStatus::Playing {
                let violations = check_invariants(&state, board_size, 3);
                prop_assert!(violations.is_empty(), "{:?}", violations.first());
            } else {
                break;
            }
        }
    }

    /// Two engines with the same seed and script produce identical states.
    #[test]
    fn prop_determinism(
        seed in any::<u64>(),
        board_size in 5u16..12,
        keys in prop::collection::vec(action_key(), 0..30)
    ) {
        let a = run_script(board_size, seed, &keys);
        let b = run_script(board_size, seed, &keys);
        prop_assert_eq!(a, b);
    }

    /// Score never decreases over a run.
    #[test]
    fn prop_score_monotone(
        seed in any::<u64>(),
        keys in prop::collection::vec(action_key(), 1..30)
    ) {
        let mut engine = GameEngine::new(GameConfig {
            board_size: 10,
            seed: Some(seed),
            safe_teleports_per_run: 3,
        }).unwrap();
        let mut state = engine.start_level(1, 0, 3).unwrap();
        let mut last = 0u64;
        for &key in &keys {
            engine.apply_action(&mut state, Action::from_key(key).unwrap());
            let status = engine.resolve_turn(&mut state);
            prop_assert!(state.score >= last);
            last = state.score;
            if status != TurnStatus::Playing {
                break;
            }
        }
    }

    /// The greedy chase strictly shrinks Chebyshev distance by one per
    /// step until the enemy is on the player, and never overshoots.
    #[test]
    fn prop_chase_converges(
        enemy_row in 0u16..20, enemy_col in 0u16..20,
        player_row in 0u16..20, player_col in 0u16..20
    ) {
        let player = Position::new(player_row, player_col);
        let mut enemy = Position::new(enemy_row, enemy_col);
        let mut distance = chebyshev(enemy, player);

        for _ in 0..40 {
            if distance == 0 {
                break;
            }
            enemy = enemy.step_toward(player);
            let next = chebyshev(enemy, player);
            prop_assert_eq!(next, distance - 1, "distance must shrink by exactly one");
            distance = next;
        }
        prop_assert_eq!(enemy, player);
    }

    /// Spawned enemies are distinct, in bounds, and avoid blocked cells.
    #[test]
    fn prop_spawn_well_formed(
        seed in any::<u64>(),
        level in 1u32..4,
        board_size in 8u16..20
    ) {
        let mut rng = GameRng::new(seed);
        let player = Position::new(board_size / 2, board_size / 2);
        let spots = spawn_enemies(level, board_size, &mut rng, &[player]).unwrap();

        let unique: HashSet<_> = spots.iter().copied().collect();
        prop_assert_eq!(unique.len(), spots.len());
        prop_assert!(!unique.contains(&player));
        prop_assert!(spots.iter().all(|p| p.in_bounds(board_size)));
    }

    /// Safe teleport with an empty budget reports exhaustion and leaves
    /// the state byte-for-byte unchanged.
    #[test]
    fn prop_safe_teleport_exhaustion(
        seed in any::<u64>(),
        player_row in 0u16..10, player_col in 0u16..10
    ) {
        let mut rng = GameRng::new(seed);
        let mut state = GameState {
            level: 1,
            score: 0,
            player: Position::new(player_row, player_col),
            enemies: vec![],
            wrecks: HashSet::new(),
            safe_teleports_left: 0,
            turn_count: 0,
        };
        let before = state.clone();
        let outcome = apply_action(&mut state, Action::SafeTeleport, 10, &mut rng);
        prop_assert_eq!(outcome.message(), "No safe teleports left.");
        prop_assert_eq!(state, before);
    }

    /// Safe teleport always lands on a cell that was free beforehand.
    #[test]
    fn prop_safe_teleport_lands_free(
        seed in any::<u64>(),
        enemy_cells in prop::collection::hash_set((0u16..8, 0u16..8), 1..20)
    ) {
        let enemies: Vec<Position> = enemy_cells
            .iter()
            .map(|&(r, c)| Position::new(r, c))
            .collect();
        let mut state = GameState {
            level: 1,
            score: 0,
            player: Position::new(0, 0),
            enemies,
            wrecks: HashSet::new(),
            safe_teleports_left: 1,
            turn_count: 0,
        };
        let free_before = free_cells(&state, 8);
        let mut rng = GameRng::new(seed);
        let outcome = apply_action(&mut state, Action::SafeTeleport, 8, &mut rng);
        prop_assert_eq!(outcome.message(), "Used safe teleport.");
        prop_assert!(free_before.contains(&state.player));
        prop_assert_eq!(state.safe_teleports_left, 0);
    }

    /// Resolution always yields exactly one of the three statuses and
    /// increments the turn counter exactly once.
    #[test]
    fn prop_resolution_total(
        seed in any::<u64>(),
        key in action_key()
    ) {
        let mut engine = GameEngine::new(GameConfig {
            board_size: 7,
            seed: Some(seed),
            safe_teleports_per_run: 3,
        }).unwrap();
        let mut state = engine.start_level(1, 0, 3).unwrap();
        engine.apply_action(&mut state, Action::from_key(key).unwrap());
        let status = resolve_turn(&mut state);
        prop_assert!(matches!(
            status,
            TurnStatus::Playing | TurnStatus::Won | TurnStatus::Lost
        ));
        prop_assert_eq!(state.turn_count, 1);
    }
}
