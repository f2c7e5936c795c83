//! Run command implementation - scripted, non-interactive runs.
//!
//! Useful for reproducing a run from a seed and an action string, and for
//! piping results into other tools.

use super::output::{format_board_text, format_run_text, JsonRunResult, RunOutcome};
use super::{CliError, OutputFormat};
use droids::game::{Action, GameConfig, GameEngine, TurnStatus, QUIT_KEY};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error for a bad configuration, an unknown action key, or a
/// level whose enemies do not fit the board.
pub(crate) fn execute(
    actions: &str,
    board_size: u16,
    seed: Option<u64>,
    safe_teleports: u32,
    format: OutputFormat,
    show_board: bool,
) -> Result<(), CliError> {
    let config = GameConfig {
        board_size,
        seed,
        safe_teleports_per_run: safe_teleports,
    };
    let mut engine = GameEngine::new(config)?;
    let mut state = engine.start_level(1, 0, safe_teleports)?;

    let mut turns = 0u32;
    let mut outcome = RunOutcome::InProgress;

    for key in actions.chars().filter(|c| !c.is_whitespace()) {
        if key == QUIT_KEY {
            outcome = RunOutcome::Quit;
            break;
        }
        let Some(action) = Action::from_key(key) else {
            return Err(CliError::new(format!("unknown action key: {key:?}")));
        };

        engine.apply_action(&mut state, action);
        let status = engine.resolve_turn(&mut state);
        turns += 1;

        match status {
            TurnStatus::Playing => {}
            TurnStatus::Won => {
                let next = state.level + 1;
                state = engine.start_level(next, state.score, state.safe_teleports_left)?;
            }
            TurnStatus::Lost => {
                outcome = RunOutcome::Lost;
                break;
            }
        }
    }

    let result = JsonRunResult {
        seed: engine.seed(),
        board_size,
        outcome,
        score: state.score,
        level: state.level,
        turns,
        safe_teleports_left: state.safe_teleports_left,
        enemies_left: state.enemies.len(),
    };

    match format {
        OutputFormat::Text => {
            print!("{}", format_run_text(&result));
            if show_board {
                println!();
                print!("{}", format_board_text(&engine.build_board(&state)));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
