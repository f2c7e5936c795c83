//! Scores command implementation.

use std::path::Path;

use super::output::format_scores_table;
use super::CliError;
use droids::highscore::load_highscores;

/// Execute the scores command.
///
/// # Errors
///
/// Currently infallible; the signature matches the other commands.
pub(crate) fn execute(scores_file: &Path) -> Result<(), CliError> {
    let scores = load_highscores(scores_file);
    print!("{}", format_scores_table(&scores));
    Ok(())
}
