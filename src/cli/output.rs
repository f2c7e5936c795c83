//! Output formatting utilities for CLI.

use droids::game::Cell;
use droids::HighscoreEntry;
use serde::Serialize;

/// How a scripted run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(super) enum RunOutcome {
    /// The player was caught.
    Lost,
    /// The script hit the quit key.
    Quit,
    /// The script ran out of actions mid-level.
    InProgress,
}

impl RunOutcome {
    /// Short label for text output.
    pub(super) const fn label(self) -> &'static str {
        match self {
            RunOutcome::Lost => "lost",
            RunOutcome::Quit => "quit",
            RunOutcome::InProgress => "in progress",
        }
    }
}

/// JSON-serializable run result.
#[derive(Debug, Serialize)]
pub(super) struct JsonRunResult {
    /// Random seed used.
    pub(super) seed: u64,
    /// Board side length.
    pub(super) board_size: u16,
    /// How the run ended.
    pub(super) outcome: RunOutcome,
    /// Final score.
    pub(super) score: u64,
    /// Level reached.
    pub(super) level: u32,
    /// Total turns resolved across all levels.
    pub(super) turns: u32,
    /// Safe teleports remaining.
    pub(super) safe_teleports_left: u32,
    /// Enemies still alive when the run ended.
    pub(super) enemies_left: usize,
}

/// Format a run result as human-readable text.
pub(super) fn format_run_text(result: &JsonRunResult) -> String {
    let mut output = String::new();
    output.push_str(&format!("Run result (seed: {})\n", result.seed));
    output.push_str(&format!("  Outcome: {}\n", result.outcome.label()));
    output.push_str(&format!("  Score:   {}\n", result.score));
    output.push_str(&format!("  Level:   {}\n", result.level));
    output.push_str(&format!("  Turns:   {}\n", result.turns));
    output.push_str(&format!(
        "  Enemies left: {} | Safe teleports left: {}\n",
        result.enemies_left, result.safe_teleports_left
    ));
    output
}

/// Format a board grid with the classic ASCII frame.
pub(super) fn format_board_text(board: &[Vec<Cell>]) -> String {
    let size = board.len();
    let rule = format!(" {}\n", "-".repeat(size * 2 - 1));

    let mut output = rule.clone();
    for row in board {
        let cells: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
        output.push_str(&format!("|{}|\n", cells.join(" ")));
    }
    output.push_str(&rule);
    output
}

/// Format the highscore table.
pub(super) fn format_scores_table(scores: &[HighscoreEntry]) -> String {
    if scores.is_empty() {
        return "No highscores yet.\n".to_string();
    }

    let mut output = String::from("Top Runs\n");
    for (idx, entry) in scores.iter().enumerate() {
        let seed = match entry.seed {
            Some(s) => s.to_string(),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{:>2}. {:<12} score={:<5} level={:<3} turns={:<4} seed={seed}\n",
            idx + 1,
            entry.name,
            entry.score,
            entry.level,
            entry.turns,
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_frame_dimensions() {
        let board = vec![vec![Cell::Empty; 5]; 5];
        let text = format_board_text(&board);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], " ---------");
        assert_eq!(lines[1], "|         |");
    }

    #[test]
    fn test_empty_scores_message() {
        assert_eq!(format_scores_table(&[]), "No highscores yet.\n");
    }

    #[test]
    fn test_scores_table_rows() {
        let entry = HighscoreEntry {
            name: "Ada".to_string(),
            score: 120,
            level: 2,
            turns: 33,
            seed: None,
            date: "2026-01-01".to_string(),
        };
        let text = format_scores_table(&[entry]);
        assert!(text.starts_with("Top Runs\n"));
        assert!(text.contains("Ada"));
        assert!(text.contains("seed=-"));
    }

    #[test]
    fn test_outcome_serializes_snake_case() {
        let json = serde_json::to_string(&RunOutcome::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
