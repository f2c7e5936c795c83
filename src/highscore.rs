//! Highscore persistence.
//!
//! The run's sole durable artifact: a bounded top-N JSON list, sorted
//! descending by `(score, level)`. Field names and order match the
//! existing `highscores.json` format, so files written by older builds
//! keep loading.

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Default highscore file name.
pub const HIGHSCORE_FILE: &str = "highscores.json";

/// Entries kept in the table.
pub const HIGHSCORE_LIMIT: usize = 10;

/// One finished run. Field order is the on-disk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighscoreEntry {
    /// Player-chosen name.
    pub name: String,
    /// Final score.
    pub score: u64,
    /// Level reached.
    pub level: u32,
    /// Total turns played across the run.
    pub turns: u32,
    /// Seed of the run (`None` for files from builds that did not record
    /// an effective seed).
    pub seed: Option<u64>,
    /// ISO `YYYY-MM-DD` date the run ended.
    pub date: String,
}

/// Error writing the highscore file.
#[derive(Debug)]
pub struct HighscoreError {
    message: String,
}

impl fmt::Display for HighscoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "highscore error: {}", self.message)
    }
}

impl std::error::Error for HighscoreError {}

impl From<std::io::Error> for HighscoreError {
    fn from(e: std::io::Error) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for HighscoreError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}

/// Load the highscore table.
///
/// A missing or unparseable file yields an empty table; corruption never
/// blocks starting a game.
#[must_use]
pub fn load_highscores(path: &Path) -> Vec<HighscoreEntry> {
    let Ok(text) = fs::read_to_string(path) else {
        return Vec::new();
    };
    serde_json::from_str(&text).unwrap_or_default()
}

/// Append an entry, sort, truncate to the top entries, and persist.
///
/// Returns the table as written.
///
/// # Errors
///
/// Returns [`HighscoreError`] if serialization or the file write fails.
pub fn save_highscore(
    entry: HighscoreEntry,
    path: &Path,
) -> Result<Vec<HighscoreEntry>, HighscoreError> {
    let mut scores = load_highscores(path);
    scores.push(entry);
    scores.sort_by(|a, b| (b.score, b.level).cmp(&(a.score, a.level)));
    scores.truncate(HIGHSCORE_LIMIT);
    let json = serde_json::to_string_pretty(&scores)?;
    fs::write(path, json)?;
    Ok(scores)
}

/// Today's date as ISO `YYYY-MM-DD`.
///
/// No date crate needed for a single calendar conversion.
#[must_use]
pub fn today_iso() -> String {
    let secs = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs(),
        Err(_) => 0,
    };
    let (year, month, day) = civil_from_days(i64::try_from(secs / 86_400).unwrap_or(0));
    format!("{year:04}-{month:02}-{day:02}")
}

/// Convert days since the Unix epoch to a `(year, month, day)` civil date.
///
/// Proleptic Gregorian; valid over any realistic system clock range.
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let days = days + 719_468;
    let era = days.div_euclid(146_097);
    let doe = days.rem_euclid(146_097); // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = if month <= 2 { year + 1 } else { year };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let (month, day) = (month as u8, day as u8);
    (year, month, day)
}
