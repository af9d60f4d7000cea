//! Shared constants

/// Strict date format for log entries and rendered dates
pub(crate) const DATE_FMT: &str = "%Y-%m-%d";

/// Maximum display width of the highlight column
pub(crate) const HIGHLIGHT_WIDTH: usize = 80;

/// A streak counts as active while the last entry is at most this many days old
pub(crate) const ACTIVE_WINDOW_DAYS: i64 = 1;

/// File name of the machine-readable leaderboard artifact
pub(crate) const LEADERBOARD_JSON: &str = "leaderboard.json";

/// File name of the Markdown leaderboard artifact
pub(crate) const LEADERBOARD_MD: &str = "LEADERBOARD.md";

/// Placeholder shown when a user has no recorded activity date
pub(crate) const NO_DATE_PLACEHOLDER: &str = "n/a";
