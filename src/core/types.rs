//! Core data types for the aggregation pipeline

use chrono::NaiveDate;
use serde::Serialize;

/// One day's logged submission for a participant
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    /// Participant-local sequence number ("day 17 of the challenge")
    pub(crate) day: i64,
    pub(crate) date: NaiveDate,
    pub(crate) summary: String,
}

/// One participant's full history, as read from a single log file
#[derive(Debug, Clone)]
pub(crate) struct LogRecord {
    pub(crate) user: String,
    /// Stored order need not be chronological
    pub(crate) entries: Vec<Entry>,
}

/// Derived per-user statistics, recomputed fresh on every run.
///
/// Field order matches the serialized leaderboard format.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct UserStats {
    pub(crate) user: String,
    pub(crate) total_days: usize,
    pub(crate) current_streak: usize,
    pub(crate) longest_streak: usize,
    pub(crate) active_streak: bool,
    pub(crate) last_update: Option<NaiveDate>,
    pub(crate) first_day: Option<NaiveDate>,
    pub(crate) highlight: String,
    pub(crate) days_since_update: Option<i64>,
}

impl UserStats {
    pub(crate) fn status_label(&self) -> &'static str {
        if self.active_streak { "active" } else { "paused" }
    }
}
