//! Machine-readable leaderboard document

use chrono::{DateTime, SecondsFormat, Utc};

use crate::core::UserStats;

/// Render the leaderboard JSON payload.
///
/// `generated_at` is truncated to second precision; the same string must be
/// written to every JSON artifact in a run so the copies stay byte-identical.
pub(crate) fn leaderboard_json(stats: &[UserStats], generated_at: DateTime<Utc>) -> String {
    let payload = serde_json::json!({
        "generated_at": generated_at.to_rfc3339_opts(SecondsFormat::Secs, false),
        "users": stats,
    });
    serde_json::to_string_pretty(&payload).unwrap()
}
