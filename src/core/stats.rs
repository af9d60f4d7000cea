//! Per-user statistics derived from a validated log record

use chrono::NaiveDate;

use crate::consts::{ACTIVE_WINDOW_DAYS, HIGHLIGHT_WIDTH};
use crate::core::streak::{current_streak, longest_streak};
use crate::core::types::{LogRecord, UserStats};
use crate::utils::shorten;

/// Compute all derived statistics for one participant.
///
/// `today` is the current UTC calendar date, passed in by the caller so the
/// activity window can be tested against a fixed date.
pub(crate) fn compute_user_stats(record: &LogRecord, today: NaiveDate) -> UserStats {
    // Sort by date so results do not depend on stored entry order.
    let mut entries: Vec<_> = record.entries.iter().collect();
    entries.sort_by_key(|entry| entry.date);

    let dates: Vec<NaiveDate> = entries.iter().map(|entry| entry.date).collect();
    let highlight = entries
        .last()
        .map(|entry| shorten(&entry.summary, HIGHLIGHT_WIDTH))
        .unwrap_or_default();

    let first_day = dates.first().copied();
    let last_update = dates.last().copied();
    let days_since_update = last_update.map(|last| (today - last).num_days());
    let active_streak = days_since_update.is_some_and(|days| days <= ACTIVE_WINDOW_DAYS);

    UserStats {
        user: record.user.clone(),
        total_days: dates.len(),
        current_streak: current_streak(&dates),
        longest_streak: longest_streak(&dates),
        active_streak,
        last_update,
        first_day,
        highlight,
        days_since_update,
    }
}
