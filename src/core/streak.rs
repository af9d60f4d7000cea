//! Streak arithmetic over sorted entry dates
//!
//! Both functions expect dates sorted ascending. Duplicate dates are allowed
//! and never count as consecutive days (a 0-day gap breaks a run just like a
//! 2-day gap does).

use chrono::NaiveDate;

/// Unbroken run of consecutive days ending at the most recent date.
///
/// Walks backward from the last date and stops at the first gap that is not
/// exactly one calendar day. At least 1 when any date exists.
pub(crate) fn current_streak(dates: &[NaiveDate]) -> usize {
    let Some(&last) = dates.last() else {
        return 0;
    };

    let mut streak = 1;
    let mut next = last;
    for &date in dates.iter().rev().skip(1) {
        if (next - date).num_days() == 1 {
            streak += 1;
            next = date;
        } else {
            break;
        }
    }
    streak
}

/// Maximum unbroken run of consecutive days anywhere in the history.
///
/// Single forward pass; the running counter resets to 1 on any gap other than
/// exactly one day, including at the first date. 0 only for empty input.
pub(crate) fn longest_streak(dates: &[NaiveDate]) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut previous: Option<NaiveDate> = None;

    for &date in dates {
        run = match previous {
            Some(prev) if (date - prev).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        previous = Some(date);
    }
    longest
}
