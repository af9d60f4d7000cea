//! Leaderboard ordering

use std::cmp::Ordering;

use crate::core::types::UserStats;

/// Sort stats into leaderboard order.
///
/// Composite key: current streak desc, longest streak desc, days since last
/// update asc (users with no recorded update sort last), then user id
/// case-insensitive asc. The final tie-break makes the order total, so the
/// result is reproducible for identical input.
pub(crate) fn rank_users(stats: &mut [UserStats]) {
    stats.sort_by(compare);
}

fn compare(a: &UserStats, b: &UserStats) -> Ordering {
    b.current_streak
        .cmp(&a.current_streak)
        .then_with(|| b.longest_streak.cmp(&a.longest_streak))
        .then_with(|| staleness(a).cmp(&staleness(b)))
        .then_with(|| a.user.to_lowercase().cmp(&b.user.to_lowercase()))
}

fn staleness(stats: &UserStats) -> i64 {
    stats.days_since_update.unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(user: &str, current: usize, longest: usize, days_since: Option<i64>) -> UserStats {
        UserStats {
            user: user.into(),
            total_days: longest,
            current_streak: current,
            longest_streak: longest,
            active_streak: days_since.is_some_and(|d| d <= 1),
            last_update: None,
            first_day: None,
            highlight: String::new(),
            days_since_update: days_since,
        }
    }

    fn order(mut board: Vec<UserStats>) -> Vec<String> {
        rank_users(&mut board);
        board.into_iter().map(|s| s.user).collect()
    }

    #[test]
    fn higher_current_streak_ranks_first() {
        let names = order(vec![
            stats("slow", 2, 9, Some(0)),
            stats("fast", 5, 5, Some(3)),
        ]);
        assert_eq!(names, ["fast", "slow"]);
    }

    #[test]
    fn longest_streak_breaks_current_ties() {
        let names = order(vec![
            stats("short", 3, 3, Some(0)),
            stats("long", 3, 8, Some(0)),
        ]);
        assert_eq!(names, ["long", "short"]);
    }

    #[test]
    fn fresher_update_breaks_streak_ties() {
        let names = order(vec![
            stats("stale", 2, 4, Some(6)),
            stats("fresh", 2, 4, Some(1)),
        ]);
        assert_eq!(names, ["fresh", "stale"]);
    }

    #[test]
    fn missing_update_date_sorts_last() {
        let names = order(vec![
            stats("unknown", 2, 4, None),
            stats("known", 2, 4, Some(30)),
        ]);
        assert_eq!(names, ["known", "unknown"]);
    }

    #[test]
    fn name_tiebreak_is_case_insensitive() {
        let names = order(vec![
            stats("Zoe", 1, 1, Some(2)),
            stats("bob", 1, 1, Some(2)),
        ]);
        assert_eq!(names, ["bob", "Zoe"]);
    }

    #[test]
    fn ordering_is_deterministic_across_shuffles() {
        let a = order(vec![
            stats("a", 3, 3, Some(1)),
            stats("b", 3, 5, Some(1)),
            stats("c", 4, 4, Some(0)),
        ]);
        let b = order(vec![
            stats("c", 4, 4, Some(0)),
            stats("b", 3, 5, Some(1)),
            stats("a", 3, 3, Some(1)),
        ]);
        assert_eq!(a, b);
        assert_eq!(a, ["c", "b", "a"]);
    }
}
