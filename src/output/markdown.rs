//! Markdown leaderboard document

use chrono::{DateTime, Utc};

use crate::consts::{DATE_FMT, NO_DATE_PLACEHOLDER};
use crate::core::UserStats;
use crate::utils::escape_pipes;

pub(crate) fn leaderboard_markdown(stats: &[UserStats], generated_at: DateTime<Utc>) -> String {
    let mut lines = vec![
        "# Community Leaderboard".to_string(),
        String::new(),
        format!(
            "Last updated: {}",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        String::new(),
        "| Rank | User | Days Logged | Current Streak | Longest Streak | Last Activity | Status | Highlight |"
            .to_string(),
        "| ---- | ---- | ----------- | -------------- | -------------- | ------------- | ------ | --------- |"
            .to_string(),
    ];

    for (index, item) in stats.iter().enumerate() {
        let last_update = item
            .last_update
            .map(|d| d.format(DATE_FMT).to_string())
            .unwrap_or_else(|| NO_DATE_PLACEHOLDER.to_string());
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} |",
            index + 1,
            item.user,
            item.total_days,
            item.current_streak,
            item.longest_streak,
            last_update,
            item.status_label(),
            escape_pipes(&item.highlight),
        ));
    }

    lines.join("\n") + "\n"
}
