//! Aggregation core: streak math, per-user statistics, ranking

mod rank;
mod stats;
mod streak;
mod types;

pub(crate) use rank::rank_users;
pub(crate) use stats::compute_user_stats;
pub(crate) use types::{Entry, LogRecord, UserStats};
