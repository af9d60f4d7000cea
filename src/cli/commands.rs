//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Rebuild all leaderboard artifacts (default)
    Update,
    /// Validate logs and compute the ranking without writing anything
    Check,
}
