mod json;
mod markdown;
mod table;

pub(crate) use json::leaderboard_json;
pub(crate) use markdown::leaderboard_markdown;
pub(crate) use table::{print_board_table, print_summary};
