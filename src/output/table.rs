//! Terminal rendering: per-user summary lines and the optional board table

use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::consts::{DATE_FMT, NO_DATE_PLACEHOLDER};
use crate::core::UserStats;

fn header_cell(text: &str, use_color: bool) -> Cell {
    let cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color { cell.fg(Color::Cyan) } else { cell }
}

fn right_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn status_cell(item: &UserStats, use_color: bool) -> Cell {
    let cell = Cell::new(item.status_label());
    if !use_color {
        return cell;
    }
    if item.active_streak {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Yellow)
    }
}

fn last_update_text(item: &UserStats) -> String {
    item.last_update
        .map(|d| d.format(DATE_FMT).to_string())
        .unwrap_or_else(|| NO_DATE_PLACEHOLDER.to_string())
}

/// One aligned line per ranked user, preceded by a participant count
pub(crate) fn print_summary(stats: &[UserStats]) {
    println!("Updated leaderboard for {} participant(s).", stats.len());
    for (index, item) in stats.iter().enumerate() {
        println!(
            "{:>2}. {:<20} days={:<3} current={:<2} longest={:<2} status={:<6} last={}",
            index + 1,
            item.user,
            item.total_days,
            item.current_streak,
            item.longest_streak,
            item.status_label(),
            last_update_text(item),
        );
    }
}

/// Render the ranked board as a terminal table
pub(crate) fn print_board_table(stats: &[UserStats], use_color: bool) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        header_cell("Rank", use_color),
        header_cell("User", use_color),
        header_cell("Days", use_color),
        header_cell("Current", use_color),
        header_cell("Longest", use_color),
        header_cell("Last Activity", use_color),
        header_cell("Status", use_color),
        header_cell("Highlight", use_color),
    ]);

    for (index, item) in stats.iter().enumerate() {
        table.add_row(vec![
            right_cell((index + 1).to_string()),
            Cell::new(&item.user),
            right_cell(item.total_days.to_string()),
            right_cell(item.current_streak.to_string()),
            right_cell(item.longest_streak.to_string()),
            Cell::new(last_update_text(item)),
            status_cell(item, use_color),
            Cell::new(&item.highlight),
        ]);
    }

    println!("{table}");
}
