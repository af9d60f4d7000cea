//! Run orchestration: load and validate logs, compute and rank stats, write
//! the leaderboard artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::cli::{Cli, Commands};
use crate::consts::{LEADERBOARD_JSON, LEADERBOARD_MD};
use crate::core::{UserStats, compute_user_stats, rank_users};
use crate::data::load_records;
use crate::error::TrackerError;
use crate::output::{leaderboard_json, leaderboard_markdown, print_board_table, print_summary};

/// Input and output locations for one run, resolved from CLI and config
#[derive(Debug, Clone)]
pub(crate) struct Paths {
    pub(crate) logs_dir: PathBuf,
    pub(crate) data_dir: PathBuf,
    pub(crate) docs_dir: PathBuf,
    pub(crate) web_data_dir: PathBuf,
}

impl Paths {
    pub(crate) fn resolve(cli: &Cli) -> Self {
        let root = &cli.root;
        Paths {
            logs_dir: cli
                .logs_dir
                .clone()
                .unwrap_or_else(|| root.join("logs").join("users")),
            data_dir: cli.data_dir.clone().unwrap_or_else(|| root.join("data")),
            docs_dir: cli.docs_dir.clone().unwrap_or_else(|| root.join("docs")),
            web_data_dir: cli
                .web_dir
                .clone()
                .unwrap_or_else(|| root.join("website").join("data")),
        }
    }
}

pub(crate) fn run(cli: &Cli) -> Result<(), TrackerError> {
    let paths = Paths::resolve(cli);

    let records = load_records(&paths.logs_dir)?;
    if records.is_empty() {
        println!(
            "No logs found. Add files to {} and rerun.",
            paths.logs_dir.display()
        );
        return Ok(());
    }

    let today = Utc::now().date_naive();
    let mut stats: Vec<UserStats> = records
        .iter()
        .map(|record| compute_user_stats(record, today))
        .collect();
    rank_users(&mut stats);

    if matches!(cli.command, Some(Commands::Check)) {
        println!("All {} log(s) are valid.", stats.len());
        return Ok(());
    }

    write_artifacts(&paths, &stats)?;

    print_summary(&stats);
    if cli.table {
        print_board_table(&stats, cli.use_color());
    }
    Ok(())
}

/// Write all three artifacts from one timestamp, so the two JSON copies are
/// byte-identical. Validation has already succeeded by the time this runs; a
/// run either refreshes every artifact or touches none of them.
fn write_artifacts(paths: &Paths, stats: &[UserStats]) -> Result<(), TrackerError> {
    let generated_at = Utc::now();
    let json = leaderboard_json(stats, generated_at);
    let markdown = leaderboard_markdown(stats, generated_at);

    write_file(&paths.data_dir, LEADERBOARD_JSON, &json)?;
    write_file(&paths.web_data_dir, LEADERBOARD_JSON, &json)?;
    write_file(&paths.docs_dir, LEADERBOARD_MD, &markdown)?;
    Ok(())
}

fn write_file(dir: &Path, name: &str, content: &str) -> Result<(), TrackerError> {
    fs::create_dir_all(dir).map_err(|e| TrackerError::io(dir.display().to_string(), e))?;
    let path = dir.join(name);
    fs::write(&path, content).map_err(|e| TrackerError::io(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("streakboard").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn paths_follow_standard_layout_under_root() {
        let paths = Paths::resolve(&parse(&["--root", "/repo"]));
        assert_eq!(paths.logs_dir, PathBuf::from("/repo/logs/users"));
        assert_eq!(paths.data_dir, PathBuf::from("/repo/data"));
        assert_eq!(paths.docs_dir, PathBuf::from("/repo/docs"));
        assert_eq!(paths.web_data_dir, PathBuf::from("/repo/website/data"));
    }

    #[test]
    fn explicit_dirs_override_the_layout() {
        let paths = Paths::resolve(&parse(&[
            "--root",
            "/repo",
            "--logs-dir",
            "/elsewhere/logs",
            "--web-dir",
            "/srv/www/data",
        ]));
        assert_eq!(paths.logs_dir, PathBuf::from("/elsewhere/logs"));
        assert_eq!(paths.data_dir, PathBuf::from("/repo/data"));
        assert_eq!(paths.web_data_dir, PathBuf::from("/srv/www/data"));
    }
}
