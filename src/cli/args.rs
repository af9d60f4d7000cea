//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser)]
#[command(name = "streakboard")]
#[command(about = "Leaderboard generator for daily coding-challenge logs", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Repository root the standard directory layout is resolved against
    #[arg(short, long, global = true, default_value = ".")]
    pub(crate) root: PathBuf,

    /// Directory of per-user JSON logs (default: <root>/logs/users)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) logs_dir: Option<PathBuf>,

    /// Directory for the machine-readable leaderboard (default: <root>/data)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) data_dir: Option<PathBuf>,

    /// Directory for the Markdown leaderboard (default: <root>/docs)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) docs_dir: Option<PathBuf>,

    /// Directory for the web dashboard copy (default: <root>/website/data)
    #[arg(long, global = true, value_name = "DIR")]
    pub(crate) web_dir: Option<PathBuf>,

    /// Print the ranked board as a terminal table
    #[arg(short, long, global = true)]
    pub(crate) table: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.table && config.table {
            self.table = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        if let Some(ref color) = config.color
            && matches!(self.color, ColorMode::Auto)
        {
            match color.to_lowercase().as_str() {
                "always" => self.color = ColorMode::Always,
                "never" => self.color = ColorMode::Never,
                _ => {}
            }
        }

        // Path options: only apply if CLI didn't set them
        if self.logs_dir.is_none() {
            self.logs_dir = config.logs_dir.clone();
        }
        if self.data_dir.is_none() {
            self.data_dir = config.data_dir.clone();
        }
        if self.docs_dir.is_none() {
            self.docs_dir = config.docs_dir.clone();
        }
        if self.web_dir.is_none() {
            self.web_dir = config.web_dir.clone();
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
