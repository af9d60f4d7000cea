//! Log discovery, parsing, and validation
//!
//! Each participant has one JSON file: `{"user": "...", "entries": [...]}`.
//! Validation is all-or-nothing: the first malformed file aborts the whole
//! run, so a leaderboard is never built from a partial roster.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::core::{Entry, LogRecord};
use crate::error::{LogIssue, TrackerError};
use crate::utils::parse_entry_date;

/// Find per-user log files, lexicographically sorted so errors are
/// reproducible. A missing directory yields no files.
pub(crate) fn find_log_files(logs_dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = glob::glob(&format!("{}/*.json", logs_dir.display())) {
        files.extend(entries.flatten());
    }
    files.sort();
    files
}

/// Load and validate every log file under `logs_dir`
pub(crate) fn load_records(logs_dir: &Path) -> Result<Vec<LogRecord>, TrackerError> {
    find_log_files(logs_dir)
        .iter()
        .map(|path| load_record(path))
        .collect()
}

/// Parse and validate a single log file
pub(crate) fn load_record(path: &Path) -> Result<LogRecord, TrackerError> {
    let name = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|e| TrackerError::io(&name, e))?;
    if raw.trim().is_empty() {
        return Err(TrackerError::malformed(&name, LogIssue::EmptyFile));
    }

    let doc: Value = serde_json::from_str(&raw)
        .map_err(|e| TrackerError::malformed(&name, LogIssue::Json(e)))?;

    let user = extract_user(&doc).map_err(|issue| TrackerError::malformed(&name, issue))?;
    let entries = extract_entries(&doc).map_err(|issue| TrackerError::malformed(&name, issue))?;

    Ok(LogRecord { user, entries })
}

fn extract_user(doc: &Value) -> Result<String, LogIssue> {
    let user = doc
        .get("user")
        .and_then(Value::as_str)
        .ok_or(LogIssue::MissingUser)?
        .trim();
    if user.is_empty() {
        return Err(LogIssue::EmptyUser);
    }
    Ok(user.to_string())
}

fn extract_entries(doc: &Value) -> Result<Vec<Entry>, LogIssue> {
    let raw = doc.get("entries").ok_or(LogIssue::MissingEntries)?;
    let items = raw.as_array().ok_or(LogIssue::EntriesNotArray)?;
    if items.is_empty() {
        return Err(LogIssue::NoEntries);
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_entry(item, index + 1))
        .collect()
}

fn parse_entry(item: &Value, position: usize) -> Result<Entry, LogIssue> {
    let day = item
        .get("day")
        .ok_or(LogIssue::EntryMissingField { position })
        .and_then(|v| coerce_day(v).ok_or(LogIssue::EntryInvalidDay { position }))?;

    let date = item
        .get("date")
        .ok_or(LogIssue::EntryMissingField { position })?
        .as_str()
        .and_then(parse_entry_date)
        .ok_or(LogIssue::EntryInvalidDate { position })?;

    // Absent summary defaults to empty, which then fails the non-empty check.
    // Extra fields written by the logging tool (technologies, links, ...) are
    // ignored here.
    let summary = item
        .get("summary")
        .and_then(Value::as_str)
        .unwrap_or("")
        .trim()
        .to_string();
    if summary.is_empty() {
        return Err(LogIssue::EntryEmptySummary { position });
    }

    Ok(Entry { day, date, summary })
}

/// Accept JSON integers and integer strings ("12"); anything else is invalid
fn coerce_day(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
}
