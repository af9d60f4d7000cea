use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum TrackerError {
    #[error("malformed log {path}: {issue}")]
    MalformedLog { path: String, issue: LogIssue },

    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

impl TrackerError {
    pub(crate) fn malformed(path: impl Into<String>, issue: LogIssue) -> Self {
        TrackerError::MalformedLog {
            path: path.into(),
            issue,
        }
    }

    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        TrackerError::Io {
            path: path.into(),
            source,
        }
    }
}

/// The specific reason a log file failed validation
#[derive(Debug, Error)]
pub(crate) enum LogIssue {
    #[error("file is empty")]
    EmptyFile,

    #[error("not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing 'user' field")]
    MissingUser,

    #[error("'user' value is empty")]
    EmptyUser,

    #[error("missing 'entries' array")]
    MissingEntries,

    #[error("'entries' must be an array")]
    EntriesNotArray,

    #[error("'entries' array is empty")]
    NoEntries,

    #[error("entry #{position} is missing a required field")]
    EntryMissingField { position: usize },

    #[error("entry #{position} has an invalid 'day' value")]
    EntryInvalidDay { position: usize },

    #[error("entry #{position} summary is empty")]
    EntryEmptySummary { position: usize },

    #[error("entry #{position} has an invalid date (expected YYYY-MM-DD)")]
    EntryInvalidDate { position: usize },
}
