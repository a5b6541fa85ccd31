// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a single check run.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{status} for url ({url})")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Table with id 'devices' not found in the HTML.")]
    StructureNotFound,

    #[error("No rows found in the table.")]
    EmptyTable,

    #[error("parsing snapshot {path:?}: {source}")]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    /// Process exit status for this failure. Success is 0 and clap owns 2.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidUrl { .. } | Self::Transport(_) | Self::Status { .. } => 10,
            Self::StructureNotFound => 11,
            Self::EmptyTable => 12,
            Self::SnapshotParse { .. } => 13,
            Self::Io { .. } => 14,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = CheckError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let parse_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let codes = [
            CheckError::StructureNotFound.exit_code(),
            CheckError::EmptyTable.exit_code(),
            CheckError::SnapshotParse {
                path: "devices.json".into(),
                source: parse_err,
            }
            .exit_code(),
            CheckError::io("devices.json", std::io::ErrorKind::PermissionDenied.into())
                .exit_code(),
        ];
        assert_eq!(codes, [11, 12, 13, 14]);
        // 0 is success, 1 and 2 belong to the runtime and clap
        assert!(codes.iter().all(|&c| c >= 10));
    }

    #[test]
    fn extractor_messages_are_stable() {
        assert_eq!(
            CheckError::StructureNotFound.to_string(),
            "Table with id 'devices' not found in the HTML."
        );
        assert_eq!(CheckError::EmptyTable.to_string(), "No rows found in the table.");
    }
}
