//! Error types for syllabify-txt.
//!
//! Per-file failures (`Read`, `Decode`, `CreateDir`, `Write`) are recorded in the
//! run report and never abort a run. The remaining variants are fatal: they
//! come from configuration, dictionary loading or file discovery.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the syllabify library.
#[derive(Debug, Error)]
pub enum SyllabifyError {
    /// Source file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file is not valid UTF-8.
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Destination directory could not be created.
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed during discovery.
    #[error("failed to scan {}: {source}", .root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A configuration value was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Language tag has no matching hyphenation dictionary.
    #[error("Unknown language tag: '{0}'. Expected one of en-US, en-GB, de-1996, fr, nl, es, it")]
    UnknownLanguage(String),

    /// Hyphenation dictionary could not be loaded.
    #[error("Failed to load {language} dictionary: {message}")]
    Dictionary { language: String, message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SyllabifyError {
    /// Whether this error only affects a single file and the run may continue.
    #[must_use]
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            Self::Read { .. } | Self::Decode { .. } | Self::CreateDir { .. } | Self::Write { .. }
        )
    }

    /// Describe the error without naming the source file.
    ///
    /// Used where the file is already shown next to the message. Destination
    /// paths are kept since they differ from the source.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::Read { source, .. } => source.to_string(),
            Self::Decode { source, .. } => format!("not valid UTF-8: {source}"),
            other => other.to_string(),
        }
    }
}

/// Result type alias for syllabify operations.
pub type Result<T> = std::result::Result<T, SyllabifyError>;
