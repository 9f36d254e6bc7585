use crate::domain::model::{FileKind, LineDifference};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// A disagreement between a run's output and the reference run (file 0).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Mismatch {
    #[error(
        "Summary file {file_index} ({file}) has different sections: missing [{}], unexpected [{}]",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    SectionSet {
        file_index: usize,
        file: String,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error(
        "Section '{section}' of summary file {file_index} ({file}) differs in {} line(s)",
        .differences.len()
    )]
    SectionContent {
        section: String,
        file_index: usize,
        file: String,
        differences: Vec<LineDifference>,
    },

    #[error(
        "Tag info file {file_index} ({file}) has header {:?}, expected {:?}",
        .found.as_deref().unwrap_or("<none>"),
        .expected.as_deref().unwrap_or("<none>")
    )]
    Header {
        file_index: usize,
        file: String,
        expected: Option<String>,
        found: Option<String>,
    },

    #[error("Tag info file {file_index} ({file}) differs in {} line(s)", .differences.len())]
    Body {
        file_index: usize,
        file: String,
        differences: Vec<LineDifference>,
    },
}

impl Mismatch {
    pub fn kind(&self) -> &'static str {
        match self {
            Mismatch::SectionSet { .. } => "section-set",
            Mismatch::SectionContent { .. } => "section-content",
            Mismatch::Header { .. } => "header",
            Mismatch::Body { .. } => "body",
        }
    }

    pub fn file_index(&self) -> usize {
        match self {
            Mismatch::SectionSet { file_index, .. }
            | Mismatch::SectionContent { file_index, .. }
            | Mismatch::Header { file_index, .. }
            | Mismatch::Body { file_index, .. } => *file_index,
        }
    }
}

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Unable to read {}: {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Format error in {file} at line {line_number}: section '{section}' is not followed by a separator line (found {found:?})"
    )]
    MissingSeparator {
        file: String,
        line_number: usize,
        section: String,
        found: String,
    },

    #[error("Format error in {file} at line {line_number}: section '{section}' is defined more than once")]
    DuplicateSection {
        file: String,
        line_number: usize,
        section: String,
    },

    #[error("{0}")]
    Mismatch(#[from] Mismatch),

    #[error("At least {minimum} {kind} files are required, found {found}")]
    InsufficientFiles {
        kind: FileKind,
        minimum: usize,
        found: usize,
    },

    #[error("Number of summary files ({summary}) differs from number of tag info files ({tag_info})")]
    FileCountMismatch { summary: usize, tag_info: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Format,
    Mismatch,
    Validation,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// The runs disagree or a file is malformed; the check itself worked.
    High,
    /// The check could not be carried out.
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CompareError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompareError::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CompareError::IoError { .. } => ErrorCategory::Input,
            CompareError::MissingSeparator { .. } | CompareError::DuplicateSection { .. } => {
                ErrorCategory::Format
            }
            CompareError::Mismatch(_) => ErrorCategory::Mismatch,
            CompareError::InsufficientFiles { .. } | CompareError::FileCountMismatch { .. } => {
                ErrorCategory::Validation
            }
            CompareError::ConfigError { .. }
            | CompareError::InvalidConfigValueError { .. }
            | CompareError::SerializationError(_) => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Format | ErrorCategory::Mismatch => ErrorSeverity::High,
            ErrorCategory::Input | ErrorCategory::Validation | ErrorCategory::Configuration => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn is_format_error(&self) -> bool {
        self.category() == ErrorCategory::Format
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CompareError::IoError { .. } => "Check that the file exists and is readable",
            CompareError::MissingSeparator { .. } => {
                "Every section name must be followed by a line of hyphens; check the file was not truncated or edited"
            }
            CompareError::DuplicateSection { .. } => {
                "Use --duplicate-sections overwrite to keep only the last definition of a section"
            }
            CompareError::Mismatch(_) => {
                "Inspect the listed lines; the runs produced different data"
            }
            CompareError::InsufficientFiles { .. } => "Provide the output of at least two runs",
            CompareError::FileCountMismatch { .. } => {
                "Each run must contribute exactly one summary file and one tag info file"
            }
            CompareError::ConfigError { .. } | CompareError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
            CompareError::SerializationError(_) => "Re-run with --verbose for details",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CompareError::IoError { path, .. } => format!("Unable to read {}", path.display()),
            CompareError::Mismatch(mismatch) => format!("Runs differ: {}", mismatch),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;
