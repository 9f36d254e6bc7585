use crate::domain::model::{FileKind, LineDifference};
use crate::utils::error::{CompareError, Mismatch, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

const MAX_LISTED_DIFFERENCES: usize = 20;

/// Outcome of one comparator over one run set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckStatus {
    Passed,
    Mismatch {
        mismatch: Mismatch,
    },
    FormatError {
        message: String,
    },
    /// The comparison could not be carried out at all, e.g. a comparator was
    /// handed fewer than two files. `RegressionCheck` validates its run set up
    /// front, so this only shows up when the comparators are driven directly.
    Error {
        message: String,
    },
}

impl CheckStatus {
    pub fn from_result(result: Result<()>) -> Self {
        match result {
            Ok(()) => CheckStatus::Passed,
            Err(CompareError::Mismatch(mismatch)) => CheckStatus::Mismatch { mismatch },
            Err(e) if e.is_format_error() => CheckStatus::FormatError {
                message: e.to_string(),
            },
            Err(e) => CheckStatus::Error {
                message: e.to_string(),
            },
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, CheckStatus::Passed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub kind: FileKind,
    pub files: Vec<String>,
    #[serde(flatten)]
    pub status: CheckStatus,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.status.passed()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegressionReport {
    pub checked_at: DateTime<Utc>,
    pub runs: usize,
    pub passed: bool,
    pub summary: CheckReport,
    pub tag_info: CheckReport,
}

impl RegressionReport {
    pub fn new(runs: usize, summary: CheckReport, tag_info: CheckReport) -> Self {
        Self {
            checked_at: Utc::now(),
            runs,
            passed: summary.passed() && tag_info.passed(),
            summary,
            tag_info,
        }
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        render_check(&mut out, &self.summary);
        render_check(&mut out, &self.tag_info);

        if self.passed {
            let _ = writeln!(out, "\n✅ All comparisons resulted in identical data.");
        } else {
            let _ = writeln!(out, "\n❌ Runs of Begum sort produced different output.");
        }
        out
    }
}

fn render_check(out: &mut String, check: &CheckReport) {
    let _ = writeln!(out, "\nComparing {} files...", check.kind);

    match &check.status {
        CheckStatus::Passed => {
            let _ = writeln!(out, "✅ {} files contain the same data.", capitalize(check.kind));
        }
        CheckStatus::Mismatch { mismatch } => {
            let _ = writeln!(out, "❌ {}", mismatch);
            match mismatch {
                Mismatch::SectionContent { differences, .. } | Mismatch::Body { differences, .. } => {
                    render_differences(out, differences);
                }
                Mismatch::SectionSet { .. } | Mismatch::Header { .. } => {}
            }
        }
        CheckStatus::FormatError { message } | CheckStatus::Error { message } => {
            let _ = writeln!(out, "❌ {}", message);
        }
    }
}

fn render_differences(out: &mut String, differences: &[LineDifference]) {
    for difference in differences.iter().take(MAX_LISTED_DIFFERENCES) {
        let _ = writeln!(
            out,
            "   {:?}: {} in reference, {} here",
            difference.line, difference.reference_count, difference.other_count
        );
    }
    if differences.len() > MAX_LISTED_DIFFERENCES {
        let _ = writeln!(
            out,
            "   ... and {} more",
            differences.len() - MAX_LISTED_DIFFERENCES
        );
    }
}

fn capitalize(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Summary => "Summary",
        FileKind::TagInfo => "Tag info",
    }
}
