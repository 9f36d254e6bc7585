use crate::core::report::{CheckReport, CheckStatus, RegressionReport};
use crate::core::section_parser::SectionParser;
use crate::core::summary::compare_summary_files;
use crate::core::tag_info::compare_tag_info_files;
use crate::domain::model::{FileKind, ParsedSummaryFile, RunSet, TextFile};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Runs both comparators over the output of several Begum sort runs.
pub struct RegressionCheck<S: Storage> {
    storage: S,
    parser: SectionParser,
    min_runs: usize,
}

impl<S: Storage> RegressionCheck<S> {
    pub fn new<C: ConfigProvider>(storage: S, config: &C) -> Self {
        Self {
            storage,
            parser: SectionParser::new(config.duplicate_sections()),
            min_runs: config.min_runs(),
        }
    }

    /// Loads every file of the run set, then compares summaries and tag info
    /// files independently.
    ///
    /// Unreadable files and invalid run sets are returned as errors before any
    /// comparison starts. Mismatches and malformed summaries are recorded in the
    /// report instead.
    ///
    /// The run set is checked against this check's configured minimum, which
    /// may be stricter than the one it was built with.
    pub fn run(&self, runs: &RunSet) -> Result<RegressionReport> {
        // 驗證輸入
        runs.validate(self.min_runs)?;
        tracing::info!("Checking {} runs of Begum sort", runs.runs());

        // 讀取檔案
        let summary_files = self.load_all(&runs.summary_files)?;
        let tag_info_files = self.load_all(&runs.tag_info_files)?;

        // 比對
        let summary = CheckReport {
            kind: FileKind::Summary,
            files: sources(&summary_files),
            status: CheckStatus::from_result(self.check_summaries(&summary_files)),
        };
        log_status(&summary);

        let tag_info = CheckReport {
            kind: FileKind::TagInfo,
            files: sources(&tag_info_files),
            status: CheckStatus::from_result(compare_tag_info_files(&tag_info_files)),
        };
        log_status(&tag_info);

        Ok(RegressionReport::new(runs.runs(), summary, tag_info))
    }

    fn load_all(&self, paths: &[PathBuf]) -> Result<Vec<TextFile>> {
        paths
            .iter()
            .map(|path| {
                let file = self.storage.read_text_file(path)?;
                tracing::debug!("Loaded {} ({} lines)", file.source, file.lines.len());
                Ok(file)
            })
            .collect()
    }

    fn check_summaries(&self, raw_files: &[TextFile]) -> Result<()> {
        let parsed = raw_files
            .iter()
            .map(|raw| self.parser.parse(raw))
            .collect::<Result<Vec<ParsedSummaryFile>>>()?;
        compare_summary_files(&parsed)
    }
}

fn sources(files: &[TextFile]) -> Vec<String> {
    files.iter().map(|file| file.source.clone()).collect()
}

fn log_status(check: &CheckReport) {
    match &check.status {
        CheckStatus::Passed => tracing::info!("✅ {} check passed", check.kind),
        CheckStatus::Mismatch { mismatch } => {
            tracing::error!(
                file_index = mismatch.file_index(),
                "❌ {} check failed ({}): {}",
                check.kind,
                mismatch.kind(),
                mismatch
            )
        }
        CheckStatus::FormatError { message } | CheckStatus::Error { message } => {
            tracing::error!("❌ {} check failed: {}", check.kind, message)
        }
    }
}
