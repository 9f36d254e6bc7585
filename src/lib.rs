pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::RegressionConfig;

pub use adapters::storage::LocalStorage;
pub use crate::core::{
    check::RegressionCheck,
    report::{CheckStatus, RegressionReport},
    section_parser::parse_summary_file,
    summary::compare_summary_files,
    tag_info::compare_tag_info_files,
};
pub use domain::model::{DuplicateSectionPolicy, ParsedSummaryFile, RunSet, TextFile};
pub use utils::error::{CompareError, Mismatch, Result};
