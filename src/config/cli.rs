use crate::domain::model::{DuplicateSectionPolicy, RunSet};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "begum-compare")]
#[command(about = "Compare the results of multiple runs of Begum sort")]
pub struct CliConfig {
    /// Summary counts files to compare, one per run
    #[arg(long, num_args = 1.., required = true, value_name = "FILE")]
    pub summary_files: Vec<PathBuf>,

    /// Tag info files to compare, one per run, in the same order
    #[arg(long, num_args = 1.., required = true, value_name = "FILE")]
    pub tag_info_files: Vec<PathBuf>,

    /// How to treat a section name that appears twice in one summary file
    #[arg(long, value_enum, default_value_t = DuplicateSectionPolicy::Reject)]
    pub duplicate_sections: DuplicateSectionPolicy,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    pub fn run_set(&self) -> Result<RunSet> {
        RunSet::new(
            self.summary_files.clone(),
            self.tag_info_files.clone(),
            self.min_runs(),
        )
    }
}

impl ConfigProvider for CliConfig {
    fn duplicate_sections(&self) -> DuplicateSectionPolicy {
        self.duplicate_sections
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for path in &self.summary_files {
            validate_path("summary-files", path)?;
        }
        for path in &self.tag_info_files {
            validate_path("tag-info-files", path)?;
        }
        self.run_set().map(|_| ())
    }
}
