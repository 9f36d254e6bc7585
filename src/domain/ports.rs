use crate::domain::model::{DuplicateSectionPolicy, TextFile, MIN_RUNS};
use crate::utils::error::Result;
use std::path::Path;

/// Source of run output files.
pub trait Storage {
    fn read_text_file(&self, path: &Path) -> Result<TextFile>;
}

pub trait ConfigProvider {
    fn duplicate_sections(&self) -> DuplicateSectionPolicy;

    fn min_runs(&self) -> usize {
        MIN_RUNS
    }
}
