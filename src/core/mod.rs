pub mod check;
pub mod report;
pub mod section_parser;
pub mod summary;
pub mod tag_info;

pub use crate::domain::model::{ParsedSummaryFile, RunSet, TextFile};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;

use crate::domain::model::{FileKind, MIN_RUNS};
use crate::utils::error::CompareError;

/// Splits off the reference file (index 0), requiring at least one other file.
pub(crate) fn split_reference<T>(files: &[T], kind: FileKind) -> Result<(&T, &[T])> {
    match files.split_first() {
        Some((reference, others)) if !others.is_empty() => Ok((reference, others)),
        _ => Err(CompareError::InsufficientFiles {
            kind,
            minimum: MIN_RUNS,
            found: files.len(),
        }),
    }
}
