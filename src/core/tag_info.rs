use crate::core::split_reference;
use crate::domain::model::{FileKind, LineCounts, TextFile};
use crate::utils::error::{Mismatch, Result};

/// Checks that every tag info file holds the same data as the first one.
///
/// The header line must be first in every file. The remaining lines may
/// appear in any order, but the multiset of all lines (header included) must
/// be the same.
pub fn compare_tag_info_files(files: &[TextFile]) -> Result<()> {
    let (reference, others) = split_reference(files, FileKind::TagInfo)?;

    tracing::info!("Comparing {} tag info files...", files.len());

    let reference_header = reference.first_line();
    let reference_counts = LineCounts::from_lines(&reference.lines);

    for (offset, file) in others.iter().enumerate() {
        let file_index = offset + 1;

        if file.first_line() != reference_header {
            return Err(Mismatch::Header {
                file_index,
                file: file.source.clone(),
                expected: reference_header.map(str::to_string),
                found: file.first_line().map(str::to_string),
            }
            .into());
        }

        let counts = LineCounts::from_lines(&file.lines);
        if counts != reference_counts {
            return Err(Mismatch::Body {
                file_index,
                file: file.source.clone(),
                differences: reference_counts.differences(&counts),
            }
            .into());
        }
    }

    tracing::info!("Tag info files contain the same data.");
    Ok(())
}
