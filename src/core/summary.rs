use crate::core::split_reference;
use crate::domain::model::{FileKind, LineCounts, ParsedSummaryFile};
use crate::utils::error::{Mismatch, Result};

/// Checks that every summary file holds the same data as the first one.
///
/// Section order and line order within a section are not significant: two
/// files match when they define the same section names and each section holds
/// the same multiset of lines. The first disagreement found is returned.
pub fn compare_summary_files(files: &[ParsedSummaryFile]) -> Result<()> {
    let (reference, others) = split_reference(files, FileKind::Summary)?;

    tracing::info!("Comparing {} summary files...", files.len());

    let reference_names = reference.section_names();
    for (offset, file) in others.iter().enumerate() {
        let names = file.section_names();
        if names != reference_names {
            return Err(Mismatch::SectionSet {
                file_index: offset + 1,
                file: file.source.clone(),
                missing: reference_names
                    .difference(&names)
                    .map(|name| name.to_string())
                    .collect(),
                unexpected: names
                    .difference(&reference_names)
                    .map(|name| name.to_string())
                    .collect(),
            }
            .into());
        }
    }

    for (section, lines) in &reference.sections {
        let reference_counts = LineCounts::from_lines(lines);

        for (offset, file) in others.iter().enumerate() {
            let counts = LineCounts::from_lines(file.section(section).unwrap_or_default());
            if counts != reference_counts {
                return Err(Mismatch::SectionContent {
                    section: section.clone(),
                    file_index: offset + 1,
                    file: file.source.clone(),
                    differences: reference_counts.differences(&counts),
                }
                .into());
            }
        }
    }

    tracing::info!("Summary files contain the same data.");
    Ok(())
}
