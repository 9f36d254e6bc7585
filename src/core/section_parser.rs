//! Parser for the sectioned `.summaryCounts` format.
//!
//! A summary file is a sequence of sections. A line without a tab names a new
//! section and must be followed by a line of hyphens; tab separated lines are
//! the content of the most recently opened section. Lines before the first
//! section name belong to the [`HEADER_SECTION`].

use crate::domain::model::{DuplicateSectionPolicy, ParsedSummaryFile, TextFile, HEADER_SECTION};
use crate::utils::error::{CompareError, Result};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static SECTION_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+$").expect("separator pattern is valid"));

pub fn is_section_separator(line: &str) -> bool {
    SECTION_SEPARATOR.is_match(line)
}

pub fn is_section_name(line: &str) -> bool {
    !line.contains('\t')
}

/// Parses a summary file, rejecting repeated section names.
pub fn parse_summary_file(raw: &TextFile) -> Result<ParsedSummaryFile> {
    SectionParser::default().parse(raw)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SectionParser {
    duplicate_sections: DuplicateSectionPolicy,
}

impl SectionParser {
    pub fn new(duplicate_sections: DuplicateSectionPolicy) -> Self {
        Self { duplicate_sections }
    }

    pub fn parse(&self, raw: &TextFile) -> Result<ParsedSummaryFile> {
        let mut sections: BTreeMap<String, Vec<String>> = BTreeMap::new();
        sections.insert(HEADER_SECTION.to_string(), Vec::new());

        let mut current = HEADER_SECTION.to_string();
        let mut expecting_separator = false;

        for (index, line) in raw.lines.iter().enumerate() {
            let line_number = index + 1;

            if expecting_separator {
                if !is_section_separator(line) {
                    return Err(CompareError::MissingSeparator {
                        file: raw.source.clone(),
                        line_number,
                        section: current,
                        found: line.clone(),
                    });
                }
                expecting_separator = false;
                continue;
            }

            if is_section_name(line) {
                if sections.contains_key(line.as_str()) {
                    match self.duplicate_sections {
                        DuplicateSectionPolicy::Reject => {
                            return Err(CompareError::DuplicateSection {
                                file: raw.source.clone(),
                                line_number,
                                section: line.clone(),
                            });
                        }
                        DuplicateSectionPolicy::Overwrite => {
                            tracing::warn!(
                                "Section '{}' redefined at {}:{}, discarding earlier content",
                                line,
                                raw.source,
                                line_number
                            );
                        }
                    }
                }

                sections.insert(line.clone(), Vec::new());
                current = line.clone();
                expecting_separator = true;
                continue;
            }

            sections
                .entry(current.clone())
                .or_default()
                .push(line.clone());
        }

        tracing::debug!(
            "Parsed {} into {} section(s)",
            raw.source,
            sections.len()
        );

        Ok(ParsedSummaryFile {
            source: raw.source.clone(),
            sections,
        })
    }
}
