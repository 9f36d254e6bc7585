use crate::utils::error::{CompareError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

/// Section holding every line that precedes the first explicit section header.
pub const HEADER_SECTION: &str = "header";

/// Smallest number of runs a comparison is defined for.
pub const MIN_RUNS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Summary,
    TagInfo,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Summary => f.write_str("summary"),
            FileKind::TagInfo => f.write_str("tag info"),
        }
    }
}

/// The lines of one input artifact, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    pub source: String,
    pub lines: Vec<String>,
}

impl TextFile {
    pub fn new(source: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            source: source.into(),
            lines,
        }
    }

    pub fn from_text(source: impl Into<String>, text: &str) -> Self {
        Self::new(source, split_lines(text))
    }

    /// First line of the file, if any. For tag info files this is the header.
    pub fn first_line(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits text on universal line boundaries: `\n`, `\r\n`, a lone `\r`, and
/// the other ASCII and Unicode line separators. Terminators are dropped and a
/// trailing terminator does not produce an empty last line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some(pos) = rest.find(is_line_boundary) {
        lines.push(rest[..pos].to_string());
        let tail = &rest[pos..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }

    if !rest.is_empty() {
        lines.push(rest.to_string());
    }
    lines
}

/// A summary file split into its named sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSummaryFile {
    pub source: String,
    pub sections: BTreeMap<String, Vec<String>>,
}

impl ParsedSummaryFile {
    pub fn section(&self, name: &str) -> Option<&[String]> {
        self.sections.get(name).map(Vec::as_slice)
    }

    pub fn section_names(&self) -> BTreeSet<&str> {
        self.sections.keys().map(String::as_str).collect()
    }
}

/// One entry of a multiset comparison whose counts disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineDifference {
    pub line: String,
    pub reference_count: usize,
    pub other_count: usize,
}

/// Multiset of lines: each distinct line with the number of times it occurs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineCounts<'a>(BTreeMap<&'a str, usize>);

impl<'a> LineCounts<'a> {
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut counts = BTreeMap::new();
        for line in lines {
            *counts.entry(line.as_str()).or_insert(0) += 1;
        }
        Self(counts)
    }

    pub fn count(&self, line: &str) -> usize {
        self.0.get(line).copied().unwrap_or(0)
    }

    /// Lines whose counts differ, sorted by line text.
    pub fn differences(&self, other: &LineCounts<'_>) -> Vec<LineDifference> {
        let lines: BTreeSet<&str> = self.0.keys().chain(other.0.keys()).copied().collect();

        lines
            .into_iter()
            .filter_map(|line| {
                let reference_count = self.count(line);
                let other_count = other.count(line);
                (reference_count != other_count).then(|| LineDifference {
                    line: line.to_string(),
                    reference_count,
                    other_count,
                })
            })
            .collect()
    }
}

/// What to do when a summary file defines the same section name twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum DuplicateSectionPolicy {
    #[default]
    Reject,
    /// Keep the last definition and drop earlier content.
    Overwrite,
}

/// Output files of several runs. Index `i` of both lists belongs to run `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSet {
    pub summary_files: Vec<PathBuf>,
    pub tag_info_files: Vec<PathBuf>,
}

impl RunSet {
    pub fn new(
        summary_files: Vec<PathBuf>,
        tag_info_files: Vec<PathBuf>,
        min_runs: usize,
    ) -> Result<Self> {
        let runs = Self {
            summary_files,
            tag_info_files,
        };
        runs.validate(min_runs)?;
        Ok(runs)
    }

    /// Checks that both lists pair up and hold at least `min_runs` runs
    /// (never fewer than two).
    pub fn validate(&self, min_runs: usize) -> Result<()> {
        if self.summary_files.len() != self.tag_info_files.len() {
            return Err(CompareError::FileCountMismatch {
                summary: self.summary_files.len(),
                tag_info: self.tag_info_files.len(),
            });
        }

        let minimum = min_runs.max(MIN_RUNS);
        if self.runs() < minimum {
            return Err(CompareError::InsufficientFiles {
                kind: FileKind::Summary,
                minimum,
                found: self.runs(),
            });
        }

        Ok(())
    }

    pub fn runs(&self) -> usize {
        self.summary_files.len()
    }
}
