use crate::adapters::discovery::{SUMMARY_EXTENSION, TAG_INFO_EXTENSION};
use crate::domain::model::{DuplicateSectionPolicy, MIN_RUNS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CompareError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for `begum-regression`, usually read from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionConfig {
    pub discovery: DiscoveryConfig,
    pub comparison: ComparisonConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub results_directory: Option<PathBuf>,
    pub summary_extension: String,
    pub tag_info_extension: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            results_directory: None,
            summary_extension: SUMMARY_EXTENSION.to_string(),
            tag_info_extension: TAG_INFO_EXTENSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    pub min_runs: usize,
    pub duplicate_sections: DuplicateSectionPolicy,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            min_runs: MIN_RUNS,
            duplicate_sections: DuplicateSectionPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
    /// Where to also write the JSON report.
    pub output_path: Option<PathBuf>,
}

impl RegressionConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CompareError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CompareError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RESULTS_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CompareError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(dir) = &self.discovery.results_directory {
            validate_path("discovery.results_directory", dir)?;
        }

        validate_non_empty_string(
            "discovery.summary_extension",
            &self.discovery.summary_extension,
        )?;
        validate_non_empty_string(
            "discovery.tag_info_extension",
            &self.discovery.tag_info_extension,
        )?;

        if self.discovery.summary_extension == self.discovery.tag_info_extension {
            return Err(CompareError::InvalidConfigValueError {
                field: "discovery.tag_info_extension".to_string(),
                value: self.discovery.tag_info_extension.clone(),
                reason: "must differ from discovery.summary_extension".to_string(),
            });
        }

        validate_positive_number("comparison.min_runs", self.comparison.min_runs, MIN_RUNS)?;

        if let Some(output) = &self.report.output_path {
            validate_path("report.output_path", output)?;
        }

        Ok(())
    }
}

impl ConfigProvider for RegressionConfig {
    fn duplicate_sections(&self) -> DuplicateSectionPolicy {
        self.comparison.duplicate_sections
    }

    fn min_runs(&self) -> usize {
        self.comparison.min_runs
    }
}

impl Validate for RegressionConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
