use crate::utils::error::{CompareError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if display.is_empty() {
        return Err(CompareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(CompareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CompareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CompareError::ConfigError {
        message: format!("Missing required setting: {}", field_name),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CompareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("results_directory", Path::new("./results")).is_ok());
        assert!(validate_path("results_directory", Path::new("")).is_err());
        assert!(validate_path("results_directory", Path::new("bad\0path")).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("min_runs", 2, 2).is_ok());
        assert!(validate_positive_number("min_runs", 1, 2).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        assert_eq!(*validate_required_field("min_runs", &present).unwrap(), 3);

        let missing: Option<usize> = None;
        let err = validate_required_field("results_directory", &missing).unwrap_err();
        assert!(err.to_string().contains("results_directory"));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("summary_extension", "summaryCounts").is_ok());
        assert!(validate_non_empty_string("summary_extension", "  ").is_err());
    }
}
