//! Error types for coursepath operations.
//!
//! This module defines [`PlannerError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Malformed course codes are rejected at the boundary when a
//!   [`CourseCode`](crate::catalog::CourseCode) is parsed
//! - Unknown (well-formed) course codes are never errors; the engine treats
//!   them as courses without requirements
//! - Broken requirement data surfaces as a configuration error
//! - Use `anyhow::Error` (via `PlannerError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for coursepath operations.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Configuration or data file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration or data file.
    #[error("Failed to parse {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A course code that does not look like `SUBJ1234`.
    #[error("Malformed course code: '{code}'")]
    MalformedCourseCode { code: String },

    /// No requirement table for the program under the given college.
    #[error("Unknown program '{program}' for college '{college}'")]
    UnknownProgram { program: String, college: String },

    /// The program has no category with the requested name.
    #[error("Program '{program}' has no category '{category}'")]
    UnknownCategory { program: String, category: String },

    /// A requirement category is missing data it needs to be resolved.
    #[error("Category '{category}' is missing '{field}'")]
    MissingCategoryField { category: String, field: String },

    /// The special-case rule provider could not evaluate a course.
    #[error("Special-case rule for '{course}' failed: {message}")]
    SpecialCaseFailed { course: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for coursepath operations.
pub type Result<T> = std::result::Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = PlannerError::ConfigNotFound {
            path: PathBuf::from("/data/.coursepath/config.yml"),
        };
        assert!(err.to_string().contains("/data/.coursepath/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PlannerError::ConfigParseError {
            path: PathBuf::from("/catalog.json"),
            message: "expected value".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/catalog.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn malformed_course_code_displays_code() {
        let err = PlannerError::MalformedCourseCode {
            code: "cs 1110".into(),
        };
        assert!(err.to_string().contains("cs 1110"));
    }

    #[test]
    fn unknown_program_displays_program_and_college() {
        let err = PlannerError::UnknownProgram {
            program: "ARTH".into(),
            college: "ENG".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ARTH"));
        assert!(msg.contains("ENG"));
    }

    #[test]
    fn unknown_category_displays_program_and_category() {
        let err = PlannerError::UnknownCategory {
            program: "CS".into(),
            category: "Practicum".into(),
        };
        assert_eq!(err.to_string(), "Program 'CS' has no category 'Practicum'");
    }

    #[test]
    fn missing_category_field_displays_category_and_field() {
        let err = PlannerError::MissingCategoryField {
            category: "3000 Level".into(),
            field: "filter.subject".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("3000 Level"));
        assert!(msg.contains("filter.subject"));
    }

    #[test]
    fn special_case_failed_displays_course() {
        let err = PlannerError::SpecialCaseFailed {
            course: "CS4744".into(),
            message: "rule table unavailable".into(),
        };
        assert!(err.to_string().contains("CS4744"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PlannerError = io_err.into();
        assert!(matches!(err, PlannerError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PlannerError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
