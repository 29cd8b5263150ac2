//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - Catalog and requirement paths must not be empty
//! - Each special-case course appears once and names a requirement
//! - A student declares at most two majors
//! - Completed course codes must be well formed

use crate::catalog::CourseCode;
use crate::config::schema::PlannerConfig;
use crate::error::{PlannerError, Result};
use std::collections::HashSet;

/// Most majors a student may declare.
pub const MAX_MAJORS: usize = 2;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
        }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &PlannerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_paths(config));
    errors.extend(validate_special_cases(config));
    errors.extend(validate_student(config));

    errors
}

fn validate_paths(config: &PlannerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (key, path) in [("catalog", &config.catalog), ("requirements", &config.requirements)] {
        if let Some(path) = path {
            if path.as_os_str().is_empty() {
                errors.push(ValidationError::new(
                    "empty-path",
                    format!("'{}' path is empty", key),
                ));
            }
        }
    }

    errors
}

fn validate_special_cases(config: &PlannerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for rule in &config.special_cases {
        if !seen.insert(&rule.course) {
            errors.push(ValidationError::new(
                "duplicate-special-case",
                format!("Special case '{}' is defined more than once", rule.course),
            ));
        }

        if rule.requires.is_empty() && rule.note.is_none() {
            errors.push(ValidationError::new(
                "empty-special-case",
                format!(
                    "Special case '{}' has neither 'requires' nor 'note'",
                    rule.course
                ),
            ));
        }
    }

    errors
}

fn validate_student(config: &PlannerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let Some(student) = &config.student else {
        return errors;
    };

    if student.majors.len() > MAX_MAJORS {
        errors.push(ValidationError::new(
            "too-many-majors",
            format!(
                "Student declares {} majors; at most {} are supported",
                student.majors.len(),
                MAX_MAJORS
            ),
        ));
    }

    for raw in &student.completed {
        if CourseCode::parse_lenient(raw).is_err() {
            errors.push(ValidationError::new(
                "malformed-course",
                format!("Completed course '{}' is not a valid course code", raw),
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &PlannerConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(PlannerError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
