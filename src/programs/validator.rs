//! Requirement table validation rules.
//!
//! Every category must have exactly one source, filters must name the
//! subject and level they scan, and programs must point at known colleges.
//! All problems are collected so a table can be fixed in one pass.

use std::collections::HashSet;

use super::schema::{
    CategoryKind, CategorySpec, LevelFilter, ProgramTable, RequirementTables, MAX_WEIGHT,
};
use crate::error::{PlannerError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Program id if the error is program-specific
    pub program: Option<String>,
    /// Category name if the error is category-specific
    pub category: Option<String>,
}

impl ValidationError {
    fn program(rule: &str, program: &ProgramTable, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            program: Some(program.id.clone()),
            category: None,
        }
    }

    fn category(rule: &str, program: &ProgramTable, category: &CategorySpec, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            program: Some(program.id.clone()),
            category: Some(category.name.clone()),
        }
    }
}

/// Validate requirement tables and return all errors.
pub fn validate_tables(tables: &RequirementTables) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_colleges(tables));
    errors.extend(validate_programs(tables));
    for program in &tables.programs {
        errors.extend(validate_categories(program));
    }

    errors
}

fn validate_colleges(tables: &RequirementTables) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for college in &tables.colleges {
        if !seen.insert(college.id.as_str()) {
            errors.push(ValidationError {
                rule: "duplicate-college".to_string(),
                message: format!("College '{}' is defined more than once", college.id),
                program: None,
                category: None,
            });
        }

        let mut tags = HashSet::new();
        for rule in &college.distributions {
            if !tags.insert(rule.tag.as_str()) {
                errors.push(ValidationError {
                    rule: "duplicate-distribution".to_string(),
                    message: format!(
                        "College '{}' lists distribution '{}' more than once",
                        college.id, rule.tag
                    ),
                    program: None,
                    category: None,
                });
            }
            if let Some(bonus) = rule.bonus.filter(|b| !(0..=MAX_WEIGHT).contains(b)) {
                errors.push(ValidationError {
                    rule: "invalid-weight".to_string(),
                    message: format!(
                        "Distribution '{}' of college '{}' has bonus {}, expected 0 to {}",
                        rule.tag, college.id, bonus, MAX_WEIGHT
                    ),
                    program: None,
                    category: None,
                });
            }
        }
    }

    errors
}

fn validate_programs(tables: &RequirementTables) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for program in &tables.programs {
        if !seen.insert((program.id.as_str(), program.college.as_deref())) {
            errors.push(ValidationError::program(
                "duplicate-program",
                program,
                format!(
                    "Program '{}' is defined more than once for {}",
                    program.id,
                    program.college.as_deref().unwrap_or("all colleges")
                ),
            ));
        }

        if let Some(college) = &program.college {
            if tables.college(college).is_none() {
                errors.push(ValidationError::program(
                    "unknown-college",
                    program,
                    format!(
                        "Program '{}' references college '{}' which does not exist",
                        program.id, college
                    ),
                ));
            }
        }

        if program.categories.is_empty() {
            errors.push(ValidationError::program(
                "empty-program",
                program,
                format!("Program '{}' has no categories", program.id),
            ));
        }
    }

    errors
}

fn validate_categories(program: &ProgramTable) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for category in &program.categories {
        if !seen.insert(category.name.as_str()) {
            errors.push(ValidationError::category(
                "duplicate-category",
                program,
                category,
                format!(
                    "Program '{}' has more than one category named '{}'",
                    program.id, category.name
                ),
            ));
        }

        if let Some(weight) = category.weight.filter(|w| !(0..=MAX_WEIGHT).contains(w)) {
            errors.push(ValidationError::category(
                "invalid-weight",
                program,
                category,
                format!(
                    "Category '{}' in '{}' has weight {}, expected 0 to {}",
                    category.name, program.id, weight, MAX_WEIGHT
                ),
            ));
        }

        match (&category.courses, &category.filter) {
            (None, None) => errors.push(ValidationError::category(
                "missing-source",
                program,
                category,
                format!(
                    "Category '{}' in '{}' must have either 'courses' or 'filter'",
                    category.name, program.id
                ),
            )),
            (Some(_), Some(_)) => errors.push(ValidationError::category(
                "ambiguous-source",
                program,
                category,
                format!(
                    "Category '{}' in '{}' sets both 'courses' and 'filter'",
                    category.name, program.id
                ),
            )),
            (Some(groups), None) => {
                if let Some(required) = category.required {
                    if required as usize > groups.len() {
                        errors.push(ValidationError::category(
                            "required-exceeds-courses",
                            program,
                            category,
                            format!(
                                "Category '{}' in '{}' requires {} but lists only {} groups",
                                category.name,
                                program.id,
                                required,
                                groups.len()
                            ),
                        ));
                    }
                }
            }
            (None, Some(filter)) => {
                if category.kind == CategoryKind::Core {
                    errors.push(ValidationError::category(
                        "core-requires-courses",
                        program,
                        category,
                        format!(
                            "Core category '{}' in '{}' must list its courses",
                            category.name, program.id
                        ),
                    ));
                }
                errors.extend(
                    filter_problems(filter)
                        .into_iter()
                        .map(|(rule, detail)| {
                            ValidationError::category(
                                rule,
                                program,
                                category,
                                format!(
                                    "Filter of '{}' in '{}' {}",
                                    category.name, program.id, detail
                                ),
                            )
                        }),
                );
            }
        }
    }

    errors
}

fn filter_problems(filter: &LevelFilter) -> Vec<(&'static str, String)> {
    let mut problems = Vec::new();

    if filter.subject.as_deref().map_or(true, str::is_empty) {
        problems.push(("missing-filter-field", "has no 'subject'".to_string()));
    }

    match filter.min_level {
        None => problems.push(("missing-filter-field", "has no 'min_level'".to_string())),
        Some(level) if !(1..=9).contains(&level) => problems.push((
            "invalid-level",
            format!("has level {} outside 1-9", level),
        )),
        Some(_) => {}
    }

    if filter.min_credit < 0.0 {
        problems.push((
            "invalid-credit",
            format!("has negative 'min_credit' {}", filter.min_credit),
        ));
    }

    if let Some(pattern) = &filter.number_pattern {
        let valid = pattern.len() == 4 && pattern.chars().all(|c| c == '*' || c.is_ascii_digit());
        if !valid {
            problems.push((
                "invalid-number-pattern",
                format!("has number pattern '{}' (expected 4 digits or '*')", pattern),
            ));
        }
    }

    problems
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(tables: &RequirementTables) -> Result<()> {
    let errors = validate_tables(tables);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(PlannerError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
