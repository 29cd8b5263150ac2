//! Special-case eligibility rules.
//!
//! A handful of courses have enrollment rules the catalog's prerequisite
//! data cannot express. Their eligibility is answered by a
//! [`SpecialCaseProvider`] instead of the general evaluator. The default
//! provider, [`SpecialCaseTable`], is built from configuration so the rule
//! set can change without touching the evaluator.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::completed::CompletedCourses;
use super::eligibility::Eligibility;
use super::expression::RequirementExpr;
use crate::catalog::CourseCode;
use crate::error::{PlannerError, Result};

/// Answers eligibility for courses that bypass the general evaluator.
pub trait SpecialCaseProvider: Send + Sync {
    /// Whether this provider owns the course.
    fn handles(&self, code: &CourseCode) -> bool;

    /// Decide eligibility for a course this provider owns.
    fn evaluate(&self, completed: &CompletedCourses, code: &CourseCode) -> Result<Eligibility>;
}

/// A provider that owns no courses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSpecialCases;

impl SpecialCaseProvider for NoSpecialCases {
    fn handles(&self, _code: &CourseCode) -> bool {
        false
    }

    fn evaluate(&self, _completed: &CompletedCourses, code: &CourseCode) -> Result<Eligibility> {
        Err(PlannerError::SpecialCaseFailed {
            course: code.to_string(),
            message: "no special-case rules are configured".to_string(),
        })
    }
}

/// One configured special case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialCaseRule {
    /// The course the rule applies to.
    pub course: CourseCode,

    /// Requirement that replaces the catalog's prerequisite data.
    #[serde(default)]
    pub requires: RequirementExpr,

    /// Explanation shown alongside the verdict.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Special cases loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct SpecialCaseTable {
    rules: HashMap<CourseCode, SpecialCaseRule>,
}

impl SpecialCaseTable {
    pub fn new<I: IntoIterator<Item = SpecialCaseRule>>(rules: I) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|rule| (rule.course.clone(), rule))
                .collect(),
        }
    }

    pub fn rule(&self, code: &CourseCode) -> Option<&SpecialCaseRule> {
        self.rules.get(code)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl SpecialCaseProvider for SpecialCaseTable {
    fn handles(&self, code: &CourseCode) -> bool {
        self.rules.contains_key(code)
    }

    fn evaluate(&self, completed: &CompletedCourses, code: &CourseCode) -> Result<Eligibility> {
        let rule = self
            .rules
            .get(code)
            .ok_or_else(|| PlannerError::SpecialCaseFailed {
                course: code.to_string(),
                message: "course is not in the special-case table".to_string(),
            })?;

        let unmet = rule.requires.unmet_groups(completed);
        Ok(if unmet.is_empty() {
            Eligibility::eligible()
        } else {
            Eligibility::blocked(unmet)
        })
    }
}
