//! Course eligibility.
//!
//! [`EligibilityEvaluator`] decides whether a student may enroll in a
//! course given what they have completed. It combines three requirement
//! kinds from the catalog:
//!
//! - **prerequisites**: every group must already be satisfied
//! - **corequisites**: a group is fine if the student could take one of its
//!   courses alongside, i.e. some member has no prerequisites or has its
//!   own prerequisites satisfied
//! - **prerequisites or corequisites**: satisfied directly, or by the same
//!   relaxed rule as corequisites
//!
//! Courses owned by a [`SpecialCaseProvider`] skip all of this.

use serde::Serialize;

use super::completed::CompletedCourses;
use super::expression::{Group, RequirementExpr};
use super::special::SpecialCaseProvider;
use crate::catalog::{Catalog, CourseCode};
use crate::error::Result;

/// Level at or above which a course with no prerequisites of its own
/// inherits them from its cross-listed counterpart.
pub const GRADUATE_LEVEL: u8 = 5;

/// Verdict for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Eligibility {
    pub eligible: bool,
    /// Unmet prerequisite and corequisite groups.
    pub unmet: Vec<Group>,
}

impl Eligibility {
    pub fn eligible() -> Self {
        Self {
            eligible: true,
            unmet: Vec::new(),
        }
    }

    pub fn blocked(unmet: Vec<Group>) -> Self {
        Self {
            eligible: false,
            unmet,
        }
    }
}

/// Per-kind detail behind an [`Eligibility`] verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EligibilityBreakdown {
    pub prerequisites: Vec<Group>,
    pub corequisites: Vec<Group>,
    pub prereq_or_coreq: Vec<Group>,
    /// Cross-listed course whose prerequisites were borrowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub borrowed_from: Option<CourseCode>,
    /// Verdict from the special-case provider, if it owned the course.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_case: Option<Eligibility>,
}

impl EligibilityBreakdown {
    pub fn is_eligible(&self) -> bool {
        match &self.special_case {
            Some(verdict) => verdict.eligible,
            None => {
                self.prerequisites.is_empty()
                    && self.corequisites.is_empty()
                    && self.prereq_or_coreq.is_empty()
            }
        }
    }

    /// Collapse into a verdict.
    ///
    /// Unmet prerequisite-or-corequisite groups block eligibility but are not
    /// listed in `unmet`.
    pub fn into_eligibility(self) -> Eligibility {
        if let Some(verdict) = self.special_case {
            return verdict;
        }
        if self.is_eligible() {
            return Eligibility::eligible();
        }
        let mut unmet = self.prerequisites;
        unmet.extend(self.corequisites);
        Eligibility::blocked(unmet)
    }
}

/// Evaluates eligibility against an immutable catalog snapshot.
#[derive(Clone, Copy)]
pub struct EligibilityEvaluator<'a> {
    catalog: &'a Catalog,
    special: &'a dyn SpecialCaseProvider,
}

impl<'a> EligibilityEvaluator<'a> {
    pub fn new(catalog: &'a Catalog, special: &'a dyn SpecialCaseProvider) -> Self {
        Self { catalog, special }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Eligibility verdict for one course.
    ///
    /// Unknown courses are eligible. Errors only come from the special-case
    /// provider and are passed through unchanged.
    pub fn evaluate(&self, code: &CourseCode, completed: &CompletedCourses) -> Result<Eligibility> {
        self.breakdown(code, completed)
            .map(EligibilityBreakdown::into_eligibility)
    }

    /// Shorthand for `evaluate(..)?.eligible`.
    pub fn is_eligible(&self, code: &CourseCode, completed: &CompletedCourses) -> Result<bool> {
        self.evaluate(code, completed).map(|e| e.eligible)
    }

    /// Full per-kind detail for one course.
    pub fn breakdown(
        &self,
        code: &CourseCode,
        completed: &CompletedCourses,
    ) -> Result<EligibilityBreakdown> {
        if self.special.handles(code) {
            tracing::debug!("{} is a special case, delegating", code);
            let verdict = self.special.evaluate(completed, code)?;
            return Ok(EligibilityBreakdown {
                special_case: Some(verdict),
                ..Default::default()
            });
        }

        let Some(course) = self.catalog.get(code) else {
            tracing::debug!("{} has no catalog entry, treating as unrestricted", code);
            return Ok(EligibilityBreakdown::default());
        };

        let mut prerequisites = &course.prerequisites;
        let mut borrowed_from = None;
        if prerequisites.is_empty() && course.level() >= GRADUATE_LEVEL {
            if let Some(primary) = course.combined.first() {
                let borrowed = self.catalog.prerequisites(primary);
                if let Some(expr) = borrowed.filter(|e| !e.is_empty()) {
                    tracing::trace!("{} borrows prerequisites from {}", code, primary);
                    prerequisites = expr;
                    borrowed_from = Some(primary.clone());
                }
            }
        }

        let prereq_unmet = prerequisites.unmet_groups(completed);

        let mut coreq_unmet = Vec::new();
        for group in course.corequisites.groups() {
            if let Some(sub) = self.concurrent_unmet(group, completed) {
                coreq_unmet.extend(sub);
            }
        }

        let preco_unmet = self.prereq_or_coreq_unmet(&course.prereq_or_coreq, completed);

        Ok(EligibilityBreakdown {
            prerequisites: prereq_unmet,
            corequisites: coreq_unmet,
            prereq_or_coreq: preco_unmet,
            borrowed_from,
            special_case: None,
        })
    }

    /// Check whether a group can be taken concurrently.
    ///
    /// Returns `None` when some member has no prerequisites or has all of
    /// them satisfied. Otherwise returns the unmet prerequisite groups of the
    /// last member examined.
    fn concurrent_unmet(&self, group: &Group, completed: &CompletedCourses) -> Option<Vec<Group>> {
        let mut last_unmet = Vec::new();
        for member in group.courses() {
            let Some(expr) = self.catalog.prerequisites(member) else {
                return None;
            };
            if expr.is_empty() {
                return None;
            }
            let unmet = expr.unmet_groups(completed);
            if unmet.is_empty() {
                return None;
            }
            last_unmet = unmet;
        }
        Some(last_unmet)
    }

    fn prereq_or_coreq_unmet(
        &self,
        expr: &RequirementExpr,
        completed: &CompletedCourses,
    ) -> Vec<Group> {
        if expr.is_satisfied_by(completed) {
            return Vec::new();
        }

        let mut unmet = Vec::new();
        for group in expr.groups() {
            if group.is_satisfied_by(completed) {
                continue;
            }
            if let Some(sub) = self.concurrent_unmet(group, completed) {
                unmet.extend(sub);
            }
        }
        unmet
    }
}
