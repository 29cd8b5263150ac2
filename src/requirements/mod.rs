//! Requirement evaluation.
//!
//! This module decides whether a student's course history satisfies
//! requirement expressions and, built on that, whether they may enroll in
//! a given course.
//!
//! # Modules
//!
//! - [`expression`] - Conjunctive requirement expressions and unmet groups
//! - [`completed`] - The completed-courses set
//! - [`special`] - Special-case rule providers
//! - [`eligibility`] - Per-course eligibility verdicts

pub mod completed;
pub mod eligibility;
pub mod expression;
pub mod special;

pub use completed::CompletedCourses;
pub use eligibility::{Eligibility, EligibilityBreakdown, EligibilityEvaluator, GRADUATE_LEVEL};
pub use expression::{unmet_groups, Group, RequirementExpr};
pub use special::{NoSpecialCases, SpecialCaseProvider, SpecialCaseRule, SpecialCaseTable};
