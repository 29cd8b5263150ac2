//! Importance ranking of candidate courses.
//!
//! A course's score is the sum of independent contributions:
//!
//! | Contribution | Points |
//! |---|---|
//! | taken (or a cross-listed equivalent taken) | -20000 |
//! | eligible | +10000 |
//! | each recognized distribution tag | +10 (or the rule's `bonus`) |
//! | each major category, core / elective | +10 / +5 (or the category's `weight`) |
//! | each minor category | +8 (or the category's `weight`) |
//!
//! Overrides are clamped to `0..=MAX_WEIGHT`.
//!
//! Every non-eligibility contribution also records a tag explaining it.
//! The taken penalty outweighs all positive contributions together, so an
//! already-taken course never outranks an untaken eligible one.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::CourseCode;
use crate::error::Result;
use crate::programs::{
    CategoryKind, CategoryMembership, CollegeRules, ProgramIndex, ProgramKind, MAX_WEIGHT,
};
use crate::requirements::{CompletedCourses, EligibilityEvaluator};

pub const TAKEN_PENALTY: i64 = -20_000;
pub const ELIGIBLE_BONUS: i64 = 10_000;
pub const DISTRIBUTION_BONUS: i64 = 10;
pub const CORE_BONUS: i64 = 10;
pub const ELECTIVE_BONUS: i64 = 5;
pub const MINOR_BONUS: i64 = 8;

/// Bonus a category contributes to each of its members.
///
/// A `weight` override is clamped to `0..=MAX_WEIGHT`.
pub fn category_bonus(program: ProgramKind, category: &CategoryMembership) -> i64 {
    match category.weight {
        Some(weight) => weight.clamp(0, MAX_WEIGHT),
        None => match (program, category.kind) {
            (ProgramKind::Minor, _) => MINOR_BONUS,
            (ProgramKind::Major, CategoryKind::Core) => CORE_BONUS,
            (ProgramKind::Major, CategoryKind::Elective) => ELECTIVE_BONUS,
        },
    }
}

/// Requirement tables a course is scored against.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringContext<'a> {
    pub college: Option<&'a CollegeRules>,
    pub major: Option<&'a ProgramIndex>,
    pub second_major: Option<&'a ProgramIndex>,
    pub minors: &'a [ProgramIndex],
}

impl<'a> ScoringContext<'a> {
    /// All programs in scoring order: major, second major, then minors.
    fn programs(&self) -> impl Iterator<Item = &'a ProgramIndex> + 'a {
        let minors = self.minors;
        self.major
            .into_iter()
            .chain(self.second_major)
            .chain(minors.iter())
    }
}

/// One ranked course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCourse {
    pub code: CourseCode,
    pub score: i64,
    pub eligible: bool,
    pub taken: bool,
    /// Tag label to explanation
    pub tags: BTreeMap<String, String>,
}

/// Scores and orders candidate courses.
#[derive(Clone, Copy)]
pub struct ImportanceRanker<'a> {
    evaluator: EligibilityEvaluator<'a>,
    context: ScoringContext<'a>,
}

impl<'a> ImportanceRanker<'a> {
    pub fn new(evaluator: EligibilityEvaluator<'a>, context: ScoringContext<'a>) -> Self {
        Self { evaluator, context }
    }

    /// Score a single course.
    ///
    /// # Errors
    ///
    /// Only special-case provider failures, passed through unchanged.
    pub fn score(&self, code: &CourseCode, completed: &CompletedCourses) -> Result<ScoredCourse> {
        let catalog = self.evaluator.catalog();
        let mut score = 0;
        let mut tags = BTreeMap::new();

        let taken = catalog.is_taken(code, completed);
        if taken {
            score += TAKEN_PENALTY;
        }

        let eligible = self.evaluator.is_eligible(code, completed)?;
        if eligible {
            score += ELIGIBLE_BONUS;
        }

        if let (Some(college), Some(course)) = (self.context.college, catalog.get(code)) {
            let college_name = if college.name.is_empty() {
                &college.id
            } else {
                &college.name
            };
            for rule in &college.distributions {
                if course.distributions.contains(&rule.tag) {
                    score += rule
                        .bonus
                        .map_or(DISTRIBUTION_BONUS, |b| b.clamp(0, MAX_WEIGHT));
                    tags.insert(rule.tag.clone(), rule.tag_text(college_name));
                }
            }
        }

        for program in self.context.programs() {
            for category in program.memberships(code) {
                score += category_bonus(program.kind, category);
                tags.insert(category.tag.clone(), category.description.clone());
            }
        }

        Ok(ScoredCourse {
            code: code.clone(),
            score,
            eligible,
            taken,
            tags,
        })
    }

    /// Score every candidate and sort by descending score.
    ///
    /// Equal scores keep their input order.
    pub fn rank(
        &self,
        candidates: &[CourseCode],
        completed: &CompletedCourses,
    ) -> Result<Vec<ScoredCourse>> {
        let mut scored = candidates
            .iter()
            .map(|code| self.score(code, completed))
            .collect::<Result<Vec<_>>>()?;
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        Ok(scored)
    }
}
