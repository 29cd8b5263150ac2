//! Course records as they appear in a catalog snapshot.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::code::CourseCode;
use crate::requirements::RequirementExpr;

/// Minimum and maximum credits a course can be taken for.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "CreditsRepr")]
pub struct CreditRange {
    pub min: f32,
    pub max: f32,
}

impl CreditRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// A course offered for exactly one credit value.
    pub fn fixed(credits: f32) -> Self {
        Self::new(credits, credits)
    }
}

/// Catalog files spell credits as a number, a list of options, or a range.
#[derive(Deserialize)]
#[serde(untagged)]
enum CreditsRepr {
    Fixed(f32),
    Options(Vec<f32>),
    Range { min: f32, max: f32 },
}

impl From<CreditsRepr> for CreditRange {
    fn from(repr: CreditsRepr) -> Self {
        match repr {
            CreditsRepr::Fixed(c) => CreditRange::fixed(c),
            CreditsRepr::Options(options) => {
                let min = options.iter().copied().fold(f32::INFINITY, f32::min);
                let max = options.iter().copied().fold(0.0, f32::max);
                if options.is_empty() {
                    CreditRange::default()
                } else {
                    CreditRange::new(min, max)
                }
            }
            CreditsRepr::Range { min, max } => CreditRange::new(min, max),
        }
    }
}

/// Which halves of the academic year a course has been offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeasonAvailability {
    pub fall: bool,
    pub spring: bool,
}

/// One course in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub code: CourseCode,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default)]
    pub credits: CreditRange,

    /// College distribution tags, e.g. `ALC-AS`.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub distributions: BTreeSet<String>,

    /// Semester codes the course ran in, most recent first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub semesters: Vec<String>,

    /// Enrollment groups in the most recent offering.
    #[serde(default)]
    pub enrollment_groups: u32,

    /// Cross-listed codes that count as the same course.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub combined: Vec<CourseCode>,

    #[serde(default, skip_serializing_if = "RequirementExpr::is_empty")]
    pub prerequisites: RequirementExpr,

    #[serde(default, skip_serializing_if = "RequirementExpr::is_empty")]
    pub corequisites: RequirementExpr,

    #[serde(default, skip_serializing_if = "RequirementExpr::is_empty")]
    pub prereq_or_coreq: RequirementExpr,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footnote: Option<String>,
}

impl Course {
    /// A bare course with no metadata or requirements.
    pub fn new(code: CourseCode) -> Self {
        Self {
            code,
            title: String::new(),
            description: String::new(),
            credits: CreditRange::default(),
            distributions: BTreeSet::new(),
            semesters: Vec::new(),
            enrollment_groups: 0,
            combined: Vec::new(),
            prerequisites: RequirementExpr::default(),
            corequisites: RequirementExpr::default(),
            prereq_or_coreq: RequirementExpr::default(),
            permission: None,
            footnote: None,
        }
    }

    pub fn subject(&self) -> &str {
        self.code.subject()
    }

    pub fn level(&self) -> u8 {
        self.code.level()
    }

    pub fn max_credit(&self) -> f32 {
        self.credits.max
    }

    /// The most recent semester the course ran in.
    pub fn last_offered(&self) -> Option<&str> {
        self.semesters.first().map(String::as_str)
    }

    pub fn offered_in(&self, semester: &str) -> bool {
        self.semesters.iter().any(|s| s == semester)
    }

    /// Whether the most recent offering is the upcoming semester.
    pub fn available_next_semester(&self, next_semester: &str) -> bool {
        self.last_offered() == Some(next_semester)
    }

    pub fn season_availability(&self) -> SeasonAvailability {
        SeasonAvailability {
            fall: self.semesters.iter().any(|s| s.starts_with("FA")),
            spring: self.semesters.iter().any(|s| s.starts_with("SP")),
        }
    }

    /// Whether the permission or footnote text mentions `needle`.
    pub fn has_note(&self, needle: &str) -> bool {
        [&self.permission, &self.footnote]
            .into_iter()
            .flatten()
            .any(|text| text.contains(needle))
    }
}
