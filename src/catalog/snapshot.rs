//! Immutable catalog snapshot.

use std::collections::BTreeMap;

use super::code::CourseCode;
use super::course::Course;
use crate::requirements::{CompletedCourses, RequirementExpr};

/// Read-only view of every known course, keyed by code.
///
/// A snapshot is built once and then only borrowed; nothing in the engine
/// mutates it. Lookups for codes that are not in the catalog return `None`
/// rather than failing.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: BTreeMap<CourseCode, Course>,
}

impl Catalog {
    /// Build a snapshot. Later entries replace earlier ones with the same code.
    pub fn new<I: IntoIterator<Item = Course>>(courses: I) -> Self {
        let mut map = BTreeMap::new();
        for course in courses {
            if let Some(previous) = map.insert(course.code.clone(), course) {
                tracing::warn!("Duplicate catalog entry for {}", previous.code);
            }
        }
        Self { courses: map }
    }

    pub fn get(&self, code: &CourseCode) -> Option<&Course> {
        let found = self.courses.get(code);
        if found.is_none() {
            tracing::trace!("{} not in catalog", code);
        }
        found
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.courses.contains_key(code)
    }

    /// All courses in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    /// Courses whose subject is exactly `subject`.
    pub fn by_subject<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a Course> + 'a {
        self.courses.values().filter(move |c| c.subject() == subject)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Prerequisites of a course, or `None` when the course is unknown.
    pub fn prerequisites(&self, code: &CourseCode) -> Option<&RequirementExpr> {
        self.get(code).map(|c| &c.prerequisites)
    }

    /// Cross-listed equivalents of a course (empty when unknown).
    pub fn combined(&self, code: &CourseCode) -> &[CourseCode] {
        self.get(code).map(|c| c.combined.as_slice()).unwrap_or(&[])
    }

    /// Whether the course, or any cross-listed equivalent, was completed.
    pub fn is_taken(&self, code: &CourseCode, completed: &CompletedCourses) -> bool {
        completed.contains(code) || self.combined(code).iter().any(|c| completed.contains(c))
    }

    pub fn max_credit(&self, code: &CourseCode) -> Option<f32> {
        self.get(code).map(Course::max_credit)
    }
}

impl FromIterator<Course> for Catalog {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        Self::new(iter)
    }
}
