//! The set of courses a student has completed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::CourseCode;
use crate::error::Result;

/// Courses a student has already taken.
///
/// Membership is set-like, but the order in which courses were added is kept
/// so that group matching is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CourseCode>", into = "Vec<CourseCode>")]
pub struct CompletedCourses {
    order: Vec<CourseCode>,
    members: HashSet<CourseCode>,
}

impl CompletedCourses {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a list of raw codes, failing on the first malformed one.
    pub fn parse_all<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        let mut completed = Self::new();
        for code in raw {
            completed.insert(CourseCode::parse_lenient(code.as_ref())?);
        }
        Ok(completed)
    }

    /// Add a course. Returns `false` if it was already present.
    pub fn insert(&mut self, code: CourseCode) -> bool {
        if self.members.insert(code.clone()) {
            self.order.push(code);
            true
        } else {
            false
        }
    }

    /// Whether the exact code was completed.
    pub fn contains(&self, code: &CourseCode) -> bool {
        self.members.contains(code)
    }

    /// Completed courses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CourseCode> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl From<Vec<CourseCode>> for CompletedCourses {
    fn from(codes: Vec<CourseCode>) -> Self {
        codes.into_iter().collect()
    }
}

impl From<CompletedCourses> for Vec<CourseCode> {
    fn from(completed: CompletedCourses) -> Self {
        completed.order
    }
}

impl FromIterator<CourseCode> for CompletedCourses {
    fn from_iter<I: IntoIterator<Item = CourseCode>>(iter: I) -> Self {
        let mut completed = Self::new();
        for code in iter {
            completed.insert(code);
        }
        completed
    }
}

impl Extend<CourseCode> for CompletedCourses {
    fn extend<I: IntoIterator<Item = CourseCode>>(&mut self, iter: I) {
        for code in iter {
            self.insert(code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_deduplicates_and_keeps_order() {
        let mut completed = CompletedCourses::new();
        assert!(completed.insert(CourseCode::parse("CS2110").unwrap()));
        assert!(completed.insert(CourseCode::parse("CS1110").unwrap()));
        assert!(!completed.insert(CourseCode::parse("CS2110").unwrap()));

        let codes: Vec<_> = completed.iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["CS2110", "CS1110"]);
        assert_eq!(completed.len(), 2);
    }

    #[test]
    fn parse_all_normalizes() {
        let completed = CompletedCourses::parse_all(&["cs1110", "MATH 1910"]).unwrap();
        assert!(completed.contains(&CourseCode::parse("CS1110").unwrap()));
        assert!(completed.contains(&CourseCode::parse("MATH1910").unwrap()));
    }

    #[test]
    fn parse_all_rejects_malformed() {
        assert!(CompletedCourses::parse_all(&["CS1110", "nope"]).is_err());
    }

    #[test]
    fn deserializes_from_list() {
        let completed: CompletedCourses =
            serde_yaml::from_str("[CS1110, CS2110, CS1110]").unwrap();
        assert_eq!(completed.len(), 2);
    }

    #[test]
    fn empty_by_default() {
        assert!(CompletedCourses::default().is_empty());
    }
}
