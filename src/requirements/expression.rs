//! Conjunctive requirement expressions.
//!
//! A [`RequirementExpr`] is an ordered list of [`Group`]s. The expression
//! holds when every group holds; a group holds when any one of its courses
//! has been completed. An expression with no groups always holds.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::completed::CompletedCourses;
use crate::catalog::CourseCode;
use crate::error::{PlannerError, Result};

/// A non-empty set of interchangeable courses (any one satisfies it).
///
/// Data files may write a single-course group as a bare code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GroupRepr", into = "Vec<CourseCode>")]
pub struct Group(Vec<CourseCode>);

#[derive(Deserialize)]
#[serde(untagged)]
enum GroupRepr {
    Single(CourseCode),
    Many(Vec<CourseCode>),
}

impl Group {
    /// Create a group; empty groups are rejected.
    pub fn new(courses: Vec<CourseCode>) -> Result<Self> {
        if courses.is_empty() {
            return Err(PlannerError::ConfigValidationError {
                message: "requirement groups must list at least one course".to_string(),
            });
        }
        Ok(Self(courses))
    }

    /// Build a group from raw codes.
    pub fn from_codes(codes: &[&str]) -> Result<Self> {
        let courses = codes
            .iter()
            .map(|c| CourseCode::parse(c))
            .collect::<Result<Vec<_>>>()?;
        Self::new(courses)
    }

    pub fn courses(&self) -> &[CourseCode] {
        &self.0
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.0.contains(code)
    }

    /// Whether any member has been completed.
    pub fn is_satisfied_by(&self, completed: &CompletedCourses) -> bool {
        self.0.iter().any(|c| completed.contains(c))
    }

    /// The first member (in group order) that has been completed.
    pub fn satisfied_by<'a>(&'a self, completed: &CompletedCourses) -> Option<&'a CourseCode> {
        self.0.iter().find(|c| completed.contains(c))
    }
}

impl TryFrom<GroupRepr> for Group {
    type Error = PlannerError;

    fn try_from(value: GroupRepr) -> Result<Self> {
        match value {
            GroupRepr::Single(code) => Ok(Self(vec![code])),
            GroupRepr::Many(codes) => Self::new(codes),
        }
    }
}

impl From<Group> for Vec<CourseCode> {
    fn from(group: Group) -> Self {
        group.0
    }
}

/// An AND of [`Group`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementExpr(Vec<Group>);

impl RequirementExpr {
    pub fn new(groups: Vec<Group>) -> Self {
        Self(groups)
    }

    /// Build an expression from nested raw codes.
    ///
    /// ```
    /// use coursepath::requirements::RequirementExpr;
    ///
    /// let expr = RequirementExpr::from_codes(&[&["CS2110", "CS2112"], &["CS2800"]]).unwrap();
    /// assert_eq!(expr.groups().len(), 2);
    /// ```
    pub fn from_codes(groups: &[&[&str]]) -> Result<Self> {
        groups
            .iter()
            .map(|g| Group::from_codes(g))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }

    pub fn groups(&self) -> &[Group] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Groups not yet satisfied, in their original order.
    ///
    /// An empty result means the whole expression is satisfied.
    pub fn unmet_groups(&self, completed: &CompletedCourses) -> Vec<Group> {
        self.0
            .iter()
            .filter(|g| !g.is_satisfied_by(completed))
            .cloned()
            .collect()
    }

    /// Whether every group has a completed member.
    pub fn is_satisfied_by(&self, completed: &CompletedCourses) -> bool {
        self.0.iter().all(|g| g.is_satisfied_by(completed))
    }

    /// Completed courses that account for groups of this expression.
    ///
    /// Walks the history in order; each course claims the first group it
    /// belongs to that no earlier course has claimed. A course that only
    /// matches already-claimed groups is not returned.
    pub fn fulfilled_by(&self, completed: &CompletedCourses) -> Vec<CourseCode> {
        let mut claimed: HashSet<usize> = HashSet::new();
        let mut result = Vec::new();

        for code in completed.iter() {
            let slot = self
                .0
                .iter()
                .enumerate()
                .find(|(i, g)| !claimed.contains(i) && g.contains(code));
            if let Some((i, _)) = slot {
                claimed.insert(i);
                result.push(code.clone());
            }
        }

        result
    }

    /// Every course mentioned anywhere in the expression.
    pub fn courses(&self) -> impl Iterator<Item = &CourseCode> {
        self.0.iter().flat_map(|g| g.courses().iter())
    }
}

impl From<Vec<Group>> for RequirementExpr {
    fn from(groups: Vec<Group>) -> Self {
        Self(groups)
    }
}

/// Free-function form of [`RequirementExpr::unmet_groups`].
pub fn unmet_groups(expr: &RequirementExpr, completed: &CompletedCourses) -> Vec<Group> {
    expr.unmet_groups(completed)
}
