//! Requirement table definitions.
//!
//! These structs map to the requirement tables file: the colleges with
//! their distribution rules, and every major and minor with its
//! requirement categories.

use serde::{Deserialize, Serialize};

use crate::catalog::CourseCode;
use crate::error::{PlannerError, Result};
use crate::requirements::Group;

/// Root of the requirement tables file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementTables {
    /// Colleges and their distribution rules
    pub colleges: Vec<CollegeRules>,

    /// Majors and minors
    pub programs: Vec<ProgramTable>,
}

impl RequirementTables {
    pub fn college(&self, id: &str) -> Option<&CollegeRules> {
        self.colleges.iter().find(|c| c.id == id)
    }

    /// Find a program's table for a college.
    ///
    /// A table with a matching college wins over a college-independent one.
    pub fn program(&self, id: &str, college: &str) -> Result<&ProgramTable> {
        let candidates = || self.programs.iter().filter(|p| p.id == id);
        candidates()
            .find(|p| p.college.as_deref() == Some(college))
            .or_else(|| candidates().find(|p| p.college.is_none()))
            .ok_or_else(|| PlannerError::UnknownProgram {
                program: id.to_string(),
                college: college.to_string(),
            })
    }
}

/// College-wide distribution rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollegeRules {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub distributions: Vec<DistributionRule>,
}

/// A distribution area recognized by a college.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionRule {
    /// Catalog tag, e.g. `ALC-AS`
    pub tag: String,

    /// Display name, e.g. "Arts, Literature, and Culture"
    pub name: String,

    /// Explanation attached to ranked courses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ranking bonus override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus: Option<i64>,
}

impl DistributionRule {
    pub fn tag_text(&self, college: &str) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| format!("This can be counted as a {} course in {}.", self.name, college))
    }
}

/// Whether a program is a major or a minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramKind {
    Major,
    Minor,
}

/// Requirement categories of one major or minor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramTable {
    /// Program identifier, e.g. `CS`
    pub id: String,

    #[serde(default)]
    pub name: String,

    pub kind: ProgramKind,

    /// College the table applies to; `None` applies to every college
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,

    #[serde(default)]
    pub categories: Vec<CategorySpec>,
}

impl ProgramTable {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    pub fn category(&self, name: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|c| c.name == name)
    }
}

/// Mandatory core versus "choose N" elective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Core,
    #[default]
    Elective,
}

/// How a filter compares course levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelMatch {
    /// Level at or above the minimum
    #[default]
    AtLeast,
    /// Only the given level
    Exactly,
}

fn default_min_credit() -> f32 {
    3.0
}

/// Catalog scan settings for a filtered category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_level: Option<u8>,

    #[serde(default)]
    pub level_match: LevelMatch,

    #[serde(default = "default_min_credit")]
    pub min_credit: f32,

    /// Digits and `*` wildcards the course number must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_pattern: Option<String>,

    /// Added regardless of subject, level and credit
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub included: Vec<CourseCode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded: Vec<CourseCode>,

    /// Drop courses whose permission or footnote mentions any of these
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude_notes: Vec<String>,
}

impl LevelFilter {
    /// A filter on subject and minimum level with default credit floor.
    pub fn new(subject: &str, min_level: u8) -> Self {
        Self {
            subject: Some(subject.to_string()),
            min_level: Some(min_level),
            level_match: LevelMatch::AtLeast,
            min_credit: default_min_credit(),
            number_pattern: None,
            included: Vec::new(),
            excluded: Vec::new(),
            exclude_notes: Vec::new(),
        }
    }
}

/// Where a category's courses come from.
#[derive(Debug, Clone, Copy)]
pub enum CategorySource<'a> {
    Fixed(&'a [Group]),
    Filtered(&'a LevelFilter),
}

/// Largest accepted `weight` or distribution `bonus` override.
///
/// Overrides stay far below the taken penalty so a completed course can
/// never outrank an untaken eligible one.
pub const MAX_WEIGHT: i64 = 100;

/// One named slice of a program's requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,

    #[serde(default)]
    pub kind: CategoryKind,

    /// How many courses (or groups) must be taken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<u32>,

    /// Short ranking tag, e.g. "CS Core"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Sentence attached to ranked courses carrying the tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,

    /// Ranking bonus override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,

    /// Explicit course list; each entry is a group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<Group>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<LevelFilter>,

    /// Hide courses already spent on fixed-list categories
    #[serde(default)]
    pub skip_fulfilled: bool,
}

impl CategorySpec {
    /// A fixed-list category.
    pub fn fixed(name: &str, kind: CategoryKind, groups: Vec<Group>) -> Self {
        Self {
            courses: Some(groups),
            ..Self::empty(name, kind)
        }
    }

    /// A filtered category.
    pub fn filtered(name: &str, filter: LevelFilter) -> Self {
        Self {
            filter: Some(filter),
            ..Self::empty(name, CategoryKind::Elective)
        }
    }

    fn empty(name: &str, kind: CategoryKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            required: None,
            tag: None,
            tag_description: None,
            description: Vec::new(),
            weight: None,
            courses: None,
            filter: None,
            skip_fulfilled: false,
        }
    }

    /// Resolve which source the category uses.
    ///
    /// Exactly one of `courses` and `filter` must be set.
    pub fn source(&self) -> Result<CategorySource<'_>> {
        match (&self.courses, &self.filter) {
            (Some(groups), None) => Ok(CategorySource::Fixed(groups)),
            (None, Some(filter)) => Ok(CategorySource::Filtered(filter)),
            (None, None) => Err(PlannerError::MissingCategoryField {
                category: self.name.clone(),
                field: "courses or filter".to_string(),
            }),
            (Some(_), Some(_)) => Err(PlannerError::ConfigValidationError {
                message: format!(
                    "Category '{}' sets both 'courses' and 'filter'",
                    self.name
                ),
            }),
        }
    }

    /// Key used for the ranking tag.
    pub fn tag_key(&self, program_id: &str) -> String {
        self.tag
            .clone()
            .unwrap_or_else(|| format!("{} {}", program_id, self.name))
    }

    /// Explanation used for the ranking tag.
    pub fn tag_text(&self, program_name: &str) -> String {
        self.tag_description.clone().unwrap_or_else(|| {
            format!(
                "This can be counted toward {} for {}.",
                self.name, program_name
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLES: &str = r#"
colleges:
  - id: AS
    name: Arts and Sciences
    distributions:
      - tag: ALC-AS
        name: Arts, Literature, and Culture
programs:
  - id: ARTH
    name: History of Art
    kind: major
    college: AS
    categories:
      - name: Core Courses
        kind: core
        courses: [ARTH1100, ARTH2000, [ARTH4101, ARTH4102]]
      - name: 3000 Level
        required: 1
        filter:
          subject: ARTH
          min_level: 3
          level_match: exactly
          excluded: [ARTH3999]
  - id: AI
    kind: minor
    categories:
      - name: Electives
        weight: 8
        courses: [CS4700, CS4780]
"#;

    fn tables() -> RequirementTables {
        serde_yaml::from_str(TABLES).unwrap()
    }

    #[test]
    fn parses_tables() {
        let t = tables();
        assert_eq!(t.colleges.len(), 1);
        assert_eq!(t.programs.len(), 2);

        let arth = t.program("ARTH", "AS").unwrap();
        assert_eq!(arth.kind, ProgramKind::Major);
        assert_eq!(arth.categories[0].kind, CategoryKind::Core);
        assert_eq!(arth.categories[1].kind, CategoryKind::Elective);

        let filter = arth.categories[1].filter.as_ref().unwrap();
        assert_eq!(filter.level_match, LevelMatch::Exactly);
        assert_eq!(filter.min_credit, 3.0);
    }

    #[test]
    fn college_independent_program_matches_any_college() {
        let t = tables();
        assert_eq!(t.program("AI", "ENG").unwrap().kind, ProgramKind::Minor);
    }

    #[test]
    fn unknown_program_errors() {
        let t = tables();
        let err = t.program("ARTH", "ENG").unwrap_err();
        assert!(matches!(err, PlannerError::UnknownProgram { .. }));
    }

    #[test]
    fn category_source_requires_exactly_one() {
        let t = tables();
        let arth = t.program("ARTH", "AS").unwrap();
        assert!(matches!(
            arth.categories[0].source().unwrap(),
            CategorySource::Fixed(groups) if groups.len() == 3
        ));
        assert!(matches!(
            arth.categories[1].source().unwrap(),
            CategorySource::Filtered(_)
        ));

        let mut broken = arth.categories[0].clone();
        broken.courses = None;
        assert!(matches!(
            broken.source().unwrap_err(),
            PlannerError::MissingCategoryField { .. }
        ));

        let mut both = arth.categories[1].clone();
        both.courses = Some(Vec::new());
        assert!(both.source().is_err());
    }

    #[test]
    fn tag_defaults() {
        let t = tables();
        let arth = t.program("ARTH", "AS").unwrap();
        let core = arth.category("Core Courses").unwrap();
        assert_eq!(core.tag_key("ARTH"), "ARTH Core Courses");
        assert!(core.tag_text("History of Art").contains("History of Art"));
        assert_eq!(arth.display_name(), "History of Art");
    }

    #[test]
    fn distribution_text_defaults() {
        let t = tables();
        let rule = &t.college("AS").unwrap().distributions[0];
        assert_eq!(
            rule.tag_text("Arts and Sciences"),
            "This can be counted as a Arts, Literature, and Culture course in Arts and Sciences."
        );
    }
}
