//! Requirement page assembly.
//!
//! A page covers every category of the selected major, second major and
//! minors. Fixed-list categories report which groups are already satisfied;
//! filtered categories are ranked. Categories are independent of each other,
//! so with `parallel` set each one is built on the rayon pool.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::Serialize;

use crate::catalog::{classify, AvailabilityStatus, AvailabilityWindow, Catalog, CourseCode};
use crate::error::{PlannerError, Result};
use crate::programs::{
    materialize, CategoryKind, CategorySource, CategorySpec, CollegeRules, Materialized,
    ProgramIndex, ProgramKind, ProgramTable, RequirementTables,
};
use crate::ranking::{ImportanceRanker, ScoredCourse, ScoringContext};
use crate::requirements::{
    CompletedCourses, EligibilityEvaluator, Group, RequirementExpr, SpecialCaseProvider,
};

/// Which programs a page is built for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramSelection {
    pub college: String,
    pub major: Option<String>,
    pub second_major: Option<String>,
    pub minors: Vec<String>,
}

/// A fully assembled requirement page.
#[derive(Debug, Clone, Serialize)]
pub struct RequirementPage {
    pub college: String,
    pub sections: Vec<Section>,
}

/// One category on a page.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub program: String,
    pub program_kind: ProgramKind,
    pub category: String,
    pub kind: CategoryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    pub content: SectionContent,
}

impl Section {
    /// Satisfied groups for fixed-list sections, taken courses otherwise.
    pub fn completed_count(&self) -> usize {
        match &self.content {
            SectionContent::Groups { groups } => {
                groups.iter().filter(|g| g.satisfied_by.is_some()).count()
            }
            SectionContent::Ranked { courses } => {
                courses.iter().filter(|c| c.course.taken).count()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionContent {
    Groups { groups: Vec<GroupProgress> },
    Ranked { courses: Vec<RankedCourse> },
}

/// A fixed-list group and the completed course that satisfies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupProgress {
    pub courses: Vec<CourseCode>,
    pub satisfied_by: Option<CourseCode>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedCourse {
    #[serde(flatten)]
    pub course: ScoredCourse,
    pub availability: AvailabilityStatus,
}

struct ProgramContext<'t> {
    table: &'t ProgramTable,
    /// Courses already spent on the program's fixed-list categories.
    fulfilled: HashSet<CourseCode>,
}

/// Builds requirement pages from immutable snapshots.
pub struct PageAssembler<'a> {
    catalog: &'a Catalog,
    tables: &'a RequirementTables,
    special: &'a dyn SpecialCaseProvider,
    window: AvailabilityWindow,
    parallel: bool,
}

impl<'a> PageAssembler<'a> {
    pub fn new(
        catalog: &'a Catalog,
        tables: &'a RequirementTables,
        special: &'a dyn SpecialCaseProvider,
    ) -> Self {
        Self {
            catalog,
            tables,
            special,
            window: AvailabilityWindow::default(),
            parallel: false,
        }
    }

    pub fn with_window(mut self, window: AvailabilityWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    fn evaluator(&self) -> EligibilityEvaluator<'a> {
        EligibilityEvaluator::new(self.catalog, self.special)
    }

    fn college(&self, id: &str) -> Option<&'a CollegeRules> {
        let college = self.tables.college(id);
        if college.is_none() {
            tracing::warn!("No distribution rules for college '{}'", id);
        }
        college
    }

    /// Build the page for a selection.
    ///
    /// # Errors
    ///
    /// Returns `UnknownProgram` for a program with no table under the
    /// college, configuration errors from broken categories, and any
    /// special-case provider failure.
    pub fn assemble(
        &self,
        selection: &ProgramSelection,
        completed: &CompletedCourses,
    ) -> Result<RequirementPage> {
        let college = selection.college.as_str();
        let lookup = |id: &String| self.tables.program(id, college);

        let major = selection.major.as_ref().map(lookup).transpose()?;
        let second_major = selection.second_major.as_ref().map(lookup).transpose()?;
        let minors = selection
            .minors
            .iter()
            .map(lookup)
            .collect::<Result<Vec<_>>>()?;

        let major_index = major
            .map(|t| ProgramIndex::build(t, self.catalog))
            .transpose()?;
        let second_index = second_major
            .map(|t| ProgramIndex::build(t, self.catalog))
            .transpose()?;
        let minor_indices = minors
            .iter()
            .map(|t| ProgramIndex::build(t, self.catalog))
            .collect::<Result<Vec<_>>>()?;

        let context = ScoringContext {
            college: self.college(college),
            major: major_index.as_ref(),
            second_major: second_index.as_ref(),
            minors: &minor_indices,
        };
        let ranker = ImportanceRanker::new(self.evaluator(), context);

        let programs: Vec<ProgramContext<'_>> = major
            .into_iter()
            .chain(second_major)
            .chain(minors)
            .map(|table| ProgramContext {
                table,
                fulfilled: fulfilled_courses(table, completed),
            })
            .collect();

        let jobs: Vec<(&ProgramContext<'_>, &CategorySpec)> = programs
            .iter()
            .flat_map(|p| p.table.categories.iter().map(move |c| (p, c)))
            .collect();

        let sections = if self.parallel {
            jobs.par_iter()
                .map(|(program, category)| self.section(&ranker, program, category, completed))
                .collect::<Result<Vec<_>>>()?
        } else {
            jobs.iter()
                .map(|(program, category)| self.section(&ranker, program, category, completed))
                .collect::<Result<Vec<_>>>()?
        };

        tracing::debug!(
            "Assembled {} sections for {} programs",
            sections.len(),
            programs.len()
        );

        Ok(RequirementPage {
            college: selection.college.clone(),
            sections,
        })
    }

    /// Build the section for one named category of one program.
    ///
    /// Scoring considers only that program and the college's distributions.
    pub fn category(
        &self,
        program: &str,
        college: &str,
        name: &str,
        completed: &CompletedCourses,
    ) -> Result<Section> {
        let table = self.tables.program(program, college)?;
        let category = table
            .category(name)
            .ok_or_else(|| PlannerError::UnknownCategory {
                program: program.to_string(),
                category: name.to_string(),
            })?;

        let index = ProgramIndex::build(table, self.catalog)?;
        let minors = std::slice::from_ref(&index);
        let context = match table.kind {
            ProgramKind::Major => ScoringContext {
                college: self.college(college),
                major: Some(&index),
                ..Default::default()
            },
            ProgramKind::Minor => ScoringContext {
                college: self.college(college),
                minors,
                ..Default::default()
            },
        };
        let ranker = ImportanceRanker::new(self.evaluator(), context);

        let program = ProgramContext {
            table,
            fulfilled: fulfilled_courses(table, completed),
        };
        self.section(&ranker, &program, category, completed)
    }

    fn section(
        &self,
        ranker: &ImportanceRanker<'_>,
        program: &ProgramContext<'_>,
        category: &CategorySpec,
        completed: &CompletedCourses,
    ) -> Result<Section> {
        let content = match materialize(category, self.catalog)? {
            Materialized::Groups(groups) => SectionContent::Groups {
                groups: groups
                    .iter()
                    .map(|group| GroupProgress {
                        courses: group.courses().to_vec(),
                        satisfied_by: group.satisfied_by(completed).cloned(),
                    })
                    .collect(),
            },
            Materialized::Courses(mut codes) => {
                if category.skip_fulfilled {
                    codes.retain(|code| !program.fulfilled.contains(code));
                }
                let courses = ranker
                    .rank(&codes, completed)?
                    .into_iter()
                    .map(|course| RankedCourse {
                        availability: classify(self.catalog.get(&course.code), &self.window),
                        course,
                    })
                    .collect();
                SectionContent::Ranked { courses }
            }
        };

        Ok(Section {
            program: program.table.id.clone(),
            program_kind: program.table.kind,
            category: category.name.clone(),
            kind: category.kind,
            required: category.required,
            description: category.description.clone(),
            content,
        })
    }
}

/// Completed courses that satisfy groups of the program's fixed-list
/// categories, each group claiming at most one course.
fn fulfilled_courses(table: &ProgramTable, completed: &CompletedCourses) -> HashSet<CourseCode> {
    table
        .categories
        .iter()
        .filter_map(|category| match category.source() {
            Ok(CategorySource::Fixed(groups)) => Some(groups),
            _ => None,
        })
        .flat_map(|groups: &[Group]| RequirementExpr::new(groups.to_vec()).fulfilled_by(completed))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Course, CreditRange};
    use crate::requirements::NoSpecialCases;

    fn code(raw: &str) -> CourseCode {
        CourseCode::parse(raw).unwrap()
    }

    fn course(raw: &str, credits: f32, prereqs: &[&[&str]]) -> Course {
        let mut c = Course::new(code(raw));
        c.credits = CreditRange::fixed(credits);
        c.prerequisites = RequirementExpr::from_codes(prereqs).unwrap();
        c.semesters = vec!["FA24".into()];
        c.enrollment_groups = 1;
        c
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            course("CS2110", 3.0, &[]),
            course("CS2800", 3.0, &[]),
            course("CS3110", 4.0, &[&["CS2110"]]),
            course("CS3410", 4.0, &[&["CS2110"], &["CS2800"]]),
            course("CS4700", 3.0, &[&["CS2110"]]),
            course("CS4780", 3.0, &[]),
        ])
    }

    const TABLES: &str = r#"
colleges:
  - id: ENG
    name: Engineering
programs:
  - id: CS
    name: Computer Science
    kind: major
    categories:
      - name: Core
        kind: core
        courses: [CS2110, CS2800, CS3110]
      - name: Upper level
        skip_fulfilled: true
        filter: { subject: CS, min_level: 3 }
  - id: AI
    name: Artificial Intelligence
    kind: minor
    categories:
      - name: Electives
        courses: [CS4700, CS4780]
"#;

    fn tables() -> RequirementTables {
        serde_yaml::from_str(TABLES).unwrap()
    }

    fn selection() -> ProgramSelection {
        ProgramSelection {
            college: "ENG".into(),
            major: Some("CS".into()),
            second_major: None,
            minors: vec!["AI".into()],
        }
    }

    fn ranked(section: &Section) -> Vec<&str> {
        match &section.content {
            SectionContent::Ranked { courses } => {
                courses.iter().map(|c| c.course.code.as_str()).collect()
            }
            SectionContent::Groups { .. } => panic!("expected ranked section"),
        }
    }

    #[test]
    fn assembles_sections_in_program_order() {
        let catalog = catalog();
        let tables = tables();
        let assembler = PageAssembler::new(&catalog, &tables, &NoSpecialCases);
        let completed = CompletedCourses::parse_all(&["CS2110"]).unwrap();

        let page = assembler.assemble(&selection(), &completed).unwrap();
        let names: Vec<_> = page
            .sections
            .iter()
            .map(|s| format!("{}/{}", s.program, s.category))
            .collect();
        assert_eq!(names, vec!["CS/Core", "CS/Upper level", "AI/Electives"]);

        match &page.sections[0].content {
            SectionContent::Groups { groups } => {
                assert_eq!(groups[0].satisfied_by, Some(code("CS2110")));
                assert_eq!(groups[1].satisfied_by, None);
            }
            SectionContent::Ranked { .. } => panic!("expected group section"),
        }
        assert_eq!(page.sections[0].completed_count(), 1);
    }

    #[test]
    fn ranked_section_orders_by_score() {
        let catalog = catalog();
        let tables = tables();
        let assembler = PageAssembler::new(&catalog, &tables, &NoSpecialCases);
        let completed = CompletedCourses::parse_all(&["CS2110"]).unwrap();

        let page = assembler.assemble(&selection(), &completed).unwrap();
        // CS3110: eligible + core + upper level
        // CS4700: eligible + upper level + minor
        // CS4780: eligible + upper level + minor
        // CS3410: blocked on CS2800 + upper level
        assert_eq!(
            ranked(&page.sections[1]),
            vec!["CS3110", "CS4700", "CS4780", "CS3410"]
        );
    }

    #[test]
    fn skip_fulfilled_hides_courses_spent_on_core() {
        let catalog = catalog();
        let tables = tables();
        let assembler = PageAssembler::new(&catalog, &tables, &NoSpecialCases);
        let completed = CompletedCourses::parse_all(&["CS2110", "CS3110"]).unwrap();

        let page = assembler.assemble(&selection(), &completed).unwrap();
        assert!(!ranked(&page.sections[1]).contains(&"CS3110"));
    }

    #[test]
    fn parallel_matches_sequential() {
        let catalog = catalog();
        let tables = tables();
        let completed = CompletedCourses::parse_all(&["CS2110", "CS2800"]).unwrap();

        let sequential = PageAssembler::new(&catalog, &tables, &NoSpecialCases)
            .assemble(&selection(), &completed)
            .unwrap();
        let parallel = PageAssembler::new(&catalog, &tables, &NoSpecialCases)
            .with_parallel(true)
            .assemble(&selection(), &completed)
            .unwrap();

        assert_eq!(
            serde_json::to_value(&sequential).unwrap(),
            serde_json::to_value(&parallel).unwrap()
        );
    }

    #[test]
    fn unknown_program_is_error() {
        let catalog = catalog();
        let tables = tables();
        let assembler = PageAssembler::new(&catalog, &tables, &NoSpecialCases);
        let mut selection = selection();
        selection.second_major = Some("MATH".into());

        let err = assembler
            .assemble(&selection, &CompletedCourses::new())
            .unwrap_err();
        assert!(matches!(err, PlannerError::UnknownProgram { .. }));
    }

    #[test]
    fn single_category_uses_minor_scoring() {
        let catalog = catalog();
        let tables = tables();
        let assembler = PageAssembler::new(&catalog, &tables, &NoSpecialCases);

        let section = assembler
            .category("AI", "ENG", "Electives", &CompletedCourses::new())
            .unwrap();
        assert_eq!(section.program_kind, ProgramKind::Minor);
        assert!(matches!(section.content, SectionContent::Groups { .. }));

        let err = assembler
            .category("AI", "ENG", "Core", &CompletedCourses::new())
            .unwrap_err();
        assert!(matches!(err, PlannerError::UnknownCategory { .. }));
    }

    #[test]
    fn ranked_courses_carry_availability() {
        let catalog = catalog();
        let tables = tables();
        let assembler = PageAssembler::new(&catalog, &tables, &NoSpecialCases)
            .with_window(AvailabilityWindow::new(vec!["SP25".into()]));

        let section = assembler
            .category("CS", "ENG", "Upper level", &CompletedCourses::new())
            .unwrap();
        match section.content {
            SectionContent::Ranked { courses } => {
                assert!(courses
                    .iter()
                    .all(|c| matches!(c.availability, AvailabilityStatus::Stale { .. })));
            }
            SectionContent::Groups { .. } => panic!("expected ranked section"),
        }
    }
}
