//! Category materialization.
//!
//! A category either carries its own list of groups or describes a scan of
//! the catalog. [`materialize`] turns either form into concrete courses, and
//! [`ProgramIndex`] precomputes membership for every category of a program
//! so that ranking can ask "which categories does this course count toward".

use std::collections::HashSet;

use super::schema::{
    CategoryKind, CategorySource, CategorySpec, LevelFilter, LevelMatch, ProgramKind, ProgramTable,
};
use crate::catalog::{Catalog, Course, CourseCode};
use crate::error::{PlannerError, Result};
use crate::requirements::Group;

/// The concrete contents of a category.
#[derive(Debug, Clone, PartialEq)]
pub enum Materialized {
    /// A fixed-list category, returned verbatim.
    Groups(Vec<Group>),
    /// A filtered category in catalog order, inclusions last.
    Courses(Vec<CourseCode>),
}

impl Materialized {
    /// Every course in the category, flattening groups.
    pub fn courses(&self) -> Vec<&CourseCode> {
        match self {
            Materialized::Groups(groups) => groups.iter().flat_map(|g| g.courses()).collect(),
            Materialized::Courses(codes) => codes.iter().collect(),
        }
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        match self {
            Materialized::Groups(groups) => groups.iter().any(|g| g.contains(code)),
            Materialized::Courses(codes) => codes.contains(code),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Materialized::Groups(groups) => groups.len(),
            Materialized::Courses(codes) => codes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Materialize one category against a catalog.
///
/// # Errors
///
/// Returns `MissingCategoryField` when the category has no source or a
/// filter lacks its subject or minimum level. The filter is never guessed.
pub fn materialize(category: &CategorySpec, catalog: &Catalog) -> Result<Materialized> {
    let materialized = match category.source()? {
        CategorySource::Fixed(groups) => Materialized::Groups(groups.to_vec()),
        CategorySource::Filtered(filter) => {
            Materialized::Courses(scan_catalog(&category.name, filter, catalog)?)
        }
    };

    tracing::debug!(
        "Category '{}' materialized to {} entries",
        category.name,
        materialized.len()
    );
    Ok(materialized)
}

fn scan_catalog(name: &str, filter: &LevelFilter, catalog: &Catalog) -> Result<Vec<CourseCode>> {
    let missing = |field: &str| PlannerError::MissingCategoryField {
        category: name.to_string(),
        field: field.to_string(),
    };
    let subject = filter.subject.as_deref().ok_or_else(|| missing("subject"))?;
    let min_level = filter.min_level.ok_or_else(|| missing("min_level"))?;

    let mut courses: Vec<CourseCode> = catalog
        .by_subject(subject)
        .filter(|course| matches_filter(course, filter, min_level))
        .map(|course| course.code.clone())
        .collect();

    for code in &filter.included {
        if !courses.contains(code) {
            courses.push(code.clone());
        }
    }

    Ok(courses)
}

/// Whether a catalog course passes a filter's level, credit, number and
/// note checks. Subject matching is left to the caller.
pub fn matches_filter(course: &Course, filter: &LevelFilter, min_level: u8) -> bool {
    let level_ok = match filter.level_match {
        LevelMatch::AtLeast => course.level() >= min_level,
        LevelMatch::Exactly => course.level() == min_level,
    };

    level_ok
        && course.max_credit() >= filter.min_credit
        && !filter.excluded.contains(&course.code)
        && filter
            .number_pattern
            .as_deref()
            .map_or(true, |pattern| course.code.number_matches(pattern))
        && !filter.exclude_notes.iter().any(|note| course.has_note(note))
}

/// Precomputed membership of one category.
#[derive(Debug, Clone)]
pub struct CategoryMembership {
    pub name: String,
    pub kind: CategoryKind,
    /// Ranking tag key
    pub tag: String,
    /// Ranking tag explanation
    pub description: String,
    pub weight: Option<i64>,
    members: HashSet<CourseCode>,
}

impl CategoryMembership {
    pub fn contains(&self, code: &CourseCode) -> bool {
        self.members.contains(code)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Membership of every category in one program.
#[derive(Debug, Clone)]
pub struct ProgramIndex {
    pub program: String,
    pub kind: ProgramKind,
    categories: Vec<CategoryMembership>,
}

impl ProgramIndex {
    /// Materialize every category of a program table.
    pub fn build(table: &ProgramTable, catalog: &Catalog) -> Result<Self> {
        let categories = table
            .categories
            .iter()
            .map(|category| {
                let materialized = materialize(category, catalog)?;
                Ok(CategoryMembership {
                    name: category.name.clone(),
                    kind: category.kind,
                    tag: category.tag_key(&table.id),
                    description: category.tag_text(table.display_name()),
                    weight: category.weight,
                    members: materialized.courses().into_iter().cloned().collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            program: table.id.clone(),
            kind: table.kind,
            categories,
        })
    }

    pub fn categories(&self) -> &[CategoryMembership] {
        &self.categories
    }

    /// Categories the course counts toward, in table order.
    pub fn memberships<'a>(
        &'a self,
        code: &'a CourseCode,
    ) -> impl Iterator<Item = &'a CategoryMembership> + 'a {
        self.categories.iter().filter(move |c| c.contains(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CreditRange;

    fn code(raw: &str) -> CourseCode {
        CourseCode::parse(raw).unwrap()
    }

    fn course(raw: &str, credits: f32) -> Course {
        let mut c = Course::new(code(raw));
        c.credits = CreditRange::fixed(credits);
        c
    }

    fn arth_catalog() -> Catalog {
        Catalog::new(vec![
            course("ARTH3000", 4.0),
            course("ARTH3001", 2.0),
            course("ARTH4101", 4.0),
            course("ARTH2200", 4.0),
            course("HIST3000", 4.0),
        ])
    }

    fn arth_filter() -> LevelFilter {
        let mut filter = LevelFilter::new("ARTH", 3);
        filter.excluded = vec![code("ARTH4101")];
        filter
    }

    #[test]
    fn filter_applies_level_credit_and_exclusions() {
        let category = CategorySpec::filtered("Upper level", arth_filter());
        let result = materialize(&category, &arth_catalog()).unwrap();
        assert_eq!(result, Materialized::Courses(vec![code("ARTH3000")]));
    }

    #[test]
    fn inclusions_bypass_filter() {
        let mut filter = arth_filter();
        filter.included = vec![code("HIST3000"), code("ARTH3000"), code("CLAS3500")];
        let category = CategorySpec::filtered("Upper level", filter);

        let result = materialize(&category, &arth_catalog()).unwrap();
        assert_eq!(
            result,
            Materialized::Courses(vec![code("ARTH3000"), code("HIST3000"), code("CLAS3500")])
        );
    }

    #[test]
    fn exact_level_match() {
        let mut filter = LevelFilter::new("ARTH", 4);
        filter.level_match = LevelMatch::Exactly;
        let category = CategorySpec::filtered("4000 level", filter);

        let result = materialize(&category, &arth_catalog()).unwrap();
        assert_eq!(result, Materialized::Courses(vec![code("ARTH4101")]));
    }

    #[test]
    fn number_pattern_filter() {
        let catalog = Catalog::new(vec![
            course("CS4121", 3.0),
            course("CS4120", 3.0),
            course("CS4999", 3.0),
            course("CS4991", 3.0),
        ]);
        let mut filter = LevelFilter::new("CS", 4);
        filter.number_pattern = Some("4**1".into());
        let category = CategorySpec::filtered("Practicum", filter);

        let result = materialize(&category, &catalog).unwrap();
        assert_eq!(
            result,
            Materialized::Courses(vec![code("CS4121"), code("CS4991")])
        );
    }

    #[test]
    fn note_exclusions() {
        let mut tech = course("CS5999", 3.0);
        tech.permission = Some("Enrollment limited to Cornell Tech students".into());
        let catalog = Catalog::new(vec![tech, course("CS5110", 3.0)]);

        let mut filter = LevelFilter::new("CS", 5);
        filter.exclude_notes = vec!["Cornell Tech".into()];
        let category = CategorySpec::filtered("Graduate", filter);

        let result = materialize(&category, &catalog).unwrap();
        assert_eq!(result, Materialized::Courses(vec![code("CS5110")]));
    }

    #[test]
    fn fixed_list_is_returned_verbatim() {
        let groups = vec![
            Group::from_codes(&["CS1110"]).unwrap(),
            Group::from_codes(&["CS2110", "CS2112"]).unwrap(),
        ];
        let category = CategorySpec::fixed("Core", CategoryKind::Core, groups.clone());
        let result = materialize(&category, &Catalog::default()).unwrap();
        assert_eq!(result, Materialized::Groups(groups));
        assert!(result.contains(&code("CS2112")));
        assert_eq!(result.courses().len(), 3);
    }

    #[test]
    fn missing_filter_field_is_error() {
        let mut filter = LevelFilter::new("ARTH", 3);
        filter.subject = None;
        let category = CategorySpec::filtered("Broken", filter);

        let err = materialize(&category, &arth_catalog()).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::MissingCategoryField { ref field, .. } if field == "subject"
        ));
    }

    #[test]
    fn program_index_reports_memberships() {
        let table = ProgramTable {
            id: "ARTH".into(),
            name: "History of Art".into(),
            kind: ProgramKind::Major,
            college: None,
            categories: vec![
                CategorySpec::fixed(
                    "Core",
                    CategoryKind::Core,
                    vec![Group::from_codes(&["ARTH3000"]).unwrap()],
                ),
                CategorySpec::filtered("Upper level", arth_filter()),
            ],
        };

        let index = ProgramIndex::build(&table, &arth_catalog()).unwrap();
        let arth3000 = code("ARTH3000");
        let names: Vec<_> = index.memberships(&arth3000).map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Core", "Upper level"]);
        assert_eq!(index.categories()[0].tag, "ARTH Core");
        assert_eq!(index.memberships(&code("ARTH4101")).count(), 0);
    }
}
