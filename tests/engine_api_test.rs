//! Integration tests for the eligibility, category and ranking API.

use coursepath::catalog::{Catalog, Course, CourseCode, CreditRange};
use coursepath::planner::{PageAssembler, ProgramSelection};
use coursepath::programs::{
    materialize, CategorySpec, CollegeRules, LevelFilter, Materialized, ProgramIndex,
    RequirementTables,
};
use coursepath::ranking::{ImportanceRanker, ScoringContext, ELIGIBLE_BONUS, TAKEN_PENALTY};
use coursepath::requirements::{
    unmet_groups, CompletedCourses, Eligibility, EligibilityEvaluator, Group, NoSpecialCases,
    RequirementExpr, SpecialCaseProvider,
};
use coursepath::{PlannerError, Result};

fn code(raw: &str) -> CourseCode {
    CourseCode::parse(raw).unwrap()
}

fn course(raw: &str) -> Course {
    Course::new(code(raw))
}

fn with_prereqs(raw: &str, groups: &[&[&str]]) -> Course {
    let mut c = course(raw);
    c.prerequisites = RequirementExpr::from_codes(groups).unwrap();
    c
}

fn completed(codes: &[&str]) -> CompletedCourses {
    CompletedCourses::parse_all(codes).unwrap()
}

#[test]
fn any_course_in_a_group_satisfies_it() {
    let catalog = Catalog::new([with_prereqs("MATH2220", &[&["MATH1110", "MATH1910"]])]);
    let evaluator = EligibilityEvaluator::new(&catalog, &NoSpecialCases);

    let verdict = evaluator
        .evaluate(&code("MATH2220"), &completed(&["MATH1910"]))
        .unwrap();
    assert_eq!(verdict, Eligibility::eligible());
}

#[test]
fn unmet_groups_are_reported_in_order() {
    let catalog = Catalog::new([with_prereqs("CS3110", &[&["CS2110", "CS2112"], &["CS2800"]])]);
    let evaluator = EligibilityEvaluator::new(&catalog, &NoSpecialCases);

    let verdict = evaluator
        .evaluate(&code("CS3110"), &completed(&["CS2110"]))
        .unwrap();
    assert!(!verdict.eligible);
    assert_eq!(verdict.unmet, vec![Group::from_codes(&["CS2800"]).unwrap()]);
}

#[test]
fn unrestricted_corequisite_is_always_fulfilled() {
    let mut lab = course("PHYS1116");
    lab.corequisites = RequirementExpr::from_codes(&[&["CS2110"]]).unwrap();
    let catalog = Catalog::new([lab, course("CS2110")]);
    let evaluator = EligibilityEvaluator::new(&catalog, &NoSpecialCases);

    for taken in [&[][..], &["MATH1110"][..]] {
        let verdict = evaluator.evaluate(&code("PHYS1116"), &completed(taken)).unwrap();
        assert!(verdict.eligible);
    }
}

#[test]
fn filter_applies_credit_floor_and_exclusions() {
    let mut a = course("ARTH3000");
    a.credits = CreditRange::fixed(4.0);
    let mut b = course("ARTH3001");
    b.credits = CreditRange::fixed(2.0);
    let mut c = course("ARTH4101");
    c.credits = CreditRange::fixed(4.0);
    let catalog = Catalog::new([a, b, c]);

    let mut filter = LevelFilter::new("ARTH", 3);
    filter.min_credit = 3.0;
    filter.excluded = vec![code("ARTH4101")];
    let category = CategorySpec::filtered("3000+ Level", filter);

    let result = materialize(&category, &catalog).unwrap();
    assert_eq!(result, Materialized::Courses(vec![code("ARTH3000")]));
}

#[test]
fn taken_course_keeps_distribution_tag_but_sorts_last() {
    let mut taken = course("ARTH2000");
    taken.distributions.insert("ALC-AS".to_string());
    let fresh = course("ECON1110");
    let catalog = Catalog::new([taken, fresh]);

    let college: CollegeRules = serde_yaml::from_str(
        r#"
id: AS
name: Arts and Sciences
distributions:
  - tag: ALC-AS
    name: Arts, Literature, and Culture
"#,
    )
    .unwrap();
    let context = ScoringContext {
        college: Some(&college),
        ..Default::default()
    };
    let ranker = ImportanceRanker::new(EligibilityEvaluator::new(&catalog, &NoSpecialCases), context);

    let ranked = ranker
        .rank(&[code("ARTH2000"), code("ECON1110")], &completed(&["ARTH2000"]))
        .unwrap();

    assert_eq!(ranked[0].code, code("ECON1110"));
    assert_eq!(ranked[1].code, code("ARTH2000"));
    assert!(ranked[1].taken);
    assert!(ranked[1].tags.contains_key("ALC-AS"));
    assert!(ranked[1].score < ranked[0].score);
}

#[test]
fn unmet_groups_is_empty_exactly_when_every_group_intersects() {
    let expressions: Vec<RequirementExpr> = vec![
        RequirementExpr::default(),
        RequirementExpr::from_codes(&[&["CS1110"]]).unwrap(),
        RequirementExpr::from_codes(&[&["CS1110", "CS1112"], &["MATH1910"]]).unwrap(),
        RequirementExpr::from_codes(&[&["CS2800"], &["CS2110"], &["CS3110"]]).unwrap(),
    ];
    let histories = [
        completed(&[]),
        completed(&["CS1112"]),
        completed(&["CS1112", "MATH1910"]),
        completed(&["CS2110", "CS2800", "CS3110"]),
    ];

    for expr in &expressions {
        for history in &histories {
            let all_intersect = expr
                .groups()
                .iter()
                .all(|g| g.courses().iter().any(|c| history.contains(c)));
            assert_eq!(unmet_groups(expr, history).is_empty(), all_intersect);
        }
    }
}

#[test]
fn empty_expression_is_vacuously_satisfied() {
    let expr = RequirementExpr::default();
    assert!(unmet_groups(&expr, &completed(&[])).is_empty());
    assert!(unmet_groups(&expr, &completed(&["CS1110"])).is_empty());
}

#[test]
fn evaluation_is_idempotent() {
    let catalog = Catalog::new([with_prereqs("CS3110", &[&["CS2110"], &["CS2800"]])]);
    let evaluator = EligibilityEvaluator::new(&catalog, &NoSpecialCases);
    let history = completed(&["CS2800"]);

    let first = evaluator.evaluate(&code("CS3110"), &history).unwrap();
    let second = evaluator.evaluate(&code("CS3110"), &history).unwrap();
    assert_eq!(first, second);
    assert_eq!(history.len(), 1);
}

#[test]
fn unknown_course_is_eligible() {
    let catalog = Catalog::new(Vec::new());
    let evaluator = EligibilityEvaluator::new(&catalog, &NoSpecialCases);
    assert!(evaluator
        .is_eligible(&code("ASTRO9999"), &completed(&[]))
        .unwrap());
}

#[test]
fn graduate_course_borrows_cross_listed_prerequisites() {
    let mut grad = course("CS5820");
    grad.combined = vec![code("CS4820")];
    let catalog = Catalog::new([grad, with_prereqs("CS4820", &[&["CS3110"]])]);
    let evaluator = EligibilityEvaluator::new(&catalog, &NoSpecialCases);

    assert!(!evaluator.is_eligible(&code("CS5820"), &completed(&[])).unwrap());
    assert!(evaluator
        .is_eligible(&code("CS5820"), &completed(&["CS3110"]))
        .unwrap());
}

#[test]
fn equal_scores_keep_input_order() {
    let catalog = Catalog::new([course("CS4410"), course("CS4820"), course("CS4780")]);
    let ranker = ImportanceRanker::new(
        EligibilityEvaluator::new(&catalog, &NoSpecialCases),
        ScoringContext::default(),
    );

    let input = [code("CS4820"), code("CS4410"), code("CS4780")];
    let ranked = ranker.rank(&input, &completed(&[])).unwrap();
    let order: Vec<_> = ranked.iter().map(|r| r.code.clone()).collect();
    assert_eq!(order, input);
}

#[test]
fn taken_courses_score_below_every_untaken_eligible_course() {
    let mut cross = course("ORIE3500");
    cross.combined = vec![code("ECON3130")];
    let catalog = Catalog::new([cross, course("ECON3130"), course("CS4820")]);

    let tables: RequirementTables = serde_yaml::from_str(
        r#"
programs:
  - id: ORIE
    kind: major
    categories:
      - { name: Core, kind: core, courses: [ORIE3500] }
"#,
    )
    .unwrap();
    let index = ProgramIndex::build(&tables.programs[0], &catalog).unwrap();
    let context = ScoringContext {
        major: Some(&index),
        ..Default::default()
    };
    let ranker = ImportanceRanker::new(EligibilityEvaluator::new(&catalog, &NoSpecialCases), context);

    let ranked = ranker
        .rank(&[code("ORIE3500"), code("CS4820")], &completed(&["ECON3130"]))
        .unwrap();
    let taken = ranked.iter().find(|r| r.code == code("ORIE3500")).unwrap();
    let fresh = ranked.iter().find(|r| r.code == code("CS4820")).unwrap();

    assert!(taken.taken);
    assert!(taken.score <= TAKEN_PENALTY + ELIGIBLE_BONUS + 10);
    assert!(taken.score < fresh.score);
    assert_eq!(ranked[0].code, code("CS4820"));
}

struct FailingProvider;

impl SpecialCaseProvider for FailingProvider {
    fn handles(&self, code: &CourseCode) -> bool {
        code.subject() == "LAW"
    }

    fn evaluate(&self, _completed: &CompletedCourses, code: &CourseCode) -> Result<Eligibility> {
        Err(PlannerError::SpecialCaseFailed {
            course: code.to_string(),
            message: "registrar unavailable".to_string(),
        })
    }
}

#[test]
fn special_case_failures_propagate_unchanged() {
    let catalog = Catalog::new([course("LAW6010"), course("CS1110")]);
    let evaluator = EligibilityEvaluator::new(&catalog, &FailingProvider);

    let err = evaluator.evaluate(&code("LAW6010"), &completed(&[])).unwrap_err();
    assert!(matches!(err, PlannerError::SpecialCaseFailed { ref course, .. } if course == "LAW6010"));
    assert!(evaluator.is_eligible(&code("CS1110"), &completed(&[])).unwrap());
}

#[test]
fn parallel_and_sequential_pages_match() {
    let mut courses = Vec::new();
    for raw in ["CS2110", "CS2800", "CS4410", "CS4820", "MATH4710", "MATH4130"] {
        let mut c = course(raw);
        c.credits = CreditRange::fixed(4.0);
        courses.push(c);
    }
    let catalog = Catalog::new(courses);
    let tables: RequirementTables = serde_yaml::from_str(
        r#"
programs:
  - id: CS
    kind: major
    categories:
      - { name: Core, kind: core, required: 2, courses: [CS2110, CS2800] }
      - { name: Electives, filter: { subject: CS, min_level: 4 } }
  - id: MATH
    kind: minor
    categories:
      - { name: Upper, filter: { subject: MATH, min_level: 4 } }
"#,
    )
    .unwrap();
    let selection = ProgramSelection {
        college: "ENG".to_string(),
        major: Some("CS".to_string()),
        second_major: None,
        minors: vec!["MATH".to_string()],
    };
    let history = completed(&["CS2110", "MATH4130"]);

    let assembler = PageAssembler::new(&catalog, &tables, &NoSpecialCases);
    let sequential = assembler.assemble(&selection, &history).unwrap();
    let parallel = PageAssembler::new(&catalog, &tables, &NoSpecialCases)
        .with_parallel(true)
        .assemble(&selection, &history)
        .unwrap();

    assert_eq!(
        serde_json::to_value(&sequential).unwrap(),
        serde_json::to_value(&parallel).unwrap()
    );
    let names: Vec<_> = sequential
        .sections
        .iter()
        .map(|s| format!("{}/{}", s.program, s.category))
        .collect();
    assert_eq!(names, ["CS/Core", "CS/Electives", "MATH/Upper"]);
}
