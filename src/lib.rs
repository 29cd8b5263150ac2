//! coursepath - Course eligibility and degree requirement planning.
//!
//! coursepath answers two questions for a student: which courses can I
//! take now, and which courses matter most for my major, second major and
//! minors. It works from an immutable catalog snapshot and requirement
//! tables described in YAML or JSON.
//!
//! # Modules
//!
//! - [`catalog`] - Course codes, course records and the catalog snapshot
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging and validation
//! - [`error`] - Error types and result aliases
//! - [`planner`] - Requirement page assembly and the project workspace
//! - [`programs`] - Requirement tables and category resolution
//! - [`ranking`] - Importance scoring and ordering of candidate courses
//! - [`requirements`] - Requirement expressions and eligibility evaluation
//! - [`ui`] - Terminal output, tables and a mock UI for tests
//!
//! # Example
//!
//! ```
//! use coursepath::catalog::{Catalog, Course, CourseCode};
//! use coursepath::requirements::{
//!     CompletedCourses, EligibilityEvaluator, NoSpecialCases, RequirementExpr,
//! };
//!
//! let mut course = Course::new(CourseCode::parse("CS3110").unwrap());
//! course.prerequisites = RequirementExpr::from_codes(&[&["CS2110", "CS2112"]]).unwrap();
//! let catalog = Catalog::new([course]);
//!
//! let evaluator = EligibilityEvaluator::new(&catalog, &NoSpecialCases);
//! let completed = CompletedCourses::parse_all(&["CS2112"]).unwrap();
//! let code = CourseCode::parse("CS3110").unwrap();
//! assert!(evaluator.is_eligible(&code, &completed).unwrap());
//! ```
//!
//! For file-based loading, see the integration tests.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod planner;
pub mod programs;
pub mod ranking;
pub mod requirements;
pub mod ui;

pub use error::{PlannerError, Result};
