//! Degree program requirement tables.
//!
//! # Modules
//!
//! - [`schema`] - Colleges, programs, categories and filters
//! - [`loader`] - Loading tables from JSON or YAML
//! - [`validator`] - Table validation rules
//! - [`resolver`] - Turning categories into concrete courses

pub mod loader;
pub mod resolver;
pub mod schema;
pub mod validator;

pub use loader::load_requirements;
pub use resolver::{
    matches_filter, materialize, CategoryMembership, Materialized, ProgramIndex,
};
pub use schema::{
    CategoryKind, CategorySource, CategorySpec, CollegeRules, DistributionRule, LevelFilter,
    LevelMatch, ProgramKind, ProgramTable, RequirementTables, MAX_WEIGHT,
};
pub use validator::{validate, validate_tables, ValidationError};
