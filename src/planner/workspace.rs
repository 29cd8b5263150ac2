//! Loaded project data.
//!
//! A [`Workspace`] holds everything read from disk for one invocation: the
//! configuration, the catalog snapshot, the requirement tables and the
//! special-case table. It is built once and only borrowed afterwards.

use std::path::{Path, PathBuf};

use crate::catalog::{load_catalog, AvailabilityWindow, Catalog};
use crate::config::{self, PlannerConfig};
use crate::error::Result;
use crate::programs::{load_requirements, RequirementTables};
use crate::requirements::{CompletedCourses, EligibilityEvaluator, SpecialCaseTable};

use super::page::{PageAssembler, ProgramSelection};

pub struct Workspace {
    root: PathBuf,
    pub config: PlannerConfig,
    pub catalog: Catalog,
    pub tables: RequirementTables,
    pub special: SpecialCaseTable,
}

impl Workspace {
    /// Load and validate configuration, then the data files it names.
    pub fn load(root: &Path, config_override: Option<&Path>) -> Result<Self> {
        let config = config::load_config(root, config_override)?;
        config::validate(&config)?;
        Self::from_config(root, config)
    }

    /// Load the data files named by an already-validated configuration.
    pub fn from_config(root: &Path, config: PlannerConfig) -> Result<Self> {
        let catalog = load_catalog(&resolve(root, &config.catalog_path()))?;
        let tables = load_requirements(&resolve(root, &config.requirements_path()))?;
        let special = SpecialCaseTable::new(config.special_cases.iter().cloned());

        tracing::debug!(
            "Workspace at {}: {} courses, {} programs, {} special cases",
            root.display(),
            catalog.len(),
            tables.programs.len(),
            special.len()
        );

        Ok(Self {
            root: root.to_path_buf(),
            config,
            catalog,
            tables,
            special,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn evaluator(&self) -> EligibilityEvaluator<'_> {
        EligibilityEvaluator::new(&self.catalog, &self.special)
    }

    pub fn window(&self) -> AvailabilityWindow {
        AvailabilityWindow::new(self.config.settings.recent_semesters.clone())
    }

    pub fn assembler(&self) -> PageAssembler<'_> {
        PageAssembler::new(&self.catalog, &self.tables, &self.special)
            .with_window(self.window())
            .with_parallel(self.config.settings.parallel)
    }

    /// Completed courses from the student profile plus `extra`.
    pub fn completed(&self, extra: &[String]) -> Result<CompletedCourses> {
        let mut completed = match &self.config.student {
            Some(student) => CompletedCourses::parse_all(&student.completed)?,
            None => CompletedCourses::new(),
        };
        completed.extend(CompletedCourses::parse_all(extra)?.iter().cloned());
        Ok(completed)
    }

    /// Fill unset parts of a selection from the student profile.
    ///
    /// Profile majors are only used when no major is given.
    pub fn selection(
        &self,
        college: Option<String>,
        major: Option<String>,
        second_major: Option<String>,
        minors: Vec<String>,
    ) -> ProgramSelection {
        let student = self.config.student.clone().unwrap_or_default();
        let (major, second_major) = if major.is_some() {
            (major, second_major)
        } else {
            let mut majors = student.majors.into_iter();
            (majors.next(), second_major.or_else(|| majors.next()))
        };

        ProgramSelection {
            college: college.or(student.college).unwrap_or_default(),
            major,
            second_major,
            minors: if minors.is_empty() {
                student.minors
            } else {
                minors
            },
        }
    }
}

/// Resolve a configured data path against the project root.
pub(crate) fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
