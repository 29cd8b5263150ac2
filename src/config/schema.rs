//! Configuration schema definitions for coursepath.
//!
//! This module contains the struct definitions that map to
//! `.coursepath/config.yml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::requirements::SpecialCaseRule;

/// Root configuration structure for `.coursepath/config.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Global settings
    pub settings: Settings,

    /// Catalog snapshot (JSON or YAML), relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Requirement tables (JSON or YAML), relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<PathBuf>,

    /// Courses whose eligibility follows a replacement rule
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub special_cases: Vec<SpecialCaseRule>,

    /// Default student profile for commands that take none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentProfile>,
}

impl PlannerConfig {
    /// Default catalog location when none is configured.
    pub const DEFAULT_CATALOG: &'static str = "catalog.json";

    /// Default requirement tables location when none is configured.
    pub const DEFAULT_REQUIREMENTS: &'static str = "requirements.yml";

    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_CATALOG))
    }

    pub fn requirements_path(&self) -> PathBuf {
        self.requirements
            .clone()
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_REQUIREMENTS))
    }
}

/// Global settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    #[serde(default = "default_output")]
    pub default_output: OutputMode,

    /// Build requirement page categories in parallel
    #[serde(default, skip_serializing_if = "is_false")]
    pub parallel: bool,

    /// The upcoming semester, e.g. `SP25`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_semester: Option<String>,

    /// Semesters that count as a recent offering
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_semesters: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_output: default_output(),
            parallel: false,
            next_semester: None,
            recent_semesters: Vec::new(),
        }
    }
}

fn default_output() -> OutputMode {
    OutputMode::Normal
}

fn is_false(v: &bool) -> bool {
    !v
}

/// Output verbosity mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

/// A student's declared programs and course history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    /// College id, e.g. `AS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college: Option<String>,

    /// At most two majors; the first is the displayed major
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub majors: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub minors: Vec<String>,

    /// Completed course codes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub completed: Vec<String>,
}
