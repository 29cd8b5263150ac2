//! Configuration loading, parsing, and validation for coursepath.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use coursepath::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".coursepath");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "catalog: data/catalog.json").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.catalog_path(), std::path::PathBuf::from("data/catalog.json"));
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.coursepath/config.yml`)
//! 2. Local overrides (`.coursepath/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{OutputMode, PlannerConfig, Settings, StudentProfile};

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR,
};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, ValidationError, MAX_MAJORS};
