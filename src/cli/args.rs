//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// coursepath - Course eligibility and degree requirement planning.
#[derive(Debug, Parser)]
#[command(name = "coursepath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .coursepath/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether courses can be taken
    Eligible(EligibleArgs),

    /// Show catalog detail and requirement breakdown for a course
    Course(CourseArgs),

    /// Rank the courses of one program category
    Category(CategoryArgs),

    /// Build the full requirement page for the selected programs
    Page(PageArgs),

    /// Validate configuration and requirement tables
    Lint(LintArgs),
}

/// Courses already completed, in addition to the student profile.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TakenArgs {
    /// Completed courses (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_name = "CODES")]
    pub taken: Vec<String>,
}

/// Arguments for the `eligible` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EligibleArgs {
    /// Course codes to check
    #[arg(required = true)]
    pub codes: Vec<String>,

    #[command(flatten)]
    pub taken: TakenArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `course` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CourseArgs {
    /// Course code
    pub code: String,

    #[command(flatten)]
    pub taken: TakenArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `category` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CategoryArgs {
    /// Program id (e.g. CS)
    #[arg(long)]
    pub program: String,

    /// Category name
    #[arg(long)]
    pub name: String,

    /// College id (defaults to the student profile)
    #[arg(long)]
    pub college: Option<String>,

    #[command(flatten)]
    pub taken: TakenArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `page` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PageArgs {
    /// Major program id
    #[arg(long)]
    pub major: Option<String>,

    /// Second major program id
    #[arg(long)]
    pub second_major: Option<String>,

    /// Minor program ids (repeatable or comma-separated)
    #[arg(long = "minor", value_delimiter = ',')]
    pub minors: Vec<String>,

    /// College id
    #[arg(long)]
    pub college: Option<String>,

    #[command(flatten)]
    pub taken: TakenArgs,

    /// Only show this many courses per ranked category
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintArgs {
    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,
}
