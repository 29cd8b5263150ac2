//! Catalog access.
//!
//! This module is the leaf of the engine: read-only course metadata looked
//! up by code.
//!
//! # Modules
//!
//! - [`code`] - Course code format and subject/level extraction
//! - [`course`] - Course records and credit ranges
//! - [`availability`] - Offering status classification
//! - [`snapshot`] - The immutable [`Catalog`] snapshot
//! - [`loader`] - Loading snapshots from JSON or YAML

pub mod availability;
pub mod code;
pub mod course;
pub mod loader;
pub mod snapshot;

pub use availability::{classify, AvailabilityStatus, AvailabilityWindow};
pub use code::CourseCode;
pub use course::{Course, CreditRange, SeasonAvailability};
pub use loader::load_catalog;
pub use snapshot::Catalog;
