//! Common utilities and types used throughout the instruction table crate.
//!
//! At present this is the error taxonomy: catalog authoring errors detected
//! while the table is built, and configuration errors reported to callers.

/// Error types for catalog construction and configuration.
pub mod error;

pub use error::{CatalogError, ConfigError};
