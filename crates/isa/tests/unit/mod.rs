//! # Unit Tests
//!
//! Tests grouped by the crate module they exercise.

/// Unit tests for ISA string parsing and JSON configuration.
pub mod config;

/// Unit tests for instruction entries, the catalog, and the table.
///
/// This module aggregates tests for:
/// - Lookup by identifier and by mnemonic, with sentinel fallback.
/// - Structural invariants of every catalog entry.
/// - Derived flags of representative instructions.
/// - Encodings shared by more than one identifier.
pub mod isa;
