//! # ISA Unit Tests
//!
//! Covers the instruction table, the compiled-in catalog, and the entry
//! accessors.

/// Encodings shared by RV32 and RV64 compressed forms.
pub mod aliasing;

/// Invariants that hold for every registered entry.
pub mod catalog_invariants;


/// Table lookup, extension filtering, and JSON export.
pub mod table;
