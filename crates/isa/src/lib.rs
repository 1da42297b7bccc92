//! RISC-V instruction metadata library.
//!
//! This crate holds the compiled-in instruction catalog consulted by the rvsim
//! decode and execute stages. It provides:
//! 1. **Entries:** Immutable per-instruction descriptors (encoding, operands, category, flags).
//! 2. **Table:** A registry indexed by identifier and by mnemonic with a sentinel fallback.
//! 3. **Catalog:** The fixed RV64I/M/A/F/D/C/V and bit-manipulation instruction list.
//! 4. **Configuration:** ISA-string driven extension selection.

/// Common types shared across the crate (error types).
pub mod common;
/// ISA string configuration and extension sets.
pub mod config;
/// Instruction descriptors, identifiers, and the instruction table.
pub mod isa;

/// Root configuration type; use `IsaConfig::default()` or deserialize from JSON.
pub use crate::config::IsaConfig;
/// Descriptor of a single instruction variant.
pub use crate::isa::entry::InstructionEntry;
/// Instruction identifier enumeration.
pub use crate::isa::id::InstId;
/// Registry of all instruction descriptors.
pub use crate::isa::table::InstructionTable;
