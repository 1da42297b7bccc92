//! Catalog and configuration error definitions.
//!
//! This module defines the two error families of the crate:
//! 1. **Catalog errors:** Authoring mistakes in the compiled-in instruction list.
//!    These are detected once, while the table is built, and are fatal.
//! 2. **Configuration errors:** Problems with user-supplied ISA configuration,
//!    always reported through `Result`.
//!
//! Table queries never fail; an unknown instruction resolves to the illegal
//! instruction entry instead.

use thiserror::Error;

use crate::isa::id::InstId;

/// Inconsistency in the compiled-in instruction catalog.
///
/// Per-entry variants name the offending mnemonic so the bad catalog line can
/// be found directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The fixed code has a bit set outside of the code mask.
    #[error("{name}: code {code:#010x} has bits outside code mask {mask:#010x}")]
    CodeOutsideMask {
        /// Instruction mnemonic.
        name: &'static str,
        /// Fixed code bits.
        code: u32,
        /// Code mask.
        mask: u32,
    },

    /// An operand specifier overlaps the fixed opcode bits.
    #[error("{name}: operand {index} mask {operand_mask:#010x} overlaps code mask {code_mask:#010x}")]
    OperandOverlapsCode {
        /// Instruction mnemonic.
        name: &'static str,
        /// Operand slot index.
        index: usize,
        /// Mask of the operand.
        operand_mask: u32,
        /// Code mask of the instruction.
        code_mask: u32,
    },

    /// Two operand specifiers claim the same instruction bits.
    #[error("{name}: operands {first} and {second} share bits {overlap:#010x}")]
    OperandsOverlap {
        /// Instruction mnemonic.
        name: &'static str,
        /// Lower operand slot index.
        first: usize,
        /// Higher operand slot index.
        second: usize,
        /// Shared bits.
        overlap: u32,
    },

    /// A declared operand slot has type `None` or mode `None`.
    #[error("{name}: operand {index} is missing its type or mode")]
    EmptyOperand {
        /// Instruction mnemonic.
        name: &'static str,
        /// Operand slot index.
        index: usize,
    },

    /// More operands were declared than there are slots.
    #[error("{name}: {count} operands declared, at most 4 are supported")]
    TooManyOperands {
        /// Instruction mnemonic.
        name: &'static str,
        /// Number of operands declared.
        count: usize,
    },

    /// A load size is set on a non-load, or a load has no size.
    #[error("{name}: load size {size} does not agree with its category")]
    LoadSizeMismatch {
        /// Instruction mnemonic.
        name: &'static str,
        /// Declared load size in bytes.
        size: u32,
    },

    /// A store size is set on a non-store, or a store has no size.
    #[error("{name}: store size {size} does not agree with its category")]
    StoreSizeMismatch {
        /// Instruction mnemonic.
        name: &'static str,
        /// Declared store size in bytes.
        size: u32,
    },

    /// Two entries claim the same mnemonic.
    #[error("mnemonic {name} registered for both {first:?} and {second:?}")]
    DuplicateName {
        /// Mnemonic registered twice.
        name: &'static str,
        /// Identifier registered first.
        first: InstId,
        /// Identifier registered second.
        second: InstId,
    },

    /// Two entries claim the same identifier.
    #[error("identifier {id:?} registered for both {first} and {second}")]
    DuplicateId {
        /// Identifier registered twice.
        id: InstId,
        /// Mnemonic registered first.
        first: &'static str,
        /// Mnemonic registered second.
        second: &'static str,
    },

    /// `InstId::Illegal` is registered under the wrong mnemonic.
    #[error("illegal instruction sentinel must be registered under InstId::Illegal, found {found}")]
    BadSentinel {
        /// Mnemonic found in the sentinel position.
        found: &'static str,
    },

    /// The catalog has no entry for `InstId::Illegal`.
    #[error("catalog has no illegal instruction sentinel")]
    MissingSentinel,
}

/// Error in user-supplied ISA configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON or has the wrong shape.
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The ISA string does not begin with `rv32` or `rv64`.
    #[error("ISA string {0:?} must start with rv32 or rv64")]
    BadPrefix(String),

    /// The ISA string names no base integer instruction set.
    #[error("ISA string {0:?} has no base integer extension (i or g)")]
    MissingBase(String),

    /// The ISA string names an extension this table does not know.
    #[error("unknown extension {0:?}")]
    UnknownExtension(String),

    /// The ISA string has an empty `_`-separated segment.
    #[error("ISA string {0:?} has an empty extension segment")]
    EmptySegment(String),
}
