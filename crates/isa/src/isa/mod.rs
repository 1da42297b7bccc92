//! Instruction Set Architecture (ISA) Metadata.
//!
//! Contains the instruction descriptors and the table that indexes them,
//! organized bottom-up.
//!
//! # Structure
//!
//! * `instruction`: Instruction-word helpers and operand field masks.
//! * `operand`: Operand slot type, mode, and descriptor.
//! * `category`: Semantic instruction categories.
//! * `id`: The instruction identifier enumeration.
//! * `entry`: Immutable instruction descriptor and its builder.
//! * `catalog`: The compiled-in list of instruction variants, by extension.
//! * `table`: The registry queried by identifier and by mnemonic.

/// Semantic instruction categories.
pub mod category;

/// Compiled-in instruction catalog, one module per extension group.
pub mod catalog;

/// Immutable instruction descriptor and its builder.
pub mod entry;

/// Instruction identifier enumeration.
pub mod id;

/// Instruction-word size helpers and operand field masks.
pub mod instruction;

/// Operand slot descriptors.
pub mod operand;

/// Instruction table indexed by identifier and mnemonic.
pub mod table;
