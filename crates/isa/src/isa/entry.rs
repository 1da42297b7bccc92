//! Instruction descriptors.
//!
//! An [`InstructionEntry`] describes one instruction variant: its mnemonic,
//! identifier, fixed encoding bits, up to four operand slots, semantic
//! category, and derived flags (load/store size, signedness, branch kind).
//!
//! Entries are assembled with [`InstEntryBuilder`], which checks the encoding
//! invariants once and then yields a descriptor that is never mutated again:
//! - `code & code_mask == code`.
//! - Every operand mask is disjoint from `code_mask` and from every other
//!   operand mask.
//! - Operand slots are contiguous from 0 and hold no `None` types.
//! - `load_size > 0` exactly for loads, `store_size > 0` exactly for stores.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::common::error::CatalogError;
use crate::config::Extension;
use crate::isa::category::InstructionCategory;
use crate::isa::id::InstId;
use crate::isa::instruction::instruction_size;
use crate::isa::operand::{MAX_OPERANDS, OperandDescriptor, OperandMode, OperandType};

/// Immutable descriptor of one instruction variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionEntry {
    name: &'static str,
    id: InstId,
    extension: Extension,
    /// Encoding with every operand specifier bit cleared.
    code: u32,
    /// One in every fixed (non-operand) bit position.
    code_mask: u32,
    category: InstructionCategory,
    operands: [OperandDescriptor; MAX_OPERANDS],
    operand_count: usize,
    load_size: u32,
    store_size: u32,
    is_unsigned: bool,
    is_conditional_branch: bool,
    is_branch_to_register: bool,
    is_bit_manipulation: bool,
}

impl InstructionEntry {
    /// Returns the mnemonic.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the identifier.
    ///
    /// Two entries with the same code may have different identifiers: the
    /// same bits select a different instruction depending on the feature set
    /// and mode of the processor.
    #[inline]
    pub const fn id(&self) -> InstId {
        self.id
    }

    /// Returns the extension defining this instruction.
    #[inline]
    pub const fn extension(&self) -> Extension {
        self.extension
    }

    /// Returns the instruction bits with all operand specifiers set to zero.
    #[inline]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Returns the mask of fixed bits: 1 for each non-operand-specifier bit.
    #[inline]
    pub const fn code_mask(&self) -> u32 {
        self.code_mask
    }

    /// Returns true if `inst` has this entry's fixed bits.
    #[inline]
    pub const fn matches(&self, inst: u32) -> bool {
        inst & self.code_mask == self.code
    }

    /// Returns the encoding size in bytes (2 or 4).
    ///
    /// A code mask with bits above bit 15 always means a 4-byte encoding,
    /// even when the fixed low bits would read as compressed.
    #[inline]
    pub const fn size(&self) -> u32 {
        if self.code_mask > 0xFFFF {
            4
        } else {
            instruction_size(self.code)
        }
    }

    /// Returns true if this is a 16-bit compressed encoding.
    #[inline]
    pub const fn is_compressed(&self) -> bool {
        self.size() == 2
    }

    /// Returns the number of populated operand slots.
    #[inline]
    pub const fn operand_count(&self) -> usize {
        self.operand_count
    }

    /// Returns the populated operand slots, in order.
    #[inline]
    pub fn operands(&self) -> &[OperandDescriptor] {
        &self.operands[..self.operand_count]
    }

    /// Returns operand slot `i`, or `None` if no such operand.
    #[inline]
    pub fn operand(&self, i: usize) -> Option<&OperandDescriptor> {
        self.operands().get(i)
    }

    /// Returns the type of operand `i`, or `OperandType::None` if no such operand.
    #[inline]
    pub fn operand_type(&self, i: usize) -> OperandType {
        self.operand(i).map_or(OperandType::None, |op| op.kind)
    }

    /// Returns the mode of operand `i`, or `OperandMode::None` if no such operand.
    #[inline]
    pub fn operand_mode(&self, i: usize) -> OperandMode {
        self.operand(i).map_or(OperandMode::None, |op| op.mode)
    }

    /// Returns the specifier bits of operand `i`, or 0 if no such operand.
    #[inline]
    pub fn operand_mask(&self, i: usize) -> u32 {
        self.operand(i).map_or(0, |op| op.mask)
    }

    /// Returns true if operand `i` is read.
    #[inline]
    pub fn is_operand_read(&self, i: usize) -> bool {
        self.operand_mode(i).is_read()
    }

    /// Returns true if operand `i` is written.
    #[inline]
    pub fn is_operand_write(&self, i: usize) -> bool {
        self.operand_mode(i).is_write()
    }

    /// Returns true if operand `i` is an integer register used only as a source.
    #[inline]
    pub fn is_int_reg_source(&self, i: usize) -> bool {
        self.operand_type(i) == OperandType::IntReg && self.operand_mode(i) == OperandMode::Read
    }

    /// Returns true if operand `i` is a floating-point register used only as a source.
    #[inline]
    pub fn is_fp_reg_source(&self, i: usize) -> bool {
        self.operand_type(i) == OperandType::FpReg && self.operand_mode(i) == OperandMode::Read
    }

    /// Returns the semantic category.
    #[inline]
    pub const fn category(&self) -> InstructionCategory {
        self.category
    }

    /// Returns true for loads (lb, lh, flw, c.lw, ...).
    #[inline]
    pub const fn is_load(&self) -> bool {
        matches!(self.category, InstructionCategory::Load)
    }

    /// Returns true for stores (sb, sh, fsw, c.sw, ...).
    #[inline]
    pub const fn is_store(&self) -> bool {
        matches!(self.category, InstructionCategory::Store)
    }

    /// Returns true for branches and jumps (beq, jal, c.jr, ...).
    #[inline]
    pub const fn is_branch(&self) -> bool {
        matches!(self.category, InstructionCategory::Branch)
    }

    /// Returns true for multiplies (mul, mulh, ...).
    #[inline]
    pub const fn is_multiply(&self) -> bool {
        matches!(self.category, InstructionCategory::Multiply)
    }

    /// Returns true for divides and remainders (div, rem, ...).
    #[inline]
    pub const fn is_divide(&self) -> bool {
        matches!(self.category, InstructionCategory::Divide)
    }

    /// Returns true for CSR instructions.
    #[inline]
    pub const fn is_csr(&self) -> bool {
        matches!(self.category, InstructionCategory::ControlStatusRegister)
    }

    /// Returns true for atomic instructions.
    #[inline]
    pub const fn is_atomic(&self) -> bool {
        matches!(self.category, InstructionCategory::Atomic)
    }

    /// Returns true for vector instructions.
    #[inline]
    pub const fn is_vector(&self) -> bool {
        matches!(self.category, InstructionCategory::Vector)
    }

    /// Returns true if the source operands have unsigned integer values.
    #[inline]
    pub const fn is_unsigned(&self) -> bool {
        self.is_unsigned
    }

    /// Returns true for branches whose target address is held in a register.
    #[inline]
    pub const fn is_branch_to_register(&self) -> bool {
        self.is_branch_to_register
    }

    /// Returns true for conditional branches.
    #[inline]
    pub const fn is_conditional_branch(&self) -> bool {
        self.is_conditional_branch
    }

    /// Returns true for bit-manipulation instructions.
    #[inline]
    pub const fn is_bit_manipulation(&self) -> bool {
        self.is_bit_manipulation
    }

    /// Returns the data size in bytes of a load, or 0 for a non-load.
    #[inline]
    pub const fn load_size(&self) -> u32 {
        self.load_size
    }

    /// Returns the data size in bytes of a store, or 0 for a non-store.
    #[inline]
    pub const fn store_size(&self) -> u32 {
        self.store_size
    }
}

impl Serialize for InstructionEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("InstructionEntry", 13)?;
        state.serialize_field("name", self.name)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("extension", &self.extension)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("code_mask", &self.code_mask)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("operands", self.operands())?;
        state.serialize_field("load_size", &self.load_size)?;
        state.serialize_field("store_size", &self.store_size)?;
        state.serialize_field("is_unsigned", &self.is_unsigned)?;
        state.serialize_field("is_conditional_branch", &self.is_conditional_branch)?;
        state.serialize_field("is_branch_to_register", &self.is_branch_to_register)?;
        state.serialize_field("is_bit_manipulation", &self.is_bit_manipulation)?;
        state.end()
    }
}

/// Assembles an [`InstructionEntry`] and checks it.
///
/// ```
/// use rvsim_isa::config::Extension;
/// use rvsim_isa::isa::category::InstructionCategory;
/// use rvsim_isa::isa::entry::InstEntryBuilder;
/// use rvsim_isa::isa::id::InstId;
/// use rvsim_isa::isa::instruction::fields;
/// use rvsim_isa::isa::operand::{OperandMode, OperandType};
///
/// let lw = InstEntryBuilder::new(
///     "lw",
///     InstId::Lw,
///     0x0000_2003,
///     0x0000_707F,
///     InstructionCategory::Load,
/// )
/// .operand(OperandType::IntReg, OperandMode::Write, fields::RD)
/// .operand(OperandType::IntReg, OperandMode::Read, fields::RS1)
/// .operand(OperandType::Imm, OperandMode::Read, fields::I_IMM)
/// .load_size(4)
/// .build()?;
/// assert_eq!(lw.extension(), Extension::I);
/// assert_eq!(lw.operand_count(), 3);
/// # Ok::<(), rvsim_isa::common::CatalogError>(())
/// ```
#[derive(Debug, Clone)]
pub struct InstEntryBuilder {
    entry: InstructionEntry,
    declared: usize,
}

impl InstEntryBuilder {
    /// Starts an entry in the base integer extension with no operands.
    pub const fn new(
        name: &'static str,
        id: InstId,
        code: u32,
        code_mask: u32,
        category: InstructionCategory,
    ) -> Self {
        Self {
            entry: InstructionEntry {
                name,
                id,
                extension: Extension::I,
                code,
                code_mask,
                category,
                operands: [OperandDescriptor::new(OperandType::None, OperandMode::None, 0);
                    MAX_OPERANDS],
                operand_count: 0,
                load_size: 0,
                store_size: 0,
                is_unsigned: false,
                is_conditional_branch: false,
                is_branch_to_register: false,
                is_bit_manipulation: false,
            },
            declared: 0,
        }
    }

    /// Sets the defining extension.
    #[must_use]
    pub const fn extension(mut self, extension: Extension) -> Self {
        self.entry.extension = extension;
        self
    }

    /// Appends the next operand slot.
    #[must_use]
    pub const fn operand(mut self, kind: OperandType, mode: OperandMode, mask: u32) -> Self {
        if self.declared < MAX_OPERANDS {
            self.entry.operands[self.declared] = OperandDescriptor::new(kind, mode, mask);
        }
        self.declared += 1;
        self
    }

    /// Sets the load size in bytes.
    #[must_use]
    pub const fn load_size(mut self, size: u32) -> Self {
        self.entry.load_size = size;
        self
    }

    /// Sets the store size in bytes.
    #[must_use]
    pub const fn store_size(mut self, size: u32) -> Self {
        self.entry.store_size = size;
        self
    }

    /// Marks the source operands as unsigned.
    #[must_use]
    pub const fn unsigned(mut self) -> Self {
        self.entry.is_unsigned = true;
        self
    }

    /// Marks a conditional branch.
    #[must_use]
    pub const fn conditional_branch(mut self) -> Self {
        self.entry.is_conditional_branch = true;
        self
    }

    /// Marks a branch whose target is in a register.
    #[must_use]
    pub const fn branch_to_register(mut self) -> Self {
        self.entry.is_branch_to_register = true;
        self
    }

    /// Checks the encoding invariants and returns the finished entry.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found: fixed bits outside the code
    /// mask, too many or empty operands, operand masks overlapping the code
    /// mask or each other, or a load/store size that disagrees with the
    /// category.
    pub fn build(self) -> Result<InstructionEntry, CatalogError> {
        let Self { mut entry, declared } = self;
        let name = entry.name;

        if entry.code & !entry.code_mask != 0 {
            return Err(CatalogError::CodeOutsideMask {
                name,
                code: entry.code,
                mask: entry.code_mask,
            });
        }

        if declared > MAX_OPERANDS {
            return Err(CatalogError::TooManyOperands {
                name,
                count: declared,
            });
        }
        entry.operand_count = declared;

        for (index, op) in entry.operands().iter().enumerate() {
            if op.kind == OperandType::None || op.mode == OperandMode::None {
                return Err(CatalogError::EmptyOperand { name, index });
            }
            if op.mask & entry.code_mask != 0 {
                return Err(CatalogError::OperandOverlapsCode {
                    name,
                    index,
                    operand_mask: op.mask,
                    code_mask: entry.code_mask,
                });
            }
        }

        let ops = entry.operands();
        for first in 0..ops.len() {
            for second in first + 1..ops.len() {
                let overlap = ops[first].mask & ops[second].mask;
                if overlap != 0 {
                    return Err(CatalogError::OperandsOverlap {
                        name,
                        first,
                        second,
                        overlap,
                    });
                }
            }
        }

        if entry.is_load() != (entry.load_size > 0) {
            return Err(CatalogError::LoadSizeMismatch {
                name,
                size: entry.load_size,
            });
        }
        if entry.is_store() != (entry.store_size > 0) {
            return Err(CatalogError::StoreSizeMismatch {
                name,
                size: entry.store_size,
            });
        }

        entry.is_bit_manipulation = entry.category.is_bit_manipulation();
        Ok(entry)
    }
}
