//! Operand slot descriptors.
//!
//! An instruction has up to [`MAX_OPERANDS`] positional operands:
//! - For `inst rd, rs1, rs2` and `inst rd, rs1, imm`, slot 0 is the destination.
//! - For loads (`load rd, offset(rs1)`) the slots are rd, rs1, offset.
//! - For stores (`store rs2, offset(rs1)`) the slots are rs2, rs1, offset.

use serde::Serialize;

/// Maximum number of operand slots per instruction.
pub const MAX_OPERANDS: usize = 4;

/// Kind of value an operand slot specifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum OperandType {
    /// Integer register.
    IntReg,
    /// Floating-point register.
    FpReg,
    /// Control and status register.
    CsReg,
    /// Vector register.
    VecReg,
    /// Immediate value.
    Imm,
    /// Slot unused.
    #[default]
    None,
}

/// Access direction of an operand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum OperandMode {
    /// Operand is read.
    Read,
    /// Operand is written.
    Write,
    /// Operand is read and then written.
    ReadWrite,
    /// Slot unused.
    #[default]
    None,
}

impl OperandMode {
    /// Returns true for `Read` and `ReadWrite`.
    #[inline]
    pub const fn is_read(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    /// Returns true for `Write` and `ReadWrite`.
    #[inline]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }
}

/// One operand slot: what it is, how it is accessed, and where it is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct OperandDescriptor {
    /// Operand kind.
    pub kind: OperandType,
    /// Access direction.
    pub mode: OperandMode,
    /// Instruction bits holding the operand specifier.
    pub mask: u32,
}

impl OperandDescriptor {
    /// Creates a descriptor.
    pub const fn new(kind: OperandType, mode: OperandMode, mask: u32) -> Self {
        Self { kind, mode, mask }
    }
}
