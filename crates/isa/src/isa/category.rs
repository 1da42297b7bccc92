//! Semantic instruction categories.

use serde::Serialize;

/// Semantic class of an instruction. Every entry has exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum InstructionCategory {
    /// Memory load (lb, lw, fld, c.lw, ...).
    Load,
    /// Memory store (sb, sw, fsd, c.sw, ...).
    Store,
    /// Integer multiply (mul, mulh, ...).
    Multiply,
    /// Integer divide and remainder (div, rem, ...).
    Divide,
    /// Branch or jump (beq, jal, jalr, ...).
    Branch,
    /// Integer arithmetic, logic, and system instructions.
    #[default]
    Integer,
    /// Floating-point computation.
    FloatingPoint,
    /// CSR access.
    ControlStatusRegister,
    /// Atomic memory operation.
    Atomic,
    /// Vector operation.
    Vector,
    /// Address generation bit manipulation.
    Zba,
    /// Basic bit manipulation.
    Zbb,
    /// Carry-less multiplication.
    Zbc,
    /// Bit compress and decompress.
    Zbe,
    /// Bit-field place.
    Zbf,
    /// Bit matrix.
    Zbm,
    /// Bit permutation.
    Zbp,
    /// Cyclic redundancy check.
    Zbr,
    /// Single-bit.
    Zbs,
    /// Ternary bit.
    Zbt,
}

impl InstructionCategory {
    /// Returns true for the bit-manipulation sub-extension categories.
    pub const fn is_bit_manipulation(self) -> bool {
        matches!(
            self,
            Self::Zba
                | Self::Zbb
                | Self::Zbc
                | Self::Zbe
                | Self::Zbf
                | Self::Zbm
                | Self::Zbp
                | Self::Zbr
                | Self::Zbs
                | Self::Zbt
        )
    }
}
