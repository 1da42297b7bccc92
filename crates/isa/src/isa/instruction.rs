//! Instruction-word helpers.
//!
//! Provides size classification of raw instruction words and the operand
//! field masks used by the catalog to describe where each operand specifier
//! lives inside an encoding.

/// Low two bits of a full-size (32-bit) instruction.
const FULL_SIZE_TAG: u32 = 0b11;

/// Returns true if `inst` is a 4-byte instruction.
#[inline(always)]
pub const fn is_full_size_inst(inst: u32) -> bool {
    inst & FULL_SIZE_TAG == FULL_SIZE_TAG
}

/// Returns true if `inst` is a compressed (2-byte) instruction.
#[inline(always)]
pub const fn is_compressed_inst(inst: u32) -> bool {
    !is_full_size_inst(inst)
}

/// Returns the size in bytes (2 or 4) of `inst` based on its opcode.
#[inline(always)]
pub const fn instruction_size(inst: u32) -> u32 {
    if is_full_size_inst(inst) { 4 } else { 2 }
}

/// Operand field masks for 32-bit encodings.
///
/// Each mask is already shifted into place within the instruction word.
pub mod fields {
    /// Destination register (bits 7-11).
    pub const RD: u32 = 0x0000_0F80;
    /// First source register (bits 15-19).
    pub const RS1: u32 = 0x000F_8000;
    /// Second source register (bits 20-24).
    pub const RS2: u32 = 0x01F0_0000;
    /// Third source register for R4-type instructions (bits 27-31).
    pub const RS3: u32 = 0xF800_0000;
    /// I-type immediate (bits 20-31).
    pub const I_IMM: u32 = 0xFFF0_0000;
    /// S-type and B-type split immediate (bits 7-11 and 25-31).
    pub const S_IMM: u32 = 0xFE00_0F80;
    /// B-type immediate; same bit positions as S-type.
    pub const B_IMM: u32 = S_IMM;
    /// U-type and J-type immediate (bits 12-31).
    pub const U_IMM: u32 = 0xFFFF_F000;
    /// J-type immediate; same bit positions as U-type.
    pub const J_IMM: u32 = U_IMM;
    /// RV64 shift amount (bits 20-25).
    pub const SHAMT6: u32 = 0x03F0_0000;
    /// 32-bit shift amount (bits 20-24).
    pub const SHAMT5: u32 = 0x01F0_0000;
    /// CSR number (bits 20-31).
    pub const CSR: u32 = 0xFFF0_0000;
    /// 5-bit zero-extended immediate in the rs1 field (CSR immediate forms).
    pub const ZIMM: u32 = RS1;
    /// Fence predecessor set (bits 24-27).
    pub const PRED: u32 = 0x0F00_0000;
    /// Fence successor set (bits 20-23).
    pub const SUCC: u32 = 0x00F0_0000;
    /// `vsetvli` type immediate (bits 20-30).
    pub const VTYPE_I: u32 = 0x7FF0_0000;
    /// `vsetivli` type immediate (bits 20-29).
    pub const VTYPE_IV: u32 = 0x3FF0_0000;
}

/// Operand field masks for 16-bit compressed encodings.
pub mod compressed {
    /// Full register in bits 7-11 (CR/CI/CSS formats).
    pub const RD: u32 = 0x0F80;
    /// Full register in bits 2-6 (CR/CSS formats).
    pub const RS2: u32 = 0x007C;
    /// Popular register (x8-x15) in bits 7-9.
    pub const RS1_P: u32 = 0x0380;
    /// Popular register (x8-x15) in bits 2-4.
    pub const RS2_P: u32 = 0x001C;
    /// CI-format immediate (bit 12 and bits 2-6).
    pub const CI_IMM: u32 = 0x107C;
    /// CSS-format immediate (bits 7-12).
    pub const CSS_IMM: u32 = 0x1F80;
    /// CIW-format immediate (bits 5-12).
    pub const CIW_IMM: u32 = 0x1FE0;
    /// CL/CS-format immediate (bits 10-12 and 5-6).
    pub const CL_IMM: u32 = 0x1C60;
    /// CB-format branch offset (bits 10-12 and 2-6).
    pub const CB_IMM: u32 = 0x1C7C;
    /// CJ-format jump target (bits 2-12).
    pub const CJ_IMM: u32 = 0x1FFC;
}
