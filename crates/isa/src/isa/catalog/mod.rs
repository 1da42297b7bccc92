//! Compiled-in instruction catalog.
//!
//! Each extension group lives in its own module and returns builders for its
//! instruction variants. The helpers here capture the operand layout shared
//! by each encoding format, so a catalog line only states what differs: the
//! mnemonic, identifier, fixed code bits, and flags.
//!
//! Fixed-bit masks follow the base formats:
//! - `R_MASK`: opcode, funct3, funct7 (R-type and 5-bit shifts).
//! - `I_MASK`: opcode, funct3 (I, S, B-type).
//! - `SHIFT6_MASK`: opcode, funct3, funct6 (RV64 immediate shifts).
//! - `UNARY_MASK`: `R_MASK` plus the rs2 field used as a selector.
//! - floating-point masks leave the rounding-mode field free.

mod bitmanip;
mod rv64a;
mod rv64fd;
mod rv64i;
mod rv64m;
mod rvc;
mod vector;

use crate::config::Extension;
use crate::isa::category::InstructionCategory;
use crate::isa::category::InstructionCategory::{Branch, FloatingPoint, Load, Store};
use crate::isa::entry::InstEntryBuilder;
use crate::isa::id::InstId;
use crate::isa::instruction::fields::{B_IMM, I_IMM, RD, RS1, RS2, RS3, S_IMM, SHAMT5, SHAMT6};
use crate::isa::operand::OperandMode::{Read, Write};
use crate::isa::operand::OperandType::{self, FpReg, Imm, IntReg};

/// Opcode, funct3, and funct7.
const R_MASK: u32 = 0xFE00_707F;
/// Opcode and funct3.
const I_MASK: u32 = 0x0000_707F;
/// Opcode only.
const U_MASK: u32 = 0x0000_007F;
/// Opcode, funct3, and funct6.
const SHIFT6_MASK: u32 = 0xFC00_707F;
/// Opcode, funct3, funct7, and the rs2 selector.
const UNARY_MASK: u32 = 0xFFF0_707F;
/// Every bit fixed.
const FULL_MASK: u32 = 0xFFFF_FFFF;
/// Floating-point R-type with a free rounding mode.
const FP_RM_MASK: u32 = 0xFE00_007F;
/// Floating-point unary with a free rounding mode.
const FP_UNARY_RM_MASK: u32 = 0xFFF0_007F;
/// Fused multiply-add: opcode and format.
const R4_MASK: u32 = 0x0600_007F;

/// Mnemonic of the sentinel entry.
pub const ILLEGAL_NAME: &str = "illegal";

/// Returns builders for every instruction variant, sentinel first.
pub fn entries() -> Vec<InstEntryBuilder> {
    let mut all = vec![illegal()];
    all.extend(rv64i::entries());
    all.extend(rv64m::entries());
    all.extend(rv64a::entries());
    all.extend(rv64fd::entries());
    all.extend(rvc::entries());
    all.extend(bitmanip::entries());
    all.extend(vector::entries());
    all
}

/// The illegal instruction: matches only the all-zero word.
fn illegal() -> InstEntryBuilder {
    InstEntryBuilder::new(ILLEGAL_NAME, InstId::Illegal, 0, FULL_MASK, InstructionCategory::Integer)
}

/// Tags every builder in `group` with `extension`.
fn tagged<I>(extension: Extension, group: I) -> impl Iterator<Item = InstEntryBuilder>
where
    I: IntoIterator<Item = InstEntryBuilder>,
{
    group.into_iter().map(move |b| b.extension(extension))
}

/// `op rd, rs1, rs2` on integer registers.
fn r_type(
    name: &'static str,
    id: InstId,
    code: u32,
    category: InstructionCategory,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, R_MASK, category)
        .operand(IntReg, Write, RD)
        .operand(IntReg, Read, RS1)
        .operand(IntReg, Read, RS2)
}

/// `op rd, rs1` with the rs2 field acting as an opcode selector.
fn unary(
    name: &'static str,
    id: InstId,
    code: u32,
    category: InstructionCategory,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, UNARY_MASK, category)
        .operand(IntReg, Write, RD)
        .operand(IntReg, Read, RS1)
}

/// `op rd, rs1, imm12`.
fn i_type(
    name: &'static str,
    id: InstId,
    code: u32,
    category: InstructionCategory,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, I_MASK, category)
        .operand(IntReg, Write, RD)
        .operand(IntReg, Read, RS1)
        .operand(Imm, Read, I_IMM)
}

/// `op rd, rs1, shamt` with a 6-bit shift amount.
fn shift6(
    name: &'static str,
    id: InstId,
    code: u32,
    category: InstructionCategory,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, SHIFT6_MASK, category)
        .operand(IntReg, Write, RD)
        .operand(IntReg, Read, RS1)
        .operand(Imm, Read, SHAMT6)
}

/// `op rd, rs1, shamt` with a 5-bit shift amount.
fn shift5(
    name: &'static str,
    id: InstId,
    code: u32,
    category: InstructionCategory,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, R_MASK, category)
        .operand(IntReg, Write, RD)
        .operand(IntReg, Read, RS1)
        .operand(Imm, Read, SHAMT5)
}

/// `bxx rs1, rs2, offset`.
fn branch(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, I_MASK, Branch)
        .operand(IntReg, Read, RS1)
        .operand(IntReg, Read, RS2)
        .operand(Imm, Read, B_IMM)
        .conditional_branch()
}

/// `load rd, offset(rs1)` with the destination in register file `dest`.
fn load(
    name: &'static str,
    id: InstId,
    code: u32,
    dest: OperandType,
    size: u32,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, I_MASK, Load)
        .operand(dest, Write, RD)
        .operand(IntReg, Read, RS1)
        .operand(Imm, Read, I_IMM)
        .load_size(size)
}

/// `store rs2, offset(rs1)` with the source in register file `src`.
fn store(
    name: &'static str,
    id: InstId,
    code: u32,
    src: OperandType,
    size: u32,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, I_MASK, Store)
        .operand(src, Read, RS2)
        .operand(IntReg, Read, RS1)
        .operand(Imm, Read, S_IMM)
        .store_size(size)
}

/// `fop rd, rs1, rs2` with a free rounding mode.
fn fp_arith(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, FP_RM_MASK, FloatingPoint)
        .operand(FpReg, Write, RD)
        .operand(FpReg, Read, RS1)
        .operand(FpReg, Read, RS2)
}

/// `fop rd, rs1, rs2` with funct3 fixed (sign injection, min/max).
fn fp_fixed(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, R_MASK, FloatingPoint)
        .operand(FpReg, Write, RD)
        .operand(FpReg, Read, RS1)
        .operand(FpReg, Read, RS2)
}

/// `fcmp rd, rs1, rs2`: floating-point compare into an integer register.
fn fp_compare(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, R_MASK, FloatingPoint)
        .operand(IntReg, Write, RD)
        .operand(FpReg, Read, RS1)
        .operand(FpReg, Read, RS2)
}

/// `fmadd rd, rs1, rs2, rs3` with a free rounding mode.
fn fp_fused(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, R4_MASK, FloatingPoint)
        .operand(FpReg, Write, RD)
        .operand(FpReg, Read, RS1)
        .operand(FpReg, Read, RS2)
        .operand(FpReg, Read, RS3)
}

/// `fcvt rd, rs1` with a free rounding mode.
fn fp_convert(
    name: &'static str,
    id: InstId,
    code: u32,
    dest: OperandType,
    src: OperandType,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, FP_UNARY_RM_MASK, FloatingPoint)
        .operand(dest, Write, RD)
        .operand(src, Read, RS1)
}

/// `fmv rd, rs1` and `fclass rd, rs1` with funct3 fixed.
fn fp_move(
    name: &'static str,
    id: InstId,
    code: u32,
    dest: OperandType,
    src: OperandType,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, UNARY_MASK, FloatingPoint)
        .operand(dest, Write, RD)
        .operand(src, Read, RS1)
}
