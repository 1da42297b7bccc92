//! Compressed 16-bit instructions (C).
//!
//! RV32 and RV64 assign different instructions to the same encodings in a
//! few quadrant slots. Both readings are registered under distinct
//! identifiers with identical code and mask:
//! - `c.jal` (RV32) / `c.addiw` (RV64)
//! - `c.flw` (RV32) / `c.ld` (RV64), and `c.fsw` / `c.sd`
//! - `c.flwsp` (RV32) / `c.ldsp` (RV64), and `c.fswsp` / `c.sdsp`

use super::tagged;
use crate::config::Extension;
use crate::isa::category::InstructionCategory::{Branch, Integer, Load, Store};
use crate::isa::entry::InstEntryBuilder;
use crate::isa::id::InstId;
use crate::isa::instruction::compressed::{
    CB_IMM, CI_IMM, CIW_IMM, CJ_IMM, CL_IMM, CSS_IMM, RD, RS1_P, RS2, RS2_P,
};
use crate::isa::operand::OperandMode::{self, Read, ReadWrite, Write};
use crate::isa::operand::OperandType::{self, FpReg, Imm, IntReg};

/// funct3 and quadrant.
const CQ_MASK: u32 = 0xE003;
/// funct3, bits 10-11, and quadrant (CB-format ALU ops).
const CB_ALU_MASK: u32 = 0xEC03;
/// funct6, funct2, and quadrant (CA format).
const CA_MASK: u32 = 0xFC63;
/// funct4 and quadrant (CR format).
const CR_MASK: u32 = 0xF003;
/// `CR_MASK` plus an rs2 field that must be zero.
const CR_JUMP_MASK: u32 = 0xF07F;
/// `c.addi16sp`: `CQ_MASK` plus rd fixed to sp.
const ADDI16SP_MASK: u32 = 0xEF83;
/// Every bit of the halfword fixed.
const C_FULL_MASK: u32 = 0xFFFF;

pub(super) fn entries() -> impl Iterator<Item = InstEntryBuilder> {
    tagged(
        Extension::C,
        [
            // Quadrant 0
            InstEntryBuilder::new("c.addi4spn", InstId::CAddi4spn, 0x0000, CQ_MASK, Integer)
                .operand(IntReg, Write, RS2_P)
                .operand(Imm, Read, CIW_IMM),
            cl_load("c.fld", InstId::CFld, 0x2000, FpReg, 8),
            cl_load("c.lw", InstId::CLw, 0x4000, IntReg, 4),
            cl_load("c.flw", InstId::CFlw, 0x6000, FpReg, 4),
            cl_load("c.ld", InstId::CLd, 0x6000, IntReg, 8),
            cs_store("c.fsd", InstId::CFsd, 0xA000, FpReg, 8),
            cs_store("c.sw", InstId::CSw, 0xC000, IntReg, 4),
            cs_store("c.fsw", InstId::CFsw, 0xE000, FpReg, 4),
            cs_store("c.sd", InstId::CSd, 0xE000, IntReg, 8),
            // Quadrant 1
            InstEntryBuilder::new("c.nop", InstId::CNop, 0x0001, C_FULL_MASK, Integer),
            ci_alu("c.addi", InstId::CAddi, 0x0001, ReadWrite),
            InstEntryBuilder::new("c.jal", InstId::CJal, 0x2001, CQ_MASK, Branch)
                .operand(Imm, Read, CJ_IMM),
            ci_alu("c.addiw", InstId::CAddiw, 0x2001, ReadWrite),
            ci_alu("c.li", InstId::CLi, 0x4001, Write),
            InstEntryBuilder::new("c.addi16sp", InstId::CAddi16sp, 0x6101, ADDI16SP_MASK, Integer)
                .operand(Imm, Read, CI_IMM),
            ci_alu("c.lui", InstId::CLui, 0x6001, Write),
            cb_alu("c.srli", InstId::CSrli, 0x8001),
            cb_alu("c.srai", InstId::CSrai, 0x8401),
            cb_alu("c.andi", InstId::CAndi, 0x8801),
            ca_alu("c.sub", InstId::CSub, 0x8C01),
            ca_alu("c.xor", InstId::CXor, 0x8C21),
            ca_alu("c.or", InstId::COr, 0x8C41),
            ca_alu("c.and", InstId::CAnd, 0x8C61),
            ca_alu("c.subw", InstId::CSubw, 0x9C01),
            ca_alu("c.addw", InstId::CAddw, 0x9C21),
            InstEntryBuilder::new("c.j", InstId::CJ, 0xA001, CQ_MASK, Branch)
                .operand(Imm, Read, CJ_IMM),
            cb_branch("c.beqz", InstId::CBeqz, 0xC001),
            cb_branch("c.bnez", InstId::CBnez, 0xE001),
            // Quadrant 2
            ci_alu("c.slli", InstId::CSlli, 0x0002, ReadWrite),
            ci_load_sp("c.fldsp", InstId::CFldsp, 0x2002, FpReg, 8),
            ci_load_sp("c.lwsp", InstId::CLwsp, 0x4002, IntReg, 4),
            ci_load_sp("c.flwsp", InstId::CFlwsp, 0x6002, FpReg, 4),
            ci_load_sp("c.ldsp", InstId::CLdsp, 0x6002, IntReg, 8),
            cr_jump("c.jr", InstId::CJr, 0x8002),
            cr_move("c.mv", InstId::CMv, 0x8002, Write),
            InstEntryBuilder::new("c.ebreak", InstId::CEbreak, 0x9002, C_FULL_MASK, Integer),
            cr_jump("c.jalr", InstId::CJalr, 0x9002),
            cr_move("c.add", InstId::CAdd, 0x9002, ReadWrite),
            css_store_sp("c.fsdsp", InstId::CFsdsp, 0xA002, FpReg, 8),
            css_store_sp("c.swsp", InstId::CSwsp, 0xC002, IntReg, 4),
            css_store_sp("c.fswsp", InstId::CFswsp, 0xE002, FpReg, 4),
            css_store_sp("c.sdsp", InstId::CSdsp, 0xE002, IntReg, 8),
        ],
    )
}

/// CL: `c.load rd', offset(rs1')`.
fn cl_load(
    name: &'static str,
    id: InstId,
    code: u32,
    dest: OperandType,
    size: u32,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, CQ_MASK, Load)
        .operand(dest, Write, RS2_P)
        .operand(IntReg, Read, RS1_P)
        .operand(Imm, Read, CL_IMM)
        .load_size(size)
}

/// CS: `c.store rs2', offset(rs1')`.
fn cs_store(
    name: &'static str,
    id: InstId,
    code: u32,
    src: OperandType,
    size: u32,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, CQ_MASK, Store)
        .operand(src, Read, RS2_P)
        .operand(IntReg, Read, RS1_P)
        .operand(Imm, Read, CL_IMM)
        .store_size(size)
}

/// CI: `c.op rd, imm` where rd is written, or read and written.
fn ci_alu(name: &'static str, id: InstId, code: u32, mode: OperandMode) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, CQ_MASK, Integer)
        .operand(IntReg, mode, RD)
        .operand(Imm, Read, CI_IMM)
}

/// CI: `c.loadsp rd, offset(sp)`.
fn ci_load_sp(
    name: &'static str,
    id: InstId,
    code: u32,
    dest: OperandType,
    size: u32,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, CQ_MASK, Load)
        .operand(dest, Write, RD)
        .operand(Imm, Read, CI_IMM)
        .load_size(size)
}

/// CSS: `c.storesp rs2, offset(sp)`.
fn css_store_sp(
    name: &'static str,
    id: InstId,
    code: u32,
    src: OperandType,
    size: u32,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, CQ_MASK, Store)
        .operand(src, Read, RS2)
        .operand(Imm, Read, CSS_IMM)
        .store_size(size)
}

/// CB: `c.op rd', imm` with rd' read and written.
fn cb_alu(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, CB_ALU_MASK, Integer)
        .operand(IntReg, ReadWrite, RS1_P)
        .operand(Imm, Read, CI_IMM)
}

/// CB: `c.bxxz rs1', offset`.
fn cb_branch(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, CQ_MASK, Branch)
        .operand(IntReg, Read, RS1_P)
        .operand(Imm, Read, CB_IMM)
        .conditional_branch()
}

/// CA: `c.op rd', rs2'` with rd' read and written.
fn ca_alu(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, CA_MASK, Integer)
        .operand(IntReg, ReadWrite, RS1_P)
        .operand(IntReg, Read, RS2_P)
}

/// CR: `c.op rd, rs2`.
fn cr_move(name: &'static str, id: InstId, code: u32, mode: OperandMode) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, CR_MASK, Integer)
        .operand(IntReg, mode, RD)
        .operand(IntReg, Read, RS2)
}

/// CR: `c.jr rs1` and `c.jalr rs1`.
fn cr_jump(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, CR_JUMP_MASK, Branch)
        .operand(IntReg, Read, RD)
        .branch_to_register()
}
