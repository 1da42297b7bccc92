//! Atomic memory operations (A).
//!
//! The aq/rl ordering bits (25-26) are neither fixed nor operands.

use super::tagged;
use crate::config::Extension;
use crate::isa::category::InstructionCategory::Atomic;
use crate::isa::entry::InstEntryBuilder;
use crate::isa::id::InstId;
use crate::isa::instruction::fields::{RD, RS1, RS2};
use crate::isa::operand::OperandMode::{Read, Write};
use crate::isa::operand::OperandType::IntReg;

/// Opcode, funct3 (width), and funct5.
const AMO_MASK: u32 = 0xF800_707F;
/// `AMO_MASK` plus the rs2 field, which must be zero for LR.
const LR_MASK: u32 = 0xF9F0_707F;
/// Word-width marker in funct3.
const WORD: u32 = 0x0000_202F;
/// Doubleword-width marker in funct3.
const DOUBLE: u32 = 0x0000_302F;

pub(super) fn entries() -> impl Iterator<Item = InstEntryBuilder> {
    tagged(
        Extension::A,
        [
            lr("lr.w", InstId::LrW, 0x1000_0000 | WORD),
            amo("sc.w", InstId::ScW, 0x1800_0000 | WORD),
            amo("amoswap.w", InstId::AmoswapW, 0x0800_0000 | WORD),
            amo("amoadd.w", InstId::AmoaddW, WORD),
            amo("amoxor.w", InstId::AmoxorW, 0x2000_0000 | WORD),
            amo("amoand.w", InstId::AmoandW, 0x6000_0000 | WORD),
            amo("amoor.w", InstId::AmoorW, 0x4000_0000 | WORD),
            amo("amomin.w", InstId::AmominW, 0x8000_0000 | WORD),
            amo("amomax.w", InstId::AmomaxW, 0xA000_0000 | WORD),
            amo("amominu.w", InstId::AmominuW, 0xC000_0000 | WORD).unsigned(),
            amo("amomaxu.w", InstId::AmomaxuW, 0xE000_0000 | WORD).unsigned(),
            lr("lr.d", InstId::LrD, 0x1000_0000 | DOUBLE),
            amo("sc.d", InstId::ScD, 0x1800_0000 | DOUBLE),
            amo("amoswap.d", InstId::AmoswapD, 0x0800_0000 | DOUBLE),
            amo("amoadd.d", InstId::AmoaddD, DOUBLE),
            amo("amoxor.d", InstId::AmoxorD, 0x2000_0000 | DOUBLE),
            amo("amoand.d", InstId::AmoandD, 0x6000_0000 | DOUBLE),
            amo("amoor.d", InstId::AmoorD, 0x4000_0000 | DOUBLE),
            amo("amomin.d", InstId::AmominD, 0x8000_0000 | DOUBLE),
            amo("amomax.d", InstId::AmomaxD, 0xA000_0000 | DOUBLE),
            amo("amominu.d", InstId::AmominuD, 0xC000_0000 | DOUBLE).unsigned(),
            amo("amomaxu.d", InstId::AmomaxuD, 0xE000_0000 | DOUBLE).unsigned(),
        ],
    )
}

/// `lr rd, (rs1)`.
fn lr(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, LR_MASK, Atomic)
        .operand(IntReg, Write, RD)
        .operand(IntReg, Read, RS1)
}

/// `amo`/`sc` with slots rd, rs1 (address), rs2 (source).
fn amo(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, AMO_MASK, Atomic)
        .operand(IntReg, Write, RD)
        .operand(IntReg, Read, RS1)
        .operand(IntReg, Read, RS2)
}
