//! Bit-manipulation extensions (Zba, Zbb, Zbc, Zbe, Zbf, Zbm, Zbp, Zbr, Zbs, Zbt).
//!
//! Each sub-extension is its own category, so `is_bit_manipulation` holds for
//! every entry in this module.

use super::{r_type, shift5, shift6, tagged, unary};
use crate::config::Extension;
use crate::isa::category::InstructionCategory::{Zba, Zbb, Zbc, Zbe, Zbf, Zbm, Zbp, Zbr, Zbs, Zbt};
use crate::isa::entry::InstEntryBuilder;
use crate::isa::id::InstId;
use crate::isa::instruction::fields::{RD, RS1, RS2, RS3, SHAMT5, SHAMT6};
use crate::isa::operand::OperandMode::{Read, Write};
use crate::isa::operand::OperandType::{Imm, IntReg};

/// Opcode, funct3, and the two-bit funct2 of R4-type ternary ops.
const TERNARY_MASK: u32 = 0x0600_707F;
/// Opcode, funct3, and bit 26 (funnel shift by immediate).
const FUNNEL_IMM_MASK: u32 = 0x0400_707F;

pub(super) fn entries() -> impl Iterator<Item = InstEntryBuilder> {
    tagged(Extension::Zba, zba())
        .chain(tagged(Extension::Zbb, zbb()))
        .chain(tagged(Extension::Zbc, zbc()))
        .chain(tagged(Extension::Zbe, zbe()))
        .chain(tagged(Extension::Zbf, zbf()))
        .chain(tagged(Extension::Zbm, zbm()))
        .chain(tagged(Extension::Zbp, zbp()))
        .chain(tagged(Extension::Zbr, zbr()))
        .chain(tagged(Extension::Zbs, zbs()))
        .chain(tagged(Extension::Zbt, zbt()))
}

fn zba() -> Vec<InstEntryBuilder> {
    vec![
        r_type("add.uw", InstId::AddUw, 0x0800_003B, Zba).unsigned(),
        r_type("sh1add", InstId::Sh1add, 0x2000_2033, Zba),
        r_type("sh2add", InstId::Sh2add, 0x2000_4033, Zba),
        r_type("sh3add", InstId::Sh3add, 0x2000_6033, Zba),
        r_type("sh1add.uw", InstId::Sh1addUw, 0x2000_203B, Zba).unsigned(),
        r_type("sh2add.uw", InstId::Sh2addUw, 0x2000_403B, Zba).unsigned(),
        r_type("sh3add.uw", InstId::Sh3addUw, 0x2000_603B, Zba).unsigned(),
        shift6("slli.uw", InstId::SlliUw, 0x0800_101B, Zba).unsigned(),
    ]
}

fn zbb() -> Vec<InstEntryBuilder> {
    vec![
        r_type("andn", InstId::Andn, 0x4000_7033, Zbb),
        r_type("orn", InstId::Orn, 0x4000_6033, Zbb),
        r_type("xnor", InstId::Xnor, 0x4000_4033, Zbb),
        unary("clz", InstId::Clz, 0x6000_1013, Zbb),
        unary("ctz", InstId::Ctz, 0x6010_1013, Zbb),
        unary("cpop", InstId::Cpop, 0x6020_1013, Zbb),
        unary("clzw", InstId::Clzw, 0x6000_101B, Zbb),
        unary("ctzw", InstId::Ctzw, 0x6010_101B, Zbb),
        unary("cpopw", InstId::Cpopw, 0x6020_101B, Zbb),
        r_type("max", InstId::Max, 0x0A00_6033, Zbb),
        r_type("maxu", InstId::Maxu, 0x0A00_7033, Zbb).unsigned(),
        r_type("min", InstId::Min, 0x0A00_4033, Zbb),
        r_type("minu", InstId::Minu, 0x0A00_5033, Zbb).unsigned(),
        unary("sext.b", InstId::SextB, 0x6040_1013, Zbb),
        unary("sext.h", InstId::SextH, 0x6050_1013, Zbb),
        unary("zext.h", InstId::ZextH, 0x0800_403B, Zbb),
        r_type("rol", InstId::Rol, 0x6000_1033, Zbb),
        r_type("ror", InstId::Ror, 0x6000_5033, Zbb),
        shift6("rori", InstId::Rori, 0x6000_5013, Zbb),
        r_type("rolw", InstId::Rolw, 0x6000_103B, Zbb),
        r_type("rorw", InstId::Rorw, 0x6000_503B, Zbb),
        shift5("roriw", InstId::Roriw, 0x6000_501B, Zbb),
        unary("orc.b", InstId::OrcB, 0x2870_5013, Zbb),
        unary("rev8", InstId::Rev8, 0x6B80_5013, Zbb),
    ]
}

fn zbc() -> Vec<InstEntryBuilder> {
    vec![
        r_type("clmul", InstId::Clmul, 0x0A00_1033, Zbc),
        r_type("clmulr", InstId::Clmulr, 0x0A00_2033, Zbc),
        r_type("clmulh", InstId::Clmulh, 0x0A00_3033, Zbc),
    ]
}

fn zbe() -> Vec<InstEntryBuilder> {
    vec![
        r_type("bcompress", InstId::Bcompress, 0x0800_6033, Zbe),
        r_type("bdecompress", InstId::Bdecompress, 0x4800_6033, Zbe),
        r_type("bcompressw", InstId::Bcompressw, 0x0800_603B, Zbe),
        r_type("bdecompressw", InstId::Bdecompressw, 0x4800_603B, Zbe),
    ]
}

fn zbf() -> Vec<InstEntryBuilder> {
    vec![
        r_type("bfp", InstId::Bfp, 0x4800_7033, Zbf),
        r_type("bfpw", InstId::Bfpw, 0x4800_703B, Zbf),
    ]
}

fn zbm() -> Vec<InstEntryBuilder> {
    vec![
        r_type("bmator", InstId::Bmator, 0x0800_3033, Zbm),
        r_type("bmatxor", InstId::Bmatxor, 0x4800_3033, Zbm),
        unary("bmatflip", InstId::Bmatflip, 0x6030_1013, Zbm),
    ]
}

fn zbp() -> Vec<InstEntryBuilder> {
    vec![
        r_type("pack", InstId::Pack, 0x0800_4033, Zbp),
        r_type("packu", InstId::Packu, 0x4800_4033, Zbp),
        r_type("packh", InstId::Packh, 0x0800_7033, Zbp),
        r_type("packw", InstId::Packw, 0x0800_403B, Zbp),
        r_type("packuw", InstId::Packuw, 0x4800_403B, Zbp),
        r_type("grev", InstId::Grev, 0x6800_5033, Zbp),
        shift6("grevi", InstId::Grevi, 0x6800_5013, Zbp),
        r_type("gorc", InstId::Gorc, 0x2800_5033, Zbp),
        shift6("gorci", InstId::Gorci, 0x2800_5013, Zbp),
        r_type("shfl", InstId::Shfl, 0x0800_1033, Zbp),
        r_type("unshfl", InstId::Unshfl, 0x0800_5033, Zbp),
        shift5("shfli", InstId::Shfli, 0x0800_1013, Zbp),
        shift5("unshfli", InstId::Unshfli, 0x0800_5013, Zbp),
        r_type("xperm.n", InstId::XpermN, 0x2800_2033, Zbp),
        r_type("xperm.b", InstId::XpermB, 0x2800_4033, Zbp),
        r_type("xperm.h", InstId::XpermH, 0x2800_6033, Zbp),
        r_type("xperm.w", InstId::XpermW, 0x2800_0033, Zbp),
    ]
}

fn zbr() -> Vec<InstEntryBuilder> {
    vec![
        unary("crc32.b", InstId::Crc32B, 0x6100_1013, Zbr),
        unary("crc32.h", InstId::Crc32H, 0x6110_1013, Zbr),
        unary("crc32.w", InstId::Crc32W, 0x6120_1013, Zbr),
        unary("crc32.d", InstId::Crc32D, 0x6130_1013, Zbr),
        unary("crc32c.b", InstId::Crc32cB, 0x6180_1013, Zbr),
        unary("crc32c.h", InstId::Crc32cH, 0x6190_1013, Zbr),
        unary("crc32c.w", InstId::Crc32cW, 0x61A0_1013, Zbr),
        unary("crc32c.d", InstId::Crc32cD, 0x61B0_1013, Zbr),
    ]
}

fn zbs() -> Vec<InstEntryBuilder> {
    vec![
        r_type("bclr", InstId::Bclr, 0x4800_1033, Zbs),
        shift6("bclri", InstId::Bclri, 0x4800_1013, Zbs),
        r_type("bext", InstId::Bext, 0x4800_5033, Zbs),
        shift6("bexti", InstId::Bexti, 0x4800_5013, Zbs),
        r_type("binv", InstId::Binv, 0x6800_1033, Zbs),
        shift6("binvi", InstId::Binvi, 0x6800_1013, Zbs),
        r_type("bset", InstId::Bset, 0x2800_1033, Zbs),
        shift6("bseti", InstId::Bseti, 0x2800_1013, Zbs),
    ]
}

fn zbt() -> Vec<InstEntryBuilder> {
    vec![
        ternary("cmix", InstId::Cmix, 0x0600_1033),
        ternary("cmov", InstId::Cmov, 0x0600_5033),
        ternary("fsl", InstId::Fsl, 0x0400_1033),
        ternary("fsr", InstId::Fsr, 0x0400_5033),
        funnel_imm("fsri", InstId::Fsri, 0x0400_5013, FUNNEL_IMM_MASK, SHAMT6),
        ternary("fslw", InstId::Fslw, 0x0400_103B),
        ternary("fsrw", InstId::Fsrw, 0x0400_503B),
        funnel_imm("fsriw", InstId::Fsriw, 0x0400_501B, TERNARY_MASK, SHAMT5),
    ]
}

/// `op rd, rs1, rs2, rs3`.
fn ternary(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, TERNARY_MASK, Zbt)
        .operand(IntReg, Write, RD)
        .operand(IntReg, Read, RS1)
        .operand(IntReg, Read, RS2)
        .operand(IntReg, Read, RS3)
}

/// `fsri rd, rs1, rs3, shamt`.
fn funnel_imm(
    name: &'static str,
    id: InstId,
    code: u32,
    mask: u32,
    shamt: u32,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, mask, Zbt)
        .operand(IntReg, Write, RD)
        .operand(IntReg, Read, RS1)
        .operand(IntReg, Read, RS3)
        .operand(Imm, Read, shamt)
}
