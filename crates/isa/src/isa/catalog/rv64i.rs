//! Base integer instructions (RV64I), plus Zifencei and Zicsr.

use super::{FULL_MASK, I_MASK, U_MASK, branch, i_type, load, r_type, shift5, shift6, store, tagged};
use crate::config::Extension;
use crate::isa::category::InstructionCategory::{Branch, ControlStatusRegister, Integer};
use crate::isa::entry::InstEntryBuilder;
use crate::isa::id::InstId;
use crate::isa::instruction::fields::{CSR, I_IMM, J_IMM, PRED, RD, RS1, RS2, SUCC, U_IMM, ZIMM};
use crate::isa::operand::OperandMode::{Read, ReadWrite, Write};
use crate::isa::operand::OperandType::{CsReg, Imm, IntReg};

/// `sfence.vma` fixes every bit except rs1 and rs2.
const SFENCE_VMA_MASK: u32 = 0xFE00_7FFF;

pub(super) fn entries() -> impl Iterator<Item = InstEntryBuilder> {
    tagged(Extension::I, base())
        .chain(tagged(
            Extension::Zifencei,
            [InstEntryBuilder::new("fence.i", InstId::FenceI, 0x0000_100F, I_MASK, Integer)],
        ))
        .chain(tagged(Extension::Zicsr, csr()))
}

fn base() -> Vec<InstEntryBuilder> {
    vec![
        upper("lui", InstId::Lui, 0x0000_0037),
        upper("auipc", InstId::Auipc, 0x0000_0017),
        InstEntryBuilder::new("jal", InstId::Jal, 0x0000_006F, U_MASK, Branch)
            .operand(IntReg, Write, RD)
            .operand(Imm, Read, J_IMM),
        InstEntryBuilder::new("jalr", InstId::Jalr, 0x0000_0067, I_MASK, Branch)
            .operand(IntReg, Write, RD)
            .operand(IntReg, Read, RS1)
            .operand(Imm, Read, I_IMM)
            .branch_to_register(),
        branch("beq", InstId::Beq, 0x0000_0063),
        branch("bne", InstId::Bne, 0x0000_1063),
        branch("blt", InstId::Blt, 0x0000_4063),
        branch("bge", InstId::Bge, 0x0000_5063),
        branch("bltu", InstId::Bltu, 0x0000_6063).unsigned(),
        branch("bgeu", InstId::Bgeu, 0x0000_7063).unsigned(),
        load("lb", InstId::Lb, 0x0000_0003, IntReg, 1),
        load("lh", InstId::Lh, 0x0000_1003, IntReg, 2),
        load("lw", InstId::Lw, 0x0000_2003, IntReg, 4),
        load("ld", InstId::Ld, 0x0000_3003, IntReg, 8),
        load("lbu", InstId::Lbu, 0x0000_4003, IntReg, 1).unsigned(),
        load("lhu", InstId::Lhu, 0x0000_5003, IntReg, 2).unsigned(),
        load("lwu", InstId::Lwu, 0x0000_6003, IntReg, 4).unsigned(),
        store("sb", InstId::Sb, 0x0000_0023, IntReg, 1),
        store("sh", InstId::Sh, 0x0000_1023, IntReg, 2),
        store("sw", InstId::Sw, 0x0000_2023, IntReg, 4),
        store("sd", InstId::Sd, 0x0000_3023, IntReg, 8),
        i_type("addi", InstId::Addi, 0x0000_0013, Integer),
        i_type("slti", InstId::Slti, 0x0000_2013, Integer),
        i_type("sltiu", InstId::Sltiu, 0x0000_3013, Integer).unsigned(),
        i_type("xori", InstId::Xori, 0x0000_4013, Integer),
        i_type("ori", InstId::Ori, 0x0000_6013, Integer),
        i_type("andi", InstId::Andi, 0x0000_7013, Integer),
        shift6("slli", InstId::Slli, 0x0000_1013, Integer),
        shift6("srli", InstId::Srli, 0x0000_5013, Integer),
        shift6("srai", InstId::Srai, 0x4000_5013, Integer),
        r_type("add", InstId::Add, 0x0000_0033, Integer),
        r_type("sub", InstId::Sub, 0x4000_0033, Integer),
        r_type("sll", InstId::Sll, 0x0000_1033, Integer),
        r_type("slt", InstId::Slt, 0x0000_2033, Integer),
        r_type("sltu", InstId::Sltu, 0x0000_3033, Integer).unsigned(),
        r_type("xor", InstId::Xor, 0x0000_4033, Integer),
        r_type("srl", InstId::Srl, 0x0000_5033, Integer),
        r_type("sra", InstId::Sra, 0x4000_5033, Integer),
        r_type("or", InstId::Or, 0x0000_6033, Integer),
        r_type("and", InstId::And, 0x0000_7033, Integer),
        // fm, rd, and rs1 are reserved and left unchecked.
        InstEntryBuilder::new("fence", InstId::Fence, 0x0000_000F, I_MASK, Integer)
            .operand(Imm, Read, PRED)
            .operand(Imm, Read, SUCC),
        system("ecall", InstId::Ecall, 0x0000_0073),
        system("ebreak", InstId::Ebreak, 0x0010_0073),
        system("uret", InstId::Uret, 0x0020_0073),
        system("sret", InstId::Sret, 0x1020_0073),
        system("mret", InstId::Mret, 0x3020_0073),
        system("dret", InstId::Dret, 0x7B20_0073),
        system("wfi", InstId::Wfi, 0x1050_0073),
        InstEntryBuilder::new(
            "sfence.vma",
            InstId::SfenceVma,
            0x1200_0073,
            SFENCE_VMA_MASK,
            Integer,
        )
        .operand(IntReg, Read, RS1)
        .operand(IntReg, Read, RS2),
        i_type("addiw", InstId::Addiw, 0x0000_001B, Integer),
        shift5("slliw", InstId::Slliw, 0x0000_101B, Integer),
        shift5("srliw", InstId::Srliw, 0x0000_501B, Integer),
        shift5("sraiw", InstId::Sraiw, 0x4000_501B, Integer),
        r_type("addw", InstId::Addw, 0x0000_003B, Integer),
        r_type("subw", InstId::Subw, 0x4000_003B, Integer),
        r_type("sllw", InstId::Sllw, 0x0000_103B, Integer),
        r_type("srlw", InstId::Srlw, 0x0000_503B, Integer),
        r_type("sraw", InstId::Sraw, 0x4000_503B, Integer),
    ]
}

fn csr() -> Vec<InstEntryBuilder> {
    vec![
        csr_reg("csrrw", InstId::Csrrw, 0x0000_1073),
        csr_reg("csrrs", InstId::Csrrs, 0x0000_2073),
        csr_reg("csrrc", InstId::Csrrc, 0x0000_3073),
        csr_imm("csrrwi", InstId::Csrrwi, 0x0000_5073),
        csr_imm("csrrsi", InstId::Csrrsi, 0x0000_6073),
        csr_imm("csrrci", InstId::Csrrci, 0x0000_7073),
    ]
}

/// `lui`/`auipc rd, imm20`.
fn upper(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, U_MASK, Integer)
        .operand(IntReg, Write, RD)
        .operand(Imm, Read, U_IMM)
}

/// Fully fixed system instruction with no operands.
fn system(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, FULL_MASK, Integer)
}

/// `csrrx rd, csr, rs1`.
fn csr_reg(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, I_MASK, ControlStatusRegister)
        .operand(IntReg, Write, RD)
        .operand(CsReg, ReadWrite, CSR)
        .operand(IntReg, Read, RS1)
}

/// `csrrxi rd, csr, uimm5`.
fn csr_imm(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, I_MASK, ControlStatusRegister)
        .operand(IntReg, Write, RD)
        .operand(CsReg, ReadWrite, CSR)
        .operand(Imm, Read, ZIMM)
}
