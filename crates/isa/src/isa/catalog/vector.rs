//! Vector configuration, integer arithmetic, and unit-stride memory (V).
//!
//! Vector loads and stores stay in the `Vector` category and carry no
//! load/store size; the element width comes from `vtype` at run time.

use super::tagged;
use crate::config::Extension;
use crate::isa::category::InstructionCategory::Vector;
use crate::isa::entry::InstEntryBuilder;
use crate::isa::id::InstId;
use crate::isa::instruction::fields::{RD, RS1, RS2, VTYPE_I, VTYPE_IV, ZIMM};
use crate::isa::operand::OperandMode::{Read, Write};
use crate::isa::operand::OperandType::{self, Imm, IntReg, VecReg};

/// `vsetvli`: opcode, funct3, and bit 31.
const VSETVLI_MASK: u32 = 0x8000_707F;
/// `vsetivli`: opcode, funct3, and bits 30-31.
const VSETIVLI_MASK: u32 = 0xC000_707F;
/// `vsetvl`: opcode, funct3, and bits 25-31.
const VSETVL_MASK: u32 = 0xFE00_707F;
/// Arithmetic: opcode, funct3, and funct6. The vm bit is left free.
const OPV_MASK: u32 = 0xFC00_707F;
/// `vmv.v.*`: `OPV_MASK` plus vm and a zero vs2 field.
const VMV_MASK: u32 = 0xFFF0_707F;
/// Unit-stride memory: opcode, width, mop, mew, nf, and lumop. vm is free.
const UNIT_STRIDE_MASK: u32 = 0xFDF0_707F;

pub(super) fn entries() -> impl Iterator<Item = InstEntryBuilder> {
    tagged(
        Extension::V,
        [
            InstEntryBuilder::new("vsetvli", InstId::Vsetvli, 0x0000_7057, VSETVLI_MASK, Vector)
                .operand(IntReg, Write, RD)
                .operand(IntReg, Read, RS1)
                .operand(Imm, Read, VTYPE_I),
            InstEntryBuilder::new("vsetivli", InstId::Vsetivli, 0xC000_7057, VSETIVLI_MASK, Vector)
                .operand(IntReg, Write, RD)
                .operand(Imm, Read, ZIMM)
                .operand(Imm, Read, VTYPE_IV),
            InstEntryBuilder::new("vsetvl", InstId::Vsetvl, 0x8000_7057, VSETVL_MASK, Vector)
                .operand(IntReg, Write, RD)
                .operand(IntReg, Read, RS1)
                .operand(IntReg, Read, RS2),
            opv("vadd.vv", InstId::VaddVv, 0x0000_0057, VecReg),
            opv("vadd.vx", InstId::VaddVx, 0x0000_4057, IntReg),
            opv("vadd.vi", InstId::VaddVi, 0x0000_3057, Imm),
            opv("vsub.vv", InstId::VsubVv, 0x0800_0057, VecReg),
            opv("vsub.vx", InstId::VsubVx, 0x0800_4057, IntReg),
            opv("vand.vv", InstId::VandVv, 0x2400_0057, VecReg),
            opv("vor.vv", InstId::VorVv, 0x2800_0057, VecReg),
            opv("vxor.vv", InstId::VxorVv, 0x2C00_0057, VecReg),
            opv("vmul.vv", InstId::VmulVv, 0x9400_2057, VecReg),
            vmv("vmv.v.v", InstId::VmvVV, 0x5E00_0057, VecReg),
            vmv("vmv.v.x", InstId::VmvVX, 0x5E00_4057, IntReg),
            vmv("vmv.v.i", InstId::VmvVI, 0x5E00_3057, Imm),
            unit_load("vle8.v", InstId::Vle8V, 0x0000_0007),
            unit_load("vle16.v", InstId::Vle16V, 0x0000_5007),
            unit_load("vle32.v", InstId::Vle32V, 0x0000_6007),
            unit_load("vle64.v", InstId::Vle64V, 0x0000_7007),
            unit_store("vse8.v", InstId::Vse8V, 0x0000_0027),
            unit_store("vse16.v", InstId::Vse16V, 0x0000_5027),
            unit_store("vse32.v", InstId::Vse32V, 0x0000_6027),
            unit_store("vse64.v", InstId::Vse64V, 0x0000_7027),
        ],
    )
}

/// `vop.v* vd, vs2, {vs1 | rs1 | imm}`.
fn opv(name: &'static str, id: InstId, code: u32, src: OperandType) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, OPV_MASK, Vector)
        .operand(VecReg, Write, RD)
        .operand(VecReg, Read, RS2)
        .operand(src, Read, RS1)
}

/// `vmv.v.* vd, {vs1 | rs1 | imm}`.
fn vmv(name: &'static str, id: InstId, code: u32, src: OperandType) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, VMV_MASK, Vector)
        .operand(VecReg, Write, RD)
        .operand(src, Read, RS1)
}

/// `vle<eew>.v vd, (rs1)`.
fn unit_load(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, UNIT_STRIDE_MASK, Vector)
        .operand(VecReg, Write, RD)
        .operand(IntReg, Read, RS1)
}

/// `vse<eew>.v vs3, (rs1)`.
fn unit_store(name: &'static str, id: InstId, code: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, UNIT_STRIDE_MASK, Vector)
        .operand(VecReg, Read, RD)
        .operand(IntReg, Read, RS1)
}
