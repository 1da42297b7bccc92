//! Single- and double-precision floating point (F, D).

use super::{fp_arith, fp_compare, fp_convert, fp_fixed, fp_fused, fp_move, load, store, tagged};
use crate::config::Extension;
use crate::isa::entry::InstEntryBuilder;
use crate::isa::id::InstId;
use crate::isa::operand::OperandType::{FpReg, IntReg};

pub(super) fn entries() -> impl Iterator<Item = InstEntryBuilder> {
    tagged(Extension::F, single()).chain(tagged(Extension::D, double()))
}

fn single() -> Vec<InstEntryBuilder> {
    vec![
        load("flw", InstId::Flw, 0x0000_2007, FpReg, 4),
        store("fsw", InstId::Fsw, 0x0000_2027, FpReg, 4),
        fp_fused("fmadd.s", InstId::FmaddS, 0x0000_0043),
        fp_fused("fmsub.s", InstId::FmsubS, 0x0000_0047),
        fp_fused("fnmsub.s", InstId::FnmsubS, 0x0000_004B),
        fp_fused("fnmadd.s", InstId::FnmaddS, 0x0000_004F),
        fp_arith("fadd.s", InstId::FaddS, 0x0000_0053),
        fp_arith("fsub.s", InstId::FsubS, 0x0800_0053),
        fp_arith("fmul.s", InstId::FmulS, 0x1000_0053),
        fp_arith("fdiv.s", InstId::FdivS, 0x1800_0053),
        fp_convert("fsqrt.s", InstId::FsqrtS, 0x5800_0053, FpReg, FpReg),
        fp_fixed("fsgnj.s", InstId::FsgnjS, 0x2000_0053),
        fp_fixed("fsgnjn.s", InstId::FsgnjnS, 0x2000_1053),
        fp_fixed("fsgnjx.s", InstId::FsgnjxS, 0x2000_2053),
        fp_fixed("fmin.s", InstId::FminS, 0x2800_0053),
        fp_fixed("fmax.s", InstId::FmaxS, 0x2800_1053),
        fp_convert("fcvt.w.s", InstId::FcvtWS, 0xC000_0053, IntReg, FpReg),
        fp_convert("fcvt.wu.s", InstId::FcvtWuS, 0xC010_0053, IntReg, FpReg).unsigned(),
        fp_move("fmv.x.w", InstId::FmvXW, 0xE000_0053, IntReg, FpReg),
        fp_compare("feq.s", InstId::FeqS, 0xA000_2053),
        fp_compare("flt.s", InstId::FltS, 0xA000_1053),
        fp_compare("fle.s", InstId::FleS, 0xA000_0053),
        fp_move("fclass.s", InstId::FclassS, 0xE000_1053, IntReg, FpReg),
        fp_convert("fcvt.s.w", InstId::FcvtSW, 0xD000_0053, FpReg, IntReg),
        fp_convert("fcvt.s.wu", InstId::FcvtSWu, 0xD010_0053, FpReg, IntReg).unsigned(),
        fp_move("fmv.w.x", InstId::FmvWX, 0xF000_0053, FpReg, IntReg),
        fp_convert("fcvt.l.s", InstId::FcvtLS, 0xC020_0053, IntReg, FpReg),
        fp_convert("fcvt.lu.s", InstId::FcvtLuS, 0xC030_0053, IntReg, FpReg).unsigned(),
        fp_convert("fcvt.s.l", InstId::FcvtSL, 0xD020_0053, FpReg, IntReg),
        fp_convert("fcvt.s.lu", InstId::FcvtSLu, 0xD030_0053, FpReg, IntReg).unsigned(),
    ]
}

fn double() -> Vec<InstEntryBuilder> {
    vec![
        load("fld", InstId::Fld, 0x0000_3007, FpReg, 8),
        store("fsd", InstId::Fsd, 0x0000_3027, FpReg, 8),
        fp_fused("fmadd.d", InstId::FmaddD, 0x0200_0043),
        fp_fused("fmsub.d", InstId::FmsubD, 0x0200_0047),
        fp_fused("fnmsub.d", InstId::FnmsubD, 0x0200_004B),
        fp_fused("fnmadd.d", InstId::FnmaddD, 0x0200_004F),
        fp_arith("fadd.d", InstId::FaddD, 0x0200_0053),
        fp_arith("fsub.d", InstId::FsubD, 0x0A00_0053),
        fp_arith("fmul.d", InstId::FmulD, 0x1200_0053),
        fp_arith("fdiv.d", InstId::FdivD, 0x1A00_0053),
        fp_convert("fsqrt.d", InstId::FsqrtD, 0x5A00_0053, FpReg, FpReg),
        fp_fixed("fsgnj.d", InstId::FsgnjD, 0x2200_0053),
        fp_fixed("fsgnjn.d", InstId::FsgnjnD, 0x2200_1053),
        fp_fixed("fsgnjx.d", InstId::FsgnjxD, 0x2200_2053),
        fp_fixed("fmin.d", InstId::FminD, 0x2A00_0053),
        fp_fixed("fmax.d", InstId::FmaxD, 0x2A00_1053),
        fp_convert("fcvt.s.d", InstId::FcvtSD, 0x4010_0053, FpReg, FpReg),
        fp_convert("fcvt.d.s", InstId::FcvtDS, 0x4200_0053, FpReg, FpReg),
        fp_compare("feq.d", InstId::FeqD, 0xA200_2053),
        fp_compare("flt.d", InstId::FltD, 0xA200_1053),
        fp_compare("fle.d", InstId::FleD, 0xA200_0053),
        fp_move("fclass.d", InstId::FclassD, 0xE200_1053, IntReg, FpReg),
        fp_convert("fcvt.w.d", InstId::FcvtWD, 0xC200_0053, IntReg, FpReg),
        fp_convert("fcvt.wu.d", InstId::FcvtWuD, 0xC210_0053, IntReg, FpReg).unsigned(),
        fp_convert("fcvt.d.w", InstId::FcvtDW, 0xD200_0053, FpReg, IntReg),
        fp_convert("fcvt.d.wu", InstId::FcvtDWu, 0xD210_0053, FpReg, IntReg).unsigned(),
        fp_convert("fcvt.l.d", InstId::FcvtLD, 0xC220_0053, IntReg, FpReg),
        fp_convert("fcvt.lu.d", InstId::FcvtLuD, 0xC230_0053, IntReg, FpReg).unsigned(),
        fp_move("fmv.x.d", InstId::FmvXD, 0xE200_0053, IntReg, FpReg),
        fp_convert("fcvt.d.l", InstId::FcvtDL, 0xD220_0053, FpReg, IntReg),
        fp_convert("fcvt.d.lu", InstId::FcvtDLu, 0xD230_0053, FpReg, IntReg).unsigned(),
        fp_move("fmv.d.x", InstId::FmvDX, 0xF200_0053, FpReg, IntReg),
    ]
}
