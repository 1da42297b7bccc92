//! Integer multiply and divide (M).

use super::{r_type, tagged};
use crate::config::Extension;
use crate::isa::category::InstructionCategory::{Divide, Multiply};
use crate::isa::entry::InstEntryBuilder;
use crate::isa::id::InstId;

pub(super) fn entries() -> impl Iterator<Item = InstEntryBuilder> {
    tagged(
        Extension::M,
        [
            r_type("mul", InstId::Mul, 0x0200_0033, Multiply),
            r_type("mulh", InstId::Mulh, 0x0200_1033, Multiply),
            r_type("mulhsu", InstId::Mulhsu, 0x0200_2033, Multiply),
            r_type("mulhu", InstId::Mulhu, 0x0200_3033, Multiply).unsigned(),
            r_type("div", InstId::Div, 0x0200_4033, Divide),
            r_type("divu", InstId::Divu, 0x0200_5033, Divide).unsigned(),
            r_type("rem", InstId::Rem, 0x0200_6033, Divide),
            r_type("remu", InstId::Remu, 0x0200_7033, Divide).unsigned(),
            r_type("mulw", InstId::Mulw, 0x0200_003B, Multiply),
            r_type("divw", InstId::Divw, 0x0200_403B, Divide),
            r_type("divuw", InstId::Divuw, 0x0200_503B, Divide).unsigned(),
            r_type("remw", InstId::Remw, 0x0200_603B, Divide),
            r_type("remuw", InstId::Remuw, 0x0200_703B, Divide).unsigned(),
        ],
    )
}
