//! Compressed encodings shared between RV32 and RV64 readings.
//!
//! Each pair occupies one quadrant slot with identical code and mask but
//! distinct identifiers and mnemonics. The table keeps both; choosing one is
//! up to the decoder.

use rstest::rstest;
use rvsim_isa::{InstId, InstructionTable};

use crate::common::matching_ids;

#[rstest]
#[case(InstId::CJal, InstId::CAddiw)]
#[case(InstId::CFlw, InstId::CLd)]
#[case(InstId::CFsw, InstId::CSd)]
#[case(InstId::CFlwsp, InstId::CLdsp)]
#[case(InstId::CFswsp, InstId::CSdsp)]
fn test_alias_pairs_share_encoding(#[case] rv32: InstId, #[case] rv64: InstId) {
    let table = InstructionTable::global();
    let a = table.get_entry(rv32);
    let b = table.get_entry(rv64);
    assert!(table.has_info(rv32));
    assert!(table.has_info(rv64));
    assert_ne!(a.id(), b.id());
    assert_ne!(a.name(), b.name());
    assert_eq!(a.code(), b.code());
    assert_eq!(a.code_mask(), b.code_mask());
    assert_eq!(table.get_entry_by_name(a.name()).id(), rv32);
    assert_eq!(table.get_entry_by_name(b.name()).id(), rv64);

    let ids = matching_ids(table, a.code());
    assert!(ids.contains(&rv32) && ids.contains(&rv64), "{ids:?}");
}

#[test]
fn test_alias_pairs_differ_in_semantics() {
    let table = InstructionTable::global();
    let c_flw = table.get_entry(InstId::CFlw);
    let c_ld = table.get_entry(InstId::CLd);
    assert_eq!(c_flw.load_size(), 4);
    assert_eq!(c_ld.load_size(), 8);

    let c_jal = table.get_entry(InstId::CJal);
    let c_addiw = table.get_entry(InstId::CAddiw);
    assert!(c_jal.is_branch());
    assert!(!c_addiw.is_branch());
}

#[test]
fn test_c_ebreak_and_c_jalr_and_c_add_nest() {
    let table = InstructionTable::global();
    // c.ebreak: every bit fixed.
    assert_eq!(matching_ids(table, 0x9002), vec![InstId::CEbreak, InstId::CJalr, InstId::CAdd]);
    // c.jalr ra: rs2 field zero.
    assert_eq!(matching_ids(table, 0x9082), vec![InstId::CJalr, InstId::CAdd]);
    // c.add a0, a1: only the CR form matches.
    assert_eq!(matching_ids(table, 0x952E), vec![InstId::CAdd]);
}

#[test]
fn test_disabling_compressed_hides_both_readings() {
    let table = InstructionTable::from_config(
        &rvsim_isa::IsaConfig::from_json(r#"{ "isa": "rv64g" }"#).unwrap(),
    )
    .unwrap();
    assert!(!table.has_info(InstId::CJal));
    assert!(!table.has_info(InstId::CAddiw));
    assert!(matching_ids(&table, 0x2001).is_empty());
}
