//! Instruction table lookup tests.
//!
//! Verifies identifier and mnemonic lookup, the illegal-instruction fallback,
//! extension filtering, and the JSON export.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;
use rvsim_isa::config::{Extension, ExtensionSet, IsaConfig};
use rvsim_isa::{InstId, InstructionEntry, InstructionTable};
use serde_json::Value;

use crate::common::init_tracing;

// ──────────────────────────────────────────────────────────
// Lookup
// ──────────────────────────────────────────────────────────

#[test]
fn test_every_id_has_info_in_full_table() {
    init_tracing();
    let table = InstructionTable::new();
    for &id in InstId::ALL {
        assert!(table.has_info(id), "{id:?} missing");
        assert_eq!(table.get_entry(id).id(), id);
    }
    assert_eq!(table.len(), InstId::COUNT);
    assert!(!table.is_empty());
}

#[test]
fn test_id_and_name_lookups_agree() {
    let table = InstructionTable::global();
    for entry in table {
        assert_eq!(table.get_entry(entry.id()).name(), entry.name());
        assert_eq!(table.get_entry_by_name(entry.name()).id(), entry.id());
        assert!(table.has_info_by_name(entry.name()));
        assert_eq!(table.get_entry_at(entry.id().index()), entry);
    }
}

#[test]
fn test_unknown_mnemonic_falls_back_to_illegal() {
    let table = InstructionTable::global();
    assert!(!table.has_info_by_name("not_a_real_mnemonic"));
    let entry = table.get_entry_by_name("not_a_real_mnemonic");
    assert_eq!(entry.id(), InstId::Illegal);
    assert_eq!(entry, table.illegal());
}

#[test]
fn test_illegal_is_registered_and_found() {
    let table = InstructionTable::global();
    assert!(table.has_info(InstId::Illegal));
    assert!(table.has_info_by_name("illegal"));
    let illegal = table.get_entry(InstId::Illegal);
    assert_eq!(illegal.name(), "illegal");
    assert_eq!(illegal.code(), 0);
    assert_eq!(illegal.code_mask(), 0xFFFF_FFFF);
    assert_eq!(illegal.operand_count(), 0);
    assert_eq!(illegal.size(), 4);
    assert!(!illegal.is_compressed());
    assert!(illegal.matches(0));
    assert!(!illegal.matches(0x0000_0013));
}

#[test]
fn test_mnemonics_are_case_sensitive() {
    let table = InstructionTable::global();
    assert!(table.has_info_by_name("add"));
    assert!(!table.has_info_by_name("ADD"));
    assert!(!table.has_info_by_name(" add"));
    assert!(!table.has_info_by_name(""));
}

#[test]
fn test_global_is_shared() {
    assert!(std::ptr::eq(InstructionTable::global(), InstructionTable::global()));
}

proptest! {
    #[test]
    fn prop_out_of_range_index_is_not_found(index in InstId::COUNT..usize::MAX) {
        let table = InstructionTable::global();
        prop_assert!(!table.has_info_at(index));
        prop_assert_eq!(table.get_entry_at(index).id(), InstId::Illegal);
    }

    #[test]
    fn prop_in_range_index_round_trips(index in 0..InstId::COUNT) {
        let table = InstructionTable::global();
        prop_assert!(table.has_info_at(index));
        prop_assert_eq!(table.get_entry_at(index).id().index(), index);
    }

    // Mnemonics are lower case, so upper-case strings never match.
    #[test]
    fn prop_unregistered_name_is_not_found(name in "[A-Z_][A-Z0-9_]{0,15}") {
        let table = InstructionTable::global();
        prop_assert!(!table.has_info_by_name(&name));
        prop_assert_eq!(table.get_entry_by_name(&name).id(), InstId::Illegal);
    }
}

// ──────────────────────────────────────────────────────────
// Concurrent reads
// ──────────────────────────────────────────────────────────

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_table_and_entries_are_send_sync() {
    assert_send_sync::<InstructionTable>();
    assert_send_sync::<InstructionEntry>();
    assert_send_sync::<&'static InstructionTable>();
}

#[test]
fn test_global_reads_agree_across_threads() {
    const NAMES: [&str; 6] = ["add", "lw", "c.addi", "fmadd.d", "vadd.vv", "not_a_real_mnemonic"];

    let snapshots: Vec<Vec<(InstId, u32, u32)>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let table = InstructionTable::global();
                    let mut seen = Vec::new();
                    for name in NAMES {
                        let entry = table.get_entry_by_name(name);
                        assert_eq!(table.get_entry(entry.id()), entry);
                        seen.push((entry.id(), entry.code(), entry.code_mask()));
                    }
                    for &id in InstId::ALL {
                        let entry = table.get_entry(id);
                        seen.push((entry.id(), entry.code(), entry.code_mask()));
                    }
                    seen
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let first = &snapshots[0];
    assert_eq!(first[NAMES.len() - 1].0, InstId::Illegal);
    for snapshot in &snapshots[1..] {
        assert_eq!(snapshot, first);
    }
}

// ──────────────────────────────────────────────────────────
// Construction
// ──────────────────────────────────────────────────────────

#[test]
fn test_construction_is_deterministic() {
    init_tracing();
    let first = InstructionTable::new();
    let second = InstructionTable::default();
    assert_eq!(first, second);
    for &id in InstId::ALL {
        assert_eq!(first.get_entry(id), second.get_entry(id));
    }
    assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
}

#[test]
fn test_compiled_catalog_has_no_errors() {
    assert!(InstructionTable::try_with_extensions(ExtensionSet::all()).is_ok());
    assert!(InstructionTable::try_with_extensions(ExtensionSet::empty()).is_ok());
}

#[test]
fn test_empty_extension_set_keeps_only_illegal() {
    init_tracing();
    let table = InstructionTable::with_extensions(ExtensionSet::empty());
    assert_eq!(table.len(), 1);
    assert!(table.has_info(InstId::Illegal));
    assert!(!table.has_info(InstId::Add));
    assert_eq!(table.iter().map(InstructionEntry::id).collect::<Vec<_>>(), vec![InstId::Illegal]);
}

#[rstest]
#[case(InstId::Mul, "mul")]
#[case(InstId::Csrrw, "csrrw")]
#[case(InstId::FenceI, "fence.i")]
#[case(InstId::CAddi, "c.addi")]
#[case(InstId::FaddD, "fadd.d")]
#[case(InstId::Andn, "andn")]
#[case(InstId::VaddVv, "vadd.vv")]
fn test_base_only_table_hides_extensions(#[case] id: InstId, #[case] name: &str) {
    let table = InstructionTable::with_extensions(ExtensionSet::empty().with(Extension::I));
    assert!(!table.has_info(id));
    assert!(!table.has_info_by_name(name));
    assert_eq!(table.get_entry(id).id(), InstId::Illegal);
    assert_eq!(table.get_entry_by_name(name).id(), InstId::Illegal);
    assert!(table.has_info(InstId::Add));
}

#[test]
fn test_filtered_entries_belong_to_enabled_extensions() {
    let extensions = ExtensionSet::from_isa_string("rv64gc").unwrap();
    let table = InstructionTable::with_extensions(extensions);
    assert_eq!(table.extensions(), extensions);
    for entry in &table {
        assert!(extensions.contains(entry.extension()), "{} leaked", entry.name());
    }
    let full = InstructionTable::global();
    let expected = full.iter().filter(|e| extensions.contains(e.extension())).count();
    assert_eq!(table.len(), expected);
}

#[test]
fn test_from_config() {
    init_tracing();
    let config = IsaConfig::from_json(r#"{ "isa": "rv64gc_zbb" }"#).unwrap();
    let table = InstructionTable::from_config(&config).unwrap();
    assert!(table.has_info_by_name("c.addi"));
    assert!(table.has_info_by_name("andn"));
    assert!(table.has_info_by_name("csrrw"));
    assert!(!table.has_info_by_name("sh1add"));
    assert!(!table.has_info_by_name("vadd.vv"));
}

#[test]
fn test_from_config_rejects_bad_isa() {
    let config = IsaConfig {
        isa: "arm64".to_string(),
    };
    assert!(InstructionTable::from_config(&config).is_err());
}

// ──────────────────────────────────────────────────────────
// JSON export
// ──────────────────────────────────────────────────────────

#[test]
fn test_to_json_lists_registered_entries_in_id_order() {
    let table = InstructionTable::with_extensions(ExtensionSet::from_isa_string("rv64im").unwrap());
    let json: Value = serde_json::from_str(&table.to_json().unwrap()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), table.len());
    assert_eq!(entries[0]["name"], "illegal");
    assert_eq!(entries[0]["id"], "Illegal");

    let names: Vec<&str> = entries.iter().map(|e| e["name"].as_str().unwrap()).collect();
    let expected: Vec<&str> = table.iter().map(InstructionEntry::name).collect();
    assert_eq!(names, expected);
    assert!(names.contains(&"mul"));
    assert!(!names.contains(&"csrrw"));
}

#[test]
fn test_to_json_entry_shape() {
    let json: Value = serde_json::from_str(&InstructionTable::global().to_json().unwrap()).unwrap();
    let lw = json
        .as_array()
        .unwrap()
        .iter()
        .find(|e| e["name"] == "lw")
        .unwrap();
    assert_eq!(lw["id"], "Lw");
    assert_eq!(lw["extension"], "I");
    assert_eq!(lw["category"], "Load");
    assert_eq!(lw["code"], 0x2003);
    assert_eq!(lw["code_mask"], 0x707F);
    assert_eq!(lw["load_size"], 4);
    assert_eq!(lw["store_size"], 0);
    assert_eq!(lw["is_unsigned"], false);
    let operands = lw["operands"].as_array().unwrap();
    assert_eq!(operands.len(), 3);
    assert_eq!(operands[0]["kind"], "IntReg");
    assert_eq!(operands[0]["mode"], "Write");
    assert_eq!(operands[0]["mask"], 0xF80);
    assert_eq!(operands[2]["kind"], "Imm");
}
