//! Catalog-wide invariants.
//!
//! Every registered entry must describe a well-formed encoding: fixed bits
//! inside the code mask, operand fields disjoint from the fixed bits and from
//! each other, and flags that agree with the category.

use rvsim_isa::{InstId, InstructionTable};
use rvsim_isa::config::Extension;
use rvsim_isa::isa::category::InstructionCategory;
use rvsim_isa::isa::instruction::{instruction_size, is_compressed_inst, is_full_size_inst};
use rvsim_isa::isa::operand::{MAX_OPERANDS, OperandMode, OperandType};

use crate::common::{i_type, matching_ids, r_type};

#[test]
fn test_code_within_mask() {
    for entry in InstructionTable::global() {
        assert_eq!(entry.code() & entry.code_mask(), entry.code(), "{}", entry.name());
        assert!(entry.matches(entry.code()), "{}", entry.name());
    }
}

#[test]
fn test_operand_masks_disjoint() {
    for entry in InstructionTable::global() {
        for i in 0..entry.operand_count() {
            assert_eq!(
                entry.operand_mask(i) & entry.code_mask(),
                0,
                "{} operand {i} overlaps code mask",
                entry.name()
            );
            assert_ne!(entry.operand_mask(i), 0, "{} operand {i} has no bits", entry.name());
            for j in i + 1..entry.operand_count() {
                assert_eq!(
                    entry.operand_mask(i) & entry.operand_mask(j),
                    0,
                    "{} operands {i} and {j} overlap",
                    entry.name()
                );
            }
        }
    }
}

#[test]
fn test_operand_slots_contiguous() {
    for entry in InstructionTable::global() {
        let count = entry.operand_count();
        assert!(count <= MAX_OPERANDS);
        assert_eq!(entry.operands().len(), count);
        for i in 0..count {
            assert_ne!(entry.operand_type(i), OperandType::None, "{}", entry.name());
            assert_ne!(entry.operand_mode(i), OperandMode::None, "{}", entry.name());
        }
        for i in count..=MAX_OPERANDS {
            assert_eq!(entry.operand_type(i), OperandType::None);
            assert_eq!(entry.operand_mode(i), OperandMode::None);
            assert_eq!(entry.operand_mask(i), 0);
            assert!(entry.operand(i).is_none());
        }
    }
}

#[test]
fn test_load_store_sizes_follow_category() {
    for entry in InstructionTable::global() {
        assert_eq!(entry.is_load(), entry.load_size() > 0, "{}", entry.name());
        assert_eq!(entry.is_store(), entry.store_size() > 0, "{}", entry.name());
        assert!(!(entry.is_load() && entry.is_store()), "{}", entry.name());
        if entry.is_load() || entry.is_store() {
            let size = entry.load_size().max(entry.store_size());
            assert!(matches!(size, 1 | 2 | 4 | 8), "{} size {size}", entry.name());
        }
    }
}

#[test]
fn test_branch_flags_imply_branch_category() {
    for entry in InstructionTable::global() {
        if entry.is_conditional_branch() || entry.is_branch_to_register() {
            assert!(entry.is_branch(), "{}", entry.name());
        }
        assert!(!(entry.is_conditional_branch() && entry.is_branch_to_register()));
    }
}

#[test]
fn test_bit_manipulation_follows_category() {
    for entry in InstructionTable::global() {
        assert_eq!(
            entry.is_bit_manipulation(),
            entry.category().is_bit_manipulation(),
            "{}",
            entry.name()
        );
        let zb = matches!(
            entry.extension(),
            Extension::Zba
                | Extension::Zbb
                | Extension::Zbc
                | Extension::Zbe
                | Extension::Zbf
                | Extension::Zbm
                | Extension::Zbp
                | Extension::Zbr
                | Extension::Zbs
                | Extension::Zbt
        );
        assert_eq!(entry.is_bit_manipulation(), zb, "{}", entry.name());
    }
}

#[test]
fn test_encoding_size_follows_extension() {
    for entry in InstructionTable::global() {
        let compressed = entry.extension() == Extension::C;
        assert_eq!(entry.is_compressed(), compressed, "{}", entry.name());
        assert_eq!(entry.size(), if compressed { 2 } else { 4 }, "{}", entry.name());
        if compressed {
            assert_eq!(entry.code_mask() >> 16, 0, "{}", entry.name());
        }
    }
}

#[test]
fn test_vector_and_atomic_memory_ops_have_no_size() {
    for entry in InstructionTable::global() {
        if matches!(entry.category(), InstructionCategory::Vector | InstructionCategory::Atomic) {
            assert_eq!(entry.load_size(), 0, "{}", entry.name());
            assert_eq!(entry.store_size(), 0, "{}", entry.name());
        }
    }
}

#[test]
fn test_size_helpers() {
    assert!(is_full_size_inst(0x0000_0013));
    assert!(is_compressed_inst(0x0001));
    assert!(is_compressed_inst(0x4082));
    assert_eq!(instruction_size(0x00C5_8533), 4);
    assert_eq!(instruction_size(0x0000_8082), 2);
}

#[test]
fn test_encoded_words_resolve_to_single_entry() {
    let table = InstructionTable::global();
    // add a0, a1, a2
    assert_eq!(matching_ids(table, r_type(0x33, 10, 0, 11, 12, 0)), vec![InstId::Add]);
    // sub a0, a1, a2
    assert_eq!(matching_ids(table, r_type(0x33, 10, 0, 11, 12, 0x20)), vec![InstId::Sub]);
    // mul t0, t1, t2
    assert_eq!(matching_ids(table, r_type(0x33, 5, 0, 6, 7, 0x01)), vec![InstId::Mul]);
    // lw ra, 8(sp)
    assert_eq!(matching_ids(table, i_type(0x03, 1, 2, 2, 8)), vec![InstId::Lw]);
    // addi sp, sp, -16
    assert_eq!(matching_ids(table, i_type(0x13, 2, 0, 2, -16)), vec![InstId::Addi]);
}

#[test]
fn test_all_zero_word_is_illegal_or_reserved_compressed() {
    let ids = matching_ids(InstructionTable::global(), 0);
    assert!(ids.contains(&InstId::Illegal));
    // Quadrant 0 with funct3 = 0 is c.addi4spn's encoding space.
    assert_eq!(ids, vec![InstId::Illegal, InstId::CAddi4spn]);
}
