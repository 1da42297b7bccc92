//! Shared helpers for the instruction table tests.

use rvsim_isa::{InstId, InstructionEntry, InstructionTable};
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber writing through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Encode an R-type instruction.
pub const fn r_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, rs2: u32, funct7: u32) -> u32 {
    (funct7 & 0x7F) << 25
        | (rs2 & 0x1F) << 20
        | (rs1 & 0x1F) << 15
        | (funct3 & 0x7) << 12
        | (rd & 0x1F) << 7
        | (opcode & 0x7F)
}

/// Encode an I-type instruction.
pub const fn i_type(opcode: u32, rd: u32, funct3: u32, rs1: u32, imm: i32) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    imm_bits << 20 | (rs1 & 0x1F) << 15 | (funct3 & 0x7) << 12 | (rd & 0x1F) << 7 | (opcode & 0x7F)
}

/// Identifiers of every registered entry whose fixed bits match `word`.
pub fn matching_ids(table: &InstructionTable, word: u32) -> Vec<InstId> {
    table
        .iter()
        .filter(|entry| entry.matches(word))
        .map(InstructionEntry::id)
        .collect()
}
