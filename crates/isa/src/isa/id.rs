//! Instruction identifiers.
//!
//! Every instruction variant in the catalog has a distinct [`InstId`]. The
//! numeric value of an identifier is its slot in the instruction table, and
//! `InstId::Illegal` is always slot 0.

use serde::Serialize;

/// Declares `InstId` together with its index-ordered variant list.
macro_rules! inst_ids {
    ($($variant:ident),+ $(,)?) => {
        /// Identifier of an instruction variant.
        ///
        /// Variants are named after the mnemonic in upper camel case, with
        /// `.` separators dropped (`fcvt.w.s` is `FcvtWS`, `c.addi` is `CAddi`).
        /// Distinct identifiers may share an encoding (ISA aliasing).
        #[allow(missing_docs)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[repr(u16)]
        pub enum InstId {
            $($variant),+
        }

        impl InstId {
            /// Every identifier, in index order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];
        }
    };
}

inst_ids! {
    Illegal,

    // RV64I
    Lui, Auipc, Jal, Jalr,
    Beq, Bne, Blt, Bge, Bltu, Bgeu,
    Lb, Lh, Lw, Ld, Lbu, Lhu, Lwu,
    Sb, Sh, Sw, Sd,
    Addi, Slti, Sltiu, Xori, Ori, Andi, Slli, Srli, Srai,
    Add, Sub, Sll, Slt, Sltu, Xor, Srl, Sra, Or, And,
    Fence, Ecall, Ebreak, Uret, Sret, Mret, Dret, Wfi, SfenceVma,
    Addiw, Slliw, Srliw, Sraiw,
    Addw, Subw, Sllw, Srlw, Sraw,

    // Zifencei, Zicsr
    FenceI,
    Csrrw, Csrrs, Csrrc, Csrrwi, Csrrsi, Csrrci,

    // M
    Mul, Mulh, Mulhsu, Mulhu, Div, Divu, Rem, Remu,
    Mulw, Divw, Divuw, Remw, Remuw,

    // A
    LrW, ScW, AmoswapW, AmoaddW, AmoxorW, AmoandW, AmoorW,
    AmominW, AmomaxW, AmominuW, AmomaxuW,
    LrD, ScD, AmoswapD, AmoaddD, AmoxorD, AmoandD, AmoorD,
    AmominD, AmomaxD, AmominuD, AmomaxuD,

    // F
    Flw, Fsw, FmaddS, FmsubS, FnmsubS, FnmaddS,
    FaddS, FsubS, FmulS, FdivS, FsqrtS,
    FsgnjS, FsgnjnS, FsgnjxS, FminS, FmaxS,
    FcvtWS, FcvtWuS, FmvXW, FeqS, FltS, FleS, FclassS,
    FcvtSW, FcvtSWu, FmvWX,
    FcvtLS, FcvtLuS, FcvtSL, FcvtSLu,

    // D
    Fld, Fsd, FmaddD, FmsubD, FnmsubD, FnmaddD,
    FaddD, FsubD, FmulD, FdivD, FsqrtD,
    FsgnjD, FsgnjnD, FsgnjxD, FminD, FmaxD,
    FcvtSD, FcvtDS, FeqD, FltD, FleD, FclassD,
    FcvtWD, FcvtWuD, FcvtDW, FcvtDWu,
    FcvtLD, FcvtLuD, FmvXD, FcvtDL, FcvtDLu, FmvDX,

    // C
    CAddi4spn, CFld, CLw, CFlw, CLd, CFsd, CSw, CFsw, CSd,
    CNop, CAddi, CJal, CAddiw, CLi, CAddi16sp, CLui,
    CSrli, CSrai, CAndi, CSub, CXor, COr, CAnd, CSubw, CAddw,
    CJ, CBeqz, CBnez,
    CSlli, CFldsp, CLwsp, CFlwsp, CLdsp,
    CJr, CMv, CEbreak, CJalr, CAdd,
    CFsdsp, CSwsp, CFswsp, CSdsp,

    // Zba
    AddUw, Sh1add, Sh2add, Sh3add, Sh1addUw, Sh2addUw, Sh3addUw, SlliUw,

    // Zbb
    Andn, Orn, Xnor, Clz, Ctz, Cpop, Clzw, Ctzw, Cpopw,
    Max, Maxu, Min, Minu, SextB, SextH, ZextH,
    Rol, Ror, Rori, Rolw, Rorw, Roriw, OrcB, Rev8,

    // Zbc
    Clmul, Clmulr, Clmulh,

    // Zbe
    Bcompress, Bdecompress, Bcompressw, Bdecompressw,

    // Zbf
    Bfp, Bfpw,

    // Zbm
    Bmator, Bmatxor, Bmatflip,

    // Zbp
    Pack, Packu, Packh, Packw, Packuw,
    Grev, Grevi, Gorc, Gorci, Shfl, Unshfl, Shfli, Unshfli,
    XpermN, XpermB, XpermH, XpermW,

    // Zbr
    Crc32B, Crc32H, Crc32W, Crc32D, Crc32cB, Crc32cH, Crc32cW, Crc32cD,

    // Zbs
    Bclr, Bclri, Bext, Bexti, Binv, Binvi, Bset, Bseti,

    // Zbt
    Cmix, Cmov, Fsl, Fsr, Fsri, Fslw, Fsrw, Fsriw,

    // V
    Vsetvli, Vsetivli, Vsetvl,
    VaddVv, VaddVx, VaddVi, VsubVv, VsubVx,
    VandVv, VorVv, VxorVv, VmulVv,
    VmvVV, VmvVX, VmvVI,
    Vle8V, Vle16V, Vle32V, Vle64V,
    Vse8V, Vse16V, Vse32V, Vse64V,
}

impl InstId {
    /// Number of identifiers.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the table slot of this identifier.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the identifier stored in table slot `index`, if any.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
