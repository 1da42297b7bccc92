//! Configuration for the instruction table.
//!
//! This module decides which parts of the compiled-in catalog are registered.
//! It provides:
//! 1. **Extensions:** The ISA extensions an instruction can belong to.
//! 2. **Extension sets:** A compact bit set of enabled extensions.
//! 3. **Config:** A serde-deserializable ISA string, parsed into an extension set.
//!
//! Configuration is supplied as JSON (`IsaConfig::from_json`) or use
//! `IsaConfig::default()` for the full catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::error::ConfigError;

/// Default configuration constants.
mod defaults {
    /// ISA string enabling every extension the catalog knows.
    pub const ISA: &str = "rv64gcv_zba_zbb_zbc_zbe_zbf_zbm_zbp_zbr_zbs_zbt";
}

/// RISC-V ISA extension that defines an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Extension {
    /// Base integer instruction set.
    I,
    /// Integer multiply and divide.
    M,
    /// Atomic memory operations.
    A,
    /// Single-precision floating point.
    F,
    /// Double-precision floating point.
    D,
    /// Compressed 16-bit encodings.
    C,
    /// Vector operations.
    V,
    /// Control and status register access.
    Zicsr,
    /// Instruction fetch fence.
    Zifencei,
    /// Address generation.
    Zba,
    /// Basic bit manipulation.
    Zbb,
    /// Carry-less multiplication.
    Zbc,
    /// Bit compress and decompress.
    Zbe,
    /// Bit-field place.
    Zbf,
    /// Bit matrix operations.
    Zbm,
    /// Bit permutation.
    Zbp,
    /// Cyclic redundancy checks.
    Zbr,
    /// Single-bit operations.
    Zbs,
    /// Ternary bit operations.
    Zbt,
}

impl Extension {
    /// Every extension, in declaration order.
    pub const ALL: [Self; 19] = [
        Self::I,
        Self::M,
        Self::A,
        Self::F,
        Self::D,
        Self::C,
        Self::V,
        Self::Zicsr,
        Self::Zifencei,
        Self::Zba,
        Self::Zbb,
        Self::Zbc,
        Self::Zbe,
        Self::Zbf,
        Self::Zbm,
        Self::Zbp,
        Self::Zbr,
        Self::Zbs,
        Self::Zbt,
    ];

    /// Lower-case name as written in an ISA string.
    pub const fn isa_name(self) -> &'static str {
        match self {
            Self::I => "i",
            Self::M => "m",
            Self::A => "a",
            Self::F => "f",
            Self::D => "d",
            Self::C => "c",
            Self::V => "v",
            Self::Zicsr => "zicsr",
            Self::Zifencei => "zifencei",
            Self::Zba => "zba",
            Self::Zbb => "zbb",
            Self::Zbc => "zbc",
            Self::Zbe => "zbe",
            Self::Zbf => "zbf",
            Self::Zbm => "zbm",
            Self::Zbp => "zbp",
            Self::Zbr => "zbr",
            Self::Zbs => "zbs",
            Self::Zbt => "zbt",
        }
    }

    /// Finds the single-letter extension named by `letter`.
    fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'i' => Some(Self::I),
            'm' => Some(Self::M),
            'a' => Some(Self::A),
            'f' => Some(Self::F),
            'd' => Some(Self::D),
            'c' => Some(Self::C),
            'v' => Some(Self::V),
            _ => None,
        }
    }

    /// Finds the multi-letter extension named by `name`.
    fn from_multi_letter(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ext| ext.isa_name().len() > 1 && ext.isa_name() == name)
    }

    #[inline]
    const fn bit(self) -> u32 {
        1 << self as u32
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.isa_name())
    }
}

/// Set of enabled extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExtensionSet(u32);

impl ExtensionSet {
    /// Extensions implied by the `g` shorthand.
    const GENERAL: [Extension; 7] = [
        Extension::I,
        Extension::M,
        Extension::A,
        Extension::F,
        Extension::D,
        Extension::Zicsr,
        Extension::Zifencei,
    ];

    /// Returns a set with no extensions enabled.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Returns a set with every extension enabled.
    pub fn all() -> Self {
        Extension::ALL.into_iter().collect()
    }

    /// Returns a copy of this set with `ext` added.
    #[must_use]
    pub const fn with(self, ext: Extension) -> Self {
        Self(self.0 | ext.bit())
    }

    /// Adds `ext` to the set.
    pub const fn insert(&mut self, ext: Extension) {
        self.0 |= ext.bit();
    }

    /// Returns true if `ext` is enabled.
    #[inline]
    pub const fn contains(self, ext: Extension) -> bool {
        self.0 & ext.bit() != 0
    }

    /// Returns true if no extension is enabled.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the enabled extensions in declaration order.
    pub fn iter(self) -> impl Iterator<Item = Extension> {
        Extension::ALL.into_iter().filter(move |ext| self.contains(*ext))
    }

    /// Parses an ISA string such as `rv64imac_zicsr_zba`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the prefix is not `rv32`/`rv64`, an
    /// extension is unknown, a `_` segment is empty, or no base integer set
    /// (`i` or `g`) is named.
    pub fn from_isa_string(isa: &str) -> Result<Self, ConfigError> {
        let lower = isa.trim().to_ascii_lowercase();
        let rest = lower
            .strip_prefix("rv64")
            .or_else(|| lower.strip_prefix("rv32"))
            .ok_or_else(|| ConfigError::BadPrefix(isa.to_string()))?;

        let mut segments = rest.split('_');
        let mut set = Self::empty();

        // First segment holds the single-letter extensions.
        for letter in segments.next().unwrap_or_default().chars() {
            if letter == 'g' {
                for ext in Self::GENERAL {
                    set.insert(ext);
                }
                continue;
            }
            let ext = Extension::from_letter(letter)
                .ok_or_else(|| ConfigError::UnknownExtension(letter.to_string()))?;
            set.insert(ext);
        }

        for segment in segments {
            if segment.is_empty() {
                return Err(ConfigError::EmptySegment(isa.to_string()));
            }
            let ext = Extension::from_multi_letter(segment)
                .ok_or_else(|| ConfigError::UnknownExtension(segment.to_string()))?;
            set.insert(ext);
        }

        if !set.contains(Extension::I) {
            return Err(ConfigError::MissingBase(isa.to_string()));
        }
        Ok(set)
    }
}

impl FromIterator<Extension> for ExtensionSet {
    fn from_iter<T: IntoIterator<Item = Extension>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

/// Instruction table configuration.
///
/// # Example JSON
///
/// ```
/// use rvsim_isa::config::{Extension, IsaConfig};
///
/// let config = IsaConfig::from_json(r#"{ "isa": "rv64imac_zba" }"#)?;
/// let extensions = config.extensions()?;
/// assert!(extensions.contains(Extension::Zba));
/// assert!(!extensions.contains(Extension::F));
/// # Ok::<(), rvsim_isa::common::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IsaConfig {
    /// ISA string naming the enabled extensions (e.g. `rv64gc_zba_zbb`).
    #[serde(default = "IsaConfig::default_isa")]
    pub isa: String,
}

impl IsaConfig {
    /// Returns the default ISA string.
    fn default_isa() -> String {
        defaults::ISA.to_string()
    }

    /// Deserializes a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses the configured ISA string into an extension set.
    ///
    /// # Errors
    ///
    /// See [`ExtensionSet::from_isa_string`].
    pub fn extensions(&self) -> Result<ExtensionSet, ConfigError> {
        ExtensionSet::from_isa_string(&self.isa)
    }
}

impl Default for IsaConfig {
    fn default() -> Self {
        Self {
            isa: Self::default_isa(),
        }
    }
}
