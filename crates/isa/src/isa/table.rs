//! Instruction table.
//!
//! The table is the registry the decoder and execute stages consult for
//! instruction metadata. It is built once from the compiled-in catalog and
//! only read afterwards:
//! 1. **By identifier:** Dense slot vector indexed by `InstId`, O(1).
//! 2. **By mnemonic:** Hash index from name to identifier, O(1) average.
//! 3. **Fallback:** Any failed lookup returns the illegal instruction entry;
//!    `has_info*` tells a miss apart from a genuine `illegal` match.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, error, trace};

use crate::common::error::{CatalogError, ConfigError};
use crate::config::{ExtensionSet, IsaConfig};
use crate::isa::catalog::{self, ILLEGAL_NAME};
use crate::isa::entry::{InstEntryBuilder, InstructionEntry};
use crate::isa::id::InstId;

/// Registry of instruction descriptors.
///
/// ```
/// use rvsim_isa::{InstId, InstructionTable};
///
/// let table = InstructionTable::global();
/// let lw = table.get_entry_by_name("lw");
/// assert_eq!(lw.id(), InstId::Lw);
/// assert_eq!(lw.load_size(), 4);
///
/// let missing = table.get_entry_by_name("not_a_real_mnemonic");
/// assert_eq!(missing.id(), InstId::Illegal);
/// assert!(!table.has_info_by_name("not_a_real_mnemonic"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionTable {
    /// One slot per `InstId`; `None` for entries of disabled extensions.
    slots: Vec<Option<InstructionEntry>>,
    by_name: HashMap<&'static str, InstId>,
    illegal: InstructionEntry,
    extensions: ExtensionSet,
}

impl InstructionTable {
    /// Builds a table holding every catalog entry.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in catalog is inconsistent.
    pub fn new() -> Self {
        Self::with_extensions(ExtensionSet::all())
    }

    /// Builds a table holding the catalog entries of the enabled extensions.
    ///
    /// The illegal instruction entry is registered even when `extensions`
    /// is empty.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in catalog is inconsistent. The error is
    /// logged before panicking.
    pub fn with_extensions(extensions: ExtensionSet) -> Self {
        match Self::try_with_extensions(extensions) {
            Ok(table) => table,
            Err(err) => {
                error!(%err, "instruction catalog is inconsistent");
                panic!("instruction catalog is inconsistent: {err}");
            }
        }
    }

    /// Builds a table for `extensions`, returning catalog errors instead of
    /// panicking.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found in the catalog. The whole
    /// catalog is checked, including entries of disabled extensions.
    pub fn try_with_extensions(extensions: ExtensionSet) -> Result<Self, CatalogError> {
        Self::from_builders(catalog::entries(), extensions)
    }

    /// Builds a table for the extensions named by `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the ISA string does not parse.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in catalog is inconsistent.
    pub fn from_config(config: &IsaConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_extensions(config.extensions()?))
    }

    /// Returns the process-wide table with every extension enabled.
    ///
    /// The table is built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in catalog is inconsistent.
    pub fn global() -> &'static Self {
        static TABLE: OnceLock<InstructionTable> = OnceLock::new();
        TABLE.get_or_init(Self::new)
    }

    pub(crate) fn from_builders<I>(
        builders: I,
        extensions: ExtensionSet,
    ) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = InstEntryBuilder>,
    {
        let mut slots: Vec<Option<InstructionEntry>> = vec![None; InstId::COUNT];
        let mut seen_ids: Vec<Option<&'static str>> = vec![None; InstId::COUNT];
        let mut seen_names: HashMap<&'static str, InstId> = HashMap::with_capacity(InstId::COUNT);
        let mut by_name = HashMap::with_capacity(InstId::COUNT);
        let mut skipped = 0_usize;
        let mut skipped_extensions = ExtensionSet::empty();

        for builder in builders {
            let entry = builder.build()?;
            let id = entry.id();
            let name = entry.name();

            if let Some(first) = seen_ids[id.index()].replace(name) {
                return Err(CatalogError::DuplicateId {
                    id,
                    first,
                    second: name,
                });
            }
            if let Some(first) = seen_names.insert(name, id) {
                return Err(CatalogError::DuplicateName {
                    name,
                    first,
                    second: id,
                });
            }
            if id == InstId::Illegal && name != ILLEGAL_NAME {
                return Err(CatalogError::BadSentinel { found: name });
            }

            if id != InstId::Illegal && !extensions.contains(entry.extension()) {
                skipped += 1;
                skipped_extensions.insert(entry.extension());
                continue;
            }
            let _ = by_name.insert(name, id);
            slots[id.index()] = Some(entry);
        }

        let illegal = slots[InstId::Illegal.index()]
            .clone()
            .ok_or(CatalogError::MissingSentinel)?;

        for ext in skipped_extensions.iter() {
            trace!(extension = %ext, "extension disabled, entries skipped");
        }
        debug!(registered = by_name.len(), skipped, "built instruction table");

        Ok(Self {
            slots,
            by_name,
            illegal,
            extensions,
        })
    }

    /// Returns the entry for `id`, or the illegal entry if `id` is not
    /// registered.
    #[inline]
    pub fn get_entry(&self, id: InstId) -> &InstructionEntry {
        self.get_entry_at(id.index())
    }

    /// Returns the entry at raw identifier `index`, or the illegal entry if
    /// `index` is out of range or not registered.
    #[inline]
    pub fn get_entry_at(&self, index: usize) -> &InstructionEntry {
        self.slots
            .get(index)
            .and_then(Option::as_ref)
            .unwrap_or(&self.illegal)
    }

    /// Returns the entry named `name`, or the illegal entry if no such
    /// mnemonic is registered.
    #[inline]
    pub fn get_entry_by_name(&self, name: &str) -> &InstructionEntry {
        self.by_name
            .get(name)
            .map_or(&self.illegal, |&id| self.get_entry(id))
    }

    /// Returns true if `id` is registered.
    #[inline]
    pub fn has_info(&self, id: InstId) -> bool {
        self.has_info_at(id.index())
    }

    /// Returns true if raw identifier `index` is registered.
    #[inline]
    pub fn has_info_at(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    /// Returns true if the mnemonic `name` is registered.
    #[inline]
    pub fn has_info_by_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns the illegal instruction entry.
    pub const fn illegal(&self) -> &InstructionEntry {
        &self.illegal
    }

    /// Returns the extensions this table was built for.
    pub const fn extensions(&self) -> ExtensionSet {
        self.extensions
    }

    /// Returns the number of registered entries, the illegal entry included.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if nothing is registered. Never true for a built table.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Iterates over the registered entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &InstructionEntry> {
        self.slots.iter().flatten()
    }

    /// Serializes every registered entry, in identifier order, as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.iter().collect::<Vec<_>>())
    }
}

impl Default for InstructionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a InstructionTable {
    type Item = &'a InstructionEntry;
    type IntoIter = std::iter::Flatten<std::slice::Iter<'a, Option<InstructionEntry>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter().flatten()
    }
}
