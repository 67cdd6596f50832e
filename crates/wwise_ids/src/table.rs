//! In-memory model of a generated identifier table
//!
//! [`IdTable`] is what the header parser produces and the writers
//! consume. Entries keep their declaration order so a parse/write
//! cycle reproduces the source artifact exactly.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::hash::id_from_name;
use crate::{Category, UniqueId};

/// Single name/ID pair within one section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdEntry {
    /// Symbol as written in the header
    pub name: String,
    /// Bound identifier
    pub id: UniqueId,
}

impl IdEntry {
    /// Build an entry from a symbol and raw ID value
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id: UniqueId::new(id),
        }
    }
}

/// State group with its nested states
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateGroupEntry {
    /// Group symbol
    pub name: String,
    /// Group identifier
    pub id: UniqueId,
    /// States declared inside the group
    pub states: Vec<IdEntry>,
}

impl StateGroupEntry {
    /// Build a group with no states yet
    pub fn new(name: impl Into<String>, id: u32) -> Self {
        Self {
            name: name.into(),
            id: UniqueId::new(id),
            states: Vec::new(),
        }
    }
}

/// Complete identifier table, one field per header section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTable {
    /// EVENTS section
    pub events: Vec<IdEntry>,
    /// STATES section (groups with nested states)
    pub state_groups: Vec<StateGroupEntry>,
    /// GAME_PARAMETERS section
    pub game_parameters: Vec<IdEntry>,
    /// BANKS section
    pub banks: Vec<IdEntry>,
    /// BUSSES section
    pub busses: Vec<IdEntry>,
    /// AUDIO_DEVICES section
    pub audio_devices: Vec<IdEntry>,
}

impl IdTable {
    /// Number of bindings across all sections
    ///
    /// State groups and their states both count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings().len()
    }

    /// Whether the table holds no bindings at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
            && self.state_groups.is_empty()
            && self.game_parameters.is_empty()
            && self.banks.is_empty()
            && self.busses.is_empty()
            && self.audio_devices.is_empty()
    }

    /// Flatten to (symbol, id, category) tuples in declaration order
    #[must_use]
    pub fn bindings(&self) -> Vec<(&str, UniqueId, Category)> {
        let mut bindings = Vec::new();
        for entry in &self.events {
            bindings.push((entry.name.as_str(), entry.id, Category::Event));
        }
        for group in &self.state_groups {
            bindings.push((group.name.as_str(), group.id, Category::StateGroup));
            for state in &group.states {
                bindings.push((state.name.as_str(), state.id, Category::State));
            }
        }
        for entry in &self.game_parameters {
            bindings.push((entry.name.as_str(), entry.id, Category::GameParameter));
        }
        for entry in &self.banks {
            bindings.push((entry.name.as_str(), entry.id, Category::Bank));
        }
        for entry in &self.busses {
            bindings.push((entry.name.as_str(), entry.id, Category::Bus));
        }
        for entry in &self.audio_devices {
            bindings.push((entry.name.as_str(), entry.id, Category::AudioDevice));
        }
        bindings
    }

    /// Same-category symbol groups sharing one ID value
    ///
    /// Empty for any table the authoring tool generated; a hit means
    /// the artifact was edited by hand or corrupted.
    #[must_use]
    pub fn duplicate_values(&self) -> Vec<(Category, UniqueId, Vec<String>)> {
        use std::collections::HashMap;

        let mut groups: HashMap<(Category, u32), Vec<String>> = HashMap::new();
        for (name, id, category) in self.bindings() {
            groups
                .entry((category, id.value()))
                .or_default()
                .push(name.to_string());
        }

        let mut duplicates: Vec<_> = groups
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .map(|((category, value), names)| (category, UniqueId::new(value), names))
            .collect();
        duplicates.sort_by_key(|&(_, id, _)| id);
        duplicates
    }

    /// Symbols whose ID is not the hash of the symbol itself
    ///
    /// Expected for objects the authoring tool knows under a name the
    /// symbol sanitizer had to rewrite (spaces, punctuation).
    #[must_use]
    pub fn unhashable_symbols(&self) -> Vec<(&str, UniqueId)> {
        self.bindings()
            .into_iter()
            .filter(|&(name, id, _)| id_from_name(name) != id)
            .map(|(name, id, _)| (name, id))
            .collect()
    }

    /// Serialize the table model as pretty RON
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, Default::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Serialize the table model as pretty TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> IdTable {
        let mut group = StateGroupEntry::new("SOUNDEFFECTSTATES", 1216687119);
        group.states.push(IdEntry::new("NONE", 748895195));

        IdTable {
            events: vec![IdEntry::new("PLAY_EXPLOSION", 4030404899)],
            state_groups: vec![group],
            game_parameters: vec![IdEntry::new("SS_AIR_RPM", 822163944)],
            banks: vec![IdEntry::new("INIT", 1355168291)],
            busses: vec![IdEntry::new("MASTER_AUDIO_BUS", 3803692087)],
            audio_devices: vec![IdEntry::new("SYSTEM", 3859886410)],
        }
    }

    #[test]
    fn test_binding_order_and_len() {
        let table = sample_table();
        assert_eq!(table.len(), 7);
        assert!(!table.is_empty());

        let bindings = table.bindings();
        assert_eq!(bindings[0].0, "PLAY_EXPLOSION");
        assert_eq!(bindings[1], ("SOUNDEFFECTSTATES", UniqueId::new(1216687119), Category::StateGroup));
        assert_eq!(bindings[2].2, Category::State);
        assert_eq!(bindings[6], ("SYSTEM", UniqueId::new(3859886410), Category::AudioDevice));
    }

    #[test]
    fn test_empty_table() {
        let table = IdTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert!(table.duplicate_values().is_empty());
    }

    #[test]
    fn test_duplicates_are_per_category() {
        let mut table = sample_table();
        // Same value in another category is not a collision.
        table.banks.push(IdEntry::new("EXPLOSION_BANK", 4030404899));
        assert!(table.duplicate_values().is_empty());

        // Same value in the same category is.
        table.events.push(IdEntry::new("PLAY_EXPLOSION_COPY", 4030404899));
        let duplicates = table.duplicate_values();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].0, Category::Event);
        assert_eq!(duplicates[0].2.len(), 2);
    }

    #[test]
    fn test_unhashable_symbols() {
        let table = sample_table();
        let flagged = table.unhashable_symbols();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].0, "MASTER_AUDIO_BUS");
    }

    #[test]
    fn test_ron_round_trip() {
        let table = sample_table();
        let text = table.to_ron_string().unwrap();
        let parsed: IdTable = ron::from_str(&text).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn test_toml_round_trip() {
        let table = sample_table();
        let text = table.to_toml_string().unwrap();
        let parsed: IdTable = toml::from_str(&text).unwrap();
        assert_eq!(parsed, table);
    }
}
