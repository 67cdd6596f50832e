//! Lookup and validation over the generated binding table
//!
//! The registry indexes a static binding slice (normally
//! [`crate::ids::BINDINGS`]) for case-insensitive name resolution and
//! reverse ID lookup, and exposes the table-health checks the
//! generation contract promises: no duplicate value within a category,
//! and symbol hashes agreeing with their bound IDs wherever the
//! authoring object name survived sanitization unchanged.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::hash::id_from_name;
use crate::{Category, UniqueId};

/// One symbol/ID pair from the generated table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Symbol exactly as generated
    pub symbol: &'static str,
    /// Bound identifier
    pub id: UniqueId,
    /// Section the symbol came from
    pub category: Category,
}

impl Binding {
    /// Build a table entry
    #[must_use]
    pub const fn new(symbol: &'static str, id: UniqueId, category: Category) -> Self {
        Self {
            symbol,
            id,
            category,
        }
    }
}

/// Indexed view over a binding table
///
/// Cheap to build, immutable afterwards. Name lookups are
/// case-insensitive; the first table entry wins when two symbols
/// differ only in case.
pub struct IdRegistry {
    bindings: &'static [Binding],
    by_name: HashMap<String, usize>,
    by_category_id: HashMap<(Category, u32), usize>,
}

impl IdRegistry {
    /// Index a binding table
    #[must_use]
    pub fn new(bindings: &'static [Binding]) -> Self {
        let mut by_name = HashMap::with_capacity(bindings.len());
        let mut by_category_id = HashMap::with_capacity(bindings.len());

        for (index, binding) in bindings.iter().enumerate() {
            by_name.entry(binding.symbol.to_lowercase()).or_insert(index);
            by_category_id
                .entry((binding.category, binding.id.value()))
                .or_insert(index);
        }

        Self {
            bindings,
            by_name,
            by_category_id,
        }
    }

    /// Registry over the table shipped with this crate
    pub fn global() -> &'static Self {
        static REGISTRY: OnceLock<IdRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            let registry = Self::new(crate::ids::BINDINGS);
            log::debug!("indexed {} generated bindings", registry.len());
            registry
        })
    }

    /// The underlying table, in declaration order
    #[must_use]
    pub const fn bindings(&self) -> &'static [Binding] {
        self.bindings
    }

    /// Number of bindings in the table
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Resolve a symbol to its binding, ignoring case
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Binding> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&index| &self.bindings[index])
    }

    /// Find the binding carrying `id` within one category
    #[must_use]
    pub fn lookup_in(&self, category: Category, id: UniqueId) -> Option<&Binding> {
        self.by_category_id
            .get(&(category, id.value()))
            .map(|&index| &self.bindings[index])
    }

    /// Find any binding carrying `id`, searching in table order
    #[must_use]
    pub fn lookup(&self, id: UniqueId) -> Option<&Binding> {
        self.bindings.iter().find(|binding| binding.id == id)
    }

    /// All bindings of one category, in table order
    pub fn category(&self, category: Category) -> impl Iterator<Item = &Binding> {
        self.bindings
            .iter()
            .filter(move |binding| binding.category == category)
    }

    /// Same-category symbol groups sharing one ID value
    ///
    /// Empty on a healthy table: the authoring tool guarantees
    /// per-category uniqueness when it regenerates the header.
    #[must_use]
    pub fn duplicate_values(&self) -> Vec<(Category, UniqueId, Vec<&'static str>)> {
        let mut groups: HashMap<(Category, u32), Vec<&'static str>> = HashMap::new();
        for binding in self.bindings {
            groups
                .entry((binding.category, binding.id.value()))
                .or_default()
                .push(binding.symbol);
        }

        let mut duplicates: Vec<_> = groups
            .into_iter()
            .filter(|(_, symbols)| symbols.len() > 1)
            .map(|((category, value), symbols)| (category, UniqueId::new(value), symbols))
            .collect();
        duplicates.sort_by_key(|&(_, id, _)| id);
        duplicates
    }

    /// Bindings whose ID is not the hash of their own symbol
    ///
    /// The authoring tool hashes the object name, not the sanitized
    /// symbol; objects named with spaces or punctuation land here.
    #[must_use]
    pub fn unhashable_symbols(&self) -> Vec<&Binding> {
        self.bindings
            .iter()
            .filter(|binding| id_from_name(binding.symbol) != binding.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids;

    #[test]
    fn test_resolve_is_case_insensitive() {
        let registry = IdRegistry::global();
        let binding = registry.resolve("play_explosion").unwrap();
        assert_eq!(binding.id, ids::events::PLAY_EXPLOSION);
        assert_eq!(binding.category, Category::Event);
        assert_eq!(
            registry.resolve("Play_Explosion").unwrap().symbol,
            "PLAY_EXPLOSION"
        );
    }

    #[test]
    fn test_resolve_unknown_name() {
        assert!(IdRegistry::global().resolve("PLAY_MISSINGNO").is_none());
    }

    #[test]
    fn test_reverse_lookup() {
        let registry = IdRegistry::global();
        let binding = registry.lookup(UniqueId::new(1355168291)).unwrap();
        assert_eq!(binding.symbol, "INIT");
        assert_eq!(binding.category, Category::Bank);

        assert!(registry
            .lookup_in(Category::Event, UniqueId::new(1355168291))
            .is_none());
        assert!(registry
            .lookup_in(Category::Bank, UniqueId::new(1355168291))
            .is_some());
    }

    #[test]
    fn test_category_counts() {
        let registry = IdRegistry::global();
        assert_eq!(registry.category(Category::Event).count(), 10);
        assert_eq!(registry.category(Category::StateGroup).count(), 1);
        assert_eq!(registry.category(Category::State).count(), 1);
        assert_eq!(registry.category(Category::GameParameter).count(), 12);
        assert_eq!(registry.category(Category::Bank).count(), 2);
        assert_eq!(registry.category(Category::Bus).count(), 1);
        assert_eq!(registry.category(Category::AudioDevice).count(), 2);
        assert_eq!(registry.len(), 29);
    }

    #[test]
    fn test_no_duplicate_values_per_category() {
        assert!(IdRegistry::global().duplicate_values().is_empty());
    }

    #[test]
    fn test_symbol_hashes_match_ids() {
        // Every symbol hashes to its own ID except the master bus,
        // whose authoring object is named "Master Audio Bus".
        let flagged = IdRegistry::global().unhashable_symbols();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].symbol, "MASTER_AUDIO_BUS");
    }

    #[test]
    fn test_duplicate_detection_finds_collisions() {
        static COLLIDING: &[Binding] = &[
            Binding::new("FIRST", UniqueId::new(7), Category::Event),
            Binding::new("SECOND", UniqueId::new(7), Category::Event),
            Binding::new("ELSEWHERE", UniqueId::new(7), Category::Bank),
        ];
        let registry = IdRegistry::new(COLLIDING);
        let duplicates = registry.duplicate_values();
        assert_eq!(duplicates.len(), 1);
        let (category, id, symbols) = &duplicates[0];
        assert_eq!(*category, Category::Event);
        assert_eq!(*id, UniqueId::new(7));
        assert_eq!(symbols, &vec!["FIRST", "SECOND"]);
    }
}
