//! Filter option sets derived from the fetched records.
//!
//! The dropdowns list the distinct levels (ascending) and the distinct nations
//! and types in the order they first appear. Only displayable records
//! contribute, so every option selects at least one visible card.

use crate::domain::{Category, Vehicle};
use std::collections::{BTreeSet, HashMap};

/// Insertion-ordered `key → label` map.
///
/// Iteration follows first insertion. Re-inserting an existing key keeps the
/// original position and label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelIndex {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl LabelIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a category unless its key is already present.
    ///
    /// A blank label is stored as the key. Returns `true` if the key was new.
    pub fn insert(&mut self, category: &Category) -> bool {
        if self.positions.contains_key(&category.key) {
            return false;
        }
        let label = if category.label.trim().is_empty() {
            category.key.clone()
        } else {
            category.label.clone()
        };
        self.positions.insert(category.key.clone(), self.entries.len());
        self.entries.push((category.key.clone(), label));
        true
    }

    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.positions
            .get(key)
            .map(|&position| self.entries[position].1.as_str())
    }

    /// Iterates `(key, label)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, label)| (key.as_str(), label.as_str()))
    }

    /// Iterates keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.iter().map(|(key, _)| key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three option sets that populate the filter controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSets {
    levels: Vec<u32>,
    nations: LabelIndex,
    kinds: LabelIndex,
}

impl OptionSets {
    /// Derives option sets from a record collection in one pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use fleetview::catalog::OptionSets;
    /// use fleetview::domain::{Category, Vehicle};
    ///
    /// let make = |title: &str, level| Vehicle {
    ///     title: title.to_string(),
    ///     description: "d".to_string(),
    ///     icon: String::new(),
    ///     level,
    ///     kind: Category::new("DD", "Destroyer"),
    ///     nation: Category::new("RU", "Russia"),
    /// };
    ///
    /// let options = OptionSets::derive(&[make("A", 5), make("", 3)]);
    /// assert_eq!(options.levels(), &[5]);
    /// ```
    #[must_use]
    pub fn derive(vehicles: &[Vehicle]) -> Self {
        let mut levels = BTreeSet::new();
        let mut nations = LabelIndex::new();
        let mut kinds = LabelIndex::new();

        for vehicle in vehicles.iter().filter(|vehicle| vehicle.is_displayable()) {
            levels.insert(vehicle.level);
            nations.insert(&vehicle.nation);
            kinds.insert(&vehicle.kind);
        }

        tracing::debug!(
            levels = levels.len(),
            nations = nations.len(),
            kinds = kinds.len(),
            "filter options derived"
        );

        Self {
            levels: levels.into_iter().collect(),
            nations,
            kinds,
        }
    }

    /// Distinct levels, ascending.
    #[must_use]
    pub fn levels(&self) -> &[u32] {
        &self.levels
    }

    #[must_use]
    pub const fn nations(&self) -> &LabelIndex {
        &self.nations
    }

    #[must_use]
    pub const fn kinds(&self) -> &LabelIndex {
        &self.kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(title: &str, description: &str, level: u32, nation: (&str, &str), kind: (&str, &str)) -> Vehicle {
        Vehicle {
            title: title.to_string(),
            description: description.to_string(),
            icon: String::new(),
            level,
            kind: Category::new(kind.0, kind.1),
            nation: Category::new(nation.0, nation.1),
        }
    }

    #[test]
    fn invalid_records_do_not_contribute() {
        let vehicles = vec![
            vehicle("A", "d", 5, ("RU", "Russia"), ("DD", "Destroyer")),
            vehicle("", "d2", 3, ("JP", "Japan"), ("CA", "Cruiser")),
        ];
        let options = OptionSets::derive(&vehicles);

        assert_eq!(options.levels(), &[5]);
        assert_eq!(options.nations().iter().collect::<Vec<_>>(), vec![("RU", "Russia")]);
        assert_eq!(options.kinds().iter().collect::<Vec<_>>(), vec![("DD", "Destroyer")]);
    }

    #[test]
    fn levels_are_sorted_numerically() {
        let vehicles: Vec<Vehicle> = [10, 2, 7, 2, 1]
            .into_iter()
            .map(|level| vehicle("A", "d", level, ("RU", "Russia"), ("DD", "Destroyer")))
            .collect();
        assert_eq!(OptionSets::derive(&vehicles).levels(), &[1, 2, 7, 10]);
    }

    #[test]
    fn categories_keep_first_seen_order_and_label() {
        let vehicles = vec![
            vehicle("A", "d", 1, ("uk", "U.K."), ("BB", "Battleship")),
            vehicle("B", "d", 1, ("usa", "U.S.A."), ("CV", "Carrier")),
            vehicle("C", "d", 1, ("uk", "Britain"), ("BB", "Battleship")),
            vehicle("D", "d", 1, ("france", "France"), ("DD", "Destroyer")),
        ];
        let options = OptionSets::derive(&vehicles);

        let nations: Vec<(&str, &str)> = options.nations().iter().collect();
        assert_eq!(nations, vec![("uk", "U.K."), ("usa", "U.S.A."), ("france", "France")]);
        assert_eq!(options.nations().label("uk"), Some("U.K."));

        let kinds: Vec<&String> = options.kinds().keys().collect();
        assert_eq!(kinds, vec!["BB", "CV", "DD"]);
    }

    #[test]
    fn label_index_rejects_duplicate_keys() {
        let mut index = LabelIndex::new();
        assert!(index.insert(&Category::new("a", "first")));
        assert!(!index.insert(&Category::new("a", "second")));
        assert_eq!(index.len(), 1);
        assert_eq!(index.label("a"), Some("first"));
        assert_eq!(index.label("b"), None);
    }

    #[test]
    fn blank_labels_are_stored_as_keys() {
        let mut index = LabelIndex::new();
        index.insert(&Category::new("ussr", ""));
        index.insert(&Category::new("japan", "  "));
        assert_eq!(index.iter().collect::<Vec<_>>(), vec![("ussr", "ussr"), ("japan", "japan")]);
    }

    #[test]
    fn empty_input_gives_empty_sets() {
        let options = OptionSets::derive(&[]);
        assert!(options.levels().is_empty());
        assert!(options.nations().is_empty());
        assert!(options.kinds().is_empty());
    }
}
