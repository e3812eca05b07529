//! Ordered multi-select over keyed items
//!
//! Backs the destination filter: a small, ordered set of chosen countries,
//! unique by code, with insertion order preserved for the chip strip.

use std::fmt::Debug;

/// An item addressable by a stable key (a country by its 2-letter code).
pub trait Keyed {
    type Key: PartialEq + Clone + Debug;

    fn key(&self) -> Self::Key;
}

/// Ordered set of selected items, unique by key.
///
/// Cardinality is bounded (a few dozen at most), so membership checks are a
/// linear scan.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelect<T: Keyed> {
    items: Vec<T>,
}

impl<T: Keyed> Default for MultiSelect<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Keyed> MultiSelect<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.items.iter().any(|i| i.key() == *key)
    }

    /// If an item with this key is selected, remove it; otherwise append.
    /// Applying `toggle` twice with the same item restores the prior state.
    /// Returns `true` if the item is selected afterwards.
    pub fn toggle(&mut self, item: T) -> bool {
        let key = item.key();
        if self.contains(&key) {
            self.remove(&key);
            false
        } else {
            self.items.push(item);
            true
        }
    }

    /// Remove by key regardless of position. Returns `true` if removed.
    pub fn remove(&mut self, key: &T::Key) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.key() != *key);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}
