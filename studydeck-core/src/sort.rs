//! Named sort keys
//!
//! Each view exposes a fixed table of named comparators. Sorting is stable:
//! records with equal keys keep their pre-sort order. That is an explicit
//! contract (there is no secondary tie-break), relied on by the pipeline in
//! [`crate::listing::compose`].

use std::cmp::Ordering;

/// A named comparator over records of type `R`.
pub struct SortKey<R> {
    /// Label shown in the sort menu (e.g. "Tuition Fee (Low to High)").
    pub label: &'static str,
    /// The comparator. Missing optional fields are the comparator's problem:
    /// default them to 0 or a late-sort sentinel, never fail.
    pub cmp: fn(&R, &R) -> Ordering,
}

// Manual impls: derive would put a Clone/Debug bound on R.
impl<R> Clone for SortKey<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for SortKey<R> {}

impl<R> std::fmt::Debug for SortKey<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortKey").field("label", &self.label).finish()
    }
}

/// Labels of a sort table, for rendering the menu.
pub fn labels<R>(table: &[SortKey<R>]) -> Vec<String> {
    table.iter().map(|k| k.label.to_string()).collect()
}
