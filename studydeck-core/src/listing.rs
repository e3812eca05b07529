//! The shared filterable-listing pipeline
//!
//! Both catalog views are the same shape: filter a read-only table by the
//! active criteria, then stable-sort by the chosen key. This module holds
//! the generic pieces; the application supplies the record types, their
//! searchable fields, and the per-view sort tables.

use crate::sort::SortKey;

/// A catalog record that can be text-searched.
pub trait Record {
    /// The string fields a text query is matched against.
    fn search_fields(&self) -> impl Iterator<Item = &str>;
}

/// Case-insensitive substring query over a record's searchable fields.
///
/// The empty query matches every record. No tokenization, no fuzzy match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    raw: String,
    folded: String,
}

impl TextQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    pub fn set(&mut self, raw: impl Into<String>) {
        *self = Self::new(raw);
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if self.folded.is_empty() {
            return true;
        }
        record
            .search_fields()
            .any(|field| field.to_lowercase().contains(&self.folded))
    }

    /// Match a single string, for candidate lists that are not records
    /// (the country name search).
    pub fn matches_str(&self, s: &str) -> bool {
        self.folded.is_empty() || s.to_lowercase().contains(&self.folded)
    }
}

/// Dual-bound numeric range with clamped setters.
///
/// Both bounds live in `[floor, ceil]` and keep a minimum separation of one
/// `step`, so `min < max` always holds and each slider handle stays
/// individually draggable without crossing the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedRange {
    min: u32,
    max: u32,
    floor: u32,
    ceil: u32,
    step: u32,
}

impl BoundedRange {
    /// Full-width range over `[floor, ceil]`. Requires `ceil >= floor + step`.
    pub fn new(floor: u32, ceil: u32, step: u32) -> Self {
        debug_assert!(step > 0 && ceil >= floor + step);
        Self {
            min: floor,
            max: ceil,
            floor,
            ceil,
            step,
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    pub fn ceil(&self) -> u32 {
        self.ceil
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Set the lower bound, clamped to `[floor, max - step]`.
    /// Returns `true` if the bound moved.
    pub fn set_min(&mut self, value: u32) -> bool {
        let clamped = value.clamp(self.floor, self.max - self.step);
        let changed = clamped != self.min;
        self.min = clamped;
        changed
    }

    /// Set the upper bound, clamped to `[min + step, ceil]`.
    /// Returns `true` if the bound moved.
    pub fn set_max(&mut self, value: u32) -> bool {
        let clamped = value.clamp(self.min + self.step, self.ceil);
        let changed = clamped != self.max;
        self.max = clamped;
        changed
    }

    /// Whether a value lies within `[min, max]` inclusive.
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether the range spans the whole domain (i.e. filters nothing).
    pub fn is_full(&self) -> bool {
        self.min == self.floor && self.max == self.ceil
    }

    /// Fractional position of a value along `[floor, ceil]`, for rendering
    /// the slider track.
    pub fn ratio(&self, value: u32) -> f64 {
        f64::from(value - self.floor) / f64::from(self.ceil - self.floor)
    }
}

/// Filter a catalog by a predicate, then stable-sort by `key`.
///
/// The result borrows from the catalog: it is always a subset, and records
/// with equal sort keys keep their catalog order (the sort is stable by
/// contract; there is no secondary tie-break).
pub fn compose<'a, R>(
    catalog: &'a [R],
    keep: impl Fn(&R) -> bool,
    key: &SortKey<R>,
) -> Vec<&'a R> {
    let mut rows: Vec<&R> = catalog.iter().filter(|r| keep(r)).collect();
    rows.sort_by(|a, b| (key.cmp)(a, b));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    struct Row {
        name: &'static str,
        place: &'static str,
        score: u32,
    }

    impl Record for Row {
        fn search_fields(&self) -> impl Iterator<Item = &str> {
            [self.name, self.place].into_iter()
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "AI MSc",
                place: "X",
                score: 50,
            },
            Row {
                name: "Law BA",
                place: "Y",
                score: 50,
            },
            Row {
                name: "Data BSc",
                place: "Z",
                score: 80,
            },
        ]
    }

    fn by_score_desc(a: &Row, b: &Row) -> Ordering {
        b.score.cmp(&a.score)
    }

    const SCORE_DESC: SortKey<Row> = SortKey {
        label: "Score",
        cmp: by_score_desc,
    };

    #[test]
    fn empty_query_matches_everything() {
        let q = TextQuery::default();
        assert!(rows().iter().all(|r| q.matches(r)));
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let q = TextQuery::new("ai");
        let rows = rows();
        let hits: Vec<_> = rows.iter().filter(|r| q.matches(*r)).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "AI MSc");
    }

    #[test]
    fn query_matches_any_field() {
        let q = TextQuery::new("z");
        let rows = rows();
        assert!(rows.iter().any(|r| q.matches(r) && r.place == "Z"));
    }

    #[test]
    fn range_setters_clamp_to_gap() {
        let mut range = BoundedRange::new(0, 100_000, 1000);

        // Pushing min past the ceiling clamps to max - step
        assert!(range.set_min(150_000));
        assert_eq!(range.min(), 99_000);
        assert_eq!(range.max(), 100_000);

        // Pulling max under min clamps to min + step
        assert!(range.set_max(0));
        assert_eq!(range.max(), 100_000);
        assert_eq!(range.min(), 99_000);
    }

    #[test]
    fn range_invariant_survives_any_setter_sequence() {
        let mut range = BoundedRange::new(0, 100_000, 1000);
        let probes = [0, 1000, 99_000, 100_000, 42_500, 150_000, 7];
        for (i, &v) in probes.iter().cycle().take(40).enumerate() {
            if i % 2 == 0 {
                range.set_min(v);
            } else {
                range.set_max(v);
            }
            assert!(range.min() < range.max());
            assert!(range.max() - range.min() >= 1000);
            assert!(range.max() <= 100_000);
        }
    }

    #[test]
    fn range_contains_is_inclusive() {
        let mut range = BoundedRange::new(0, 100_000, 1000);
        range.set_min(5000);
        range.set_max(20_000);
        assert!(range.contains(5000));
        assert!(range.contains(20_000));
        assert!(!range.contains(4999));
        assert!(!range.contains(20_001));
    }

    #[test]
    fn compose_filters_then_sorts() {
        let rows = rows();
        let out = compose(&rows, |r| r.score >= 50, &SCORE_DESC);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].name, "Data BSc");
    }

    #[test]
    fn compose_is_stable_for_equal_keys() {
        let rows = rows();
        let out = compose(&rows, |_| true, &SCORE_DESC);
        // AI MSc and Law BA share score 50 and must keep catalog order
        assert_eq!(out[1].name, "AI MSc");
        assert_eq!(out[2].name, "Law BA");
    }

    #[test]
    fn compose_result_is_subset() {
        let rows = rows();
        let out = compose(&rows, |r| r.name.contains("BA"), &SCORE_DESC);
        assert_eq!(out.len(), 1);
        assert!(out
            .iter()
            .all(|r| rows.iter().any(|c| std::ptr::eq(*r, c))));
    }
}
