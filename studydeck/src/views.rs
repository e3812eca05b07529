//! Per-view sort tables and the visible-results pipelines

use std::cmp::Ordering;

use studydeck_core::{compose, MultiSelect, SortKey, TextQuery};

use crate::catalog::{Country, Course, University, RANK_SENTINEL};
use crate::state::{AppState, BrowseState, View};

fn course_popularity(a: &Course, b: &Course) -> Ordering {
    b.popularity.unwrap_or(0).cmp(&a.popularity.unwrap_or(0))
}

fn course_ranking(a: &Course, b: &Course) -> Ordering {
    a.ranking
        .unwrap_or(RANK_SENTINEL)
        .cmp(&b.ranking.unwrap_or(RANK_SENTINEL))
}

fn course_fee_asc(a: &Course, b: &Course) -> Ordering {
    a.fee().cmp(&b.fee())
}

fn course_fee_desc(a: &Course, b: &Course) -> Ordering {
    b.fee().cmp(&a.fee())
}

pub const COURSE_SORTS: [SortKey<Course>; 4] = [
    SortKey {
        label: "Popularity",
        cmp: course_popularity,
    },
    SortKey {
        label: "Rankings",
        cmp: course_ranking,
    },
    SortKey {
        label: "Tuition Fee (Low to High)",
        cmp: course_fee_asc,
    },
    SortKey {
        label: "Tuition Fee (High to Low)",
        cmp: course_fee_desc,
    },
];

fn university_popularity(a: &University, b: &University) -> Ordering {
    b.popularity.unwrap_or(0).cmp(&a.popularity.unwrap_or(0))
}

fn university_ranking(a: &University, b: &University) -> Ordering {
    a.ranking
        .unwrap_or(RANK_SENTINEL)
        .cmp(&b.ranking.unwrap_or(RANK_SENTINEL))
}

fn university_name_asc(a: &University, b: &University) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

fn university_name_desc(a: &University, b: &University) -> Ordering {
    b.name.to_lowercase().cmp(&a.name.to_lowercase())
}

pub const UNIVERSITY_SORTS: [SortKey<University>; 4] = [
    SortKey {
        label: "Popularity",
        cmp: university_popularity,
    },
    SortKey {
        label: "Ranking",
        cmp: university_ranking,
    },
    SortKey {
        label: "University Name (A-Z)",
        cmp: university_name_asc,
    },
    SortKey {
        label: "University Name (Z-A)",
        cmp: university_name_desc,
    },
];

pub fn sort_labels(view: View) -> Vec<String> {
    match view {
        View::Courses => studydeck_core::sort::labels(&COURSE_SORTS),
        View::Universities => studydeck_core::sort::labels(&UNIVERSITY_SORTS),
    }
}

pub fn sort_count(view: View) -> usize {
    match view {
        View::Courses => COURSE_SORTS.len(),
        View::Universities => UNIVERSITY_SORTS.len(),
    }
}

pub fn active_sort_label(state: &AppState) -> &'static str {
    match state.view {
        View::Courses => COURSE_SORTS[state.browse.sort_index.min(COURSE_SORTS.len() - 1)].label,
        View::Universities => {
            UNIVERSITY_SORTS[state.browse.sort_index.min(UNIVERSITY_SORTS.len() - 1)].label
        }
    }
}

/// Whether a record's location matches the destination selection. An empty
/// selection matches everything; otherwise the location must contain any
/// selected country's name.
pub fn destination_matches(location: &str, destinations: &MultiSelect<Country>) -> bool {
    destinations.is_empty() || destinations.iter().any(|c| location.contains(&c.name))
}

/// Courses surviving the active filters, sorted.
///
/// Destination chips are deliberately not part of the predicate here: on
/// this view they are a selection UI only and never narrow the results.
/// See [`visible_universities`] for the filtering counterpart.
pub fn visible_courses<'a>(catalog: &'a [Course], b: &BrowseState) -> Vec<&'a Course> {
    let key = &COURSE_SORTS[b.sort_index.min(COURSE_SORTS.len() - 1)];
    compose(
        catalog,
        |c| b.query.matches(c) && b.fee.contains(c.fee()) && b.scholarship.admits(c.scholarship),
        key,
    )
}

/// Universities surviving the active filters, sorted.
pub fn visible_universities<'a>(
    catalog: &'a [University],
    b: &BrowseState,
) -> Vec<&'a University> {
    let key = &UNIVERSITY_SORTS[b.sort_index.min(UNIVERSITY_SORTS.len() - 1)];
    compose(
        catalog,
        |u| b.query.matches(u) && destination_matches(&u.location, &b.destinations),
        key,
    )
}

/// Country candidates for a name query, in catalog order.
pub fn search_countries<'a>(countries: &'a [Country], query: &TextQuery) -> Vec<&'a Country> {
    countries
        .iter()
        .filter(|c| query.matches_str(&c.name))
        .collect()
}

/// Candidates for the destination panel's search box.
pub fn dest_candidates(state: &AppState) -> Vec<&Country> {
    search_countries(&state.catalog.countries, &state.browse.dest_query)
}

/// Candidates for the header's location autocomplete.
pub fn location_candidates(state: &AppState) -> Vec<&Country> {
    search_countries(&state.catalog.countries, &state.header.location_query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::state::Scholarship;
    use studydeck_core::Keyed;

    fn catalog() -> Catalog {
        Catalog::load_embedded().unwrap()
    }

    #[test]
    fn default_state_shows_whole_catalog() {
        let catalog = catalog();
        let b = BrowseState::default();
        assert_eq!(visible_courses(&catalog.courses, &b).len(), catalog.courses.len());
        assert_eq!(
            visible_universities(&catalog.universities, &b).len(),
            catalog.universities.len()
        );
    }

    #[test]
    fn default_sort_is_popularity_descending() {
        let catalog = catalog();
        let b = BrowseState::default();
        let shown = visible_courses(&catalog.courses, &b);
        for pair in shown.windows(2) {
            assert!(pair[0].popularity.unwrap_or(0) >= pair[1].popularity.unwrap_or(0));
        }
    }

    #[test]
    fn equal_popularity_keeps_catalog_order() {
        let catalog = catalog();
        let b = BrowseState::default();
        let shown = visible_courses(&catalog.courses, &b);
        // Courses 6, 10 and 11 tie on popularity; stability keeps id order
        let tied: Vec<u32> = shown
            .iter()
            .filter(|c| c.popularity == Some(88) || c.popularity == Some(72))
            .map(|c| c.id)
            .collect();
        assert_eq!(tied, vec![4, 6, 10, 11]);
    }

    #[test]
    fn fee_sort_treats_missing_as_zero() {
        let catalog = catalog();
        let mut b = BrowseState::default();
        b.sort_index = 2;
        let shown = visible_courses(&catalog.courses, &b);
        for pair in shown.windows(2) {
            assert!(pair[0].fee() <= pair[1].fee());
        }
    }

    #[test]
    fn ranking_sorts_unranked_last() {
        let catalog = catalog();
        let mut b = BrowseState::default();
        b.sort_index = 1;
        let shown = visible_universities(&catalog.universities, &b);
        assert_eq!(shown.last().unwrap().name, "Trinity College Dublin");
    }

    #[test]
    fn text_query_narrows_by_title_or_university() {
        let catalog = catalog();
        let mut b = BrowseState::default();
        b.query.set("imperial");
        let shown = visible_courses(&catalog.courses, &b);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "MSc Artificial Intelligence");
    }

    #[test]
    fn fee_range_filters_inclusively() {
        let catalog = catalog();
        let mut b = BrowseState::default();
        b.fee.set_min(11_000);
        b.fee.set_max(30_000);
        let shown = visible_courses(&catalog.courses, &b);
        assert!(shown.iter().all(|c| c.fee() >= 11_000 && c.fee() <= 30_000));
        assert!(shown.iter().any(|c| c.fee() == 11_000));
        assert!(shown.iter().any(|c| c.fee() == 30_000));
    }

    #[test]
    fn scholarship_filter_splits_catalog() {
        let catalog = catalog();
        let mut b = BrowseState::default();

        b.scholarship = Scholarship::Yes;
        let yes = visible_courses(&catalog.courses, &b).len();
        b.scholarship = Scholarship::No;
        let no = visible_courses(&catalog.courses, &b).len();

        assert_eq!(yes + no, catalog.courses.len());
        assert!(yes > 0 && no > 0);
    }

    #[test]
    fn destinations_narrow_universities() {
        let catalog = catalog();
        let mut b = BrowseState::default();
        let uk = catalog
            .countries
            .iter()
            .find(|c| c.name == "United Kingdom")
            .unwrap();
        b.destinations.toggle(uk.clone());

        let shown = visible_universities(&catalog.universities, &b);
        assert_eq!(shown.len(), 2);
        assert!(shown.iter().all(|u| u.location.contains("United Kingdom")));
    }

    #[test]
    fn destinations_do_not_narrow_courses() {
        let catalog = catalog();
        let mut b = BrowseState::default();
        let uk = catalog
            .countries
            .iter()
            .find(|c| c.name == "United Kingdom")
            .unwrap();
        b.destinations.toggle(uk.clone());

        let shown = visible_courses(&catalog.courses, &b);
        assert_eq!(shown.len(), catalog.courses.len());
    }

    #[test]
    fn country_search_is_case_insensitive_substring() {
        let catalog = catalog();
        let q = TextQuery::new("united");
        let hits = search_countries(&catalog.countries, &q);
        let names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["United States", "United Kingdom", "United Arab Emirates"]
        );
    }

    #[test]
    fn country_search_can_come_up_empty() {
        let catalog = catalog();
        let q = TextQuery::new("atlantis");
        assert!(search_countries(&catalog.countries, &q).is_empty());
    }

    #[test]
    fn sort_labels_match_tables() {
        assert_eq!(
            sort_labels(View::Courses),
            vec![
                "Popularity",
                "Rankings",
                "Tuition Fee (Low to High)",
                "Tuition Fee (High to Low)",
            ]
        );
        assert_eq!(
            sort_labels(View::Universities),
            vec![
                "Popularity",
                "Ranking",
                "University Name (A-Z)",
                "University Name (Z-A)",
            ]
        );
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let catalog = catalog();
        let mut b = BrowseState::default();
        b.sort_index = 2;
        let shown = visible_universities(&catalog.universities, &b);
        for pair in shown.windows(2) {
            assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
        }
    }

    #[test]
    fn country_keys_are_codes() {
        let catalog = catalog();
        assert_eq!(catalog.countries[0].key().as_str(), "US");
    }
}
