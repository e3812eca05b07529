//! Application state
//!
//! One `AppState` for the whole app. Per-view browse state (query, sort,
//! filters, open menus) is rebuilt from defaults on every view switch;
//! nothing carries over between Courses and Universities.

use studydeck_core::{BoundedRange, Dropdown, MultiSelect, TextQuery};

use crate::catalog::{Catalog, Country};

pub const MIN_FEE: u32 = 0;
pub const MAX_FEE: u32 = 100_000;
pub const FEE_STEP: u32 = 1000;

/// Chip strips longer than this get scroll arrows.
pub const CHIP_OVERFLOW: usize = 2;
/// Columns moved per chip-strip scroll press.
pub const CHIP_SCROLL_STEP: u16 = 8;

/// Rows of results scrolled before the header collapses to one line.
pub const COMPACT_AFTER: u16 = 2;

/// Below this terminal width the sidebar becomes a toggled overlay.
pub const NARROW_WIDTH: u16 = 70;

/// Anchor regions for outside-click dismissal and scroll hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    ViewMenu,
    LocationMenu,
    SortMenu,
    DestinationMenu,
    Sidebar,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Courses,
    Universities,
}

impl View {
    pub const ALL: [View; 2] = [View::Courses, View::Universities];

    pub fn label(&self) -> &'static str {
        match self {
            View::Courses => "Courses",
            View::Universities => "Universities",
        }
    }
}

/// Three-state scholarship filter. `Unset` admits everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scholarship {
    Yes,
    No,
    #[default]
    Unset,
}

impl Scholarship {
    pub fn admits(&self, has_scholarship: bool) -> bool {
        match self {
            Scholarship::Yes => has_scholarship,
            Scholarship::No => !has_scholarship,
            Scholarship::Unset => true,
        }
    }
}

/// Which fee slider handle the keyboard moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeeBound {
    #[default]
    Min,
    Max,
}

impl FeeBound {
    pub fn other(&self) -> Self {
        match self {
            FeeBound::Min => FeeBound::Max,
            FeeBound::Max => FeeBound::Min,
        }
    }
}

/// Keyboard focus target. Tab/Shift+Tab walk the ring for the active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Search,
    Sort,
    Destination,
    Fee,
    Scholarship,
    Location,
    #[default]
    Results,
}

impl Focus {
    /// Fee and scholarship filters exist only on the Courses view.
    fn ring(view: View) -> &'static [Focus] {
        match view {
            View::Courses => &[
                Focus::Search,
                Focus::Sort,
                Focus::Destination,
                Focus::Fee,
                Focus::Scholarship,
                Focus::Location,
                Focus::Results,
            ],
            View::Universities => &[
                Focus::Search,
                Focus::Sort,
                Focus::Destination,
                Focus::Location,
                Focus::Results,
            ],
        }
    }

    pub fn next(self, view: View) -> Focus {
        let ring = Self::ring(view);
        let i = ring.iter().position(|f| *f == self).unwrap_or(0);
        ring[(i + 1) % ring.len()]
    }

    pub fn prev(self, view: View) -> Focus {
        let ring = Self::ring(view);
        let i = ring.iter().position(|f| *f == self).unwrap_or(0);
        ring[(i + ring.len() - 1) % ring.len()]
    }
}

/// Per-view browse state. Reset wholesale on view switch.
#[derive(Debug, Clone)]
pub struct BrowseState {
    pub query: TextQuery,

    pub sort_index: usize,
    pub sort_menu: Dropdown<Anchor>,
    pub sort_highlight: usize,

    pub destinations: MultiSelect<Country>,
    pub dest_menu: Dropdown<Anchor>,
    pub dest_query: TextQuery,
    pub dest_highlight: usize,
    pub chip_scroll: u16,

    pub fee: BoundedRange,
    pub fee_bound: FeeBound,
    pub scholarship: Scholarship,

    /// Vertical offset into the results grid, in card rows.
    pub scroll: u16,
}

impl Default for BrowseState {
    fn default() -> Self {
        Self {
            query: TextQuery::default(),
            sort_index: 0,
            sort_menu: Dropdown::new(Anchor::SortMenu),
            sort_highlight: 0,
            destinations: MultiSelect::new(),
            dest_menu: Dropdown::new(Anchor::DestinationMenu),
            dest_query: TextQuery::default(),
            dest_highlight: 0,
            chip_scroll: 0,
            fee: BoundedRange::new(MIN_FEE, MAX_FEE, FEE_STEP),
            fee_bound: FeeBound::default(),
            scholarship: Scholarship::default(),
            scroll: 0,
        }
    }
}

/// Header chrome: location autocomplete, page menu, compact mode.
#[derive(Debug, Clone)]
pub struct HeaderState {
    pub location_query: TextQuery,
    pub location_menu: Dropdown<Anchor>,
    pub location_highlight: usize,
    /// The chosen location, once picked from the candidate list.
    pub location: Option<String>,

    pub view_menu: Dropdown<Anchor>,
    pub view_highlight: usize,

    /// Overlay sidebar visibility on narrow terminals.
    pub sidebar_open: bool,
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            location_query: TextQuery::default(),
            location_menu: Dropdown::new(Anchor::LocationMenu),
            location_highlight: 0,
            location: None,
            view_menu: Dropdown::new(Anchor::ViewMenu),
            view_highlight: 0,
            sidebar_open: false,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub view: View,
    pub browse: BrowseState,
    pub header: HeaderState,
    pub focus: Focus,
    pub quit: bool,
}

impl AppState {
    pub fn new(catalog: Catalog, view: View) -> Self {
        Self {
            catalog,
            view,
            browse: BrowseState::default(),
            header: HeaderState::default(),
            focus: Focus::default(),
            quit: false,
        }
    }

    /// Header collapses once the results have scrolled a couple of rows.
    pub fn header_compact(&self) -> bool {
        self.browse.scroll > COMPACT_AFTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn focus_ring_wraps_both_directions() {
        let mut f = Focus::Search;
        for _ in 0..7 {
            f = f.next(View::Courses);
        }
        assert_eq!(f, Focus::Search);

        assert_eq!(Focus::Search.prev(View::Courses), Focus::Results);
    }

    #[test]
    fn universities_ring_skips_course_filters() {
        let mut f = Focus::Search;
        let mut seen = vec![f];
        loop {
            f = f.next(View::Universities);
            if f == Focus::Search {
                break;
            }
            seen.push(f);
        }
        assert!(!seen.contains(&Focus::Fee));
        assert!(!seen.contains(&Focus::Scholarship));
    }

    #[test]
    fn scholarship_admission() {
        assert!(Scholarship::Unset.admits(true));
        assert!(Scholarship::Unset.admits(false));
        assert!(Scholarship::Yes.admits(true));
        assert!(!Scholarship::Yes.admits(false));
        assert!(Scholarship::No.admits(false));
        assert!(!Scholarship::No.admits(true));
    }

    #[test]
    fn default_browse_state_filters_nothing() {
        let b = BrowseState::default();
        assert!(b.query.is_empty());
        assert!(b.destinations.is_empty());
        assert!(b.fee.is_full());
        assert_eq!(b.scholarship, Scholarship::Unset);
        assert_eq!(b.sort_index, 0);
        assert!(!b.sort_menu.is_open());
        assert!(!b.dest_menu.is_open());
    }

    #[test]
    fn header_compacts_after_scrolling() {
        let catalog = Catalog::load_embedded().unwrap();
        let mut state = AppState::new(catalog, View::Courses);
        assert!(!state.header_compact());
        state.browse.scroll = COMPACT_AFTER + 1;
        assert!(state.header_compact());
    }
}
