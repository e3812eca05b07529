//! Every state change in the app, as data
//!
//! Index-carrying actions (`SortSelect`, `DestActivate`, ...) refer to a
//! position in the same candidate list the UI rendered; the reducer
//! recomputes that list from state, so index and item always agree.

use crate::catalog::CountryCode;
use crate::state::{Scholarship, View};

#[derive(Debug, Clone)]
pub enum Action {
    /// Switch views and reset all browse state.
    ViewSwitch(View),
    ViewMenuToggle,
    ViewMenuDismiss,
    ViewMenuHighlight(usize),
    ViewMenuActivate(usize),

    SidebarToggle,
    SidebarDismiss,

    FocusNext,
    FocusPrev,

    SearchSet(String),

    SortMenuToggle,
    SortMenuDismiss,
    SortHighlight(usize),
    /// Apply the sort option at this index and close the menu.
    SortSelect(usize),

    DestMenuToggle,
    DestMenuDismiss,
    DestSearchSet(String),
    DestHighlight(usize),
    /// Toggle the candidate at this index. Leaves the menu open.
    DestActivate(usize),
    /// Remove one selection via its chip.
    DestRemove(CountryCode),
    DestClear,
    ChipScrollLeft,
    ChipScrollRight,

    FeeBoundSwitch,
    FeeSetMin(u32),
    FeeSetMax(u32),

    ScholarshipSet(Scholarship),
    ScholarshipClear,

    LocationSet(String),
    LocationOpen,
    LocationDismiss,
    LocationHighlight(usize),
    LocationActivate(usize),

    /// Scroll the results grid by this many card rows.
    ResultsScroll(isize),

    Quit,
}

impl studydeck_core::Action for Action {
    fn name(&self) -> &'static str {
        match self {
            Action::ViewSwitch(_) => "ViewSwitch",
            Action::ViewMenuToggle => "ViewMenuToggle",
            Action::ViewMenuDismiss => "ViewMenuDismiss",
            Action::ViewMenuHighlight(_) => "ViewMenuHighlight",
            Action::ViewMenuActivate(_) => "ViewMenuActivate",
            Action::SidebarToggle => "SidebarToggle",
            Action::SidebarDismiss => "SidebarDismiss",
            Action::FocusNext => "FocusNext",
            Action::FocusPrev => "FocusPrev",
            Action::SearchSet(_) => "SearchSet",
            Action::SortMenuToggle => "SortMenuToggle",
            Action::SortMenuDismiss => "SortMenuDismiss",
            Action::SortHighlight(_) => "SortHighlight",
            Action::SortSelect(_) => "SortSelect",
            Action::DestMenuToggle => "DestMenuToggle",
            Action::DestMenuDismiss => "DestMenuDismiss",
            Action::DestSearchSet(_) => "DestSearchSet",
            Action::DestHighlight(_) => "DestHighlight",
            Action::DestActivate(_) => "DestActivate",
            Action::DestRemove(_) => "DestRemove",
            Action::DestClear => "DestClear",
            Action::ChipScrollLeft => "ChipScrollLeft",
            Action::ChipScrollRight => "ChipScrollRight",
            Action::FeeBoundSwitch => "FeeBoundSwitch",
            Action::FeeSetMin(_) => "FeeSetMin",
            Action::FeeSetMax(_) => "FeeSetMax",
            Action::ScholarshipSet(_) => "ScholarshipSet",
            Action::ScholarshipClear => "ScholarshipClear",
            Action::LocationSet(_) => "LocationSet",
            Action::LocationOpen => "LocationOpen",
            Action::LocationDismiss => "LocationDismiss",
            Action::LocationHighlight(_) => "LocationHighlight",
            Action::LocationActivate(_) => "LocationActivate",
            Action::ResultsScroll(_) => "ResultsScroll",
            Action::Quit => "Quit",
        }
    }
}
