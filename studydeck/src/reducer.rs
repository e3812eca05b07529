//! The single reducer
//!
//! All state mutation happens here. The return value reports whether the
//! state changed, which drives re-rendering; dismissing an already-closed
//! menu or clamping a bound to where it already sits reports `false`.

use crate::action::Action;
use crate::catalog::Country;
use crate::state::{AppState, BrowseState, Focus, Scholarship, View, CHIP_OVERFLOW, CHIP_SCROLL_STEP};
use crate::views;

/// Columns the chip strip occupies: each chip is its name plus brackets and
/// a remove mark.
pub fn chip_strip_width(destinations: &[Country]) -> u16 {
    destinations
        .iter()
        .map(|c| c.name.chars().count() as u16 + 4)
        .sum()
}

fn switch_view(state: &mut AppState, view: View) -> bool {
    state.view = view;
    state.browse = BrowseState::default();
    state.focus = Focus::default();
    state.header.view_menu.close();
    state.header.location_menu.close();
    state.header.sidebar_open = false;
    true
}

pub fn reducer(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::ViewSwitch(view) => switch_view(state, view),
        Action::ViewMenuToggle => {
            state.header.view_menu.toggle();
            if state.header.view_menu.is_open() {
                state.header.view_highlight = View::ALL
                    .iter()
                    .position(|v| *v == state.view)
                    .unwrap_or(0);
            }
            true
        }
        Action::ViewMenuDismiss => state.header.view_menu.close(),
        Action::ViewMenuHighlight(i) => {
            let i = i.min(View::ALL.len() - 1);
            let changed = state.header.view_highlight != i;
            state.header.view_highlight = i;
            changed
        }
        Action::ViewMenuActivate(i) => {
            let view = View::ALL[i.min(View::ALL.len() - 1)];
            switch_view(state, view)
        }

        Action::SidebarToggle => {
            state.header.sidebar_open = !state.header.sidebar_open;
            true
        }
        Action::SidebarDismiss => {
            let changed = state.header.sidebar_open;
            state.header.sidebar_open = false;
            changed
        }

        Action::FocusNext => {
            state.focus = state.focus.next(state.view);
            true
        }
        Action::FocusPrev => {
            state.focus = state.focus.prev(state.view);
            true
        }

        Action::SearchSet(s) => {
            state.browse.query.set(s);
            state.browse.scroll = 0;
            true
        }

        Action::SortMenuToggle => {
            state.browse.sort_menu.toggle();
            if state.browse.sort_menu.is_open() {
                state.browse.sort_highlight = state.browse.sort_index;
            }
            true
        }
        Action::SortMenuDismiss => state.browse.sort_menu.close(),
        Action::SortHighlight(i) => {
            let i = i.min(views::sort_count(state.view) - 1);
            let changed = state.browse.sort_highlight != i;
            state.browse.sort_highlight = i;
            changed
        }
        // Picking a sort option closes the menu; picking a destination does
        // not. The asymmetry is intentional.
        Action::SortSelect(i) => {
            state.browse.sort_index = i.min(views::sort_count(state.view) - 1);
            state.browse.sort_menu.close();
            state.browse.scroll = 0;
            true
        }

        Action::DestMenuToggle => {
            state.browse.dest_menu.toggle();
            true
        }
        Action::DestMenuDismiss => state.browse.dest_menu.close(),
        Action::DestSearchSet(s) => {
            state.browse.dest_query.set(s);
            state.browse.dest_highlight = 0;
            true
        }
        Action::DestHighlight(i) => {
            let len = views::dest_candidates(state).len();
            if len == 0 {
                return false;
            }
            let i = i.min(len - 1);
            let changed = state.browse.dest_highlight != i;
            state.browse.dest_highlight = i;
            changed
        }
        Action::DestActivate(i) => {
            let Some(country) = views::dest_candidates(state).get(i).map(|c| (*c).clone())
            else {
                return false;
            };
            state.browse.destinations.toggle(country);
            state.browse.chip_scroll = 0;
            state.browse.scroll = 0;
            true
        }
        Action::DestRemove(code) => {
            let removed = state.browse.destinations.remove(&code);
            if removed {
                state.browse.chip_scroll = 0;
                state.browse.scroll = 0;
            }
            removed
        }
        Action::DestClear => {
            if state.browse.destinations.is_empty() {
                return false;
            }
            state.browse.destinations.clear();
            state.browse.chip_scroll = 0;
            state.browse.scroll = 0;
            true
        }
        Action::ChipScrollLeft => {
            if state.browse.chip_scroll == 0 {
                return false;
            }
            state.browse.chip_scroll = state.browse.chip_scroll.saturating_sub(CHIP_SCROLL_STEP);
            true
        }
        Action::ChipScrollRight => {
            // Arrows only exist past the overflow threshold
            if state.browse.destinations.len() <= CHIP_OVERFLOW {
                return false;
            }
            let limit = chip_strip_width(state.browse.destinations.as_slice())
                .saturating_sub(CHIP_SCROLL_STEP);
            if state.browse.chip_scroll >= limit {
                return false;
            }
            state.browse.chip_scroll =
                (state.browse.chip_scroll + CHIP_SCROLL_STEP).min(limit);
            true
        }

        Action::FeeBoundSwitch => {
            state.browse.fee_bound = state.browse.fee_bound.other();
            true
        }
        Action::FeeSetMin(v) => {
            let changed = state.browse.fee.set_min(v);
            if changed {
                state.browse.scroll = 0;
            }
            changed
        }
        Action::FeeSetMax(v) => {
            let changed = state.browse.fee.set_max(v);
            if changed {
                state.browse.scroll = 0;
            }
            changed
        }

        Action::ScholarshipSet(s) => {
            let changed = state.browse.scholarship != s;
            state.browse.scholarship = s;
            if changed {
                state.browse.scroll = 0;
            }
            changed
        }
        Action::ScholarshipClear => {
            let changed = state.browse.scholarship != Scholarship::Unset;
            state.browse.scholarship = Scholarship::Unset;
            if changed {
                state.browse.scroll = 0;
            }
            changed
        }

        Action::LocationSet(s) => {
            state.header.location_query.set(s);
            state.header.location_menu.set_open(true);
            state.header.location_highlight = 0;
            true
        }
        Action::LocationOpen => state.header.location_menu.set_open(true),
        Action::LocationDismiss => state.header.location_menu.close(),
        Action::LocationHighlight(i) => {
            let len = views::location_candidates(state).len();
            if len == 0 {
                return false;
            }
            let i = i.min(len - 1);
            let changed = state.header.location_highlight != i;
            state.header.location_highlight = i;
            changed
        }
        Action::LocationActivate(i) => {
            let Some(name) = views::location_candidates(state)
                .get(i)
                .map(|c| c.name.clone())
            else {
                return false;
            };
            state.header.location_query.set(name.clone());
            state.header.location = Some(name);
            state.header.location_menu.close();
            state.header.location_highlight = 0;
            true
        }

        Action::ResultsScroll(delta) => {
            let count = match state.view {
                View::Courses => views::visible_courses(&state.catalog.courses, &state.browse).len(),
                View::Universities => {
                    views::visible_universities(&state.catalog.universities, &state.browse).len()
                }
            };
            // Rough ceiling: enough to reach the last card row at any size
            let limit = (count as isize) * 8;
            let next = (state.browse.scroll as isize + delta).clamp(0, limit) as u16;
            let changed = next != state.browse.scroll;
            state.browse.scroll = next;
            changed
        }

        Action::Quit => {
            state.quit = true;
            true
        }
    }
}
