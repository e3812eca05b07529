//! Layout, anchor registration and event routing
//!
//! `Ui` owns the components and the anchor table. Every frame it lays the
//! screen out, records each dropdown's anchor region (trigger plus open
//! panel), and hands components their props. Events are routed to whichever
//! component holds focus; outside-press and scroll listeners run separately
//! against the anchor table.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use studydeck_components::{popup, TextInput, TextInputProps};
use studydeck_core::{Component, EventContext, EventKind, Listeners};

use crate::action::Action;
use crate::components::{
    DestinationFilter, DestinationProps, FeeSlider, FeeSliderProps, GridRows, Header, HeaderProps,
    ListingGrid, ListingGridProps, LocationField, LocationFieldProps, ScholarshipPicker,
    ScholarshipProps, SortMenu, SortMenuProps,
};
use crate::state::{Anchor, AppState, Focus, View, NARROW_WIDTH};
use crate::views;

const SIDEBAR_WIDTH: u16 = 28;
const LOCATION_FIELD_WIDTH: u16 = 42;
const PANEL_ROWS: u16 = 6;

pub struct Ui {
    pub ctx: EventContext<Anchor>,
    header: Header,
    location: LocationField,
    search: TextInput,
    sort: SortMenu,
    destination: DestinationFilter,
    fee: FeeSlider,
    scholarship: ScholarshipPicker,
    grid: ListingGrid,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    pub fn new() -> Self {
        Self {
            ctx: EventContext::new(),
            header: Header::new(),
            location: LocationField::new(),
            search: TextInput::new(),
            sort: SortMenu::new(),
            destination: DestinationFilter::new(),
            fee: FeeSlider::new(),
            scholarship: ScholarshipPicker::new(),
            grid: ListingGrid::new(),
        }
    }

    /// Subscribe the active view's global listeners. Cancels everything
    /// first, so a view switch can never leak the previous view's set.
    pub fn mount_listeners(view: View, listeners: &mut Listeners<Action, Anchor>) {
        listeners.cancel_all();
        let scope = match view {
            View::Courses => "courses",
            View::Universities => "universities",
        };
        listeners.on_outside_press(format!("{scope}:dismiss:view-menu"), Anchor::ViewMenu, || {
            Action::ViewMenuDismiss
        });
        listeners.on_outside_press(format!("{scope}:dismiss:location"), Anchor::LocationMenu, || {
            Action::LocationDismiss
        });
        listeners.on_outside_press(format!("{scope}:dismiss:sort"), Anchor::SortMenu, || {
            Action::SortMenuDismiss
        });
        listeners.on_outside_press(
            format!("{scope}:dismiss:destination"),
            Anchor::DestinationMenu,
            || Action::DestMenuDismiss,
        );
        listeners.on_outside_press(format!("{scope}:dismiss:sidebar"), Anchor::Sidebar, || {
            Action::SidebarDismiss
        });
        listeners.on_scroll(format!("{scope}:scroll:results"), Anchor::Results, |delta| {
            Action::ResultsScroll(delta * 2)
        });
    }

    fn search_props(state: &AppState) -> TextInputProps<'_, Action> {
        TextInputProps {
            value: state.browse.query.as_str(),
            placeholder: match state.view {
                View::Courses => "Search courses...",
                View::Universities => "Search universities...",
            },
            is_focused: state.focus == Focus::Search,
            on_change: Action::SearchSet,
            on_submit: Action::SearchSet,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        self.ctx.begin_frame();
        let area = frame.area();
        let compact = state.header_compact();
        let header_h = if compact { 1 } else { 2 };

        let header_row = Rect { height: 1, ..area };
        let body = Rect {
            y: area.y + header_h,
            height: area.height.saturating_sub(header_h),
            ..area
        };

        let narrow = area.width < NARROW_WIDTH;
        let (sidebar_area, results_area) = if narrow {
            let overlay = Rect {
                width: SIDEBAR_WIDTH.min(body.width),
                ..body
            };
            (state.header.sidebar_open.then_some(overlay), body)
        } else {
            let w = SIDEBAR_WIDTH.min(body.width);
            let sidebar = Rect { width: w, ..body };
            let results = Rect {
                x: body.x + w,
                width: body.width - w,
                ..body
            };
            (Some(sidebar), results)
        };

        self.render_results(frame, results_area, state);
        if let Some(sidebar) = sidebar_area {
            self.render_sidebar(frame, sidebar, state, narrow);
        }
        self.render_header(frame, header_row, area, state, compact);
    }

    fn render_header(
        &mut self,
        frame: &mut Frame,
        row: Rect,
        frame_area: Rect,
        state: &AppState,
        compact: bool,
    ) {
        let trigger = Header::menu_trigger(row);
        self.ctx.add_anchor(Anchor::ViewMenu, trigger);
        let panel = state.header.view_menu.is_open().then(|| {
            let p = popup::below(trigger, 18, View::ALL.len() as u16 + 2, frame_area);
            self.ctx.add_anchor(Anchor::ViewMenu, p);
            p
        });
        self.header.render(
            frame,
            row,
            HeaderProps {
                view: state.view,
                menu_open: state.header.view_menu.is_open(),
                highlighted: state.header.view_highlight,
                panel,
            },
        );

        if compact {
            return;
        }
        let field = Rect {
            x: row.x + 1,
            y: row.y + 1,
            width: LOCATION_FIELD_WIDTH.min(row.width.saturating_sub(2)),
            height: 1,
        };
        self.ctx.add_anchor(Anchor::LocationMenu, field);
        let matches = views::location_candidates(state);
        let open = state.header.location_menu.is_open();
        let panel = open.then(|| {
            let h = (matches.len().clamp(1, PANEL_ROWS as usize) as u16) + 2;
            let p = popup::below(field, 32, h, frame_area);
            self.ctx.add_anchor(Anchor::LocationMenu, p);
            p
        });
        self.location.render(
            frame,
            field,
            LocationFieldProps {
                value: state.header.location_query.as_str(),
                open,
                matches: &matches,
                highlighted: state.header.location_highlight,
                is_focused: state.focus == Focus::Location,
                panel,
            },
        );
    }

    fn render_sidebar(&mut self, frame: &mut Frame, area: Rect, state: &AppState, overlay: bool) {
        self.ctx.add_anchor(Anchor::Sidebar, area);
        let inner = if overlay {
            frame.render_widget(Clear, area);
            let block = Block::default()
                .borders(Borders::ALL)
                .title("Filters")
                .border_style(Style::default().fg(Color::Cyan));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            inner
        } else {
            Rect {
                x: area.x + 1,
                width: area.width.saturating_sub(2),
                ..area
            }
        };

        let section = Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD);
        let mut y = inner.y;
        let row = |y: u16| Rect {
            y,
            height: 1,
            ..inner
        };

        frame.render_widget(
            Paragraph::new(Span::styled("STUDY DESTINATION", section)),
            row(y),
        );
        y += 1;
        let dest_trigger = row(y);
        y += 2;
        self.ctx.add_anchor(Anchor::DestinationMenu, dest_trigger);
        let candidates = views::dest_candidates(state);
        let open = state.browse.dest_menu.is_open();
        let panel = open.then(|| {
            let h = (candidates.len().clamp(1, PANEL_ROWS as usize) as u16) + 3;
            let p = popup::below(dest_trigger, 30, h, frame.area());
            self.ctx.add_anchor(Anchor::DestinationMenu, p);
            // The panel may outgrow the sidebar; keep presses in it from
            // dismissing an overlay sidebar
            self.ctx.add_anchor(Anchor::Sidebar, p);
            p
        });
        self.destination.render(
            frame,
            dest_trigger,
            DestinationProps {
                selection: state.browse.destinations.as_slice(),
                candidates: &candidates,
                query: state.browse.dest_query.as_str(),
                open,
                highlighted: state.browse.dest_highlight,
                chip_scroll: state.browse.chip_scroll,
                is_focused: state.focus == Focus::Destination,
                panel,
            },
        );

        if state.view != View::Courses {
            return;
        }

        frame.render_widget(Paragraph::new(Span::styled("TUITION FEE", section)), row(y));
        y += 1;
        let fee_area = Rect {
            y,
            height: 2,
            ..inner
        };
        y += 3;
        self.fee.render(
            frame,
            fee_area,
            FeeSliderProps {
                range: &state.browse.fee,
                active: state.browse.fee_bound,
                is_focused: state.focus == Focus::Fee,
            },
        );

        frame.render_widget(Paragraph::new(Span::styled("SCHOLARSHIP", section)), row(y));
        y += 1;
        let sch_area = Rect {
            y,
            height: 2,
            ..inner
        };
        self.scholarship.render(
            frame,
            sch_area,
            ScholarshipProps {
                value: state.browse.scholarship,
                is_focused: state.focus == Focus::Scholarship,
            },
        );
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let search_row = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(Span::styled("Search: ", Style::default().fg(Color::DarkGray))),
            search_row,
        );
        let input_area = Rect {
            x: search_row.x + 8,
            width: search_row.width.saturating_sub(8),
            ..search_row
        };
        self.search
            .render(frame, input_area, Self::search_props(state));

        let meta_row = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        let grid_area = Rect {
            y: area.y + 2,
            height: area.height.saturating_sub(2),
            ..area
        };
        self.ctx.add_anchor(Anchor::Results, grid_area);

        let shown_count;
        match state.view {
            View::Courses => {
                let shown = views::visible_courses(&state.catalog.courses, &state.browse);
                shown_count = shown.len();
                self.grid.render(
                    frame,
                    grid_area,
                    ListingGridProps {
                        rows: GridRows::Courses(&shown),
                        countries: &state.catalog.countries,
                        scroll: state.browse.scroll,
                    },
                );
            }
            View::Universities => {
                let shown = views::visible_universities(&state.catalog.universities, &state.browse);
                shown_count = shown.len();
                self.grid.render(
                    frame,
                    grid_area,
                    ListingGridProps {
                        rows: GridRows::Universities(&shown),
                        countries: &state.catalog.countries,
                        scroll: state.browse.scroll,
                    },
                );
            }
        }

        let count = Line::from(vec![
            Span::styled(
                format!("{shown_count} "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} found", state.view.label().to_lowercase()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(count), meta_row);

        // Sort trigger sits at the right edge of the meta row; its panel
        // renders after the grid so it overlays the cards
        let labels = views::sort_labels(state.view);
        let active = labels
            .get(state.browse.sort_index)
            .map(String::len)
            .unwrap_or(0) as u16;
        let trigger_w = (11 + active).min(meta_row.width);
        let sort_trigger = Rect {
            x: meta_row.right().saturating_sub(trigger_w),
            width: trigger_w,
            ..meta_row
        };
        self.ctx.add_anchor(Anchor::SortMenu, sort_trigger);
        let open = state.browse.sort_menu.is_open();
        let panel = open.then(|| {
            let p = popup::below(sort_trigger, 33, labels.len() as u16 + 2, frame.area());
            self.ctx.add_anchor(Anchor::SortMenu, p);
            p
        });
        self.sort.render(
            frame,
            sort_trigger,
            SortMenuProps {
                labels: &labels,
                active: state.browse.sort_index,
                open,
                highlighted: state.browse.sort_highlight,
                is_focused: state.focus == Focus::Sort,
                panel,
            },
        );
    }

    /// Route one event to the focused component, returning the actions to
    /// dispatch. Global listeners are notified separately by the caller.
    pub fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        let mut out = Vec::new();
        let EventKind::Key(key) = event else {
            return out;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            out.push(Action::Quit);
            return out;
        }
        match key.code {
            KeyCode::Tab => {
                out.push(Action::FocusNext);
                return out;
            }
            KeyCode::BackTab => {
                out.push(Action::FocusPrev);
                return out;
            }
            _ => {}
        }

        // The page menu captures keys while open
        if state.header.view_menu.is_open() {
            out.extend(self.header.handle_event(
                event,
                HeaderProps {
                    view: state.view,
                    menu_open: true,
                    highlighted: state.header.view_highlight,
                    panel: None,
                },
            ));
            return out;
        }

        match state.focus {
            Focus::Search => {
                out.extend(self.search.handle_event(event, Self::search_props(state)));
            }
            Focus::Sort => {
                let labels = views::sort_labels(state.view);
                out.extend(self.sort.handle_event(
                    event,
                    SortMenuProps {
                        labels: &labels,
                        active: state.browse.sort_index,
                        open: state.browse.sort_menu.is_open(),
                        highlighted: state.browse.sort_highlight,
                        is_focused: true,
                        panel: None,
                    },
                ));
            }
            Focus::Destination => {
                let candidates = views::dest_candidates(state);
                out.extend(self.destination.handle_event(
                    event,
                    DestinationProps {
                        selection: state.browse.destinations.as_slice(),
                        candidates: &candidates,
                        query: state.browse.dest_query.as_str(),
                        open: state.browse.dest_menu.is_open(),
                        highlighted: state.browse.dest_highlight,
                        chip_scroll: state.browse.chip_scroll,
                        is_focused: true,
                        panel: None,
                    },
                ));
            }
            Focus::Fee => {
                out.extend(self.fee.handle_event(
                    event,
                    FeeSliderProps {
                        range: &state.browse.fee,
                        active: state.browse.fee_bound,
                        is_focused: true,
                    },
                ));
            }
            Focus::Scholarship => {
                out.extend(self.scholarship.handle_event(
                    event,
                    ScholarshipProps {
                        value: state.browse.scholarship,
                        is_focused: true,
                    },
                ));
            }
            Focus::Location => {
                let matches = views::location_candidates(state);
                out.extend(self.location.handle_event(
                    event,
                    LocationFieldProps {
                        value: state.header.location_query.as_str(),
                        open: state.header.location_menu.is_open(),
                        matches: &matches,
                        highlighted: state.header.location_highlight,
                        is_focused: true,
                        panel: None,
                    },
                ));
            }
            Focus::Results => match key.code {
                KeyCode::Char('q') => out.push(Action::Quit),
                KeyCode::Char('v') => out.push(Action::ViewMenuToggle),
                KeyCode::Char('f') => out.push(Action::SidebarToggle),
                KeyCode::Char('1') => out.push(Action::ViewSwitch(View::Courses)),
                KeyCode::Char('2') => out.push(Action::ViewSwitch(View::Universities)),
                KeyCode::Up => out.push(Action::ResultsScroll(-2)),
                KeyCode::Down => out.push(Action::ResultsScroll(2)),
                KeyCode::PageUp => out.push(Action::ResultsScroll(-8)),
                KeyCode::PageDown => out.push(Action::ResultsScroll(8)),
                KeyCode::Home => out.push(Action::ResultsScroll(-10_000)),
                KeyCode::Esc if state.header.sidebar_open => out.push(Action::SidebarDismiss),
                _ => {}
            },
        }
        out
    }
}
