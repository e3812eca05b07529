//! Study destination multi-select
//!
//! A trigger row showing the current selection as chips, and a panel with a
//! search box over the country table. Toggling a candidate leaves the panel
//! open so several countries can be picked in one sitting; the chip strip
//! scrolls sideways by a fixed step once it overflows.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use studydeck_components::{
    popup, ListRow, OptionList, OptionListProps, TextInput, TextInputProps,
};
use studydeck_core::{Component, EventKind};

use crate::action::Action;
use crate::catalog::Country;
use crate::state::CHIP_OVERFLOW;

pub struct DestinationProps<'a> {
    pub selection: &'a [Country],
    pub candidates: &'a [&'a Country],
    pub query: &'a str,
    pub open: bool,
    pub highlighted: usize,
    pub chip_scroll: u16,
    pub is_focused: bool,
    pub panel: Option<Rect>,
}

#[derive(Default)]
pub struct DestinationFilter {
    input: TextInput,
    list: OptionList,
}

fn rows(candidates: &[&Country], selection: &[Country]) -> Vec<ListRow> {
    candidates
        .iter()
        .map(|c| {
            let selected = selection.iter().any(|s| s.code == c.code);
            ListRow::checked(c.name.clone(), selected).with_detail(c.code.to_string())
        })
        .collect()
}

fn dismiss_on_submit(_: String) -> Action {
    Action::DestMenuDismiss
}

/// One line of chips, unclipped. Scrolling skips leading columns.
fn chip_line(selection: &[Country]) -> String {
    selection
        .iter()
        .map(|c| format!("[{} ✕]", c.name))
        .collect::<Vec<_>>()
        .join(" ")
}

impl DestinationFilter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for DestinationFilter {
    type Props<'a> = DestinationProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let mut out = Vec::new();
        if !props.is_focused {
            return out;
        }
        let EventKind::Key(key) = event else {
            return out;
        };

        if !props.open {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => out.push(Action::DestMenuToggle),
                KeyCode::Delete => {
                    if !props.selection.is_empty() {
                        out.push(Action::DestClear);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(last) = props.selection.last() {
                        out.push(Action::DestRemove(last.code.clone()));
                    }
                }
                KeyCode::Left => out.push(Action::ChipScrollLeft),
                KeyCode::Right => out.push(Action::ChipScrollRight),
                _ => {}
            }
            return out;
        }

        match key.code {
            KeyCode::Esc => out.push(Action::DestMenuDismiss),
            KeyCode::Up | KeyCode::Down | KeyCode::Enter => {
                let rows = rows(props.candidates, props.selection);
                out.extend(self.list.handle_event(
                    event,
                    OptionListProps {
                        rows: &rows,
                        highlighted: props.highlighted,
                        is_focused: true,
                        empty_text: "No countries found",
                        on_highlight: Action::DestHighlight,
                        on_activate: Action::DestActivate,
                    },
                ));
            }
            KeyCode::Left => out.push(Action::ChipScrollLeft),
            KeyCode::Right => out.push(Action::ChipScrollRight),
            _ => {
                out.extend(self.input.handle_event(
                    event,
                    TextInputProps {
                        value: props.query,
                        placeholder: "Search...",
                        is_focused: true,
                        on_change: Action::DestSearchSet,
                        on_submit: dismiss_on_submit,
                    },
                ));
            }
        }
        out
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let trigger_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        if props.selection.is_empty() {
            let line = Line::from(vec![
                Span::styled("Select Country...", Style::default().fg(Color::DarkGray)),
                Span::styled(if props.open { " ▴" } else { " ▾" }, trigger_style),
            ]);
            frame.render_widget(Paragraph::new(line), area);
        } else {
            let overflows = props.selection.len() > CHIP_OVERFLOW;
            let strip = chip_line(props.selection);
            let visible: String = strip
                .chars()
                .skip(props.chip_scroll as usize)
                .take(area.width.saturating_sub(if overflows { 4 } else { 0 }) as usize)
                .collect();
            let mut spans = Vec::new();
            if overflows {
                spans.push(Span::styled("‹ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(
                visible,
                trigger_style.add_modifier(Modifier::BOLD),
            ));
            if overflows {
                spans.push(Span::styled(" ›", Style::default().fg(Color::DarkGray)));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), area);
        }

        if let Some(panel) = props.panel.filter(|_| props.open) {
            let inner = popup::draw_panel(frame, panel);
            let search_area = Rect { height: 1, ..inner };
            self.input.render(
                frame,
                search_area,
                TextInputProps {
                    value: props.query,
                    placeholder: "Search...",
                    is_focused: props.is_focused,
                    on_change: Action::DestSearchSet,
                    on_submit: dismiss_on_submit,
                },
            );

            let list_area = Rect {
                y: inner.y + 1,
                height: inner.height.saturating_sub(1),
                ..inner
            };
            let rows = rows(props.candidates, props.selection);
            self.list.render(
                frame,
                list_area,
                OptionListProps {
                    rows: &rows,
                    highlighted: props.highlighted,
                    is_focused: props.is_focused,
                    empty_text: "No countries found",
                    on_highlight: Action::DestHighlight,
                    on_activate: Action::DestActivate,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CountryCode;
    use studydeck_core::testing::{key_event, RenderHarness};
    use studydeck_core::{assert_emitted, assert_not_emitted};

    fn country(name: &str, code: &str) -> Country {
        Country {
            name: name.into(),
            code: CountryCode::new(code).unwrap(),
        }
    }

    fn props<'a>(
        selection: &'a [Country],
        candidates: &'a [&'a Country],
        open: bool,
        panel: Option<Rect>,
    ) -> DestinationProps<'a> {
        DestinationProps {
            selection,
            candidates,
            query: "",
            open,
            highlighted: 0,
            chip_scroll: 0,
            is_focused: true,
            panel,
        }
    }

    #[test]
    fn enter_opens_closed_panel() {
        let mut dest = DestinationFilter::new();
        let actions: Vec<_> = dest
            .handle_event(&key_event("enter"), props(&[], &[], false, None))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::DestMenuToggle);
    }

    #[test]
    fn enter_in_open_panel_toggles_candidate_not_menu() {
        let mut dest = DestinationFilter::new();
        let ca = country("Canada", "CA");
        let candidates = [&ca];
        let actions: Vec<_> = dest
            .handle_event(&key_event("enter"), props(&[], &candidates, true, None))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::DestActivate(0));
        assert_not_emitted!(actions, Action::DestMenuToggle);
        assert_not_emitted!(actions, Action::DestMenuDismiss);
    }

    #[test]
    fn typing_in_open_panel_edits_query() {
        let mut dest = DestinationFilter::new();
        let actions: Vec<_> = dest
            .handle_event(&key_event("c"), props(&[], &[], true, None))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::DestSearchSet(s) if s == "c");
    }

    #[test]
    fn backspace_on_closed_trigger_removes_last_chip() {
        let mut dest = DestinationFilter::new();
        let selection = [country("Canada", "CA"), country("Germany", "DE")];
        let actions: Vec<_> = dest
            .handle_event(&key_event("backspace"), props(&selection, &[], false, None))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::DestRemove(code) if code.as_str() == "DE");
    }

    #[test]
    fn delete_clears_selection_only_when_nonempty() {
        let mut dest = DestinationFilter::new();
        let selection = [country("Canada", "CA")];
        let actions: Vec<_> = dest
            .handle_event(&key_event("delete"), props(&selection, &[], false, None))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::DestClear);

        let actions: Vec<_> = dest
            .handle_event(&key_event("delete"), props(&[], &[], false, None))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn arrows_scroll_chips() {
        let mut dest = DestinationFilter::new();
        let actions: Vec<_> = dest
            .handle_event(&key_event("right"), props(&[], &[], false, None))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::ChipScrollRight);
    }

    #[test]
    fn empty_selection_renders_placeholder() {
        let mut harness = RenderHarness::new(30, 2);
        let mut dest = DestinationFilter::new();
        let out = harness.render_to_string(|frame| {
            dest.render(frame, Rect::new(0, 0, 30, 1), props(&[], &[], false, None));
        });
        assert!(out.contains("Select Country..."));
    }

    #[test]
    fn chips_render_names_and_overflow_arrows() {
        let mut harness = RenderHarness::new(40, 2);
        let mut dest = DestinationFilter::new();
        let two = [country("Canada", "CA"), country("Germany", "DE")];
        let out = harness.render_to_string(|frame| {
            dest.render(frame, Rect::new(0, 0, 40, 1), props(&two, &[], false, None));
        });
        assert!(out.contains("[Canada ✕] [Germany ✕]"));
        assert!(!out.contains("‹"));

        let three = [
            country("Canada", "CA"),
            country("Germany", "DE"),
            country("France", "FR"),
        ];
        let out = harness.render_to_string(|frame| {
            dest.render(frame, Rect::new(0, 0, 40, 1), props(&three, &[], false, None));
        });
        assert!(out.contains("‹"));
        assert!(out.contains("›"));
    }

    #[test]
    fn open_panel_marks_selected_candidates() {
        let mut harness = RenderHarness::new(40, 12);
        let mut dest = DestinationFilter::new();
        let ca = country("Canada", "CA");
        let de = country("Germany", "DE");
        let selection = [ca.clone()];
        let candidates = [&ca, &de];
        let panel = Some(Rect::new(0, 1, 30, 6));
        let out = harness.render_to_string(|frame| {
            dest.render(
                frame,
                Rect::new(0, 0, 30, 1),
                props(&selection, &candidates, true, panel),
            );
        });
        assert!(out.contains("(x) Canada"));
        assert!(out.contains("( ) Germany"));
        assert!(out.contains("Search..."));
    }
}
