//! Header location autocomplete
//!
//! A text field whose candidate panel opens as you type. Picking a country
//! fills the field and closes the panel; the panel also closes on Esc or an
//! outside press.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use studydeck_components::{
    popup, ListRow, OptionList, OptionListProps, TextInput, TextInputProps,
};
use studydeck_core::{Component, EventKind};

use crate::action::Action;
use crate::catalog::Country;

pub struct LocationFieldProps<'a> {
    pub value: &'a str,
    pub open: bool,
    pub matches: &'a [&'a Country],
    pub highlighted: usize,
    pub is_focused: bool,
    /// Panel rect when the candidate list is open, computed by the layout.
    pub panel: Option<Rect>,
}

#[derive(Default)]
pub struct LocationField {
    input: TextInput,
    list: OptionList,
}

fn rows(matches: &[&Country]) -> Vec<ListRow> {
    matches
        .iter()
        .map(|c| ListRow::plain(c.name.clone()).with_detail(c.code.to_string()))
        .collect()
}

fn open_on_submit(_: String) -> Action {
    Action::LocationOpen
}

impl LocationField {
    pub fn new() -> Self {
        Self::default()
    }

    fn input_props<'a>(value: &'a str, is_focused: bool) -> TextInputProps<'a, Action> {
        TextInputProps {
            value,
            placeholder: "Search destination...",
            is_focused,
            on_change: Action::LocationSet,
            on_submit: open_on_submit,
        }
    }
}

impl Component<Action> for LocationField {
    type Props<'a> = LocationFieldProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let mut out = Vec::new();
        if !props.is_focused {
            return out;
        }

        if props.open {
            if let EventKind::Key(key) = event {
                match key.code {
                    KeyCode::Esc => {
                        out.push(Action::LocationDismiss);
                        return out;
                    }
                    KeyCode::Up | KeyCode::Down | KeyCode::Enter => {
                        let rows = rows(props.matches);
                        out.extend(self.list.handle_event(
                            event,
                            OptionListProps {
                                rows: &rows,
                                highlighted: props.highlighted,
                                is_focused: true,
                                empty_text: "No countries found",
                                on_highlight: Action::LocationHighlight,
                                on_activate: Action::LocationActivate,
                            },
                        ));
                        return out;
                    }
                    _ => {}
                }
            }
        }

        out.extend(
            self.input
                .handle_event(event, Self::input_props(props.value, true)),
        );
        out
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let icon_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(Paragraph::new(Span::styled("◎ ", icon_style)), area);

        let input_area = Rect {
            x: area.x + 2,
            width: area.width.saturating_sub(2),
            ..area
        };
        self.input.render(
            frame,
            input_area,
            Self::input_props(props.value, props.is_focused),
        );

        if let Some(panel) = props.panel.filter(|_| props.open) {
            let inner = popup::draw_panel(frame, panel);
            let rows = rows(props.matches);
            self.list.render(
                frame,
                inner,
                OptionListProps {
                    rows: &rows,
                    highlighted: props.highlighted,
                    is_focused: props.is_focused,
                    empty_text: "No countries found",
                    on_highlight: Action::LocationHighlight,
                    on_activate: Action::LocationActivate,
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
        value: &'a str,
        open: bool,
        matches: &'a [&'a Country],
        panel: Option<Rect>,
    ) -> LocationFieldProps<'a> {
        LocationFieldProps {
            value,
            open,
            matches,
            highlighted: 0,
            is_focused: true,
            panel,
        }
    }

    #[test]
    fn typing_emits_location_set() {
        let mut field = LocationField::new();
        let actions: Vec<_> = field
            .handle_event(&key_event("g"), props("", false, &[], None))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::LocationSet(s) if s == "g");
    }

    #[test]
    fn enter_activates_highlighted_candidate_when_open() {
        let mut field = LocationField::new();
        let de = country("Germany", "DE");
        let matches = [&de];
        let actions: Vec<_> = field
            .handle_event(&key_event("enter"), props("ger", true, &matches, None))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::LocationActivate(0));
        assert_not_emitted!(actions, Action::LocationSet(_));
    }

    #[test]
    fn esc_dismisses_open_panel() {
        let mut field = LocationField::new();
        let actions: Vec<_> = field
            .handle_event(&key_event("esc"), props("x", true, &[], None))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::LocationDismiss);
    }

    #[test]
    fn unfocused_field_ignores_keys() {
        let mut field = LocationField::new();
        let mut p = props("", false, &[], None);
        p.is_focused = false;
        let actions: Vec<_> = field.handle_event(&key_event("g"), p).into_iter().collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn open_panel_lists_candidates() {
        let mut harness = RenderHarness::new(40, 10);
        let mut field = LocationField::new();
        let de = country("Germany", "DE");
        let matches = [&de];
        let panel = Some(Rect::new(0, 1, 24, 4));
        let out = harness.render_to_string(|frame| {
            field.render(frame, Rect::new(0, 0, 30, 1), props("ger", true, &matches, panel));
        });
        assert!(out.contains("Germany"));
        assert!(out.contains("DE"));
    }

    #[test]
    fn empty_candidates_show_not_found() {
        let mut harness = RenderHarness::new(40, 10);
        let mut field = LocationField::new();
        let panel = Some(Rect::new(0, 1, 26, 4));
        let out = harness.render_to_string(|frame| {
            field.render(frame, Rect::new(0, 0, 30, 1), props("zz", true, &[], panel));
        });
        assert!(out.contains("No countries found"));
    }
}
