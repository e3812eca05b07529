//! Scholarship yes/no filter
//!
//! Two radio options plus a clear state. `y` and `n` set, `c` (or Delete)
//! clears back to showing everything.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use studydeck_core::{Component, EventKind};

use crate::action::Action;
use crate::state::Scholarship;

pub struct ScholarshipProps {
    pub value: Scholarship,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct ScholarshipPicker;

impl ScholarshipPicker {
    pub fn new() -> Self {
        Self
    }
}

impl Component<Action> for ScholarshipPicker {
    type Props<'a> = ScholarshipProps;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };
        match key.code {
            KeyCode::Char('y') => Some(Action::ScholarshipSet(Scholarship::Yes)),
            KeyCode::Char('n') => Some(Action::ScholarshipSet(Scholarship::No)),
            KeyCode::Char('c') | KeyCode::Delete => Some(Action::ScholarshipClear),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let radio = |own: Scholarship, label: &'static str| {
            let mark = if props.value == own { "(x) " } else { "( ) " };
            let style = if props.value == own {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Span::styled(format!("{mark}{label}"), style)
        };
        let line = Line::from(vec![
            radio(Scholarship::Yes, "Yes"),
            Span::raw("   "),
            radio(Scholarship::No, "No"),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        if props.is_focused && area.height >= 2 {
            let hint = Rect {
                y: area.y + 1,
                height: 1,
                ..area
            };
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "y / n / c to clear",
                    Style::default().fg(Color::DarkGray),
                )),
                hint,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studydeck_core::assert_emitted;
    use studydeck_core::testing::{key_event, RenderHarness};

    fn props(value: Scholarship) -> ScholarshipProps {
        ScholarshipProps {
            value,
            is_focused: true,
        }
    }

    #[test]
    fn keys_set_and_clear() {
        let mut picker = ScholarshipPicker::new();
        let actions: Vec<_> = picker
            .handle_event(&key_event("y"), props(Scholarship::Unset))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::ScholarshipSet(Scholarship::Yes));

        let actions: Vec<_> = picker
            .handle_event(&key_event("c"), props(Scholarship::Yes))
            .into_iter()
            .collect();
        assert_emitted!(actions, Action::ScholarshipClear);
    }

    #[test]
    fn unfocused_ignores_keys() {
        let mut picker = ScholarshipPicker::new();
        let actions: Vec<_> = picker
            .handle_event(
                &key_event("y"),
                ScholarshipProps {
                    value: Scholarship::Unset,
                    is_focused: false,
                },
            )
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn renders_marked_radio() {
        let mut harness = RenderHarness::new(30, 2);
        let mut picker = ScholarshipPicker::new();
        let out = harness.render_to_string(|frame| {
            picker.render(frame, frame.area(), props(Scholarship::No));
        });
        assert!(out.contains("( ) Yes"));
        assert!(out.contains("(x) No"));
    }
}
