//! Sort selector
//!
//! A trigger showing the active option, with a dropdown of the view's sort
//! table. Selecting an option applies it and closes the menu.

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use studydeck_components::{popup, ListRow, OptionList, OptionListProps};
use studydeck_core::{Component, EventKind};

use crate::action::Action;

pub struct SortMenuProps<'a> {
    pub labels: &'a [String],
    pub active: usize,
    pub open: bool,
    pub highlighted: usize,
    pub is_focused: bool,
    pub panel: Option<Rect>,
}

#[derive(Default)]
pub struct SortMenu {
    list: OptionList,
}

fn rows(labels: &[String], active: usize) -> Vec<ListRow> {
    labels
        .iter()
        .enumerate()
        .map(|(i, l)| ListRow::checked(l.clone(), i == active))
        .collect()
}

impl SortMenu {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for SortMenu {
    type Props<'a> = SortMenuProps<'a>;

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
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                out.push(Action::SortMenuToggle);
            }
            return out;
        }

        match key.code {
            KeyCode::Esc => out.push(Action::SortMenuDismiss),
            _ => {
                let rows = rows(props.labels, props.active);
                out.extend(self.list.handle_event(
                    event,
                    OptionListProps {
                        rows: &rows,
                        highlighted: props.highlighted,
                        is_focused: true,
                        empty_text: "",
                        on_highlight: Action::SortHighlight,
                        on_activate: Action::SortSelect,
                    },
                ));
            }
        }
        out
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let active = props
            .labels
            .get(props.active)
            .map(String::as_str)
            .unwrap_or_default();
        let label_style = if props.is_focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled("Sort by: ", Style::default().fg(Color::DarkGray)),
            Span::styled(active, label_style),
            Span::raw(if props.open { " ▴" } else { " ▾" }),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        if let Some(panel) = props.panel.filter(|_| props.open) {
            let inner = popup::draw_panel(frame, panel);
            let rows = rows(props.labels, props.active);
            self.list.render(
                frame,
                inner,
                OptionListProps {
                    rows: &rows,
                    highlighted: props.highlighted,
                    is_focused: props.is_focused,
                    empty_text: "",
                    on_highlight: Action::SortHighlight,
                    on_activate: Action::SortSelect,
                },
            );
        }
    }
}
