//! Top bar: brand, view tabs and the page menu
//!
//! The page menu mirrors the tabs for narrow terminals. It only receives
//! events while open; the tabs themselves are driven by shortcut keys and
//! the menu.

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
use crate::state::View;

pub struct HeaderProps {
    pub view: View,
    pub menu_open: bool,
    pub highlighted: usize,
    pub panel: Option<Rect>,
}

#[derive(Default)]
pub struct Header {
    list: OptionList,
}

fn rows(active: View) -> Vec<ListRow> {
    View::ALL
        .iter()
        .map(|v| ListRow::checked(v.label(), *v == active))
        .collect()
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for Header {
    type Props<'a> = HeaderProps;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        let mut out = Vec::new();
        if !props.menu_open {
            return out;
        }
        if let EventKind::Key(key) = event {
            if key.code == KeyCode::Esc {
                out.push(Action::ViewMenuDismiss);
                return out;
            }
        }
        let rows = rows(props.view);
        out.extend(self.list.handle_event(
            event,
            OptionListProps {
                rows: &rows,
                highlighted: props.highlighted,
                is_focused: true,
                empty_text: "",
                on_highlight: Action::ViewMenuHighlight,
                on_activate: Action::ViewMenuActivate,
            },
        ));
        out
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let tab = |view: View| {
            let style = if view == props.view {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            Span::styled(view.label(), style)
        };

        let line = Line::from(vec![
            Span::styled(
                " StudyDeck ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            tab(View::Courses),
            Span::raw("  "),
            tab(View::Universities),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        let trigger = Span::styled(
            if props.menu_open { "Menu ▴" } else { "Menu ▾" },
            Style::default().fg(Color::Gray),
        );
        let trigger_area = Self::menu_trigger(area);
        frame.render_widget(Paragraph::new(trigger), trigger_area);

        if let Some(panel) = props.panel.filter(|_| props.menu_open) {
            let inner = popup::draw_panel(frame, panel);
            let rows = rows(props.view);
            self.list.render(
                frame,
                inner,
                OptionListProps {
                    rows: &rows,
                    highlighted: props.highlighted,
                    is_focused: true,
                    empty_text: "",
                    on_highlight: Action::ViewMenuHighlight,
                    on_activate: Action::ViewMenuActivate,
                },
            );
        }
    }
}

impl Header {
    /// Where the page-menu trigger sits within the header row.
    pub fn menu_trigger(area: Rect) -> Rect {
        let w = 6;
        Rect {
            x: area.right().saturating_sub(w + 1),
            y: area.y,
            width: w,
            height: 1,
        }
    }
}
