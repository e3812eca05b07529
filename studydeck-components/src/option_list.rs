//! Scrollable option list with optional check marks
//!
//! Backs the dropdown panels: sort options (single active mark), the
//! country candidate list (multi-select check marks plus a right-aligned
//! code column), and the location autocomplete list (no marks at all).

use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use studydeck_core::{Component, EventKind};

/// One visible row.
pub struct ListRow {
    pub label: String,
    /// Right-aligned secondary text (country code, flag URL hint)
    pub detail: Option<String>,
    /// `Some(true|false)` renders a check mark column; `None` renders none
    pub checked: Option<bool>,
}

impl ListRow {
    pub fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
            checked: None,
        }
    }

    pub fn checked(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            detail: None,
            checked: Some(checked),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Props for [`OptionList`].
pub struct OptionListProps<'a, A> {
    pub rows: &'a [ListRow],
    /// Index of the highlighted row (owned by app state)
    pub highlighted: usize,
    pub is_focused: bool,
    /// Shown when `rows` is empty ("No countries found")
    pub empty_text: &'a str,
    pub on_highlight: fn(usize) -> A,
    /// Enter/Space on the highlighted row
    pub on_activate: fn(usize) -> A,
}

/// Keyboard-navigated list. Up/Down move the highlight, Home/End jump,
/// Enter or Space activate. Only the scroll offset is internal.
#[derive(Default)]
pub struct OptionList {
    offset: usize,
}

impl OptionList {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_visible(&mut self, highlighted: usize, viewport: usize) {
        if viewport == 0 {
            return;
        }
        if highlighted < self.offset {
            self.offset = highlighted;
        } else if highlighted >= self.offset + viewport {
            self.offset = highlighted + 1 - viewport;
        }
    }
}

impl<A> Component<A> for OptionList {
    type Props<'a> = OptionListProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused || props.rows.is_empty() {
            return None;
        }
        let last = props.rows.len() - 1;
        let EventKind::Key(key) = event else {
            return None;
        };
        match key.code {
            KeyCode::Down => {
                let next = (props.highlighted + 1).min(last);
                (next != props.highlighted).then(|| (props.on_highlight)(next))
            }
            KeyCode::Up => {
                let next = props.highlighted.saturating_sub(1);
                (next != props.highlighted).then(|| (props.on_highlight)(next))
            }
            KeyCode::Home => (props.highlighted != 0).then(|| (props.on_highlight)(0)),
            KeyCode::End => (props.highlighted != last).then(|| (props.on_highlight)(last)),
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some((props.on_activate)(props.highlighted.min(last)))
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.rows.is_empty() {
            let empty = Paragraph::new(props.empty_text).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }

        self.ensure_visible(props.highlighted, area.height as usize);

        let width = area.width as usize;
        let items: Vec<ListItem> = props
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mark = match row.checked {
                    Some(true) => "(x) ",
                    Some(false) => "( ) ",
                    None => "",
                };
                let mut spans = vec![Span::raw(mark), Span::raw(row.label.as_str())];
                if let Some(detail) = &row.detail {
                    let used = mark.len() + row.label.chars().count() + detail.chars().count();
                    let pad = width.saturating_sub(used + 1).max(1);
                    spans.push(Span::raw(" ".repeat(pad)));
                    spans.push(Span::styled(
                        detail.as_str(),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                let style = if i == props.highlighted && props.is_focused {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if row.checked == Some(true) {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(spans)).style(style)
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(props.highlighted));
        *state.offset_mut() = self.offset;
        frame.render_stateful_widget(List::new(items), area, &mut state);
    }
}
