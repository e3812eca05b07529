//! Single-line text input

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use studydeck_core::{Component, EventKind};

/// Props for [`TextInput`].
pub struct TextInputProps<'a, A> {
    /// Current value (owned by app state, not the component)
    pub value: &'a str,
    /// Shown dimmed when the value is empty
    pub placeholder: &'a str,
    pub is_focused: bool,
    /// Emitted on every edit
    pub on_change: fn(String) -> A,
    /// Emitted on Enter with the current value
    pub on_submit: fn(String) -> A,
}

/// Borderless one-line input with a cursor.
///
/// The value lives in props; only the cursor position is internal. Emits
/// `on_change` per keystroke and `on_submit` on Enter. Ctrl+U clears.
#[derive(Default)]
pub struct TextInput {
    /// Byte index into the value
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_cursor(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while self.cursor > 0 && !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn prev_boundary(&self, value: &str) -> usize {
        value[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self, value: &str) -> usize {
        value[self.cursor..]
            .chars()
            .next()
            .map_or(self.cursor, |c| self.cursor + c.len_utf8())
    }

    fn insert(&mut self, value: &str, c: char) -> String {
        let mut out = String::with_capacity(value.len() + c.len_utf8());
        out.push_str(&value[..self.cursor]);
        out.push(c);
        out.push_str(&value[self.cursor..]);
        self.cursor += c.len_utf8();
        out
    }

    fn backspace(&mut self, value: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let start = self.prev_boundary(value);
        let mut out = String::with_capacity(value.len());
        out.push_str(&value[..start]);
        out.push_str(&value[self.cursor..]);
        self.cursor = start;
        Some(out)
    }

    fn delete(&self, value: &str) -> Option<String> {
        if self.cursor >= value.len() {
            return None;
        }
        let end = self.next_boundary(value);
        let mut out = String::with_capacity(value.len());
        out.push_str(&value[..self.cursor]);
        out.push_str(&value[end..]);
        Some(out)
    }
}

impl<A> Component<A> for TextInput {
    type Props<'a> = TextInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.is_focused {
            return None;
        }
        self.clamp_cursor(props.value);

        let EventKind::Key(key) = event else {
            return None;
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('u') => {
                    self.cursor = 0;
                    Some((props.on_change)(String::new()))
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) => Some((props.on_change)(self.insert(props.value, c))),
            KeyCode::Backspace => self.backspace(props.value).map(props.on_change),
            KeyCode::Delete => self.delete(props.value).map(props.on_change),
            KeyCode::Left => {
                self.cursor = self.prev_boundary(props.value);
                None
            }
            KeyCode::Right => {
                self.cursor = self.next_boundary(props.value);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = props.value.len();
                None
            }
            KeyCode::Enter => Some((props.on_submit)(props.value.to_string())),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.clamp_cursor(props.value);

        let (text, style) = if props.value.is_empty() {
            (props.placeholder, Style::default().fg(Color::DarkGray))
        } else {
            (props.value, Style::default())
        };
        frame.render_widget(Paragraph::new(text).style(style), area);

        if props.is_focused {
            let offset = props.value[..self.cursor].chars().count() as u16;
            let x = area.x.saturating_add(offset).min(area.right().saturating_sub(1));
            frame.set_cursor_position((x, area.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studydeck_core::testing::{key_event, RenderHarness};

    #[derive(Debug, Clone, PartialEq)]
    enum TestAction {
        Change(String),
        Submit(String),
    }

    fn props(value: &str, focused: bool) -> TextInputProps<'_, TestAction> {
        TextInputProps {
            value,
            placeholder: "Search...",
            is_focused: focused,
            on_change: TestAction::Change,
            on_submit: TestAction::Submit,
        }
    }

    #[test]
    fn typing_emits_change() {
        let mut input = TextInput::new();
        let actions: Vec<_> = input
            .handle_event(&key_event("a"), props("", true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Change("a".into())]);
    }

    #[test]
    fn typing_appends_at_cursor_end() {
        let mut input = TextInput::new();
        input.cursor = 5;
        let actions: Vec<_> = input
            .handle_event(&key_event("!"), props("hello", true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Change("hello!".into())]);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut input = TextInput::new();
        input.cursor = 5;
        let actions: Vec<_> = input
            .handle_event(&key_event("backspace"), props("hello", true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Change("hell".into())]);
        assert_eq!(input.cursor, 4);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::new();
        let actions: Vec<_> = input
            .handle_event(&key_event("backspace"), props("hello", true))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn enter_submits_value() {
        let mut input = TextInput::new();
        let actions: Vec<_> = input
            .handle_event(&key_event("enter"), props("hello", true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Submit("hello".into())]);
    }

    #[test]
    fn unfocused_ignores_keys() {
        let mut input = TextInput::new();
        let actions: Vec<_> = input
            .handle_event(&key_event("a"), props("", false))
            .into_iter()
            .collect();
        assert!(actions.is_empty());
    }

    #[test]
    fn multibyte_backspace_stays_on_boundaries() {
        let mut input = TextInput::new();
        let value = "zü";
        input.cursor = value.len();
        let actions: Vec<_> = input
            .handle_event(&key_event("backspace"), props(value, true))
            .into_iter()
            .collect();
        assert_eq!(actions, vec![TestAction::Change("z".into())]);
    }

    #[test]
    fn renders_placeholder_when_empty() {
        let mut harness = RenderHarness::new(20, 1);
        let mut input = TextInput::new();
        let out = harness.render_to_string(|frame| {
            input.render(frame, frame.area(), props("", true));
        });
        assert!(out.contains("Search..."));
    }
}
