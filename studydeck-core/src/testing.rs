//! Test utilities
//!
//! Helpers for exercising components and reducers without a real terminal:
//! event constructors ([`key`], [`mouse_down`], [`scroll`]), a
//! [`RenderHarness`] over ratatui's `TestBackend`, and assertion macros for
//! emitted actions.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{backend::TestBackend, Frame, Terminal};

use crate::event::EventKind;

/// Create a `KeyEvent` from a short name: a single character, or one of
/// `enter`, `esc`, `tab`, `backtab`, `backspace`, `delete`, `up`, `down`,
/// `left`, `right`, `home`, `end`, `pageup`, `pagedown`, `space`.
///
/// # Panics
///
/// Panics on an unknown name; this is a test helper.
pub fn key(s: &str) -> KeyEvent {
    let code = match s {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => panic!("unknown key name: {s:?}"),
            }
        }
    };
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// [`key`] wrapped as an [`EventKind`].
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Left-button press at a position.
pub fn mouse_down(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Pointer movement (never dismisses anything).
pub fn mouse_move(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Moved, column, row)
}

/// Scroll-wheel event at a position.
pub fn scroll(column: u16, row: u16, delta: isize) -> EventKind {
    EventKind::Scroll { column, row, delta }
}

/// Renders into an in-memory buffer and returns it as plain text, for
/// asserting on visible output.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal }
    }

    /// Run a render closure and return the buffer contents, one line per
    /// row, trailing whitespace trimmed.
    pub fn render_to_string(&mut self, render: impl FnOnce(&mut Frame)) -> String {
        self.terminal.draw(render).expect("draw");
        let buffer = self.terminal.backend().buffer();
        let area = *buffer.area();
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            let mut line = String::new();
            for x in area.left()..area.right() {
                line.push_str(buffer[(x, y)].symbol());
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Assert that an action matching the pattern was emitted.
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "expected action matching `{}`, got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching the pattern was emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "expected no action matching `{}`, got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn key_names_parse() {
        assert_eq!(key("q").code, KeyCode::Char('q'));
        assert_eq!(key("enter").code, KeyCode::Enter);
        assert_eq!(key("backtab").code, KeyCode::BackTab);
        assert_eq!(key("space").code, KeyCode::Char(' '));
    }

    #[test]
    fn render_harness_captures_text() {
        let mut harness = RenderHarness::new(20, 3);
        let out = harness.render_to_string(|frame| {
            frame.render_widget(Paragraph::new("hello world"), frame.area());
        });
        assert!(out.contains("hello world"));
    }

    #[test]
    fn assert_macros() {
        #[derive(Debug)]
        enum A {
            X,
            Y(u32),
        }
        let actions = vec![A::X, A::Y(2)];
        assert_emitted!(actions, A::X);
        assert_emitted!(actions, A::Y(n) if *n == 2);
        assert_not_emitted!(actions, A::Y(3));
    }
}
