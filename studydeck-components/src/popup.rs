//! Anchored dropdown panel
//!
//! Positions a panel directly below a trigger row, clamped to the frame,
//! and clears whatever it covers so dropdowns read as overlays.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Rect for a panel of `width` x `height` opening below `trigger`.
///
/// The panel is clamped to `frame`: shifted left if it would overflow the
/// right edge, and flipped above the trigger if there is no room below.
pub fn below(trigger: Rect, width: u16, height: u16, frame: Rect) -> Rect {
    let width = width.min(frame.width);
    let height = height.min(frame.height);

    let mut x = trigger.x;
    if x + width > frame.right() {
        x = frame.right().saturating_sub(width);
    }

    let below_y = trigger.bottom();
    let y = if below_y + height <= frame.bottom() {
        below_y
    } else {
        trigger.y.saturating_sub(height)
    };

    Rect::new(x, y, width, height)
}

/// Clear the panel area and draw its border. Returns the inner area for
/// the panel content.
pub fn draw_panel(frame: &mut Frame, area: Rect) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}
