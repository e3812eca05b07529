//! Dismissible dropdown state
//!
//! A dropdown is visible iff its `open` flag is set. The only implicit way
//! it closes is a pointer-down outside its anchor region. Dropdowns are
//! tracked independently: opening one never closes a sibling, so several
//! menus may be open at once. That is a deliberate contract, not a bug.

use crate::event::{AnchorId, EventContext, EventKind};

/// Open/closed state for one dismissible menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dropdown<Id: AnchorId> {
    anchor: Id,
    open: bool,
}

impl<Id: AnchorId> Dropdown<Id> {
    /// Create a closed dropdown tied to an anchor region.
    pub fn new(anchor: Id) -> Self {
        Self {
            anchor,
            open: false,
        }
    }

    pub fn anchor(&self) -> Id {
        self.anchor
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` if the flag changed.
    pub fn set_open(&mut self, open: bool) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        true
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) -> bool {
        self.set_open(false)
    }

    /// Whether `event` is a pointer-down outside this dropdown's anchor.
    ///
    /// Callers emit their dismiss action when this holds; the reducer then
    /// calls [`Dropdown::close`]. Checking here rather than closing directly
    /// keeps all mutation in the reducer.
    pub fn pressed_outside(&self, event: &EventKind, ctx: &EventContext<Id>) -> bool {
        match event.pointer_down() {
            Some((x, y)) => self.open && ctx.misses(self.anchor, x, y),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mouse_down, mouse_move};
    use ratatui::layout::Rect;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Anchor {
        Sort,
        Destination,
    }

    fn ctx_with_anchors() -> EventContext<Anchor> {
        let mut ctx = EventContext::new();
        ctx.add_anchor(Anchor::Sort, Rect::new(40, 2, 20, 6));
        ctx.add_anchor(Anchor::Destination, Rect::new(0, 4, 24, 10));
        ctx
    }

    #[test]
    fn visible_iff_open() {
        let mut dd = Dropdown::new(Anchor::Sort);
        assert!(!dd.is_open());
        dd.toggle();
        assert!(dd.is_open());
        dd.toggle();
        assert!(!dd.is_open());
    }

    #[test]
    fn press_outside_anchor_requests_dismissal() {
        let ctx = ctx_with_anchors();
        let mut dd = Dropdown::new(Anchor::Sort);
        dd.set_open(true);

        assert!(dd.pressed_outside(&mouse_down(0, 0), &ctx));
        assert!(!dd.pressed_outside(&mouse_down(45, 3), &ctx));
    }

    #[test]
    fn closed_dropdown_ignores_presses() {
        let ctx = ctx_with_anchors();
        let dd = Dropdown::new(Anchor::Sort);

        assert!(!dd.pressed_outside(&mouse_down(0, 0), &ctx));
    }

    #[test]
    fn non_press_events_never_dismiss() {
        let ctx = ctx_with_anchors();
        let mut dd = Dropdown::new(Anchor::Sort);
        dd.set_open(true);

        assert!(!dd.pressed_outside(&mouse_move(0, 0), &ctx));
    }

    #[test]
    fn siblings_are_independent() {
        let ctx = ctx_with_anchors();
        let mut sort = Dropdown::new(Anchor::Sort);
        let mut dest = Dropdown::new(Anchor::Destination);

        sort.set_open(true);
        dest.set_open(true);

        // A press inside the sort anchor still dismisses the destination
        // menu, and vice versa; each consults only its own region.
        let press = mouse_down(45, 3);
        assert!(!sort.pressed_outside(&press, &ctx));
        assert!(dest.pressed_outside(&press, &ctx));
    }

    #[test]
    fn set_open_reports_change() {
        let mut dd = Dropdown::new(Anchor::Sort);
        assert!(dd.set_open(true));
        assert!(!dd.set_open(true));
        assert!(dd.close());
        assert!(!dd.close());
    }
}
