//! Scoped registry of global event observers
//!
//! Outside-click dismissal and scroll tracking observe the whole UI
//! environment, not one widget. Each view subscribes the observers it needs
//! when it becomes active and cancels them when it goes away, so a view
//! switch can never leak a listener from the previous view.
//!
//! # Example
//!
//! ```ignore
//! let mut listeners: Listeners<Action, Anchor> = Listeners::new();
//!
//! // On view activation:
//! listeners.on_outside_press("dismiss:sort", Anchor::SortMenu, || Action::SortMenuDismiss);
//! listeners.on_scroll("scroll:results", Anchor::Results, Action::ResultsScroll);
//!
//! // Every event:
//! for action in listeners.notify(&event, &ctx) { ... }
//!
//! // On view deactivation:
//! listeners.cancel_all();
//! ```

use crate::event::{AnchorId, EventContext, EventKind};

/// Identifies a listener for replacement and cancellation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListenerKey(String);

impl ListenerKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ListenerKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ListenerKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

type Handler<A, Id> = Box<dyn Fn(&EventKind, &EventContext<Id>) -> Option<A>>;

/// Keyed set of global observers mapping events to actions.
///
/// Entries are kept in subscription order so notification is deterministic.
/// Subscribing with an existing key replaces the old entry.
pub struct Listeners<A, Id: AnchorId> {
    entries: Vec<(ListenerKey, Handler<A, Id>)>,
}

impl<A, Id: AnchorId> Default for Listeners<A, Id> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, Id: AnchorId> Listeners<A, Id> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Subscribe a raw observer. Replaces any entry with the same key.
    pub fn subscribe<F>(&mut self, key: impl Into<ListenerKey>, handler: F) -> &mut Self
    where
        F: Fn(&EventKind, &EventContext<Id>) -> Option<A> + 'static,
    {
        let key = key.into();
        self.cancel(&key);
        self.entries.push((key, Box::new(handler)));
        self
    }

    /// Emit an action when a pointer-down lands outside `anchor`.
    ///
    /// This is the "click outside closes the menu" behavior, registered
    /// once per dropdown instead of reimplemented by each.
    pub fn on_outside_press<F>(
        &mut self,
        key: impl Into<ListenerKey>,
        anchor: Id,
        action: F,
    ) -> &mut Self
    where
        F: Fn() -> A + 'static,
    {
        self.subscribe(key, move |event, ctx| {
            let (x, y) = event.pointer_down()?;
            ctx.misses(anchor, x, y).then(&action)
        })
    }

    /// Emit an action for scroll-wheel movement within `anchor`.
    pub fn on_scroll<F>(&mut self, key: impl Into<ListenerKey>, anchor: Id, action: F) -> &mut Self
    where
        F: Fn(isize) -> A + 'static,
    {
        self.subscribe(key, move |event, ctx| match *event {
            EventKind::Scroll { column, row, delta } if ctx.hits(anchor, column, row) => {
                Some(action(delta))
            }
            _ => None,
        })
    }

    /// Cancel a listener by key. No-op if absent.
    pub fn cancel(&mut self, key: &ListenerKey) {
        self.entries.retain(|(k, _)| k != key);
    }

    /// Cancel everything. Called on view deactivation and shutdown.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_active(&self, key: &ListenerKey) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every listener against an event, collecting emitted actions in
    /// subscription order.
    pub fn notify(&self, event: &EventKind, ctx: &EventContext<Id>) -> Vec<A> {
        self.entries
            .iter()
            .filter_map(|(_, h)| h(event, ctx))
            .collect()
    }
}
