//! Core state machine for filterable catalog browsers
//!
//! This crate holds the generic half of studydeck: a small Redux-style
//! store, the [`Component`] trait, and the filterable-listing building
//! blocks the two catalog views share.
//!
//! # Core concepts
//!
//! - **Action**: a named event describing a state change
//! - **Store**: the single state container; all mutation goes through its
//!   reducer
//! - **Component**: pure UI that renders from props and emits actions
//! - **Dropdown**: dismissible open/closed state with an anchor region;
//!   a pointer-down outside the region closes it
//! - **Listing**: text query + bounded range + stable sort, composed into
//!   the filter-then-sort pipeline
//! - **Listeners**: scoped global observers (outside-click, scroll) with
//!   guaranteed teardown on view switches
//!
//! # Example
//!
//! ```ignore
//! let mut store = Store::new(AppState::new(catalog), reducer);
//! store.dispatch(Action::SearchSet("ai".into()));
//! let shown = compose(&store.state().catalog.courses, keep, &sort_key);
//! ```

pub mod component;
pub mod dropdown;
pub mod event;
pub mod listeners;
pub mod listing;
pub mod select;
pub mod sort;
pub mod store;
pub mod testing;

pub use component::Component;
pub use dropdown::Dropdown;
pub use event::{
    process_raw_event, spawn_event_poller, AnchorId, EventContext, EventKind, RawEvent,
};
pub use listeners::{ListenerKey, Listeners};
pub use listing::{compose, BoundedRange, Record, TextQuery};
pub use select::{Keyed, MultiSelect};
pub use sort::SortKey;
pub use store::{Action, Reducer, Store};

// Re-export the ratatui types every component signature needs
pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};
