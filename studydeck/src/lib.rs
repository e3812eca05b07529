//! Terminal directory browser for study-abroad courses and universities
//!
//! Two catalog views over read-only data: Courses and Universities, each a
//! filter-then-sort pipeline with a text search, a multi-select destination
//! filter, per-view sort tables and, for courses, a fee range and a
//! scholarship filter. State follows the store/reducer pattern from
//! `studydeck-core`; the widgets live in `studydeck-components`.

pub mod action;
pub mod catalog;
pub mod components;
pub mod reducer;
pub mod state;
pub mod ui;
pub mod views;

pub use action::Action;
pub use catalog::Catalog;
pub use reducer::reducer;
pub use state::{AppState, View};
pub use ui::Ui;
