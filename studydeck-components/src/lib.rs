//! Reusable widgets for studydeck views
//!
//! Everything here follows the [`studydeck_core::Component`] rules: values
//! and highlights live in app state and arrive through props; only
//! presentation state (cursor, scroll offset) is internal.

pub mod option_list;
pub mod popup;
pub mod text_input;

pub use option_list::{ListRow, OptionList, OptionListProps};
pub use text_input::{TextInput, TextInputProps};
