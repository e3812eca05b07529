//! View components
//!
//! Each component renders from props built off `AppState` and emits
//! [`crate::action::Action`]s; the layout in [`crate::ui`] places them and
//! registers their anchor regions.

pub mod destination;
pub mod fee_slider;
pub mod header;
pub mod listing_grid;
pub mod location;
pub mod scholarship;
pub mod sort_menu;

pub use destination::{DestinationFilter, DestinationProps};
pub use fee_slider::{FeeSlider, FeeSliderProps};
pub use header::{Header, HeaderProps};
pub use listing_grid::{GridRows, ListingGrid, ListingGridProps};
pub use location::{LocationField, LocationFieldProps};
pub use scholarship::{ScholarshipPicker, ScholarshipProps};
pub use sort_menu::{SortMenu, SortMenuProps};
