//! Filtered grid view: validity, filtering, option sets and grid layout.
//!
//! Everything here is pure and synchronous. The application layer calls into
//! it whenever the records or the filter selection change, and the UI layer
//! uses [`GridLayout`] on every render so that resizes take effect at once.
//!
//! # Modules
//!
//! - [`filter`]: `FilterState`, the conjunctive predicate and dropdown stepping
//! - [`options`]: Option sets for the three filter controls
//! - [`grid`]: Cell geometry, index mapping and windowing

pub mod filter;
pub mod grid;
pub mod options;

pub use filter::{filter_vehicles, FilterDimension, FilterState, Step};
pub use grid::{GridCell, GridGeometry, GridLayout, Rect};
pub use options::{LabelIndex, OptionSets};
