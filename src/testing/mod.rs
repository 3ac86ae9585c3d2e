//! Test helpers: filled fixtures and plain-text frame capture.
//!
//! Use [`fill_component`] to build containers with a recognisable background
//! and [`area_to_string`] / [`rows_of`] to compare composed frames as text.

pub mod snapshot;

pub use snapshot::{area_to_string, fill_component, rows_of};
