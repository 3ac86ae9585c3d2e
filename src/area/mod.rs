//! Areas: the fixed-size character grids components render into.
//!
//! Each area carries a [`BoxModel`] (margin / border / padding / content
//! rectangles, as in the CSS box model) and a bounded write cursor.

pub mod box_model;
pub mod buffer;

pub use box_model::BoxModel;
pub use buffer::{Area, AreaError};
