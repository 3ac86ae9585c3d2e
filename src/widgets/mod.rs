//! Built-in widgets.

pub mod label;

pub use label::Label;
