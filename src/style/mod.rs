//! Component styles: box-model sizes, orientation, text layout, focus, borders.
//!
//! A [`Style`] is a plain resolved struct. Attribute access by name goes
//! through a static table ([`Style::set_value`] / [`Style::get_value`]) and
//! human-readable style strings are parsed with [`str::parse`].

pub mod border;
pub mod parser;
pub mod styles;
pub mod tokenizer;

pub use border::{Border, BorderKind};
pub use styles::{
    AreaInfo, CompositorInfo, FocusInfo, Orientation, Style, StyleError, StyleValue, TextAlign,
    TextInfo, VerticalAlign,
};
