//! # tuibox
//!
//! A box-model terminal UI toolkit: components laid out in nested
//! margin/border/padding/content rectangles, painted into character grids,
//! and composited recursively into a single frame.
//!
//! ## Core Systems
//!
//! - **[`geometry`]**: Coordinates, Rectangle, Spacing, and the bounded write cursor
//! - **[`style`]**: Style attributes, border glyph sets, and the `attr=value` style parser
//! - **[`area`]**: Box model and the character grid every component paints into
//! - **[`dom`]**: Slotmap-backed component tree with id-indexed child lists and hit testing
//! - **[`widget`]**: The Widget trait
//! - **[`widgets`]**: Built-in widgets: Label
//! - **[`render`]**: Block/inline compositor, frame diffing, and crossterm driver
//! - **[`screen`]**: Root container, render loop step, and focus
//! - **[`testing`]**: Fixtures and text capture for tests

// Foundation
pub mod geometry;
pub mod style;
pub mod area;

// Component tree
pub mod dom;

// Widget system
pub mod widget;
pub mod widgets;

// Rendering
pub mod render;
pub mod screen;

// Test support
pub mod testing;

pub use area::{Area, AreaError};
pub use dom::{Component, Dom, NodeId};
pub use geometry::{Coordinates, Rectangle};
pub use render::{Compositor, CompositorError};
pub use screen::Screen;
pub use style::{Border, Style};
