//! Widget trait: leaf components that paint their own content.
//!
//! A widget never owns children. The compositor hands it a copy of its
//! component's [`Area`] every frame and stamps whatever it painted into the
//! parent buffer.

use std::any::Any;

use crate::area::{Area, AreaError};
use crate::style::Style;

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
///
/// Object-safe: components store widgets as `Box<dyn Widget>`.
pub trait Widget {
    /// The type name for this widget (e.g. "Label").
    fn widget_type(&self) -> &str;

    /// Paint the widget's current state into `area`.
    ///
    /// Implementations usually reset the cursor to the content origin and
    /// call [`Area::add_chars`]. The area is the widget's own, already sized
    /// and bordered.
    fn render_to_area(&self, area: &mut Area) -> Result<(), AreaError>;

    /// Pick up the owning component's style. Called once when the widget is
    /// wrapped in a [`Component`](crate::Component).
    fn apply_style(&mut self, _style: &Style) {}

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for mutable runtime type inspection.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================
