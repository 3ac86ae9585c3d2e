//! The area box model.
//!
//! ```text
//! area_rect
//! +--------------------------------------+
//! |  with_margin                         |
//! |  xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx  |
//! |  x  with_border                   x  |
//! |  x  ╔════════════════════════════╗x  |
//! |  x  ║  with_padding (content)    ║x  |
//! |  x  ║  ++++++++++++++++++++++++  ║x  |
//! |  x  ║  +                      +  ║x  |
//! |  x  ║  ++++++++++++++++++++++++  ║x  |
//! |  x  ╚════════════════════════════╝x  |
//! |  xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx  |
//! +--------------------------------------+
//! ```
//!
//! All rectangles are relative to the area's own origin. Before a border is
//! stamped, `with_border` equals `with_margin`.

use crate::geometry::{CoordinateError, Rectangle, Spacing};
use crate::style::AreaInfo;

/// Four nested rectangles derived from an [`AreaInfo`].
///
/// `with_padding ⊆ with_border ⊆ with_margin ⊆ area_rect` always holds, and
/// every rectangle covers at least one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxModel {
    info: AreaInfo,
    area_rect: Rectangle,
    with_margin: Rectangle,
    with_border: Rectangle,
    with_padding: Rectangle,
    border: Spacing,
}

impl BoxModel {
    /// Derive the box model. Fails when the size is zero or the margins and
    /// paddings leave no content cell.
    pub fn new(info: AreaInfo) -> Result<Self, CoordinateError> {
        let area_rect = Rectangle::with_size(i32::from(info.rows), i32::from(info.columns))?;
        let with_margin = area_rect.shrink(info.margin())?;
        let with_border = with_margin.shrink(Spacing::ZERO)?;
        let with_padding = with_border.shrink(info.padding())?;
        Ok(Self {
            info,
            area_rect,
            with_margin,
            with_border,
            with_padding,
            border: Spacing::ZERO,
        })
    }

    /// Re-derive `with_border` (and `with_padding` from it) for a border of
    /// the given per-side thickness.
    ///
    /// On failure the model is unchanged.
    pub fn apply_border(&mut self, offsets: Spacing) -> Result<(), CoordinateError> {
        *self = self.bordered(offsets)?;
        Ok(())
    }

    /// The model this one would become after [`apply_border`](Self::apply_border).
    pub fn bordered(&self, offsets: Spacing) -> Result<Self, CoordinateError> {
        let with_border = self.with_margin.shrink(offsets)?;
        let with_padding = with_border.shrink(self.info.padding())?;
        Ok(Self {
            with_border,
            with_padding,
            border: offsets,
            ..self.clone()
        })
    }

    pub fn info(&self) -> &AreaInfo {
        &self.info
    }

    /// The whole area: `(0, 0)` to `(rows - 1, columns - 1)`.
    pub fn area_rect(&self) -> &Rectangle {
        &self.area_rect
    }

    pub fn with_margin(&self) -> &Rectangle {
        &self.with_margin
    }

    pub fn with_border(&self) -> &Rectangle {
        &self.with_border
    }

    /// The content rectangle.
    pub fn with_padding(&self) -> &Rectangle {
        &self.with_padding
    }

    /// Current border thickness per side.
    pub fn border(&self) -> Spacing {
        self.border
    }
}
