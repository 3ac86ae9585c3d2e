//! Snapshot rendering helpers.

use crate::area::{Area, AreaError};
use crate::dom::Component;
use crate::render::Compositor;
use crate::style::Style;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render an area as text, one line per row, trailing spaces trimmed.
///
/// # Examples
///
/// ```ignore
/// let frame = Compositor::new().compose(&mut dom, root)?;
/// assert_eq!(area_to_string(&frame), "hello\n\nworld");
/// ```
pub fn area_to_string(area: &Area) -> String {
    area.lines()
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A container styled with `style` whose whole area is `glyph`.
pub fn fill_component(style: Style, glyph: char) -> Result<Component, AreaError> {
    let mut component = Component::container(style)?;
    let area = Compositor::fill_area(&component, glyph)?;
    component.set_area(area);
    Ok(component)
}

/// Expand `(count, line)` runs into the full list of expected rows.
///
/// ```ignore
/// assert_eq!(frame.lines(), rows_of(&[(3, "***"), (7, "+++")]));
/// ```
pub fn rows_of(runs: &[(usize, &str)]) -> Vec<String> {
    runs.iter()
        .flat_map(|&(count, line)| std::iter::repeat(line.to_owned()).take(count))
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
