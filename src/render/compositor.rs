//! Recursive compositing of a component tree into one character buffer.
//!
//! The `Compositor` walks the tree depth first. Each component is drawn into
//! a private copy of its stored [`Area`]; children are placed one after the
//! other inside the parent's content rectangle (stacked for BLOCK, side by
//! side for INLINE), composed recursively, and stamped into the copy. Every
//! component visited gets its absolute on-screen rectangle recorded for hit
//! testing. The stored areas themselves are never touched.

use tracing::{debug, trace, warn};

use crate::area::{Area, AreaError};
use crate::dom::{Component, Dom, NodeId};
use crate::geometry::{Coordinates, Rectangle};
use crate::style::{Border, Orientation};

/// Errors from composing a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompositorError {
    /// A child, or the content a widget painted, did not fit where it was
    /// placed.
    #[error("component area isn't large enough")]
    InsufficientArea {
        node: NodeId,
        #[source]
        source: AreaError,
    },
    #[error("node is not in the tree")]
    UnknownNode,
}

/// A callback run against the tree around each compose.
pub type Hook<'a> = Box<dyn FnMut(&mut Dom) + 'a>;

// ---------------------------------------------------------------------------
// CellUpdate
// ---------------------------------------------------------------------------

/// A single cell that changed between frames.
///
/// Used by the driver to emit minimal terminal escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    pub row: u16,
    pub column: u16,
    pub ch: char,
}

/// Cells of `next` that differ from `previous`.
///
/// Without a previous frame, or when the two differ in size, every cell of
/// `next` is reported.
pub fn diff(previous: Option<&Area>, next: &Area) -> Vec<CellUpdate> {
    let previous = previous.filter(|p| p.rows() == next.rows() && p.columns() == next.columns());
    let mut updates = Vec::new();

    for (row, cells) in next.grid().iter().enumerate() {
        for (column, &ch) in cells.iter().enumerate() {
            let unchanged = previous
                .and_then(|p| p.cell(row, column))
                .is_some_and(|old| old == ch);
            if !unchanged {
                updates.push(CellUpdate {
                    row: row as u16,
                    column: column as u16,
                    ch,
                });
            }
        }
    }
    updates
}

// ---------------------------------------------------------------------------
// Compositor
// ---------------------------------------------------------------------------

/// Composes a tree into a frame, running hooks before and after.
///
/// Pre-hooks typically update widget state for the coming frame; post-hooks
/// see the freshly recorded rectangle mappings.
#[derive(Default)]
pub struct Compositor<'a> {
    pre_hooks: Vec<Hook<'a>>,
    post_hooks: Vec<Hook<'a>>,
}

impl<'a> Compositor<'a> {
    pub fn new() -> Self {
        Self {
            pre_hooks: Vec::new(),
            post_hooks: Vec::new(),
        }
    }

    /// Register a hook to run before every compose.
    pub fn add_pre_hook(&mut self, hook: impl FnMut(&mut Dom) + 'a) {
        self.pre_hooks.push(Box::new(hook));
    }

    /// Register a hook to run after every successful compose.
    pub fn add_post_hook(&mut self, hook: impl FnMut(&mut Dom) + 'a) {
        self.post_hooks.push(Box::new(hook));
    }

    /// Compose the subtree at `root` into a new buffer the size of `root`'s
    /// area.
    ///
    /// `root` is mapped onto its own area rectangle, so every recorded
    /// mapping is relative to the root's top-left cell.
    pub fn compose(&mut self, dom: &mut Dom, root: NodeId) -> Result<Area, CompositorError> {
        for hook in &mut self.pre_hooks {
            hook(dom);
        }

        let mapping = *dom
            .get(root)
            .ok_or(CompositorError::UnknownNode)?
            .area()
            .model()
            .area_rect();
        debug!(?root, rows = mapping.rows(), columns = mapping.columns(), "compose start");

        let frame = compose_node(dom, root, mapping).inspect_err(|err| {
            warn!(%err, "compose failed");
        })?;

        for hook in &mut self.post_hooks {
            hook(dom);
        }
        debug!(?root, "compose done");
        Ok(frame)
    }

    /// A copy of `component`'s area with every cell set to `glyph`.
    pub fn fill_area(component: &Component, glyph: char) -> Result<Area, AreaError> {
        let mut area = component.area().clone();
        let full = *area.model().area_rect();
        let row = glyph.to_string().repeat(full.columns() as usize);
        let block = vec![row; full.rows() as usize].join("\n");

        area.restrict(full)?;
        area.write(&block)?;
        area.restore_restriction();
        Ok(area)
    }

    /// A copy of `component`'s area with a frame of `glyph` around its outer
    /// edge. Areas too small for a frame are filled instead.
    pub fn draw_border(component: &Component, glyph: char) -> Result<Area, AreaError> {
        let full = *component.area().model().area_rect();
        if full.rows() < 2 || full.columns() < 2 {
            return Self::fill_area(component, glyph);
        }

        let mut area = component.area().clone();
        area.restrict(full)?;
        area.stamp_frame(&Border::uniform(glyph))?;
        area.restore_restriction();
        Ok(area)
    }
}

// ---------------------------------------------------------------------------
// Recursion
// ---------------------------------------------------------------------------

fn compose_node(dom: &mut Dom, node: NodeId, mapping: Rectangle) -> Result<Area, CompositorError> {
    let component = dom.get_mut(node).ok_or(CompositorError::UnknownNode)?;
    component.set_rect_mapping(Some(mapping));

    let mut buffer = component.area().clone();
    if let Some(widget) = component.as_widget() {
        widget
            .render_to_area(&mut buffer)
            .map_err(|source| insufficient(node, source))?;
    }
    let orientation = component.style().compositor_info.orientation;
    let content = *buffer.model().with_padding();
    let children = component.children().to_vec();

    let origin = mapping.top_left() + content.top_left();
    let mut previous: Option<Rectangle> = None;

    for child in children {
        let size = *dom
            .get(child)
            .ok_or(CompositorError::UnknownNode)?
            .area()
            .model()
            .area_rect();
        let target = next_rectangle(orientation, previous.as_ref(), &size, &content)
            .map_err(|source| insufficient(child, source))?;
        let child_mapping = size.translate(origin + target.top_left());
        trace!(
            parent = ?node,
            ?child,
            row = child_mapping.top(),
            column = child_mapping.left(),
            "placed child"
        );

        let rendered = compose_node(dom, child, child_mapping)?;
        buffer
            .move_cursor(content.top_left() + target.top_left())
            .and_then(|()| buffer.add_chars(&rendered.to_string(), true, true))
            .map_err(|source| insufficient(child, source))?;

        previous = Some(target);
    }

    Ok(buffer)
}

/// Where the next child goes, relative to the parent's content origin.
///
/// BLOCK children span the content width and stack below `previous`; INLINE
/// children span the content height and line up to its right. The first
/// child is placed as if `previous` were a zero-size rectangle just above
/// (BLOCK) or just left of (INLINE) the origin.
fn next_rectangle(
    orientation: Orientation,
    previous: Option<&Rectangle>,
    size: &Rectangle,
    content: &Rectangle,
) -> Result<Rectangle, AreaError> {
    let target = match orientation {
        Orientation::Block => {
            let above = previous.map_or(-1, Rectangle::bottom);
            Rectangle::new(
                Coordinates::new(above + 1, 0),
                Coordinates::new(above + size.rows(), content.columns() - 1),
            )?
        }
        Orientation::Inline => {
            let before = previous.map_or(-1, Rectangle::right);
            Rectangle::new(
                Coordinates::new(0, before + 1),
                Coordinates::new(content.rows() - 1, before + size.columns()),
            )?
        }
    };

    let bounds = Rectangle::with_size(content.rows(), content.columns())?;
    if !bounds.contains_rect(&target) {
        return Err(AreaError::TooLarge {
            rows: content.rows(),
            columns: content.columns(),
        });
    }
    Ok(target)
}

fn insufficient(node: NodeId, source: AreaError) -> CompositorError {
    warn!(?node, %source, "insufficient area");
    CompositorError::InsufficientArea { node, source }
}

// ===========================================================================
// Tests
// ===========================================================================
