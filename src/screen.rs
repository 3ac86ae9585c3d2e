//! Screen: the root container, its compositor, and the last frame.
//!
//! [`Screen`] owns a [`Dom`] whose root is a full-size BLOCK container, composes
//! it on demand, and diffs each frame against the previous one so a driver
//! only repaints cells that changed.

use tracing::debug;

use crate::area::{Area, AreaError};
use crate::dom::{Component, Dom, DomError, NodeId};
use crate::geometry::Coordinates;
use crate::render::compositor::{diff, CellUpdate, Compositor, CompositorError};
use crate::style::Style;

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A single screen of the application.
pub struct Screen {
    /// The component tree. Its root is [`Screen::root`].
    pub dom: Dom,
    /// Hooks run around every [`render`](Self::render).
    pub compositor: Compositor<'static>,
    root: NodeId,
    previous: Option<Area>,
}

impl Screen {
    /// Create a screen of `rows` x `columns` cells.
    pub fn new(rows: u16, columns: u16) -> Result<Self, AreaError> {
        Self::with_root_style(Style::sized(rows, columns))
    }

    /// Create a screen whose root container uses `style`.
    pub fn with_root_style(style: Style) -> Result<Self, AreaError> {
        let mut dom = Dom::new();
        let root = dom.insert(Component::container(style)?);
        dom.set_root(root);
        Ok(Self {
            dom,
            compositor: Compositor::new(),
            root,
            previous: None,
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Insert `component` and append it to the root container.
    pub fn add(&mut self, component: Component) -> Result<NodeId, DomError> {
        let node = self.dom.insert(component);
        if let Err(err) = self.dom.append_child(self.root, node) {
            self.dom.remove(node);
            return Err(err);
        }
        Ok(node)
    }

    /// Compose the tree and return the cells that changed since the last
    /// frame. The first frame reports every cell.
    ///
    /// A failed compose keeps the previous frame.
    pub fn render(&mut self) -> Result<Vec<CellUpdate>, CompositorError> {
        let frame = self.compositor.compose(&mut self.dom, self.root)?;
        let updates = diff(self.previous.as_ref(), &frame);
        debug!(updates = updates.len(), "frame rendered");
        self.previous = Some(frame);
        Ok(updates)
    }

    /// The last successfully composed frame.
    pub fn frame(&self) -> Option<&Area> {
        self.previous.as_ref()
    }

    /// Focus whatever lies under `point` in the last frame.
    pub fn focus_at(&mut self, point: Coordinates) -> Option<NodeId> {
        self.dom.focus_at(point)
    }

    /// The currently focused node, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.dom.focused()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Label;

    fn label(text: &str, columns: u16) -> Component {
        Component::widget(Style::sized(1, columns), Label::new(text)).unwrap()
    }

    #[test]
    fn new_screen() {
        let screen = Screen::new(24, 80).unwrap();
        assert_eq!(screen.dom.root(), Some(screen.root()));
        assert_eq!(screen.dom.len(), 1);
        assert!(screen.frame().is_none());
        assert!(screen.focused().is_none());
    }

    #[test]
    fn zero_sized_screen_fails() {
        assert!(Screen::new(0, 80).is_err());
    }

    #[test]
    fn first_render_reports_every_cell() {
        let mut screen = Screen::new(2, 3).unwrap();
        assert_eq!(screen.render().unwrap().len(), 6);
        assert_eq!(screen.frame().unwrap().to_string(), "   \n   ");
    }

    #[test]
    fn later_renders_report_changes_only() {
        let mut screen = Screen::new(2, 5).unwrap();
        let node = screen.add(label("ab", 5)).unwrap();
        screen.render().unwrap();
        assert!(screen.render().unwrap().is_empty());

        screen.dom.widget_mut::<Label>(node).unwrap().set_text("xyz");
        let updates = screen.render().unwrap();
        assert_eq!(
            updates,
            vec![
                CellUpdate { row: 0, column: 1, ch: 'x' },
                CellUpdate { row: 0, column: 2, ch: 'y' },
                CellUpdate { row: 0, column: 3, ch: 'z' },
            ]
        );
    }

    #[test]
    fn add_rejects_duplicate_ids() {
        let mut screen = Screen::new(3, 5).unwrap();
        screen.add(label("a", 5).with_id("x")).unwrap();
        assert!(screen.add(label("b", 5).with_id("x")).is_err());
        assert_eq!(screen.dom.len(), 2);
    }

    #[test]
    fn failed_render_keeps_previous_frame() {
        let mut screen = Screen::new(1, 5).unwrap();
        screen.render().unwrap();
        screen.add(label("a", 5)).unwrap();
        screen.add(label("b", 5)).unwrap();
        assert!(matches!(
            screen.render(),
            Err(CompositorError::InsufficientArea { .. })
        ));
        assert_eq!(screen.frame().unwrap().to_string(), "     ");
    }

    #[test]
    fn focus_follows_hit_test() {
        let mut screen = Screen::new(3, 5).unwrap();
        let top = screen.add(label("a", 5)).unwrap();
        let bottom = screen.add(label("b", 5)).unwrap();
        screen.render().unwrap();

        assert_eq!(screen.focus_at(Coordinates::new(1, 4)), Some(bottom));
        assert_eq!(screen.focused(), Some(bottom));
        assert_eq!(screen.focus_at(Coordinates::new(0, 0)), Some(top));
        assert_eq!(screen.focus_at(Coordinates::new(2, 0)), Some(screen.root()));
    }
}
