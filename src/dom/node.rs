//! Node types: NodeId, Component, ComponentKind.

use std::fmt;

use slotmap::new_key_type;

use crate::area::{Area, AreaError};
use crate::geometry::Rectangle;
use crate::style::{Border, Style};
use crate::widget::Widget;

use super::node_list::NodeList;

new_key_type! {
    /// Unique identifier for a DOM node. Copy, lightweight (u64).
    pub struct NodeId;
}

/// What a component can do: hold children, or paint its own content.
pub enum ComponentKind {
    Container(NodeList),
    Widget(Box<dyn Widget>),
}

impl fmt::Debug for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Container(children) => {
                f.debug_tuple("Container").field(children).finish()
            }
            ComponentKind::Widget(widget) => f.debug_tuple("Widget").field(&widget.widget_type()).finish(),
        }
    }
}

/// A node of the component tree.
///
/// The area is built from the style once, at construction, and never resized.
#[derive(Debug)]
pub struct Component {
    id: Option<String>,
    style: Style,
    area: Area,
    focus: bool,
    /// Absolute screen rectangle, written by the compositor.
    rect_mapping: Option<Rectangle>,
    kind: ComponentKind,
}

impl Component {
    /// An empty container. The style's border, if any, is stamped right away.
    pub fn container(style: Style) -> Result<Self, AreaError> {
        Self::build(style, ComponentKind::Container(NodeList::new()))
    }

    /// A leaf component painted by `widget`.
    ///
    /// The widget is handed `style` first, so text settings written in the
    /// style string take effect.
    pub fn widget(style: Style, mut widget: impl Widget + 'static) -> Result<Self, AreaError> {
        widget.apply_style(&style);
        Self::build(style, ComponentKind::Widget(Box::new(widget)))
    }

    fn build(style: Style, kind: ComponentKind) -> Result<Self, AreaError> {
        let border = style.border.map(|kind| kind.glyphs());
        let area = Area::with_border(style.area_info, border.as_ref())?;
        Ok(Self {
            id: None,
            style,
            area,
            focus: false,
            rect_mapping: None,
            kind,
        })
    }

    /// Set the identifier (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn area(&self) -> &Area {
        &self.area
    }

    /// Swap in a prepared area, e.g. a filled fixture.
    pub fn set_area(&mut self, area: Area) {
        self.area = area;
    }

    /// Stamp `border` on the stored area.
    pub fn add_border(&mut self, border: Option<&Border>) -> Result<(), AreaError> {
        self.area.add_border(border)
    }

    pub fn has_focus(&self) -> bool {
        self.focus
    }

    pub fn set_focus(&mut self, focus: bool) {
        self.focus = focus;
    }

    /// Where the component was drawn by the last compose, if it has been.
    pub fn rect_mapping(&self) -> Option<&Rectangle> {
        self.rect_mapping.as_ref()
    }

    pub(crate) fn set_rect_mapping(&mut self, mapping: Option<Rectangle>) {
        self.rect_mapping = mapping;
    }

    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, ComponentKind::Container(_))
    }

    /// Children in order. Always empty for widgets.
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            ComponentKind::Container(children) => children.as_slice(),
            ComponentKind::Widget(_) => &[],
        }
    }

    pub(crate) fn child_list(&self) -> Option<&NodeList> {
        match &self.kind {
            ComponentKind::Container(children) => Some(children),
            ComponentKind::Widget(_) => None,
        }
    }

    pub(crate) fn child_list_mut(&mut self) -> Option<&mut NodeList> {
        match &mut self.kind {
            ComponentKind::Container(children) => Some(children),
            ComponentKind::Widget(_) => None,
        }
    }

    pub fn as_widget(&self) -> Option<&dyn Widget> {
        match &self.kind {
            ComponentKind::Widget(widget) => Some(widget.as_ref()),
            ComponentKind::Container(_) => None,
        }
    }

    pub fn as_widget_mut(&mut self) -> Option<&mut dyn Widget> {
        match &mut self.kind {
            ComponentKind::Widget(widget) => Some(widget.as_mut()),
            ComponentKind::Container(_) => None,
        }
    }

    /// Let the widget paint into the stored area. Containers have nothing to
    /// paint.
    pub fn paint(&mut self) -> Result<(), AreaError> {
        match &self.kind {
            ComponentKind::Widget(widget) => widget.render_to_area(&mut self.area),
            ComponentKind::Container(_) => Ok(()),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
