//! Tree operations: insert, append, detach, remove, walk.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};
use tracing::{debug, trace, warn};

use crate::area::AreaError;
use crate::geometry::Coordinates;
use crate::widget::Widget;

use super::node::{Component, NodeId};
use super::node_list::{NodeList, NodeListError};

/// Errors from reshaping the tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("node is not in the tree")]
    UnknownNode,
    #[error("node is a widget and cannot hold children")]
    NotAContainer,
    #[error("node is already attached to a parent")]
    AlreadyAttached,
    #[error("node cannot become its own descendant")]
    Cycle,
    #[error(transparent)]
    Children(#[from] NodeListError),
    #[error(transparent)]
    Area(#[from] AreaError),
}

/// The component tree, backed by a slotmap arena.
///
/// Components own their children as ordered [`NodeList`](super::NodeList)s of
/// ids; a secondary map records each node's parent. Nodes that are inserted
/// but not appended anywhere stay detached until appended or removed.
pub struct Dom {
    nodes: SlotMap<NodeId, Component>,
    parent: SecondaryMap<NodeId, NodeId>,
    root: Option<NodeId>,
}

impl Dom {
    /// Create an empty DOM.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            parent: SecondaryMap::new(),
            root: None,
        }
    }

    /// Insert a detached node.
    ///
    /// If no root has been set yet, this node becomes the root. Appending the
    /// root under another node later hands the role to the new top ancestor.
    pub fn insert(&mut self, component: Component) -> NodeId {
        let id = self.nodes.insert(component);
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert `container` and append `children` to it in order.
    ///
    /// On failure nothing stays in the arena.
    pub fn insert_container(
        &mut self,
        container: Component,
        children: impl IntoIterator<Item = Component>,
    ) -> Result<NodeId, DomError> {
        if !container.is_container() {
            return Err(DomError::NotAContainer);
        }
        let parent = self.insert(container);
        for child in children {
            let node = self.insert(child);
            if let Err(err) = self.append_child(parent, node) {
                self.remove(node);
                self.remove(parent);
                return Err(err);
            }
        }
        Ok(parent)
    }

    /// Append the detached node `child` to the container `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let identifier = self.check_attachable(parent, child)?;
        self.child_list_mut(parent)?
            .append(child, identifier.as_deref())?;
        self.parent.insert(child, parent);
        self.lift_root(child);
        trace!(?parent, ?child, "appended child");
        Ok(())
    }

    /// Detach and return the child at `index`. The node stays in the arena.
    pub fn pop_child(&mut self, parent: NodeId, index: usize) -> Result<NodeId, DomError> {
        let child = self.child_list_mut(parent)?.pop(index)?;
        self.parent.remove(child);
        Ok(child)
    }

    /// Detach `child` from `parent`. The node stays in the arena.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        self.child_list_mut(parent)?.remove(child)?;
        self.parent.remove(child);
        Ok(())
    }

    /// Put the detached node `child` at `index`, detaching and returning the
    /// node it replaced.
    pub fn replace_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<NodeId, DomError> {
        let identifier = self.check_attachable(parent, child)?;
        let old = self
            .child_list_mut(parent)?
            .replace(index, child, identifier.as_deref())?;
        self.parent.remove(old);
        self.parent.insert(child, parent);
        self.lift_root(child);
        Ok(old)
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the removed node's component, or `None` if it didn't exist.
    pub fn remove(&mut self, id: NodeId) -> Option<Component> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        if let Some(parent) = self.parent.remove(id) {
            if let Some(list) = self.nodes.get_mut(parent).and_then(Component::child_list_mut) {
                if let Err(err) = list.remove(id) {
                    warn!(?id, ?parent, %err, "parent did not list removed node");
                }
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }

        let mut to_remove = VecDeque::from([id]);
        let mut removed = None;
        while let Some(current) = to_remove.pop_front() {
            self.parent.remove(current);
            let Some(component) = self.nodes.remove(current) else {
                continue;
            };
            to_remove.extend(component.children().iter().copied());
            if current == id {
                removed = Some(component);
            }
        }
        debug!(node = ?id, remaining = self.nodes.len(), "removed subtree");
        removed
    }

    /// Get the parent of a node, if it has one.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Children of a node in order. Empty for widgets and unknown nodes.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(Component::children).unwrap_or(&[])
    }

    /// Walk from `id` up to the root, collecting ancestor node ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// The child of `parent` registered under `identifier`.
    pub fn child_with_id(&self, parent: NodeId, identifier: &str) -> Option<NodeId> {
        self.nodes
            .get(parent)?
            .child_list()?
            .get_with_id(identifier)
    }

    /// The first node under the root, depth first, with the given identifier.
    pub fn find_by_id(&self, identifier: &str) -> Option<NodeId> {
        let root = self.root?;
        self.walk_depth_first(root)
            .into_iter()
            .find(|&node| self.nodes.get(node).and_then(Component::id) == Some(identifier))
    }

    /// Hit-test `point` against the rectangle mappings below `start`.
    ///
    /// Misses when `point` lies outside `start`'s mapping, or when `start`
    /// has not been composed yet. A component with `steal_focus` claims every
    /// hit inside it; otherwise the first child that matches wins, falling
    /// back to `start` itself.
    pub fn find_component(&self, start: NodeId, point: Coordinates) -> Option<NodeId> {
        let component = self.nodes.get(start)?;
        if !component.rect_mapping()?.contains(point) {
            return None;
        }
        if component.style().focus_info.steal_focus {
            return Some(start);
        }
        component
            .children()
            .iter()
            .find_map(|&child| self.find_component(child, point))
            .or(Some(start))
    }

    /// Move focus to whatever is under `point`, returning it.
    ///
    /// Focus is cleared everywhere first, so a miss leaves nothing focused.
    pub fn focus_at(&mut self, point: Coordinates) -> Option<NodeId> {
        let hit = self.root.and_then(|root| self.find_component(root, point));
        for component in self.nodes.values_mut() {
            component.set_focus(false);
        }
        if let Some(node) = hit.and_then(|node| self.nodes.get_mut(node)) {
            node.set_focus(true);
        }
        debug!(row = point.row, column = point.column, focused = ?hit, "focus moved");
        hit
    }

    /// The focused node, if any.
    pub fn focused(&self) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, component)| component.has_focus())
            .map(|(id, _)| id)
    }

    pub fn get(&self, id: NodeId) -> Option<&Component> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Component> {
        self.nodes.get_mut(id)
    }

    /// The widget at `id`, if it is a `W`.
    pub fn widget<W: Widget + 'static>(&self, id: NodeId) -> Option<&W> {
        self.nodes.get(id)?.as_widget()?.as_any().downcast_ref::<W>()
    }

    /// Mutable access to the widget at `id`, if it is a `W`.
    pub fn widget_mut<W: Widget + 'static>(&mut self, id: NodeId) -> Option<&mut W> {
        self.nodes
            .get_mut(id)?
            .as_widget_mut()?
            .as_any_mut()
            .downcast_mut::<W>()
    }

    /// Ask the widget at `id` to render into its stored area.
    pub fn paint(&mut self, id: NodeId) -> Result<(), DomError> {
        self.nodes.get_mut(id).ok_or(DomError::UnknownNode)?.paint()?;
        Ok(())
    }

    /// The current root node, if set.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Explicitly set the root node.
    pub fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    /// Number of nodes in the arena, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: NodeId) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    // -- Internal helpers ---------------------------------------------------

    /// Validate that `child` may hang under `parent`, returning its identifier.
    fn check_attachable(&self, parent: NodeId, child: NodeId) -> Result<Option<String>, DomError> {
        let parent_node = self.nodes.get(parent).ok_or(DomError::UnknownNode)?;
        let child_node = self.nodes.get(child).ok_or(DomError::UnknownNode)?;
        if !parent_node.is_container() {
            return Err(DomError::NotAContainer);
        }
        if self.parent.contains_key(child) {
            return Err(DomError::AlreadyAttached);
        }
        if child == parent || self.ancestors(parent).contains(&child) {
            return Err(DomError::Cycle);
        }
        Ok(child_node.id().map(str::to_owned))
    }

    /// If `child` was the root, move the root up to its new top ancestor.
    fn lift_root(&mut self, child: NodeId) {
        if self.root == Some(child) {
            let top = self.ancestors(child).last().copied().unwrap_or(child);
            debug!(?child, ?top, "root attached under another node");
            self.root = Some(top);
        }
    }

    fn child_list_mut(&mut self, parent: NodeId) -> Result<&mut NodeList, DomError> {
        self.nodes
            .get_mut(parent)
            .ok_or(DomError::UnknownNode)?
            .child_list_mut()
            .ok_or(DomError::NotAContainer)
    }
}

impl Default for Dom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rectangle;
    use crate::style::Style;
    use crate::widgets::Label;

    fn container(id: &str) -> Component {
        Component::container(Style::sized(10, 10)).unwrap().with_id(id)
    }

    fn label(id: &str, text: &str) -> Component {
        Component::widget(Style::sized(1, 10), Label::new(text))
            .unwrap()
            .with_id(id)
    }

    /// Build a small test tree:
    /// ```text
    ///       root
    ///      /    \
    ///    a        b
    ///   / \
    ///  c   d
    /// ```
    fn build_tree() -> (Dom, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut dom = Dom::new();
        let root = dom.insert(container("root"));
        let a = dom.insert(container("a"));
        let b = dom.insert(label("b", "bee"));
        let c = dom.insert(label("c", "sea"));
        let d = dom.insert(label("d", "dee"));
        dom.append_child(root, a).unwrap();
        dom.append_child(root, b).unwrap();
        dom.append_child(a, c).unwrap();
        dom.append_child(a, d).unwrap();
        (dom, root, a, b, c, d)
    }

    #[test]
    fn insert_sets_root() {
        let mut dom = Dom::new();
        let id = dom.insert(container("root"));
        let _second = dom.insert(container("other"));
        assert_eq!(dom.root(), Some(id));
    }

    #[test]
    fn append_records_parent_and_order() {
        let (dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.parent(a), Some(root));
        assert_eq!(dom.parent(c), Some(a));
        assert_eq!(dom.parent(root), None);
        assert_eq!(dom.children(root), &[a, b]);
        assert_eq!(dom.children(a), &[c, d]);
        assert!(dom.children(c).is_empty());
    }

    #[test]
    fn append_to_widget_fails() {
        let (mut dom, _root, _a, b, ..) = build_tree();
        let orphan = dom.insert(label("orphan", ""));
        assert_eq!(dom.append_child(b, orphan), Err(DomError::NotAContainer));
    }

    #[test]
    fn append_duplicate_id_fails_unchanged() {
        let (mut dom, _root, a, _b, c, d) = build_tree();
        let twin = dom.insert(label("c", "twin"));
        assert_eq!(
            dom.append_child(a, twin),
            Err(DomError::Children(NodeListError::DuplicateId("c".into())))
        );
        assert_eq!(dom.children(a), &[c, d]);
        assert_eq!(dom.parent(twin), None);
    }

    #[test]
    fn append_attached_node_fails() {
        let (mut dom, root, a, _b, c, _d) = build_tree();
        assert_eq!(dom.append_child(root, c), Err(DomError::AlreadyAttached));
        assert_eq!(dom.append_child(a, root), Err(DomError::Cycle));
    }

    #[test]
    fn build_bottom_up_moves_root() {
        let mut dom = Dom::new();
        let leaf = dom.insert(label("leaf", "hi"));
        let inner = dom.insert(container("inner"));
        let outer = dom.insert(container("outer"));
        assert_eq!(dom.root(), Some(leaf));

        dom.append_child(inner, leaf).unwrap();
        assert_eq!(dom.root(), Some(inner));
        assert_eq!(dom.children(inner), &[leaf]);

        dom.append_child(outer, inner).unwrap();
        assert_eq!(dom.root(), Some(outer));
        assert_eq!(dom.ancestors(leaf), vec![inner, outer]);
    }

    #[test]
    fn appending_into_root_subtree_keeps_root() {
        let (mut dom, root, a, ..) = build_tree();
        let extra = dom.insert(label("e", "eee"));
        dom.append_child(a, extra).unwrap();
        assert_eq!(dom.root(), Some(root));
    }

    #[test]
    fn append_ancestor_fails() {
        let mut dom = Dom::new();
        let _root = dom.insert(container("root"));
        let outer = dom.insert(container("outer"));
        let inner = dom.insert(container("inner"));
        dom.append_child(outer, inner).unwrap();
        assert_eq!(dom.append_child(inner, outer), Err(DomError::Cycle));
        assert_eq!(dom.append_child(outer, outer), Err(DomError::Cycle));
    }

    #[test]
    fn append_unknown_node_fails() {
        let (mut dom, root, ..) = build_tree();
        let stale = dom.insert(label("stale", ""));
        dom.remove(stale);
        assert_eq!(dom.append_child(root, stale), Err(DomError::UnknownNode));
        assert_eq!(dom.paint(stale), Err(DomError::UnknownNode));
    }

    #[test]
    fn insert_container_with_children() {
        let mut dom = Dom::new();
        let root = dom
            .insert_container(container("root"), [label("x", "1"), label("y", "2")])
            .unwrap();
        assert_eq!(dom.children(root).len(), 2);
        assert_eq!(dom.child_with_id(root, "y"), Some(dom.children(root)[1]));
    }

    #[test]
    fn insert_container_rolls_back_on_error() {
        let mut dom = Dom::new();
        let err = dom
            .insert_container(container("root"), [label("x", "1"), label("x", "2")])
            .unwrap_err();
        assert!(matches!(err, DomError::Children(NodeListError::DuplicateId(_))));
        assert!(dom.is_empty());
        assert_eq!(dom.root(), None);
    }

    #[test]
    fn pop_and_remove_child_detach() {
        let (mut dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.pop_child(a, 0), Ok(c));
        assert_eq!(dom.parent(c), None);
        assert!(dom.contains(c));
        assert_eq!(dom.child_with_id(a, "c"), None);

        dom.remove_child(root, b).unwrap();
        assert_eq!(dom.children(root), &[a]);
        assert_eq!(dom.remove_child(root, b), Err(DomError::Children(NodeListError::NotFound)));

        // Detached nodes can be attached again.
        dom.append_child(root, c).unwrap();
        assert_eq!(dom.children(root), &[a, c]);
        assert_eq!(dom.children(a), &[d]);
    }

    #[test]
    fn replace_child_swaps_node() {
        let (mut dom, root, a, b, ..) = build_tree();
        let fresh = dom.insert(label("b", "new"));
        assert_eq!(dom.replace_child(root, 1, fresh), Ok(b));
        assert_eq!(dom.children(root), &[a, fresh]);
        assert_eq!(dom.parent(b), None);
        assert_eq!(dom.parent(fresh), Some(root));
        assert_eq!(dom.child_with_id(root, "b"), Some(fresh));
    }

    #[test]
    fn remove_subtree() {
        let (mut dom, root, a, b, c, d) = build_tree();
        let removed = dom.remove(a).unwrap();
        assert_eq!(removed.id(), Some("a"));
        for gone in [a, c, d] {
            assert!(!dom.contains(gone));
        }
        assert_eq!(dom.children(root), &[b]);
        assert_eq!(dom.child_with_id(root, "a"), None);
        assert_eq!(dom.len(), 2);
        assert!(dom.remove(a).is_none());
    }

    #[test]
    fn remove_root_clears_root() {
        let (mut dom, root, ..) = build_tree();
        dom.remove(root);
        assert!(dom.is_empty());
        assert_eq!(dom.root(), None);
    }

    #[test]
    fn find_by_id_searches_whole_tree() {
        let (dom, _root, _a, _b, _c, d) = build_tree();
        assert_eq!(dom.find_by_id("d"), Some(d));
        assert_eq!(dom.find_by_id("nope"), None);
    }

    #[test]
    fn walk_depth_first() {
        let (dom, root, a, b, c, d) = build_tree();
        assert_eq!(dom.walk_depth_first(root), vec![root, a, c, d, b]);
        assert_eq!(dom.walk_depth_first(a), vec![a, c, d]);
    }

    #[test]
    fn ancestors() {
        let (dom, root, a, _b, c, _d) = build_tree();
        assert_eq!(dom.ancestors(c), vec![a, root]);
        assert!(dom.ancestors(root).is_empty());
    }

    #[test]
    fn typed_widget_access() {
        let (mut dom, _root, a, b, ..) = build_tree();
        assert_eq!(dom.widget::<Label>(b).map(Label::text), Some("bee"));
        assert!(dom.widget::<Label>(a).is_none());

        dom.widget_mut::<Label>(b).unwrap().set_text("buzz");
        dom.paint(b).unwrap();
        assert_eq!(dom.get(b).unwrap().area().to_string(), "   buzz   ");
    }

    // -----------------------------------------------------------------------
    // Hit testing
    // -----------------------------------------------------------------------

    fn rect(top: i32, left: i32, rows: i32, columns: i32) -> Rectangle {
        Rectangle::with_size(rows, columns)
            .unwrap()
            .translate(Coordinates::new(top, left))
    }

    /// root covers 10x10, a the top four rows, c and d one row each inside a,
    /// b the row below a.
    fn mapped_tree() -> (Dom, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let (mut dom, root, a, b, c, d) = build_tree();
        for (node, mapping) in [
            (root, rect(0, 0, 10, 10)),
            (a, rect(0, 0, 4, 10)),
            (c, rect(0, 0, 1, 10)),
            (d, rect(1, 0, 1, 10)),
            (b, rect(4, 0, 1, 10)),
        ] {
            dom.get_mut(node).unwrap().set_rect_mapping(Some(mapping));
        }
        (dom, root, a, b, c, d)
    }

    #[test]
    fn find_component_outside_root_misses() {
        let (dom, root, ..) = mapped_tree();
        assert_eq!(dom.find_component(root, Coordinates::new(10, 0)), None);
        assert_eq!(dom.find_component(root, Coordinates::new(0, -1)), None);
    }

    #[test]
    fn find_component_returns_leaf() {
        let (dom, root, a, b, _c, d) = mapped_tree();
        assert_eq!(dom.find_component(root, Coordinates::new(1, 5)), Some(d));
        assert_eq!(dom.find_component(root, Coordinates::new(4, 9)), Some(b));
        // Inside a but below its children.
        assert_eq!(dom.find_component(root, Coordinates::new(3, 0)), Some(a));
        assert_eq!(dom.find_component(root, Coordinates::new(8, 8)), Some(root));
    }

    #[test]
    fn find_component_unmapped_misses() {
        let (dom, root, ..) = build_tree();
        assert_eq!(dom.find_component(root, Coordinates::ORIGIN), None);
    }

    #[test]
    fn steal_focus_claims_hits() {
        let mut dom = Dom::new();
        let root = dom.insert(container("root"));
        let greedy = dom.insert(
            Component::container(Style::sized(4, 10).with_steal_focus(true))
                .unwrap()
                .with_id("greedy"),
        );
        let leaf = dom.insert(label("leaf", "x"));
        dom.append_child(root, greedy).unwrap();
        dom.append_child(greedy, leaf).unwrap();
        for (node, mapping) in [
            (root, rect(0, 0, 10, 10)),
            (greedy, rect(0, 0, 4, 10)),
            (leaf, rect(0, 0, 1, 10)),
        ] {
            dom.get_mut(node).unwrap().set_rect_mapping(Some(mapping));
        }
        assert_eq!(dom.find_component(root, Coordinates::ORIGIN), Some(greedy));
    }

    #[test]
    fn focus_at_moves_focus() {
        let (mut dom, _root, _a, b, c, _d) = mapped_tree();
        assert_eq!(dom.focus_at(Coordinates::new(0, 3)), Some(c));
        assert_eq!(dom.focused(), Some(c));
        assert!(dom.get(c).unwrap().has_focus());

        assert_eq!(dom.focus_at(Coordinates::new(4, 3)), Some(b));
        assert_eq!(dom.focused(), Some(b));
        assert!(!dom.get(c).unwrap().has_focus());

        assert_eq!(dom.focus_at(Coordinates::new(20, 20)), None);
        assert_eq!(dom.focused(), None);
    }
}
