//! NodeList: a container's ordered children plus an identifier index.

use std::collections::HashMap;

use super::node::NodeId;

/// Errors from mutating a [`NodeList`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeListError {
    #[error("a child with id '{0}' already exists")]
    DuplicateId(String),
    #[error("node is already in the list")]
    DuplicateNode,
    #[error("index {index} out of range for {len} children")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("node is not in the list")]
    NotFound,
}

/// Ordered children of a container.
///
/// Every child carrying an identifier is reachable through the index in O(1).
/// Failed mutations leave both the order and the index untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeList {
    nodes: Vec<NodeId>,
    index: HashMap<String, NodeId>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` at the end, indexing it under `identifier` if given.
    pub fn append(&mut self, node: NodeId, identifier: Option<&str>) -> Result<(), NodeListError> {
        self.check_unique(node, identifier, None)?;
        self.nodes.push(node);
        if let Some(identifier) = identifier {
            self.index.insert(identifier.to_owned(), node);
        }
        Ok(())
    }

    /// Remove and return the child at `index`.
    pub fn pop(&mut self, index: usize) -> Result<NodeId, NodeListError> {
        self.check_index(index)?;
        let node = self.nodes.remove(index);
        self.unindex(node);
        Ok(node)
    }

    /// Remove and return the last child.
    pub fn pop_last(&mut self) -> Option<NodeId> {
        let node = self.nodes.pop()?;
        self.unindex(node);
        Some(node)
    }

    /// Remove `node` wherever it sits.
    pub fn remove(&mut self, node: NodeId) -> Result<(), NodeListError> {
        let position = self
            .nodes
            .iter()
            .position(|&n| n == node)
            .ok_or(NodeListError::NotFound)?;
        self.nodes.remove(position);
        self.unindex(node);
        Ok(())
    }

    /// Put `node` at `index`, returning the child it replaced.
    ///
    /// The replaced child's identifier is released first, so the newcomer may
    /// reuse it.
    pub fn replace(
        &mut self,
        index: usize,
        node: NodeId,
        identifier: Option<&str>,
    ) -> Result<NodeId, NodeListError> {
        self.check_index(index)?;
        let old = self.nodes[index];
        self.check_unique(node, identifier, Some(old))?;

        self.unindex(old);
        self.nodes[index] = node;
        if let Some(identifier) = identifier {
            self.index.insert(identifier.to_owned(), node);
        }
        Ok(old)
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    /// Look a child up by identifier.
    pub fn get_with_id(&self, identifier: &str) -> Option<NodeId> {
        self.index.get(identifier).copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    pub fn as_slice(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), NodeListError> {
        if index >= self.nodes.len() {
            return Err(NodeListError::IndexOutOfRange {
                index,
                len: self.nodes.len(),
            });
        }
        Ok(())
    }

    /// `leaving` is a child about to be dropped, whose slot does not count.
    fn check_unique(
        &self,
        node: NodeId,
        identifier: Option<&str>,
        leaving: Option<NodeId>,
    ) -> Result<(), NodeListError> {
        if Some(node) != leaving && self.contains(node) {
            return Err(NodeListError::DuplicateNode);
        }
        if let Some(identifier) = identifier {
            if let Some(&existing) = self.index.get(identifier) {
                if Some(existing) != leaving {
                    return Err(NodeListError::DuplicateId(identifier.to_owned()));
                }
            }
        }
        Ok(())
    }

    fn unindex(&mut self, node: NodeId) {
        self.index.retain(|_, &mut indexed| indexed != node);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
