//! Component tree: slotmap arena of containers and widgets.

pub mod node;
pub mod node_list;
pub mod tree;

pub use node::{Component, ComponentKind, NodeId};
pub use node_list::{NodeList, NodeListError};
pub use tree::{Dom, DomError};
