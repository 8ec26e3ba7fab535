//! A minimal rooted tree, the target of [`Graph::convert_to_tree`].
//!
//! [`Graph::convert_to_tree`]: crate::Graph::convert_to_tree

use serde::Serialize;

use crate::types::{AttributeStore, Key, Value};

/// Index of a node inside its [`Tree`].
pub type NodeIndex = usize;

/// A tree node: ID, value, attributes, parent link and ordered children.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    id: Option<Key>,
    value: Option<Value>,
    attributes: AttributeStore,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
}

impl TreeNode {
    fn new(id: Option<Key>, value: Option<Value>, parent: Option<NodeIndex>) -> Self {
        Self {
            id,
            value,
            attributes: AttributeStore::new(),
            parent,
            children: Vec::new(),
        }
    }

    /// The node ID.
    pub fn id(&self) -> Option<&Key> {
        self.id.as_ref()
    }

    /// The node value.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Attribute side-table.
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Replace the attribute side-table.
    pub fn set_attributes(&mut self, attributes: AttributeStore) {
        self.attributes = attributes;
    }

    /// Parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Whether the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// An arena-backed rooted tree. Node `0` is the root.
#[derive(Debug, Clone, Serialize)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    /// Create a tree consisting of a root node.
    pub fn new(id: Option<Key>, value: Option<Value>) -> Self {
        Self {
            nodes: vec![TreeNode::new(id, value, None)],
        }
    }

    /// The root index.
    pub fn root(&self) -> NodeIndex {
        0
    }

    /// Append a child under `parent`.
    ///
    /// # Panics
    /// Panics if `parent` is not a node of this tree.
    pub fn add_child(
        &mut self,
        parent: NodeIndex,
        id: Option<Key>,
        value: Option<Value>,
    ) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes[parent].children.push(index);
        self.nodes.push(TreeNode::new(id, value, Some(parent)));
        index
    }

    /// Get a node.
    pub fn node(&self, index: NodeIndex) -> Option<&TreeNode> {
        self.nodes.get(index)
    }

    /// Get a node (mutable).
    ///
    /// # Panics
    /// Panics if `index` is not a node of this tree.
    pub fn node_mut(&mut self, index: NodeIndex) -> &mut TreeNode {
        &mut self.nodes[index]
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges between `index` and the root.
    pub fn depth(&self, index: NodeIndex) -> usize {
        let mut depth = 0;
        let mut current = self.nodes.get(index).and_then(TreeNode::parent);
        while let Some(parent) = current {
            depth += 1;
            current = self.nodes[parent].parent;
        }
        depth
    }

    /// Node indices in pre-order.
    pub fn preorder(&self) -> Vec<NodeIndex> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(index) = stack.pop() {
            order.push(index);
            stack.extend(self.nodes[index].children.iter().rev());
        }
        order
    }

    /// Find the first node (in pre-order) carrying `id`.
    pub fn find(&self, id: &Key) -> Option<NodeIndex> {
        self.preorder()
            .into_iter()
            .find(|&index| self.nodes[index].id.as_ref() == Some(id))
    }
}
