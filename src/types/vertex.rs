//! The vertex record and its construction builder.

use serde::Serialize;

use super::attributes::AttributeStore;
use super::handle::{ComponentId, EdgeId, LinkId, SubgraphId};
use super::key::Key;
use super::Value;

/// A graph node: optional ID, value and weight, adjacency lists for edges
/// and links, and its subgraph and component memberships.
///
/// Adjacency lists are ordered by creation of the edge or link.
#[derive(Debug, Clone, Serialize)]
pub struct Vertex {
    key: Option<Key>,
    value: Option<Value>,
    weight: Option<f64>,
    attributes: AttributeStore,
    subgraph: Option<SubgraphId>,
    pub(crate) component: ComponentId,
    pub(crate) inbound_edges: Vec<EdgeId>,
    pub(crate) outbound_edges: Vec<EdgeId>,
    pub(crate) inbound_links: Vec<LinkId>,
    pub(crate) outbound_links: Vec<LinkId>,
}

impl Vertex {
    pub(crate) fn from_spec(spec: VertexSpec, component: ComponentId) -> Self {
        Self {
            key: spec.key,
            value: spec.value,
            weight: spec.weight,
            attributes: spec.attributes,
            subgraph: spec.subgraph,
            component,
            inbound_edges: Vec::new(),
            outbound_edges: Vec::new(),
            inbound_links: Vec::new(),
            outbound_links: Vec::new(),
        }
    }

    /// The vertex ID, unique within its owning scope.
    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    /// The vertex value.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Replace the vertex value.
    pub fn set_value(&mut self, value: Option<Value>) {
        self.value = value;
    }

    /// The vertex weight.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Replace the vertex weight.
    pub fn set_weight(&mut self, weight: Option<f64>) {
        self.weight = weight;
    }

    /// Attribute side-table.
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Mutable attribute side-table.
    pub fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }

    /// The subgraph this vertex was created in, `None` for top-level vertices.
    pub fn subgraph(&self) -> Option<SubgraphId> {
        self.subgraph
    }

    /// The component this vertex currently belongs to.
    pub fn component(&self) -> ComponentId {
        self.component
    }

    /// Edges ending at this vertex.
    pub fn inbound_edges(&self) -> &[EdgeId] {
        &self.inbound_edges
    }

    /// Edges starting at this vertex.
    pub fn outbound_edges(&self) -> &[EdgeId] {
        &self.outbound_edges
    }

    /// Links ending at this vertex.
    pub fn inbound_links(&self) -> &[LinkId] {
        &self.inbound_links
    }

    /// Links starting at this vertex.
    pub fn outbound_links(&self) -> &[LinkId] {
        &self.outbound_links
    }

    /// Number of inbound edges.
    pub fn in_degree(&self) -> usize {
        self.inbound_edges.len()
    }

    /// Number of outbound edges.
    pub fn out_degree(&self) -> usize {
        self.outbound_edges.len()
    }

    /// Number of inbound links.
    pub fn in_link_degree(&self) -> usize {
        self.inbound_links.len()
    }

    /// Number of outbound links.
    pub fn out_link_degree(&self) -> usize {
        self.outbound_links.len()
    }

    /// Whether the vertex has no inbound edges.
    pub fn is_root(&self) -> bool {
        self.inbound_edges.is_empty()
    }

    /// Whether the vertex has no outbound edges.
    pub fn is_leaf(&self) -> bool {
        self.outbound_edges.is_empty()
    }
}

/// Builder describing a vertex to be created.
#[derive(Debug, Clone, Default)]
pub struct VertexSpec {
    pub(crate) key: Option<Key>,
    pub(crate) value: Option<Value>,
    pub(crate) weight: Option<f64>,
    pub(crate) attributes: AttributeStore,
    pub(crate) subgraph: Option<SubgraphId>,
}

impl VertexSpec {
    /// Start an anonymous vertex description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a vertex description with an ID.
    pub fn with_id(key: impl Into<Key>) -> Self {
        Self::new().id(key)
    }

    /// Set the ID.
    pub fn id(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the weight.
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Add a single attribute.
    pub fn attribute(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Replace all attributes.
    pub fn attributes(mut self, attributes: AttributeStore) -> Self {
        self.attributes = attributes;
        self
    }

    /// Create the vertex inside a subgraph.
    pub fn subgraph(mut self, subgraph: SubgraphId) -> Self {
        self.subgraph = Some(subgraph);
        self
    }
}
