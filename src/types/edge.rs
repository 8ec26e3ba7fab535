//! The edge record (shared by edges and links) and its construction builder.

use serde::Serialize;

use super::attributes::AttributeStore;
use super::handle::{SubgraphId, VertexId};
use super::key::Key;
use super::Value;

/// Whether a connection is an edge or a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConnectionKind {
    /// Same-scope connection; merges components.
    Edge,
    /// Cross-scope connection; never merges components.
    Link,
}

impl ConnectionKind {
    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Edge => "edge",
            Self::Link => "link",
        }
    }
}

impl std::fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A directed, optionally weighted and valued connection between two
/// vertices of the same graph.
///
/// Links use the same record; they live in a separate arena.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    key: Option<Key>,
    value: Option<Value>,
    weight: Option<f64>,
    attributes: AttributeStore,
    pub(crate) source: VertexId,
    pub(crate) destination: VertexId,
    scope: Option<SubgraphId>,
}

impl Edge {
    pub(crate) fn from_spec(
        spec: EdgeSpec,
        source: VertexId,
        destination: VertexId,
        scope: Option<SubgraphId>,
    ) -> Self {
        Self {
            key: spec.key,
            value: spec.value,
            weight: spec.weight,
            attributes: spec.attributes,
            source,
            destination,
            scope,
        }
    }

    /// The ID, unique within its owning scope.
    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    /// The value.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Replace the value.
    pub fn set_value(&mut self, value: Option<Value>) {
        self.value = value;
    }

    /// The weight.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Replace the weight.
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

    /// Origin vertex.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Target vertex.
    pub fn destination(&self) -> VertexId {
        self.destination
    }

    /// The scope owning this connection's ID: the endpoints' shared scope
    /// for an edge, the source vertex's scope at creation for a link.
    /// Reversal does not change it.
    pub fn subgraph(&self) -> Option<SubgraphId> {
        self.scope
    }

    pub(crate) fn reverse(&mut self) {
        std::mem::swap(&mut self.source, &mut self.destination);
    }
}

/// Builder describing an edge or link to be created.
#[derive(Debug, Clone, Default)]
pub struct EdgeSpec {
    pub(crate) key: Option<Key>,
    pub(crate) value: Option<Value>,
    pub(crate) weight: Option<f64>,
    pub(crate) attributes: AttributeStore,
}

impl EdgeSpec {
    /// Start an anonymous, unweighted description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a description with only a weight.
    pub fn weighted(weight: f64) -> Self {
        Self::new().weight(weight)
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
}
