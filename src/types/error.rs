//! Error types for the digraph library.

use thiserror::Error;

use super::handle::{ComponentId, EdgeId, LinkId, SubgraphId, VertexId, ViewId};
use super::key::Key;

/// All errors that can occur in the digraph library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A handle minted by a different graph was passed in.
    #[error("Handle {0} belongs to a different graph")]
    ForeignHandle(String),

    /// Edge endpoints live in different subgraph scopes; a link is required.
    #[error("Edge {from} -> {to} crosses subgraph scopes, use a link")]
    EdgeAcrossScopes {
        from: VertexId,
        to: VertexId,
    },

    /// Link endpoints share a subgraph scope; an edge is required.
    #[error("Link {from} -> {to} stays within one subgraph scope, use an edge")]
    LinkWithinScope {
        from: VertexId,
        to: VertexId,
    },

    /// Vertex ID already registered in the owning scope.
    #[error("Vertex ID {0} already exists in this scope")]
    DuplicateVertex(Key),

    /// Edge ID already registered in the owning scope.
    #[error("Edge ID {0} already exists in this scope")]
    DuplicateEdge(Key),

    /// Link ID already registered in the owning scope.
    #[error("Link ID {0} already exists in this scope")]
    DuplicateLink(Key),

    /// Vertex handle is stale or out of range.
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    /// Edge handle is stale or out of range.
    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    /// Link handle is stale or out of range.
    #[error("Link {0} not found")]
    LinkNotFound(LinkId),

    /// Component handle is stale or out of range.
    #[error("Component {0} not found")]
    ComponentNotFound(ComponentId),

    /// Subgraph handle is out of range.
    #[error("Subgraph {0} not found")]
    SubgraphNotFound(SubgraphId),

    /// View handle is out of range.
    #[error("View {0} not found")]
    ViewNotFound(ViewId),

    /// No vertex registered under this ID.
    #[error("No vertex with ID {0}")]
    VertexKeyNotFound(Key),

    /// No edge registered under this ID.
    #[error("No edge with ID {0}")]
    EdgeKeyNotFound(Key),

    /// No link registered under this ID.
    #[error("No link with ID {0}")]
    LinkKeyNotFound(Key),

    /// The ID is registered in more than one scope; look it up per scope.
    #[error("Found {count} {entity}s with ID {key} in different scopes")]
    AmbiguousKey {
        entity: &'static str,
        key: Key,
        count: usize,
    },

    /// No vertex carries the requested value.
    #[error("No vertex with value {0}")]
    VertexValueNotFound(String),

    /// More than one vertex carries the requested value.
    #[error("Found {count} vertices with value {value}")]
    AmbiguousVertexValue { value: String, count: usize },

    /// Attribute key absent from an attribute store.
    #[error("Attribute {0} not found")]
    AttributeNotFound(Key),

    /// No edge between the two vertices.
    #[error("No edge from {from} to {to}")]
    NoEdgeBetween {
        from: VertexId,
        to: VertexId,
    },

    /// No link between the two vertices.
    #[error("No link from {from} to {to}")]
    NoLinkBetween {
        from: VertexId,
        to: VertexId,
    },

    /// Shortest-path search exhausted without finding the destination.
    #[error("Destination {to} is not reachable from {from}")]
    DestinationNotReachable {
        from: VertexId,
        to: VertexId,
    },

    /// An algorithm requiring acyclicity found a cycle.
    ///
    /// `vertices` holds the discovered chain (path enumeration) or the
    /// unresolved residue (topological sort).
    #[error("Graph contains a cycle through {} vertices", .vertices.len())]
    Cycle { vertices: Vec<VertexId> },

    /// Tree conversion reached an already converted vertex.
    #[error("Graph is not a tree: vertex {0} is reachable on more than one path")]
    NotATree(VertexId),

    /// Weighted search needs a weight on every traversed edge.
    #[error("Edge {0} has no weight")]
    MissingWeight(EdgeId),

    /// Internal bookkeeping is inconsistent. Indicates a bug in this crate.
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),
}

/// Convenience result type for digraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
