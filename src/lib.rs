//! digraph: directed graphs with subgraphs, views and components.
//!
//! A [`Graph`] owns vertices, edges (same-scope connections that merge
//! components), links (cross-subgraph connections that never do),
//! subgraphs, views and components. Entities are addressed through typed
//! handles. Traversal and path algorithms (BFS, DFS, topological order,
//! shortest paths by hops and by weight, path enumeration, tree
//! conversion) operate on the graph's public iteration surface.

pub mod graph;
pub mod tree;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    Bfs, Component, CopyOptions, Dfs, Graph, GraphBuilder, GraphCopyOptions, GraphStats,
    OutboundPaths, Subgraph, Topological, View,
};
pub use tree::{NodeIndex, Tree, TreeNode};
pub use types::{
    AttributeStore, ComponentId, ConnectionKind, Edge, EdgeId, EdgeSpec, GraphError, GraphResult,
    Key, LinkId, SubgraphId, Value, Vertex, VertexId, VertexSpec, ViewId,
};
