//! In-memory directed graph: the core data structure and its algorithms.

pub mod builder;
pub mod component;
pub(crate) mod connect;
pub mod copy;
pub mod directed_graph;
pub mod paths;
pub(crate) mod registry;
pub mod subgraph;
pub mod topology;
pub mod traversal;
pub mod view;

pub use builder::GraphBuilder;
pub use component::Component;
pub use copy::{CopyOptions, GraphCopyOptions};
pub use directed_graph::{Graph, GraphStats};
pub use paths::OutboundPaths;
pub use subgraph::Subgraph;
pub use topology::Topological;
pub use traversal::{Bfs, Dfs};
pub use view::View;
