//! All data types for the digraph library.

pub mod attributes;
pub mod edge;
pub mod error;
pub mod handle;
pub mod key;
pub mod vertex;

pub use attributes::AttributeStore;
pub use edge::{ConnectionKind, Edge, EdgeSpec};
pub use error::{GraphError, GraphResult};
pub use handle::{ComponentId, EdgeId, LinkId, SubgraphId, VertexId, ViewId};
pub use key::Key;
pub use vertex::{Vertex, VertexSpec};

/// Value type of entity values and attribute values.
pub use serde_json::Value;
