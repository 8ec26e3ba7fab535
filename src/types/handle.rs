//! Typed handles into a graph's arenas.
//!
//! A handle is the arena slot index plus the serial number of the graph that
//! minted it. Handles from another graph are rejected by every operation.

use std::sync::atomic::{AtomicU32, Ordering};

use serde::Serialize;

static NEXT_GRAPH_SERIAL: AtomicU32 = AtomicU32::new(1);

/// Allocate a serial number for a newly created graph.
pub(crate) fn next_graph_serial() -> u32 {
    NEXT_GRAPH_SERIAL.fetch_add(1, Ordering::Relaxed)
}

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $name {
            graph: u32,
            index: usize,
        }

        impl $name {
            pub(crate) fn new(graph: u32, index: usize) -> Self {
                Self { graph, index }
            }

            /// Arena slot index inside the owning graph.
            pub fn index(self) -> usize {
                self.index
            }

            pub(crate) fn graph_serial(self) -> u32 {
                self.graph
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(handle: $name) -> Self {
                serde_json::json!({ "graph": handle.graph, "index": handle.index })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "{}"), self.index)
            }
        }
    };
}

define_handle!(
    /// Handle to a vertex.
    VertexId,
    "v"
);
define_handle!(
    /// Handle to an edge.
    EdgeId,
    "e"
);
define_handle!(
    /// Handle to a link.
    LinkId,
    "l"
);
define_handle!(
    /// Handle to a component.
    ComponentId,
    "c"
);
define_handle!(
    /// Handle to a subgraph.
    SubgraphId,
    "s"
);
define_handle!(
    /// Handle to a view.
    ViewId,
    "w"
);
