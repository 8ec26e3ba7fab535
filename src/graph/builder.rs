//! Fluent API for building Graph instances from vertex IDs and edge lists.

use crate::types::{EdgeSpec, GraphResult, Key, VertexId, VertexSpec};

use super::Graph;

/// Fluent builder for constructing a top-level [`Graph`].
///
/// Vertices are created in the order they are first mentioned, either
/// explicitly or as an edge endpoint.
pub struct GraphBuilder {
    name: Option<String>,
    vertices: Vec<Key>,
    edges: Vec<(Key, Key, Option<f64>)>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            name: None,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Set the graph name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a vertex with an ID.
    pub fn vertex(mut self, key: impl Into<Key>) -> Self {
        self.vertices.push(key.into());
        self
    }

    /// Add several vertices with IDs.
    pub fn vertices<K: Into<Key>>(mut self, keys: impl IntoIterator<Item = K>) -> Self {
        self.vertices.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Add an unweighted edge.
    pub fn edge(mut self, source: impl Into<Key>, destination: impl Into<Key>) -> Self {
        self.edges.push((source.into(), destination.into(), None));
        self
    }

    /// Add a weighted edge.
    pub fn weighted_edge(
        mut self,
        source: impl Into<Key>,
        destination: impl Into<Key>,
        weight: f64,
    ) -> Self {
        self.edges
            .push((source.into(), destination.into(), Some(weight)));
        self
    }

    /// Add several unweighted edges.
    pub fn edges<K: Into<Key>>(mut self, edges: impl IntoIterator<Item = (K, K)>) -> Self {
        for (source, destination) in edges {
            self.edges.push((source.into(), destination.into(), None));
        }
        self
    }

    /// Build the final Graph.
    ///
    /// Fails on duplicate vertex IDs given through [`GraphBuilder::vertex`].
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = match self.name {
            Some(name) => Graph::with_name(name),
            None => Graph::new(),
        };

        for key in self.vertices {
            graph.add_vertex(VertexSpec::with_id(key))?;
        }

        for (source, destination, weight) in self.edges {
            let source = vertex_for(&mut graph, source)?;
            let destination = vertex_for(&mut graph, destination)?;
            let spec = match weight {
                Some(weight) => EdgeSpec::weighted(weight),
                None => EdgeSpec::new(),
            };
            graph.edge_to_vertex(source, destination, spec)?;
        }

        Ok(graph)
    }
}

fn vertex_for(graph: &mut Graph, key: Key) -> GraphResult<VertexId> {
    match graph.scoped_vertex_by_key(None, key.clone()) {
        Ok(vertex) => Ok(vertex),
        Err(_) => graph.add_vertex(VertexSpec::with_id(key)),
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
