//! Copying vertices into another graph.

use super::Graph;
use crate::types::{GraphResult, Key, Value, Vertex, VertexId, VertexSpec};

/// Options for [`Graph::copy_vertex`].
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    /// Copy the attribute side-table.
    pub copy_attributes: bool,
    /// If set, store the new vertex handle on the original under this key.
    pub link_key_forward: Option<Key>,
    /// If set, store the original vertex handle on the copy under this key.
    pub link_key_backward: Option<Key>,
}

/// Options for [`Graph::copy_vertices`].
#[derive(Debug, Clone, Default)]
pub struct GraphCopyOptions {
    /// Copy the graph-level attribute side-table.
    pub copy_graph_attributes: bool,
    /// Copy each vertex's attribute side-table.
    pub copy_vertex_attributes: bool,
}

fn spec_from(vertex: &Vertex, copy_attributes: bool) -> VertexSpec {
    let mut spec = VertexSpec::new();
    if let Some(key) = vertex.key() {
        spec = spec.id(key);
    }
    if let Some(value) = vertex.value() {
        spec = spec.value(value.clone());
    }
    if let Some(weight) = vertex.weight() {
        spec = spec.weight(weight);
    }
    if copy_attributes {
        spec = spec.attributes(vertex.attributes().clone());
    }
    spec
}

impl Graph {
    /// Copy ID, value and weight of `vertex` into a new top-level vertex of
    /// `target`. Edges, links and subgraph membership are not copied.
    ///
    /// `target` is necessarily a different graph instance.
    pub fn copy_vertex(
        &mut self,
        vertex: VertexId,
        target: &mut Graph,
        options: &CopyOptions,
    ) -> GraphResult<VertexId> {
        let spec = spec_from(self.check_vertex(vertex)?, options.copy_attributes);
        let copy = target.add_vertex(spec)?;

        if let Some(key) = &options.link_key_forward {
            self.check_vertex_mut(vertex)?
                .attributes_mut()
                .set(key, Value::from(copy));
        }
        if let Some(key) = &options.link_key_backward {
            target
                .check_vertex_mut(copy)?
                .attributes_mut()
                .set(key, Value::from(vertex));
        }
        log::trace!("copied vertex {} to {}", vertex, copy);
        Ok(copy)
    }

    /// Build a new graph holding copies of the vertices matching
    /// `predicate`. Edges, links, components, subgraphs and views are not
    /// copied; every copy lands in its own component.
    pub fn copy_vertices<P>(&self, mut predicate: P, options: &GraphCopyOptions) -> GraphResult<Graph>
    where
        P: FnMut(&Vertex) -> bool,
    {
        let mut copy = match self.name() {
            Some(name) => Graph::with_name(name),
            None => Graph::new(),
        };
        if options.copy_graph_attributes {
            *copy.attributes_mut() = self.attributes().clone();
        }
        for vertex in self.iter_vertices() {
            let vertex = &self[vertex];
            if predicate(vertex) {
                copy.add_vertex(spec_from(vertex, options.copy_vertex_attributes))?;
            }
        }
        log::debug!(
            "copied {} of {} vertices into a new graph",
            copy.vertex_count(),
            self.vertex_count()
        );
        Ok(copy)
    }
}
