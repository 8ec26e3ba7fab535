//! Core graph structure: arenas of vertices, edges, links and components
//! plus the graph-wide identity index.

use std::ops::Index;

use serde::Serialize;

use super::component::Component;
use super::registry::{Registry, ScopeRegistry, ScopedKey};
use super::subgraph::Subgraph;
use super::view::View;
use crate::types::handle::next_graph_serial;
use crate::types::{
    AttributeStore, Edge, EdgeId, GraphError, GraphResult, Key, LinkId, SubgraphId, Value, Vertex,
    VertexId, VertexSpec,
};

/// Summary counts of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
    pub links: usize,
    pub components: usize,
    pub subgraphs: usize,
    pub views: usize,
    pub roots: usize,
    pub leafs: usize,
}

/// A directed graph owning its vertices, edges, links, components,
/// subgraphs and views.
///
/// Entities are addressed through `Copy` handles minted by this graph.
/// Handles of deleted entities stay invalid; slots are never reused.
#[derive(Debug)]
pub struct Graph {
    pub(crate) serial: u32,
    name: Option<String>,
    attributes: AttributeStore,
    pub(crate) vertices: Vec<Option<Vertex>>,
    pub(crate) edges: Vec<Option<Edge>>,
    pub(crate) links: Vec<Option<Edge>>,
    pub(crate) components: Vec<Option<Component>>,
    pub(crate) live_components: usize,
    pub(crate) subgraphs: Vec<Subgraph>,
    pub(crate) views: Vec<View>,
    pub(crate) registry: ScopeRegistry<ScopedKey>,
}

impl Graph {
    /// Create a new empty, unnamed graph.
    pub fn new() -> Self {
        Self {
            serial: next_graph_serial(),
            name: None,
            attributes: AttributeStore::new(),
            vertices: Vec::new(),
            edges: Vec::new(),
            links: Vec::new(),
            components: Vec::new(),
            live_components: 0,
            subgraphs: Vec::new(),
            views: Vec::new(),
            registry: ScopeRegistry::default(),
        }
    }

    /// Create a new empty graph with a name.
    pub fn with_name(name: impl Into<String>) -> Self {
        let mut graph = Self::new();
        graph.name = Some(name.into());
        graph
    }

    /// The graph name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Rename the graph.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Graph-level attribute side-table.
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Mutable graph-level attribute side-table.
    pub fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }

    // ---------------------------------------------------------------- vertices

    /// Create a vertex in its own singleton component.
    ///
    /// The vertex is registered graph-wide and, if the `VertexSpec` names a
    /// subgraph, in that subgraph as well. Its ID must be free in its own
    /// scope only; the same ID may appear at top level and in any subgraph.
    pub fn add_vertex(&mut self, spec: VertexSpec) -> GraphResult<VertexId> {
        if let Some(subgraph) = spec.subgraph {
            self.check_subgraph(subgraph)?;
        }
        if let Some(key) = &spec.key {
            if self.registry.vertices.contains_key(&(spec.subgraph, key.clone())) {
                return Err(GraphError::DuplicateVertex(key.clone()));
            }
        }

        let index = self.vertices.len();
        let id = VertexId::new(self.serial, index);
        let component = self.create_component(id);
        let vertex = Vertex::from_spec(spec, component);

        let entry = vertex.key().map(|key| (vertex.subgraph(), key.clone()));
        self.registry.vertices.insert(entry.as_ref(), index);
        if let Some(subgraph) = vertex.subgraph() {
            self.subgraphs[subgraph.index()]
                .registry
                .vertices
                .insert(vertex.key(), index);
        }
        log::trace!("registered vertex {} (key {:?})", id, vertex.key());
        self.vertices.push(Some(vertex));

        Ok(id)
    }

    /// Get a vertex by handle.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        if id.graph_serial() != self.serial {
            return None;
        }
        self.vertices.get(id.index()).and_then(Option::as_ref)
    }

    /// Get a vertex by handle (mutable).
    pub fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        if id.graph_serial() != self.serial {
            return None;
        }
        self.vertices.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Validate a vertex handle.
    pub(crate) fn check_vertex(&self, id: VertexId) -> GraphResult<&Vertex> {
        if id.graph_serial() != self.serial {
            return Err(GraphError::ForeignHandle(id.to_string()));
        }
        self.vertices
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(GraphError::VertexNotFound(id))
    }

    pub(crate) fn check_vertex_mut(&mut self, id: VertexId) -> GraphResult<&mut Vertex> {
        if id.graph_serial() != self.serial {
            return Err(GraphError::ForeignHandle(id.to_string()));
        }
        self.vertices
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(GraphError::VertexNotFound(id))
    }

    pub(crate) fn vertex_id(&self, index: usize) -> VertexId {
        VertexId::new(self.serial, index)
    }

    /// Look up a vertex by its ID in whichever scope holds it.
    ///
    /// Fails with [`GraphError::AmbiguousKey`] when several scopes use the
    /// ID; [`Graph::scoped_vertex_by_key`] resolves those.
    pub fn vertex_by_key(&self, key: impl Into<Key>) -> GraphResult<VertexId> {
        let key = key.into();
        let found = self.key_matches(&self.registry.vertices, &key);
        match found.as_slice() {
            &[index] => Ok(self.vertex_id(index)),
            [] => Err(GraphError::VertexKeyNotFound(key)),
            _ => Err(GraphError::AmbiguousKey {
                entity: "vertex",
                key,
                count: found.len(),
            }),
        }
    }

    /// Look up a vertex by its ID within one scope (`None` for top level).
    pub fn scoped_vertex_by_key(
        &self,
        scope: Option<SubgraphId>,
        key: impl Into<Key>,
    ) -> GraphResult<VertexId> {
        if let Some(subgraph) = scope {
            self.check_subgraph(subgraph)?;
        }
        let entry = (scope, key.into());
        self.registry
            .vertices
            .get(&entry)
            .map(|index| self.vertex_id(index))
            .ok_or(GraphError::VertexKeyNotFound(entry.1))
    }

    /// Slots registered under `key` in every scope, top level first.
    fn key_matches(&self, registry: &Registry<ScopedKey>, key: &Key) -> Vec<usize> {
        std::iter::once(None)
            .chain(self.iter_subgraphs().map(Some))
            .filter_map(|scope| registry.get(&(scope, key.clone())))
            .collect()
    }

    /// Look up the single vertex carrying `value`.
    ///
    /// Zero matches and more than one match are both errors.
    pub fn vertex_by_value(&self, value: &Value) -> GraphResult<VertexId> {
        let mut matches = self
            .iter_vertices()
            .filter(|&v| self[v].value() == Some(value));
        let first = matches
            .next()
            .ok_or_else(|| GraphError::VertexValueNotFound(value.to_string()))?;
        let rest = matches.count();
        if rest > 0 {
            return Err(GraphError::AmbiguousVertexValue {
                value: value.to_string(),
                count: rest + 1,
            });
        }
        Ok(first)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.registry.vertices.len()
    }

    /// All vertices: ID-less first, then ID-bearing, each in insertion order.
    pub fn iter_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.registry
            .vertices
            .iter()
            .map(move |index| self.vertex_id(index))
    }

    /// Vertices without inbound edges.
    pub fn iter_roots(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.iter_vertices().filter(move |&v| self[v].is_root())
    }

    /// Vertices without outbound edges.
    pub fn iter_leafs(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.iter_vertices().filter(move |&v| self[v].is_leaf())
    }

    /// Delete a vertex, first deleting every incident edge and link.
    ///
    /// The vertex leaves its registries, views and component. A component
    /// left empty is discarded; other components are never split.
    pub fn delete_vertex(&mut self, id: VertexId) -> GraphResult<()> {
        let vertex = self.check_vertex(id)?;

        let mut edges: Vec<EdgeId> = vertex
            .inbound_edges
            .iter()
            .chain(&vertex.outbound_edges)
            .copied()
            .collect();
        edges.sort_unstable();
        edges.dedup();
        let mut links: Vec<LinkId> = vertex
            .inbound_links
            .iter()
            .chain(&vertex.outbound_links)
            .copied()
            .collect();
        links.sort_unstable();
        links.dedup();

        log::debug!(
            "deleting vertex {} with {} edges and {} links",
            id,
            edges.len(),
            links.len()
        );
        for edge in edges {
            self.delete_edge(edge)?;
        }
        for link in links {
            self.delete_link(link)?;
        }

        let vertex = self.check_vertex(id)?;
        let key = vertex.key().cloned();
        let subgraph = vertex.subgraph();
        let component = vertex.component;

        let entry = key.clone().map(|key| (subgraph, key));
        self.registry.vertices.remove(entry.as_ref(), id.index());
        if let Some(subgraph) = subgraph {
            self.subgraphs[subgraph.index()]
                .registry
                .vertices
                .remove(key.as_ref(), id.index());
        }
        self.detach_from_component(id, component)?;
        for view in &mut self.views {
            view.remove_member(id);
        }

        self.ensure_detached(id)?;
        self.vertices[id.index()] = None;
        Ok(())
    }

    /// Check that nothing still references a vertex about to be freed.
    fn ensure_detached(&self, id: VertexId) -> GraphResult<()> {
        let vertex = self.check_vertex(id)?;
        let dangling = if !vertex.inbound_edges.is_empty() || !vertex.outbound_edges.is_empty() {
            Some("edge adjacency")
        } else if !vertex.inbound_links.is_empty() || !vertex.outbound_links.is_empty() {
            Some("link adjacency")
        } else if self.registry.vertices.contains(id.index()) {
            Some("graph registry")
        } else if vertex
            .subgraph()
            .is_some_and(|s| self.subgraphs[s.index()].registry.vertices.contains(id.index()))
        {
            Some("subgraph registry")
        } else if self
            .component(vertex.component)
            .is_some_and(|c| c.contains(id))
        {
            Some("component")
        } else {
            None
        };
        match dangling {
            Some(place) => Err(GraphError::InternalInvariant(format!(
                "vertex {} still referenced by {}",
                id, place
            ))),
            None => Ok(()),
        }
    }

    // ---------------------------------------------------------- edges / links

    /// Get an edge by handle.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        if id.graph_serial() != self.serial {
            return None;
        }
        self.edges.get(id.index()).and_then(Option::as_ref)
    }

    /// Get an edge by handle (mutable).
    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        if id.graph_serial() != self.serial {
            return None;
        }
        self.edges.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Get a link by handle.
    pub fn link(&self, id: LinkId) -> Option<&Edge> {
        if id.graph_serial() != self.serial {
            return None;
        }
        self.links.get(id.index()).and_then(Option::as_ref)
    }

    /// Get a link by handle (mutable).
    pub fn link_mut(&mut self, id: LinkId) -> Option<&mut Edge> {
        if id.graph_serial() != self.serial {
            return None;
        }
        self.links.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Look up an edge by its ID in whichever scope owns it.
    pub fn edge_by_key(&self, key: impl Into<Key>) -> GraphResult<EdgeId> {
        let key = key.into();
        let found = self.key_matches(&self.registry.edges, &key);
        match found.as_slice() {
            &[index] => Ok(EdgeId::new(self.serial, index)),
            [] => Err(GraphError::EdgeKeyNotFound(key)),
            _ => Err(GraphError::AmbiguousKey {
                entity: "edge",
                key,
                count: found.len(),
            }),
        }
    }

    /// Look up an edge by its ID within one scope.
    pub fn scoped_edge_by_key(
        &self,
        scope: Option<SubgraphId>,
        key: impl Into<Key>,
    ) -> GraphResult<EdgeId> {
        let entry = (scope, key.into());
        self.registry
            .edges
            .get(&entry)
            .map(|index| EdgeId::new(self.serial, index))
            .ok_or(GraphError::EdgeKeyNotFound(entry.1))
    }

    /// Look up a link by its ID in whichever scope owns it.
    pub fn link_by_key(&self, key: impl Into<Key>) -> GraphResult<LinkId> {
        let key = key.into();
        let found = self.key_matches(&self.registry.links, &key);
        match found.as_slice() {
            &[index] => Ok(LinkId::new(self.serial, index)),
            [] => Err(GraphError::LinkKeyNotFound(key)),
            _ => Err(GraphError::AmbiguousKey {
                entity: "link",
                key,
                count: found.len(),
            }),
        }
    }

    /// Look up a link by its ID within the scope owning it, which is the
    /// scope its source vertex had when the link was created.
    pub fn scoped_link_by_key(
        &self,
        scope: Option<SubgraphId>,
        key: impl Into<Key>,
    ) -> GraphResult<LinkId> {
        let entry = (scope, key.into());
        self.registry
            .links
            .get(&entry)
            .map(|index| LinkId::new(self.serial, index))
            .ok_or(GraphError::LinkKeyNotFound(entry.1))
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.registry.edges.len()
    }

    /// Number of links.
    pub fn link_count(&self) -> usize {
        self.registry.links.len()
    }

    /// All edges: ID-less first, then ID-bearing, each in insertion order.
    pub fn iter_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.registry
            .edges
            .iter()
            .map(move |index| EdgeId::new(self.serial, index))
    }

    /// All links: ID-less first, then ID-bearing, each in insertion order.
    pub fn iter_links(&self) -> impl Iterator<Item = LinkId> + '_ {
        self.registry
            .links
            .iter()
            .map(move |index| LinkId::new(self.serial, index))
    }

    /// Summary counts.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertices: self.vertex_count(),
            edges: self.edge_count(),
            links: self.link_count(),
            components: self.component_count(),
            subgraphs: self.subgraph_count(),
            views: self.view_count(),
            roots: self.iter_roots().count(),
            leafs: self.iter_leafs().count(),
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<VertexId> for Graph {
    type Output = Vertex;

    /// Panics if the handle is stale or foreign.
    fn index(&self, id: VertexId) -> &Vertex {
        match self.vertex(id) {
            Some(vertex) => vertex,
            None => panic!("vertex {} not found in graph", id),
        }
    }
}

impl Index<EdgeId> for Graph {
    type Output = Edge;

    /// Panics if the handle is stale or foreign.
    fn index(&self, id: EdgeId) -> &Edge {
        match self.edge(id) {
            Some(edge) => edge,
            None => panic!("edge {} not found in graph", id),
        }
    }
}

impl Index<LinkId> for Graph {
    type Output = Edge;

    /// Panics if the handle is stale or foreign.
    fn index(&self, id: LinkId) -> &Edge {
        match self.link(id) {
            Some(link) => link,
            None => panic!("link {} not found in graph", id),
        }
    }
}
