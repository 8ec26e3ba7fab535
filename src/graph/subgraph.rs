//! Subgraphs: named partitions of a graph's vertices with local registries.

use std::ops::Index;

use serde::Serialize;

use super::registry::ScopeRegistry;
use super::Graph;
use crate::types::{
    AttributeStore, EdgeId, GraphError, GraphResult, Key, LinkId, SubgraphId, VertexId,
};

/// A named partition of a graph's vertex set.
///
/// A subgraph is an ID scope. Vertices created in it, edges between two of
/// its vertices and links whose source vertex was created in it register
/// here and in the graph-wide index. IDs need only be unique per scope.
#[derive(Debug, Clone, Serialize)]
pub struct Subgraph {
    #[serde(skip)]
    serial: u32,
    name: Option<String>,
    attributes: AttributeStore,
    #[serde(skip)]
    pub(crate) registry: ScopeRegistry,
}

impl Subgraph {
    /// The subgraph name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Rename the subgraph.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Attribute side-table.
    pub fn attributes(&self) -> &AttributeStore {
        &self.attributes
    }

    /// Mutable attribute side-table.
    pub fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attributes
    }

    /// Number of vertices created in this subgraph.
    pub fn vertex_count(&self) -> usize {
        self.registry.vertices.len()
    }

    /// Number of edges between vertices of this subgraph.
    pub fn edge_count(&self) -> usize {
        self.registry.edges.len()
    }

    /// Number of links owned by this subgraph.
    pub fn link_count(&self) -> usize {
        self.registry.links.len()
    }

    /// Vertices: ID-less first, then ID-bearing, each in insertion order.
    pub fn iter_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.registry
            .vertices
            .iter()
            .map(move |index| VertexId::new(self.serial, index))
    }

    /// Edges: ID-less first, then ID-bearing, each in insertion order.
    pub fn iter_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.registry
            .edges
            .iter()
            .map(move |index| EdgeId::new(self.serial, index))
    }

    /// Links: ID-less first, then ID-bearing, each in insertion order.
    pub fn iter_links(&self) -> impl Iterator<Item = LinkId> + '_ {
        self.registry
            .links
            .iter()
            .map(move |index| LinkId::new(self.serial, index))
    }

    /// Look up a vertex of this subgraph by its ID.
    pub fn vertex_by_key(&self, key: impl Into<Key>) -> GraphResult<VertexId> {
        let key = key.into();
        self.registry
            .vertices
            .get(&key)
            .map(|index| VertexId::new(self.serial, index))
            .ok_or(GraphError::VertexKeyNotFound(key))
    }
}

impl Graph {
    /// Create a subgraph.
    pub fn add_subgraph(&mut self, name: Option<&str>) -> SubgraphId {
        let id = SubgraphId::new(self.serial, self.subgraphs.len());
        self.subgraphs.push(Subgraph {
            serial: self.serial,
            name: name.map(str::to_owned),
            attributes: AttributeStore::new(),
            registry: ScopeRegistry::default(),
        });
        log::trace!("created subgraph {} ({:?})", id, name);
        id
    }

    /// Get a subgraph by handle.
    pub fn subgraph(&self, id: SubgraphId) -> Option<&Subgraph> {
        if id.graph_serial() != self.serial {
            return None;
        }
        self.subgraphs.get(id.index())
    }

    /// Get a subgraph by handle (mutable).
    pub fn subgraph_mut(&mut self, id: SubgraphId) -> Option<&mut Subgraph> {
        if id.graph_serial() != self.serial {
            return None;
        }
        self.subgraphs.get_mut(id.index())
    }

    pub(crate) fn check_subgraph(&self, id: SubgraphId) -> GraphResult<&Subgraph> {
        if id.graph_serial() != self.serial {
            return Err(GraphError::ForeignHandle(id.to_string()));
        }
        self.subgraphs
            .get(id.index())
            .ok_or(GraphError::SubgraphNotFound(id))
    }

    /// Number of subgraphs.
    pub fn subgraph_count(&self) -> usize {
        self.subgraphs.len()
    }

    /// All subgraphs in creation order.
    pub fn iter_subgraphs(&self) -> impl Iterator<Item = SubgraphId> + '_ {
        (0..self.subgraphs.len()).map(move |index| SubgraphId::new(self.serial, index))
    }
}

impl Index<SubgraphId> for Graph {
    type Output = Subgraph;

    /// Panics if the handle is foreign or out of range.
    fn index(&self, id: SubgraphId) -> &Subgraph {
        match self.subgraph(id) {
            Some(subgraph) => subgraph,
            None => panic!("subgraph {} not found in graph", id),
        }
    }
}
