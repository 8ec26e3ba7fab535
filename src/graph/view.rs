//! Views: named, possibly overlapping vertex subsets used for bookkeeping.

use std::ops::Index;

use serde::Serialize;

use super::Graph;
use crate::types::{AttributeStore, GraphError, GraphResult, Vertex, VertexId, ViewId};

/// A named subset of a graph's vertices. Does not own its members.
#[derive(Debug, Clone, Serialize)]
pub struct View {
    name: Option<String>,
    attributes: AttributeStore,
    members: Vec<VertexId>,
}

impl View {
    /// The view name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Rename the view.
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

    /// Members in the order they were added.
    pub fn vertices(&self) -> &[VertexId] {
        &self.members
    }

    /// Number of members.
    pub fn vertex_count(&self) -> usize {
        self.members.len()
    }

    /// Whether `vertex` is a member.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.members.contains(&vertex)
    }

    pub(crate) fn remove_member(&mut self, vertex: VertexId) -> bool {
        let before = self.members.len();
        self.members.retain(|&m| m != vertex);
        self.members.len() != before
    }
}

impl Graph {
    /// Create a view over explicit vertices. Repeated vertices are kept once.
    pub fn add_view(
        &mut self,
        name: Option<&str>,
        vertices: impl IntoIterator<Item = VertexId>,
    ) -> GraphResult<ViewId> {
        let mut members: Vec<VertexId> = Vec::new();
        for vertex in vertices {
            self.check_vertex(vertex)?;
            if !members.contains(&vertex) {
                members.push(vertex);
            }
        }
        Ok(self.push_view(name, members))
    }

    /// Create a view of every vertex matching `predicate`.
    pub fn add_view_where<P>(&mut self, name: Option<&str>, mut predicate: P) -> ViewId
    where
        P: FnMut(&Vertex) -> bool,
    {
        let members: Vec<VertexId> = self
            .iter_vertices()
            .filter(|&v| predicate(&self[v]))
            .collect();
        self.push_view(name, members)
    }

    fn push_view(&mut self, name: Option<&str>, members: Vec<VertexId>) -> ViewId {
        let id = ViewId::new(self.serial, self.views.len());
        log::trace!("created view {} with {} vertices", id, members.len());
        self.views.push(View {
            name: name.map(str::to_owned),
            attributes: AttributeStore::new(),
            members,
        });
        id
    }

    /// Get a view by handle.
    pub fn view(&self, id: ViewId) -> Option<&View> {
        if id.graph_serial() != self.serial {
            return None;
        }
        self.views.get(id.index())
    }

    /// Get a view by handle (mutable).
    pub fn view_mut(&mut self, id: ViewId) -> Option<&mut View> {
        if id.graph_serial() != self.serial {
            return None;
        }
        self.views.get_mut(id.index())
    }

    fn check_view_mut(&mut self, id: ViewId) -> GraphResult<&mut View> {
        if id.graph_serial() != self.serial {
            return Err(GraphError::ForeignHandle(id.to_string()));
        }
        self.views
            .get_mut(id.index())
            .ok_or(GraphError::ViewNotFound(id))
    }

    /// Add a vertex to a view. Returns `false` if it was already a member.
    pub fn add_to_view(&mut self, view: ViewId, vertex: VertexId) -> GraphResult<bool> {
        self.check_vertex(vertex)?;
        let view = self.check_view_mut(view)?;
        if view.contains(vertex) {
            return Ok(false);
        }
        view.members.push(vertex);
        Ok(true)
    }

    /// Remove a vertex from a view. Returns `false` if it was not a member.
    pub fn remove_from_view(&mut self, view: ViewId, vertex: VertexId) -> GraphResult<bool> {
        Ok(self.check_view_mut(view)?.remove_member(vertex))
    }

    /// Number of views.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// All views in creation order.
    pub fn iter_views(&self) -> impl Iterator<Item = ViewId> + '_ {
        (0..self.views.len()).map(move |index| ViewId::new(self.serial, index))
    }
}

impl Index<ViewId> for Graph {
    type Output = View;

    /// Panics if the handle is foreign or out of range.
    fn index(&self, id: ViewId) -> &View {
        match self.view(id) {
            Some(view) => view,
            None => panic!("view {} not found in graph", id),
        }
    }
}
