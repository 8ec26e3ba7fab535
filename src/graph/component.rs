//! Connected components maintained incrementally as edges are added.
//!
//! Edges merge components; links never do. Removing edges never splits a
//! component, so membership is a superset of true connectivity after
//! removals.

use std::ops::Index;

use serde::Serialize;

use super::Graph;
use crate::types::{AttributeStore, ComponentId, GraphError, GraphResult, VertexId};

/// A set of vertices connected through edges.
#[derive(Debug, Clone, Serialize)]
pub struct Component {
    name: Option<String>,
    attributes: AttributeStore,
    members: Vec<VertexId>,
}

impl Component {
    fn singleton(vertex: VertexId) -> Self {
        Self {
            name: None,
            attributes: AttributeStore::new(),
            members: vec![vertex],
        }
    }

    /// The component name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Rename the component.
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

    /// Member vertices in the order they joined.
    pub fn vertices(&self) -> &[VertexId] {
        &self.members
    }

    /// Number of member vertices.
    pub fn vertex_count(&self) -> usize {
        self.members.len()
    }

    /// Whether `vertex` is a member.
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.members.contains(&vertex)
    }
}

impl Graph {
    /// Number of components.
    pub fn component_count(&self) -> usize {
        self.live_components
    }

    /// All live components in creation order.
    pub fn iter_components(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.components
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(move |(index, _)| ComponentId::new(self.serial, index))
    }

    /// Get a component by handle.
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        if id.graph_serial() != self.serial {
            return None;
        }
        self.components.get(id.index()).and_then(Option::as_ref)
    }

    /// Get a component by handle (mutable).
    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        if id.graph_serial() != self.serial {
            return None;
        }
        self.components.get_mut(id.index()).and_then(Option::as_mut)
    }

    /// Component of a vertex.
    pub fn component_of(&self, vertex: VertexId) -> GraphResult<ComponentId> {
        Ok(self.check_vertex(vertex)?.component)
    }

    pub(crate) fn create_component(&mut self, vertex: VertexId) -> ComponentId {
        let id = ComponentId::new(self.serial, self.components.len());
        self.components.push(Some(Component::singleton(vertex)));
        self.live_components += 1;
        id
    }

    /// Merge the components of the two endpoints of a new edge.
    ///
    /// The smaller member set is relabeled into the larger one; on a tie the
    /// destination's component is absorbed into the source's. The emptied
    /// component is discarded.
    pub(crate) fn merge_components(
        &mut self,
        source: VertexId,
        destination: VertexId,
    ) -> GraphResult<()> {
        let source_component = self.check_vertex(source)?.component;
        let destination_component = self.check_vertex(destination)?.component;
        if source_component == destination_component {
            return Ok(());
        }

        let source_size = self.component_size(source_component)?;
        let destination_size = self.component_size(destination_component)?;
        let (survivor, absorbed) = if destination_size > source_size {
            (destination_component, source_component)
        } else {
            (source_component, destination_component)
        };

        let moved = self.components[absorbed.index()]
            .take()
            .ok_or(GraphError::ComponentNotFound(absorbed))?
            .members;
        for &member in &moved {
            self.check_vertex_mut(member)?.component = survivor;
        }
        self.component_mut(survivor)
            .ok_or(GraphError::ComponentNotFound(survivor))?
            .members
            .extend(moved);
        self.live_components -= 1;

        log::debug!(
            "merged component {} into {} ({} components left)",
            absorbed,
            survivor,
            self.live_components
        );
        Ok(())
    }

    fn component_size(&self, id: ComponentId) -> GraphResult<usize> {
        self.component(id)
            .map(Component::vertex_count)
            .ok_or(GraphError::ComponentNotFound(id))
    }

    /// Remove a vertex from its component, discarding the component if it
    /// becomes empty.
    pub(crate) fn detach_from_component(
        &mut self,
        vertex: VertexId,
        id: ComponentId,
    ) -> GraphResult<()> {
        let component = self
            .component_mut(id)
            .ok_or(GraphError::ComponentNotFound(id))?;
        component.members.retain(|&m| m != vertex);
        if component.members.is_empty() {
            self.components[id.index()] = None;
            self.live_components -= 1;
            log::debug!("discarded empty component {}", id);
        }
        Ok(())
    }
}

impl Index<ComponentId> for Graph {
    type Output = Component;

    /// Panics if the handle is stale or foreign.
    fn index(&self, id: ComponentId) -> &Component {
        match self.component(id) {
            Some(component) => component,
            None => panic!("component {} not found in graph", id),
        }
    }
}
