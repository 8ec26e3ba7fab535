//! Edge and link lifecycle: creation, lookup by endpoints, deletion,
//! reversal and bulk removal.
//!
//! Edges and links share one implementation, parameterized by the handle
//! type through [`Connection`].

use super::registry::{Registry, ScopeRegistry, ScopedKey};
use super::Graph;
use crate::types::{
    ConnectionKind, Edge, EdgeId, EdgeSpec, GraphError, GraphResult, Key, LinkId, SubgraphId,
    Vertex, VertexId, VertexSpec,
};

/// Static dispatch between the edge and link arenas, registries and
/// adjacency lists.
pub(crate) trait Connection: Copy + Ord + std::fmt::Display {
    const KIND: ConnectionKind;

    fn handle(serial: u32, index: usize) -> Self;
    fn slot(self) -> usize;
    fn serial(self) -> u32;
    fn arena(graph: &Graph) -> &Vec<Option<Edge>>;
    fn arena_mut(graph: &mut Graph) -> &mut Vec<Option<Edge>>;
    fn registry<K>(scope: &ScopeRegistry<K>) -> &Registry<K>;
    fn registry_mut<K>(scope: &mut ScopeRegistry<K>) -> &mut Registry<K>;
    fn inbound(vertex: &Vertex) -> &Vec<Self>;
    fn inbound_mut(vertex: &mut Vertex) -> &mut Vec<Self>;
    fn outbound(vertex: &Vertex) -> &Vec<Self>;
    fn outbound_mut(vertex: &mut Vertex) -> &mut Vec<Self>;
    fn swap_directions(vertex: &mut Vertex);
    fn duplicate(key: Key) -> GraphError;
    fn not_found(self) -> GraphError;
}

impl Connection for EdgeId {
    const KIND: ConnectionKind = ConnectionKind::Edge;

    fn handle(serial: u32, index: usize) -> Self {
        EdgeId::new(serial, index)
    }
    fn slot(self) -> usize {
        self.index()
    }
    fn serial(self) -> u32 {
        self.graph_serial()
    }
    fn arena(graph: &Graph) -> &Vec<Option<Edge>> {
        &graph.edges
    }
    fn arena_mut(graph: &mut Graph) -> &mut Vec<Option<Edge>> {
        &mut graph.edges
    }
    fn registry<K>(scope: &ScopeRegistry<K>) -> &Registry<K> {
        &scope.edges
    }
    fn registry_mut<K>(scope: &mut ScopeRegistry<K>) -> &mut Registry<K> {
        &mut scope.edges
    }
    fn inbound(vertex: &Vertex) -> &Vec<Self> {
        &vertex.inbound_edges
    }
    fn inbound_mut(vertex: &mut Vertex) -> &mut Vec<Self> {
        &mut vertex.inbound_edges
    }
    fn outbound(vertex: &Vertex) -> &Vec<Self> {
        &vertex.outbound_edges
    }
    fn outbound_mut(vertex: &mut Vertex) -> &mut Vec<Self> {
        &mut vertex.outbound_edges
    }
    fn swap_directions(vertex: &mut Vertex) {
        std::mem::swap(&mut vertex.inbound_edges, &mut vertex.outbound_edges);
    }
    fn duplicate(key: Key) -> GraphError {
        GraphError::DuplicateEdge(key)
    }
    fn not_found(self) -> GraphError {
        GraphError::EdgeNotFound(self)
    }
}

impl Connection for LinkId {
    const KIND: ConnectionKind = ConnectionKind::Link;

    fn handle(serial: u32, index: usize) -> Self {
        LinkId::new(serial, index)
    }
    fn slot(self) -> usize {
        self.index()
    }
    fn serial(self) -> u32 {
        self.graph_serial()
    }
    fn arena(graph: &Graph) -> &Vec<Option<Edge>> {
        &graph.links
    }
    fn arena_mut(graph: &mut Graph) -> &mut Vec<Option<Edge>> {
        &mut graph.links
    }
    fn registry<K>(scope: &ScopeRegistry<K>) -> &Registry<K> {
        &scope.links
    }
    fn registry_mut<K>(scope: &mut ScopeRegistry<K>) -> &mut Registry<K> {
        &mut scope.links
    }
    fn inbound(vertex: &Vertex) -> &Vec<Self> {
        &vertex.inbound_links
    }
    fn inbound_mut(vertex: &mut Vertex) -> &mut Vec<Self> {
        &mut vertex.inbound_links
    }
    fn outbound(vertex: &Vertex) -> &Vec<Self> {
        &vertex.outbound_links
    }
    fn outbound_mut(vertex: &mut Vertex) -> &mut Vec<Self> {
        &mut vertex.outbound_links
    }
    fn swap_directions(vertex: &mut Vertex) {
        std::mem::swap(&mut vertex.inbound_links, &mut vertex.outbound_links);
    }
    fn duplicate(key: Key) -> GraphError {
        GraphError::DuplicateLink(key)
    }
    fn not_found(self) -> GraphError {
        GraphError::LinkNotFound(self)
    }
}

/// Graph-wide index entry for an ID owned by `scope`.
fn scoped(scope: Option<SubgraphId>, key: Option<&Key>) -> Option<ScopedKey> {
    key.map(|key| (scope, key.clone()))
}

/// Insert keeping the list in creation order.
fn insert_ordered<C: Connection>(list: &mut Vec<C>, id: C) {
    let pos = list.partition_point(|&c| c < id);
    list.insert(pos, id);
}

impl Graph {
    // ------------------------------------------------------- generic internals

    pub(crate) fn check_connection<C: Connection>(&self, id: C) -> GraphResult<&Edge> {
        if id.serial() != self.serial {
            return Err(GraphError::ForeignHandle(id.to_string()));
        }
        C::arena(self)
            .get(id.slot())
            .and_then(Option::as_ref)
            .ok_or_else(|| id.not_found())
    }

    /// Validate, then register. Registration is infallible once validation
    /// passed, so a failed call leaves the graph unchanged.
    ///
    /// The connection is owned by the source vertex's scope, which for an
    /// edge is also the destination's. Its ID must be free in that scope.
    fn connect<C: Connection>(
        &mut self,
        source: VertexId,
        destination: VertexId,
        spec: EdgeSpec,
    ) -> GraphResult<C> {
        let source_scope = self.check_vertex(source)?.subgraph();
        let destination_scope = self.check_vertex(destination)?.subgraph();
        match C::KIND {
            ConnectionKind::Edge if source_scope != destination_scope => {
                return Err(GraphError::EdgeAcrossScopes {
                    from: source,
                    to: destination,
                });
            }
            ConnectionKind::Link if source_scope == destination_scope => {
                return Err(GraphError::LinkWithinScope {
                    from: source,
                    to: destination,
                });
            }
            _ => {}
        }
        self.check_connection_key::<C>(source_scope, spec.key.as_ref())?;

        let index = C::arena(self).len();
        let id = C::handle(self.serial, index);
        let record = Edge::from_spec(spec, source, destination, source_scope);

        C::registry_mut(&mut self.registry)
            .insert(scoped(source_scope, record.key()).as_ref(), index);
        if let Some(scope) = source_scope {
            C::registry_mut(&mut self.subgraphs[scope.index()].registry)
                .insert(record.key(), index);
        }
        C::outbound_mut(self.check_vertex_mut(source)?).push(id);
        C::inbound_mut(self.check_vertex_mut(destination)?).push(id);
        C::arena_mut(self).push(Some(record));
        log::trace!(
            "created {} {}: {} -> {}",
            C::KIND,
            id,
            source,
            destination
        );

        if C::KIND == ConnectionKind::Edge {
            self.merge_components(source, destination)?;
        }
        Ok(id)
    }

    fn delete_connection<C: Connection>(&mut self, id: C) -> GraphResult<()> {
        let record = self.check_connection(id)?;
        let key = record.key().cloned();
        let owner = record.subgraph();
        let (source, destination) = (record.source, record.destination);

        C::outbound_mut(self.check_vertex_mut(source)?).retain(|&c| c != id);
        C::inbound_mut(self.check_vertex_mut(destination)?).retain(|&c| c != id);
        C::registry_mut(&mut self.registry)
            .remove(scoped(owner, key.as_ref()).as_ref(), id.slot());
        if let Some(scope) = owner {
            C::registry_mut(&mut self.subgraphs[scope.index()].registry)
                .remove(key.as_ref(), id.slot());
        }
        if let Some(mut record) = C::arena_mut(self)[id.slot()].take() {
            record.attributes_mut().clear();
        }
        log::trace!("deleted {} {}", C::KIND, id);
        Ok(())
    }

    fn check_connection_key<C: Connection>(
        &self,
        scope: Option<SubgraphId>,
        key: Option<&Key>,
    ) -> GraphResult<()> {
        if let Some(entry) = scoped(scope, key) {
            if C::registry(&self.registry).contains_key(&entry) {
                return Err(C::duplicate(entry.1));
            }
        }
        Ok(())
    }

    fn first_connection_to<C: Connection>(
        &self,
        source: VertexId,
        destination: VertexId,
    ) -> Option<C> {
        let vertex = self.vertex(source)?;
        C::outbound(vertex).iter().copied().find(|&c| {
            self.check_connection(c)
                .is_ok_and(|record| record.destination == destination)
        })
    }

    fn first_connection_from<C: Connection>(
        &self,
        destination: VertexId,
        source: VertexId,
    ) -> Option<C> {
        let vertex = self.vertex(destination)?;
        C::inbound(vertex).iter().copied().find(|&c| {
            self.check_connection(c)
                .is_ok_and(|record| record.source == source)
        })
    }

    fn reverse_connection<C: Connection>(&mut self, id: C) -> GraphResult<()> {
        let record = self.check_connection(id)?;
        let (source, destination) = (record.source, record.destination);

        C::outbound_mut(self.check_vertex_mut(source)?).retain(|&c| c != id);
        C::inbound_mut(self.check_vertex_mut(destination)?).retain(|&c| c != id);
        if let Some(record) = C::arena_mut(self)[id.slot()].as_mut() {
            record.reverse();
        }
        insert_ordered(C::outbound_mut(self.check_vertex_mut(destination)?), id);
        insert_ordered(C::inbound_mut(self.check_vertex_mut(source)?), id);
        Ok(())
    }

    fn reverse_all<C: Connection>(&mut self) -> usize {
        let mut count = 0;
        for record in C::arena_mut(self).iter_mut().flatten() {
            record.reverse();
            count += 1;
        }
        for vertex in self.vertices.iter_mut().flatten() {
            C::swap_directions(vertex);
        }
        log::debug!("reversed all {} {}s", count, C::KIND);
        count
    }

    fn matching<C, P>(&self, mut predicate: P) -> Vec<C>
    where
        C: Connection,
        P: FnMut(&Edge) -> bool,
    {
        C::registry(&self.registry)
            .iter()
            .map(|index| C::handle(self.serial, index))
            .filter(|&id| self.check_connection(id).is_ok_and(&mut predicate))
            .collect()
    }

    fn reverse_where<C, P>(&mut self, predicate: P) -> GraphResult<usize>
    where
        C: Connection,
        P: FnMut(&Edge) -> bool,
    {
        let selected: Vec<C> = self.matching(predicate);
        for &id in &selected {
            self.reverse_connection(id)?;
        }
        Ok(selected.len())
    }

    fn remove_all<C: Connection>(&mut self) -> usize {
        let mut count = 0;
        for slot in C::arena_mut(self).iter_mut() {
            if slot.take().is_some() {
                count += 1;
            }
        }
        C::registry_mut(&mut self.registry).clear();
        for subgraph in &mut self.subgraphs {
            C::registry_mut(&mut subgraph.registry).clear();
        }
        for vertex in self.vertices.iter_mut().flatten() {
            C::inbound_mut(vertex).clear();
            C::outbound_mut(vertex).clear();
        }
        log::debug!("removed all {} {}s", count, C::KIND);
        count
    }

    fn remove_where<C, P>(&mut self, predicate: P) -> GraphResult<usize>
    where
        C: Connection,
        P: FnMut(&Edge) -> bool,
    {
        let selected: Vec<C> = self.matching(predicate);
        for &id in &selected {
            self.delete_connection(id)?;
        }
        log::debug!("removed {} matching {}s", selected.len(), C::KIND);
        Ok(selected.len())
    }

    // ------------------------------------------------------------------ edges

    /// Create an edge `vertex -> destination`.
    ///
    /// Both vertices must share a subgraph scope (or both be top-level).
    /// Merges the components of the two endpoints.
    pub fn edge_to_vertex(
        &mut self,
        vertex: VertexId,
        destination: VertexId,
        spec: EdgeSpec,
    ) -> GraphResult<EdgeId> {
        self.connect(vertex, destination, spec)
    }

    /// Create an edge `source -> vertex`.
    pub fn edge_from_vertex(
        &mut self,
        vertex: VertexId,
        source: VertexId,
        spec: EdgeSpec,
    ) -> GraphResult<EdgeId> {
        self.connect(source, vertex, spec)
    }

    /// Create a vertex in the scope of `vertex` and an edge `vertex -> new`.
    pub fn edge_to_new_vertex(
        &mut self,
        vertex: VertexId,
        vertex_spec: VertexSpec,
        edge_spec: EdgeSpec,
    ) -> GraphResult<(VertexId, EdgeId)> {
        let created = self.add_scoped_neighbor::<EdgeId>(vertex, vertex_spec, &edge_spec)?;
        let edge = self.connect(vertex, created, edge_spec)?;
        Ok((created, edge))
    }

    /// Create a vertex in the scope of `vertex` and an edge `new -> vertex`.
    pub fn edge_from_new_vertex(
        &mut self,
        vertex: VertexId,
        vertex_spec: VertexSpec,
        edge_spec: EdgeSpec,
    ) -> GraphResult<(VertexId, EdgeId)> {
        let created = self.add_scoped_neighbor::<EdgeId>(vertex, vertex_spec, &edge_spec)?;
        let edge = self.connect(created, vertex, edge_spec)?;
        Ok((created, edge))
    }

    /// Create the new endpoint for `*_to_new_vertex`, after checking the
    /// edge ID so a duplicate does not leave an orphan vertex behind.
    fn add_scoped_neighbor<C: Connection>(
        &mut self,
        vertex: VertexId,
        mut vertex_spec: VertexSpec,
        edge_spec: &EdgeSpec,
    ) -> GraphResult<VertexId> {
        let scope = self.check_vertex(vertex)?.subgraph();
        self.check_connection_key::<C>(scope, edge_spec.key.as_ref())?;
        vertex_spec.subgraph = scope;
        self.add_vertex(vertex_spec)
    }

    /// Whether an edge `vertex -> destination` exists.
    pub fn has_edge_to(&self, vertex: VertexId, destination: VertexId) -> bool {
        self.first_connection_to::<EdgeId>(vertex, destination)
            .is_some()
    }

    /// Whether an edge `source -> vertex` exists.
    pub fn has_edge_from(&self, vertex: VertexId, source: VertexId) -> bool {
        self.first_connection_from::<EdgeId>(vertex, source)
            .is_some()
    }

    /// Delete the first edge `vertex -> destination`.
    pub fn delete_edge_to(&mut self, vertex: VertexId, destination: VertexId) -> GraphResult<()> {
        self.check_vertex(vertex)?;
        let edge = self
            .first_connection_to::<EdgeId>(vertex, destination)
            .ok_or(GraphError::NoEdgeBetween {
                from: vertex,
                to: destination,
            })?;
        self.delete_connection(edge)
    }

    /// Delete the first edge `source -> vertex`.
    pub fn delete_edge_from(&mut self, vertex: VertexId, source: VertexId) -> GraphResult<()> {
        self.check_vertex(vertex)?;
        let edge = self
            .first_connection_from::<EdgeId>(vertex, source)
            .ok_or(GraphError::NoEdgeBetween {
                from: source,
                to: vertex,
            })?;
        self.delete_connection(edge)
    }

    /// Delete an edge, detaching it from both endpoints and all registries.
    ///
    /// Components are left as they are.
    pub fn delete_edge(&mut self, edge: EdgeId) -> GraphResult<()> {
        self.delete_connection(edge)
    }

    /// Swap source and destination of one edge.
    pub fn reverse_edge(&mut self, edge: EdgeId) -> GraphResult<()> {
        self.reverse_connection(edge)
    }

    /// Reverse every edge by swapping each vertex's inbound and outbound
    /// lists. Returns the number of edges reversed.
    pub fn reverse_edges(&mut self) -> usize {
        self.reverse_all::<EdgeId>()
    }

    /// Reverse the edges matching `predicate`, one by one.
    pub fn reverse_edges_where<P>(&mut self, predicate: P) -> GraphResult<usize>
    where
        P: FnMut(&Edge) -> bool,
    {
        self.reverse_where::<EdgeId, P>(predicate)
    }

    /// Remove every edge. Components are left as they are.
    pub fn remove_edges(&mut self) -> usize {
        self.remove_all::<EdgeId>()
    }

    /// Remove the edges matching `predicate`. Components are left as they are.
    pub fn remove_edges_where<P>(&mut self, predicate: P) -> GraphResult<usize>
    where
        P: FnMut(&Edge) -> bool,
    {
        self.remove_where::<EdgeId, P>(predicate)
    }

    // ------------------------------------------------------------------ links

    /// Create a link `vertex -> destination`.
    ///
    /// The vertices must live in different subgraph scopes. The link's ID
    /// belongs to `vertex`'s scope. Components are not merged.
    pub fn link_to_vertex(
        &mut self,
        vertex: VertexId,
        destination: VertexId,
        spec: EdgeSpec,
    ) -> GraphResult<LinkId> {
        self.connect(vertex, destination, spec)
    }

    /// Create a link `source -> vertex`.
    pub fn link_from_vertex(
        &mut self,
        vertex: VertexId,
        source: VertexId,
        spec: EdgeSpec,
    ) -> GraphResult<LinkId> {
        self.connect(source, vertex, spec)
    }

    /// Whether a link `vertex -> destination` exists.
    pub fn has_link_to(&self, vertex: VertexId, destination: VertexId) -> bool {
        self.first_connection_to::<LinkId>(vertex, destination)
            .is_some()
    }

    /// Whether a link `source -> vertex` exists.
    pub fn has_link_from(&self, vertex: VertexId, source: VertexId) -> bool {
        self.first_connection_from::<LinkId>(vertex, source)
            .is_some()
    }

    /// Delete the first link `vertex -> destination`.
    pub fn delete_link_to(&mut self, vertex: VertexId, destination: VertexId) -> GraphResult<()> {
        self.check_vertex(vertex)?;
        let link = self
            .first_connection_to::<LinkId>(vertex, destination)
            .ok_or(GraphError::NoLinkBetween {
                from: vertex,
                to: destination,
            })?;
        self.delete_connection(link)
    }

    /// Delete the first link `source -> vertex`.
    pub fn delete_link_from(&mut self, vertex: VertexId, source: VertexId) -> GraphResult<()> {
        self.check_vertex(vertex)?;
        let link = self
            .first_connection_from::<LinkId>(vertex, source)
            .ok_or(GraphError::NoLinkBetween {
                from: source,
                to: vertex,
            })?;
        self.delete_connection(link)
    }

    /// Delete a link, detaching it from both endpoints and all registries.
    pub fn delete_link(&mut self, link: LinkId) -> GraphResult<()> {
        self.delete_connection(link)
    }

    /// Swap source and destination of one link.
    pub fn reverse_link(&mut self, link: LinkId) -> GraphResult<()> {
        self.reverse_connection(link)
    }

    /// Reverse every link. Returns the number of links reversed.
    pub fn reverse_links(&mut self) -> usize {
        self.reverse_all::<LinkId>()
    }

    /// Reverse the links matching `predicate`, one by one.
    pub fn reverse_links_where<P>(&mut self, predicate: P) -> GraphResult<usize>
    where
        P: FnMut(&Edge) -> bool,
    {
        self.reverse_where::<LinkId, P>(predicate)
    }

    /// Remove every link.
    pub fn remove_links(&mut self) -> usize {
        self.remove_all::<LinkId>()
    }

    /// Remove the links matching `predicate`.
    pub fn remove_links_where<P>(&mut self, predicate: P) -> GraphResult<usize>
    where
        P: FnMut(&Edge) -> bool,
    {
        self.remove_where::<LinkId, P>(predicate)
    }
}
