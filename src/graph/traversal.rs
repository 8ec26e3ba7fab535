//! Graph traversal: adjacency iteration, BFS and DFS.
//!
//! Every traversal follows outbound edges only and builds fresh state per
//! call. The graph cannot be mutated while a traversal borrows it.

use std::collections::{HashSet, VecDeque};

use super::Graph;
use crate::types::{EdgeId, GraphResult, LinkId, VertexId};

impl Graph {
    /// Outbound edges of `vertex` in creation order. Empty for stale handles.
    pub fn iter_outbound_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.vertex(vertex)
            .into_iter()
            .flat_map(|v| v.outbound_edges().iter().copied())
    }

    /// Inbound edges of `vertex` in creation order.
    pub fn iter_inbound_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.vertex(vertex)
            .into_iter()
            .flat_map(|v| v.inbound_edges().iter().copied())
    }

    /// Outbound links of `vertex` in creation order.
    pub fn iter_outbound_links(&self, vertex: VertexId) -> impl Iterator<Item = LinkId> + '_ {
        self.vertex(vertex)
            .into_iter()
            .flat_map(|v| v.outbound_links().iter().copied())
    }

    /// Inbound links of `vertex` in creation order.
    pub fn iter_inbound_links(&self, vertex: VertexId) -> impl Iterator<Item = LinkId> + '_ {
        self.vertex(vertex)
            .into_iter()
            .flat_map(|v| v.inbound_links().iter().copied())
    }

    /// Destinations of the outbound edges of `vertex`, one per edge.
    pub fn iter_successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.iter_outbound_edges(vertex)
            .map(move |edge| self[edge].destination)
    }

    /// Sources of the inbound edges of `vertex`, one per edge.
    pub fn iter_predecessors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.iter_inbound_edges(vertex)
            .map(move |edge| self[edge].source)
    }

    /// Breadth-first traversal from `start`, yielding `start` first.
    pub fn bfs(&self, start: VertexId) -> GraphResult<Bfs<'_>> {
        self.check_vertex(start)?;
        Ok(Bfs {
            graph: self,
            queue: VecDeque::from([start]),
            visited: HashSet::from([start]),
        })
    }

    /// Depth-first pre-order traversal from `start`, yielding `start` first.
    pub fn dfs(&self, start: VertexId) -> GraphResult<Dfs<'_>> {
        self.check_vertex(start)?;
        Ok(Dfs {
            graph: self,
            pending: Some(start),
            stack: Vec::new(),
            visited: HashSet::from([start]),
        })
    }
}

/// Lazy breadth-first traversal. Created by [`Graph::bfs`].
pub struct Bfs<'g> {
    graph: &'g Graph,
    queue: VecDeque<VertexId>,
    visited: HashSet<VertexId>,
}

impl Iterator for Bfs<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        let current = self.queue.pop_front()?;
        for next in self.graph.iter_successors(current) {
            if self.visited.insert(next) {
                self.queue.push_back(next);
            }
        }
        Some(current)
    }
}

/// Lazy depth-first pre-order traversal. Created by [`Graph::dfs`].
///
/// Uses an explicit stack of adjacency iterators instead of recursion.
pub struct Dfs<'g> {
    graph: &'g Graph,
    pending: Option<VertexId>,
    stack: Vec<std::slice::Iter<'g, EdgeId>>,
    visited: HashSet<VertexId>,
}

impl<'g> Iterator for Dfs<'g> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        let graph: &'g Graph = self.graph;
        if let Some(start) = self.pending.take() {
            self.stack.push(graph[start].outbound_edges().iter());
            return Some(start);
        }
        while let Some(edges) = self.stack.last_mut() {
            match edges.next() {
                Some(&edge) => {
                    let next = graph[edge].destination;
                    if self.visited.insert(next) {
                        self.stack.push(graph[next].outbound_edges().iter());
                        return Some(next);
                    }
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
