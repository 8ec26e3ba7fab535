//! Topological ordering and cycle detection (Kahn's algorithm).
//!
//! The worklist is seeded with leafs (no outbound edges), so the order runs
//! from sinks to sources: a vertex is yielded only after all destinations
//! of its outbound edges. Links are ignored.

use std::collections::VecDeque;

use super::Graph;
use crate::types::{GraphError, GraphResult, Vertex, VertexId};

/// Per-vertex remaining outbound-edge counts and the ready worklist.
struct KahnState {
    remaining_edges: Vec<usize>,
    ready: VecDeque<VertexId>,
    unresolved: usize,
}

impl KahnState {
    fn new(graph: &Graph) -> Self {
        let mut remaining_edges = vec![0; graph.vertices.len()];
        let mut ready = VecDeque::new();
        for vertex in graph.iter_vertices() {
            let count = graph[vertex].out_degree();
            remaining_edges[vertex.index()] = count;
            if count == 0 {
                ready.push_back(vertex);
            }
        }
        Self {
            remaining_edges,
            ready,
            unresolved: graph.vertex_count(),
        }
    }

    /// Take the next ready vertex and release its predecessors.
    fn resolve_next(&mut self, graph: &Graph) -> Option<GraphResult<VertexId>> {
        let vertex = self.ready.pop_front()?;
        let Some(unresolved) = self.unresolved.checked_sub(1) else {
            return Some(Err(GraphError::InternalInvariant(
                "topological sort resolved more vertices than exist".to_owned(),
            )));
        };
        self.unresolved = unresolved;
        for source in graph.iter_predecessors(vertex) {
            let count = &mut self.remaining_edges[source.index()];
            let Some(left) = count.checked_sub(1) else {
                return Some(Err(GraphError::InternalInvariant(format!(
                    "negative outbound count on {}",
                    source
                ))));
            };
            *count = left;
            if left == 0 {
                self.ready.push_back(source);
            }
        }
        Some(Ok(vertex))
    }

    fn residue(&self, graph: &Graph) -> Vec<VertexId> {
        graph
            .iter_vertices()
            .filter(|v| self.remaining_edges[v.index()] > 0)
            .collect()
    }
}

type VertexFilter<'g> = Box<dyn FnMut(&Vertex) -> bool + 'g>;

/// Lazy topological order. Created by [`Graph::iter_topologically`].
///
/// Yields `Ok(vertex)` items; if vertices remain unresolved once the
/// worklist runs dry, a final `Err(GraphError::Cycle)` lists them.
pub struct Topological<'g> {
    graph: &'g Graph,
    state: KahnState,
    filter: Option<VertexFilter<'g>>,
    finished: bool,
}

impl Iterator for Topological<'_> {
    type Item = GraphResult<VertexId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        while let Some(result) = self.state.resolve_next(self.graph) {
            match result {
                Ok(vertex) => {
                    let keep = match self.filter.as_mut() {
                        Some(filter) => filter(&self.graph[vertex]),
                        None => true,
                    };
                    if keep {
                        return Some(Ok(vertex));
                    }
                }
                Err(err) => {
                    self.finished = true;
                    return Some(Err(err));
                }
            }
        }

        self.finished = true;
        if self.state.unresolved == 0 {
            return None;
        }
        let residue = self.state.residue(self.graph);
        log::warn!(
            "topological sort stopped with {} unresolved vertices",
            residue.len()
        );
        Some(Err(GraphError::Cycle { vertices: residue }))
    }
}

impl Graph {
    /// Iterate vertices in sink-to-source topological order.
    ///
    /// Fails immediately with `Cycle` if a non-empty graph has no leaf.
    pub fn iter_topologically(&self) -> GraphResult<Topological<'_>> {
        self.topological(None)
    }

    /// Like [`Graph::iter_topologically`], yielding only vertices matching
    /// `predicate`. All vertices still take part in the ordering.
    pub fn iter_topologically_where<'g, P>(
        &'g self,
        predicate: P,
    ) -> GraphResult<Topological<'g>>
    where
        P: FnMut(&Vertex) -> bool + 'g,
    {
        self.topological(Some(Box::new(predicate)))
    }

    fn topological<'g>(&'g self, filter: Option<VertexFilter<'g>>) -> GraphResult<Topological<'g>> {
        let state = KahnState::new(self);
        if state.ready.is_empty() && state.unresolved > 0 {
            log::warn!("topological sort found no leaf among {} vertices", state.unresolved);
            return Err(GraphError::Cycle {
                vertices: self.iter_vertices().collect(),
            });
        }
        Ok(Topological {
            graph: self,
            state,
            filter,
            finished: false,
        })
    }

    /// Collect [`Graph::iter_topologically`], failing on a cycle.
    pub fn topological_order(&self) -> GraphResult<Vec<VertexId>> {
        self.iter_topologically()?.collect()
    }

    /// Whether the edges form a cycle. The empty graph is acyclic.
    ///
    /// `Err` only reports an internal invariant failure, i.e. a bug in this crate.
    pub fn has_cycle(&self) -> GraphResult<bool> {
        let mut state = KahnState::new(self);
        if state.ready.is_empty() {
            return Ok(state.unresolved > 0);
        }
        while let Some(result) = state.resolve_next(self) {
            result?;
        }
        Ok(state.unresolved > 0)
    }
}
