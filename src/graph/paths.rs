//! Path finding: shortest path by hops (BFS), shortest path by weight
//! (Dijkstra), enumeration of all outbound paths and tree conversion.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use super::Graph;
use crate::tree::{NodeIndex, Tree};
use crate::types::{EdgeId, GraphError, GraphResult, VertexId};

/// Min-heap entry for Dijkstra, ordered by accumulated distance and then
/// by push order.
#[derive(Debug, Clone, Copy)]
struct HeapEntry {
    distance: f64,
    sequence: u64,
    vertex: VertexId,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// Walk a predecessor map back from `last` to `first`, returning the path
/// in forward order.
fn reconstruct_path(
    first: VertexId,
    last: VertexId,
    predecessors: &HashMap<VertexId, VertexId>,
) -> GraphResult<Vec<VertexId>> {
    let mut path = vec![last];
    let mut current = last;
    while current != first {
        current = *predecessors.get(&current).ok_or_else(|| {
            GraphError::InternalInvariant(format!("no predecessor recorded for {}", current))
        })?;
        path.push(current);
    }
    path.reverse();
    Ok(path)
}

impl Graph {
    /// Unweighted shortest path from `source` to `destination`, both included.
    ///
    /// Breadth-first over outbound edges in creation order; among equally
    /// short paths the first one discovered wins.
    pub fn shortest_path_by_hops(
        &self,
        source: VertexId,
        destination: VertexId,
    ) -> GraphResult<Vec<VertexId>> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;
        if source == destination {
            return Ok(vec![source]);
        }

        let mut visited: HashSet<VertexId> = HashSet::from([source]);
        let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
        let mut queue: VecDeque<VertexId> = VecDeque::from([source]);

        while let Some(current) = queue.pop_front() {
            for next in self.iter_successors(current) {
                if next == destination {
                    let mut path = reconstruct_path(source, current, &predecessors)?;
                    path.push(destination);
                    return Ok(path);
                }
                if visited.insert(next) {
                    predecessors.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        Err(GraphError::DestinationNotReachable {
            from: source,
            to: destination,
        })
    }

    /// Weighted shortest path from `source` to `destination` with the
    /// cumulative distance of every vertex on it.
    ///
    /// Edge weights are expected to be non-negative; this is not checked.
    /// Every edge the search relaxes must carry a weight.
    pub fn shortest_path_by_weight(
        &self,
        source: VertexId,
        destination: VertexId,
    ) -> GraphResult<Vec<(VertexId, f64)>> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;
        if source == destination {
            return Ok(vec![(source, 0.0)]);
        }

        let mut distances: HashMap<VertexId, f64> = HashMap::from([(source, 0.0)]);
        let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
        let mut settled: HashSet<VertexId> = HashSet::new();
        let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
        let mut sequence = 0u64;
        heap.push(Reverse(HeapEntry {
            distance: 0.0,
            sequence,
            vertex: source,
        }));

        while let Some(Reverse(entry)) = heap.pop() {
            if !settled.insert(entry.vertex) {
                continue;
            }
            if entry.vertex == destination {
                let path = reconstruct_path(source, destination, &predecessors)?;
                return Ok(path
                    .into_iter()
                    .map(|v| (v, distances.get(&v).copied().unwrap_or_default()))
                    .collect());
            }

            for edge in self.iter_outbound_edges(entry.vertex) {
                let record = &self[edge];
                let next = record.destination;
                if settled.contains(&next) {
                    continue;
                }
                let weight = record.weight().ok_or(GraphError::MissingWeight(edge))?;
                let candidate = entry.distance + weight;
                let improves = distances
                    .get(&next)
                    .map_or(true, |&known| candidate < known);
                if improves {
                    distances.insert(next, candidate);
                    predecessors.insert(next, entry.vertex);
                    sequence += 1;
                    heap.push(Reverse(HeapEntry {
                        distance: candidate,
                        sequence,
                        vertex: next,
                    }));
                }
            }
        }

        Err(GraphError::DestinationNotReachable {
            from: source,
            to: destination,
        })
    }

    /// Enumerate every maximal outbound path from `start` (to each reachable
    /// leaf) as a vertex list.
    ///
    /// Yields a final `Err(GraphError::Cycle)` carrying the cycle if a
    /// vertex repeats on the current path.
    pub fn iter_outbound_paths(&self, start: VertexId) -> GraphResult<OutboundPaths<'_>> {
        self.check_vertex(start)?;
        Ok(OutboundPaths {
            graph: self,
            start: Some(start),
            path: Vec::new(),
            on_path: HashSet::new(),
            stack: Vec::new(),
            failed: false,
        })
    }

    /// Collect [`Graph::iter_outbound_paths`], failing on a cycle.
    pub fn all_outbound_paths(&self, start: VertexId) -> GraphResult<Vec<Vec<VertexId>>> {
        self.iter_outbound_paths(start)?.collect()
    }

    /// Convert the part of the graph reachable from `root` into a [`Tree`].
    ///
    /// Children follow outbound edge order and every tree node receives a
    /// copy of its vertex's attributes. Reaching a vertex twice (through a
    /// cross, forward or back edge) fails with `NotATree`.
    pub fn convert_to_tree(&self, root: VertexId) -> GraphResult<Tree> {
        let vertex = self.check_vertex(root)?;
        let mut tree = Tree::new(vertex.key().cloned(), vertex.value().cloned());
        tree.node_mut(tree.root())
            .set_attributes(vertex.attributes().clone());

        let mut visited: HashSet<VertexId> = HashSet::from([root]);
        let mut stack: Vec<(std::slice::Iter<'_, EdgeId>, NodeIndex)> =
            vec![(vertex.outbound_edges().iter(), tree.root())];

        while let Some((edges, parent)) = stack.last_mut() {
            let parent = *parent;
            let Some(&edge) = edges.next() else {
                stack.pop();
                continue;
            };
            let next = self[edge].destination;
            if !visited.insert(next) {
                return Err(GraphError::NotATree(next));
            }
            let child = &self[next];
            let node = tree.add_child(parent, child.key().cloned(), child.value().cloned());
            tree.node_mut(node)
                .set_attributes(child.attributes().clone());
            stack.push((child.outbound_edges().iter(), node));
        }

        Ok(tree)
    }
}

/// Lazy enumeration of maximal outbound paths. Created by
/// [`Graph::iter_outbound_paths`].
pub struct OutboundPaths<'g> {
    graph: &'g Graph,
    start: Option<VertexId>,
    path: Vec<VertexId>,
    on_path: HashSet<VertexId>,
    stack: Vec<std::slice::Iter<'g, EdgeId>>,
    failed: bool,
}

impl<'g> Iterator for OutboundPaths<'g> {
    type Item = GraphResult<Vec<VertexId>>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph: &'g Graph = self.graph;
        if self.failed {
            return None;
        }
        if let Some(start) = self.start.take() {
            let outbound = graph[start].outbound_edges();
            if outbound.is_empty() {
                return Some(Ok(vec![start]));
            }
            self.path.push(start);
            self.on_path.insert(start);
            self.stack.push(outbound.iter());
        }

        while let Some(edges) = self.stack.last_mut() {
            let Some(&edge) = edges.next() else {
                self.stack.pop();
                if let Some(done) = self.path.pop() {
                    self.on_path.remove(&done);
                }
                continue;
            };
            let next = graph[edge].destination;
            if self.on_path.contains(&next) {
                self.failed = true;
                let from = self.path.iter().position(|&v| v == next).unwrap_or(0);
                let mut cycle = self.path[from..].to_vec();
                cycle.push(next);
                log::warn!("cycle found while enumerating paths: {:?}", cycle);
                return Some(Err(GraphError::Cycle { vertices: cycle }));
            }
            let outbound = graph[next].outbound_edges();
            if outbound.is_empty() {
                let mut found = self.path.clone();
                found.push(next);
                return Some(Ok(found));
            }
            self.path.push(next);
            self.on_path.insert(next);
            self.stack.push(outbound.iter());
        }
        None
    }
}
