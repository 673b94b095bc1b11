//! Directed graph with idempotent insertion
//!
//! Vertices are arbitrary copyable keys (the control-flow graph uses
//! statement references compared by identity). Inserting a vertex or an edge
//! that already exists leaves the graph unchanged.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use id_arena::{Arena, Id};

pub type NodeId<N> = Id<GraphNode<N>>;

#[derive(Debug)]
pub struct GraphNode<N> {
    pub id: NodeId<N>,
    pub value: N,
    pub successors: Vec<NodeId<N>>,
    pub predecessors: Vec<NodeId<N>>,
}

#[derive(Debug)]
pub struct DirectedGraph<N> {
    nodes: Arena<GraphNode<N>>,
    index: HashMap<N, NodeId<N>>,
    edge_count: usize,
}

impl<N: Copy + Eq + Hash> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Copy + Eq + Hash> DirectedGraph<N> {
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Returns the id of `value`, inserting it first if needed.
    pub fn add_vertex(&mut self, value: N) -> NodeId<N> {
        if let Some(&id) = self.index.get(&value) {
            return id;
        }

        let id = self.nodes.alloc_with_id(|id| GraphNode {
            id,
            value,
            successors: Vec::new(),
            predecessors: Vec::new(),
        });
        self.index.insert(value, id);
        id
    }

    /// Adds `from -> to`, inserting missing endpoints. Returns false if the
    /// edge was already present.
    pub fn add_edge(&mut self, from: N, to: N) -> bool {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);

        if self.nodes[from].successors.contains(&to) {
            return false;
        }

        self.nodes[from].successors.push(to);
        self.nodes[to].predecessors.push(from);
        self.edge_count += 1;
        true
    }

    pub fn id_of(&self, value: N) -> Option<NodeId<N>> {
        self.index.get(&value).copied()
    }

    pub fn get(&self, id: NodeId<N>) -> &GraphNode<N> {
        &self.nodes[id]
    }

    pub fn contains_vertex(&self, value: N) -> bool {
        self.index.contains_key(&value)
    }

    pub fn contains_edge(&self, from: N, to: N) -> bool {
        match (self.id_of(from), self.id_of(to)) {
            (Some(from), Some(to)) => self.nodes[from].successors.contains(&to),
            _ => false,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = N> + '_ {
        self.nodes.iter().map(|(_, node)| node.value)
    }

    pub fn edges(&self) -> impl Iterator<Item = (N, N)> + '_ {
        self.nodes.iter().flat_map(move |(_, node)| {
            node.successors
                .iter()
                .map(move |&succ| (node.value, self.nodes[succ].value))
        })
    }

    pub fn successors(&self, value: N) -> impl Iterator<Item = N> + '_ {
        self.id_of(value)
            .into_iter()
            .flat_map(move |id| self.nodes[id].successors.iter())
            .map(move |&succ| self.nodes[succ].value)
    }

    pub fn predecessors(&self, value: N) -> impl Iterator<Item = N> + '_ {
        self.id_of(value)
            .into_iter()
            .flat_map(move |id| self.nodes[id].predecessors.iter())
            .map(move |&pred| self.nodes[pred].value)
    }

    /// Breadth-first walk from `start`, in visit order. `start` itself is
    /// included; each vertex is visited at most once.
    pub fn reachable_from(&self, start: N) -> Vec<N> {
        let Some(start) = self.id_of(start) else {
            return Vec::new();
        };

        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(id) = queue.pop_front() {
            order.push(self.nodes[id].value);
            for &succ in &self.nodes[id].successors {
                if visited.insert(succ) {
                    queue.push_back(succ);
                }
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adding_vertex_twice_is_idempotent() {
        let mut graph = DirectedGraph::new();
        let first = graph.add_vertex(1);
        let second = graph.add_vertex(1);

        assert_eq!(first, second);
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn adding_edge_twice_is_idempotent() {
        let mut graph = DirectedGraph::new();
        assert!(graph.add_edge(1, 2));
        assert!(!graph.add_edge(1, 2));

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.successors(1).collect::<Vec<_>>(), vec![2]);
        assert_eq!(graph.predecessors(2).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn edges_are_directed() {
        let mut graph = DirectedGraph::new();
        graph.add_edge('a', 'b');

        assert!(graph.contains_edge('a', 'b'));
        assert!(!graph.contains_edge('b', 'a'));
        assert!(!graph.contains_edge('a', 'z'));
    }

    #[test]
    fn vertices_keep_insertion_order() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex(3);
        graph.add_edge(1, 2);
        graph.add_vertex(3);

        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(1, 2)]);
    }

    #[test]
    fn reachable_from_is_breadth_first() {
        let mut graph = DirectedGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 4);
        graph.add_edge(3, 4);
        graph.add_vertex(5);

        assert_eq!(graph.reachable_from(1), vec![1, 2, 3, 4]);
    }

    #[test]
    fn reachable_from_survives_cycles() {
        let mut graph = DirectedGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 1);

        assert_eq!(graph.reachable_from(2), vec![2, 3, 1]);
    }

    #[test]
    fn reachable_from_unknown_vertex_is_empty() {
        let graph: DirectedGraph<u8> = DirectedGraph::new();
        assert!(graph.reachable_from(7).is_empty());
    }
}
