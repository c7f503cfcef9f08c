use std::{fmt::Debug, hash::Hash};

use ahash::{HashMap, HashMapExt};
use itertools::Itertools;

use crate::graphs::{edge::Edge, undirected_graph::UndirectedGraph, Distance, VertexId, Weight};

pub mod dijkstra;
pub mod report;
pub mod travel_time;

/// A path through the graph together with its total distance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<V> {
    pub vertices: Vec<V>,
    pub distance: Distance,
}

impl<V> Path<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Resolves every pair of consecutive vertices to the edge joining them.
    /// Returns `None` if one of the edges is missing from `graph`.
    pub fn legs<'a, E: Clone>(&self, graph: &'a UndirectedGraph<V, E>) -> Option<Vec<&'a Edge<E>>> {
        self.vertices
            .iter()
            .tuple_windows()
            .map(|(tail, head)| graph.edge_between(tail, head))
            .collect()
    }
}

/// Tentative distance and predecessor of a reached vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DijkstraEntry {
    pub distance: Distance,
    pub predecessor: Option<VertexId>,
}

/// Distances and predecessors keyed by vertex handle. A vertex without an
/// entry has not been reached.
#[derive(Clone, Debug)]
pub struct DijkstraData {
    entries: HashMap<VertexId, DijkstraEntry>,
}

impl DijkstraData {
    pub fn new(source: VertexId) -> DijkstraData {
        let mut entries = HashMap::new();
        entries.insert(
            source,
            DijkstraEntry {
                distance: 0,
                predecessor: None,
            },
        );
        DijkstraData { entries }
    }

    pub fn get_distance(&self, vertex: VertexId) -> Option<Distance> {
        self.entries.get(&vertex).map(|entry| entry.distance)
    }

    pub fn get_predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.entries.get(&vertex)?.predecessor
    }

    /// Number of vertices with a finite distance.
    pub fn reached(&self) -> usize {
        self.entries.len()
    }

    /// Offers the path to `head` through `tail`. The entry of `head` only
    /// changes if it is unreached or the new distance is strictly smaller,
    /// so on equal distances the first relaxation wins.
    pub fn relax(&mut self, tail: VertexId, head: VertexId, weight: Weight) -> bool {
        let Some(distance_tail) = self.get_distance(tail) else {
            return false;
        };
        let alternative_distance = distance_tail + Distance::from(weight);

        match self.entries.get(&head) {
            Some(entry) if entry.distance <= alternative_distance => false,
            _ => {
                self.entries.insert(
                    head,
                    DijkstraEntry {
                        distance: alternative_distance,
                        predecessor: Some(tail),
                    },
                );
                true
            }
        }
    }

    /// Walks the predecessors back from `target` to the source.
    pub fn get_path(&self, target: VertexId) -> Option<Path<VertexId>> {
        let distance = self.get_distance(target)?;

        let mut vertices = vec![target];
        let mut current = target;
        while let Some(predecessor) = self.get_predecessor(current) {
            current = predecessor;
            vertices.push(current);
        }
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}
