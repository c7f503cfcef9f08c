use std::{fmt::Debug, hash::Hash};

use log::debug;

use super::{DijkstraData, Path};
use crate::{
    error::GraphError,
    graphs::{undirected_graph::UndirectedGraph, Distance, VertexId},
};

/// Dijkstra's algorithm driven by the processed flags of the graph.
///
/// Every round relaxes the edges of the current vertex towards unprocessed
/// neighbours, marks the current vertex processed, and selects the next one
/// by a linear scan over the vertices in collection order. Ties go to the
/// vertex that comes first in that order, which makes results repeatable.
pub struct Dijkstra<'a, V, E> {
    graph: &'a mut UndirectedGraph<V, E>,
}

impl<'a, V, E> Dijkstra<'a, V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: Clone,
{
    pub fn new(graph: &'a mut UndirectedGraph<V, E>) -> Dijkstra<'a, V, E> {
        Dijkstra { graph }
    }

    /// Distances and predecessors of every vertex reachable from `source`.
    pub fn single_source(&mut self, source: &V) -> Result<DijkstraData, GraphError<V>> {
        if self.graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let source = self
            .graph
            .vertex_id(source)
            .ok_or_else(|| GraphError::SourceNotFound {
                label: source.clone(),
            })?;

        self.run(source)
    }

    /// Shortest path between two labels. `Ok(None)` means the destination is
    /// not reachable from the source.
    pub fn shortest_path(
        &mut self,
        source: &V,
        destination: &V,
    ) -> Result<Option<Path<V>>, GraphError<V>> {
        if self.graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let source_id = self
            .graph
            .vertex_id(source)
            .ok_or_else(|| GraphError::SourceNotFound {
                label: source.clone(),
            })?;
        let destination_id = self.graph.vertex_id(destination).ok_or_else(|| {
            GraphError::DestinationNotFound {
                label: destination.clone(),
            }
        })?;

        if source_id == destination_id {
            return Ok(Some(Path {
                vertices: vec![source.clone()],
                distance: 0,
            }));
        }

        let data = self.run(source_id)?;
        let Some(path) = data.get_path(destination_id) else {
            debug!("{:?} is not reachable from {:?}", destination, source);
            return Ok(None);
        };

        let vertices = path
            .vertices
            .iter()
            .map(|&id| self.graph.label(id).cloned())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| GraphError::DestinationNotFound {
                label: destination.clone(),
            })?;

        Ok(Some(Path {
            vertices,
            distance: path.distance,
        }))
    }

    fn run(&mut self, source: VertexId) -> Result<DijkstraData, GraphError<V>> {
        self.graph.reset_processed()?;

        let mut data = DijkstraData::new(source);
        let mut current = Some(source);
        let mut rounds = 0;

        while let Some(tail) = current {
            for edge in self.graph.edges(tail) {
                if !self.graph.is_processed(edge.destination()) {
                    data.relax(tail, edge.destination(), edge.weight());
                }
            }
            self.graph.set_processed(tail, true);
            rounds += 1;

            current = self.find_next(&data);
        }

        debug!(
            "finalized {} of {} vertices in {} rounds",
            data.reached(),
            self.graph.count(),
            rounds
        );

        self.graph.reset_processed()?;
        Ok(data)
    }

    /// The unprocessed vertex with the smallest known distance. Unreached
    /// vertices are never selected, so the search ends once only those are
    /// left.
    fn find_next(&self, data: &DijkstraData) -> Option<VertexId> {
        let mut next: Option<(VertexId, Distance)> = None;

        for (id, vertex) in self.graph.vertices() {
            if vertex.is_processed() {
                continue;
            }
            if let Some(distance) = data.get_distance(id) {
                if next.map_or(true, |(_, smallest)| distance < smallest) {
                    next = Some((id, distance));
                }
            }
        }

        next.map(|(id, _)| id)
    }
}
