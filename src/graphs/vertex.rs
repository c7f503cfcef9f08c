use super::{edge::Edge, VertexId};

/// A labeled vertex owning the edges that start at it.
#[derive(Clone, Debug)]
pub struct Vertex<V, E> {
    label: V,
    processed: bool,
    edges: Vec<Edge<E>>,
}

impl<V, E> Vertex<V, E> {
    pub fn new(label: V) -> Vertex<V, E> {
        Vertex {
            label,
            processed: false,
            edges: Vec::new(),
        }
    }

    pub fn label(&self) -> &V {
        &self.label
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    pub fn set_processed(&mut self, processed: bool) {
        self.processed = processed;
    }

    pub fn edges(&self) -> &[Edge<E>] {
        &self.edges
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_to(&self, destination: VertexId) -> Option<&Edge<E>> {
        self.edges
            .iter()
            .find(|edge| edge.destination() == destination)
    }

    pub(crate) fn push_edge(&mut self, edge: Edge<E>) {
        self.edges.push(edge);
    }

    /// Removes the first edge pointing at `destination`, keeping the order of
    /// the remaining edges.
    pub(crate) fn remove_edge_to(&mut self, destination: VertexId) -> Option<Edge<E>> {
        let position = self
            .edges
            .iter()
            .position(|edge| edge.destination() == destination)?;
        Some(self.edges.remove(position))
    }

    /// Removes every edge pointing at `destination` and returns how many were
    /// dropped.
    pub(crate) fn remove_edges_to(&mut self, destination: VertexId) -> usize {
        let before = self.edges.len();
        self.edges.retain(|edge| edge.destination() != destination);
        before - self.edges.len()
    }
}
