use super::{VertexId, Weight};

/// One side of an undirected edge, stored in the edge list of its source
/// vertex.
///
/// The destination is a handle into the graph's vertex storage and never owns
/// the vertex it points to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<E> {
    destination: VertexId,
    label: E,
    weight: Weight,
}

impl<E> Edge<E> {
    pub fn new(destination: VertexId, label: E, weight: Weight) -> Edge<E> {
        Edge {
            destination,
            label,
            weight,
        }
    }

    pub fn destination(&self) -> VertexId {
        self.destination
    }

    pub fn label(&self) -> &E {
        &self.label
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl<E: Clone> Edge<E> {
    /// The symmetric record stored on the destination vertex.
    pub fn reversed(&self, source: VertexId) -> Edge<E> {
        Edge {
            destination: source,
            label: self.label.clone(),
            weight: self.weight,
        }
    }
}
