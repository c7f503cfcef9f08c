use std::{
    fmt::{self, Debug, Display},
    hash::Hash,
};

use ahash::{HashMap, HashMapExt};
use log::debug;

use super::{edge::Edge, vertex::Vertex, VertexId, Weight};
use crate::error::GraphError;

#[derive(Clone, Debug)]
struct Slot<V, E> {
    generation: u32,
    vertex: Option<Vertex<V, E>>,
}

/// Undirected weighted graph with vertices identified by their label.
///
/// Vertices live in an arena of generational slots. Freed slots are reused
/// by later inserts, while `order` keeps the live handles in insertion
/// order, which is the collection order every scan follows. Every edge is
/// stored twice, once on each endpoint, with the same label and weight.
#[derive(Clone, Debug)]
pub struct UndirectedGraph<V, E> {
    slots: Vec<Slot<V, E>>,
    free: Vec<usize>,
    order: Vec<VertexId>,
    index: HashMap<V, VertexId>,
}

impl<V, E> Default for UndirectedGraph<V, E> {
    fn default() -> Self {
        UndirectedGraph {
            slots: Vec::new(),
            free: Vec::new(),
            order: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V, E> UndirectedGraph<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of vertices currently in the graph.
    pub fn count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges. Each symmetric pair is counted once.
    pub fn number_of_edges(&self) -> usize {
        self.vertices()
            .map(|(_, vertex)| vertex.degree())
            .sum::<usize>()
            / 2
    }

    /// Iterates the vertices in collection order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex<V, E>)> + '_ {
        self.order
            .iter()
            .filter_map(move |&id| self.vertex(id).map(|vertex| (id, vertex)))
    }

    pub fn vertex_ids(&self) -> Vec<VertexId> {
        self.order.clone()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<V, E>> {
        let slot = self.slots.get(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.vertex.as_ref()
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<V, E>> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.vertex.as_mut()
    }

    pub fn label(&self, id: VertexId) -> Option<&V> {
        self.vertex(id).map(Vertex::label)
    }

    /// Edges starting at `id`. Empty for a handle of a removed vertex.
    pub fn edges(&self, id: VertexId) -> &[Edge<E>] {
        self.vertex(id).map(Vertex::edges).unwrap_or(&[])
    }

    pub fn is_processed(&self, id: VertexId) -> bool {
        self.vertex(id).is_some_and(Vertex::is_processed)
    }

    pub fn set_processed(&mut self, id: VertexId, processed: bool) {
        if let Some(vertex) = self.vertex_mut(id) {
            vertex.set_processed(processed);
        }
    }

    /// Whether any vertex still waits to be processed.
    pub fn has_unprocessed(&self) -> bool {
        self.vertices().any(|(_, vertex)| !vertex.is_processed())
    }

    fn live_vertices_mut(&mut self) -> impl Iterator<Item = &mut Vertex<V, E>> + '_ {
        self.slots.iter_mut().filter_map(|slot| slot.vertex.as_mut())
    }
}

impl<V, E> UndirectedGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: Clone,
{
    /// Inserts a vertex unless one with the same label exists. Returns the
    /// handle of the vertex carrying `label` in both cases.
    pub fn insert_vertex(&mut self, label: V) -> VertexId {
        if let Some(&id) = self.index.get(&label) {
            return id;
        }

        let vertex = Some(Vertex::new(label.clone()));
        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index];
                slot.vertex = vertex;
                VertexId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    vertex,
                });
                VertexId {
                    index: self.slots.len() - 1,
                    generation: 0,
                }
            }
        };
        self.index.insert(label, id);
        self.order.push(id);
        id
    }

    pub fn vertex_id(&self, label: &V) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    pub fn contains_vertex(&self, label: &V) -> bool {
        self.index.contains_key(label)
    }

    fn resolve(&self, label: &V) -> Result<VertexId, GraphError<V>> {
        self.vertex_id(label).ok_or_else(|| GraphError::VertexNotFound {
            label: label.clone(),
        })
    }

    /// Removes the vertex and every edge incident to it, on both sides.
    pub fn remove_vertex(&mut self, label: &V) -> Result<(), GraphError<V>> {
        let id = self.resolve(label)?;

        // Scan all vertices instead of only the neighbours so that no edge
        // record can survive pointing at the freed slot.
        let mut dropped = 0;
        for vertex in self.live_vertices_mut() {
            dropped += vertex.remove_edges_to(id);
        }

        let slot = &mut self.slots[id.index];
        slot.vertex = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.order.retain(|&other| other != id);
        self.index.remove(label);

        debug!("removed vertex {:?} and {} incident edges", label, dropped);
        Ok(())
    }

    /// Connects two existing vertices with an undirected edge.
    pub fn add_edge(
        &mut self,
        from: &V,
        to: &V,
        label: E,
        weight: Weight,
    ) -> Result<(), GraphError<V>> {
        let from_id = self.resolve(from)?;
        let to_id = self.resolve(to)?;

        if from_id == to_id {
            return Err(GraphError::SelfLoop {
                label: from.clone(),
            });
        }
        if self.edge_between_ids(from_id, to_id).is_some() {
            return Err(GraphError::DuplicateEdge {
                from: from.clone(),
                to: to.clone(),
            });
        }

        let edge = Edge::new(to_id, label, weight);
        let reversed = edge.reversed(from_id);
        if let Some(vertex) = self.vertex_mut(from_id) {
            vertex.push_edge(edge);
        }
        if let Some(vertex) = self.vertex_mut(to_id) {
            vertex.push_edge(reversed);
        }
        Ok(())
    }

    /// Removes both records of the edge between `from` and `to` and returns
    /// the record that was stored on `from`.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> Result<Edge<E>, GraphError<V>> {
        let from_id = self.resolve(from)?;
        let to_id = self.resolve(to)?;

        let edge_not_found = || GraphError::EdgeNotFound {
            from: from.clone(),
            to: to.clone(),
        };

        if self.edge_between_ids(from_id, to_id).is_none()
            || self.edge_between_ids(to_id, from_id).is_none()
        {
            return Err(edge_not_found());
        }

        if let Some(vertex) = self.vertex_mut(to_id) {
            vertex.remove_edge_to(from_id);
        }
        self.vertex_mut(from_id)
            .and_then(|vertex| vertex.remove_edge_to(to_id))
            .ok_or_else(edge_not_found)
    }

    pub fn edge_between(&self, from: &V, to: &V) -> Option<&Edge<E>> {
        self.edge_between_ids(self.vertex_id(from)?, self.vertex_id(to)?)
    }

    pub fn edge_between_ids(&self, from: VertexId, to: VertexId) -> Option<&Edge<E>> {
        self.vertex(from)?.edge_to(to)
    }

    /// Marks every vertex as unprocessed.
    pub fn reset_processed(&mut self) -> Result<(), GraphError<V>> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        for vertex in self.live_vertices_mut() {
            vertex.set_processed(false);
        }
        Ok(())
    }

    /// Describes every vertex in collection order.
    pub fn summary(&self) -> Result<Vec<VertexSummary<'_, V>>, GraphError<V>> {
        if self.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        Ok(self
            .vertices()
            .enumerate()
            .map(|(position, (_, vertex))| VertexSummary {
                position: position + 1,
                label: vertex.label(),
                degree: vertex.degree(),
                processed: vertex.is_processed(),
            })
            .collect())
    }

    /// Checks the structural invariants: the vertex count, the label index,
    /// that every edge points at a live vertex, and that every edge has its
    /// symmetric counterpart with equal weight.
    pub fn check_invariants(&self) -> Result<(), String>
    where
        E: PartialEq,
    {
        let live = self.slots.iter().filter(|slot| slot.vertex.is_some()).count();
        if live != self.count() {
            return Err(format!("count is {} but {} vertices exist", self.count(), live));
        }
        if self.index.len() != self.count() {
            return Err(format!(
                "label index holds {} entries for {} vertices",
                self.index.len(),
                self.count()
            ));
        }
        if self.slots.len() != live + self.free.len() {
            return Err(format!(
                "{} slots for {} vertices and {} free slots",
                self.slots.len(),
                live,
                self.free.len()
            ));
        }

        for (id, vertex) in self.vertices() {
            if self.index.get(vertex.label()) != Some(&id) {
                return Err(format!("label {:?} is not indexed", vertex.label()));
            }
            for edge in vertex.edges() {
                let destination = self.vertex(edge.destination()).ok_or_else(|| {
                    format!("edge of {:?} points at a removed vertex", vertex.label())
                })?;
                let symmetric = destination.edge_to(id).ok_or_else(|| {
                    format!(
                        "edge {:?} -> {:?} has no symmetric edge",
                        vertex.label(),
                        destination.label()
                    )
                })?;
                if symmetric.weight() != edge.weight() || symmetric.label() != edge.label() {
                    return Err(format!(
                        "edges between {:?} and {:?} differ",
                        vertex.label(),
                        destination.label()
                    ));
                }
            }
        }

        Ok(())
    }
}

/// One line of [`UndirectedGraph::summary`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexSummary<'a, V> {
    pub position: usize,
    pub label: &'a V,
    pub degree: usize,
    pub processed: bool,
}

impl<V: Display> Display for VertexSummary<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vertex #{} {}: {} edges, processed: {}",
            self.position, self.label, self.degree, self.processed
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    type RoadGraph = UndirectedGraph<&'static str, &'static str>;

    fn triangle() -> RoadGraph {
        let mut graph = RoadGraph::new();
        for label in ["A", "B", "C"] {
            graph.insert_vertex(label);
        }
        graph.add_edge(&"A", &"B", "I-5", 5).unwrap();
        graph.add_edge(&"B", &"C", "OR-99", 3).unwrap();
        graph.add_edge(&"A", &"C", "US-26", 10).unwrap();
        graph
    }

    fn destinations(graph: &RoadGraph, label: &'static str) -> Vec<&'static str> {
        let id = graph.vertex_id(&label).unwrap();
        graph
            .edges(id)
            .iter()
            .map(|edge| *graph.label(edge.destination()).unwrap())
            .collect()
    }

    fn edge_lists(graph: &RoadGraph, ids: &[VertexId]) -> Vec<Vec<Edge<&'static str>>> {
        ids.iter().map(|&id| graph.edges(id).to_vec()).collect()
    }

    #[test]
    fn insert_is_idempotent_on_label() {
        let mut graph = RoadGraph::new();
        let first = graph.insert_vertex("A");
        let second = graph.insert_vertex("A");

        assert_eq!(first, second);
        assert_eq!(graph.count(), 1);
        assert!(!graph.is_empty());
    }

    #[test]
    fn count_tracks_inserts_and_removals() {
        let mut graph = RoadGraph::new();
        assert!(graph.is_empty());
        for label in ["A", "B", "C", "D"] {
            graph.insert_vertex(label);
        }
        graph.remove_vertex(&"B").unwrap();
        assert!(graph.remove_vertex(&"B").is_err());

        assert_eq!(graph.count(), 3);
        assert_eq!(graph.check_invariants(), Ok(()));
    }

    #[test]
    fn add_edge_stores_both_directions() {
        let graph = triangle();

        let forward = graph.edge_between(&"A", &"B").unwrap();
        let backward = graph.edge_between(&"B", &"A").unwrap();
        assert_eq!(forward.weight(), 5);
        assert_eq!(backward.weight(), 5);
        assert_eq!(forward.label(), backward.label());
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.check_invariants(), Ok(()));
    }

    #[test]
    fn add_edge_requires_both_vertices() {
        let mut graph = triangle();

        assert_eq!(
            graph.add_edge(&"A", &"Z", "I-5", 1),
            Err(GraphError::VertexNotFound { label: "Z" })
        );
        assert_eq!(
            graph.add_edge(&"Y", &"A", "I-5", 1),
            Err(GraphError::VertexNotFound { label: "Y" })
        );
        assert_eq!(graph.number_of_edges(), 3);
    }

    #[test]
    fn loops_and_parallel_edges_are_rejected() {
        let mut graph = triangle();

        assert_eq!(
            graph.add_edge(&"A", &"A", "I-5", 1),
            Err(GraphError::SelfLoop { label: "A" })
        );
        assert_eq!(
            graph.add_edge(&"B", &"A", "I-5", 1),
            Err(GraphError::DuplicateEdge { from: "B", to: "A" })
        );
        assert_eq!(graph.edge_between(&"A", &"B").unwrap().weight(), 5);
        assert_eq!(graph.check_invariants(), Ok(()));
    }

    #[test]
    fn add_then_remove_restores_edge_lists() {
        let mut graph = triangle();
        graph.insert_vertex("D");
        graph.add_edge(&"C", &"D", "I-84", 7).unwrap();
        let ids: Vec<VertexId> = ["A", "B", "C", "D"]
            .iter()
            .map(|label| graph.vertex_id(label).unwrap())
            .collect();
        let before = edge_lists(&graph, &ids);

        graph.add_edge(&"A", &"D", "I-5", 4).unwrap();
        let removed = graph.remove_edge(&"D", &"A").unwrap();

        assert_eq!(removed, Edge::new(ids[0], "I-5", 4));
        assert_eq!(edge_lists(&graph, &ids), before);
        assert_eq!(destinations(&graph, "D"), vec!["C"]);
        assert_eq!(graph.check_invariants(), Ok(()));
    }

    #[test]
    fn remove_edge_failures_leave_graph_unchanged() {
        let mut graph = triangle();
        graph.insert_vertex("D");

        assert_eq!(
            graph.remove_edge(&"A", &"D").unwrap_err(),
            GraphError::EdgeNotFound { from: "A", to: "D" }
        );
        assert_eq!(
            graph.remove_edge(&"A", &"Q").unwrap_err(),
            GraphError::VertexNotFound { label: "Q" }
        );
        assert_eq!(graph.number_of_edges(), 3);

        let mut empty = RoadGraph::new();
        assert!(empty.remove_edge(&"A", &"B").unwrap_err().is_not_found());
    }

    #[test]
    fn remove_vertex_drops_incident_edges_on_both_sides() {
        let mut graph = triangle();
        let removed = graph.vertex_id(&"B").unwrap();

        graph.remove_vertex(&"B").unwrap();

        assert_eq!(graph.count(), 2);
        assert!(graph.vertex(removed).is_none());
        assert!(graph.edges(removed).is_empty());
        assert_eq!(destinations(&graph, "A"), vec!["C"]);
        assert_eq!(destinations(&graph, "C"), vec!["A"]);
        assert_eq!(graph.check_invariants(), Ok(()));
    }

    #[test]
    fn remove_vertex_on_empty_graph_is_not_found() {
        let mut graph = RoadGraph::new();
        assert_eq!(
            graph.remove_vertex(&"A"),
            Err(GraphError::VertexNotFound { label: "A" })
        );
    }

    #[test]
    fn freed_slots_are_reused_and_stale_handles_refused() {
        let mut graph = triangle();
        let a = graph.vertex_id(&"A").unwrap();
        graph.remove_vertex(&"A").unwrap();
        let d = graph.insert_vertex("D");

        assert_eq!(d.index(), a.index());
        assert_ne!(d.generation(), a.generation());
        assert!(graph.vertex(a).is_none());
        assert_eq!(graph.label(d), Some(&"D"));

        let labels: Vec<_> = graph.vertices().map(|(_, vertex)| *vertex.label()).collect();
        assert_eq!(labels, vec!["B", "C", "D"]);
        assert_eq!(graph.check_invariants(), Ok(()));
    }

    #[test]
    fn churn_does_not_grow_the_arena() {
        let mut graph = triangle();
        for round in 0..100 {
            let label = if round % 2 == 0 { "D" } else { "E" };
            graph.insert_vertex(label);
            graph.add_edge(&label, &"A", "US-30", round).unwrap();
            graph.remove_vertex(&label).unwrap();
        }

        assert_eq!(graph.slots.len(), 4);
        assert_eq!(graph.count(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.check_invariants(), Ok(()));
    }

    #[test]
    fn reset_processed_clears_flags() {
        let mut graph = triangle();
        for id in graph.vertex_ids() {
            graph.set_processed(id, true);
        }
        assert!(!graph.has_unprocessed());

        graph.reset_processed().unwrap();

        assert!(graph.vertices().all(|(_, vertex)| !vertex.is_processed()));
        assert_eq!(RoadGraph::new().reset_processed(), Err(GraphError::EmptyGraph));
    }

    #[test]
    fn clone_is_independent() {
        let graph = triangle();
        let mut copy = graph.clone();
        copy.remove_vertex(&"C").unwrap();

        assert_eq!(graph.count(), 3);
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(copy.count(), 2);
        assert_eq!(copy.number_of_edges(), 1);
    }

    #[test]
    fn summary_lists_vertices_in_order() {
        let graph = triangle();
        let lines: Vec<String> = graph
            .summary()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(
            lines,
            vec![
                "vertex #1 A: 2 edges, processed: false",
                "vertex #2 B: 2 edges, processed: false",
                "vertex #3 C: 2 edges, processed: false",
            ]
        );
        assert!(RoadGraph::new().summary().is_err());
    }
}
