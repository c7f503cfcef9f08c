use std::{collections::VecDeque, fmt::Debug, hash::Hash};

use super::{undirected_graph::UndirectedGraph, VertexId};
use crate::error::GraphError;

/// Pending vertices of a traversal. The pop order decides between depth
/// first and breadth first.
trait Frontier {
    fn push(&mut self, vertex: VertexId);
    fn pop(&mut self) -> Option<VertexId>;
}

struct Stack(Vec<VertexId>);

impl Frontier for Stack {
    fn push(&mut self, vertex: VertexId) {
        self.0.push(vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.0.pop()
    }
}

struct Queue(VecDeque<VertexId>);

impl Frontier for Queue {
    fn push(&mut self, vertex: VertexId) {
        self.0.push_back(vertex);
    }

    fn pop(&mut self) -> Option<VertexId> {
        self.0.pop_front()
    }
}

impl<V, E> UndirectedGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: Clone,
{
    /// Visits every vertex exactly once, depth first. Each vertex in
    /// collection order starts a new search, so every component is covered.
    pub fn depth_first<F>(&mut self, visit: F) -> Result<(), GraphError<V>>
    where
        F: FnMut(&V),
    {
        self.traverse(Stack(Vec::new()), visit)
    }

    /// Visits every vertex exactly once, breadth first, covering every
    /// component.
    pub fn breadth_first<F>(&mut self, visit: F) -> Result<(), GraphError<V>>
    where
        F: FnMut(&V),
    {
        self.traverse(Queue(VecDeque::new()), visit)
    }

    fn traverse<T, F>(&mut self, mut frontier: T, mut visit: F) -> Result<(), GraphError<V>>
    where
        T: Frontier,
        F: FnMut(&V),
    {
        self.reset_processed()?;

        for start in self.vertex_ids() {
            frontier.push(start);

            while let Some(current) = frontier.pop() {
                let Some(vertex) = self.vertex(current) else {
                    continue;
                };
                if vertex.is_processed() {
                    continue;
                }

                visit(vertex.label());
                for edge in vertex.edges() {
                    if !self.is_processed(edge.destination()) {
                        frontier.push(edge.destination());
                    }
                }
                self.set_processed(current, true);
            }
        }

        self.reset_processed()
    }
}
