pub mod edge;
pub mod graph_factory;
pub mod traversal;
pub mod undirected_graph;
pub mod vertex;

pub type Weight = u32;
/// Sum of weights along a path. Wider than [`Weight`] so that no sum of
/// edge weights can overflow.
pub type Distance = u64;

/// Handle of a vertex inside the vertex storage of an
/// [`undirected_graph::UndirectedGraph`].
///
/// Slots of removed vertices are reused, but every reuse bumps the slot's
/// generation. A handle of a removed vertex therefore never resolves to the
/// vertex that took over its slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl VertexId {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}
