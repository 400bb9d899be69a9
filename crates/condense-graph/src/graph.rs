//! The compact directed graph container.
//!
//! Edges can be inserted directly with [`CompactDirectedGraph::add_edge`], which keeps the
//! flattened arrays up to date on every call (shifting the tail of `neighbors` and every later
//! offset). For bulk construction prefer [`GraphBuilder`], which stages per-vertex lists and
//! flattens once into the same shape.

mod builder;
mod dump;
mod iter;

pub use builder::GraphBuilder;
pub use dump::RawDump;
pub use iter::{Edges, Neighbors};

use crate::error::{Error, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactDirectedGraph {
    offsets: Vec<usize>,
    neighbors: Vec<usize>,
}

impl Default for CompactDirectedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl CompactDirectedGraph {
    pub fn new() -> Self {
        Self {
            offsets: vec![0],
            neighbors: Vec::new(),
        }
    }

    /// A graph with `vertex_count` vertices and no edges.
    ///
    /// # Panics
    ///
    /// Panics if the offset array for `vertex_count` vertices cannot be allocated. Use
    /// [`try_with_vertices`](Self::try_with_vertices) for untrusted counts.
    pub fn with_vertices(vertex_count: usize) -> Self {
        match Self::try_with_vertices(vertex_count) {
            Ok(graph) => graph,
            Err(err) => panic!("{err}"),
        }
    }

    /// Like [`with_vertices`](Self::with_vertices), but reports an unallocatable vertex count as
    /// [`Error::CapacityOverflow`].
    pub fn try_with_vertices(vertex_count: usize) -> Result<Self> {
        let overflow = Error::CapacityOverflow { vertex_count };
        let len = vertex_count
            .checked_add(1)
            .ok_or_else(|| overflow.clone())?;
        let mut offsets: Vec<usize> = Vec::new();
        offsets.try_reserve_exact(len).map_err(|_| overflow)?;
        offsets.resize(len, 0);
        Ok(Self {
            offsets,
            neighbors: Vec::new(),
        })
    }

    /// Builds a graph from an edge list in one pass.
    ///
    /// The result is identical to calling [`add_vertex`](Self::add_vertex) `vertex_count` times
    /// followed by [`add_edge`](Self::add_edge) for every pair in order. A vertex count that
    /// cannot be allocated is reported as [`Error::CapacityOverflow`].
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut builder = GraphBuilder::try_with_vertices(vertex_count)?;
        for (from, to) in edges {
            builder.add_edge(from, to)?;
        }
        Ok(builder.build())
    }

    pub(crate) fn from_parts(offsets: Vec<usize>, neighbors: Vec<usize>) -> Self {
        debug_assert_eq!(offsets.first().copied(), Some(0));
        debug_assert_eq!(offsets.last().copied(), Some(neighbors.len()));
        debug_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        Self { offsets, neighbors }
    }

    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// The offset array (`vertex_count() + 1` entries, first is `0`, last is `edge_count()`).
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// The flattened neighbor array.
    pub fn neighbor_array(&self) -> &[usize] {
        &self.neighbors
    }

    /// Appends a vertex with no outgoing edges and returns its index.
    pub fn add_vertex(&mut self) -> usize {
        let v = self.vertex_count();
        self.offsets.push(self.neighbors.len());
        v
    }

    /// Inserts the edge `from -> to` at the front of `from`'s neighbor slice.
    ///
    /// Both endpoints must already exist. On error the graph is left untouched.
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;

        self.neighbors.insert(self.offsets[from], to);
        for offset in &mut self.offsets[from + 1..] {
            *offset += 1;
        }
        Ok(())
    }

    fn check_vertex(&self, v: usize) -> Result<()> {
        let vertex_count = self.vertex_count();
        if v < vertex_count {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex: v,
                vertex_count,
            })
        }
    }

    fn slice_of(&self, v: usize) -> &[usize] {
        if v >= self.vertex_count() {
            return &[];
        }
        &self.neighbors[self.offsets[v]..self.offsets[v + 1]]
    }

    /// Out-neighbors of `v`. Empty when `v` is not a vertex of this graph.
    pub fn neighbors_of(&self, v: usize) -> Neighbors<'_> {
        Neighbors::new(self.slice_of(v))
    }

    pub fn out_degree(&self, v: usize) -> usize {
        self.slice_of(v).len()
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.slice_of(from).contains(&to)
    }

    /// All edges as `(from, to)` pairs, grouped by source vertex.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(self)
    }

    /// Returns a new graph with every edge reversed.
    ///
    /// Each reversed list is filled back to front while sources are visited in ascending order,
    /// which is exactly the shape produced by front-inserting the reversed edges one at a time.
    pub fn transpose(&self) -> Self {
        let n = self.vertex_count();

        let mut offsets = vec![0usize; n + 1];
        for &to in &self.neighbors {
            offsets[to + 1] += 1;
        }
        for v in 0..n {
            offsets[v + 1] += offsets[v];
        }

        let mut cursor: Vec<usize> = offsets[1..].to_vec();
        let mut neighbors = vec![0usize; self.neighbors.len()];
        for (from, to) in self.edges() {
            cursor[to] -= 1;
            neighbors[cursor[to]] = from;
        }

        tracing::trace!(vertices = n, edges = neighbors.len(), "built transpose graph");
        Self::from_parts(offsets, neighbors)
    }

    /// Displayable view of the raw `offsets` / `neighbors` arrays.
    pub fn raw_dump(&self) -> RawDump<'_> {
        RawDump::new(self)
    }
}
