//! Staged construction for [`CompactDirectedGraph`](super::CompactDirectedGraph).

use super::CompactDirectedGraph;
use crate::error::{Error, Result};

/// Collects edges into per-vertex lists and flattens them once.
///
/// [`build`](Self::build) produces the same arrays as the equivalent sequence of
/// `add_vertex` / `add_edge` calls on a [`CompactDirectedGraph`], i.e. each vertex lists its
/// neighbors in reverse insertion order.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Panics
    ///
    /// Panics if `vertex_count` per-vertex lists cannot be allocated. Use
    /// [`try_with_vertices`](Self::try_with_vertices) for untrusted counts.
    pub fn with_vertices(vertex_count: usize) -> Self {
        match Self::try_with_vertices(vertex_count) {
            Ok(builder) => builder,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_with_vertices(vertex_count: usize) -> Result<Self> {
        // The flattened offsets need one slot more than the vertex count.
        if vertex_count == usize::MAX {
            return Err(Error::CapacityOverflow { vertex_count });
        }
        let mut adjacency: Vec<Vec<usize>> = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| Error::CapacityOverflow { vertex_count })?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self {
            adjacency,
            edge_count: 0,
        })
    }

    /// Reserves room for `vertices` vertices without adding any.
    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(vertices),
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.adjacency.len() - 1
    }

    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<&mut Self> {
        let vertex_count = self.adjacency.len();
        for vertex in [from, to] {
            if vertex >= vertex_count {
                return Err(Error::InvalidVertex {
                    vertex,
                    vertex_count,
                });
            }
        }
        self.adjacency[from].push(to);
        self.edge_count += 1;
        Ok(self)
    }

    pub fn build(self) -> CompactDirectedGraph {
        let mut offsets: Vec<usize> = Vec::with_capacity(self.adjacency.len() + 1);
        let mut neighbors: Vec<usize> = Vec::with_capacity(self.edge_count);
        offsets.push(0);
        for list in &self.adjacency {
            neighbors.extend(list.iter().rev().copied());
            offsets.push(neighbors.len());
        }

        tracing::trace!(
            vertices = self.adjacency.len(),
            edges = neighbors.len(),
            "flattened graph builder"
        );
        CompactDirectedGraph::from_parts(offsets, neighbors)
    }
}
