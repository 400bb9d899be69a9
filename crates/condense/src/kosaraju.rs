//! Kosaraju's strongly connected components.

use crate::components::Components;
use crate::error::{Error, Result};
use crate::graph::{CompactDirectedGraph, Neighbors};
use std::borrow::Cow;

/// One SCC query over a graph and its transpose.
///
/// Holds no traversal state: every [`solve`](Self::solve) call starts from scratch.
#[derive(Debug, Clone)]
pub struct Kosaraju<'a> {
    graph: &'a CompactDirectedGraph,
    transpose: Cow<'a, CompactDirectedGraph>,
}

impl<'a> Kosaraju<'a> {
    /// Computes the transpose of `graph` up front.
    pub fn new(graph: &'a CompactDirectedGraph) -> Self {
        Self {
            graph,
            transpose: Cow::Owned(graph.transpose()),
        }
    }

    /// Uses a transpose the caller already built.
    ///
    /// Only the vertex and edge counts are checked; the caller is responsible for `transpose`
    /// actually being the reverse of `graph`.
    pub fn with_transpose(
        graph: &'a CompactDirectedGraph,
        transpose: &'a CompactDirectedGraph,
    ) -> Result<Self> {
        if graph.vertex_count() != transpose.vertex_count() {
            return Err(Error::VertexCountMismatch {
                graph: graph.vertex_count(),
                transpose: transpose.vertex_count(),
            });
        }
        if graph.edge_count() != transpose.edge_count() {
            return Err(Error::EdgeCountMismatch {
                graph: graph.edge_count(),
                transpose: transpose.edge_count(),
            });
        }
        Ok(Self {
            graph,
            transpose: Cow::Borrowed(transpose),
        })
    }

    pub fn graph(&self) -> &CompactDirectedGraph {
        self.graph
    }

    pub fn transpose(&self) -> &CompactDirectedGraph {
        &self.transpose
    }

    pub fn solve(&self) -> Components {
        let n = self.graph.vertex_count();
        tracing::trace!(graph = %self.graph, "original graph");
        tracing::trace!(graph = %self.transpose, "transpose graph");

        let finish_order = finish_order(self.graph);

        let mut visited = vec![false; n];
        let mut mapping = vec![0usize; n];
        let mut count = 0usize;
        let mut component: Vec<usize> = Vec::new();
        let mut stack: Vec<Neighbors<'_>> = Vec::new();

        for &root in finish_order.iter().rev() {
            if visited[root] {
                continue;
            }
            count += 1;
            collect_component(
                &self.transpose,
                root,
                &mut visited,
                &mut stack,
                &mut component,
            );
            for &v in &component {
                mapping[v] = count;
            }
            component.clear();
        }

        tracing::debug!(
            vertices = n,
            edges = self.graph.edge_count(),
            components = count,
            "strongly connected components"
        );
        Components::new(mapping, count)
    }
}

/// Vertices of `graph` in increasing finishing time, roots tried in index order.
fn finish_order(graph: &CompactDirectedGraph) -> Vec<usize> {
    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut order: Vec<usize> = Vec::with_capacity(n);
    let mut stack: Vec<(usize, Neighbors<'_>)> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        stack.push((root, graph.neighbors_of(root)));

        while let Some((v, successors)) = stack.last_mut() {
            let v = *v;
            match successors.find(|&w| !visited[w]) {
                Some(w) => {
                    visited[w] = true;
                    stack.push((w, graph.neighbors_of(w)));
                }
                None => {
                    stack.pop();
                    order.push(v);
                }
            }
        }
    }

    debug_assert_eq!(order.len(), n);
    order
}

/// Depth-first walk of `transpose` from `root`, appending every newly reached vertex to
/// `component` in discovery order.
fn collect_component<'g>(
    transpose: &'g CompactDirectedGraph,
    root: usize,
    visited: &mut [bool],
    stack: &mut Vec<Neighbors<'g>>,
    component: &mut Vec<usize>,
) {
    visited[root] = true;
    component.push(root);
    stack.push(transpose.neighbors_of(root));

    while let Some(predecessors) = stack.last_mut() {
        match predecessors.find(|&u| !visited[u]) {
            Some(u) => {
                visited[u] = true;
                component.push(u);
                stack.push(transpose.neighbors_of(u));
            }
            None => {
                stack.pop();
            }
        }
    }
}
