#![forbid(unsafe_code)]

//! Strongly connected components of compact directed graphs.
//!
//! The solver is Kosaraju's two-pass algorithm: a depth-first pass over the graph records
//! vertices by finishing time, then a second pass over the transpose, taking roots in
//! decreasing finishing time, collects one component per root. Both passes use explicit
//! stacks, so long chains do not grow the call stack.

pub use condense_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod components;
pub mod error;
pub mod kosaraju;

pub use components::Components;
pub use error::{Error, Result};
pub use kosaraju::Kosaraju;

use crate::graph::CompactDirectedGraph;

/// Component id (1-based) of every vertex of `graph`.
pub fn strongly_connected_components(graph: &CompactDirectedGraph) -> Components {
    Kosaraju::new(graph).solve()
}

/// Validates an edge list, builds the graph and solves it.
pub fn components_from_edges<I>(vertex_count: usize, edges: I) -> Result<Components>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let graph = CompactDirectedGraph::from_edges(vertex_count, edges)?;
    Ok(strongly_connected_components(&graph))
}
