#![forbid(unsafe_code)]

//! Compact directed graph storage used by `condense`.
//!
//! A graph with `N` vertices is stored as two parallel arrays: `offsets` (length `N + 1`) and a
//! flattened `neighbors` array. The out-neighbors of vertex `v` are
//! `neighbors[offsets[v]..offsets[v + 1]]`. Vertices are dense zero-based indices and the vertex
//! set only grows.

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{CompactDirectedGraph, Edges, GraphBuilder, Neighbors, RawDump};
