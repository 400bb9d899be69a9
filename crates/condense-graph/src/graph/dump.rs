//! Human-readable dumps. Diagnostic only.

use super::CompactDirectedGraph;
use std::fmt;

/// Renders one `v : n1 n2 ...` line per vertex.
impl fmt::Display for CompactDirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for v in 0..self.vertex_count() {
            write!(f, "{v} :")?;
            for w in self.neighbors_of(v) {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The raw `offsets` and `neighbors` arrays, one line each.
#[derive(Debug, Clone, Copy)]
pub struct RawDump<'a> {
    graph: &'a CompactDirectedGraph,
}

impl<'a> RawDump<'a> {
    pub(super) fn new(graph: &'a CompactDirectedGraph) -> Self {
        Self { graph }
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, label: &str, values: &[usize]) -> fmt::Result {
    write!(f, "{label}:")?;
    for v in values {
        write!(f, " {v}")?;
    }
    writeln!(f)
}

impl fmt::Display for RawDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_row(f, "offsets", self.graph.offsets())?;
        write_row(f, "neighbors", self.graph.neighbor_array())
    }
}
