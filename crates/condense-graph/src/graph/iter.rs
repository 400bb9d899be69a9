use super::CompactDirectedGraph;
use std::iter::FusedIterator;

/// Out-neighbors of one vertex, read straight from the offset pair.
///
/// Call [`CompactDirectedGraph::neighbors_of`] again for a fresh pass.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: std::slice::Iter<'a, usize>,
}

impl<'a> Neighbors<'a> {
    pub(super) fn new(slice: &'a [usize]) -> Self {
        Self {
            inner: slice.iter(),
        }
    }
}

impl Iterator for Neighbors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Neighbors<'_> {
    fn next_back(&mut self) -> Option<usize> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

impl FusedIterator for Neighbors<'_> {}

/// Every edge of a graph as `(from, to)`, sources ascending.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    graph: &'a CompactDirectedGraph,
    from: usize,
    pos: usize,
}

impl<'a> Edges<'a> {
    pub(super) fn new(graph: &'a CompactDirectedGraph) -> Self {
        Self {
            graph,
            from: 0,
            pos: 0,
        }
    }
}

impl Iterator for Edges<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        let offsets = self.graph.offsets();
        let neighbors = self.graph.neighbor_array();
        if self.pos >= neighbors.len() {
            return None;
        }
        // Skip vertices whose slice is already exhausted (or empty).
        while offsets[self.from + 1] <= self.pos {
            self.from += 1;
        }
        let to = neighbors[self.pos];
        self.pos += 1;
        Some((self.from, to))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.graph.edge_count() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Edges<'_> {}

impl FusedIterator for Edges<'_> {}
