use serde::Serialize;

/// Component membership of every vertex.
///
/// Ids are `1..=count()`, numbered in the order the second pass meets each component's root.
/// They carry no topological meaning; compare partitions (e.g. via [`groups`](Self::groups))
/// rather than raw ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Components {
    mapping: Vec<usize>,
    count: usize,
}

impl Components {
    pub(crate) fn new(mapping: Vec<usize>, count: usize) -> Self {
        debug_assert!(mapping.iter().all(|&id| (1..=count).contains(&id)));
        Self { mapping, count }
    }

    /// `mapping()[v]` is the component id of vertex `v`.
    pub fn mapping(&self) -> &[usize] {
        &self.mapping
    }

    pub fn into_mapping(self) -> Vec<usize> {
        self.mapping
    }

    pub fn component_of(&self, v: usize) -> Option<usize> {
        self.mapping.get(v).copied()
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    /// Whether `u` and `v` are mutually reachable. `false` if either is out of range.
    pub fn same_component(&self, u: usize, v: usize) -> bool {
        match (self.component_of(u), self.component_of(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Vertices of each component, ascending; entry `i` holds component id `i + 1`.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups: Vec<Vec<usize>> = vec![Vec::new(); self.count];
        for (v, &id) in self.mapping.iter().enumerate() {
            groups[id - 1].push(v);
        }
        groups
    }
}
