use std::hash::Hash;

use indexmap::IndexMap;

pub mod builder;
pub mod ops;
pub mod viz;

/// Directed dependency graph over an opaque node identity. An edge
/// `source -> destination` reads "source depends on destination".
///
/// Every node referenced anywhere, as a source or as a destination, is a
/// key of the map, even when its edge list is empty. Iteration follows
/// insertion order, which makes the tie-breaking in
/// [`ops::topological_order`] deterministic.
#[derive(Debug, Clone)]
pub struct DepGraph<N> {
    edges: IndexMap<N, Vec<N>>,
}

impl<N> Default for DepGraph<N> {
    fn default() -> Self {
        Self {
            edges: IndexMap::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> DepGraph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `source` depends on each of `destinations`. The source
    /// and every destination become nodes of the graph if they were not
    /// already; repeated edges are dropped.
    pub fn add_all(&mut self, source: N, destinations: impl IntoIterator<Item = N>) {
        self.edges.entry(source.clone()).or_default();
        for dest in destinations {
            self.edges.entry(dest.clone()).or_default();
            let out = self.edges.entry(source.clone()).or_default();
            if !out.contains(&dest) {
                out.push(dest);
            }
        }
    }

    pub fn contains(&self, node: &N) -> bool {
        self.edges.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.edges.keys()
    }

    /// Outgoing edges of `node`, empty for unknown nodes.
    pub fn edges_from(&self, node: &N) -> &[N] {
        self.edges.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, &[N])> {
        self.edges.iter().map(|(node, deps)| (node, deps.as_slice()))
    }
}
