use std::collections::{HashSet, VecDeque};
use std::fmt::Display;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::{Result, StrataError};
use crate::graph::DepGraph;

/// Advisory cycle query. Runs a breadth-first traversal from each
/// not-yet-explored root and reports a cycle when a node is reached twice
/// within the same traversal. Roots whose traversal completes cleanly are
/// skipped later.
pub fn is_cyclic<N: Clone + Eq + Hash>(graph: &DepGraph<N>) -> bool {
    let mut seen: HashSet<&N> = HashSet::new();
    for root in graph.nodes() {
        if seen.contains(root) {
            continue;
        }
        let mut visited: HashSet<&N> = HashSet::new();
        visited.insert(root);
        let mut queue = VecDeque::from([root]);
        while let Some(node) = queue.pop_front() {
            for dep in graph.edges_from(node) {
                if !visited.insert(dep) {
                    return true;
                }
                queue.push_back(dep);
            }
        }
        seen.extend(visited);
    }
    false
}

/// Kahn's algorithm over the whole graph. Zero in-degree nodes (nothing
/// depends on them) are emitted first; ties go to the most recently readied
/// node, so the work-list is a stack.
pub fn topological_order<N: Clone + Eq + Hash>(graph: &DepGraph<N>) -> Result<Vec<N>> {
    let mut indegree: IndexMap<&N, usize> = graph.nodes().map(|node| (node, 0)).collect();
    for (_, deps) in graph.iter() {
        for dep in deps {
            if let Some(count) = indegree.get_mut(dep) {
                *count += 1;
            }
        }
    }

    let mut sources: Vec<&N> = indegree
        .iter()
        .filter_map(|(node, &count)| if count == 0 { Some(*node) } else { None })
        .collect();
    if sources.is_empty() && !graph.is_empty() {
        return Err(StrataError::NoTopologicalStart);
    }

    let mut order = Vec::with_capacity(graph.len());
    while let Some(node) = sources.pop() {
        order.push(node.clone());
        for dep in graph.edges_from(node) {
            if let Some(count) = indegree.get_mut(dep) {
                if *count > 0 {
                    *count -= 1;
                    if *count == 0 {
                        sources.push(dep);
                    }
                }
            }
        }
    }

    if order.len() != graph.len() {
        return Err(StrataError::CycleDetected);
    }

    Ok(order)
}

/// Returns a new graph with every edge reversed. All nodes of the original
/// are preserved, including edgeless ones.
pub fn invert<N: Clone + Eq + Hash>(graph: &DepGraph<N>) -> DepGraph<N> {
    let mut inverted = DepGraph::new();
    for (node, deps) in graph.iter() {
        inverted.add_all(node.clone(), []);
        for dep in deps {
            inverted.add_all(dep.clone(), [node.clone()]);
        }
    }
    inverted
}

/// Breadth-first reachability from `start` along outgoing edges. The result
/// includes `start` itself; it is a membership answer with no ordering.
pub fn walk<N: Clone + Eq + Hash + Display>(graph: &DepGraph<N>, start: &N) -> Result<HashSet<N>> {
    if !graph.contains(start) {
        return Err(StrataError::MissingNode(start.to_string()));
    }

    let mut seen: HashSet<N> = HashSet::from([start.clone()]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        for dep in graph.edges_from(node) {
            if seen.insert(dep.clone()) {
                queue.push_back(dep);
            }
        }
    }
    Ok(seen)
}

/// Induced subgraph on `keep`: nodes outside the set are dropped entirely,
/// including as edge targets of kept nodes.
pub fn subgraph<N: Clone + Eq + Hash>(graph: &DepGraph<N>, keep: &HashSet<N>) -> DepGraph<N> {
    let mut out = DepGraph::new();
    for (node, deps) in graph.iter() {
        if !keep.contains(node) {
            continue;
        }
        out.add_all(
            node.clone(),
            deps.iter().filter(|dep| keep.contains(*dep)).cloned(),
        );
    }
    out
}

/// The subgraph of everything that transitively depends on `entrypoint`,
/// entrypoint included: walk the inverted graph from the entrypoint, then
/// induce the reachable set on the original graph. The original graph is
/// left untouched.
pub fn dependent_subgraph<N: Clone + Eq + Hash + Display>(
    graph: &DepGraph<N>,
    entrypoint: &N,
) -> Result<DepGraph<N>> {
    let inverted = invert(graph);
    let reachable = walk(&inverted, entrypoint)?;
    Ok(subgraph(graph, &reachable))
}
