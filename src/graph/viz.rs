use std::fmt::Display;
use std::hash::Hash;

use crate::graph::DepGraph;

/// Renders the graph as a Graphviz digraph block. Each node is declared
/// once, immediately followed by its outgoing edges, in the graph's
/// iteration order.
pub fn render_dot<N: Clone + Eq + Hash + Display>(graph: &DepGraph<N>) -> String {
    let mut out = String::from("digraph strata {\n");
    for (node, deps) in graph.iter() {
        let id = escape_dot_id(&node.to_string());
        out.push_str(&format!("  \"{id}\";\n"));
        for dep in deps {
            out.push_str(&format!(
                "  \"{id}\" -> \"{}\";\n",
                escape_dot_id(&dep.to_string())
            ));
        }
    }
    out.push_str("}\n");
    out
}

fn escape_dot_id(id: &str) -> String {
    id.replace('"', "\\\"")
}
