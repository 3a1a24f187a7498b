use crate::graph::DepGraph;
use crate::manifest::Manifest;

/// Folds parsed manifests into a dependency graph keyed by package name.
/// Every dependency name becomes a node even when no manifest was seen for
/// it, so packages outside the repository show up as edgeless leaves.
pub fn build_graph(manifests: &[Manifest]) -> DepGraph<String> {
    let mut graph = DepGraph::new();
    for manifest in manifests {
        graph.add_all(
            manifest.name.clone(),
            manifest.dependency_names().map(str::to_string),
        );
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::build_graph;
    use crate::manifest::parse_manifest;

    #[test]
    fn build_graph_links_packages_by_declared_dependencies() {
        let manifests = vec![
            parse_manifest(r#"{"name": "app", "dependencies": {"lib": "^1.0.0"}}"#)
                .expect("parse app"),
            parse_manifest(r#"{"name": "lib", "dependencies": {}}"#).expect("parse lib"),
        ];

        let graph = build_graph(&manifests);
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edges_from(&"app".to_string()), &["lib".to_string()]);
    }

    #[test]
    fn build_graph_keeps_unknown_dependencies_as_leaves() {
        let manifests = vec![parse_manifest(
            r#"{"name": "app", "dependencies": {"left-pad": "~1.3.0"}}"#,
        )
        .expect("parse app")];

        let graph = build_graph(&manifests);
        assert!(graph.contains(&"left-pad".to_string()));
        assert!(graph.edges_from(&"left-pad".to_string()).is_empty());
    }

    #[test]
    fn build_graph_merges_dependency_categories() {
        let manifests = vec![parse_manifest(
            r#"{
                "name": "app",
                "dependencies": {"lib": "1.0.0"},
                "devDependencies": {"test-kit": "2.0.0", "lib": "1.0.0"}
            }"#,
        )
        .expect("parse app")];

        let graph = build_graph(&manifests);
        assert_eq!(
            graph.edges_from(&"app".to_string()),
            &["lib".to_string(), "test-kit".to_string()]
        );
    }
}
