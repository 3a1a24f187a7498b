use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::util::output;

/// The slice of a package.json this tool cares about. Exactly two
/// dependency categories count as edges; everything else in the file is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub name: String,
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: IndexMap<String, String>,
}

impl Manifest {
    /// Dependency names in declaration order, regular dependencies first.
    /// A name listed in both categories appears twice; the graph builder
    /// deduplicates edges.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .map(String::as_str)
    }
}

/// Parses one manifest. Returns `None` for malformed JSON or a missing or
/// non-string name field; such manifests are skipped without comment and
/// never reach the graph.
pub fn parse_manifest(content: &str) -> Option<Manifest> {
    serde_json::from_str(content).ok()
}

/// Reads and parses each path, warning about unreadable files and dropping
/// anything `parse_manifest` rejects.
pub fn load_manifests(paths: &[PathBuf]) -> Vec<Manifest> {
    let mut manifests = Vec::new();
    for path in paths {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                output::warn(&format!("skipping {}: {}", path.display(), err));
                continue;
            }
        };
        if let Some(manifest) = parse_manifest(&content) {
            manifests.push(manifest);
        }
    }
    manifests
}
