use thiserror::Error;

#[derive(Debug, Error)]
pub enum StrataError {
    #[error("entrypoint not found: {0}")]
    EntrypointNotFound(String),
    #[error("no zero in-degree node, graph has no valid topological start")]
    NoTopologicalStart,
    #[error("cycle detected, no topological ordering exists")]
    CycleDetected,
    #[error("node not present in graph: {0}")]
    MissingNode(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, StrataError>;
