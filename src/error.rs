use std::path::PathBuf;

use thiserror::Error;

/// Result type for viewer operations
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Errors surfaced by the viewer.
///
/// Framing and material propagation never fail; these come from loading
/// models and from configuration checks.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("failed to load OBJ at {path}: {source}")]
    ObjLoad {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    #[error("model at {0} contains no geometry")]
    EmptyModel(PathBuf),

    #[error("invalid framing configuration: {0}")]
    InvalidFraming(String),
}
