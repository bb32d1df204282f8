use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid render settings: {0}")]
    InvalidSettings(String),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("could not create output directory {path:?}: {source}")]
    OutputDirectory { path: PathBuf, source: io::Error },
    #[error("output write failed for {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        source: image::ImageError,
    },
}
