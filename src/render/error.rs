use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to draw wind rose figure '{path}': {message}")]
    Draw { path: PathBuf, message: String },

    #[error("{buckets} wind roses do not fit a {rows}x{cols} grid")]
    Layout {
        buckets: usize,
        rows: usize,
        cols: usize,
    },
}
