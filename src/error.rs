use crate::pipeline::error::PipelineError;
use crate::render::error::RenderError;
use crate::table::error::TableError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WindroseError {
    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl WindroseError {
    /// Header names of the input file when the error came from a bad column choice.
    pub fn available_columns(&self) -> Option<&[String]> {
        match self {
            WindroseError::Table(err) => err.available_columns(),
            _ => None,
        }
    }
}
