use crate::types::interval_scheme::IntervalScheme;
use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Cannot do multiplot as '{title}' would be empty. If you do not have data for all months/seasons, please use the unsectioned interval instead")]
    EmptyBucket { title: String },

    #[error("No buckets to plot")]
    NoBuckets,

    #[error("The {0} interval needs a date time column")]
    TimestampRequired(IntervalScheme),

    #[error("Column '{column}' could not be read as text")]
    ColumnRead {
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Failed to split rows into bucket '{title}'")]
    Partition {
        title: String,
        #[source]
        source: PolarsError,
    },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
