use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("Error in trying to read the file '{0}'")]
    FileOpen(PathBuf, #[source] std::io::Error),

    #[error("Parsing error processing CSV data in '{0}'")]
    CsvRead(PathBuf, #[source] PolarsError),

    #[error("Invalid sampling interval '{0}'. Try something like months, seasons, or unsectioned instead")]
    InvalidScheme(String),

    #[error("Provide both a radial and a directional variable to plot. To do this, enter the names of those variables from the raw data file column names")]
    PlotColumnsNotProvided,

    #[error("Invalid radial and direction variable inputs '{radial}' and '{direction}'. Please choose the correct headers from the file")]
    PlotColumnsNotFound {
        radial: String,
        direction: String,
        available: Vec<String>,
    },

    #[error("Invalid radial variable input '{column}'. Please choose the header from the file corresponding to the radial variable")]
    RadialColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error("Invalid directional variable input '{column}'. Please choose the header from the file corresponding to the direction variable")]
    DirectionColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    #[error("Provide a date time variable. To do this, enter the name of the column in the raw data file that contains the time stamp of the data collected")]
    TimestampNotProvided { available: Vec<String> },

    #[error("Provide the date time variable column name found in the raw data file ('{column}' is not one of them)")]
    TimestampColumnNotFound {
        column: String,
        available: Vec<String>,
    },
}

impl TableError {
    /// Header names of the input file, for errors caused by a wrong column choice.
    pub fn available_columns(&self) -> Option<&[String]> {
        match self {
            TableError::PlotColumnsNotFound { available, .. }
            | TableError::RadialColumnNotFound { available, .. }
            | TableError::DirectionColumnNotFound { available, .. }
            | TableError::TimestampNotProvided { available }
            | TableError::TimestampColumnNotFound { available, .. } => Some(available),
            _ => None,
        }
    }
}
