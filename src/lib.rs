pub mod cli;
mod config;
mod error;
mod pipeline;
mod render;
mod table;
mod types;
mod utils;
mod windrose;

pub use config::{ColumnSelection, WindroseConfig, DEFAULT_BIN_COUNT, DEFAULT_LEGEND_INTERVALS};
pub use error::WindroseError;
pub use windrose::*;

pub use types::bucket::{Bucket, CoercedSeries, ScaleLegend};
pub use types::interval_scheme::{IntervalScheme, MONTH_TITLES, SEASON_TITLES, UNSECTIONED_TITLE};
pub use types::layout::FigureLayout;
pub use types::timestamp::AnyTimestamp;

pub use table::error::TableError;
pub use table::loader::{column_names, read_table};
pub use table::validate::validate_columns;

pub use pipeline::coerce::{coerce_bucket, coerce_values, EXCLUDED_RADIAL_TEXT};
pub use pipeline::error::PipelineError;
pub use pipeline::filtering::MonthFilterExt;
pub use pipeline::partition::{partition, Partition};
pub use pipeline::scale::shared_scale;

pub use render::error::RenderError;
pub use render::plot::{WindroseFigure, FIGURE_SIZE};
pub use render::rose::{sector_of, RoseTable, SpeedBins};

pub use utils::output_path;
