//! The pipeline driver: load, validate, partition, coerce, scale and render.

use crate::config::WindroseConfig;
use crate::error::WindroseError;
use crate::pipeline::coerce::coerce_bucket;
use crate::pipeline::partition::partition;
use crate::pipeline::scale::shared_scale;
use crate::render::plot::WindroseFigure;
use crate::render::rose::SpeedBins;
use crate::table::loader::{column_names, read_table};
use crate::table::validate::validate_columns;
use crate::types::bucket::{CoercedSeries, ScaleLegend};
use crate::utils::output_path;
use log::info;
use polars::frame::DataFrame;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Per-bucket counts reported after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
    pub title: String,
    pub rows: usize,
    pub substituted: usize,
    pub excluded: usize,
}

impl From<&CoercedSeries> for BucketSummary {
    fn from(series: &CoercedSeries) -> Self {
        Self {
            title: series.title.clone(),
            rows: series.len(),
            substituted: series.substituted,
            excluded: series.excluded,
        }
    }
}

/// Plot-ready data for one figure.
#[derive(Debug, Clone)]
pub struct PreparedPlot {
    pub series: Vec<CoercedSeries>,
    pub scale: ScaleLegend,
    pub dropped_timestamps: usize,
}

/// Outcome of a successful [`Windrose::run`].
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub output: PathBuf,
    pub scale: ScaleLegend,
    pub buckets: Vec<BucketSummary>,
    pub dropped_timestamps: usize,
    pub elapsed: Duration,
}

/// Turns one station CSV into one wind rose image.
///
/// # Examples
///
/// ```no_run
/// use windrose::{ColumnSelection, IntervalScheme, Windrose, WindroseConfig};
///
/// # fn main() -> Result<(), windrose::WindroseError> {
/// let config = WindroseConfig::builder()
///     .input("alert_winds.csv")
///     .time_range("2000-2019")
///     .title("Seasonal Windroses from Alert, NU")
///     .legend_title("Wind Speed in knots")
///     .columns(
///         ColumnSelection::builder()
///             .radial("speed_knots")
///             .direction("direction")
///             .timestamp("date_time")
///             .build(),
///     )
///     .scheme(IntervalScheme::Seasons)
///     .build();
///
/// let summary = Windrose::new(config).run()?;
/// println!("Wrote {}", summary.output.display());
/// # Ok(())
/// # }
/// ```
pub struct Windrose {
    config: WindroseConfig,
}

impl Windrose {
    pub fn new(config: WindroseConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WindroseConfig {
        &self.config
    }

    /// Reads the input file named in the configuration.
    pub fn load(&self) -> Result<DataFrame, WindroseError> {
        Ok(read_table(&self.config.input)?)
    }

    /// Validates columns, splits rows into buckets, coerces values and computes the
    /// shared scale.
    ///
    /// # Errors
    ///
    /// Fails on missing columns, on a time-based scheme without a usable timestamp
    /// column, and when any bucket ends up without values.
    pub fn prepare(&self, frame: &DataFrame) -> Result<PreparedPlot, WindroseError> {
        let columns = &self.config.columns;
        validate_columns(&column_names(frame), columns, self.config.scheme)?;

        let partition = partition(frame, self.config.scheme, columns.timestamp.as_deref())?;
        let series = partition
            .buckets
            .iter()
            .map(|bucket| coerce_bucket(bucket, columns))
            .collect::<Result<Vec<_>, _>>()?;
        let scale = shared_scale(&series)?;
        info!(
            "Prepared {} {} bucket(s) with shared scale {}",
            series.len(),
            self.config.scheme,
            scale
        );

        Ok(PreparedPlot {
            series,
            scale,
            dropped_timestamps: partition.dropped_timestamps,
        })
    }

    /// Draws the prepared series and returns where the image was written.
    pub fn render(&self, prepared: &PreparedPlot) -> Result<PathBuf, WindroseError> {
        let output = output_path(&self.config.input, self.config.scheme);
        let figure = WindroseFigure::builder()
            .suptitle(self.config.suptitle())
            .time_range(self.config.time_range.clone())
            .legend_title(self.config.legend_title.clone())
            .sectors(self.config.bin_count)
            .bins(SpeedBins::new(prepared.scale, self.config.legend_intervals))
            .layout(self.config.scheme.layout())
            .build();
        figure.draw(&output, &prepared.series)?;
        Ok(output)
    }

    /// Runs the whole pipeline once.
    pub fn run(&self) -> Result<RunSummary, WindroseError> {
        let started = Instant::now();
        let frame = self.load()?;
        let prepared = self.prepare(&frame)?;
        let output = self.render(&prepared)?;
        let elapsed = started.elapsed();
        info!("Plotted {} in {:.3}s", output.display(), elapsed.as_secs_f64());

        Ok(RunSummary {
            output,
            scale: prepared.scale,
            buckets: prepared.series.iter().map(BucketSummary::from).collect(),
            dropped_timestamps: prepared.dropped_timestamps,
            elapsed,
        })
    }
}
