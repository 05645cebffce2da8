use crate::config::ColumnSelection;
use crate::pipeline::error::PipelineError;
use crate::types::bucket::{Bucket, CoercedSeries};
use log::{debug, warn};
use polars::frame::DataFrame;
use polars::prelude::StringChunked;

/// Radial text that removes a row from its bucket before any parsing.
pub const EXCLUDED_RADIAL_TEXT: &str = "0.00";

/// Converts the radial and direction text of a bucket into aligned float sequences.
///
/// # Errors
///
/// Returns [`PipelineError::ColumnRead`] if either column is missing from the bucket
/// frame or is not a text column.
pub fn coerce_bucket(
    bucket: &Bucket,
    columns: &ColumnSelection,
) -> Result<CoercedSeries, PipelineError> {
    let radial = text_column(&bucket.frame, &columns.radial)?;
    let direction = text_column(&bucket.frame, &columns.direction)?;
    let series = coerce_values(&bucket.title, radial, direction);
    debug!(
        "Bucket '{}': {} values kept, {} substituted, {} excluded",
        series.title,
        series.len(),
        series.substituted,
        series.excluded
    );
    Ok(series)
}

/// Walks radial and direction values pairwise and parses them.
///
/// * A row whose radial text is exactly `"0.00"` is skipped entirely.
/// * A row where either value is missing or not a finite number is logged and
///   stored as `(0.0, 0.0)`.
/// * Once all rows are read, every zero magnitude forces its direction to zero.
///
/// The row numbers in diagnostics count from zero within the bucket, skipped rows
/// included.
pub fn coerce_values<'a, R, D>(title: &str, radial: R, direction: D) -> CoercedSeries
where
    R: IntoIterator<Item = Option<&'a str>>,
    D: IntoIterator<Item = Option<&'a str>>,
{
    let mut series = CoercedSeries::new(title);
    for (row, (speed, heading)) in radial.into_iter().zip(direction).enumerate() {
        if speed == Some(EXCLUDED_RADIAL_TEXT) {
            series.excluded += 1;
            continue;
        }
        match (parse_value(speed), parse_value(heading)) {
            (Some(magnitude), Some(degrees)) => series.push(degrees, magnitude),
            _ => {
                warn!(
                    "At line {} in {}, there are possible non number values: radial = {:?} and direction = {:?}",
                    row,
                    title,
                    speed.unwrap_or_default(),
                    heading.unwrap_or_default()
                );
                series.substituted += 1;
                series.push(0.0, 0.0);
            }
        }
    }
    series.normalize_calm();
    series
}

fn parse_value(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|text| text.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

fn text_column<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a StringChunked, PipelineError> {
    frame
        .column(name)
        .and_then(|c| c.str())
        .map_err(|source| PipelineError::ColumnRead {
            column: name.to_string(),
            source,
        })
}
