//! Splits the input table into the ordered buckets of an [`IntervalScheme`].

use crate::pipeline::error::PipelineError;
use crate::pipeline::filtering::{MonthFilterExt, MONTH_COLUMN};
use crate::types::bucket::Bucket;
use crate::types::interval_scheme::{IntervalScheme, UNSECTIONED_TITLE};
use crate::types::timestamp::AnyTimestamp;
use log::{debug, warn};
use polars::frame::DataFrame;
use polars::prelude::*;

/// Buckets produced for one run, in plotting order.
#[derive(Debug, Clone)]
pub struct Partition {
    pub buckets: Vec<Bucket>,
    /// Rows left out of every bucket because their timestamp could not be parsed.
    pub dropped_timestamps: usize,
}

/// Splits `frame` into the buckets of `scheme`.
///
/// * [`IntervalScheme::Months`] yields 12 buckets; row goes to bucket `month - 1`.
/// * [`IntervalScheme::Seasons`] yields 4 buckets; row goes to bucket `(month - 1) / 3`.
/// * [`IntervalScheme::Unsectioned`] yields one bucket with every row, and `timestamp`
///   is ignored.
///
/// Rows keep their source order inside each bucket. For the time-based schemes, rows
/// whose timestamp is empty or unparseable fall into no bucket; their number is logged
/// and returned in [`Partition::dropped_timestamps`].
///
/// # Errors
///
/// Returns [`PipelineError::TimestampRequired`] when a time-based scheme is used without
/// a timestamp column, and [`PipelineError::ColumnRead`] when that column is missing or
/// is not text.
pub fn partition(
    frame: &DataFrame,
    scheme: IntervalScheme,
    timestamp: Option<&str>,
) -> Result<Partition, PipelineError> {
    if !scheme.requires_timestamp() {
        debug!("Unsectioned bucket holds all {} rows", frame.height());
        return Ok(Partition {
            buckets: vec![Bucket::new(UNSECTIONED_TITLE, frame.clone())],
            dropped_timestamps: 0,
        });
    }

    let column = timestamp.ok_or(PipelineError::TimestampRequired(scheme))?;
    let months = month_series(frame, column)?;
    let dropped_timestamps = months.null_count();
    if dropped_timestamps > 0 {
        warn!(
            "{} of {} rows have no parseable '{}' value and are left out of every {} bucket",
            dropped_timestamps,
            frame.height(),
            column,
            scheme
        );
    }

    let mut tagged = frame.clone();
    tagged.with_column(months)?;
    let tagged = tagged.lazy();

    let buckets = scheme
        .month_buckets()
        .into_iter()
        .map(|(title, first, last)| {
            let filtered = if first == last {
                tagged.clone().filter_month(first)
            } else {
                tagged.clone().filter_months(first, last)
            };
            let bucket_frame = filtered
                .collect()
                .and_then(|df| df.drop(MONTH_COLUMN))
                .map_err(|source| PipelineError::Partition {
                    title: title.to_string(),
                    source,
                })?;
            debug!("Bucket '{}' holds {} rows", title, bucket_frame.height());
            Ok(Bucket::new(title, bucket_frame))
        })
        .collect::<Result<Vec<_>, PipelineError>>()?;

    Ok(Partition {
        buckets,
        dropped_timestamps,
    })
}

/// Calendar month of every row as a nullable `u32` series.
fn month_series(frame: &DataFrame, column: &str) -> Result<Series, PipelineError> {
    let stamps = frame
        .column(column)
        .and_then(|c| c.str())
        .map_err(|source| PipelineError::ColumnRead {
            column: column.to_string(),
            source,
        })?;
    let months: Vec<Option<u32>> = stamps
        .into_iter()
        .map(|stamp| stamp.calendar_month())
        .collect();
    Ok(Series::new(MONTH_COLUMN.into(), months))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station_frame() -> PolarsResult<DataFrame> {
        df!(
            "date_time" => [
                "2000-01-04 12:00",
                "2000-02-10 13:00",
                "2000-03-01 00:00",
                "not a date",
                "2001-01-20 08:00",
                "2001-07-15 09:00",
                "2001-12-31 23:00",
            ],
            "speed" => ["2", "4", "3", "5", "6", "7", "8"],
        )
    }

    fn speeds(bucket: &Bucket) -> Vec<String> {
        bucket
            .frame
            .column("speed")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .map(|s| s.unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn monthly_buckets_follow_calendar_months() -> Result<(), Box<dyn std::error::Error>> {
        let partition = partition(&station_frame()?, IntervalScheme::Months, Some("date_time"))?;
        assert_eq!(partition.buckets.len(), 12);
        assert_eq!(partition.buckets[0].title, "January");
        assert_eq!(speeds(&partition.buckets[0]), vec!["2", "6"]);
        assert_eq!(speeds(&partition.buckets[6]), vec!["7"]);
        assert_eq!(partition.buckets[3].rows(), 0);
        assert_eq!(partition.dropped_timestamps, 1);
        Ok(())
    }

    #[test]
    fn seasonal_buckets_keep_source_order() -> Result<(), Box<dyn std::error::Error>> {
        let partition = partition(&station_frame()?, IntervalScheme::Seasons, Some("date_time"))?;
        let titles: Vec<&str> = partition.buckets.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Winter: Jan-Mar", "Spring: Apr-Jun", "Summer: Jul-Sep", "Autumn: Oct-Dec"]
        );
        assert_eq!(speeds(&partition.buckets[0]), vec!["2", "4", "3", "6"]);
        assert_eq!(speeds(&partition.buckets[2]), vec!["7"]);
        assert_eq!(speeds(&partition.buckets[3]), vec!["8"]);
        Ok(())
    }

    #[test]
    fn helper_column_does_not_leak_into_buckets() -> Result<(), Box<dyn std::error::Error>> {
        let partition = partition(&station_frame()?, IntervalScheme::Seasons, Some("date_time"))?;
        for bucket in &partition.buckets {
            assert_eq!(bucket.frame.width(), 2);
        }
        Ok(())
    }

    #[test]
    fn unsectioned_keeps_every_row() -> Result<(), Box<dyn std::error::Error>> {
        let frame = station_frame()?;
        let partition = partition(&frame, IntervalScheme::Unsectioned, None)?;
        assert_eq!(partition.buckets.len(), 1);
        assert_eq!(partition.buckets[0].title, "Data");
        assert_eq!(partition.buckets[0].rows(), frame.height());
        assert_eq!(partition.dropped_timestamps, 0);
        Ok(())
    }

    #[test]
    fn offset_timestamps_bucket_by_local_month() -> Result<(), Box<dyn std::error::Error>> {
        let frame = df!(
            "date_time" => ["2021-05-01T00:30:00+02:00"],
            "speed" => ["9"],
        )?;
        let partition = partition(&frame, IntervalScheme::Months, Some("date_time"))?;
        let filled: Vec<&str> = partition
            .buckets
            .iter()
            .filter(|b| b.rows() > 0)
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(filled, vec!["May"]);
        Ok(())
    }

    #[test]
    fn time_based_scheme_needs_timestamp() -> PolarsResult<()> {
        let err = partition(&station_frame()?, IntervalScheme::Months, None).unwrap_err();
        assert!(matches!(err, PipelineError::TimestampRequired(IntervalScheme::Months)));

        let err = partition(&station_frame()?, IntervalScheme::Months, Some("time")).unwrap_err();
        assert!(matches!(err, PipelineError::ColumnRead { ref column, .. } if column == "time"));
        Ok(())
    }
}
