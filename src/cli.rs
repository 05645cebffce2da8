//! Command-line arguments of the `windrose` binary.

use crate::config::{ColumnSelection, WindroseConfig, DEFAULT_BIN_COUNT, DEFAULT_LEGEND_INTERVALS};
use crate::table::error::TableError;
use crate::types::interval_scheme::IntervalScheme;
use clap::{Parser, ValueHint};
use log::warn;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Example: if your data looks like this,
station| date_time        | direction| speed_knots
-------|------------------|----------|------------
CYLT   | 2000-01-04 12:00 | 200      | 2
CYLT   | 2000-01-04 13:00 | 150      | 4
CYLT   | 2000-01-04 14:00 | 190      | 3

-r would be \"speed_knots\", -d would be \"direction\" and -t would be \"date_time\".
Seasons are divided into 3 months: January - March is Winter, April - June is Spring, and so on.";

#[derive(Parser, Debug)]
#[command(
    name = "windrose",
    version,
    about = "Plot monthly, seasonal or unsectioned wind roses from a station CSV file",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Raw data file, e.g. "alert_winds.txt"
    #[arg(short = 'f', long = "file", value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Time range label, e.g. "2000-2019"
    #[arg(short = 'y', long = "time-range")]
    pub time_range: String,

    /// Plot title, e.g. "Monthly Windroses Plots from Alert, NU"
    #[arg(short = 'p', long = "title")]
    pub title: String,

    /// Column holding the radial variable, e.g. "speed_knots"
    #[arg(short = 'r', long = "radial")]
    pub radial: String,

    /// Column holding the direction variable, e.g. "direction"
    #[arg(short = 'd', long = "direction")]
    pub direction: String,

    /// Column holding the date time variable, e.g. "date_time" (not needed for unsectioned)
    #[arg(short = 't', long = "timestamp")]
    pub timestamp: Option<String>,

    /// Legend title, e.g. "Wind Speed in knots"
    #[arg(short = 'l', long = "legend-title")]
    pub legend_title: String,

    /// Number of direction bins (positive integer, 24 if invalid)
    #[arg(short = 'b', long = "bins", allow_negative_numbers = true)]
    pub bins: Option<String>,

    /// Number of legend intervals (positive integer, 6 if invalid)
    #[arg(short = 'i', long = "legend-intervals", allow_negative_numbers = true)]
    pub legend_intervals: Option<String>,

    /// Data sampling interval: months, seasons or unsectioned
    #[arg(short = 's', long = "interval")]
    pub interval: String,
}

impl Args {
    /// Turns the raw arguments into a run configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidScheme`] for an unknown `-s` value.
    pub fn into_config(self) -> Result<WindroseConfig, TableError> {
        let scheme: IntervalScheme = self.interval.parse()?;
        let columns = ColumnSelection::builder()
            .radial(self.radial)
            .direction(self.direction)
            .maybe_timestamp(self.timestamp)
            .build();
        Ok(WindroseConfig::builder()
            .input(self.file)
            .time_range(self.time_range)
            .title(self.title)
            .legend_title(self.legend_title)
            .columns(columns)
            .bin_count(count_or_default("-b", self.bins.as_deref(), DEFAULT_BIN_COUNT))
            .legend_intervals(count_or_default(
                "-i",
                self.legend_intervals.as_deref(),
                DEFAULT_LEGEND_INTERVALS,
            ))
            .scheme(scheme)
            .build())
    }
}

/// Parses a positive count, falling back to `default` on anything else.
fn count_or_default(flag: &str, raw: Option<&str>, default: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<usize>() {
        Ok(count) if count > 0 => count,
        _ => {
            warn!("Invalid value {:?} for {}, using {}", raw, flag, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec![
            "windrose", "-f", "alert_winds.txt", "-y", "2000-2019", "-p", "Alert, NU", "-r",
            "speed_knots", "-d", "direction", "-l", "Wind Speed in knots",
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn builds_config_from_flags() {
        let config = parse(&["-t", "date_time", "-b", "16", "-i", "4", "-s", "Months"])
            .into_config()
            .unwrap();
        assert_eq!(config.scheme, IntervalScheme::Months);
        assert_eq!(config.bin_count, 16);
        assert_eq!(config.legend_intervals, 4);
        assert_eq!(config.columns.timestamp.as_deref(), Some("date_time"));
        assert_eq!(config.suptitle(), "Alert, NU 2000-2019");
    }

    #[test]
    fn invalid_counts_fall_back_to_defaults() {
        let config = parse(&["-b", "many", "-i", "-3", "-s", "unsectioned"])
            .into_config()
            .unwrap();
        assert_eq!(config.bin_count, DEFAULT_BIN_COUNT);
        assert_eq!(config.legend_intervals, DEFAULT_LEGEND_INTERVALS);
        assert_eq!(config.columns.timestamp, None);
    }

    #[test]
    fn missing_counts_use_defaults() {
        let config = parse(&["-s", "seasons", "-t", "date_time"]).into_config().unwrap();
        assert_eq!(config.bin_count, 24);
        assert_eq!(config.legend_intervals, 6);
    }

    #[test]
    fn unknown_interval_is_a_validation_error() {
        let err = parse(&["-s", "weekly"]).into_config().unwrap_err();
        assert!(matches!(err, TableError::InvalidScheme(_)));
    }

    #[test]
    fn missing_required_flag_is_a_usage_error() {
        let err = Args::try_parse_from(["windrose", "-f", "x.csv"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
