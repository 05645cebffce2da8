//! Run configuration for a wind rose figure.

use crate::types::interval_scheme::IntervalScheme;
use bon::Builder;
use std::path::PathBuf;

pub const DEFAULT_BIN_COUNT: usize = 24;
pub const DEFAULT_LEGEND_INTERVALS: usize = 6;

/// Names of the input columns that feed the plot.
///
/// # Examples
///
/// ```
/// use windrose::ColumnSelection;
///
/// let columns = ColumnSelection::builder()
///     .radial("speed_knots")
///     .direction("direction")
///     .timestamp("date_time")
///     .build();
/// assert_eq!(columns.timestamp.as_deref(), Some("date_time"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ColumnSelection {
    /// Column holding the radial value, usually wind speed.
    #[builder(into)]
    pub radial: String,
    /// Column holding the direction in compass degrees.
    #[builder(into)]
    pub direction: String,
    /// Column holding the observation time. Only needed for time-based schemes.
    #[builder(into)]
    pub timestamp: Option<String>,
}

/// Everything needed to turn one CSV file into one wind rose image.
///
/// # Examples
///
/// ```
/// use windrose::{ColumnSelection, IntervalScheme, WindroseConfig};
///
/// let config = WindroseConfig::builder()
///     .input("alert_winds.csv")
///     .time_range("2000-2019")
///     .title("Monthly Windroses Plots from Alert, NU")
///     .legend_title("Wind Speed in knots")
///     .columns(
///         ColumnSelection::builder()
///             .radial("speed_knots")
///             .direction("direction")
///             .timestamp("date_time")
///             .build(),
///     )
///     .scheme(IntervalScheme::Months)
///     .build();
/// assert_eq!(config.bin_count, 24);
/// assert_eq!(config.legend_intervals, 6);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct WindroseConfig {
    #[builder(into)]
    pub input: PathBuf,
    /// Free-text period label appended to the figure and subplot titles.
    #[builder(into, default)]
    pub time_range: String,
    #[builder(into, default)]
    pub title: String,
    #[builder(into, default)]
    pub legend_title: String,
    pub columns: ColumnSelection,
    /// Number of direction sectors per wind rose.
    #[builder(default = DEFAULT_BIN_COUNT)]
    pub bin_count: usize,
    /// Number of speed bins in the shared legend.
    #[builder(default = DEFAULT_LEGEND_INTERVALS)]
    pub legend_intervals: usize,
    pub scheme: IntervalScheme,
}

impl WindroseConfig {
    /// Figure title: the plot title followed by the time range.
    pub fn suptitle(&self) -> String {
        format!("{} {}", self.title, self.time_range)
    }
}
