//! Defines the time-interval schemes used to split station data into wind rose
//! subplots, together with their bucket titles and figure layouts.

use crate::table::error::TableError;
use crate::types::layout::FigureLayout;
use std::fmt;
use std::str::FromStr;

pub const MONTH_TITLES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const SEASON_TITLES: [&str; 4] = [
    "Winter: Jan-Mar",
    "Spring: Apr-Jun",
    "Summer: Jul-Sep",
    "Autumn: Oct-Dec",
];

pub const UNSECTIONED_TITLE: &str = "Data";

/// Represents how rows are grouped in time before a wind rose is drawn for each group.
///
/// Every scheme produces a fixed, ordered list of buckets. The monthly and seasonal
/// schemes need a timestamp column; [`IntervalScheme::Unsectioned`] keeps every row in
/// a single bucket and ignores time entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalScheme {
    /// Twelve buckets, one per calendar month.
    Months,
    /// Four buckets of three consecutive months each (Jan-Mar is Winter, and so on).
    Seasons,
    /// One bucket holding all rows.
    Unsectioned,
}

impl IntervalScheme {
    pub const ALL: [IntervalScheme; 3] = [
        IntervalScheme::Months,
        IntervalScheme::Seasons,
        IntervalScheme::Unsectioned,
    ];

    /// The name used on the command line and in output file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalScheme::Months => "months",
            IntervalScheme::Seasons => "seasons",
            IntervalScheme::Unsectioned => "unsectioned",
        }
    }

    /// Bucket titles in plotting order.
    pub fn titles(&self) -> &'static [&'static str] {
        match self {
            IntervalScheme::Months => &MONTH_TITLES,
            IntervalScheme::Seasons => &SEASON_TITLES,
            IntervalScheme::Unsectioned => &[UNSECTIONED_TITLE],
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.titles().len()
    }

    pub fn requires_timestamp(&self) -> bool {
        !matches!(self, IntervalScheme::Unsectioned)
    }

    /// Returns the inclusive calendar month range (1-indexed) covered by bucket `index`.
    ///
    /// # Returns
    ///
    /// * `Some((first, last))` for a valid bucket of a time-based scheme.
    /// * `None` for [`IntervalScheme::Unsectioned`] or an out-of-range index.
    ///
    /// # Examples
    ///
    /// ```
    /// use windrose::IntervalScheme;
    ///
    /// assert_eq!(IntervalScheme::Months.month_range(2), Some((3, 3)));
    /// assert_eq!(IntervalScheme::Seasons.month_range(2), Some((7, 9)));
    /// assert_eq!(IntervalScheme::Unsectioned.month_range(0), None);
    /// ```
    pub fn month_range(&self, index: usize) -> Option<(u32, u32)> {
        if index >= self.bucket_count() {
            return None;
        }
        let index = index as u32;
        match self {
            IntervalScheme::Months => Some((index + 1, index + 1)),
            IntervalScheme::Seasons => Some((3 * index + 1, 3 * index + 3)),
            IntervalScheme::Unsectioned => None,
        }
    }

    /// Title and inclusive month range of every bucket of a time-based scheme, in
    /// plotting order. Empty for [`IntervalScheme::Unsectioned`].
    pub fn month_buckets(&self) -> Vec<(&'static str, u32, u32)> {
        self.titles()
            .iter()
            .enumerate()
            .filter_map(|(index, title)| {
                self.month_range(index).map(|(first, last)| (*title, first, last))
            })
            .collect()
    }

    /// Index of the bucket a calendar month (1-12) falls into.
    pub fn bucket_of_month(&self, month: u32) -> Option<usize> {
        if !(1..=12).contains(&month) {
            return None;
        }
        match self {
            IntervalScheme::Months => Some((month - 1) as usize),
            IntervalScheme::Seasons => Some(((month - 1) / 3) as usize),
            IntervalScheme::Unsectioned => Some(0),
        }
    }

    /// Subplot grid and font sizes used when this scheme is rendered.
    pub fn layout(&self) -> FigureLayout {
        match self {
            IntervalScheme::Months => FigureLayout {
                rows: 3,
                cols: 4,
                legend_font: 10,
                legend_title_font: 11,
                tick_font: 12,
                subtitle_font: 14,
            },
            IntervalScheme::Seasons => FigureLayout {
                rows: 2,
                cols: 2,
                legend_font: 10,
                legend_title_font: 11,
                tick_font: 14,
                subtitle_font: 14,
            },
            IntervalScheme::Unsectioned => FigureLayout {
                rows: 1,
                cols: 1,
                legend_font: 14,
                legend_title_font: 14,
                tick_font: 16,
                subtitle_font: 14,
            },
        }
    }
}

/// Formats the scheme by its command-line name.
///
/// # Examples
///
/// ```
/// use windrose::IntervalScheme;
///
/// assert_eq!(IntervalScheme::Seasons.to_string(), "seasons");
/// ```
impl fmt::Display for IntervalScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses a scheme name, ignoring ASCII case and surrounding whitespace.
impl FromStr for IntervalScheme {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        IntervalScheme::ALL
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TableError::InvalidScheme(s.to_string()))
    }
}
