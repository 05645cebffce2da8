//! Value types flowing through the pipeline: the raw [`Bucket`] split off the input
//! table, its numeric [`CoercedSeries`], and the shared [`ScaleLegend`].

use ordered_float::OrderedFloat;
use polars::frame::DataFrame;
use std::fmt;

/// A named time interval holding the input rows whose timestamp falls into it.
///
/// The wrapped frame keeps the original text columns and source row order.
#[derive(Debug, Clone)]
pub struct Bucket {
    pub title: String,
    pub frame: DataFrame,
}

impl Bucket {
    pub fn new(title: impl Into<String>, frame: DataFrame) -> Self {
        Self {
            title: title.into(),
            frame,
        }
    }

    pub fn rows(&self) -> usize {
        self.frame.height()
    }
}

/// Index-aligned direction and magnitude values of one bucket, ready for plotting.
///
/// Rows with a zero magnitude always carry a zero direction so that they sit at the
/// origin and add no weight to any direction sector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoercedSeries {
    pub title: String,
    pub directions: Vec<f64>,
    pub magnitudes: Vec<f64>,
    /// Rows whose text could not be parsed and were replaced by zeros.
    pub substituted: usize,
    /// Rows dropped before parsing because their radial text was exactly `"0.00"`.
    pub excluded: usize,
}

impl CoercedSeries {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn push(&mut self, direction: f64, magnitude: f64) {
        self.directions.push(direction);
        self.magnitudes.push(magnitude);
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// Forces the direction of every calm (zero magnitude) row to zero.
    pub fn normalize_calm(&mut self) {
        for (direction, magnitude) in self.directions.iter_mut().zip(&self.magnitudes) {
            if *magnitude == 0.0 {
                *direction = 0.0;
            }
        }
    }

    /// Largest magnitude in the series, or `None` when the series is empty.
    pub fn max_magnitude(&self) -> Option<f64> {
        self.magnitudes
            .iter()
            .copied()
            .map(OrderedFloat)
            .max()
            .map(OrderedFloat::into_inner)
    }
}

/// The largest magnitude across all buckets of one figure.
///
/// Sets the speed bin edges of every subplot so that all wind roses in a figure share
/// one legend.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ScaleLegend(pub f64);

impl ScaleLegend {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for ScaleLegend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
