//! Binning of direction/magnitude pairs into the stacked-sector table a wind rose draws.

use crate::types::bucket::ScaleLegend;

/// Lower edge of the first speed bin. Anything slower is not counted.
pub const FIRST_SPEED_EDGE: f64 = 1.0;

/// Speed bin edges shared by every subplot of a figure.
///
/// Edges start at [`FIRST_SPEED_EDGE`] and step evenly towards the scale. The last bin
/// is open-ended so that the scale value itself is counted.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedBins {
    edges: Vec<f64>,
}

impl SpeedBins {
    /// Builds `intervals` bins below `scale`.
    ///
    /// When the scale does not exceed the first edge there is no room for evenly
    /// stepped bins, so a single bin holding every positive value is used instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use windrose::{ScaleLegend, SpeedBins};
    ///
    /// let bins = SpeedBins::new(ScaleLegend(13.0), 6);
    /// assert_eq!(bins.edges(), &[1.0, 3.0, 5.0, 7.0, 9.0, 11.0]);
    /// assert_eq!(bins.label(5), "[11.0 : inf)");
    /// ```
    pub fn new(scale: ScaleLegend, intervals: usize) -> Self {
        let scale = scale.value();
        let intervals = intervals.max(1);
        if scale.is_nan() || scale <= FIRST_SPEED_EDGE {
            return Self {
                edges: vec![f64::MIN_POSITIVE],
            };
        }
        let width = (scale - FIRST_SPEED_EDGE) / intervals as f64;
        Self {
            edges: (0..intervals)
                .map(|i| FIRST_SPEED_EDGE + width * i as f64)
                .collect(),
        }
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Bin holding `value`, or `None` below the first edge.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        let first = *self.edges.first()?;
        if value.is_nan() || value < first {
            return None;
        }
        Some(self.edges.partition_point(|&edge| edge <= value) - 1)
    }

    /// Legend label of bin `index`, e.g. `[1.0 : 3.0)`.
    pub fn label(&self, index: usize) -> String {
        let lower = self.edges.get(index).copied().unwrap_or_default();
        match self.edges.get(index + 1) {
            Some(upper) => format!("[{:.1} : {:.1})", lower, upper),
            None => format!("[{:.1} : inf)", lower),
        }
    }
}

/// Direction sector of `direction` (compass degrees) for `sectors` equal sectors.
///
/// Sector 0 is centred on north, so with 4 sectors it spans `[-45, 45)`. Any angle,
/// including negative ones or ones above 360, wraps onto the compass.
pub fn sector_of(direction: f64, sectors: usize) -> usize {
    let sectors = sectors.max(1);
    let width = 360.0 / sectors as f64;
    let shifted = (direction + width / 2.0).rem_euclid(360.0);
    (shifted / width).floor() as usize % sectors
}

/// Frequency table of one wind rose: percentage of counted values per speed bin and
/// direction sector.
#[derive(Debug, Clone, PartialEq)]
pub struct RoseTable {
    sectors: usize,
    /// `cells[bin][sector]`, in percent of all counted values.
    cells: Vec<Vec<f64>>,
    counted: usize,
}

impl RoseTable {
    pub fn build(directions: &[f64], magnitudes: &[f64], bins: &SpeedBins, sectors: usize) -> Self {
        let sectors = sectors.max(1);
        let mut counts = vec![vec![0usize; sectors]; bins.len()];
        let mut counted = 0usize;
        for (&direction, &magnitude) in directions.iter().zip(magnitudes) {
            let Some(bin) = bins.index_of(magnitude) else {
                continue;
            };
            counts[bin][sector_of(direction, sectors)] += 1;
            counted += 1;
        }
        let cells = counts
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|count| {
                        if counted == 0 {
                            0.0
                        } else {
                            count as f64 * 100.0 / counted as f64
                        }
                    })
                    .collect()
            })
            .collect();
        Self {
            sectors,
            cells,
            counted,
        }
    }

    pub fn sectors(&self) -> usize {
        self.sectors
    }

    pub fn bins(&self) -> usize {
        self.cells.len()
    }

    /// Number of values that fell into some speed bin.
    pub fn counted(&self) -> usize {
        self.counted
    }

    pub fn cell(&self, bin: usize, sector: usize) -> f64 {
        self.cells
            .get(bin)
            .and_then(|row| row.get(sector))
            .copied()
            .unwrap_or_default()
    }

    /// Width of one sector in degrees.
    pub fn sector_width(&self) -> f64 {
        360.0 / self.sectors as f64
    }

    /// Compass heading of the centre of `sector`.
    pub fn sector_heading(&self, sector: usize) -> f64 {
        sector as f64 * self.sector_width()
    }

    pub fn sector_total(&self, sector: usize) -> f64 {
        (0..self.bins()).map(|bin| self.cell(bin, sector)).sum()
    }

    pub fn max_sector_total(&self) -> f64 {
        (0..self.sectors)
            .map(|sector| self.sector_total(sector))
            .fold(0.0, f64::max)
    }
}
