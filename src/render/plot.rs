//! Draws one figure of wind roses, one subplot per bucket, into a PNG file.

use crate::render::error::RenderError;
use crate::render::palette::bin_color;
use crate::render::rose::{RoseTable, SpeedBins};
use crate::types::bucket::CoercedSeries;
use crate::types::layout::FigureLayout;
use bon::bon;
use log::info;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use std::path::Path;

/// Output size in pixels (16.5 x 10.5 inches at 100 dpi).
pub const FIGURE_SIZE: (u32, u32) = (1650, 1050);
const LEGEND_PANEL_WIDTH: u32 = 260;
const SUPTITLE_FONT: u32 = 24;
/// Fraction of a sector's angular width covered by its wedge.
const OPENING: f64 = 0.8;
const ARC_STEPS: usize = 12;
const GRID_RINGS: usize = 4;
const LABEL_MARGIN: f64 = 24.0;
const MIN_RADIUS: f64 = 10.0;

/// A figure of wind roses sharing one speed legend.
#[derive(Debug, Clone)]
pub struct WindroseFigure {
    suptitle: String,
    time_range: String,
    legend_title: String,
    sectors: usize,
    bins: SpeedBins,
    layout: FigureLayout,
}

#[bon]
impl WindroseFigure {
    #[builder]
    pub fn new(
        #[builder(into)] suptitle: String,
        #[builder(into, default)] time_range: String,
        #[builder(into, default)] legend_title: String,
        sectors: usize,
        bins: SpeedBins,
        layout: FigureLayout,
    ) -> Self {
        Self {
            suptitle,
            time_range,
            legend_title,
            sectors: sectors.max(1),
            bins,
            layout,
        }
    }

    /// Renders every series into its grid cell and writes the image to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Layout`] when there are more series than grid cells and
    /// [`RenderError::Draw`] when the backend fails to draw or save.
    pub fn draw(&self, path: &Path, series: &[CoercedSeries]) -> Result<(), RenderError> {
        if series.len() > self.layout.capacity() {
            return Err(RenderError::Layout {
                buckets: series.len(),
                rows: self.layout.rows,
                cols: self.layout.cols,
            });
        }

        let root = BitMapBackend::new(path, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(|e| draw_error(path, e))?;
        let body = root
            .titled(&self.suptitle, ("sans-serif", SUPTITLE_FONT))
            .map_err(|e| draw_error(path, e))?;
        let (plots, legend) =
            body.split_horizontally((FIGURE_SIZE.0 - LEGEND_PANEL_WIDTH) as i32);

        let cells = plots.split_evenly((self.layout.rows, self.layout.cols));
        for (cell, bucket) in cells.iter().zip(series) {
            let table = RoseTable::build(
                &bucket.directions,
                &bucket.magnitudes,
                &self.bins,
                self.sectors,
            );
            let title = format!("{} {}", bucket.title, self.time_range);
            self.draw_rose(cell, &title, &table)
                .map_err(|e| draw_error(path, e))?;
        }
        self.draw_legend(&legend).map_err(|e| draw_error(path, e))?;

        root.present().map_err(|e| draw_error(path, e))?;
        info!("Saved wind rose figure to {}", path.display());
        Ok(())
    }
}

impl WindroseFigure {
    fn draw_rose<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        title: &str,
        table: &RoseTable,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let area = area.titled(title, ("sans-serif", self.layout.subtitle_font))?;
        let (width, height) = area.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = (width.min(height) as f64 / 2.0 - LABEL_MARGIN).max(MIN_RADIUS);
        let peak = table.max_sector_total();
        let outer = if peak > 0.0 { peak } else { 1.0 };

        let grid = BLACK.mix(0.2).stroke_width(1);
        let tick_font = ("sans-serif", self.layout.tick_font).into_font();
        for ring in 1..=GRID_RINGS {
            let fraction = ring as f64 / GRID_RINGS as f64;
            let r = radius * fraction;
            area.draw(&Circle::new(center, r.round() as i32, grid))?;
            area.draw(&Text::new(
                format!("{:.1}%", outer * fraction),
                (center.0 + 3, center.1 - r.round() as i32),
                tick_font.color(&BLACK.mix(0.6)),
            ))?;
        }
        for spoke in (0..360).step_by(45) {
            area.draw(&PathElement::new(
                vec![center, polar(center, radius, spoke as f64)],
                grid,
            ))?;
        }

        let half_opening = table.sector_width() * OPENING / 2.0;
        for sector in 0..table.sectors() {
            let heading = table.sector_heading(sector);
            let mut base = 0.0;
            for bin in 0..table.bins() {
                let value = table.cell(bin, sector);
                if value <= 0.0 {
                    continue;
                }
                let top = base + value;
                let points = wedge(
                    center,
                    radius * base / outer,
                    radius * top / outer,
                    heading,
                    half_opening,
                );
                let mut outline = points.clone();
                outline.push(points[0]);
                area.draw(&Polygon::new(
                    points,
                    bin_color(bin, table.bins()).filled(),
                ))?;
                area.draw(&PathElement::new(outline, WHITE.stroke_width(1)))?;
                base = top;
            }
        }

        let compass = tick_font
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        for (label, heading) in [("N", 0.0), ("E", 90.0), ("S", 180.0), ("W", 270.0)] {
            area.draw(&Text::new(
                label,
                polar(center, radius + LABEL_MARGIN / 2.0, heading),
                compass.clone(),
            ))?;
        }
        Ok(())
    }

    fn draw_legend<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        let (_, height) = area.dim_in_pixel();
        let row_height = self.layout.legend_font as i32 + 10;
        let rows = self.bins.len() as i32 + 1;
        let left = 16;
        let mut y = (height as i32 - rows * row_height) / 2;

        area.draw(&Text::new(
            self.legend_title.clone(),
            (left, y),
            ("sans-serif", self.layout.legend_title_font)
                .into_font()
                .color(&BLACK),
        ))?;
        let label_font = ("sans-serif", self.layout.legend_font).into_font();
        for bin in 0..self.bins.len() {
            y += row_height;
            let swatch = self.layout.legend_font as i32;
            area.draw(&Rectangle::new(
                [(left, y), (left + 2 * swatch, y + swatch)],
                bin_color(bin, self.bins.len()).filled(),
            ))?;
            area.draw(&Text::new(
                self.bins.label(bin),
                (left + 2 * swatch + 8, y),
                label_font.color(&BLACK),
            ))?;
        }
        Ok(())
    }
}

fn draw_error(path: &Path, err: impl Display) -> RenderError {
    RenderError::Draw {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Pixel position at `radius` from `center` along compass `heading` (degrees,
/// clockwise from north).
pub(crate) fn polar(center: (i32, i32), radius: f64, heading: f64) -> (i32, i32) {
    let angle = heading.to_radians();
    (
        center.0 + (radius * angle.sin()).round() as i32,
        center.1 - (radius * angle.cos()).round() as i32,
    )
}

/// Outline of an annular wedge between two radii, centred on `heading`.
pub(crate) fn wedge(
    center: (i32, i32),
    inner: f64,
    outer: f64,
    heading: f64,
    half_width: f64,
) -> Vec<(i32, i32)> {
    let start = heading - half_width;
    let step = 2.0 * half_width / ARC_STEPS as f64;
    let outer_arc = (0..=ARC_STEPS).map(|k| polar(center, outer, start + step * k as f64));
    let inner_arc = (0..=ARC_STEPS)
        .rev()
        .map(|k| polar(center, inner, start + step * k as f64));
    outer_arc.chain(inner_arc).collect()
}
