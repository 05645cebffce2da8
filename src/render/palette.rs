use plotters::style::RGBColor;

// Sampled from the viridis colormap at 0, 0.25, 0.5, 0.75 and 1.
const VIRIDIS_STOPS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Colour of speed bin `index` out of `count`, from dark purple (slowest) to yellow.
pub fn bin_color(index: usize, count: usize) -> RGBColor {
    let t = if count <= 1 {
        0.0
    } else {
        (index.min(count - 1)) as f64 / (count - 1) as f64
    };
    ramp(t)
}

fn ramp(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let segments = (VIRIDIS_STOPS.len() - 1) as f64;
    let position = t * segments;
    let lower = (position.floor() as usize).min(VIRIDIS_STOPS.len() - 2);
    let local = position - lower as f64;
    let (r0, g0, b0) = VIRIDIS_STOPS[lower];
    let (r1, g1, b1) = VIRIDIS_STOPS[lower + 1];
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * local).round().clamp(0.0, 255.0) as u8;
    RGBColor(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}
