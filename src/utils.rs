use crate::types::interval_scheme::IntervalScheme;
use std::path::{Path, PathBuf};

const OUTPUT_SUFFIX: &str = "windrose_plot.png";

/// Image path written next to the input: `<input without extension>_<scheme>_windrose_plot.png`.
pub fn output_path(input: &Path, scheme: IntervalScheme) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_{}_{}", stem, scheme, OUTPUT_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_sits_next_to_input() {
        assert_eq!(
            output_path(Path::new("data/alert_winds.txt"), IntervalScheme::Months),
            PathBuf::from("data/alert_winds_months_windrose_plot.png")
        );
        assert_eq!(
            output_path(Path::new("station.v2.csv"), IntervalScheme::Unsectioned),
            PathBuf::from("station.v2_unsectioned_windrose_plot.png")
        );
    }
}
