use crate::pipeline::error::PipelineError;
use crate::types::bucket::{CoercedSeries, ScaleLegend};
use log::debug;
use ordered_float::OrderedFloat;

/// Computes the magnitude scale shared by every subplot of a figure.
///
/// The scale is the largest per-bucket maximum. Every bucket must hold at least one
/// value, otherwise its subplot would have nothing to draw against the shared legend.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyBucket`] naming the first empty bucket, and
/// [`PipelineError::NoBuckets`] when `series` itself is empty.
pub fn shared_scale(series: &[CoercedSeries]) -> Result<ScaleLegend, PipelineError> {
    let mut overall: Option<OrderedFloat<f64>> = None;
    for bucket in series {
        let bucket_max = bucket
            .max_magnitude()
            .ok_or_else(|| PipelineError::EmptyBucket {
                title: bucket.title.clone(),
            })?;
        debug!("Bucket '{}' peaks at {}", bucket.title, bucket_max);
        overall = overall.max(Some(OrderedFloat(bucket_max)));
    }
    overall
        .map(|max| ScaleLegend(max.into_inner()))
        .ok_or(PipelineError::NoBuckets)
}
