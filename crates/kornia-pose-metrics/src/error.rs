/// An error type for the pose metrics.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PoseMetricsError {
    /// Batched inputs that must be index-aligned have different lengths.
    #[error("Batch size mismatch: {0} estimates vs {1} references")]
    BatchSizeMismatch(usize, usize),

    /// Source and destination point sets have different lengths.
    #[error("Point count mismatch: source has {0} points, destination has {1}")]
    PointCountMismatch(usize, usize),
}
