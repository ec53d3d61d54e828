use crate::{
    error::PoseMetricsError,
    linalg::{inverse33, matmul33, trace33},
};

/// Compute the geodesic angle between two rotation matrices.
///
/// The angle is `acos((trace(R_est * R_gt^-1) - 1) / 2)`. The cosine is clamped to
/// `[-1, 1]` so that round-off on nearly identical or opposite rotations never leaves
/// the domain of `acos`.
///
/// # Arguments
///
/// * `rotation_est` - The estimated rotation matrix.
/// * `rotation_gt` - The ground truth rotation matrix.
///
/// # Returns
///
/// The rotation error in degrees, within `[0, 180]`.
///
/// Example:
///
/// ```
/// use kornia_pose_metrics::rotation_error;
///
/// let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let rx = [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]];
/// assert!((rotation_error(&rx, &identity) - 90.0).abs() < 1e-9);
/// ```
pub fn rotation_error(rotation_est: &[[f64; 3]; 3], rotation_gt: &[[f64; 3]; 3]) -> f64 {
    let mut rotation_diff = [[0.0; 3]; 3];
    matmul33(rotation_est, &inverse33(rotation_gt), &mut rotation_diff);

    let error_cos = ((trace33(&rotation_diff) - 1.0) * 0.5).clamp(-1.0, 1.0);

    error_cos.acos().to_degrees()
}

/// Compute the geodesic angle for a batch of rotation pairs.
///
/// # Arguments
///
/// * `rotations_est` - The estimated rotation matrices with shape (N, 3, 3).
/// * `rotations_gt` - The ground truth rotation matrices with shape (N, 3, 3).
///
/// # Returns
///
/// One error in degrees per pair, see [`rotation_error`].
///
/// # Errors
///
/// Returns [`PoseMetricsError::BatchSizeMismatch`] if the batches have different lengths.
pub fn rotation_error_batch(
    rotations_est: &[[[f64; 3]; 3]],
    rotations_gt: &[[[f64; 3]; 3]],
) -> Result<Vec<f64>, PoseMetricsError> {
    if rotations_est.len() != rotations_gt.len() {
        return Err(PoseMetricsError::BatchSizeMismatch(
            rotations_est.len(),
            rotations_gt.len(),
        ));
    }

    Ok(rotations_est
        .iter()
        .zip(rotations_gt.iter())
        .map(|(r_est, r_gt)| rotation_error(r_est, r_gt))
        .collect())
}

/// Compute the angle between rows of two batches of unit quaternions.
///
/// The angle of each pair is `acos(q1 . q2)` in degrees.
///
/// NOTE: unlike [`rotation_error`], the dot product is not clamped. Inputs that are not
/// unit quaternions, or whose dot product rounds above one, produce NaN.
///
/// # Arguments
///
/// * `q1` - The first batch of quaternions with shape (N, 4).
/// * `q2` - The second batch of quaternions with shape (N, 4).
///
/// # Errors
///
/// Returns [`PoseMetricsError::BatchSizeMismatch`] if the batches have different lengths.
pub fn quaternion_rotation_error(
    q1: &[[f64; 4]],
    q2: &[[f64; 4]],
) -> Result<Vec<f64>, PoseMetricsError> {
    if q1.len() != q2.len() {
        return Err(PoseMetricsError::BatchSizeMismatch(q1.len(), q2.len()));
    }

    Ok(q1
        .iter()
        .zip(q2.iter())
        .map(|(a, b)| {
            let inner = a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3];
            inner.acos().to_degrees()
        })
        .collect())
}
