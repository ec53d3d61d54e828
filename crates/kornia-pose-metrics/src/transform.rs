use rayon::prelude::*;

use crate::{error::PoseMetricsError, linalg::dot_product3};

/// Transform a set of points using a rotation and translation into a pre-allocated buffer.
///
/// # Arguments
///
/// * `src_points` - A set of points to be transformed.
/// * `dst_r_src` - A rotation matrix.
/// * `dst_t_src` - A translation vector.
/// * `dst_points` - A pre-allocated buffer to store the transformed points.
///
/// # Errors
///
/// Returns [`PoseMetricsError::PointCountMismatch`] if the buffers have different lengths.
///
/// Example:
///
/// ```
/// use kornia_pose_metrics::transform_points_into;
///
/// let src_points = vec![[2.0, 2.0, 2.0], [3.0, 4.0, 5.0]];
/// let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let translation = [0.0, 0.0, 1.0];
/// let mut dst_points = vec![[0.0; 3]; src_points.len()];
/// transform_points_into(&src_points, &rotation, &translation, &mut dst_points).unwrap();
/// assert_eq!(dst_points, vec![[2.0, 2.0, 3.0], [3.0, 4.0, 6.0]]);
/// ```
pub fn transform_points_into(
    src_points: &[[f64; 3]],
    dst_r_src: &[[f64; 3]; 3],
    dst_t_src: &[f64; 3],
    dst_points: &mut [[f64; 3]],
) -> Result<(), PoseMetricsError> {
    if src_points.len() != dst_points.len() {
        return Err(PoseMetricsError::PointCountMismatch(
            src_points.len(),
            dst_points.len(),
        ));
    }

    for (point_dst, point_src) in dst_points.iter_mut().zip(src_points.iter()) {
        point_dst[0] = dot_product3(&dst_r_src[0], point_src) + dst_t_src[0];
        point_dst[1] = dot_product3(&dst_r_src[1], point_src) + dst_t_src[1];
        point_dst[2] = dot_product3(&dst_r_src[2], point_src) + dst_t_src[2];
    }

    Ok(())
}

/// Apply a rigid transformation `R * p + t` to every point of a set.
///
/// # Arguments
///
/// * `src_points` - The model points with shape (M, 3).
/// * `dst_r_src` - The 3x3 rotation matrix.
/// * `dst_t_src` - The translation vector.
///
/// # Returns
///
/// The transformed points with shape (M, 3), in the input order.
pub fn transform_points(
    src_points: &[[f64; 3]],
    dst_r_src: &[[f64; 3]; 3],
    dst_t_src: &[f64; 3],
) -> Vec<[f64; 3]> {
    src_points
        .iter()
        .map(|p| {
            [
                dot_product3(&dst_r_src[0], p) + dst_t_src[0],
                dot_product3(&dst_r_src[1], p) + dst_t_src[1],
                dot_product3(&dst_r_src[2], p) + dst_t_src[2],
            ]
        })
        .collect()
}

/// Apply a batch of rigid transformations to the same set of points.
///
/// Each of the N poses is applied independently and in parallel.
///
/// # Arguments
///
/// * `src_points` - The model points with shape (M, 3).
/// * `rotations` - The rotation matrices with shape (N, 3, 3).
/// * `translations` - The translation vectors with shape (N, 3).
///
/// # Returns
///
/// The transformed points with shape (N, M, 3). The outer index follows the pose
/// order and the inner index follows the point order.
///
/// # Errors
///
/// Returns [`PoseMetricsError::BatchSizeMismatch`] if the number of rotations and
/// translations differ.
pub fn transform_points_batch(
    src_points: &[[f64; 3]],
    rotations: &[[[f64; 3]; 3]],
    translations: &[[f64; 3]],
) -> Result<Vec<Vec<[f64; 3]>>, PoseMetricsError> {
    if rotations.len() != translations.len() {
        return Err(PoseMetricsError::BatchSizeMismatch(
            rotations.len(),
            translations.len(),
        ));
    }

    log::debug!(
        "Transforming {} points under {} poses",
        src_points.len(),
        rotations.len()
    );

    Ok(rotations
        .par_iter()
        .zip(translations.par_iter())
        .map(|(rotation, translation)| transform_points(src_points, rotation, translation))
        .collect())
}
