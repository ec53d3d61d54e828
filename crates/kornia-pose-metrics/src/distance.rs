//! Average distance of model points.
//!
//! Both metrics are from Hinterstoisser et al., "Model Based Training, Detection and Pose
//! Estimation of Texture-Less 3D Objects in Heavily Cluttered Scenes", ACCV 2012.
//!
//! - [`add_error`] compares corresponding model points and suits objects without
//!   indistinguishable views.
//! - [`adi_error`] matches every ground truth point to its closest estimated point and
//!   suits symmetric objects.

use kiddo::immutable::float::kdtree::ImmutableKdTree;
use rayon::prelude::*;

use crate::{
    error::PoseMetricsError,
    linalg::{euclidean_distance, mean},
    transform::transform_points,
};

/// Compute the ADD error for a batch of estimated poses against one ground truth pose.
///
/// For each estimated pose the model points are transformed under the estimate and under
/// the ground truth, and the distances between points with the same index are averaged.
///
/// # Arguments
///
/// * `rotations_est` - The estimated rotation matrices with shape (N, 3, 3).
/// * `translations_est` - The estimated translation vectors with shape (N, 3).
/// * `rotation_gt` - The ground truth rotation matrix.
/// * `translation_gt` - The ground truth translation vector.
/// * `points` - The model points with shape (M, 3).
///
/// # Returns
///
/// One error per estimated pose, in the same order. Each error is NaN when `points` is empty.
///
/// # Errors
///
/// Returns [`PoseMetricsError::BatchSizeMismatch`] if the number of rotations and
/// translations differ.
///
/// Example:
///
/// ```
/// use kornia_pose_metrics::add_error;
///
/// let identity = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let points = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
/// let errors = add_error(
///     &[identity, identity],
///     &[[0.0, 0.0, 0.0], [0.0, 0.0, 0.5]],
///     &identity,
///     &[0.0, 0.0, 0.0],
///     &points,
/// )
/// .unwrap();
/// assert_eq!(errors, vec![0.0, 0.5]);
/// ```
pub fn add_error(
    rotations_est: &[[[f64; 3]; 3]],
    translations_est: &[[f64; 3]],
    rotation_gt: &[[f64; 3]; 3],
    translation_gt: &[f64; 3],
    points: &[[f64; 3]],
) -> Result<Vec<f64>, PoseMetricsError> {
    if rotations_est.len() != translations_est.len() {
        return Err(PoseMetricsError::BatchSizeMismatch(
            rotations_est.len(),
            translations_est.len(),
        ));
    }

    // the ground truth points are shared by every hypothesis in the batch
    let points_gt = transform_points(points, rotation_gt, translation_gt);

    log::debug!(
        "ADD over {} poses and {} points",
        rotations_est.len(),
        points.len()
    );

    Ok(rotations_est
        .par_iter()
        .zip(translations_est.par_iter())
        .map(|(rotation_est, translation_est)| {
            let points_est = transform_points(points, rotation_est, translation_est);
            mean(
                points_est
                    .iter()
                    .zip(points_gt.iter())
                    .map(|(e, g)| euclidean_distance(e, g)),
            )
        })
        .collect())
}

/// Compute the ADI error between an estimated and a ground truth pose.
///
/// The model points are transformed under both poses. For every ground truth point the
/// distance to its nearest estimated point is computed with a k-d tree and the distances
/// are averaged. The result does not depend on the order of the model points.
///
/// # Arguments
///
/// * `rotation_est` - The estimated rotation matrix.
/// * `translation_est` - The estimated translation vector.
/// * `rotation_gt` - The ground truth rotation matrix.
/// * `translation_gt` - The ground truth translation vector.
/// * `points` - The model points with shape (M, 3).
///
/// # Returns
///
/// The mean nearest neighbor distance, or NaN when `points` is empty.
pub fn adi_error(
    rotation_est: &[[f64; 3]; 3],
    translation_est: &[f64; 3],
    rotation_gt: &[[f64; 3]; 3],
    translation_gt: &[f64; 3],
    points: &[[f64; 3]],
) -> f64 {
    if points.is_empty() {
        return f64::NAN;
    }

    let points_est = transform_points(points, rotation_est, translation_est);
    let points_gt = transform_points(points, rotation_gt, translation_gt);

    // build kdtree over the estimated points to find the closest match of each gt point
    let kdtree: ImmutableKdTree<f64, u32, 3, 32> = ImmutableKdTree::new_from_slice(&points_est);

    log::debug!("ADI kdtree built over {} points", points_est.len());

    mean(points_gt.iter().map(|p| {
        kdtree
            .nearest_one::<kiddo::SquaredEuclidean>(p)
            .distance
            .sqrt()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const IDENTITY: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    fn create_random_points(num_points: usize) -> Vec<[f64; 3]> {
        (0..num_points)
            .map(|_| {
                [
                    rand::random::<f64>(),
                    rand::random::<f64>(),
                    rand::random::<f64>(),
                ]
            })
            .collect()
    }

    // 180 degrees around z
    fn rotation_z_pi() -> [[f64; 3]; 3] {
        [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]]
    }

    #[test]
    fn test_add_error_zero_at_truth() -> Result<(), PoseMetricsError> {
        let points = create_random_points(50);
        let rotation = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let translation = [0.3, -0.1, 1.5];
        let errors = add_error(&[rotation], &[translation], &rotation, &translation, &points)?;
        assert_eq!(errors.len(), 1);
        assert_relative_eq!(errors[0], 0.0);
        Ok(())
    }

    #[test]
    fn test_add_error_translation_offset() -> Result<(), PoseMetricsError> {
        let points = create_random_points(20);
        let errors = add_error(
            &[IDENTITY, IDENTITY, IDENTITY],
            &[[0.0, 0.0, 0.0], [3.0, 4.0, 0.0], [0.0, 0.0, -0.25]],
            &IDENTITY,
            &[0.0, 0.0, 0.0],
            &points,
        )?;
        assert_eq!(errors.len(), 3);
        assert_relative_eq!(errors[0], 0.0);
        assert_relative_eq!(errors[1], 5.0, epsilon = 1e-12);
        assert_relative_eq!(errors[2], 0.25, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_add_error_batched_consistency() -> Result<(), PoseMetricsError> {
        let points = create_random_points(40);
        let rotation = rotation_z_pi();
        let translation = [0.05, 0.0, 0.02];
        let single = add_error(&[rotation], &[translation], &IDENTITY, &[0.0; 3], &points)?;
        let batch = add_error(&[rotation; 8], &[translation; 8], &IDENTITY, &[0.0; 3], &points)?;
        assert_eq!(batch.len(), 8);
        for e in batch {
            assert_eq!(e, single[0]);
        }
        Ok(())
    }

    #[test]
    fn test_add_error_mismatch() {
        let res = add_error(&[IDENTITY], &[], &IDENTITY, &[0.0; 3], &[[0.0; 3]]);
        assert_eq!(res, Err(PoseMetricsError::BatchSizeMismatch(1, 0)));
    }

    #[test]
    fn test_add_error_empty_points() -> Result<(), PoseMetricsError> {
        let errors = add_error(&[IDENTITY], &[[0.0; 3]], &IDENTITY, &[0.0; 3], &[])?;
        assert!(errors[0].is_nan());
        Ok(())
    }

    #[test]
    fn test_adi_error_zero_at_truth() {
        let points = create_random_points(50);
        let translation = [0.3, -0.1, 1.5];
        let err = adi_error(&IDENTITY, &translation, &IDENTITY, &translation, &points);
        assert_relative_eq!(err, 0.0);
    }

    #[test]
    fn test_adi_error_symmetric_object() {
        // a square in the xy plane looks the same after a half turn around z
        let points = vec![
            [1.0, 1.0, 0.0],
            [-1.0, 1.0, 0.0],
            [-1.0, -1.0, 0.0],
            [1.0, -1.0, 0.0],
        ];
        let adi = adi_error(&rotation_z_pi(), &[0.0; 3], &IDENTITY, &[0.0; 3], &points);
        assert_relative_eq!(adi, 0.0, epsilon = 1e-12);

        let add = add_error(&[rotation_z_pi()], &[[0.0; 3]], &IDENTITY, &[0.0; 3], &points);
        assert_eq!(add.map(|e| e[0] > 2.0), Ok(true));
    }

    #[test]
    fn test_adi_error_invariant_to_point_order() {
        let points = create_random_points(30);
        let mut reversed = points.clone();
        reversed.reverse();
        let rotation = rotation_z_pi();
        let translation = [0.01, 0.02, 0.03];
        let a = adi_error(&rotation, &translation, &IDENTITY, &[0.0; 3], &points);
        let b = adi_error(&rotation, &translation, &IDENTITY, &[0.0; 3], &reversed);
        assert_relative_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn test_adi_error_lower_than_add() -> Result<(), PoseMetricsError> {
        let points = create_random_points(100);
        for _ in 0..10 {
            let translation = [
                rand::random::<f64>() * 0.1,
                rand::random::<f64>() * 0.1,
                rand::random::<f64>() * 0.1,
            ];
            let rotation = rotation_z_pi();
            let adi = adi_error(&rotation, &translation, &IDENTITY, &[0.0; 3], &points);
            let add = add_error(&[rotation], &[translation], &IDENTITY, &[0.0; 3], &points)?;
            assert!(adi <= add[0] + 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_adi_error_empty_points() {
        assert!(adi_error(&IDENTITY, &[0.0; 3], &IDENTITY, &[0.0; 3], &[]).is_nan());
    }
}
