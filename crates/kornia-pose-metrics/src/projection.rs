use crate::{
    linalg::{mat33_mul_vec3, mean},
    transform::transform_points,
};

/// Project 3D points in the camera frame to 2D pixel coordinates.
///
/// Each point is mapped through the intrinsic matrix `K * p` and divided by its
/// projected depth. Points with zero or negative depth are not filtered out and
/// produce non-finite or mirrored pixel coordinates.
///
/// # Arguments
///
/// * `intrinsics` - The 3x3 camera intrinsic matrix.
/// * `points` - The points in the camera frame with shape (M, 3).
///
/// # Returns
///
/// The pixel coordinates `[u, v]` of each point.
///
/// Example:
///
/// ```
/// use kornia_pose_metrics::project_points;
///
/// let k = [[500.0, 0.0, 320.0], [0.0, 500.0, 240.0], [0.0, 0.0, 1.0]];
/// let pixels = project_points(&k, &[[0.0, 0.0, 5.0]]);
/// assert_eq!(pixels, vec![[320.0, 240.0]]);
/// ```
pub fn project_points(intrinsics: &[[f64; 3]; 3], points: &[[f64; 3]]) -> Vec<[f64; 2]> {
    points
        .iter()
        .map(|p| {
            let uvw = mat33_mul_vec3(intrinsics, p);
            [uvw[0] / uvw[2], uvw[1] / uvw[2]]
        })
        .collect()
}

/// Compute the mean reprojection error between an estimated and a ground truth pose.
///
/// The model points are transformed under both poses, projected with the camera
/// intrinsics and compared point by point in pixel space. Pixels are kept in `f64`
/// rather than rounded to single precision before the distance is taken.
///
/// # Arguments
///
/// * `intrinsics` - The 3x3 camera intrinsic matrix.
/// * `rotation_est` - The estimated rotation matrix.
/// * `translation_est` - The estimated translation vector.
/// * `rotation_gt` - The ground truth rotation matrix.
/// * `translation_gt` - The ground truth translation vector.
/// * `points` - The model points with shape (M, 3).
///
/// # Returns
///
/// The mean Euclidean pixel distance, or NaN for an empty point set.
///
/// PRECONDITION: every transformed point has a positive depth under both poses.
pub fn projection_error(
    intrinsics: &[[f64; 3]; 3],
    rotation_est: &[[f64; 3]; 3],
    translation_est: &[f64; 3],
    rotation_gt: &[[f64; 3]; 3],
    translation_gt: &[f64; 3],
    points: &[[f64; 3]],
) -> f64 {
    let pixels_est = project_points(
        intrinsics,
        &transform_points(points, rotation_est, translation_est),
    );
    let pixels_gt = project_points(
        intrinsics,
        &transform_points(points, rotation_gt, translation_gt),
    );

    mean(
        pixels_est
            .iter()
            .zip(pixels_gt.iter())
            .map(|(e, g)| ((e[0] - g[0]).powi(2) + (e[1] - g[1]).powi(2)).sqrt()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const K: [[f64; 3]; 3] = [[500.0, 0.0, 320.0], [0.0, 500.0, 240.0], [0.0, 0.0, 1.0]];
    const IDENTITY: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    #[test]
    fn test_project_points() {
        let points = vec![[0.0, 0.0, 5.0], [1.0, 2.0, 10.0]];
        let pixels = project_points(&K, &points);
        assert_eq!(pixels.len(), 2);
        assert_relative_eq!(pixels[0][0], 320.0);
        assert_relative_eq!(pixels[0][1], 240.0);
        assert_relative_eq!(pixels[1][0], 500.0 * 1.0 / 10.0 + 320.0);
        assert_relative_eq!(pixels[1][1], 500.0 * 2.0 / 10.0 + 240.0);
    }

    #[test]
    fn test_project_points_zero_depth() {
        let pixels = project_points(&K, &[[1.0, 1.0, 0.0]]);
        assert!(!pixels[0][0].is_finite());
        assert!(!pixels[0][1].is_finite());
    }

    #[test]
    fn test_projection_error_zero_at_truth() {
        let points = vec![[0.1, 0.2, 0.0], [-0.1, 0.05, 0.1], [0.0, 0.0, -0.1]];
        let rotation = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let translation = [0.1, -0.2, 2.0];
        let err = projection_error(&K, &rotation, &translation, &rotation, &translation, &points);
        assert_relative_eq!(err, 0.0);
    }

    #[test]
    fn test_projection_error_lateral_shift() {
        // a shift of 0.01 along x at depth 5 moves every pixel by 500 * 0.01 / 5 = 1 pixel
        let points = vec![[0.0, 0.0, 0.0], [0.1, 0.0, 0.0], [0.0, 0.1, 0.0]];
        let err = projection_error(
            &K,
            &IDENTITY,
            &[0.01, 0.0, 5.0],
            &IDENTITY,
            &[0.0, 0.0, 5.0],
            &points,
        );
        assert_relative_eq!(err, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_projection_error_empty() {
        let err = projection_error(&K, &IDENTITY, &[0.0; 3], &IDENTITY, &[0.0; 3], &[]);
        assert!(err.is_nan());
    }
}
