use crate::{
    auc::accuracy_auc,
    distance::{add_error, adi_error},
    error::PoseMetricsError,
    pose::Pose,
    projection::projection_error,
    rotation::rotation_error,
    translation::translation_error,
};

/// All the errors of an estimated pose with respect to its ground truth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseErrors {
    /// Average distance of corresponding model points.
    pub add: f64,
    /// Average distance of closest model points.
    pub adi: f64,
    /// Geodesic rotation error in degrees.
    pub rotation_deg: f64,
    /// Mean absolute translation error.
    pub translation: f64,
    /// Mean reprojection error in pixels, if the camera intrinsics were given.
    pub reprojection: Option<f64>,
}

/// Area under the accuracy curve of the ADD and ADI errors of a set of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AucSummary {
    /// AUC of the ADD errors.
    pub add: f64,
    /// AUC of the ADI errors.
    pub adi: f64,
    /// Number of summarized samples.
    pub samples: usize,
}

/// Compute every error metric of an estimated pose.
///
/// # Arguments
///
/// * `pose_est` - The estimated pose.
/// * `pose_gt` - The ground truth pose.
/// * `points` - The model points with shape (M, 3).
/// * `intrinsics` - Optional camera intrinsics to compute the reprojection error.
///
/// # Returns
///
/// The errors of the estimated pose.
///
/// Example:
///
/// ```
/// use kornia_pose_metrics::{evaluate_pose, Pose};
///
/// let points = vec![[0.0, 0.0, 0.0], [0.1, 0.0, 0.0], [0.0, 0.1, 0.0]];
/// let pose = Pose::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]], [0.0, 0.0, 1.0]);
/// let errors = evaluate_pose(&pose, &pose, &points, None).unwrap();
/// assert_eq!(errors.add, 0.0);
/// assert_eq!(errors.reprojection, None);
/// ```
pub fn evaluate_pose(
    pose_est: &Pose,
    pose_gt: &Pose,
    points: &[[f64; 3]],
    intrinsics: Option<&[[f64; 3]; 3]>,
) -> Result<PoseErrors, PoseMetricsError> {
    let add = add_error(
        &[pose_est.rotation],
        &[pose_est.translation],
        &pose_gt.rotation,
        &pose_gt.translation,
        points,
    )?;

    let adi = adi_error(
        &pose_est.rotation,
        &pose_est.translation,
        &pose_gt.rotation,
        &pose_gt.translation,
        points,
    );

    let reprojection = intrinsics.map(|k| {
        projection_error(
            k,
            &pose_est.rotation,
            &pose_est.translation,
            &pose_gt.rotation,
            &pose_gt.translation,
            points,
        )
    });

    Ok(PoseErrors {
        add: add[0],
        adi,
        rotation_deg: rotation_error(&pose_est.rotation, &pose_gt.rotation),
        translation: translation_error(&pose_est.translation, &pose_gt.translation),
        reprojection,
    })
}

/// Summarize the ADD and ADI errors of many samples with the area under the accuracy curve.
///
/// The areas are NaN when `errors` is empty or when no sample is within the threshold.
pub fn summarize(errors: &[PoseErrors]) -> AucSummary {
    let add = errors.iter().map(|e| e.add).collect::<Vec<_>>();
    let adi = errors.iter().map(|e| e.adi).collect::<Vec<_>>();

    AucSummary {
        add: accuracy_auc(&add),
        adi: accuracy_auc(&adi),
        samples: errors.len(),
    }
}
