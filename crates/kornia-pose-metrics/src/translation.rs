/// Compute the translation error as the mean absolute difference over the three axes.
///
/// # Arguments
///
/// * `translation_est` - The estimated translation vector.
/// * `translation_gt` - The ground truth translation vector.
///
/// # Returns
///
/// `mean(|t_gt - t_est|)`, in the units of the translations.
///
/// Example:
///
/// ```
/// use kornia_pose_metrics::translation_error;
///
/// let err = translation_error(&[1.0, 2.0, 3.0], &[1.0, 5.0, 3.0]);
/// assert_eq!(err, 1.0);
/// ```
pub fn translation_error(translation_est: &[f64; 3], translation_gt: &[f64; 3]) -> f64 {
    translation_gt
        .iter()
        .zip(translation_est.iter())
        .map(|(gt, est)| (gt - est).abs())
        .sum::<f64>()
        / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_translation_error() {
        let t = [0.1, -0.2, 1.5];
        assert_eq!(translation_error(&t, &t), 0.0);
        assert_relative_eq!(
            translation_error(&[0.0, 0.0, 0.0], &[0.3, -0.6, 0.9]),
            0.6,
            epsilon = 1e-12
        );
        assert_eq!(
            translation_error(&[1.0, 1.0, 1.0], &[0.0, 0.0, 0.0]),
            translation_error(&[0.0, 0.0, 0.0], &[1.0, 1.0, 1.0])
        );
    }
}
