//! Area under the accuracy-threshold curve.
//!
//! The accuracy at a threshold is the fraction of samples whose error is below it. The
//! curve is integrated from zero up to a maximum threshold and normalized to `[0, 1]`,
//! following the evaluation protocol of PoseCNN (Xiang et al., RSS 2018) for the
//! YCB-Video dataset.

/// Maximum error threshold of the accuracy curve, in model units (10 cm for meters).
pub const AUC_MAX_THRESHOLD: f64 = 0.1;

/// Compute the area under the accuracy curve with the default threshold.
///
/// See [`accuracy_auc_with_threshold`] and [`AUC_MAX_THRESHOLD`].
///
/// Example:
///
/// ```
/// use kornia_pose_metrics::accuracy_auc;
///
/// assert_eq!(accuracy_auc(&[0.0, 0.0, 0.0]), 1.0);
/// assert!(accuracy_auc(&[]).is_nan());
/// ```
pub fn accuracy_auc(errors: &[f64]) -> f64 {
    accuracy_auc_with_threshold(errors, AUC_MAX_THRESHOLD)
}

/// Compute the area under the accuracy curve up to `max_threshold`.
///
/// Errors above the threshold never count as accurate. The curve is built from the
/// sorted errors, made non-decreasing and integrated as a step function, so repeated
/// error values only contribute once.
///
/// # Arguments
///
/// * `errors` - The per-sample errors, in any order.
/// * `max_threshold` - The largest threshold of the curve. Must be positive.
///
/// # Returns
///
/// The normalized area in `[0, 1]`. NaN when `errors` is empty, when no error is within
/// the threshold, or when the threshold is not a positive finite number.
pub fn accuracy_auc_with_threshold(errors: &[f64], max_threshold: f64) -> f64 {
    if !(max_threshold.is_finite() && max_threshold > 0.0) {
        log::warn!("Invalid AUC threshold: {max_threshold}");
        return f64::NAN;
    }

    let num_samples = errors.len();

    // NaN goes last whatever its sign bit so that it never shifts the rank of a finite error
    let mut sorted = errors.to_vec();
    sorted.sort_by(|a, b| a.is_nan().cmp(&b.is_nan()).then_with(|| a.total_cmp(b)));

    // keep the errors within the threshold together with their accuracy i / N
    let (recall, precision): (Vec<f64>, Vec<f64>) = sorted
        .iter()
        .enumerate()
        .filter(|(_, &e)| e.is_finite() && e <= max_threshold)
        .map(|(i, &e)| (e, (i + 1) as f64 / num_samples as f64))
        .unzip();

    let Some(&last_precision) = precision.last() else {
        log::debug!("No error within {max_threshold} out of {num_samples} samples");
        return f64::NAN;
    };

    let mrec = std::iter::once(0.0)
        .chain(recall)
        .chain(std::iter::once(max_threshold))
        .collect::<Vec<_>>();

    let mut mpre = std::iter::once(0.0)
        .chain(precision)
        .chain(std::iter::once(last_precision))
        .collect::<Vec<_>>();

    for i in 1..mpre.len() {
        mpre[i] = mpre[i].max(mpre[i - 1]);
    }

    let area = (1..mrec.len())
        .filter(|&i| mrec[i] != mrec[i - 1])
        .map(|i| (mrec[i] - mrec[i - 1]) * mpre[i])
        .sum::<f64>();

    area / max_threshold
}
