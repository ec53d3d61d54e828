#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the pose metrics.
pub mod error;
pub use error::PoseMetricsError;

/// Small fixed-size linear algebra helpers.
pub mod linalg;

/// Rigid pose type.
pub mod pose;
pub use pose::Pose;

/// Rigid transformation of point sets.
pub mod transform;
pub use transform::{transform_points, transform_points_batch, transform_points_into};

/// Reprojection error in pixel space.
pub mod projection;
pub use projection::{project_points, projection_error};

/// Model point distance errors (ADD and ADI).
pub mod distance;
pub use distance::{add_error, adi_error};

/// Geodesic rotation errors.
pub mod rotation;
pub use rotation::{quaternion_rotation_error, rotation_error, rotation_error_batch};

/// Translation error.
pub mod translation;
pub use translation::translation_error;

/// Area under the accuracy-threshold curve.
pub mod auc;
pub use auc::{accuracy_auc, accuracy_auc_with_threshold, AUC_MAX_THRESHOLD};

/// Evaluate every metric for a pose pair and summarize a dataset.
pub mod evaluate;
pub use evaluate::{evaluate_pose, summarize, AucSummary, PoseErrors};
