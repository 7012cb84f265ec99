//! Point cloud validation.

use crate::schema::PointCloudSettings;

use super::helpers::{
    validate_color, validate_range_f32, validate_tiered_range, validate_tiered_range_f32,
};

pub(crate) fn validate_point_cloud(
    errors: &mut Vec<String>,
    section: &str,
    cloud: &PointCloudSettings,
) {
    validate_tiered_range(errors, &format!("{section}.count"), &cloud.count, 0, 200_000);
    validate_tiered_range_f32(errors, &format!("{section}.size"), &cloud.size, 0.1, 64.0);
    validate_range_f32(errors, &format!("{section}.span"), cloud.span, 0.0, 100_000.0);
    validate_range_f32(errors, &format!("{section}.depth"), cloud.depth, 0.0, 100_000.0);
    validate_range_f32(errors, &format!("{section}.opacity"), cloud.opacity, 0.0, 1.0);
    validate_color(errors, &format!("{section}.color"), &cloud.color);
}
