//! Radar-profile normalisation.
//!
//! Six features of the set are mapped to [0, 1] against their declared schema
//! ranges (affine min-max, clamped). The same table drives the input bounds,
//! so a control-produced value always normalises inside the unit interval.

use hedonic_common::features::{feature_spec, FeatureSet};

/// Category labels, in radar order.
pub const RADAR_LABELS: [&str; 6] = [
    "Rooms",
    "Crime Rate",
    "Age",
    "Distance",
    "Tax Rate",
    "School Ratio",
];

const RADAR_KEYS: [&str; 6] = ["rm", "crim", "age", "dis", "tax", "ptratio"];

/// Min-max normalisation within [min_val, max_val], clamped to [0, 1].
fn minmax_normalise(value: f64, min_val: f64, max_val: f64) -> f64 {
    if (max_val - min_val).abs() < 1e-10 {
        return 0.5; // degenerate case
    }
    ((value - min_val) / (max_val - min_val)).clamp(0.0, 1.0)
}

/// Normalised radar values for a feature set, paired with [`RADAR_LABELS`].
pub fn radar_profile(features: &FeatureSet) -> [f64; 6] {
    let mut values = [0.0f64; 6];
    for (slot, key) in values.iter_mut().zip(RADAR_KEYS) {
        if let (Some(spec), Some(value)) = (feature_spec(key), features.get(key)) {
            *slot = minmax_normalise(value, spec.min, spec.max);
        }
    }
    values
}
