//! Terminal rendering of prediction results, errors, and the feature table.

use hedonic_client::{radar_profile, CONNECTIVITY_CHECKLIST, RADAR_LABELS};
use hedonic_common::error::PredictionError;
use hedonic_common::features::{FeatureSet, FEATURES, LEGACY_FEATURE_NOTE};

const BAR_WIDTH: usize = 20;

pub fn print_prediction(price: f64) {
    println!("Predicted Price: ${price:.2}k");
}

/// Labelled bar listing of the normalised radar profile,
/// in place of the original polar chart.
pub fn print_radar(features: &FeatureSet) {
    let values = radar_profile(features);
    println!("\nProperty Feature Overview");
    for (label, value) in RADAR_LABELS.iter().zip(values) {
        let filled = (value * BAR_WIDTH as f64).round() as usize;
        println!(
            "  {label:<13} [{:<width$}] {value:.2}",
            "#".repeat(filled),
            width = BAR_WIDTH
        );
    }
}

pub fn print_error(err: &PredictionError) {
    eprintln!("{err}");
    if matches!(err, PredictionError::Connectivity(_)) {
        eprintln!("Please check:");
        for item in CONNECTIVITY_CHECKLIST {
            eprintln!("  {item}");
        }
    }
}

pub fn print_feature_table() {
    println!("{:<8} {:<60} {:>10} {:>10} {:>12} {:>7}", "key", "label", "min", "max", "default", "step");
    for spec in &FEATURES {
        println!(
            "{:<8} {:<60} {:>10} {:>10} {:>12.4} {:>7}",
            spec.key, spec.label, spec.min, spec.max, spec.default, spec.step
        );
    }
    println!("\nNote on dataset bias:\n{LEGACY_FEATURE_NOTE}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_never_overflows() {
        // Clamped radar values keep the bar inside its brackets.
        let mut features = FeatureSet::defaults();
        features.rm = 8.78;
        let max_fill = radar_profile(&features)
            .iter()
            .map(|v| (v * BAR_WIDTH as f64).round() as usize)
            .max()
            .unwrap();
        assert!(max_fill <= BAR_WIDTH);
    }
}
