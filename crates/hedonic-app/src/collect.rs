//! Input collection: one bounded control per feature, fed from key=value
//! command-line pairs. Untouched features keep their schema defaults, so the
//! produced set is always fully populated.

use hedonic_common::error::{PredictionError, Result};
use hedonic_common::features::{feature_spec, FeatureSet, FeatureSpec};

/// Bounded control over one feature: clamps to [min, max] and snaps to the
/// nearest step from min, mirroring a slider widget.
pub struct Slider {
    spec: &'static FeatureSpec,
    value: f64,
}

impl Slider {
    pub fn new(spec: &'static FeatureSpec) -> Self {
        Self {
            spec,
            value: spec.default,
        }
    }

    pub fn set(&mut self, raw: f64) {
        let clamped = raw.clamp(self.spec.min, self.spec.max);
        let steps = ((clamped - self.spec.min) / self.spec.step).round();
        self.value = (self.spec.min + steps * self.spec.step).clamp(self.spec.min, self.spec.max);
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Two-state control for the Charles River dummy. Any input collapses to
/// exactly 0.0 or 1.0; no other value is representable.
#[derive(Default)]
pub struct Toggle {
    on: bool,
}

impl Toggle {
    pub fn set(&mut self, raw: f64) {
        self.on = raw >= 0.5;
    }

    pub fn value(&self) -> f64 {
        if self.on {
            1.0
        } else {
            0.0
        }
    }
}

/// Build a feature set from `key=value` arguments routed through the controls.
pub fn collect(args: &[String]) -> Result<FeatureSet> {
    let mut features = FeatureSet::defaults();
    for arg in args {
        let (key, raw) = arg.split_once('=').ok_or_else(|| {
            PredictionError::Config(format!("expected key=value, got '{arg}'"))
        })?;
        let value: f64 = raw.parse().map_err(|_| {
            PredictionError::Config(format!("'{raw}' is not a number for feature '{key}'"))
        })?;
        let spec = feature_spec(key)
            .ok_or_else(|| PredictionError::Config(format!("unknown feature '{key}'")))?;

        let adjusted = if spec.key == "chas" {
            let mut toggle = Toggle::default();
            toggle.set(value);
            toggle.value()
        } else {
            let mut slider = Slider::new(spec);
            slider.set(value);
            slider.value()
        };
        features.set(spec.key, adjusted)?;
    }
    Ok(features)
}
