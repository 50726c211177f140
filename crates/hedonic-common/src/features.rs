//! Boston-housing feature schema and the request payload built from it.
//!
//! The schema table below is the single source of truth for input bounds,
//! defaults, and radar normalisation ranges. The constants are the observed
//! min/max/mean of each column in the Harrison & Rubinfeld (1978) dataset.

use serde::{Deserialize, Serialize};

use crate::error::{PredictionError, Result};

/// One row of the feature schema: wire key, human label, and the
/// (min, max, default, step) constraints of its input control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
}

pub const FEATURES: [FeatureSpec; 13] = [
    FeatureSpec { key: "crim",    label: "Crime rate",                                              min: 0.00632, max: 88.9762, default: 3.613524,   step: 0.1 },
    FeatureSpec { key: "zn",      label: "Proportion of residential land zoned",                    min: 0.0,     max: 100.0,   default: 11.363636,  step: 1.0 },
    FeatureSpec { key: "indus",   label: "Proportion of non-retail business acres",                 min: 0.46,    max: 27.74,   default: 11.136779,  step: 0.1 },
    FeatureSpec { key: "chas",    label: "Charles River dummy variable",                            min: 0.0,     max: 1.0,     default: 0.0,        step: 1.0 },
    FeatureSpec { key: "nox",     label: "Nitric oxides concentration",                             min: 0.385,   max: 0.871,   default: 0.554695,   step: 0.001 },
    FeatureSpec { key: "rm",      label: "Number of rooms",                                         min: 3.561,   max: 8.78,    default: 6.284634,   step: 0.1 },
    FeatureSpec { key: "age",     label: "Proportion of owner-occupied units built prior to 1940",  min: 2.9,     max: 100.0,   default: 68.574901,  step: 1.0 },
    FeatureSpec { key: "dis",     label: "Weighted distances to employment centres",                min: 1.1296,  max: 12.1265, default: 3.795043,   step: 0.1 },
    FeatureSpec { key: "rad",     label: "Index of accessibility to radial highways",               min: 1.0,     max: 24.0,    default: 9.549407,   step: 1.0 },
    FeatureSpec { key: "tax",     label: "Property-tax rate",                                       min: 187.0,   max: 711.0,   default: 408.237154, step: 1.0 },
    FeatureSpec { key: "ptratio", label: "Pupil-teacher ratio",                                     min: 12.6,    max: 22.0,    default: 18.455534,  step: 0.1 },
    FeatureSpec { key: "b",       label: "Racial composition index (legacy feature)",               min: 0.0,     max: 1.0,     default: 0.0,        step: 0.01 },
    FeatureSpec { key: "lstat",   label: "% lower status of the population",                        min: 1.73,    max: 37.97,   default: 12.653063,  step: 0.01 },
];

/// Dataset-bias note shown alongside the `b` feature. The field is kept under
/// its historical wire key for API compatibility; see the predictor service's
/// request contract.
pub const LEGACY_FEATURE_NOTE: &str =
    "The Boston housing dataset includes a legacy feature related to racial \
     demographics that is widely recognised as ethically problematic. It has \
     been retained for API compatibility and transparency; interpret it with \
     caution. Originally published by Harrison, D. and Rubinfeld, D.L., \
     'Hedonic prices and the demand for clean air', J. Environ. Economics & \
     Management, vol. 5, 81-102, 1978.";

/// Look up a schema row by wire key.
pub fn feature_spec(key: &str) -> Option<&'static FeatureSpec> {
    FEATURES.iter().find(|spec| spec.key == key)
}

/// The 13 named housing attributes submitted per prediction request.
/// Serialises to a flat JSON object keyed exactly as the predictor expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub crim: f64,
    pub zn: f64,
    pub indus: f64,
    /// Charles River dummy: exactly 0.0 or 1.0.
    pub chas: f64,
    pub nox: f64,
    pub rm: f64,
    pub age: f64,
    pub dis: f64,
    pub rad: f64,
    pub tax: f64,
    pub ptratio: f64,
    /// Legacy demographic feature; see [`LEGACY_FEATURE_NOTE`].
    pub b: f64,
    pub lstat: f64,
}

impl FeatureSet {
    /// A fully-populated set with every feature at its schema default.
    pub fn defaults() -> Self {
        let mut set = Self::zeroed();
        for spec in &FEATURES {
            if let Some(slot) = set.field_mut(spec.key) {
                *slot = spec.default;
            }
        }
        set
    }

    fn zeroed() -> Self {
        Self {
            crim: 0.0,
            zn: 0.0,
            indus: 0.0,
            chas: 0.0,
            nox: 0.0,
            rm: 0.0,
            age: 0.0,
            dis: 0.0,
            rad: 0.0,
            tax: 0.0,
            ptratio: 0.0,
            b: 0.0,
            lstat: 0.0,
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "crim" => Some(self.crim),
            "zn" => Some(self.zn),
            "indus" => Some(self.indus),
            "chas" => Some(self.chas),
            "nox" => Some(self.nox),
            "rm" => Some(self.rm),
            "age" => Some(self.age),
            "dis" => Some(self.dis),
            "rad" => Some(self.rad),
            "tax" => Some(self.tax),
            "ptratio" => Some(self.ptratio),
            "b" => Some(self.b),
            "lstat" => Some(self.lstat),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, key: &str) -> Option<&mut f64> {
        match key {
            "crim" => Some(&mut self.crim),
            "zn" => Some(&mut self.zn),
            "indus" => Some(&mut self.indus),
            "chas" => Some(&mut self.chas),
            "nox" => Some(&mut self.nox),
            "rm" => Some(&mut self.rm),
            "age" => Some(&mut self.age),
            "dis" => Some(&mut self.dis),
            "rad" => Some(&mut self.rad),
            "tax" => Some(&mut self.tax),
            "ptratio" => Some(&mut self.ptratio),
            "b" => Some(&mut self.b),
            "lstat" => Some(&mut self.lstat),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: f64) -> Result<()> {
        match self.field_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(PredictionError::Config(format!("unknown feature '{key}'"))),
        }
    }

    /// Check every value against its declared range. Input controls already
    /// clamp, but the set can also be built programmatically.
    pub fn validate(&self) -> Result<()> {
        for spec in &FEATURES {
            let value = self.get(spec.key).unwrap_or(f64::NAN);
            if !(spec.min..=spec.max).contains(&value) {
                return Err(PredictionError::FeatureOutOfRange {
                    key: spec.key,
                    value,
                    min: spec.min,
                    max: spec.max,
                });
            }
        }
        Ok(())
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_has_13_unique_keys() {
        assert_eq!(FEATURES.len(), 13);
        for (i, a) in FEATURES.iter().enumerate() {
            for b in &FEATURES[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn test_schema_ranges_are_well_formed() {
        for spec in &FEATURES {
            assert!(spec.min < spec.max, "{}: empty range", spec.key);
            assert!(
                (spec.min..=spec.max).contains(&spec.default),
                "{}: default outside range",
                spec.key
            );
            assert!(spec.step > 0.0, "{}: non-positive step", spec.key);
        }
    }

    #[test]
    fn test_defaults_validate() {
        FeatureSet::defaults().validate().unwrap();
    }

    #[test]
    fn test_serialises_all_13_wire_keys() {
        let json = serde_json::to_value(FeatureSet::defaults()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 13);
        for spec in &FEATURES {
            assert!(obj.contains_key(spec.key), "missing wire key {}", spec.key);
            assert!(obj[spec.key].is_number());
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let set = FeatureSet::defaults();
        let encoded = serde_json::to_string(&set).unwrap();
        let decoded: FeatureSet = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, set);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut set = FeatureSet::defaults();
        set.nox = 2.0; // max is 0.871
        let err = set.validate().unwrap_err();
        assert!(err.to_string().contains("nox"));
    }

    #[test]
    fn test_get_set_by_key() {
        let mut set = FeatureSet::defaults();
        set.set("tax", 300.0).unwrap();
        assert_eq!(set.get("tax"), Some(300.0));
        assert!(set.set("unknown", 1.0).is_err());
        assert_eq!(set.get("unknown"), None);
    }
}
