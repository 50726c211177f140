use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    /// Transport-level failure: refused, DNS, unreachable, or the 10s
    /// timeout. The front end pairs this with a remediation checklist.
    #[error("Could not connect to the API: {0}")]
    Connectivity(String),

    /// Non-200 response. 4xx and 5xx are not distinguished.
    #[error("Error getting prediction from API. Status code: {status}")]
    Api { status: u16 },

    /// 200 response whose body is missing or has a malformed `prediction` field.
    #[error("Malformed prediction response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Feature '{key}' out of range: {value} not in [{min}, {max}]")]
    FeatureOutOfRange {
        key: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

pub type Result<T> = std::result::Result<T, PredictionError>;
