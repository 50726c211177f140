//! hedonic-client — HTTP client for the house-price predictor service and
//! the radar-profile normaliser derived from the same feature set.

pub mod client;
pub mod radar;

pub use client::{ClientConfig, PredictedPrice, PredictionClient, CONNECTIVITY_CHECKLIST};
pub use radar::{radar_profile, RADAR_LABELS};
