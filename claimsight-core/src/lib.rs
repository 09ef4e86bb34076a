//! Core types for the Claimsight claim amount predictor.
//!
//! This crate owns the feature schema: the seven customer attributes, their
//! categorical encodings, the canonical column order the regression artifact
//! was trained on, plus configuration and currency display helpers. The
//! column order is the one contract everything else hangs off — a reordered
//! row produces a plausible but wrong prediction with no error raised, so
//! the order lives in exactly one place ([`features::FEATURE_NAMES`]) and
//! both the row assembler and the artifact loader are checked against it.

pub mod config;
pub mod currency;
pub mod defaults;
pub mod features;

pub use config::{AppConfig, ConfigError, ModelConfig, SpeechConfig};
pub use currency::format_amount;
pub use features::{
    ClaimFeatures, FeatureError, HospitalType, Mortality, Sex, SurgeryCategory, FEATURE_NAMES,
    NUM_FEATURES,
};
