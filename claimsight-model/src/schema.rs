//! Schema types for the serialized model artifact.
//!
//! Schema types are separate from the runtime [`LinearModel`] so the on-disk
//! format can evolve independently and every load goes through validation.
//! The artifact records the feature names in training order; validation
//! compares them column by column against [`FEATURE_NAMES`], which turns the
//! silent-reorder hazard into a load-time error.
//!
//! [`LinearModel`]: crate::LinearModel
//! [`FEATURE_NAMES`]: claimsight_core::FEATURE_NAMES

use serde::{Deserialize, Serialize};

use claimsight_core::{FEATURE_NAMES, NUM_FEATURES};

use crate::error::ModelError;

/// Current artifact schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Task type for model output interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    Regression,
}

/// Artifact metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMeta {
    /// Task type.
    pub task: TaskKind,
    /// Number of features the model was trained on.
    pub num_features: usize,
    /// Feature names in training order.
    pub feature_names: Vec<String>,
}

/// Serialized linear regression artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactSchema {
    /// Schema version for forward compatibility.
    pub schema_version: u32,
    /// Metadata describing the training frame.
    pub meta: ArtifactMeta,
    /// Regression intercept.
    pub intercept: f64,
    /// One coefficient per feature, in training order.
    pub coefficients: Vec<f64>,
}

impl ArtifactSchema {
    /// Validate the artifact against the canonical feature schema.
    ///
    /// # Errors
    /// Returns [`ModelError`] on version, count, or column-order mismatch.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ModelError::UnsupportedVersion {
                actual: self.schema_version,
                supported: SCHEMA_VERSION,
            });
        }
        if self.meta.task != TaskKind::Regression {
            return Err(ModelError::UnsupportedTask);
        }
        if self.meta.num_features != NUM_FEATURES || self.coefficients.len() != NUM_FEATURES {
            return Err(ModelError::CoefficientCount {
                expected: NUM_FEATURES,
                actual: self.coefficients.len(),
            });
        }
        if self.meta.feature_names.len() != NUM_FEATURES {
            return Err(ModelError::CoefficientCount {
                expected: NUM_FEATURES,
                actual: self.meta.feature_names.len(),
            });
        }
        for (position, (actual, expected)) in self
            .meta
            .feature_names
            .iter()
            .zip(FEATURE_NAMES.iter())
            .enumerate()
        {
            if actual != expected {
                return Err(ModelError::FeatureOrder {
                    position,
                    expected: (*expected).to_string(),
                    actual: actual.clone(),
                });
            }
        }
        Ok(())
    }
}
