//! Linear regression prediction.

use claimsight_core::ClaimFeatures;

use crate::error::ModelError;
use crate::schema::ArtifactSchema;

/// Runtime linear regression model: `intercept + coefficients · row`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearModel {
    /// Build from a validated artifact.
    ///
    /// # Errors
    /// Returns [`ModelError`] if the artifact fails validation.
    pub fn from_schema(schema: ArtifactSchema) -> Result<Self, ModelError> {
        schema.validate()?;
        Ok(Self {
            intercept: schema.intercept,
            coefficients: schema.coefficients,
        })
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predict from an ordered feature row.
    ///
    /// The single guarded operation of the system: a row whose shape does
    /// not match the trained coefficient count is rejected, as is any
    /// non-finite value.
    ///
    /// # Errors
    /// Returns [`ModelError::RowShape`] or [`ModelError::NonFiniteInput`].
    pub fn predict_row(&self, row: &[f64]) -> Result<f64, ModelError> {
        if row.len() != self.coefficients.len() {
            return Err(ModelError::RowShape {
                expected: self.coefficients.len(),
                actual: row.len(),
            });
        }
        if let Some(position) = row.iter().position(|v| !v.is_finite()) {
            return Err(ModelError::NonFiniteInput(position));
        }

        let mut sum = self.intercept;
        for (value, coefficient) in row.iter().zip(self.coefficients.iter()) {
            sum += value * coefficient;
        }
        Ok(sum)
    }

    /// Predict from typed features, assembling the row in canonical order.
    ///
    /// # Errors
    /// Same as [`LinearModel::predict_row`].
    pub fn predict(&self, features: &ClaimFeatures) -> Result<f64, ModelError> {
        self.predict_row(&features.to_row())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LinearModel {
        LinearModel {
            intercept: 100.0,
            coefficients: vec![1.0, 2.0, 3.0, 0.5, -1.0, 10.0, 4.0],
        }
    }

    #[test]
    fn predict_row_is_dot_product_plus_intercept() {
        let row = [30.0, 1.0, 0.0, 10_000.0, 0.0, 0.0, 3.0];
        // 100 + 30*1 + 1*2 + 0*3 + 10000*0.5 + 0*-1 + 0*10 + 3*4
        assert_eq!(model().predict_row(&row).unwrap(), 5144.0);
    }

    #[test]
    fn short_row_is_rejected() {
        let err = model().predict_row(&[1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::RowShape {
                expected: 7,
                actual: 2
            }
        ));
    }

    #[test]
    fn non_finite_row_is_rejected() {
        let row = [30.0, 1.0, f64::NAN, 10_000.0, 0.0, 0.0, 3.0];
        assert!(matches!(
            model().predict_row(&row),
            Err(ModelError::NonFiniteInput(2))
        ));
    }
}
