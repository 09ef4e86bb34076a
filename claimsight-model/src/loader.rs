//! Artifact loading and the process-wide cached handle.

use std::path::Path;

use once_cell::sync::OnceCell;

use crate::error::ModelError;
use crate::linear::LinearModel;
use crate::schema::ArtifactSchema;

static MODEL: OnceCell<LinearModel> = OnceCell::new();

/// Read, parse, and validate a model artifact.
///
/// # Errors
/// Returns [`ModelError`] on read, parse, or validation failure.
pub fn load(path: &Path) -> Result<LinearModel, ModelError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let schema: ArtifactSchema = serde_json::from_str(&raw)?;
    let model = LinearModel::from_schema(schema)?;
    tracing::info!(
        path = %path.display(),
        n_features = model.n_features(),
        "loaded regression artifact"
    );
    Ok(model)
}

/// Process-wide cached model handle.
///
/// Loaded lazily on the first call and immutable afterwards; the artifact
/// never changes during a run, so there is no reinitialization path. A load
/// failure is not cached, so a later call can succeed once the artifact is
/// in place.
///
/// # Errors
/// Returns [`ModelError`] if the first load fails.
pub fn cached(path: &Path) -> Result<&'static LinearModel, ModelError> {
    MODEL.get_or_try_init(|| load(path))
}
