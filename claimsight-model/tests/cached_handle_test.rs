//! Cached-handle semantics.
//!
//! The cache is process-global state, so everything lives in a single test
//! function; integration tests run in their own process, isolated from the
//! other test binaries.

use std::io::Write;

#[test]
fn cached_loads_once_and_survives_artifact_removal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("claim_model.json");

    let artifact = serde_json::json!({
        "schema_version": 1,
        "meta": {
            "task": "regression",
            "num_features": 7,
            "feature_names": [
                "AGE", "SEX", "CATEGORY_NAME", "PREAUTH_AMT",
                "HOSP_TYPE", "Mortality", "DAYS_STAYED"
            ]
        },
        "intercept": 0.0,
        "coefficients": [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
    });
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, "{artifact}").unwrap();

    let first = claimsight_model::cached(&path).unwrap();

    // The handle is cached: removing the artifact does not affect later calls,
    // and both calls return the same instance.
    std::fs::remove_file(&path).unwrap();
    let second = claimsight_model::cached(&path).unwrap();
    assert!(std::ptr::eq(first, second));

    let row = [42.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
    assert_eq!(second.predict_row(&row).unwrap(), 42.0);
}
