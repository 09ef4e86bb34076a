//! End-to-end prediction flow against a real artifact on disk.

use claimsight_core::{AppConfig, ModelConfig, SpeechConfig};
use claimsight_tui::app::Outcome;
use claimsight_tui::App;

#[test]
fn default_form_predicts_through_the_cached_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("claim_model.json");

    // intercept 500 + age*10 + preauth*0.1 with the default form
    // (age 30, preauth 10000, days 3) → 500 + 300 + 1000 = 1800.
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
        "intercept": 500.0,
        "coefficients": [10.0, 0.0, 0.0, 0.1, 0.0, 0.0, 0.0]
    });
    std::fs::write(&path, artifact.to_string()).unwrap();

    let config = AppConfig {
        model: ModelConfig {
            path: path.display().to_string(),
        },
        speech: SpeechConfig {
            enabled: false,
            ..SpeechConfig::default()
        },
    };

    let mut app = App::with_narrator(config, None);
    app.predict().unwrap();

    match app.outcome() {
        Some(Outcome::Predicted {
            input_row,
            formatted,
            audio_path,
        }) => {
            assert_eq!(*input_row, [30.0, 0.0, 0.0, 10_000.0, 0.0, 0.0, 3.0]);
            assert_eq!(formatted, "₹1,800.00");
            assert!(audio_path.is_none());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}
