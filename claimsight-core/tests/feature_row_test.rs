//! Feature row ordering contract tests.

use claimsight_core::{
    ClaimFeatures, HospitalType, Mortality, Sex, SurgeryCategory, FEATURE_NAMES, NUM_FEATURES,
};
use proptest::prelude::*;

#[test]
fn canonical_column_order() {
    assert_eq!(
        FEATURE_NAMES,
        [
            "AGE",
            "SEX",
            "CATEGORY_NAME",
            "PREAUTH_AMT",
            "HOSP_TYPE",
            "Mortality",
            "DAYS_STAYED",
        ]
    );
    assert_eq!(NUM_FEATURES, 7);
}

#[test]
fn worked_example_row() {
    let features = ClaimFeatures::new(
        30,
        Sex::Male,
        SurgeryCategory::new(0).unwrap(),
        10_000.0,
        HospitalType::Government,
        Mortality::No,
        3,
    )
    .unwrap();

    assert_eq!(features.to_row(), [30.0, 1.0, 0.0, 10_000.0, 0.0, 0.0, 3.0]);
}

fn arb_features() -> impl Strategy<Value = ClaimFeatures> {
    (
        1u32..=110,
        prop_oneof![Just(Sex::Female), Just(Sex::Male)],
        0u8..12,
        0.0f64..=1_000_000.0,
        prop_oneof![Just(HospitalType::Government), Just(HospitalType::Private)],
        prop_oneof![Just(Mortality::No), Just(Mortality::Yes)],
        0u32..=365,
    )
        .prop_map(|(age, sex, cat, preauth, hosp, mortality, days)| {
            ClaimFeatures::new(
                age,
                sex,
                SurgeryCategory::new(cat).unwrap(),
                preauth,
                hosp,
                mortality,
                days,
            )
            .unwrap()
        })
}

proptest! {
    /// Every position of the assembled row corresponds to the field named at
    /// the same position of `FEATURE_NAMES`, for all valid inputs.
    #[test]
    fn row_positions_match_fields(features in arb_features()) {
        let row = features.to_row();
        prop_assert_eq!(row[0], f64::from(features.age));
        prop_assert_eq!(row[1], f64::from(features.sex.encode()));
        prop_assert_eq!(row[2], f64::from(features.category.index()));
        prop_assert_eq!(row[3], features.preauth_amount);
        prop_assert_eq!(row[4], f64::from(features.hospital_type.encode()));
        prop_assert_eq!(row[5], f64::from(features.mortality.encode()));
        prop_assert_eq!(row[6], f64::from(features.days_stayed));
    }

    /// Categorical encodings never leave {0, 1} and the category index never
    /// leaves 0..12.
    #[test]
    fn encoded_values_stay_in_range(features in arb_features()) {
        let row = features.to_row();
        prop_assert!(row[1] == 0.0 || row[1] == 1.0);
        prop_assert!(row[2] >= 0.0 && row[2] < 12.0);
        prop_assert!(row[4] == 0.0 || row[4] == 1.0);
        prop_assert!(row[5] == 0.0 || row[5] == 1.0);
    }
}
