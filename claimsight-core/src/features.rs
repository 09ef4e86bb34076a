//! Claim feature schema and categorical encodings.
//!
//! The regression artifact was trained on a seven-column frame in a fixed
//! order. [`FEATURE_NAMES`] is that order; [`ClaimFeatures::to_row`] is the
//! only place a row is assembled. Categorical encodings are explicit
//! `encode()` methods on the enums, deliberately decoupled from the display
//! labels the UI shows, so renaming a label can never shift an encoding.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Canonical column names in training order.
pub const FEATURE_NAMES: [&str; 7] = [
    "AGE",
    "SEX",
    "CATEGORY_NAME",
    "PREAUTH_AMT",
    "HOSP_TYPE",
    "Mortality",
    "DAYS_STAYED",
];

/// Number of columns in the training frame.
pub const NUM_FEATURES: usize = FEATURE_NAMES.len();

/// Out-of-range feature input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeatureError {
    #[error("age out of range: {0} (expected {min}..={max})", min = defaults::AGE_MIN, max = defaults::AGE_MAX)]
    AgeOutOfRange(u32),

    #[error("pre-authorization amount out of range: {0} (expected {min}..={max})", min = defaults::PREAUTH_MIN, max = defaults::PREAUTH_MAX)]
    PreauthOutOfRange(f64),

    #[error("days stayed out of range: {0} (expected {min}..={max})", min = defaults::DAYS_STAYED_MIN, max = defaults::DAYS_STAYED_MAX)]
    DaysStayedOutOfRange(u32),

    #[error("surgery category out of range: {0} (expected 0..{count})", count = defaults::SURGERY_CATEGORY_COUNT)]
    CategoryOutOfRange(u8),
}

/// Customer sex. Encoded Female=0, Male=1, matching the training data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[default]
    Female,
    Male,
}

impl Sex {
    /// Integer encoding used by the model.
    pub fn encode(self) -> u8 {
        match self {
            Sex::Female => 0,
            Sex::Male => 1,
        }
    }

    /// Display label for the form.
    pub fn label(self) -> &'static str {
        match self {
            Sex::Female => "Female",
            Sex::Male => "Male",
        }
    }

    /// Radio-style toggle to the other value.
    pub fn toggle(self) -> Self {
        match self {
            Sex::Female => Sex::Male,
            Sex::Male => Sex::Female,
        }
    }
}

/// Hospital type. Encoded Government=0, Private=1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HospitalType {
    #[default]
    Government,
    Private,
}

impl HospitalType {
    pub fn encode(self) -> u8 {
        match self {
            HospitalType::Government => 0,
            HospitalType::Private => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HospitalType::Government => "Government",
            HospitalType::Private => "Private",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            HospitalType::Government => HospitalType::Private,
            HospitalType::Private => HospitalType::Government,
        }
    }
}

/// Whether the stay ended in mortality. Encoded No=0, Yes=1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mortality {
    #[default]
    No,
    Yes,
}

impl Mortality {
    pub fn encode(self) -> u8 {
        match self {
            Mortality::No => 0,
            Mortality::Yes => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mortality::No => "No",
            Mortality::Yes => "Yes",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Mortality::No => Mortality::Yes,
            Mortality::Yes => Mortality::No,
        }
    }
}

/// Surgery category index, 0..12.
///
/// The training data carries these only as bare indices; no semantic labels
/// survive in the artifact, so the UI displays them as "Category N".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SurgeryCategory(u8);

impl SurgeryCategory {
    pub const COUNT: u8 = defaults::SURGERY_CATEGORY_COUNT;

    /// Construct from a raw index, rejecting anything outside 0..COUNT.
    pub fn new(index: u8) -> Result<Self, FeatureError> {
        if index < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(FeatureError::CategoryOutOfRange(index))
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Selector-style cycle forward.
    pub fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }

    /// Selector-style cycle backward.
    pub fn prev(self) -> Self {
        Self((self.0 + Self::COUNT - 1) % Self::COUNT)
    }
}

impl TryFrom<u8> for SurgeryCategory {
    type Error = FeatureError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<SurgeryCategory> for u8 {
    fn from(category: SurgeryCategory) -> u8 {
        category.0
    }
}

impl std::fmt::Display for SurgeryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Category {}", self.0)
    }
}

/// One customer's attributes for a single prediction.
///
/// Constructed fresh per prediction request and discarded after use; never
/// persisted anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimFeatures {
    pub age: u32,
    pub sex: Sex,
    pub category: SurgeryCategory,
    pub preauth_amount: f64,
    pub hospital_type: HospitalType,
    pub mortality: Mortality,
    pub days_stayed: u32,
}

impl ClaimFeatures {
    /// Construct with bounds validation.
    ///
    /// # Errors
    /// Returns the first out-of-range field.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        age: u32,
        sex: Sex,
        category: SurgeryCategory,
        preauth_amount: f64,
        hospital_type: HospitalType,
        mortality: Mortality,
        days_stayed: u32,
    ) -> Result<Self, FeatureError> {
        if !(defaults::AGE_MIN..=defaults::AGE_MAX).contains(&age) {
            return Err(FeatureError::AgeOutOfRange(age));
        }
        if !preauth_amount.is_finite()
            || !(defaults::PREAUTH_MIN..=defaults::PREAUTH_MAX).contains(&preauth_amount)
        {
            return Err(FeatureError::PreauthOutOfRange(preauth_amount));
        }
        if days_stayed > defaults::DAYS_STAYED_MAX {
            return Err(FeatureError::DaysStayedOutOfRange(days_stayed));
        }

        Ok(Self {
            age,
            sex,
            category,
            preauth_amount,
            hospital_type,
            mortality,
            days_stayed,
        })
    }

    /// Assemble the ordered feature row.
    ///
    /// Position `i` corresponds to `FEATURE_NAMES[i]`. This is the only
    /// place a row is built; do not hand-roll the order elsewhere.
    pub fn to_row(&self) -> [f64; NUM_FEATURES] {
        [
            f64::from(self.age),
            f64::from(self.sex.encode()),
            f64::from(self.category.index()),
            self.preauth_amount,
            f64::from(self.hospital_type.encode()),
            f64::from(self.mortality.encode()),
            f64::from(self.days_stayed),
        ]
    }
}

impl Default for ClaimFeatures {
    fn default() -> Self {
        Self {
            age: defaults::DEFAULT_AGE,
            sex: Sex::default(),
            category: SurgeryCategory::default(),
            preauth_amount: defaults::DEFAULT_PREAUTH,
            hospital_type: HospitalType::default(),
            mortality: Mortality::default(),
            days_stayed: defaults::DEFAULT_DAYS_STAYED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodings_are_total_and_stable() {
        assert_eq!(Sex::Female.encode(), 0);
        assert_eq!(Sex::Male.encode(), 1);
        assert_eq!(HospitalType::Government.encode(), 0);
        assert_eq!(HospitalType::Private.encode(), 1);
        assert_eq!(Mortality::No.encode(), 0);
        assert_eq!(Mortality::Yes.encode(), 1);
    }

    #[test]
    fn category_rejects_out_of_range() {
        assert!(SurgeryCategory::new(0).is_ok());
        assert!(SurgeryCategory::new(11).is_ok());
        assert!(matches!(
            SurgeryCategory::new(12),
            Err(FeatureError::CategoryOutOfRange(12))
        ));
    }

    #[test]
    fn category_cycles_without_leaving_range() {
        let mut cat = SurgeryCategory::new(11).unwrap();
        cat = cat.next();
        assert_eq!(cat.index(), 0);
        cat = cat.prev();
        assert_eq!(cat.index(), 11);
    }

    #[test]
    fn age_boundaries() {
        let mk = |age| {
            ClaimFeatures::new(
                age,
                Sex::Female,
                SurgeryCategory::default(),
                10_000.0,
                HospitalType::Government,
                Mortality::No,
                3,
            )
        };
        assert!(mk(1).is_ok());
        assert!(mk(110).is_ok());
        assert!(matches!(mk(0), Err(FeatureError::AgeOutOfRange(0))));
        assert!(matches!(mk(111), Err(FeatureError::AgeOutOfRange(111))));
    }

    #[test]
    fn preauth_rejects_nan_and_overflow() {
        let mk = |amt| {
            ClaimFeatures::new(
                30,
                Sex::Female,
                SurgeryCategory::default(),
                amt,
                HospitalType::Government,
                Mortality::No,
                3,
            )
        };
        assert!(mk(0.0).is_ok());
        assert!(mk(1_000_000.0).is_ok());
        assert!(mk(f64::NAN).is_err());
        assert!(mk(1_000_000.01).is_err());
    }
}
