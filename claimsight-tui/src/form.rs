//! Claim form state.
//!
//! One focusable control per feature plus the action key. Numeric controls
//! clamp at the input boundary: the age slider cannot step outside its
//! range, and typed amounts are clamped into range on commit. The form never
//! validates a value after assembly; [`ClaimFeatures::new`] is only a
//! backstop for the invariants the controls already enforce.

use claimsight_core::{
    defaults, ClaimFeatures, HospitalType, Mortality, Sex, SurgeryCategory,
};

/// Focusable controls in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Age,
    Sex,
    Category,
    Preauth,
    HospitalType,
    Mortality,
    DaysStayed,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Age,
        Field::Sex,
        Field::Category,
        Field::Preauth,
        Field::HospitalType,
        Field::Mortality,
        Field::DaysStayed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Sex => "Sex",
            Field::Category => "Surgery Category",
            Field::Preauth => "Pre-Authorization Amount",
            Field::HospitalType => "Hospital Type",
            Field::Mortality => "Mortality",
            Field::DaysStayed => "Days Stayed",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Field::Age => "←/→ adjust (1-110)",
            Field::Sex => "←/→ toggle",
            Field::Category => "←/→ select (0-11)",
            Field::Preauth => "type amount (0-1,000,000)",
            Field::HospitalType => "←/→ toggle",
            Field::Mortality => "←/→ toggle",
            Field::DaysStayed => "type days (0-365)",
        }
    }

    /// Whether this control takes typed digits rather than arrow adjustment.
    pub fn is_text_input(self) -> bool {
        matches!(self, Field::Preauth | Field::DaysStayed)
    }
}

/// State behind the seven input controls.
#[derive(Debug, Clone)]
pub struct ClaimForm {
    pub age: u32,
    pub sex: Sex,
    pub category: SurgeryCategory,
    pub preauth_input: String,
    pub hospital_type: HospitalType,
    pub mortality: Mortality,
    pub days_input: String,
    pub selected: usize,
}

impl Default for ClaimForm {
    fn default() -> Self {
        Self {
            age: defaults::DEFAULT_AGE,
            sex: Sex::default(),
            category: SurgeryCategory::default(),
            preauth_input: format!("{}", defaults::DEFAULT_PREAUTH),
            hospital_type: HospitalType::default(),
            mortality: Mortality::default(),
            days_input: defaults::DEFAULT_DAYS_STAYED.to_string(),
            selected: 0,
        }
    }
}

impl ClaimForm {
    pub fn selected_field(&self) -> Field {
        Field::ALL[self.selected]
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % Field::ALL.len();
    }

    pub fn prev_field(&mut self) {
        if self.selected == 0 {
            self.selected = Field::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Arrow adjustment for the focused control. Sliders clamp at their
    /// bounds; selectors cycle; radios toggle; text inputs ignore arrows.
    pub fn adjust(&mut self, delta: i32) {
        match self.selected_field() {
            Field::Age => {
                let next = self.age.saturating_add_signed(delta);
                self.age = next.clamp(defaults::AGE_MIN, defaults::AGE_MAX);
            }
            Field::Sex => self.sex = self.sex.toggle(),
            Field::Category => {
                self.category = if delta >= 0 {
                    self.category.next()
                } else {
                    self.category.prev()
                };
            }
            Field::HospitalType => self.hospital_type = self.hospital_type.toggle(),
            Field::Mortality => self.mortality = self.mortality.toggle(),
            Field::Preauth | Field::DaysStayed => {}
        }
    }

    /// Typed input for the focused numeric control.
    pub fn input_char(&mut self, c: char) {
        let buffer = match self.selected_field() {
            Field::Preauth => &mut self.preauth_input,
            Field::DaysStayed => &mut self.days_input,
            _ => return,
        };
        if c.is_ascii_digit() || (c == '.' && !buffer.contains('.')) {
            buffer.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        match self.selected_field() {
            Field::Preauth => {
                self.preauth_input.pop();
            }
            Field::DaysStayed => {
                self.days_input.pop();
            }
            _ => {}
        }
    }

    /// Assemble [`ClaimFeatures`] from the current control state.
    ///
    /// Typed amounts are clamped into their bounds here, at the boundary;
    /// everything else is in range by construction.
    ///
    /// # Errors
    /// Returns a user-facing message for an unparseable buffer.
    pub fn commit(&self) -> Result<ClaimFeatures, String> {
        let preauth: f64 = if self.preauth_input.is_empty() {
            defaults::PREAUTH_MIN
        } else {
            self.preauth_input
                .parse()
                .map_err(|_| format!("not a number: {:?}", self.preauth_input))?
        };
        let preauth = preauth.clamp(defaults::PREAUTH_MIN, defaults::PREAUTH_MAX);

        let days: u32 = if self.days_input.is_empty() {
            defaults::DAYS_STAYED_MIN
        } else {
            self.days_input
                .parse()
                .map_err(|_| format!("not a whole number: {:?}", self.days_input))?
        };
        let days = days.clamp(defaults::DAYS_STAYED_MIN, defaults::DAYS_STAYED_MAX);

        ClaimFeatures::new(
            self.age,
            self.sex,
            self.category,
            preauth,
            self.hospital_type,
            self.mortality,
            days,
        )
        .map_err(|e| e.to_string())
    }
}
