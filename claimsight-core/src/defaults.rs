// Single source of truth for bounds and default values.

// --- Input bounds ---
pub const AGE_MIN: u32 = 1;
pub const AGE_MAX: u32 = 110;
pub const PREAUTH_MIN: f64 = 0.0;
pub const PREAUTH_MAX: f64 = 1_000_000.0;
pub const DAYS_STAYED_MIN: u32 = 0;
pub const DAYS_STAYED_MAX: u32 = 365;
pub const SURGERY_CATEGORY_COUNT: u8 = 12;

// --- Form defaults ---
pub const DEFAULT_AGE: u32 = 30;
pub const DEFAULT_PREAUTH: f64 = 10_000.0;
pub const DEFAULT_DAYS_STAYED: u32 = 3;

// --- Model ---
pub const DEFAULT_MODEL_PATH: &str = "models/claim_model.json";

// --- Speech ---
pub const DEFAULT_SPEECH_ENABLED: bool = true;
pub const DEFAULT_SPEECH_LANG: &str = "en";
pub const DEFAULT_AUDIO_DIR: &str = "audio";

// --- Config file ---
pub const DEFAULT_CONFIG_FILENAME: &str = "claimsight.toml";
