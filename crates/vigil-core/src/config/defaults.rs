// Single source of truth for all default values.

// --- Engine ---
pub const DEFAULT_SHORT_TAU_HOURS: f64 = 12.0;
pub const DEFAULT_LONG_TAU_HOURS: f64 = 72.0;
pub const DEFAULT_RISK_TAU_HOURS: f64 = 48.0;
pub const DEFAULT_ALERT_RISK_THRESHOLD: f64 = 0.7;
pub const DEFAULT_ALERT_Z_THRESHOLD: f64 = 2.0;
pub const DEFAULT_ELEVATED_RISK_THRESHOLD: f64 = 0.35;
pub const DEFAULT_ELEVATED_Z_THRESHOLD: f64 = 1.0;
pub const DEFAULT_CRITICAL_FLAGS: &[&str] = &[
    "self_harm",
    "suicidal_ideation",
    "harm_to_others",
    "abuse",
    "medical_emergency",
];

// --- Seasonality ---
pub const DEFAULT_SEASONALITY_ENABLED: bool = true;
pub const DEFAULT_SEASONALITY_HORIZON_HOURS: f64 = 168.0; // one week
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 0;

// --- Keywords ---
pub const DEFAULT_KEYWORDS_ENABLED: bool = true;
pub const DEFAULT_KEYWORD_INCREMENT: f64 = 1.0;
pub const DEFAULT_KEYWORD_TOP_LIMIT: usize = 10;

// --- Spikes ---
pub const DEFAULT_SPIKE_Z_THRESHOLD: f64 = 1.5;
pub const DEFAULT_SPIKE_RISK_THRESHOLD: f64 = 0.5;
pub const DEFAULT_MAX_SPIKES_PER_USER: usize = 500;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "vigil.db";
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
