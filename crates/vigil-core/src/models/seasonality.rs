use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Recurring calendar period a seasonality bucket is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonalityKind {
    /// Day of week, 0 = Monday .. 6 = Sunday.
    #[serde(rename = "dow")]
    DayOfWeek,
    /// Hour of day, 0 .. 23.
    #[serde(rename = "hour")]
    HourOfDay,
}

impl SeasonalityKind {
    pub const ALL: [SeasonalityKind; 2] = [SeasonalityKind::DayOfWeek, SeasonalityKind::HourOfDay];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::DayOfWeek => "dow",
            Self::HourOfDay => "hour",
        }
    }

    /// Number of distinct periods for this kind.
    pub fn period_count(self) -> u32 {
        match self {
            Self::DayOfWeek => 7,
            Self::HourOfDay => 24,
        }
    }

    /// Period index of a local wall-clock time.
    pub fn period_of(self, local: &NaiveDateTime) -> u32 {
        match self {
            Self::DayOfWeek => local.weekday().num_days_from_monday(),
            Self::HourOfDay => local.hour(),
        }
    }
}

impl fmt::Display for SeasonalityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
