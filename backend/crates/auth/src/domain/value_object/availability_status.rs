use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a professional is taking new work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    #[default]
    Available,
    Busy,
    Unavailable,
}

impl AvailabilityStatus {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use AvailabilityStatus::*;
        match self {
            Available => "available",
            Busy => "busy",
            Unavailable => "unavailable",
        }
    }

    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use AvailabilityStatus::*;
        match code {
            "available" => Some(Available),
            "busy" => Some(Busy),
            "unavailable" => Some(Unavailable),
            _ => None,
        }
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
