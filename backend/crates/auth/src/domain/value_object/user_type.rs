use serde::{Deserialize, Serialize};
use std::fmt;

/// Account kind; selects which profile variant a user owns
///
/// Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    #[default]
    Professional,
    Company,
    Supplier,
}

impl UserType {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserType::*;
        match self {
            Professional => "professional",
            Company => "company",
            Supplier => "supplier",
        }
    }

    /// Parse a wire or storage tag; unknown tags are `None`
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        use UserType::*;
        match code {
            "professional" => Some(Professional),
            "company" => Some(Company),
            "supplier" => Some(Supplier),
            _ => None,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
