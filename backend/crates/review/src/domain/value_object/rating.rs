//! Rating Value Object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ReviewError, ReviewResult};

/// Star rating in `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> ReviewResult<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ReviewError::Validation(format!(
                "Rating must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = ReviewError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for i64 {
    fn from(rating: Rating) -> Self {
        i64::from(rating.0)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Rating::new(1).unwrap().value(), 1);
        assert_eq!(Rating::new(5).unwrap().value(), 5);
        assert!(matches!(Rating::new(0), Err(ReviewError::Validation(_))));
        assert!(matches!(Rating::new(6), Err(ReviewError::Validation(_))));
        assert!(matches!(Rating::new(-3), Err(ReviewError::Validation(_))));
        assert!(Rating::new(i64::MAX).is_err());
    }

    #[test]
    fn test_serde() {
        let rating: Rating = serde_json::from_str("4").unwrap();
        assert_eq!(rating.value(), 4);
        assert_eq!(serde_json::to_string(&rating).unwrap(), "4");
        assert!(serde_json::from_str::<Rating>("7").is_err());
    }
}
