//! Review Entity
//!
//! Reviews are append-only. The reviewer is recorded as submitted and is
//! not checked against the identity store.

use auth::domain::value_object::UserType;
use chrono::{DateTime, Utc};
use kernel::id::{ReviewId, UserId};

use crate::domain::value_object::Rating;
use crate::error::{ReviewError, ReviewResult};

/// Maximum comment length, in characters
pub const COMMENT_MAX_CHARS: usize = 2000;

/// Review entity
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub review_id: ReviewId,
    pub reviewed_user_id: UserId,
    pub reviewer_user_id: UserId,
    pub reviewer_name: String,
    pub reviewer_type: UserType,
    pub rating: Rating,
    pub comment: String,
    pub collaboration_type: Option<String>,
    pub date_of_service: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Unvalidated review fields
#[derive(Debug, Clone)]
pub struct ReviewDraft {
    pub reviewed_user_id: UserId,
    pub reviewer_user_id: UserId,
    pub reviewer_name: String,
    pub reviewer_type: UserType,
    pub rating: i64,
    pub comment: String,
    pub collaboration_type: Option<String>,
    pub date_of_service: Option<DateTime<Utc>>,
}

impl Review {
    /// Validate a draft into a new review stamped with the current time
    pub fn new(draft: ReviewDraft) -> ReviewResult<Self> {
        let rating = Rating::new(draft.rating)?;

        let reviewer_name = draft.reviewer_name.trim();
        if reviewer_name.is_empty() {
            return Err(ReviewError::Validation(
                "reviewer_name must not be empty".to_string(),
            ));
        }

        let comment = draft.comment.trim();
        if comment.is_empty() {
            return Err(ReviewError::Validation(
                "comment must not be empty".to_string(),
            ));
        }
        if comment.chars().count() > COMMENT_MAX_CHARS {
            return Err(ReviewError::Validation(format!(
                "comment must be at most {COMMENT_MAX_CHARS} characters"
            )));
        }

        let collaboration_type = draft
            .collaboration_type
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            review_id: ReviewId::new(),
            reviewed_user_id: draft.reviewed_user_id,
            reviewer_user_id: draft.reviewer_user_id,
            reviewer_name: reviewer_name.to_string(),
            reviewer_type: draft.reviewer_type,
            rating,
            comment: comment.to_string(),
            collaboration_type,
            date_of_service: draft.date_of_service,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ReviewDraft {
        ReviewDraft {
            reviewed_user_id: UserId::new(),
            reviewer_user_id: UserId::new(),
            reviewer_name: "  Clínica del Norte ".to_string(),
            reviewer_type: UserType::Company,
            rating: 5,
            comment: "Excelente trabajo en quirófano".to_string(),
            collaboration_type: Some("  ".to_string()),
            date_of_service: None,
        }
    }

    #[test]
    fn test_new_trims_fields() {
        let review = Review::new(draft()).unwrap();
        assert_eq!(review.reviewer_name, "Clínica del Norte");
        assert_eq!(review.rating.value(), 5);
        assert_eq!(review.collaboration_type, None);
    }

    #[test]
    fn test_rating_out_of_range() {
        for rating in [0, 6, -1] {
            let result = Review::new(ReviewDraft { rating, ..draft() });
            assert!(matches!(result, Err(ReviewError::Validation(_))));
        }
    }

    #[test]
    fn test_blank_text_rejected() {
        let blank_name = ReviewDraft {
            reviewer_name: " ".to_string(),
            ..draft()
        };
        assert!(Review::new(blank_name).is_err());

        let blank_comment = ReviewDraft {
            comment: "\n".to_string(),
            ..draft()
        };
        assert!(Review::new(blank_comment).is_err());

        let long_comment = ReviewDraft {
            comment: "a".repeat(COMMENT_MAX_CHARS + 1),
            ..draft()
        };
        assert!(Review::new(long_comment).is_err());
    }
}
