//! Rating aggregation
//!
//! Turns the full set of ratings a subject has received into the summary
//! stored on its profile.

use auth::domain::entity::RatingSummary;

use crate::domain::value_object::Rating;

/// Mean rating rounded half away from zero to one decimal, plus the count
///
/// Returns `None` for an empty set; the stored summary is left as is.
pub fn summarize(ratings: &[Rating]) -> Option<RatingSummary> {
    if ratings.is_empty() {
        return None;
    }

    let count = ratings.len() as u64;
    let sum: u64 = ratings.iter().map(|r| u64::from(r.value())).sum();

    // Tenths of the mean, rounded in integer arithmetic: (10 * sum / count) + 0.5
    let tenths = (20 * sum + count) / (2 * count);

    Some(RatingSummary {
        average_rating: tenths as f64 / 10.0,
        total_reviews: u32::try_from(count).unwrap_or(u32::MAX),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(values: &[i64]) -> Vec<Rating> {
        values.iter().map(|&v| Rating::new(v).unwrap()).collect()
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(summarize(&[]), None);
    }

    #[test]
    fn test_mean_and_count() {
        let summary = summarize(&ratings(&[4, 5, 3])).unwrap();
        assert_eq!(summary.average_rating, 4.0);
        assert_eq!(summary.total_reviews, 3);

        let summary = summarize(&ratings(&[5, 3])).unwrap();
        assert_eq!(summary.average_rating, 4.0);
        assert_eq!(summary.total_reviews, 2);

        let summary = summarize(&ratings(&[5])).unwrap();
        assert_eq!(summary.average_rating, 5.0);
    }

    #[test]
    fn test_rounding() {
        // 13 / 3 = 4.333...
        assert_eq!(summarize(&ratings(&[4, 4, 5])).unwrap().average_rating, 4.3);
        // 14 / 3 = 4.666...
        assert_eq!(summarize(&ratings(&[4, 5, 5])).unwrap().average_rating, 4.7);
        // 17 / 4 = 4.25, half rounds up
        assert_eq!(
            summarize(&ratings(&[4, 4, 4, 5])).unwrap().average_rating,
            4.3
        );
        // 9 / 4 = 2.25
        assert_eq!(
            summarize(&ratings(&[1, 2, 3, 3])).unwrap().average_rating,
            2.3
        );
        // 11 / 8 = 1.375
        assert_eq!(
            summarize(&ratings(&[1, 1, 1, 1, 1, 1, 2, 3])).unwrap().average_rating,
            1.4
        );
    }
}
