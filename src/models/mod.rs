pub mod posts;
pub mod topics;

use serde::{Deserialize, Serialize};

/// Vote counters attached to a topic or post.
///
/// The API omits the structure entirely for unvoted items and has been
/// seen with partial counters, so both fields are optional.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Votes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_up: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_down: Option<i64>,
}

impl Votes {
    /// Net score of the counters, `total_up - total_down`.
    ///
    /// A missing counter makes the whole structure count as unvoted,
    /// score 0. Never fails.
    pub fn score(&self) -> i64 {
        match (self.total_up, self.total_down) {
            (Some(up), Some(down)) => up - down,
            _ => 0,
        }
    }
}

/// Net score for a record's optional vote structure.
///
/// Unvoted items are a normal condition, not an error: absence is score 0.
pub(crate) fn score_of(votes: Option<&Votes>) -> i64 {
    votes.map_or(0, Votes::score)
}

/// Clamps a per-page value into the range the API accepts.
pub(crate) fn safe_per_page(limit: usize) -> usize {
    limit.clamp(5, 40)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn votes(json: &str) -> Votes {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn score_is_up_minus_down() {
        assert_eq!(votes(r#"{"total_up": 7, "total_down": 2}"#).score(), 5);
        assert_eq!(votes(r#"{"total_up": 1, "total_down": 4}"#).score(), -3);
    }

    #[test]
    fn partial_counters_score_zero() {
        assert_eq!(votes(r#"{"total_up": 7}"#).score(), 0);
        assert_eq!(votes(r#"{"total_down": 2}"#).score(), 0);
        assert_eq!(votes("{}").score(), 0);
    }

    #[test]
    fn absent_structure_scores_zero() {
        assert_eq!(score_of(None), 0);
        assert_eq!(score_of(Some(&votes(r#"{"total_up": 3, "total_down": 1}"#))), 2);
    }

    #[test]
    fn per_page_is_clamped() {
        assert_eq!(safe_per_page(1), 5);
        assert_eq!(safe_per_page(20), 20);
        assert_eq!(safe_per_page(100), 40);
    }
}
