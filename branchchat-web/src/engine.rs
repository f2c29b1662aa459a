//! Pure derivations over the review datasets.
//!
//! Everything here is referentially transparent: the same input array and
//! filter selection always produce the same projection, and the source
//! arrays are never mutated.

use shared::models::{Review, Sentiment, StarEntry, VoteEntry};
use std::collections::BTreeSet;

/// One bar of a chart: a label and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f32,
}

/// One bar of a vote-distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionPoint {
    pub star: u8,
    pub count: u32,
}

/// Mean star rating; 0.0 for an empty slice, never NaN.
pub fn average_stars(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|review| u32::from(review.stars)).sum();
    f64::from(sum) / reviews.len() as f64
}

/// Counts per star bucket; index 0 holds the 1-star count. Ratings outside
/// 1..=5 are ignored.
pub fn star_distribution(reviews: &[Review]) -> [usize; 5] {
    let mut buckets = [0usize; 5];
    for review in reviews {
        if (1..=5).contains(&review.stars) {
            buckets[usize::from(review.stars) - 1] += 1;
        }
    }
    buckets
}

/// Normalise a location label to its branch name: strip the Arabic
/// "فرع " prefix and keep the segment before " -".
pub fn branch_name(location: &str) -> String {
    let trimmed = location.trim();
    let without_prefix = trimmed.strip_prefix("فرع ").unwrap_or(trimmed);
    without_prefix
        .split(" -")
        .next()
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Number of distinct branches appearing in the reviews.
pub fn unique_branches(reviews: &[Review]) -> usize {
    reviews
        .iter()
        .map(|review| branch_name(&review.location))
        .filter(|name| !name.is_empty())
        .collect::<BTreeSet<_>>()
        .len()
}

/// Reviews whose normalised location matches the given branch.
pub fn reviews_for_branch(reviews: &[Review], branch: &str) -> Vec<Review> {
    reviews
        .iter()
        .filter(|review| branch_name(&review.location) == branch)
        .cloned()
        .collect()
}

/// Distinct trimmed location labels, sorted, for filter dropdowns.
pub fn unique_locations(reviews: &[Review]) -> Vec<String> {
    reviews
        .iter()
        .map(|review| review.location.trim().to_string())
        .filter(|location| !location.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Conjunctive review filter: an entry passes only when it matches every
/// active criterion. `None` criteria always pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub stars: Option<u8>,
    pub sentiment: Option<Sentiment>,
    pub location: Option<String>,
}

impl ReviewFilter {
    pub fn matches(&self, review: &Review) -> bool {
        if let Some(stars) = self.stars
            && review.stars != stars
        {
            return false;
        }
        if let Some(sentiment) = self.sentiment
            && review.sentiment != Some(sentiment)
        {
            return false;
        }
        if let Some(location) = &self.location {
            let wanted = location.trim();
            let actual = review.location.trim();
            if actual != wanted && !actual.contains(wanted) {
                return false;
            }
        }
        true
    }

    /// Fresh projection of the entries passing every active criterion.
    pub fn apply(&self, reviews: &[Review]) -> Vec<Review> {
        reviews
            .iter()
            .filter(|review| self.matches(review))
            .cloned()
            .collect()
    }
}

/// Bar-chart points (5★ down to 1★) for one branch's vote tallies; empty
/// when the branch has no entry.
pub fn vote_distribution(entries: &[VoteEntry], branch: &str) -> Vec<DistributionPoint> {
    entries
        .iter()
        .find(|entry| entry.location.trim() == branch)
        .map(|entry| {
            (1..=5u8)
                .rev()
                .map(|star| DistributionPoint {
                    star,
                    count: entry.count_for(star),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Average-rating-per-branch chart points for the summary dashboard.
pub fn branch_chart_points(entries: &[StarEntry]) -> Vec<ChartPoint> {
    entries
        .iter()
        .map(|entry| ChartPoint {
            label: entry.location.clone(),
            value: entry.star,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn review(stars: u8, sentiment: Option<Sentiment>, location: &str) -> Review {
        Review {
            review: "نص المراجعة".to_string(),
            stars,
            reviewer: "مراجع".to_string(),
            source: "Google Maps".to_string(),
            location: location.to_string(),
            sentiment,
        }
    }

    #[test]
    fn test_average_of_empty_slice_is_zero() {
        assert_eq!(average_stars(&[]), 0.0);
    }

    #[test]
    fn test_average_of_known_ratings() {
        let reviews = vec![
            review(5, None, "فرع رام الله - المنارة"),
            review(3, None, "فرع نابلس - الدوار"),
            review(4, None, "فرع جنين - شارع الناصرة"),
        ];
        assert!((average_stars(&reviews) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distribution_counts_sum_to_input_length() {
        let reviews = vec![
            review(5, None, "a"),
            review(5, None, "b"),
            review(2, None, "c"),
            review(1, None, "d"),
        ];

        let distribution = star_distribution(&reviews);
        assert_eq!(distribution, [1, 1, 0, 0, 2]);
        assert_eq!(distribution.iter().sum::<usize>(), reviews.len());
    }

    #[test_case("فرع رام الله - المنارة", "رام الله"; "prefix and sub location")]
    #[test_case("فرع نابلس - رفيديا", "نابلس"; "prefix only stripped once")]
    #[test_case("  فرع جنين - شارع الناصرة ", "جنين"; "surrounding whitespace")]
    #[test_case("أريحا", "أريحا"; "no prefix or suffix")]
    fn test_branch_name_normalisation(location: &str, expected: &str) {
        assert_eq!(branch_name(location), expected);
    }

    #[test]
    fn test_unique_branches_collapses_sub_locations() {
        let reviews = vec![
            review(5, None, "فرع رام الله - المنارة"),
            review(4, None, "فرع رام الله - الإرسال"),
            review(3, None, "فرع نابلس - الدوار"),
        ];
        assert_eq!(unique_branches(&reviews), 2);
    }

    #[test]
    fn test_unique_locations_dedupes_and_sorts() {
        let reviews = vec![
            review(5, None, " b "),
            review(4, None, "a"),
            review(3, None, "b"),
            review(2, None, ""),
        ];
        assert_eq!(unique_locations(&reviews), vec!["a", "b"]);
    }

    #[test]
    fn test_filter_is_conjunctive() {
        let reviews = vec![
            review(5, Some(Sentiment::Positive), "فرع رام الله - المنارة"),
            review(5, Some(Sentiment::Negative), "فرع رام الله - المنارة"),
            review(4, Some(Sentiment::Positive), "فرع رام الله - المنارة"),
            review(5, Some(Sentiment::Positive), "فرع نابلس - الدوار"),
        ];

        let filter = ReviewFilter {
            stars: Some(5),
            sentiment: Some(Sentiment::Positive),
            location: Some("رام الله".to_string()),
        };

        let filtered = filter.apply(&reviews);
        assert_eq!(filtered.len(), 1);
        assert!(filtered.iter().all(|r| {
            r.stars == 5
                && r.sentiment == Some(Sentiment::Positive)
                && r.location.contains("رام الله")
        }));
        // the source is untouched
        assert_eq!(reviews.len(), 4);
    }

    #[test]
    fn test_inactive_filter_passes_everything() {
        let reviews = vec![
            review(1, None, "x"),
            review(5, Some(Sentiment::Neutral), "y"),
        ];
        assert_eq!(ReviewFilter::default().apply(&reviews).len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let reviews = vec![
            review(5, None, "a"),
            review(3, None, "b"),
            review(5, None, "c"),
        ];
        let filter = ReviewFilter {
            stars: Some(5),
            ..Default::default()
        };

        let once = filter.apply(&reviews);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_vote_distribution_is_ordered_and_complete() {
        let entries = vec![VoteEntry {
            location: "رام الله".to_string(),
            five: 48,
            four: 21,
            three: 9,
            two: 4,
            one: 3,
        }];

        let distribution = vote_distribution(&entries, "رام الله");
        let stars: Vec<_> = distribution.iter().map(|p| p.star).collect();
        let counts: Vec<_> = distribution.iter().map(|p| p.count).collect();
        assert_eq!(stars, vec![5, 4, 3, 2, 1]);
        assert_eq!(counts, vec![48, 21, 9, 4, 3]);
    }

    #[test]
    fn test_vote_distribution_missing_branch_is_empty() {
        assert!(vote_distribution(&[], "نابلس").is_empty());
    }
}
