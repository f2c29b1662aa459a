use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Sentiment label attached to a review by the backend classifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, EnumIter)]
pub enum Sentiment {
    /// Favourable review.
    Positive,
    /// Mixed or factual review.
    Neutral,
    /// Unfavourable review.
    Negative,
}

impl Sentiment {
    /// Wire and display name of the label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

/// A single customer review of a branch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Review {
    /// Free-text body of the review.
    pub review: String,

    /// Star rating, 1 to 5.
    pub stars: u8,

    /// Display name of the reviewer.
    pub reviewer: String,

    /// Where the review was collected from.
    pub source: String,

    /// Branch location label, e.g. `فرع رام الله - المنارة`.
    pub location: String,

    /// Sentiment label; absent in the bundled datasets.
    #[serde(default)]
    pub sentiment: Option<Sentiment>,
}

/// Aggregate star rating for one branch (canonical `stars.json` shape).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StarEntry {
    /// Branch name.
    pub location: String,

    /// Average star rating for the branch.
    pub star: f32,

    /// Optional thumbnail URL.
    #[serde(default)]
    pub image: String,
}

/// Per-location vote tallies keyed by star bucket in `voting.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteEntry {
    /// Branch name.
    pub location: String,

    /// Number of 5-star votes.
    #[serde(rename = "5")]
    pub five: u32,

    /// Number of 4-star votes.
    #[serde(rename = "4")]
    pub four: u32,

    /// Number of 3-star votes.
    #[serde(rename = "3")]
    pub three: u32,

    /// Number of 2-star votes.
    #[serde(rename = "2")]
    pub two: u32,

    /// Number of 1-star votes.
    #[serde(rename = "1")]
    pub one: u32,
}

impl VoteEntry {
    /// Vote count for a star bucket; 0 for buckets outside 1..=5.
    pub const fn count_for(&self, bucket: u8) -> u32 {
        match bucket {
            5 => self.five,
            4 => self.four,
            3 => self.three,
            2 => self.two,
            1 => self.one,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_entry_numeric_keys() {
        let json = r#"{"location": "رام الله", "5": 40, "4": 12, "3": 5, "2": 2, "1": 1}"#;
        let entry: VoteEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.location, "رام الله");
        assert_eq!(entry.count_for(5), 40);
        assert_eq!(entry.count_for(1), 1);
        assert_eq!(entry.count_for(0), 0);
        assert_eq!(entry.count_for(6), 0);
    }

    #[test]
    fn test_review_without_sentiment() {
        let json = r#"{
            "review": "خدمة ممتازة",
            "stars": 5,
            "reviewer": "أحمد",
            "source": "Google Maps",
            "location": "فرع رام الله - المنارة"
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.stars, 5);
        assert_eq!(review.sentiment, None);
    }

    #[test]
    fn test_sentiment_wire_names() {
        let sentiment: Sentiment = serde_json::from_str("\"Negative\"").unwrap();
        assert_eq!(sentiment, Sentiment::Negative);
        assert_eq!(sentiment.as_str(), "Negative");
    }

    #[test]
    fn test_star_entry_defaults_image() {
        let entry: StarEntry =
            serde_json::from_str(r#"{"location": "نابلس", "star": 4.2}"#).unwrap();
        assert_eq!(entry.location, "نابلس");
        assert!(entry.image.is_empty());
    }
}
