//! Bundled dataset loaders.
//!
//! The review datasets ship with the client and are parsed once at mount.
//! Validation happens here, at the boundary: the legacy map shape of the
//! star-rating dataset is migrated to the canonical array shape, and
//! out-of-range ratings are dropped instead of leaking into the views.

use serde_json::Value;
use shared::models::{Review, StarEntry, VoteEntry};
use thiserror::Error;

const STARS_JSON: &str = include_str!("../data/stars.json");
const REVIEWS_JSON: &str = include_str!("../data/bank_reviews.json");
const VOTING_JSON: &str = include_str!("../data/voting.json");

/// Failure while parsing a bundled dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported dataset shape: expected an array or a location map")]
    UnsupportedShape,
}

/// Per-branch star ratings for the summary dashboard.
pub fn load_star_ratings() -> Result<Vec<StarEntry>, DatasetError> {
    parse_star_ratings(STARS_JSON)
}

/// The raw bundled reviews.
pub fn load_reviews() -> Result<Vec<Review>, DatasetError> {
    Ok(serde_json::from_str(REVIEWS_JSON)?)
}

/// Per-branch vote tallies.
pub fn load_vote_tallies() -> Result<Vec<VoteEntry>, DatasetError> {
    Ok(serde_json::from_str(VOTING_JSON)?)
}

fn parse_star_ratings(raw: &str) -> Result<Vec<StarEntry>, DatasetError> {
    let value: Value = serde_json::from_str(raw)?;

    let entries: Vec<StarEntry> = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        // legacy shape: { "location": rating, ... }
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(location, rating)| {
                rating.as_f64().map(|star| StarEntry {
                    location,
                    star: star as f32,
                    image: String::new(),
                })
            })
            .collect(),
        _ => return Err(DatasetError::UnsupportedShape),
    };

    Ok(entries
        .into_iter()
        .filter(|entry| (1.0..=5.0).contains(&entry.star))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_datasets_parse() {
        let stars = load_star_ratings().unwrap();
        let reviews = load_reviews().unwrap();
        let votes = load_vote_tallies().unwrap();

        assert!(!stars.is_empty());
        assert!(!reviews.is_empty());
        assert!(!votes.is_empty());
        assert!(reviews.iter().all(|r| (1..=5).contains(&r.stars)));
    }

    #[test]
    fn test_canonical_array_shape_parses() {
        let entries =
            parse_star_ratings(r#"[{"location": "رام الله", "star": 4.2, "image": ""}]"#).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].location, "رام الله");
    }

    #[test]
    fn test_legacy_map_shape_is_migrated() {
        let entries = parse_star_ratings(r#"{"رام الله": 4.2, "نابلس": 3.8}"#).unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| entry.image.is_empty()));
        assert!(
            entries
                .iter()
                .any(|entry| entry.location == "نابلس" && (entry.star - 3.8).abs() < 1e-6)
        );
    }

    #[test]
    fn test_out_of_range_ratings_are_dropped() {
        let entries =
            parse_star_ratings(r#"{"صالح": 4.0, "صفر": 0.0, "فوق الحد": 9.5}"#).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].location, "صالح");
    }

    #[test]
    fn test_scalar_shape_is_rejected() {
        assert!(matches!(
            parse_star_ratings("42"),
            Err(DatasetError::UnsupportedShape)
        ));
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        assert!(matches!(
            parse_star_ratings("not json"),
            Err(DatasetError::Malformed(_))
        ));
    }
}
