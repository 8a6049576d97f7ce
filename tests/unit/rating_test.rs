//! Tests for the rating scale

use lbtas::{Rating, RatingError};

#[test]
fn test_parse_valid_ratings() {
    assert_eq!("4".parse::<Rating>().unwrap().value(), 4);
    assert_eq!("-1".parse::<Rating>().unwrap().value(), -1);
    assert_eq!("  2 \n".parse::<Rating>().unwrap().value(), 2);
}

#[test]
fn test_parse_rejects_fractions_and_text() {
    assert_eq!("3.5".parse::<Rating>().unwrap_err(), RatingError::InvalidRating("3.5".to_string()));
    assert_eq!("abc".parse::<Rating>().unwrap_err(), RatingError::InvalidRating("abc".to_string()));
    assert!("".parse::<Rating>().is_err());
}

#[test]
fn test_parse_rejects_out_of_range() {
    assert_eq!("5".parse::<Rating>().unwrap_err(), RatingError::InvalidRating("5".to_string()));
    assert_eq!("-2".parse::<Rating>().unwrap_err(), RatingError::InvalidRating("-2".to_string()));
}

#[test]
fn test_invalid_rating_message_echoes_value() {
    let err = Rating::new(17).unwrap_err();
    assert!(err.to_string().contains("'17'"));
}

#[test]
fn test_labels_cover_scale() {
    let labels: Vec<&str> = Rating::all().map(Rating::label).collect();
    assert_eq!(
        labels,
        [
            "No Trust",
            "Cynical Satisfaction",
            "Basic Promise",
            "Basic Satisfaction",
            "No Negative Consequences",
            "Delight",
        ]
    );
}

#[test]
fn test_rating_serializes_as_integer() {
    let rating = Rating::new(-1).unwrap();
    assert_eq!(serde_json::to_string(&rating).unwrap(), "-1");
}

#[test]
fn test_rating_deserialize_enforces_range() {
    assert_eq!(serde_json::from_str::<Rating>("3").unwrap().value(), 3);
    assert!(serde_json::from_str::<Rating>("9").is_err());
}

#[test]
fn test_rating_ordering() {
    assert!(Rating::new(-1).unwrap() < Rating::new(0).unwrap());
    assert_eq!(Rating::new(4).unwrap().to_string(), "4");
}
