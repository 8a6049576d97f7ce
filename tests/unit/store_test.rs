//! Tests for rating store operations

use lbtas::core::models::Criteria;
use lbtas::{RatingError, RatingStore};

use crate::common::{default_store, store_with};

// =============================================================================
// CREATE EXCHANGE
// =============================================================================

#[test]
fn test_create_exchange_starts_empty() {
    let mut store = default_store();
    store.create_exchange("Acme").unwrap();

    let record = store.exchange("Acme").unwrap();
    for category in store.criteria().iter() {
        assert!(record.ratings(category).is_empty());
    }
    assert_eq!(record.metadata().total_ratings, 0);
    assert_eq!(record.categories().len(), 4);
}

#[test]
fn test_duplicate_exchange_rejected() {
    let mut store = default_store();
    store.create_exchange("Acme").unwrap();
    store.record_rating("Acme", "support", 2).unwrap();

    let err = store.create_exchange("Acme").unwrap_err();
    assert_eq!(err, RatingError::DuplicateExchange("Acme".to_string()));
    assert_eq!(store.len(), 1);
    assert_eq!(store.exchange("Acme").unwrap().ratings("support").len(), 1);
}

#[test]
fn test_exchange_names_are_case_sensitive() {
    let mut store = default_store();
    store.create_exchange("acme").unwrap();
    store.create_exchange("Acme").unwrap();
    assert_eq!(store.len(), 2);
}

#[test]
fn test_blank_exchange_name_rejected() {
    let mut store = default_store();
    assert_eq!(store.create_exchange("   ").unwrap_err(), RatingError::EmptyExchangeName);
    assert!(store.is_empty());
}

// =============================================================================
// RECORD RATING
// =============================================================================

#[test]
fn test_record_rating_appends_in_order() {
    let store = store_with(&[("Acme", &[("reliability", 3), ("reliability", -1), ("reliability", 4)])]);
    let ratings: Vec<i8> =
        store.exchange("Acme").unwrap().ratings("reliability").iter().map(|r| r.value()).collect();
    assert_eq!(ratings, [3, -1, 4]);
    assert_eq!(store.exchange("Acme").unwrap().metadata().total_ratings, 3);
}

#[test]
fn test_two_ratings_average() {
    let store = store_with(&[("Acme", &[("reliability", 3), ("reliability", 4)])]);
    let summary = store.summarize("Acme").unwrap();
    assert_eq!(summary.average("reliability"), Some(3.5));
}

#[test]
fn test_out_of_range_rating_leaves_record_untouched() {
    let mut store = store_with(&[("Acme", &[("usability", 2)])]);

    for bad in [5, -2] {
        let err = store.record_rating("Acme", "usability", bad).unwrap_err();
        assert_eq!(err, RatingError::InvalidRating(bad.to_string()));
    }

    let record = store.exchange("Acme").unwrap();
    assert_eq!(record.ratings("usability").len(), 1);
    assert_eq!(record.metadata().total_ratings, 1);
}

#[test]
fn test_unknown_criterion_rejected() {
    let mut store = store_with(&[("Acme", &[])]);
    let err = store.record_rating("Acme", "price", 3).unwrap_err();

    match &err {
        RatingError::UnknownCriterion {
            criterion,
            configured,
        } => {
            assert_eq!(criterion, "price");
            assert_eq!(configured.len(), 4);
        },
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("'price'"));
    assert_eq!(store.exchange("Acme").unwrap().metadata().total_ratings, 0);
}

#[test]
fn test_unknown_exchange_rejected() {
    let mut store = default_store();
    let err = store.record_rating("Nowhere", "support", 1).unwrap_err();
    assert_eq!(err, RatingError::UnknownExchange("Nowhere".to_string()));
    assert!(err.to_string().contains("'Nowhere'"));
}

#[test]
fn test_record_ratings_batch() {
    let mut store = store_with(&[("Acme", &[])]);
    let batch = [
        ("reliability".to_string(), 4),
        ("usability".to_string(), 3),
        ("performance".to_string(), 2),
        ("support".to_string(), 1),
    ];

    assert_eq!(store.record_ratings("Acme", &batch).unwrap(), 4);
    let summary = store.summarize("Acme").unwrap();
    assert_eq!(summary.average("performance"), Some(2.0));
    assert_eq!(store.exchange("Acme").unwrap().metadata().total_ratings, 4);
}

#[test]
fn test_record_ratings_rejects_whole_batch_on_unknown_criterion() {
    let mut store = store_with(&[("Acme", &[])]);
    let batch = [("reliability", 4), ("price", 3)];

    assert!(matches!(
        store.record_ratings("Acme", &batch),
        Err(RatingError::UnknownCriterion { .. })
    ));
    assert_eq!(store.exchange("Acme").unwrap().rating_count(), 0);
}

// =============================================================================
// SUMMARIZE / LIST
// =============================================================================

#[test]
fn test_summarize_marks_empty_categories() {
    let store = store_with(&[("Acme", &[("support", 1)])]);
    let summary = store.summarize("Acme").unwrap();

    let categories: Vec<&str> = summary.ratings.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, ["reliability", "usability", "performance", "support"]);
    assert_eq!(summary.average("reliability"), None);
    assert_eq!(summary.average("support"), Some(1.0));
}

#[test]
fn test_summarize_rounds_to_two_decimals() {
    let store = store_with(&[("Acme", &[("support", 1), ("support", 1), ("support", 2)])]);
    assert_eq!(store.summarize("Acme").unwrap().average("support"), Some(1.33));
}

#[test]
fn test_summarize_unknown_exchange() {
    let store = default_store();
    assert_eq!(
        store.summarize("Ghost").unwrap_err(),
        RatingError::UnknownExchange("Ghost".to_string())
    );
}

#[test]
fn test_summary_overall() {
    let store = store_with(&[("Acme", &[("reliability", 4), ("support", 1)])]);
    assert_eq!(store.summarize("Acme").unwrap().overall(), Some(2.5));

    let empty = store_with(&[("Blank", &[])]);
    assert_eq!(empty.summarize("Blank").unwrap().overall(), None);
}

#[test]
fn test_list_exchanges() {
    let store = store_with(&[("beta", &[]), ("alpha", &[]), ("Gamma", &[])]);
    let mut names = store.list_exchanges();
    names.sort_unstable();
    assert_eq!(names, ["Gamma", "alpha", "beta"]);
}

#[test]
fn test_custom_categories() {
    let criteria = Criteria::new(["speed", "accuracy"]).unwrap();
    let mut store = RatingStore::in_memory(criteria);
    store.create_exchange("Courier").unwrap();
    store.record_rating("Courier", "speed", 4).unwrap();

    assert!(store.record_rating("Courier", "reliability", 4).is_err());
    assert_eq!(store.summarize("Courier").unwrap().ratings.len(), 2);
}
