//! Tests for servizo-model types against the stored catalog shape.

use servizo_model::{Category, ProviderRecord, ServiceStatus, ShortlistSet};

/// A catalog entry as persisted by earlier builds: camelCase keys,
/// no moderation fields.
const STORED_RECORD: &str = r#"{
    "id": "9",
    "name": "Anita Desai",
    "category": "Pet Care",
    "location": "Whitefield, Bengaluru",
    "availability": "Busy",
    "rating": 4.4,
    "reviewsCount": 2,
    "reviews": [
        {
            "id": "r-9-1",
            "user": "Rohit",
            "rating": 4,
            "comment": "Great with our beagle.",
            "date": "2024-11-02"
        }
    ],
    "price": "₹350/visit",
    "avatar": "https://i.pravatar.cc/150?img=9",
    "lat": 12.9698,
    "lng": 77.7499,
    "description": "Daily walks and pet sitting.",
    "longBio": "Caring for pets across east Bengaluru for six years.",
    "skills": ["Dog Walking", "Pet Sitting"],
    "yearsExperience": 6,
    "responseTime": "Under 1 hr",
    "verified": false,
    "repeatCustomers": 40,
    "certifications": [],
    "equipment": [],
    "completedJobs": 210
}"#;

#[test]
fn stored_record_hydrates() {
    let record: ProviderRecord = serde_json::from_str(STORED_RECORD).expect("parse stored record");
    assert_eq!(record.id, "9");
    assert_eq!(record.category, Category::PetCare);
    assert_eq!(record.availability, ServiceStatus::Busy);
    assert_eq!(record.reviews.len(), 1);
    assert_eq!(record.reviews[0].rating, 4);
    // Moderation fields absent in older data default off.
    assert!(!record.is_rejected);
    assert!(record.images.is_empty());
}

#[test]
fn catalog_array_round_trips() {
    let record: ProviderRecord = serde_json::from_str(STORED_RECORD).expect("parse stored record");
    let catalog = vec![record];
    let json = serde_json::to_string(&catalog).expect("serialize catalog");
    let round: Vec<ProviderRecord> = serde_json::from_str(&json).expect("deserialize catalog");
    assert_eq!(round, catalog);
}

#[test]
fn shortlist_wire_shape_is_an_id_array() {
    let stored = r#"["1","4","9"]"#;
    let shortlist: ShortlistSet = serde_json::from_str(stored).expect("parse shortlist");
    assert_eq!(shortlist.len(), 3);
    assert!(shortlist.contains("4"));
    assert!(!shortlist.contains("2"));
}
