//! Built-in seed catalog.
//!
//! Used at first launch, before any catalog has been persisted, and as the
//! fallback when the stored catalog is unreadable. Provider "1" doubles as
//! the provider-role dashboard's own listing.

use chrono::NaiveDate;
use servizo_model::{Category, ProviderRecord, Review, ServiceStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The static provider dataset.
pub fn seed_catalog() -> Vec<ProviderRecord> {
    vec![
        ProviderRecord {
            id: "1".to_string(),
            name: "Arjun Mehta".to_string(),
            category: Category::Plumbing,
            location: "Indiranagar, Bengaluru".to_string(),
            availability: ServiceStatus::Available,
            rating: 4.8,
            reviews_count: 2,
            reviews: vec![
                Review {
                    id: "r-1-1".to_string(),
                    user: "Kavya R".to_string(),
                    rating: 5,
                    comment: "Found the hidden leak in twenty minutes. Spotless work.".to_string(),
                    date: date(2024, 5, 12),
                },
                Review {
                    id: "r-1-2".to_string(),
                    user: "Manoj".to_string(),
                    rating: 4,
                    comment: "On time and well equipped. Slightly pricey.".to_string(),
                    date: date(2024, 8, 3),
                },
            ],
            price: "₹450/hr".to_string(),
            avatar: "https://i.pravatar.cc/150?img=11".to_string(),
            lat: 12.9719,
            lng: 77.6412,
            description: "Emergency plumbing and bathroom fitting done right.".to_string(),
            long_bio: "Fifteen years of residential plumbing across east Bengaluru, \
                       from burst mains to full bathroom renovations."
                .to_string(),
            skills: vec![
                "Leak Repair".to_string(),
                "Pipe Fitting".to_string(),
                "Bathroom Fitting".to_string(),
            ],
            years_experience: 15,
            response_time: "Under 30 min".to_string(),
            verified: true,
            repeat_customers: 120,
            certifications: vec!["Licensed Plumber".to_string()],
            equipment: vec!["Inspection Camera".to_string(), "Pipe Threader".to_string()],
            completed_jobs: 540,
            is_rejected: false,
            images: Vec::new(),
        },
        ProviderRecord {
            id: "2".to_string(),
            name: "Priya Sharma".to_string(),
            category: Category::Electrical,
            location: "Koramangala, Bengaluru".to_string(),
            availability: ServiceStatus::Busy,
            rating: 4.6,
            reviews_count: 1,
            reviews: vec![Review {
                id: "r-2-1".to_string(),
                user: "Deepak".to_string(),
                rating: 5,
                comment: "Rewired the whole flat in a day.".to_string(),
                date: date(2024, 6, 21),
            }],
            price: "₹500/hr".to_string(),
            avatar: "https://i.pravatar.cc/150?img=32".to_string(),
            lat: 12.9352,
            lng: 77.6245,
            description: "Certified electrician for homes and small offices.".to_string(),
            long_bio: "Panel upgrades, inverter installs, and safety audits with a \
                       focus on older apartment wiring."
                .to_string(),
            skills: vec![
                "Wiring".to_string(),
                "Panel Upgrade".to_string(),
                "Inverter Install".to_string(),
            ],
            years_experience: 9,
            response_time: "Under 1 hr".to_string(),
            verified: true,
            repeat_customers: 85,
            certifications: vec!["Grade A Wireman".to_string()],
            equipment: vec!["Thermal Camera".to_string()],
            completed_jobs: 310,
            is_rejected: false,
            images: Vec::new(),
        },
        ProviderRecord {
            id: "3".to_string(),
            name: "Rahul Verma".to_string(),
            category: Category::Tutoring,
            location: "HSR Layout, Bengaluru".to_string(),
            availability: ServiceStatus::Available,
            rating: 4.9,
            reviews_count: 1,
            reviews: vec![Review {
                id: "r-3-1".to_string(),
                user: "Shalini".to_string(),
                rating: 5,
                comment: "My daughter's maths grade jumped two bands.".to_string(),
                date: date(2025, 1, 14),
            }],
            price: "₹600/session".to_string(),
            avatar: "https://i.pravatar.cc/150?img=52".to_string(),
            lat: 12.9121,
            lng: 77.6446,
            description: "Maths and physics tutoring, grades 8 to 12.".to_string(),
            long_bio: "IIT graduate teaching board and competitive-exam syllabi with \
                       weekly progress reports for parents."
                .to_string(),
            skills: vec![
                "Mathematics".to_string(),
                "Physics".to_string(),
                "Exam Prep".to_string(),
            ],
            years_experience: 7,
            response_time: "Same day".to_string(),
            verified: false,
            repeat_customers: 60,
            certifications: vec!["B.Tech".to_string()],
            equipment: Vec::new(),
            completed_jobs: 150,
            is_rejected: false,
            images: Vec::new(),
        },
        ProviderRecord {
            id: "4".to_string(),
            name: "Sneha Iyer".to_string(),
            category: Category::Cleaning,
            location: "Whitefield, Bengaluru".to_string(),
            availability: ServiceStatus::Available,
            rating: 4.7,
            reviews_count: 0,
            reviews: Vec::new(),
            price: "₹300/hr".to_string(),
            avatar: "https://i.pravatar.cc/150?img=44".to_string(),
            lat: 12.9698,
            lng: 77.7499,
            description: "Deep cleaning for homes and move-outs.".to_string(),
            long_bio: "Team of three covering kitchens, bathrooms, and sofa shampooing \
                       with eco-friendly supplies."
                .to_string(),
            skills: vec![
                "Deep Cleaning".to_string(),
                "Sofa Shampoo".to_string(),
                "Move-out Cleaning".to_string(),
            ],
            years_experience: 5,
            response_time: "Under 2 hrs".to_string(),
            verified: true,
            repeat_customers: 95,
            certifications: Vec::new(),
            equipment: vec!["Steam Cleaner".to_string()],
            completed_jobs: 420,
            is_rejected: false,
            images: Vec::new(),
        },
        ProviderRecord {
            id: "5".to_string(),
            name: "Vikram Rao".to_string(),
            category: Category::Mechanic,
            location: "Jayanagar, Bengaluru".to_string(),
            availability: ServiceStatus::Offline,
            rating: 4.3,
            reviews_count: 0,
            reviews: Vec::new(),
            price: "₹400/visit".to_string(),
            avatar: "https://i.pravatar.cc/150?img=14".to_string(),
            lat: 12.9308,
            lng: 77.5838,
            description: "Doorstep two-wheeler servicing and repairs.".to_string(),
            long_bio: "Roadside assistance and scheduled servicing for scooters and \
                       motorcycles, parts billed at cost."
                .to_string(),
            skills: vec![
                "Two-wheeler Service".to_string(),
                "Breakdown Assistance".to_string(),
            ],
            years_experience: 12,
            response_time: "Under 45 min".to_string(),
            verified: false,
            repeat_customers: 70,
            certifications: Vec::new(),
            equipment: vec!["Mobile Toolkit".to_string()],
            completed_jobs: 600,
            is_rejected: false,
            images: Vec::new(),
        },
        ProviderRecord {
            id: "6".to_string(),
            name: "Meera Nair".to_string(),
            category: Category::Gardening,
            location: "Malleshwaram, Bengaluru".to_string(),
            availability: ServiceStatus::Available,
            rating: 4.5,
            reviews_count: 1,
            reviews: vec![Review {
                id: "r-6-1".to_string(),
                user: "Harini".to_string(),
                rating: 4,
                comment: "Balcony garden finally thriving.".to_string(),
                date: date(2024, 10, 9),
            }],
            price: "₹350/visit".to_string(),
            avatar: "https://i.pravatar.cc/150?img=27".to_string(),
            lat: 13.0031,
            lng: 77.5643,
            description: "Terrace and balcony garden setup and care.".to_string(),
            long_bio: "Organic kitchen gardens, drip irrigation, and monthly \
                       maintenance visits."
                .to_string(),
            skills: vec![
                "Garden Setup".to_string(),
                "Drip Irrigation".to_string(),
                "Pruning".to_string(),
            ],
            years_experience: 6,
            response_time: "Next day".to_string(),
            verified: false,
            repeat_customers: 45,
            certifications: Vec::new(),
            equipment: Vec::new(),
            completed_jobs: 180,
            is_rejected: false,
            images: Vec::new(),
        },
    ]
}
