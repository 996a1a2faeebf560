//! The canonical mutable provider collection.

use servizo_model::ProviderRecord;

/// Owns the provider records in stable insertion order.
///
/// `update` is the single mutation primitive: every role-scoped action
/// (verify, reject, restore, edit, availability change) reads the current
/// record, produces a modified copy, and replaces it wholesale. There is no
/// partial-field patch, so the caller always mutates from a snapshot it has
/// seen. Records are never inserted or deleted through this store.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    records: Vec<ProviderRecord>,
}

impl CatalogStore {
    pub fn new(records: Vec<ProviderRecord>) -> Self {
        Self { records }
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[ProviderRecord] {
        &self.records
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&ProviderRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Replace the record matching `record.id`.
    ///
    /// Returns `true` when a record was replaced. A miss is a no-op —
    /// update never inserts.
    pub fn update(&mut self, record: ProviderRecord) -> bool {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => {
                tracing::debug!(id = %record.id, "update for unknown provider ignored");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use servizo_model::{Category, ServiceStatus};

    fn record(id: &str, name: &str) -> ProviderRecord {
        ProviderRecord {
            id: id.to_string(),
            name: name.to_string(),
            category: Category::Plumbing,
            location: "Indiranagar, Bengaluru".to_string(),
            availability: ServiceStatus::Available,
            rating: 4.5,
            reviews_count: 0,
            reviews: Vec::new(),
            price: "₹400/hr".to_string(),
            avatar: String::new(),
            lat: 12.97,
            lng: 77.59,
            description: String::new(),
            long_bio: String::new(),
            skills: Vec::new(),
            years_experience: 5,
            response_time: String::new(),
            verified: false,
            repeat_customers: 0,
            certifications: Vec::new(),
            equipment: Vec::new(),
            completed_jobs: 0,
            is_rejected: false,
            images: Vec::new(),
        }
    }

    #[test]
    fn update_replaces_matching_record_in_place() {
        let mut catalog = CatalogStore::new(vec![record("1", "A"), record("2", "B")]);
        let mut changed = record("1", "A");
        changed.verified = true;

        assert!(catalog.update(changed));
        assert!(catalog.get("1").expect("record 1").verified);
        // Order is untouched.
        let ids: Vec<&str> = catalog.all().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn update_with_unknown_id_is_a_no_op() {
        let mut catalog = CatalogStore::new(vec![record("1", "A")]);
        let before = catalog.all().to_vec();

        assert!(!catalog.update(record("404", "Ghost")));
        assert_eq!(catalog.all(), before.as_slice());
        assert_eq!(catalog.len(), 1);
    }
}
