//! The user's saved-provider shortlist.

use serde::{Deserialize, Serialize};

/// An insertion-ordered set of provider ids.
///
/// Owned by the browser profile, independent of role and of catalog
/// mutations: an id may reference a provider that has since been rejected.
/// Rendering decides what to do with such entries, not this set.
///
/// Serializes as a plain JSON array of id strings, which is the durable
/// storage shape.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortlistSet {
    ids: Vec<String>,
}

impl ShortlistSet {
    /// Empty shortlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|entry| entry == id)
    }

    /// Toggle membership; returns `true` when the id is now a member.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.ids.retain(|entry| entry != id);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_membership() {
        let mut shortlist = ShortlistSet::new();
        assert!(shortlist.toggle("42"));
        assert!(shortlist.contains("42"));
        assert!(!shortlist.toggle("42"));
        assert!(!shortlist.contains("42"));
        assert!(shortlist.is_empty());
    }

    #[test]
    fn preserves_insertion_order() {
        let mut shortlist = ShortlistSet::new();
        shortlist.toggle("3");
        shortlist.toggle("1");
        shortlist.toggle("2");
        let ids: Vec<&str> = shortlist.iter().collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn serializes_as_bare_array() {
        let mut shortlist = ShortlistSet::new();
        shortlist.toggle("1");
        shortlist.toggle("7");
        let json = serde_json::to_string(&shortlist).expect("serialize");
        assert_eq!(json, r#"["1","7"]"#);
        let round: ShortlistSet = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round, shortlist);
    }
}
