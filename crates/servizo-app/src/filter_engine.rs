//! Derived catalog filtering.
//!
//! A pure function from (catalog, filters, role) to the visible subset.
//! Deterministic and side-effect free, so it is safe to recompute on every
//! state change.

use servizo_model::{FilterState, ProviderRecord, UserRole};

/// The visible, ordered subset of the catalog.
///
/// Predicates, all conjunctive and case-insensitive for text:
/// 1. Role gate: the consumer role never sees rejected listings; provider
///    and admin see the full catalog.
/// 2. Search: empty, or a substring of name, category, or any skill.
/// 3. Category: unset, or an exact match.
/// 4. Location: empty, or a substring of the record's location.
/// 5. Availability: unset, or an exact match.
///
/// Output preserves catalog insertion order; no ranking is applied.
pub fn visible(
    catalog: &[ProviderRecord],
    filters: &FilterState,
    role: UserRole,
) -> Vec<ProviderRecord> {
    catalog
        .iter()
        .filter(|record| passes_role_gate(record, role) && matches(record, filters))
        .cloned()
        .collect()
}

fn passes_role_gate(record: &ProviderRecord, role: UserRole) -> bool {
    role != UserRole::User || !record.is_rejected
}

fn matches(record: &ProviderRecord, filters: &FilterState) -> bool {
    matches_search(record, &filters.search)
        && filters.category.is_none_or(|c| c == record.category)
        && contains_ignore_case(&record.location, &filters.location)
        && filters.availability.is_none_or(|a| a == record.availability)
}

fn matches_search(record: &ProviderRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    contains_ignore_case(&record.name, search)
        || contains_ignore_case(record.category.label(), search)
        || record
            .skills
            .iter()
            .any(|skill| contains_ignore_case(skill, search))
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
