//! Storage keys.

/// The four durable state slices.
///
/// Each key maps to one JSON file in the storage root. The catalog and
/// shortlist names carry a version suffix so a future schema change can
/// migrate by bumping it and leaving the old file behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// The provider catalog (JSON array of records).
    Providers,
    /// Saved provider ids (JSON array of strings).
    Shortlist,
    /// Theme preference (`"light"` | `"dark"`).
    Theme,
    /// Last active role (`"user"` | `"provider"` | `"admin"`).
    Role,
}

impl StorageKey {
    /// File name backing this key.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Providers => "servizo_providers_v1.json",
            Self::Shortlist => "servizo_shortlist_v1.json",
            Self::Theme => "servizo_theme.json",
            Self::Role => "servizo_role.json",
        }
    }

    /// Short name used in log messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Providers => "providers",
            Self::Shortlist => "shortlist",
            Self::Theme => "theme",
            Self::Role => "role",
        }
    }

    /// All keys.
    pub const fn all() -> &'static [StorageKey] {
        &[Self::Providers, Self::Shortlist, Self::Theme, Self::Role]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names_are_distinct() {
        let names: Vec<&str> = StorageKey::all().iter().map(|k| k.file_name()).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }
}
