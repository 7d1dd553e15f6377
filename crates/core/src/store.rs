//! The fixed branch enumeration
//!
//! cstore operates four physical branches. Aggregation order, default
//! targets and utterance alias matching are all anchored on this enum.

use serde::{Deserialize, Serialize};

/// A cstore branch
///
/// Declaration order is the fixed aggregation/display order; per-store
/// reports always follow it rather than record discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Store {
    DarkStore,
    Tagmo,
    Heliopolis,
    Maadi,
}

impl Store {
    /// Canonical name as it appears in ingested records
    pub fn name(&self) -> &'static str {
        match self {
            Self::DarkStore => "Dark store",
            Self::Tagmo => "Tagmo",
            Self::Heliopolis => "Heliopolis",
            Self::Maadi => "Maadi",
        }
    }

    /// Default monthly target in EGP, used when no explicit target row exists
    pub fn default_target(&self) -> f64 {
        match self {
            Self::DarkStore => 1_000_000.0,
            Self::Tagmo => 750_000.0,
            Self::Heliopolis => 1_000_000.0,
            Self::Maadi => 700_000.0,
        }
    }

    /// Substrings that count as a mention of this branch in an utterance
    ///
    /// Matched against the lowercased utterance. Arabic entries cover the
    /// district names customers actually use.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::DarkStore => &["dark", "المظلم", "الفندق"],
            Self::Tagmo => &["tagmo", "تجمع"],
            Self::Heliopolis => &["helio", "مصر الجديدة"],
            Self::Maadi => &["maadi", "معادي"],
        }
    }

    /// Resolve a canonical record name back to a branch
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.name() == name)
    }

    /// Find the first branch mentioned in a lowercased utterance
    pub fn find_mention(lowered: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|s| s.aliases().iter().any(|a| lowered.contains(a)))
    }

    /// All branches in aggregation order
    pub fn all() -> &'static [Store] {
        &[Self::DarkStore, Self::Tagmo, Self::Heliopolis, Self::Maadi]
    }
}

impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_order() {
        let names: Vec<_> = Store::all().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Dark store", "Tagmo", "Heliopolis", "Maadi"]);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Store::from_name("Dark store"), Some(Store::DarkStore));
        assert_eq!(Store::from_name("Maadi"), Some(Store::Maadi));
        assert_eq!(Store::from_name("Zamalek"), None);
    }

    #[test]
    fn test_find_mention() {
        assert_eq!(Store::find_mention("sales for dark store"), Some(Store::DarkStore));
        assert_eq!(Store::find_mention("فرع التجمع عامل كام"), Some(Store::Tagmo));
        assert_eq!(Store::find_mention("el maadi 3amel eh"), Some(Store::Maadi));
        assert_eq!(Store::find_mention("total sales"), None);
    }

    #[test]
    fn test_default_targets() {
        assert_eq!(Store::DarkStore.default_target(), 1_000_000.0);
        assert_eq!(Store::Maadi.default_target(), 700_000.0);
    }
}
