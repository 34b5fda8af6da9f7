//! The two-facet filter selection and its predicate.

use crate::catalog::Item;

/// The visitor's facet selections. An empty string is a wildcard.
///
/// Note the aroma facet's select is populated from product names (see
/// [`crate::catalog::Catalog::aroma_options`]) while the predicate matches
/// the aroma field; the cross-field pairing is long-shipped behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// Matched against the item's `aroma`.
    pub aroma: String,
    /// Matched against the item's `kind`.
    pub kind: String,
}

impl FilterSelection {
    #[must_use]
    pub fn new(aroma: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            aroma: aroma.into(),
            kind: kind.into(),
        }
    }

    /// True when `item` passes both facets.
    ///
    /// Each facet is a case-insensitive substring test; an empty selection
    /// passes everything.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        contains_ci(&item.aroma, &self.aroma) && contains_ci(&item.kind, &self.kind)
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}
