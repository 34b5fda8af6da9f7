//! The cart ledger: identity-merged entries in display order.
//!
//! Identity is the exact `(name, aroma)` pair. Repeated adds of the same
//! identity accumulate quantity on the existing entry; every other field
//! keeps its first-seen value. Entries render in insertion order.

use serde::{Deserialize, Serialize};

use crate::catalog::Item;

/// A cart line: item fields plus an accumulated quantity (always >= 1).
///
/// Serializable because the cart lives in the visitor's session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub name: String,
    pub aroma: String,
    pub kind: String,
    pub image: String,
    pub quantity: u32,
}

/// What [`Cart::add`] did, so the caller can pick the right feedback.
///
/// The ledger itself performs no notification or scrolling; those are
/// view-layer concerns driven by this outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was appended. Carries its quantity.
    Added { quantity: u32 },
    /// An existing entry absorbed the add. Carries the new total quantity.
    Merged { quantity: u32 },
}

/// An ordered collection of cart entries, at most one per identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `quantity` units of `item` into the cart.
    ///
    /// On a merge the existing entry keeps its kind and image; only the
    /// quantity grows. New identities append at the end. Callers clamp the
    /// quantity at the input boundary; the ledger additionally floors at 1
    /// so no entry ever holds less than one unit.
    pub fn add(&mut self, item: &Item, quantity: u32) -> AddOutcome {
        let quantity = quantity.max(1);

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.name == item.name && entry.aroma == item.aroma)
        {
            entry.quantity += quantity;
            return AddOutcome::Merged {
                quantity: entry.quantity,
            };
        }

        self.entries.push(CartEntry {
            name: item.name.clone(),
            aroma: item.aroma.clone(),
            kind: item.kind.clone(),
            image: item.image.clone(),
            quantity,
        });
        AddOutcome::Added { quantity }
    }

    /// Remove the entry with the given identity.
    ///
    /// Returns whether an entry was removed; removing an absent identity
    /// is a no-op, not an error.
    pub fn remove(&mut self, name: &str, aroma: &str) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|entry| !(entry.name == name && entry.aroma == aroma));
        self.entries.len() != before
    }

    /// Sum of all entry quantities.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.entries.iter().map(|entry| entry.quantity).sum()
    }

    /// Entries in insertion (display) order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(name: &str, aroma: &str) -> Item {
        Item {
            name: name.to_owned(),
            aroma: aroma.to_owned(),
            kind: "hogar".to_owned(),
            image: format!("https://img.example/{name}.jpg"),
            price: None,
        }
    }

    #[test]
    fn test_add_new_identity_appends() {
        let mut cart = Cart::new();
        let outcome = cart.add(&item("Vainilla", "Dulce"), 2);
        assert_eq!(outcome, AddOutcome::Added { quantity: 2 });
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.entries()[0].quantity, 2);
    }

    #[test]
    fn test_repeat_add_merges_quantities() {
        let mut cart = Cart::new();
        cart.add(&item("Vainilla", "Dulce"), 2);
        let outcome = cart.add(&item("Vainilla", "Dulce"), 3);
        assert_eq!(outcome, AddOutcome::Merged { quantity: 5 });
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.entries()[0].quantity, 5);
    }

    #[test]
    fn test_identity_is_both_name_and_aroma() {
        let mut cart = Cart::new();
        cart.add(&item("Vainilla", "Dulce"), 1);
        cart.add(&item("Vainilla", "Suave"), 1);
        cart.add(&item("Citrus", "Dulce"), 1);
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_merge_keeps_first_seen_metadata() {
        let mut cart = Cart::new();
        cart.add(&item("Vainilla", "Dulce"), 1);

        let mut refreshed = item("Vainilla", "Dulce");
        refreshed.kind = "auto".to_owned();
        refreshed.image = "https://img.example/new.jpg".to_owned();
        cart.add(&refreshed, 1);

        let entry = &cart.entries()[0];
        assert_eq!(entry.kind, "hogar");
        assert_eq!(entry.image, "https://img.example/Vainilla.jpg");
        assert_eq!(entry.quantity, 2);
    }

    #[test]
    fn test_add_floors_quantity_at_one() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(&item("Vainilla", "Dulce"), 0), AddOutcome::Added { quantity: 1 });
        assert_eq!(cart.entries()[0].quantity, 1);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&item("Vainilla", "Dulce"), 1);
        cart.add(&item("Citrus", "Cítrico"), 1);
        cart.add(&item("Vainilla", "Dulce"), 1);
        let names: Vec<&str> = cart.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Vainilla", "Citrus"]);
    }

    #[test]
    fn test_remove_deletes_whole_entry() {
        let mut cart = Cart::new();
        cart.add(&item("Vainilla", "Dulce"), 4);
        assert!(cart.remove("Vainilla", "Dulce"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_identity_is_noop() {
        let mut cart = Cart::new();
        cart.add(&item("Vainilla", "Dulce"), 1);
        cart.add(&item("Citrus", "Cítrico"), 2);
        let before = cart.clone();

        assert!(!cart.remove("Vainilla", "Suave"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_total_units_matches_recomputation() {
        let mut cart = Cart::new();
        cart.add(&item("Vainilla", "Dulce"), 2);
        cart.add(&item("Citrus", "Cítrico"), 3);
        cart.add(&item("Vainilla", "Dulce"), 1);
        cart.remove("Citrus", "Cítrico");

        let recomputed: u32 = cart.entries().iter().map(|e| e.quantity).sum();
        assert_eq!(cart.total_units(), recomputed);
        assert_eq!(cart.total_units(), 3);
    }

    #[test]
    fn test_cart_serde_roundtrip() {
        let mut cart = Cart::new();
        cart.add(&item("Vainilla", "Dulce"), 2);

        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }
}
