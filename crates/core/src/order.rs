//! Order message composition and the WhatsApp handoff link.
//!
//! "Placing an order" is composing a message the visitor sends manually:
//! the composer renders cart state into a fixed-template text and a
//! ready-to-open `wa.me` link carrying it. Both are pure functions of the
//! cart (plus the configured recipient).

use std::fmt::Write;

use crate::cart::Cart;

/// Greeting line of the order message.
pub const GREETING: &str = "Hola, quiero pedir los siguientes ambientadores:";

/// Render the cart as the outgoing order text.
///
/// An empty cart composes to an empty string, which callers treat as
/// "nothing to send". Otherwise: the greeting, one `• {name} x {quantity}`
/// line per entry in cart order, a blank line, and the unit total.
#[must_use]
pub fn compose_message(cart: &Cart) -> String {
    if cart.is_empty() {
        return String::new();
    }

    let mut message = String::from(GREETING);
    message.push('\n');
    for entry in cart.entries() {
        let _ = writeln!(message, "\u{2022} {} x {}", entry.name, entry.quantity);
    }
    message.push('\n');
    let _ = write!(message, "Total: {} unidades", cart.total_units());
    message
}

/// Build the `wa.me` link carrying `message` to `phone`.
///
/// Returns `None` for an empty message: an empty order has no actionable
/// send link. The phone token is a configuration constant, digits only in
/// international format without the `+`.
#[must_use]
pub fn whatsapp_link(phone: &str, message: &str) -> Option<String> {
    if message.is_empty() {
        return None;
    }
    Some(format!(
        "https://wa.me/{phone}?text={}",
        urlencoding::encode(message)
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Item;

    fn item(name: &str, aroma: &str) -> Item {
        Item {
            name: name.to_owned(),
            aroma: aroma.to_owned(),
            kind: "hogar".to_owned(),
            image: "https://img.example/i.jpg".to_owned(),
            price: None,
        }
    }

    #[test]
    fn test_empty_cart_composes_empty_string() {
        assert_eq!(compose_message(&Cart::new()), "");
    }

    #[test]
    fn test_single_entry_message() {
        let mut cart = Cart::new();
        cart.add(&item("Vainilla", "Dulce"), 2);

        let message = compose_message(&cart);
        assert!(message.starts_with(GREETING));
        assert!(message.contains("Vainilla x 2"));
        assert!(message.ends_with("Total: 2 unidades"));
    }

    #[test]
    fn test_entries_render_in_cart_order() {
        let mut cart = Cart::new();
        cart.add(&item("Vainilla", "Dulce"), 1);
        cart.add(&item("Citrus", "Cítrico"), 3);

        let message = compose_message(&cart);
        let vainilla = message.find("\u{2022} Vainilla x 1").unwrap();
        let citrus = message.find("\u{2022} Citrus x 3").unwrap();
        assert!(vainilla < citrus);
        assert!(message.ends_with("Total: 4 unidades"));
    }

    #[test]
    fn test_blank_line_before_total() {
        let mut cart = Cart::new();
        cart.add(&item("Vainilla", "Dulce"), 2);
        assert!(compose_message(&cart).contains("\n\nTotal: "));
    }

    #[test]
    fn test_link_is_none_for_empty_message() {
        assert_eq!(whatsapp_link("573137873766", ""), None);
    }

    #[test]
    fn test_link_percent_encodes_message() {
        let link = whatsapp_link("573137873766", "hola mundo\ntotal").unwrap();
        assert_eq!(
            link,
            "https://wa.me/573137873766?text=hola%20mundo%0Atotal"
        );
    }

    #[test]
    fn test_link_carries_composed_message() {
        let mut cart = Cart::new();
        cart.add(&item("Vainilla", "Dulce"), 2);

        let message = compose_message(&cart);
        let link = whatsapp_link("573137873766", &message).unwrap();
        assert!(link.starts_with("https://wa.me/573137873766?text="));
        assert!(link.contains("Vainilla%20x%202"));
        assert!(!link.contains(' '));
    }
}
