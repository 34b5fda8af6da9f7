//! Cart route handlers.
//!
//! Cart mutations come in as HTMX form posts and answer with the cart
//! summary fragment plus an `HX-Trigger` header carrying client events:
//! a toast for every successful mutation and, for adds, the deferred
//! scroll of the summary region. The ledger's [`AddOutcome`] decides the
//! toast wording; the ledger itself performs no side effects.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderValue,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;
use tracing::instrument;

use lightgel_core::{AddOutcome, Cart, order};

use crate::error::Result;
use crate::state::AppState;

/// Session key holding the serialized cart.
const CART_KEY: &str = "pedido";

/// Cart entry display data for templates.
#[derive(Clone)]
pub struct CartEntryView {
    pub name: String,
    pub aroma: String,
    pub quantity: u32,
}

/// Cart summary display data for templates.
#[derive(Clone)]
pub struct CartSummaryView {
    pub entries: Vec<CartEntryView>,
    pub total_units: u32,
    /// Ready-to-open wa.me link; `None` while the cart is empty.
    pub whatsapp_url: Option<String>,
}

impl CartSummaryView {
    /// Project the cart (plus the configured recipient) into template data.
    #[must_use]
    pub fn build(cart: &Cart, phone: &str) -> Self {
        let message = order::compose_message(cart);
        Self {
            entries: cart
                .entries()
                .iter()
                .map(|entry| CartEntryView {
                    name: entry.name.clone(),
                    aroma: entry.aroma.clone(),
                    quantity: entry.quantity,
                })
                .collect(),
            total_units: cart.total_units(),
            whatsapp_url: order::whatsapp_link(phone, &message),
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session, defaulting to empty.
pub async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session.get::<Cart>(CART_KEY).await?.unwrap_or_default())
}

/// Store the cart back into the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(CART_KEY, cart).await?;
    Ok(())
}

/// Add to cart form data. `cantidad` arrives as raw text and is parsed
/// leniently: non-numeric or non-positive input clamps to 1, it never
/// rejects the request.
#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub nombre: String,
    pub aroma: String,
    pub cantidad: Option<String>,
}

/// Parse a quantity field, clamping anything unusable to 1.
fn parse_quantity(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .and_then(|q| u32::try_from(q).ok())
        .map_or(1, |q| q.max(1))
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub nombre: String,
    pub aroma: String,
}

/// Cart summary fragment template (HTMX swap target).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_summary.html")]
pub struct CartSummaryTemplate {
    pub cart: CartSummaryView,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Serialize events for the `HX-Trigger` header.
///
/// Header values must be ASCII, and product names are not ("Cítrico"), so
/// anything outside ASCII is re-escaped as JSON `\u` sequences.
fn header_safe_json(events: &serde_json::Value) -> String {
    use std::fmt::Write;

    let json = events.to_string();
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut buf = [0u16; 2];
            for unit in c.encode_utf16(&mut buf).iter() {
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out
}

/// Attach an `HX-Trigger` header with the given client events.
fn with_events(events: &serde_json::Value, response: impl IntoResponse) -> Response {
    let mut response = response.into_response();
    if let Ok(value) = HeaderValue::from_str(&header_safe_json(events)) {
        response.headers_mut().insert("HX-Trigger", value);
    }
    response
}

/// Add an item to the cart (HTMX).
///
/// The posted identity is looked up in the catalog so the stored entry
/// carries the catalog's metadata. An identity not in the catalog is a
/// logged no-op: the page only posts identities it rendered.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddForm>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await?;

    let Some(item) = state.catalog().find(&form.nombre, &form.aroma) else {
        tracing::warn!(
            nombre = %form.nombre,
            aroma = %form.aroma,
            "Add for identity not in catalog"
        );
        let summary = CartSummaryView::build(&cart, &state.config().whatsapp_phone);
        return Ok(CartSummaryTemplate { cart: summary }.into_response());
    };

    // Invalid quantities are clamped at the input boundary, not rejected.
    let quantity = parse_quantity(form.cantidad.as_deref());
    let outcome = cart.add(item, quantity);
    save_cart(&session, &cart).await?;

    let toast = match outcome {
        AddOutcome::Added { .. } => format!("{} agregado al pedido", item.name),
        AddOutcome::Merged { quantity } => {
            format!("{} ahora x{quantity} en el pedido", item.name)
        }
    };
    let events = json!({
        "cart-updated": { "count": cart.total_units() },
        "toast": { "level": "success", "message": toast },
        "scroll-to-summary": {},
    });

    let summary = CartSummaryView::build(&cart, &state.config().whatsapp_phone);
    Ok(with_events(&events, CartSummaryTemplate { cart: summary }))
}

/// Remove an entry from the cart (HTMX).
///
/// Removing an identity that is not in the cart is a no-op, not an error.
#[instrument(skip(state, session))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemoveForm>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await?;

    let removed = cart.remove(&form.nombre, &form.aroma);
    if removed {
        save_cart(&session, &cart).await?;
    }

    let mut events = json!({ "cart-updated": { "count": cart.total_units() } });
    if removed {
        events["toast"] = json!({ "level": "info", "message": "Producto eliminado" });
    }

    let summary = CartSummaryView::build(&cart, &state.config().whatsapp_phone);
    Ok(with_events(&events, CartSummaryTemplate { cart: summary }))
}

/// Cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<impl IntoResponse> {
    let cart = load_cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.total_units(),
    })
}
