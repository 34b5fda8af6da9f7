//! Catalog page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use lightgel_core::{FilterSelection, Item};

use crate::error::Result;
use crate::filters;
use crate::routes::cart::{self, CartSummaryView};
use crate::state::AppState;

/// Item display data for templates.
#[derive(Clone)]
pub struct ItemCardView {
    pub name: String,
    pub aroma: String,
    pub kind: String,
    pub image: String,
    pub price: Option<String>,
}

impl From<&Item> for ItemCardView {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            aroma: item.aroma.clone(),
            kind: item.kind.clone(),
            image: item.image.clone(),
            price: item.price.map(|p| format!("${p}")),
        }
    }
}

/// Facet selections carried in the query string. Absent = wildcard.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub aroma: Option<String>,
    pub tipo: Option<String>,
}

impl CatalogQuery {
    fn selection(&self) -> FilterSelection {
        FilterSelection::new(
            self.aroma.clone().unwrap_or_default(),
            self.tipo.clone().unwrap_or_default(),
        )
    }
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog.html")]
pub struct CatalogTemplate {
    pub items: Vec<ItemCardView>,
    pub aroma_options: Vec<String>,
    pub kind_options: Vec<String>,
    pub selected_aroma: String,
    pub selected_kind: String,
    pub placeholder_image: String,
    pub cart: CartSummaryView,
}

/// Display the catalog page: facet selects, the filtered grid, and the
/// current cart summary.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CatalogQuery>,
) -> Result<impl IntoResponse> {
    let selection = query.selection();
    let items = state
        .catalog()
        .filtered(&selection)
        .into_iter()
        .map(ItemCardView::from)
        .collect();

    let stored = cart::load_cart(&session).await?;
    let cart = CartSummaryView::build(&stored, &state.config().whatsapp_phone);

    Ok(CatalogTemplate {
        items,
        aroma_options: state.catalog().aroma_options().to_vec(),
        kind_options: state.catalog().kind_options().to_vec(),
        selected_aroma: selection.aroma,
        selected_kind: selection.kind,
        placeholder_image: state.config().placeholder_image_url.clone(),
        cart,
    })
}
