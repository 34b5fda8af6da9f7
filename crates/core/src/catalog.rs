//! Catalog rows, normalization, and the derived facet options.
//!
//! The catalog is a hand-maintained spreadsheet served over HTTP as a JSON
//! array of rows. Rows routinely have blank or missing cells, so every
//! field is optional on the wire and normalization substitutes a fixed
//! sentinel for anything missing, null, or empty. Downstream code never
//! deals with absence.
//!
//! The two facet-option lists are derived once, after normalization, in
//! first-occurrence order.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::filter::FilterSelection;

/// Sentinel shown when a row has no usable `nombre`.
pub const MISSING_NAME: &str = "NO NOMBRE";
/// Sentinel shown when a row has no usable `aroma`.
pub const MISSING_AROMA: &str = "NO AROMA";
/// Sentinel shown when a row has no usable `tipo`.
pub const MISSING_KIND: &str = "NO TIPO";

/// A raw spreadsheet row as served by the sheet endpoint.
///
/// Field names are the wire contract (`nombre`, `aroma`, `tipo`, `imagen`,
/// `precio`). `precio` tolerates a JSON number, a numeric string, or
/// garbage; anything unparseable degrades to absent rather than rejecting
/// the row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SheetRecord {
    pub nombre: Option<String>,
    pub aroma: Option<String>,
    pub tipo: Option<String>,
    pub imagen: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub precio: Option<Decimal>,
}

/// A normalized catalog item.
///
/// Identity for cart purposes is the exact `(name, aroma)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub aroma: String,
    /// The `tipo` facet (`type` is reserved in Rust).
    pub kind: String,
    /// Image URL; rows without one get the configured placeholder.
    pub image: String,
    /// Display-only price in COP; never part of identity or order totals.
    pub price: Option<Decimal>,
}

impl Item {
    /// Normalize a raw row, substituting sentinels field-by-field.
    fn from_record(record: SheetRecord, placeholder_image: &str) -> Self {
        Self {
            name: field_or(record.nombre, MISSING_NAME),
            aroma: field_or(record.aroma, MISSING_AROMA),
            kind: field_or(record.tipo, MISSING_KIND),
            image: field_or(record.imagen, placeholder_image),
            price: record.precio,
        }
    }
}

/// The normalized catalog plus its derived facet-option lists.
///
/// Loaded once at startup and read-only afterward.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    aroma_options: Vec<String>,
    kind_options: Vec<String>,
}

impl Catalog {
    /// Normalize `records` and derive the facet-option lists.
    ///
    /// `placeholder_image` is the substitute for rows without an `imagen`
    /// cell. Option lists keep first-occurrence order so renders are
    /// reproducible.
    #[must_use]
    pub fn from_records(records: Vec<SheetRecord>, placeholder_image: &str) -> Self {
        let items: Vec<Item> = records
            .into_iter()
            .map(|record| Item::from_record(record, placeholder_image))
            .collect();

        let mut aroma_options: Vec<String> = Vec::new();
        let mut kind_options: Vec<String> = Vec::new();
        for item in &items {
            // The aroma select has always been populated from product
            // *names* (the sheet names rows after their scent line), while
            // the predicate matches the aroma column. Kept as shipped.
            if item.name != MISSING_NAME && !aroma_options.contains(&item.name) {
                aroma_options.push(item.name.clone());
            }
            if item.kind != MISSING_KIND && !kind_options.contains(&item.kind) {
                kind_options.push(item.kind.clone());
            }
        }

        Self {
            items,
            aroma_options,
            kind_options,
        }
    }

    /// The catalog served when the fetch fails.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// All normalized items, in sheet order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Options for the aroma select, sourced from distinct `name` values.
    #[must_use]
    pub fn aroma_options(&self) -> &[String] {
        &self.aroma_options
    }

    /// Options for the tipo select, sourced from distinct `kind` values.
    #[must_use]
    pub fn kind_options(&self) -> &[String] {
        &self.kind_options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look an item up by exact cart identity.
    #[must_use]
    pub fn find(&self, name: &str, aroma: &str) -> Option<&Item> {
        self.items
            .iter()
            .find(|item| item.name == name && item.aroma == aroma)
    }

    /// Items passing the given selection, in catalog order.
    #[must_use]
    pub fn filtered(&self, selection: &FilterSelection) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| selection.matches(item))
            .collect()
    }
}

/// Pass a field through, or substitute the sentinel when it is missing,
/// null, or empty.
fn field_or(value: Option<String>, sentinel: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => sentinel.to_owned(),
    }
}

/// Deserialize a price cell leniently: number or numeric string parses,
/// anything else (blank cell, text, null) becomes `None`.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Parsed(Decimal),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Parsed(decimal)) => Some(decimal),
        Some(Raw::Text(text)) => text.trim().parse().ok(),
        _ => None,
    })
}
