//! Sheet endpoint client: the one-shot catalog fetch.
//!
//! The catalog lives in a spreadsheet exposed over HTTP as a JSON array of
//! rows. It is fetched exactly once, at startup; there is no retry and no
//! cache. A failed fetch leaves the catalog empty and the site serves an
//! empty grid (see `main`).

use lightgel_core::SheetRecord;
use thiserror::Error;
use tracing::instrument;

use crate::config::StorefrontConfig;

/// Errors that can occur when fetching the catalog sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("Unexpected status {0} from sheet endpoint")]
    Status(reqwest::StatusCode),

    /// Response body was not a JSON array of rows.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the sheet endpoint.
#[derive(Clone)]
pub struct SheetClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SheetClient {
    /// Create a new sheet client for the configured endpoint.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.catalog_sheet_url.to_string(),
        }
    }

    /// Fetch and deserialize every row the endpoint serves.
    ///
    /// # Errors
    ///
    /// Returns [`SheetError`] on transport failure, a non-success status,
    /// or a body that is not a JSON array of rows.
    #[instrument(skip(self))]
    pub async fn fetch_rows(&self) -> Result<Vec<SheetRecord>, SheetError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();

        // Read the body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Sheet endpoint returned non-success status"
            );
            return Err(SheetError::Status(status));
        }

        let rows: Vec<SheetRecord> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse sheet response"
            );
            e
        })?;

        tracing::debug!(rows = rows.len(), "Fetched catalog rows");
        Ok(rows)
    }
}
