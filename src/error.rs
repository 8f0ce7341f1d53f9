//! Crate error type.

/// Errors that stop the map from loading.
///
/// Malformed individual CSV rows are not errors; they are logged and skipped
/// by [`crate::record::parse_csv`].
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The HTTP request for a data file could not be sent or read.
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },
    /// The server answered a data file request with a non-success status.
    #[error("fetching {url} returned status {status}")]
    Status { url: String, status: u16 },
    /// The CSV reader failed before any row could be read (e.g. bad headers).
    #[error("invalid expense CSV: {0}")]
    Csv(#[from] csv::Error),
    /// The CSV header row lacks a required column.
    #[error("expense CSV is missing column {0:?}")]
    MissingColumn(&'static str),
    /// The world boundaries file is not valid GeoJSON.
    #[error("invalid world GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),
    /// The `data-config` attribute could not be parsed.
    #[error("invalid map config: {0}")]
    Config(String),
    /// A DOM call failed or a required element is missing.
    #[error("dom error: {0}")]
    Dom(String),
}

impl MapError {
    /// Wrap a `JsValue` error from a DOM call.
    #[must_use]
    pub fn dom(value: &wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}
