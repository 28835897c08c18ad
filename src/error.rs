//! Error types shared by the storage and configuration layers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("storage read failed for key {key}: {message}")]
    StorageRead { key: String, message: String },

    #[error("storage write failed for key {key}: {message}")]
    StorageWrite { key: String, message: String },

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "hydrate")]
pub(crate) fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
