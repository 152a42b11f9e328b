//! Error type shared by feature initializers.
//!
//! Features never surface errors to the visitor. Initializers return
//! `Result<(), SiteError>` so the entry point can log why a feature was
//! skipped and move on to the next one.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl SiteError {
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement(what.into())
    }

    /// Whether this error only means the page lacks the feature's markup.
    #[must_use]
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Log the outcome of a feature initializer. Missing markup is expected on
/// some pages and logs at debug; anything else is a warning.
#[cfg(feature = "hydrate")]
pub fn report(feature: &str, result: Result<(), SiteError>) {
    match result {
        Ok(()) => log::debug!("{feature}: ready"),
        Err(err) if err.is_missing_element() => log::debug!("{feature}: skipped ({err})"),
        Err(err) => log::warn!("{feature}: {err}"),
    }
}
