use thiserror::Error;

/// Failures surfaced by the toggler. None of them are recovered from.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A required DOM element (control, icon, root, window or document) is
    /// not on the page.
    #[error("required DOM element not found: {0}")]
    MissingElement(String),

    /// The element exists but the browser rejected an operation on it.
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// The browser refused a storage read or write.
    #[error("storage access failed: {0}")]
    Storage(String),

    /// Page-supplied configuration is not valid.
    #[error("invalid theme config: {0}")]
    Config(#[from] serde_json::Error),
}

impl ThemeError {
    /// Shorthand for [`ThemeError::MissingElement`].
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement(what.into())
    }
}
