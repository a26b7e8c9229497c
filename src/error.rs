//! Errors raised while binding components to the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure to attach a component to its DOM subtree.
///
/// `Missing` is the expected outcome on pages that omit a feature and is
/// treated as "component disabled", not as a fault.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("no element matches {0}")]
    Missing(String),
    #[error("{anchor} is not a {expected}")]
    WrongType { anchor: String, expected: &'static str },
    #[error("browser call failed: {0}")]
    Js(String),
    #[error(transparent)]
    Form(#[from] crate::form::FormError),
}

impl BindError {
    /// Whether the error only means the page lacks an optional anchor.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }

    pub fn missing(anchor: impl Into<String>) -> Self {
        Self::Missing(anchor.into())
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for BindError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
