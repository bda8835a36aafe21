//! Binding and configuration errors

use thiserror::Error;

/// Invalid layout configuration
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure to resolve the form's elements
#[derive(Debug, Error)]
pub enum BindError {
    #[error("no window or document available")]
    NoDocument,

    #[error("element #{id} not found")]
    MissingElement { id: String },

    #[error("element #{id} is not {expected}")]
    WrongElementType { id: String, expected: &'static str },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
