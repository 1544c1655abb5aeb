//! Error Types
//!
//! Errors raised at the edges of the app: config parsing and mounting.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid list config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("mount id must not be empty")]
    EmptyMountId,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("no document available")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(String),
    #[error("element `{0}` is not an HTML element")]
    NotHtmlElement(String),
}
