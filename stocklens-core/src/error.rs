use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading or writing a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog `{path}`: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write catalog `{path}`: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("catalog `{path}` is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("catalog does not match the catalog schema:\n{}", .0.join("\n"))]
    Schema(Vec<String>),

    #[error("catalog validation failed:\n{}", .0.join("\n"))]
    Invalid(Vec<String>),
}

impl CatalogError {
    /// Individual messages behind a schema or validation failure
    pub fn details(&self) -> Vec<String> {
        match self {
            CatalogError::Schema(errors) | CatalogError::Invalid(errors) => errors.clone(),
            other => vec![other.to_string()],
        }
    }
}
