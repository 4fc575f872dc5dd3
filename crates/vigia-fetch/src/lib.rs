//! Fetch layer: upstream collaborator traits and the fan-out/fan-in joins
//! that tolerate per-source and per-scope failure.
//!
//! The engine itself is synchronous; this crate is the only async seam.
//! Timeout and retry policy belong to the backends, not to the joins.

pub mod source;

#[cfg(feature = "http")]
pub mod http;

pub use source::{
    fetch_all_documents, fetch_annual_compliance, DocumentBatch, DocumentSource, TrainingSource,
};

#[cfg(feature = "http")]
pub use http::HttpBackend;

use thiserror::Error;

/// An upstream collaborator failed. The caller folds this into an empty
/// contribution for the failing source or scope; it is never fatal to the
/// batch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[cfg(feature = "http")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("source unavailable: {0}")]
    Unavailable(String),
}
