// src/error.rs
use std::io;

use thiserror::Error;

/// Why a single category produced no usable candidate.
///
/// Always absorbed: the aggregator turns any of these into a fallback entry
/// or an "unavailable" cell. Kept `Clone` because one failed page fetch is
/// reported for every category that reads from that page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("network disabled")]
    Offline,

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("no candidate found on {url}")]
    NoMatch { url: String },

    #[error("candidate {model:?} rejected")]
    Rejected { model: String },

    #[error("category is not scraped live")]
    NotScraped,

    #[error("adapter panicked: {0}")]
    Panicked(String),
}

/// Errors that can stop a run: only writing outputs and reading options.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("snapshot serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rendering failed: {0}")]
    Render(#[from] minijinja::Error),

    #[error("invalid option: {0}")]
    Options(String),
}

pub type Result<T> = std::result::Result<T, Error>;
