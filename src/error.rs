// src/error.rs

use thiserror::Error;

use crate::core::net::FetchError;
use crate::specs::report::PageError;
use crate::store::StoreError;

/// Anything that stops one entity (or one listing/report request) from
/// being harvested. Section-level problems are not errors; see `specs::report::Issue`.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no registration iframe on {url}")]
    MissingIframe { url: String },

    #[error("bad URL {url}: {source}")]
    BadUrl { url: String, #[source] source: url::ParseError },

    #[error("malformed report from {url}: {source}")]
    Report { url: String, #[source] source: csv::Error },

    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ScrapeError {
    /// The URL involved, when there is one.
    pub fn url(&self) -> Option<&str> {
        match self {
            ScrapeError::Fetch(FetchError::Status { url, .. })
            | ScrapeError::Fetch(FetchError::Transport { url, .. })
            | ScrapeError::Fetch(FetchError::Body { url, .. })
            | ScrapeError::MissingIframe { url }
            | ScrapeError::BadUrl { url, .. }
            | ScrapeError::Report { url, .. } => Some(url),
            ScrapeError::Page(e) => Some(e.url()),
            ScrapeError::Store(_) => None,
        }
    }
}
