//! # Catalog Source
//!
//! The menu document comes from a remote endpoint the app does not control.
//! This module models that collaborator as an async trait with two terminal
//! outcomes, a parsed [`CatalogDocument`] or a [`CatalogError`], and keeps
//! the transport itself behind the trait boundary.

use crate::model::CatalogDocument;
use async_trait::async_trait;
use thiserror::Error;

/// Errors a catalog fetch can end in.
///
/// Neither variant ever reaches the user: the menu screen logs the failure and
/// keeps serving an empty section list.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The read itself failed (connectivity, timeout, non-2xx …).
    #[error("Catalog transport error: {0}")]
    Transport(String),

    /// The response arrived but is not a valid menu document.
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A provider of the menu document.
///
/// Implementations are injected into the menu screen as its context, which is
/// what makes the fetch swappable in tests (a canned document, a failing
/// source, a deliberately slow one).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Performs the one-shot read. Exactly one of: the parsed document, or an
    /// error the caller is expected to swallow into an empty menu.
    async fn fetch(&self) -> Result<CatalogDocument, CatalogError>;
}

/// A source serving a fixed JSON document through the real wire parser.
///
/// Used by the demo binary and tests; parsing happens per fetch so the parse
/// failure path is exercised exactly like a malformed remote response.
pub struct StaticCatalog {
    json: String,
}

impl StaticCatalog {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch(&self) -> Result<CatalogDocument, CatalogError> {
        Ok(serde_json::from_str(&self.json)?)
    }
}
