//! Shared application state.
//!
//! DESIGN
//! ======
//! The page depends only on the compiled-in catalog, so it is rendered once
//! at startup and every request clones the same `Bytes` handle.

use axum::body::Bytes;
use client::catalog::{self, CatalogError};

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub page: Bytes,
}

impl AppState {
    #[must_use]
    pub fn new(page: impl Into<Bytes>) -> Self {
        Self { page: page.into() }
    }

    /// Validate the catalog and render the members page.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the compiled-in catalog breaks an invariant.
    pub fn from_catalog() -> Result<Self, CatalogError> {
        let modules = catalog::catalog();
        catalog::validate(modules)?;

        let page = client::app::render_document();
        tracing::info!(modules = modules.len(), bytes = page.len(), "members page rendered");
        Ok(Self::new(page))
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;
