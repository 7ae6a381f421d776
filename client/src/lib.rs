//! # client
//!
//! Leptos UI for the course members area.
//!
//! This crate owns the compiled-in module catalog, the page and card
//! components, and the glyph set. The host binary renders the document once
//! through [`app::render_document`] and serves the resulting HTML.

pub mod app;
pub mod catalog;
pub mod components;
pub mod pages;
pub mod util;
