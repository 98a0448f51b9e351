//! jest-dash: serve a filterable HTML dashboard for Jest JSON test-run
//! summaries.
//!
//! The interesting piece is [`summary::filter::filter_summary`], a pure
//! function that applies view filters to an uploaded summary and recomputes
//! every aggregate counter from the retained suites. Everything else —
//! upload handlers, fallback-snapshot persistence, HTML rendering — is glue
//! around it.

pub mod cli;
pub mod ingest;
pub mod render;
pub mod server;
pub mod store;
pub mod summary;
