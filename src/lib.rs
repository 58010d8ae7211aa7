//! `DeckFlow` - slide deck structuring and template rendering pipeline.
//!
//! This crate turns raw deck outlines into render-ready structured
//! presentations: validating producer input, enriching slides with layout,
//! timing, and animation decisions, applying customizable templates, and
//! managing stored presentations through to export.

// Re-export public modules for use in integration tests and as a library
pub mod config;
pub mod constants;
pub mod error;
pub mod outline;
pub mod render;
pub mod services;
pub mod structure;
pub mod template;
pub mod types;
