//! Player registry server
//!
//! - `api` - HTTP routes, extractors and server wiring (axum)
//! - `core` - Configuration, CLI, storage paths and shutdown
//! - `data` - Player stores (SQLite, in-memory) and the filter engine
//! - `domain` - Validation, level progression and player orchestration
//! - `utils` - Small shared helpers

pub mod api;
pub mod app;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;
