//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of the HTTP and CLI adapters.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **script**: Query script classification
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **storage**: Dictionary store trait and SQLite implementation
//! - **search**: Strategy selection, two-pass search and ranking
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod script;
pub mod search;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{KotobaError, Result};
pub use services::Services;
