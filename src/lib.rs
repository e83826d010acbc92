//! Kotoba - Japanese-English dictionary lookup service
//!
//! Classifies a query by script (kanji, kana, English or mixed),
//! searches the matching fields of a read-only SQLite dictionary and
//! returns entries ranked by match quality.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - script (query classification)
//!   - storage (dictionary store, SQLite + FTS5)
//!   - search (strategies, two-pass search, ranking)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - handlers, middleware, error responses
//!
//! - **cli**: Command line adapter (depends on core)
//!   - search, classify, info, show-config, completions
//!
//! # Search in short
//!
//! - Substring pass first, FTS5 prefix pass only when it finds nothing
//! - Rank: exact match, then substring, then incidental
//! - At most 50 results per query

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{KotobaError, Result};
pub use core::script::{classify, Category};
pub use core::services::Services;
pub use core::types::*;
