//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod classify;
pub mod completions;
pub mod config;
pub mod info;
pub mod search;

// Re-export argument types for use in mod.rs
pub use classify::ClassifyArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use info::InfoArgs;
pub use search::SearchArgs;
