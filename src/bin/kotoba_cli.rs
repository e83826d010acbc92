//! Kotoba CLI - Command-line interface for the Kotoba dictionary
//!
//! Searches the same dictionary database the HTTP server uses.
//!
//! # Examples
//!
//! ```bash
//! # Search by kanji, kana or English
//! kotoba search 食べる
//! kotoba search たべる --limit 5
//! kotoba search "to eat" --format json
//!
//! # Show which fields a query targets
//! kotoba classify コーヒー
//!
//! # Show dictionary and configuration
//! kotoba info
//! kotoba show-config
//! ```

use clap::Parser;
use kotoba::cli::{output, run, Cli};

fn main() {
    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kotoba=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
