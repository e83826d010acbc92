//! Config command - show current configuration

use crate::cli::output;
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    #[serde(flatten)]
    pub config: &'a Config,
}

/// Execute the show-config command
pub fn execute(
    _args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse {
        config_file: XdgDirs::new().config_file().to_string_lossy().into_owned(),
        config,
    };

    output::print_output(&response, format, |r| {
        println!("Configuration:");
        println!("  config_file: {}", r.config_file);
        println!("  server:");
        println!("    host: {}", r.config.server.host);
        println!("    port: {}", r.config.server.port);
        println!("  storage:");
        println!("    database_path: {}", r.config.storage.database_path.display());
        println!("  search:");
        println!("    max_results: {}", r.config.search.max_results);
        println!("    max_query_length: {}", r.config.search.max_query_length);
        println!("  limits:");
        println!("    request_timeout_sec: {}", r.config.limits.request_timeout_sec);
    })?;
    Ok(())
}
