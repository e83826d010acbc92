//! Info command - show version and dictionary information

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {}

/// Dictionary information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub database: String,
    pub size_bytes: Option<u64>,
    pub entries: u64,
}

/// Execute the info command
pub fn execute(
    _args: InfoArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let database = &services.config.storage.database_path;
    let size_bytes = std::fs::metadata(database).ok().map(|m| m.len());

    let info = InfoResponse {
        name: "kotoba".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string_lossy().into_owned(),
        size_bytes,
        entries: services.store.entry_count()?,
    };

    output::print_output(&info, format, |info| {
        output::print_header(&format!("{} {}", info.name, info.version));
        println!("Database: {}", colors::file_path(&info.database));
        if let Some(size) = info.size_bytes {
            println!("Size: {}", colors::number(&output::format_bytes(size)));
        }
        println!("Entries: {}", colors::number(&info.entries.to_string()));
    })?;
    Ok(())
}
