//! Classify command - show the script category of a query

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::script::{classify, Category};
use crate::core::search::SearchStrategy;
use crate::core::types::Field;
use clap::Args;
use serde::Serialize;

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Query to classify
    pub query: String,
}

/// Classification response
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub query: String,
    pub category: Category,

    /// Fields a search for this query targets
    pub fields: Vec<Field>,
}

impl ClassifyResponse {
    pub fn new(query: String) -> Self {
        let category = classify(&query);
        let fields = SearchStrategy::for_category(category).fields().to_vec();
        Self {
            query,
            category,
            fields,
        }
    }
}

/// Execute the classify command
pub fn execute(args: ClassifyArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let response = ClassifyResponse::new(args.query);

    output::print_output(&response, format, |r| {
        let fields: Vec<&str> = r.fields.iter().map(|f| f.as_str()).collect();
        println!("{}", colors::category(r.category.as_str()));
        println!("  {} {}", colors::label("Searches:"), fields.join(", "));
    })?;
    Ok(())
}
