//! Search command - look up dictionary entries

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::search::MAX_RESULTS;
use crate::core::services::Services;
use crate::core::types::{SearchResponse, SearchResult};
use clap::Args;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Kanji, kana or English query
    pub query: String,

    /// Maximum number of results (1-50, defaults to the configured limit)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let limit = args.limit.map(|l| l.clamp(1, MAX_RESULTS));
    let response = services.search.search_with_limit(&args.query, limit)?;

    output::print_output(&response, format, print_human)?;
    Ok(())
}

fn print_human(response: &SearchResponse) {
    let summary = format!(
        "({}, {} pass, {})",
        response.category,
        response.pass,
        output::format_duration_ms(response.duration_ms)
    );

    if response.results.is_empty() {
        println!(
            "No entries found for '{}' {}",
            colors::label(&response.query),
            colors::category(&summary)
        );
        return;
    }

    println!(
        "Found {} entr{} for '{}' {}\n",
        colors::number(&response.count.to_string()),
        if response.count == 1 { "y" } else { "ies" },
        colors::label(&response.query),
        colors::category(&summary)
    );

    for (i, result) in response.results.iter().enumerate() {
        print_entry(i + 1, result);
    }

    if response.count == MAX_RESULTS {
        output::print_warning(&format!(
            "Showing the first {MAX_RESULTS} entries; refine the query to narrow them down"
        ));
    }
}

fn print_entry(rank: usize, result: &SearchResult) {
    // Entries without kanji forms are headed by their readings
    let (headword, readings) = if result.kanji.is_empty() {
        (result.readings.join("、"), String::new())
    } else {
        (result.kanji.join("、"), result.readings.join("、"))
    };

    let mut line = format!(
        "[{}] {}",
        colors::rank(&rank.to_string()),
        colors::headword(&headword)
    );
    if !readings.is_empty() {
        line.push_str(&format!(" 【{}】", colors::reading(&readings)));
    }
    line.push_str(&format!(" {}", colors::dim(&format!("#{}", result.id))));
    println!("{line}");

    if !result.meanings.is_empty() {
        println!("    {}", result.meanings.join("; "));
    }
    println!();
}
