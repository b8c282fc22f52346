//! Output format selection for rendered route summaries.

use std::fmt;

use anyhow::Result;
use clap::ValueEnum;

use blackrock_lib::RouteSummary;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable step list.
    #[default]
    Text,
    /// Pretty-printed JSON summary.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        f.write_str(value)
    }
}

/// Print a route summary to stdout in the requested format.
pub fn print_summary(summary: &RouteSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("\nThe shortest route is:\n{}", summary.render());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
    }
    Ok(())
}
