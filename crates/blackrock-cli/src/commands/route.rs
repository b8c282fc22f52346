//! Route command handler for computing walks between TimeLetter addresses.

use std::fmt;
use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;

use blackrock_lib::{parse_address, plan_route, AnglePolicy, Position, RouteSummary};

use crate::output::{print_summary, OutputFormat};

/// Angular-displacement policy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PolicyArg {
    /// Historical displacement arithmetic of the original planner.
    #[default]
    Legacy,
    /// Wrapped and reflected displacement.
    Corrected,
}

impl From<PolicyArg> for AnglePolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::Legacy => AnglePolicy::Legacy,
            PolicyArg::Corrected => AnglePolicy::Corrected,
        }
    }
}

impl fmt::Display for PolicyArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PolicyArg::Legacy => "legacy",
            PolicyArg::Corrected => "corrected",
        };
        f.write_str(value)
    }
}

const ADDRESS_GUIDANCE: &str =
    "Invalid location. Enter in the form <time><letter>, for example 2A, 10B, 2:15C, 9:30D\n\
     Note that <time> ranges from 2 to 10, with h, h:15, h:30, h:45\n\
     Note that <letter> ranges from A-L";

/// Handle the route subcommand.
///
/// Endpoints missing from the command line are prompted for on stdin.
pub fn handle_route(
    from: Option<&str>,
    to: Option<&str>,
    policy: PolicyArg,
    format: OutputFormat,
) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let from = resolve_endpoint(from, "Enter your current location: ", &mut lines)?;
    let to = resolve_endpoint(to, "Enter your desired location: ", &mut lines)?;

    let current = parse_location(&from)?;
    let desired = parse_location(&to)?;

    let plan = plan_route(&current, &desired, policy.into());
    let summary = RouteSummary::from_plan(&current, &desired, &plan);

    print_summary(&summary, format)
}

fn parse_location(raw: &str) -> Result<Position> {
    parse_address(raw).with_context(|| ADDRESS_GUIDANCE.to_string())
}

fn resolve_endpoint(
    flag: Option<&str>,
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<String> {
    if let Some(value) = flag {
        return Ok(value.trim().to_string());
    }

    print!("{prompt}");
    io::stdout().flush().context("failed to flush prompt")?;
    let line = lines
        .next()
        .ok_or_else(|| anyhow!("no input for location prompt"))?
        .context("failed to read location from stdin")?;
    Ok(line.trim().to_string())
}
