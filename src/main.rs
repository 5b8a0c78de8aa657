use clap::Parser;
use gradelens_lib::commands::fetch::ApiClient;
use gradelens_lib::commands::profile::{build_profile, read_snapshot};
use gradelens_lib::error::{GradelensError, Result};
use serde_json::Value;
use std::io::{self, Read, Write};

#[derive(Parser, Debug)]
#[command(name = "gradelens", version, about = "Derive dashboard view models from a learning-platform profile snapshot")]
struct Cli {
    /// Snapshot JSON file (defaults to stdin when no endpoint is given)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// GraphQL endpoint to fetch the snapshot from
    #[arg(long = "endpoint")]
    endpoint: Option<String>,

    /// Bearer token for the endpoint
    #[arg(long = "token")]
    token: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Pretty-print the output JSON
    #[arg(long = "pretty")]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let raw: Value = match (&cli.endpoint, &cli.token) {
        (Some(endpoint), Some(token)) => ApiClient::new(endpoint).fetch_profile(token)?,
        (Some(_), None) => {
            return Err(GradelensError::Api(
                "--endpoint requires --token".to_string(),
            ))
        }
        _ => match &cli.input {
            Some(path) => read_snapshot(path)?,
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                serde_json::from_str(&buffer)?
            }
        },
    };

    let profile = build_profile(&raw)?;
    log::info!(
        "derived profile for '{}': {} xp, {} skills ranked",
        profile.login,
        profile.aggregates.total_xp,
        profile.top_skills.len()
    );

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&profile)?
    } else {
        serde_json::to_string(&profile)?
    };

    match cli.output {
        Some(path) => std::fs::write(path, rendered)?,
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(rendered.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}
