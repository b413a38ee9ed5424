//! One-shot user lookup from the command line.
//!
//! ```bash
//! DISCORD_BOT_TOKEN=... discord-lookup-cli 80351110224678912 --pretty
//! ```

use std::process::ExitCode;

use clap::Parser;
use discord_lookup::config::Config;
use discord_lookup::lookup::lookup;
use discord_lookup::state::AppState;

#[derive(Parser)]
#[command(name = "discord-lookup-cli")]
#[command(version)]
#[command(about = "Fetch a Discord user's public profile and print it as JSON")]
struct Cli {
    /// Discord user ID (snowflake)
    user_id: String,

    /// Pretty-print the JSON output
    #[arg(long, short)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "discord_lookup=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = lookup(&state.discord, &state.cdn_base, &cli.user_id).await;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };

    match rendered {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("failed to serialize result: {e}");
            return ExitCode::FAILURE;
        }
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
