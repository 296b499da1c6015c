//! radmcp - protocol gateway for the Radius CLI.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

mod commands;
mod input;
mod output;
pub(crate) mod shared;

/// radmcp - expose `rad` commands as remotely invokable tools.
#[derive(Debug, Parser)]
#[command(name = "radmcp", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run the gateway over HTTP or stdio.
    Serve(commands::serve::ServeArgs),
    /// Print the tool catalog.
    Tools(commands::tools::ToolsArgs),
    /// Run one tool locally, without a server.
    Call(commands::call::CallArgs),
    /// Exercise a running gateway over HTTP.
    Client(commands::client::ClientArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = radmcp_config::load_config(cli.config.as_deref())?;

    let filter = match cli.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    };

    tracing::debug!(config = ?cli.config, "radmcp starting");

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::Tools(args) => commands::tools::execute(args, &config),
        Commands::Call(args) => commands::call::execute(args, &config).await,
        Commands::Client(args) => commands::client::execute(args, &config).await,
    }
}
