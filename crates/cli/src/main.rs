use clap::Parser;
use cotendo_dns_application::MarkupCodec;
use cotendo_dns_domain::{CliOverrides, ProviderResponse};
use cotendo_dns_infrastructure::LenientMarkupCodec;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod commands;

use commands::Command;

#[derive(Parser)]
#[command(name = "cotendo-dns")]
#[command(version)]
#[command(about = "Cotendo DNS - edit zone configurations offline")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Provider configuration to read; stdin when omitted or "-"
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<String>,

    /// Opaque session token carried with the configuration
    #[arg(short = 't', long, default_value = "")]
    token: String,

    /// Write the result here instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<String>,

    /// Keep SRV records instead of dropping them when sorting
    #[arg(long)]
    retain_srv: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        retain_srv: cli.retain_srv,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        command = cli.command.name(),
        "Starting cotendo-dns"
    );

    let raw = commands::read_input(cli.input.as_deref())?;
    let response = ProviderResponse::new(cli.token.as_str(), raw);
    let codec: Arc<dyn MarkupCodec> = Arc::new(LenientMarkupCodec::new(&config.markup));

    let output = commands::execute(&cli.command, response, codec, &config.zone)?;
    commands::write_output(cli.output.as_deref(), &output)?;

    Ok(())
}
