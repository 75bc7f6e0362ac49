//! httprecord: a DNS server answering TXT/A/AAAA queries from HTTP(S)
//! backends at query time.

use clap::Parser;
use httprecord_domain::config::{CliOverrides, Config};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "httprecord")]
#[command(version)]
#[command(about = "DNS server answering queries from HTTP(S) backends")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the configured bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the configured DNS port
    #[arg(short = 'p', long)]
    dns_port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(
        cli.config.as_deref(),
        CliOverrides {
            bind_address: cli.bind,
            dns_port: cli.dns_port,
        },
    )?;

    bootstrap::logging::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        records = config.records.len(),
        zones = config.zones.len(),
        "configuration loaded"
    );

    let handler = di::build_handler(&config);

    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    server::dns::start_dns_server(bind_addr, handler).await
}
