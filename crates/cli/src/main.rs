use clap::Parser;
use stubdns_domain::{CliOverrides, ResponseCode};
use stubdns_infrastructure::dns::StubResolver;
use tracing::{debug, error};

mod bootstrap;
mod output;

#[derive(Parser)]
#[command(name = "stubdns")]
#[command(version)]
#[command(about = "Minimal DNS stub resolver: looks up the IPv4 addresses of a domain")]
struct Cli {
    /// Domain name to resolve
    domain: String,

    /// Resolver address (IP or IP:PORT)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Resolver port, used when --server has none
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Seconds to wait for the reply (0 waits forever)
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Trace every decode step
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        port: cli.port,
        timeout_secs: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging, cli.verbose);

    debug!(
        server = %config.resolver.server,
        port = config.resolver.port,
        timeout_secs = config.resolver.timeout_secs,
        "Configuration loaded"
    );

    let resolver = StubResolver::from_config(&config.resolver)?;

    let result = resolver.lookup(&cli.domain).await.map_err(|e| {
        error!(domain = %cli.domain, error = %e, "Lookup failed");
        e
    })?;

    if result.response_code != ResponseCode::NoError {
        eprintln!(
            "Warning: server answered {}",
            result.response_code.as_str()
        );
    }

    output::print_lookup(&cli.domain, &result);
    Ok(())
}
