use anyhow::Context;
use clap::Parser;
use roster_service::config::{self, AppConfig};
use roster_service::{logging, module, server, RosterModule};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Students and groups HTTP service
#[derive(Debug, Parser)]
#[command(name = "roster-server", version, about)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "ROSTER_CONFIG")]
    config: Option<PathBuf>,

    /// Override the bind address from configuration
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Run migrations and exit
    #[arg(long)]
    migrate_only: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = config::load_dotenv().context("failed to read .env file")?;
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(bind) = cli.bind {
        config.server.bind_addr = bind;
    }

    logging::init(&config.logging)?;
    if let Some(path) = dotenv {
        tracing::info!(path = %path.display(), "Loaded environment file");
    }

    let conn = module::connect(&config.database).await?;
    module::migrate(&conn).await?;

    if !cli.migrate_only {
        let roster = RosterModule::init(&conn, &config.api);
        server::run(roster.router(), config.server.bind_addr).await?;
    }

    conn.close().await.context("failed to close database connection")?;
    Ok(())
}
