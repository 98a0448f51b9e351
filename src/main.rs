use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use jest_dash::cli::config::{load_config, resolve_settings, Cli};
use jest_dash::server::state::AppState;
use jest_dash::store::report_store::ReportStore;
use jest_dash::store::snapshot::FileSnapshot;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = load_config(cli.config.as_deref());
    let settings = resolve_settings(&cli, &config);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    let snapshot = FileSnapshot::new(&settings.snapshot_path);
    let store = Arc::new(ReportStore::new(Box::new(snapshot)));

    jest_dash::server::serve(addr, AppState::new(store)).await?;
    Ok(())
}
