use std::fs::File;

use slserve::{AppConfig, Cli, impls::ServerApp};
use smartload_axum::{router, start_server};
use tracing::{Level, event};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Every crate in the workspace reports through `tracing`; RUST_LOG picks
    // what reaches stdout.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::import()?;
    let AppConfig { server } = AppConfig::load(&cli)?;
    let app = ServerApp;

    // If requested, dump the schema and exit.
    if let Some(path) = cli.schema {
        let schema = router(app, server).1;
        serde_json::to_writer_pretty(File::create(&path)?, &schema)?;
        event!(Level::INFO, path = %path.display(), "wrote OpenAPI schema");
        return Ok(());
    }

    start_server(server, app).await?;
    Ok(())
}
