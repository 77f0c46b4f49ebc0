use dotenvy::dotenv;
use store_intake_server::{init_tracing, run, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    tracing::info!("Starting store intake server...");
    let config = ServerConfig::from_env()?;
    run(config).await
}
