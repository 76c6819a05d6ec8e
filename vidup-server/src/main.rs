use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = vidup_server::load_config();
    let settings = vidup_server::ServerSettings::from_config(&config)?;
    let ax = vidup_server::build(&settings).await?;

    ax.listen(settings.listen_addr()).await?;

    Ok(())
}
