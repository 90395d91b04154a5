//! facegate - face detection proxy binary
//!
//! Configuration comes from `FACEGATE_*` environment variables, a `.env`
//! file or `facegate.toml`; see `ServerConfig::load`.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
