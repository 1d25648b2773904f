//! Web server command

use std::path::Path;

use anyhow::Result;
use outlay_core::LocalStore;
use outlay_server::ServerConfig;
use tracing::info;

pub async fn cmd_serve(
    data: Option<&Path>,
    host: &str,
    port: u16,
    cors_origins: Vec<String>,
) -> Result<()> {
    let path = data
        .map(|p| p.to_path_buf())
        .unwrap_or_else(LocalStore::default_path);
    info!(path = %path.display(), "serving from data file");
    let store = LocalStore::open(path)?;

    let config = ServerConfig {
        allowed_origins: cors_origins,
    };

    outlay_server::serve(store, host, port, config).await
}
