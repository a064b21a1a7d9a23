use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`); fall back to environment variables only when the
/// file does not exist. A file that exists but fails to parse or validate is an error.
pub fn load_config() -> anyhow::Result<AppConfig> {
    match AppConfig::load_and_validate() {
        Ok(cfg) => Ok(cfg),
        Err(e) if is_missing_file(&e) => {
            warn!(error = %e, "config file not found, using environment");
            let mut cfg = AppConfig::from_env();
            cfg.normalize_and_validate()?;
            Ok(cfg)
        }
        Err(e) => Err(e),
    }
}

fn is_missing_file(err: &anyhow::Error) -> bool {
    err.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Public entry: connect storage, create missing tables, run the HTTP server.
/// Logging and `.env` are set up by the caller before `cfg` is loaded.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = connect_with_config(&DatabaseConfig::from(&cfg.database)).await?;
    migration::Migrator::up(&db, None).await?;
    info!("database schema up to date");

    let app: Router = routes::build_router(ServerState { db }, build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting salon booking server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
