use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use service::customer::CustomerService;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Router over a fresh, empty in-memory customer store.
pub fn build_app() -> Router {
    routes::build_router(ServerState::new(CustomerService::in_memory()), build_cors())
}

fn bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    let raw = server.bind_addr();
    raw.parse().map_err(|e| StartupError::InvalidConfig(format!("{raw}: {e}")))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Serve `app` on an already bound listener until Ctrl+C.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Bind the configured address and run the HTTP server.
pub async fn run_with(config: AppConfig) -> anyhow::Result<()> {
    let addr = bind_addr(&config.server)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| StartupError::Bind { addr: addr.to_string(), reason: e.to_string() })?;
    info!(%addr, "customer service listening");
    serve(listener, build_app()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_accepts_ip_hosts() {
        let cfg = ServerConfig { host: "127.0.0.1".into(), port: 8080, worker_threads: None };
        assert_eq!(bind_addr(&cfg).unwrap(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn bind_addr_rejects_unparseable_hosts() {
        let cfg = ServerConfig { host: "not a host".into(), port: 8080, worker_threads: None };
        assert!(matches!(bind_addr(&cfg), Err(StartupError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn run_with_reports_bind_failure() -> anyhow::Result<()> {
        let taken = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
        let port = taken.local_addr()?.port();
        let cfg = AppConfig {
            server: ServerConfig { host: "127.0.0.1".into(), port, worker_threads: None },
        };
        let err = run_with(cfg).await.unwrap_err();
        assert!(matches!(err.downcast_ref::<StartupError>(), Some(StartupError::Bind { .. })));
        Ok(())
    }
}
