use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::routes::RouteTable;

pub async fn run(cfg: &Config, routes: RouteTable) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    serve(listener, routes, cfg.server.read_timeout()).await
}

/// Accept loop on an already-bound listener.
///
/// One task per connection; nothing a single connection does is fatal to the
/// loop, including accept errors.
pub async fn serve(
    listener: TcpListener,
    routes: RouteTable,
    read_timeout: Option<Duration>,
) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!("Failed to accept connection: {}", e);
                // A persistent failure (e.g. fd exhaustion) must not spin
                // the loop hot
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            }
        };

        let routes = routes.clone();
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, peer, routes, read_timeout);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
