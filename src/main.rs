use waypoint::config::Config;
use waypoint::routes::RouteTable;
use waypoint::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    // Route-management code registers against this same handle; the table
    // starts with the default "/" route
    let routes = RouteTable::new();

    tokio::select! {
        res = server::listener::run(&cfg, routes) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
