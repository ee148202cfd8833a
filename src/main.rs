use std::path::PathBuf;

use tokio::net::TcpListener;

use trace_gateway::config::{load_config, GatewayConfig};
use trace_gateway::http::HttpServer;
use trace_gateway::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration before telemetry: the subscriber stack depends
    // on it (filter, exporter endpoint).
    let config = match std::env::var_os("TRACE_GATEWAY_CONFIG") {
        Some(path) => load_config(&PathBuf::from(path))?,
        None => GatewayConfig::default(),
    };

    let telemetry = observability::init(&config);

    tracing::info!("trace-gateway v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        remote_service_name = %config.propagation.remote_service_name,
        telemetry_enabled = config.telemetry.enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let server = HttpServer::new(config);
    server.run(listener).await?;

    telemetry.shutdown();
    tracing::info!("Shutdown complete");
    Ok(())
}
