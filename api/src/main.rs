use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::info;
use std::time::Duration;

use rr_api::app::create_app;
use rr_api::middleware::auth::TokenValidators;
use rr_api::routes::rum::AppState;
use rr_infra::metrics::create_metrics_backend;
use rr_infra::relay::{RelayClient, RelayClientConfig};
use rr_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting RUM relay");

    // Load configuration; a missing or empty token secret aborts startup
    // here, before any traffic is served
    let config = AppConfig::from_env().context("relay configuration is invalid")?;

    let validators = web::Data::new(
        TokenValidators::from_config(&config.auth)
            .context("token services could not be constructed")?,
    );

    let backend = create_metrics_backend(&config.metrics).await;
    info!("Metrics backend: {}", backend.provider_name());

    let relay = RelayClient::new(RelayClientConfig::loopback(config.server.port))
        .context("loopback relay client could not be constructed")?;

    let state = web::Data::new(AppState {
        backend,
        namespace: config.metrics.namespace.clone(),
        relay,
    });

    let bind_address = config.server.bind_address();
    info!(
        "Relay listening on {} ({} environment)",
        bind_address, config.environment
    );

    let max_payload_size = config.server.max_payload_size;

    let mut server = HttpServer::new(move || {
        create_app(state.clone(), validators.clone(), max_payload_size)
    })
    .keep_alive(Duration::from_secs(config.server.keep_alive))
    .bind(&bind_address)
    .with_context(|| format!("could not bind {}", bind_address))?;

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server.run().await?;
    Ok(())
}
