use anyhow::Context;
use parking_manager::{
    configuration::Configuration, configuration_handler::ConfigurationHandler, http::create_app,
    local_slots::LocalSlots,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("###################");
    println!("# Parking Manager #");
    println!("###################");

    let configuration = ConfigurationHandler::parse_arguments();

    let backend = LocalSlots::default();
    if configuration.example_slots() {
        backend.insert_example_slots();
        info!("Inserted example slots");
    }

    let address = format!("0.0.0.0:{}", configuration.port());
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Accessible at http://{address}");

    let app = create_app(backend, configuration);
    axum::serve(listener, app).await.context("Server stopped")?;
    Ok(())
}
