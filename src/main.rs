use anyhow::Context;
use mon_bondhu::ai::{TextGenerator, create_text_generator};
use mon_bondhu::api::{self, app_state::AppState};
use mon_bondhu::config::loader::ConfigLoader;
use mon_bondhu::observability::{
    AppMetrics, HealthCheckResult, ObservabilityState, create_observability_router, init_tracing,
};
use mon_bondhu::services::{DirectorySeed, seed_directory};
use mon_bondhu::storage::factory::StorageFactory;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config)?;

    let _log_guard = init_tracing(&config.logging)?;
    info!(
        app = %config.app_name,
        environment = %config.environment,
        "Starting Mon Bondhu..."
    );

    let repositories = StorageFactory::create(&config.database).await?;
    info!(backend = ?config.database.db_type, "Repositories initialized");

    let generator = create_text_generator(&config.ai)?;
    info!(generator = generator.name(), "Text generator initialized");

    let metrics = Arc::new(AppMetrics::default());
    let app_state = AppState::new(repositories, generator, &config.chat, metrics.clone());
    info!("Application state created");

    if let Some(path) = &config.database.seed_file {
        let seed = DirectorySeed::from_file(path)
            .with_context(|| format!("failed to read seed file {}", path.display()))?;
        seed_directory(app_state.directory.as_ref(), seed).await?;
    }

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION"),
        metrics,
    ));
    let started = Instant::now();
    let probe = app_state.chat_history.count().await;
    observability_state
        .add_health_check(HealthCheckResult {
            name: "storage".into(),
            healthy: probe.is_ok(),
            message: match &probe {
                Ok(count) => format!("{} chat exchanges stored", count),
                Err(e) => e.to_string(),
            },
            latency_ms: started.elapsed().as_millis() as u64,
        })
        .await;

    let router = create_observability_router(observability_state).merge(api::create_router(app_state));
    info!("API router created with observability endpoints");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
