use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_crm_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use studio_crm::config::AppConfig;
use studio_crm::error::AppError;
use studio_crm::telemetry;
use studio_crm::workflows::crm::{HttpSyncDispatcher, JsonFileStorage, LeadStore};
use studio_crm::workflows::quiz::ensure_catalog_integrity;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;
    ensure_catalog_integrity()?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let storage = Arc::new(JsonFileStorage::new(config.storage.data_dir.clone()));
    let sync = Arc::new(HttpSyncDispatcher::spawn()?);
    let store = Arc::new(LeadStore::open(storage, sync).await?);

    let app = with_crm_routes(store)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "studio crm service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
