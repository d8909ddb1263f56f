use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAlertPublisher, InMemoryScreeningRepository};
use crate::routes::with_screening_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tenant_screening::config::AppConfig;
use tenant_screening::error::AppError;
use tenant_screening::screening::ScreeningService;
use tenant_screening::telemetry;
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

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryScreeningRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let screening_service = Arc::new(ScreeningService::new(
        repository,
        alerts,
        config.screening,
    ));

    let app = with_screening_routes(screening_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        alert_threshold = config.screening.alert_threshold.label(),
        "screening service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
