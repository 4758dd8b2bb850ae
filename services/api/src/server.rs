use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAccountRepository};
use crate::routes::with_submission_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use wsdc_submissions::config::AppConfig;
use wsdc_submissions::error::AppError;
use wsdc_submissions::submissions::SubmissionService;
use wsdc_submissions::telemetry;

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

    let accounts = Arc::new(InMemoryAccountRepository::seeded(
        config.auth.test_api_key.as_deref(),
        bcrypt::DEFAULT_COST,
    )?);
    let submission_service = Arc::new(SubmissionService::new());

    let app = with_submission_routes(submission_service, accounts)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "results submission service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
