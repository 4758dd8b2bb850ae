use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use http_body_util::LengthLimitError;
use tracing::warn;

use super::decode::request_from_slice;
use super::domain::SubmitterIdentity;
use super::response::ServiceResponse;
use super::service::{Clock, SubmissionAction, SubmissionService};
use super::validation::Severity;
use crate::error::AppError;

/// Upper bound on an accepted submission body.
pub const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Router exposing the validate and submit endpoints.
///
/// The caller's identity is read from a [`SubmitterIdentity`] request extension when an
/// upstream layer has attached one.
pub fn submission_router<C>(service: Arc<SubmissionService<C>>) -> Router
where
    C: Clock + 'static,
{
    Router::new()
        .route("/api/results/validate", post(validate_handler::<C>))
        .route("/api/results/submit", post(submit_handler::<C>))
        .with_state(service)
}

pub(crate) async fn validate_handler<C>(
    State(service): State<Arc<SubmissionService<C>>>,
    request: Request,
) -> Response
where
    C: Clock + 'static,
{
    respond(&service, SubmissionAction::Validate, request).await
}

pub(crate) async fn submit_handler<C>(
    State(service): State<Arc<SubmissionService<C>>>,
    request: Request,
) -> Response
where
    C: Clock + 'static,
{
    respond(&service, SubmissionAction::Submit, request).await
}

async fn respond<C>(
    service: &SubmissionService<C>,
    action: SubmissionAction,
    request: Request,
) -> Response
where
    C: Clock + 'static,
{
    let identity = request.extensions().get::<SubmitterIdentity>().cloned();
    let body = match axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(err) if exceeds_body_limit(&err) => {
            warn!(stage = action.label(), limit = MAX_BODY_BYTES, "submission body too large");
            let envelope = ServiceResponse::<()>::single_failure(
                "PAYLOAD_TOO_LARGE",
                format!("Request body must not exceed {MAX_BODY_BYTES} bytes"),
                Some("$".to_string()),
                Severity::Error,
            );
            return (StatusCode::PAYLOAD_TOO_LARGE, Json(envelope)).into_response();
        }
        Err(err) => return AppError::from(err).into_response(),
    };

    let envelope = match request_from_slice(&body) {
        Ok(submission) => service.process(action, submission.as_ref(), identity.as_ref()),
        Err(err) => {
            warn!(stage = action.label(), error = %err, "submission body could not be decoded");
            ServiceResponse::malformed(err.to_string())
        }
    };

    let status = if envelope.has_errors {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };
    (status, Json(envelope)).into_response()
}

fn exceeds_body_limit(err: &axum::Error) -> bool {
    let mut cause = std::error::Error::source(err);
    while let Some(inner) = cause {
        if inner.is::<LengthLimitError>() {
            return true;
        }
        cause = inner.source();
    }
    false
}
