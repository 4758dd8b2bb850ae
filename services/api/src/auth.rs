use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;
use wsdc_submissions::error::AppError;
use wsdc_submissions::submissions::{authenticate, bearer_token, AccountRepository};

const PUBLIC_PREFIXES: [&str; 3] = ["/health", "/ready", "/metrics"];

const MISSING_HEADER: &str =
    "Authorization header missing or invalid. Use 'Authorization: Bearer <api-key>'.";
const REJECTED_KEY: &str = "Invalid or revoked API Key";

fn is_public(path: &str) -> bool {
    let path = path.to_ascii_lowercase();
    PUBLIC_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Unauthorized", "message": message })),
    )
        .into_response()
}

/// Resolves the bearer key to an account and attaches its identity to the request.
pub(crate) async fn require_api_key<R>(
    State(accounts): State<Arc<R>>,
    mut request: Request,
    next: Next,
) -> Response
where
    R: AccountRepository + 'static,
{
    if is_public(request.uri().path()) {
        return next.run(request).await;
    }

    let api_key = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| bearer_token(Some(value)))
        .map(str::to_owned);
    let Some(api_key) = api_key else {
        return unauthorized(MISSING_HEADER);
    };

    // bcrypt verification is CPU bound.
    let verified =
        tokio::task::spawn_blocking(move || authenticate(accounts.as_ref(), &api_key)).await;
    let account = match verified {
        Ok(Ok(Some(account))) => account,
        Ok(Ok(None)) => return unauthorized(REJECTED_KEY),
        Ok(Err(err)) => return AppError::from(err).into_response(),
        Err(join_err) => return AppError::from(std::io::Error::from(join_err)).into_response(),
    };

    debug!(account_id = %account.id, "request authenticated");
    request.extensions_mut().insert(account.identity());
    next.run(request).await
}
