use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{any, get},
    Router,
};
use serde::Deserialize;

use crate::application_service::key_service::generate_keys_as_json;

use super::AppState;

pub const JWK_PATH: &str = "/jwk";
pub const HELP_PATHS: [&str; 4] = ["/help", "/usage", "/h", "/u"];

#[derive(Debug, Default, Deserialize)]
pub struct JwkQuery {
    pub kty: Option<String>,
    pub params: Option<String>,
}

/// `/jwk` answers `GET` only, other methods get the usage page with 400. The
/// usage paths answer any method.
pub fn routes() -> Router<Arc<AppState>> {
    let jwk = get(generate_jwk).fallback(bad_request);
    HELP_PATHS
        .into_iter()
        .fold(Router::new().route(JWK_PATH, jwk), |router, path| {
            router.route(path, any(usage))
        })
}

async fn generate_jwk(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<JwkQuery>, QueryRejection>,
) -> Response {
    let Ok(Query(JwkQuery {
        kty: Some(kty),
        params,
    })) = query
    else {
        tracing::debug!("jwk request without a usable kty");
        return usage_response(&state, &headers, StatusCode::BAD_REQUEST);
    };

    tracing::info!(%kty, ?params, "jwk request");

    // RSA-4096 takes long enough to stall an async worker.
    let result =
        tokio::task::spawn_blocking(move || generate_keys_as_json(&kty, params.as_deref())).await;

    match result {
        Ok(Ok(body)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "jwk request rejected");
            usage_response(&state, &headers, StatusCode::BAD_REQUEST)
        }
        Err(e) => {
            tracing::error!(error = %e, "key generation task failed");
            usage_response(&state, &headers, StatusCode::BAD_REQUEST)
        }
    }
}

async fn usage(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    usage_response(&state, &headers, StatusCode::OK)
}

async fn bad_request(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    usage_response(&state, &headers, StatusCode::BAD_REQUEST)
}

/// Handles every request the router did not match. Paths are compared
/// case-insensitively, anything still unknown gets the usage page with 400.
pub async fn fallback(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    query: Result<Query<JwkQuery>, QueryRejection>,
) -> Response {
    let path = uri.path().to_lowercase();
    if path == JWK_PATH && method == Method::GET {
        return generate_jwk(State(state), headers, query).await;
    }
    if HELP_PATHS.contains(&path.as_str()) {
        return usage_response(&state, &headers, StatusCode::OK);
    }

    tracing::debug!(path = uri.path(), "unknown path");
    usage_response(&state, &headers, StatusCode::BAD_REQUEST)
}

fn usage_response(state: &AppState, headers: &HeaderMap, status: StatusCode) -> Response {
    let base_url = base_url(state, headers);
    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        usage_text(&base_url),
    )
        .into_response()
}

fn base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(url) = &state.public_base_url {
        return url.trim_end_matches('/').to_string();
    }

    let header_value = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    let proto = header_value("x-forwarded-proto").unwrap_or("http");
    let host = header_value("host").unwrap_or("localhost");
    format!("{proto}://{host}")
}

pub fn usage_text(base_url: &str) -> String {
    format!(
        r#"Usage:

    curl {base_url}/jwk?kty=kty[&params=params]

where:

    kty: is one of RSA or EC for the type of the key pair

    params: is optional and depends on the type of the key pair as follows

        For RSA keys it must be an integer determining the size of the private key,
        one of 1024, 2048 or 4096. The default value is 4096.

        For EC keys it is the crv value and must be one of P-256, P-384 or P-521.
        The default value is P-521.

Examples, using curl and jq:

    RSA with 4096: curl -s "{base_url}/jwk?kty=RSA" | jq .

    RSA with 2048: curl -s "{base_url}/jwk?kty=RSA&params=2048" | jq .

    EC with P-521: curl -s "{base_url}/jwk?kty=EC" | jq .

    EC with P-256: curl -s "{base_url}/jwk?kty=EC&params=P-256" | jq .

Use {base_url}/help or {base_url}/usage to print this page.
"#
    )
}
