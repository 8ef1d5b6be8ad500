//! HTTP helpers for the JSON API with consistent timeouts, bearer credential
//! attachment, and one-shot recovery from an expired access token. Feature
//! clients use these helpers to avoid duplicating request setup. Tokens are
//! read from the session storage module and never logged.
//!
//! Recovery contract: a request that receives a 401 is retried at most once,
//! after exchanging the persisted refresh token for a new access token. A
//! failed exchange clears the whole persisted session and sends the user back
//! to the login screen. Concurrent 401s each run their own exchange; there is
//! no cross-request coalescing.

use super::{config::AppConfig, errors::AppError};
use crate::features::auth::storage;
use crate::routes::paths;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Fetches JSON with the persisted access token attached when present.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let response = send_authorized(Method::Get, path, None).await?;
    handle_json_response(response).await
}

/// Fetches JSON with an explicit bearer token, bypassing the persisted
/// session. The login sequence uses this to validate a fresh token pair
/// before anything is persisted.
pub async fn get_json_with_bearer<T: DeserializeOwned>(
    path: &str,
    bearer: &str,
) -> Result<T, AppError> {
    let url = build_url(path);
    let authorization = format!("Bearer {bearer}");
    let response = send_with_timeout(move |signal| {
        Request::get(&url)
            .header("Authorization", &authorization)
            .abort_signal(Some(signal))
            .build()
            .map_err(|err| AppError::Serialization(format!("Falha ao montar a requisição: {err}")))
    })
    .await?;

    handle_json_response(response).await
}

/// Posts JSON and parses a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let payload = encode_body(body)?;
    let response = send_authorized(Method::Post, path, Some(payload)).await?;
    handle_json_response(response).await
}

/// Patches JSON and parses a JSON response.
pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let payload = encode_body(body)?;
    let response = send_authorized(Method::Patch, path, Some(payload)).await?;
    handle_json_response(response).await
}

/// Puts JSON and parses a JSON response.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, AppError> {
    let payload = encode_body(body)?;
    let response = send_authorized(Method::Put, path, Some(payload)).await?;
    handle_json_response(response).await
}

/// Deletes a resource and expects an empty response body.
pub async fn delete_json(path: &str) -> Result<(), AppError> {
    let response = send_authorized(Method::Delete, path, None).await?;
    handle_empty_response(response).await
}

#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    fn request(self, url: &str) -> RequestBuilder {
        match self {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Patch => Request::patch(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        }
    }
}

/// Sends a request with the persisted access token attached, retrying exactly
/// once after a successful refresh when the server answers 401.
async fn send_authorized(
    method: Method,
    path: &str,
    payload: Option<String>,
) -> Result<Response, AppError> {
    let url = build_url(path);
    let mut access = storage::access_token();
    let mut retried = false;

    loop {
        let request_url = url.clone();
        let bearer = access.clone();
        let body = payload.clone();
        let response = send_with_timeout(move |signal| {
            let mut builder = method.request(&request_url).abort_signal(Some(signal));
            if let Some(token) = bearer.as_deref() {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            match body {
                Some(payload) => builder
                    .header("Content-Type", "application/json")
                    .body(payload),
                None => builder.build(),
            }
            .map_err(|err| AppError::Serialization(format!("Falha ao montar a requisição: {err}")))
        })
        .await?;

        if !refresh_eligible(response.status(), retried) {
            return Ok(response);
        }
        let Some(refresh) = storage::refresh_token() else {
            return Ok(response);
        };

        match refresh_access_token(&refresh).await {
            Ok(token) => {
                storage::store_access_token(&token);
                access = Some(token);
                retried = true;
            }
            Err(err) => {
                log::warn!("token refresh failed, clearing session");
                storage::clear();
                force_login_redirect();
                return Err(err);
            }
        }
    }
}

/// Whether a response is a candidate for the one-shot refresh-and-retry.
fn refresh_eligible(status: u16, retried: bool) -> bool {
    status == 401 && !retried
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access: String,
}

/// Exchanges the refresh token for a new access token. The exchange itself
/// never carries a bearer and is never retried.
async fn refresh_access_token(refresh: &str) -> Result<String, AppError> {
    let url = build_url("/token/refresh/");
    let payload = encode_body(&RefreshRequest { refresh })?;
    let response = send_with_timeout(move |signal| {
        Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal))
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Falha ao montar a requisição: {err}")))
    })
    .await?;

    let parsed: RefreshResponse = handle_json_response(response).await?;
    Ok(parsed.access)
}

/// Hard navigation to the login screen after an unrecoverable auth failure.
fn force_login_redirect() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(paths::LOGIN);
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<String, AppError> {
    to_string(body).map_err(|err| AppError::Serialization(format!("Falha ao codificar: {err}")))
}

/// Builds a URL from the configured API base URL and the provided path.
fn build_url(path: &str) -> String {
    let config = AppConfig::load();
    build_url_with_base(&config.api_base_url, path)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("A requisição demorou demais. Tente novamente.".to_string())
    } else {
        AppError::Network(format!("Não foi possível conectar ao servidor: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Falha ao iniciar o timeout da requisição.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Falha ao decodificar a resposta: {err}")))
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
async fn handle_empty_response(response: gloo_net::http::Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status,
            message: sanitize_body(body),
        })
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Requisição falhou.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{build_url_with_base, refresh_eligible, sanitize_body};

    #[test]
    fn build_url_joins_base_and_path() {
        assert_eq!(
            build_url_with_base("http://localhost:8000/api", "/token/"),
            "http://localhost:8000/api/token/"
        );
        assert_eq!(
            build_url_with_base("http://localhost:8000/api/", "locations/map_data/"),
            "http://localhost:8000/api/locations/map_data/"
        );
        assert_eq!(build_url_with_base("", "/users/me/"), "/users/me/");
    }

    #[test]
    fn refresh_is_attempted_once_and_only_for_401() {
        assert!(refresh_eligible(401, false));
        assert!(!refresh_eligible(401, true));
        assert!(!refresh_eligible(403, false));
        assert!(!refresh_eligible(500, false));
        assert!(!refresh_eligible(200, false));
    }

    #[test]
    fn sanitize_body_trims_truncates_and_defaults() {
        assert_eq!(sanitize_body("  ".to_string()), "Requisição falhou.");
        assert_eq!(sanitize_body(" erro ".to_string()), "erro");

        let long = "x".repeat(500);
        assert_eq!(sanitize_body(long).chars().count(), 200);
    }
}
