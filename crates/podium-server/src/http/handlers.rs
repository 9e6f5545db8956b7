use crate::gate::{mint_session_token, SESSION_COOKIE};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use podium_api::params::{parse_horizon_param, parse_section_param};
use podium_api::{
    cost_impact_view, diagram_view, horizon_view, render, roadmap_view, trajectory_view, ApiError,
    openapi_v1_spec,
};
use podium_core::sha256_hex;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::Ordering;
use std::time::Instant;
use tracing::info;

pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    let body = Json(json!({"error": err}));
    (status, body).into_response()
}

pub(crate) fn session_token_from_headers(headers: &HeaderMap) -> Option<String> {
    for value in headers.get_all(header::COOKIE) {
        let Ok(raw) = value.to_str() else {
            continue;
        };
        for pair in raw.split(';') {
            if let Some(token) = pair.trim().strip_prefix(SESSION_COOKIE) {
                if let Some(token) = token.strip_prefix('=') {
                    if !token.is_empty() {
                        return Some(token.to_string());
                    }
                }
            }
        }
    }
    None
}

fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

fn if_none_match(headers: &HeaderMap) -> Option<String> {
    headers
        .get("if-none-match")
        .and_then(|v| v.to_str().ok())
        .map(std::string::ToString::to_string)
}

fn put_cache_headers(headers: &mut HeaderMap, max_age_secs: u64, etag: &str) {
    if let Ok(value) = HeaderValue::from_str(&format!("private, max-age={max_age_secs}")) {
        headers.insert("cache-control", value);
    }
    if let Ok(value) = HeaderValue::from_str(etag) {
        headers.insert("etag", value);
    }
}

fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

/// Shared shape for the gated content routes: payload ETag derived from
/// the serialized view, `if-none-match` answered with 304.
async fn content_response(
    state: &AppState,
    headers: &HeaderMap,
    route: &'static str,
    payload: Value,
    started: Instant,
    request_id: &str,
) -> Response {
    let etag = format!(
        "\"{}\"",
        sha256_hex(&serde_json::to_vec(&payload).unwrap_or_default())
    );
    let ttl = state.api.discovery_ttl.as_secs();
    if if_none_match(headers).as_deref() == Some(etag.as_str()) {
        let mut resp = StatusCode::NOT_MODIFIED.into_response();
        put_cache_headers(resp.headers_mut(), ttl, &etag);
        state
            .metrics
            .observe_request(route, StatusCode::NOT_MODIFIED, started.elapsed())
            .await;
        return with_request_id(resp, request_id);
    }
    let mut response = Json(payload).into_response();
    put_cache_headers(response.headers_mut(), ttl, &etag);
    state
        .metrics
        .observe_request(route, StatusCode::OK, started.elapsed())
        .await;
    with_request_id(response, request_id)
}

async fn error_response(
    state: &AppState,
    route: &'static str,
    status: StatusCode,
    err: ApiError,
    started: Instant,
    request_id: &str,
) -> Response {
    let resp = api_error_response(status, err);
    state
        .metrics
        .observe_request(route, status, started.elapsed())
        .await;
    with_request_id(resp, request_id)
}

pub(crate) async fn healthz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let resp = (StatusCode::OK, "ok").into_response();
    state
        .metrics
        .observe_request("/healthz", StatusCode::OK, started.elapsed())
        .await;
    resp
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    if state.ready.load(Ordering::Relaxed) {
        let resp = (StatusCode::OK, "ready").into_response();
        state
            .metrics
            .observe_request("/readyz", StatusCode::OK, started.elapsed())
            .await;
        return resp;
    }
    let resp = api_error_response(StatusCode::SERVICE_UNAVAILABLE, ApiError::not_ready());
    state
        .metrics
        .observe_request("/readyz", StatusCode::SERVICE_UNAVAILABLE, started.elapsed())
        .await;
    resp
}

pub(crate) async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    let text = state.metrics.render_exposition().await;
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        text,
    )
}

pub(crate) async fn version_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let payload = json!({
        "service": {
            "name": "podium",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "server": {
            "crate": crate::CRATE_NAME,
            "content_epoch": state.content_epoch,
        }
    });
    let mut response = Json(payload).into_response();
    if let Ok(value) = HeaderValue::from_str("public, max-age=30") {
        response.headers_mut().insert("cache-control", value);
    }
    state
        .metrics
        .observe_request("/v1/version", StatusCode::OK, started.elapsed())
        .await;
    response
}

pub(crate) async fn openapi_handler(State(state): State<AppState>) -> impl IntoResponse {
    let started = Instant::now();
    let response = Json(openapi_v1_spec()).into_response();
    state
        .metrics
        .observe_request("/v1/openapi", StatusCode::OK, started.elapsed())
        .await;
    response
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SignInRequest {
    username: String,
    password: String,
}

pub(crate) async fn session_status_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let authenticated = session_token_from_headers(&headers)
        .is_some_and(|token| state.gate.is_unlocked(&token));
    let response = Json(json!({"authenticated": authenticated})).into_response();
    state
        .metrics
        .observe_request("/v1/session", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(response, &request_id)
}

pub(crate) async fn sign_in_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let request: SignInRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            return error_response(
                &state,
                "/v1/session",
                StatusCode::BAD_REQUEST,
                ApiError::invalid_body(&e.to_string()),
                started,
                &request_id,
            )
            .await;
        }
    };

    let token = session_token_from_headers(&headers).unwrap_or_else(mint_session_token);
    if !state
        .gate
        .authenticate(&token, &request.username, &request.password)
    {
        info!(request_id = %request_id, "sign-in rejected");
        return error_response(
            &state,
            "/v1/session",
            StatusCode::UNAUTHORIZED,
            ApiError::invalid_credentials(),
            started,
            &request_id,
        )
        .await;
    }

    info!(request_id = %request_id, "sign-in accepted");
    let mut response = Json(json!({"authenticated": true})).into_response();
    let secure = if state.api.cookie_secure { "; Secure" } else { "" };
    if let Ok(value) = HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax{secure}"
    )) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    state
        .metrics
        .observe_request("/v1/session", StatusCode::OK, started.elapsed())
        .await;
    with_request_id(response, &request_id)
}

pub(crate) async fn roadmap_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let payload =
        serde_json::to_value(roadmap_view(&state.document)).unwrap_or_else(|_| json!({}));
    content_response(&state, &headers, "/v1/roadmap", payload, started, &request_id).await
}

pub(crate) async fn horizon_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(key): Path<String>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/v1/horizons/:key";
    match parse_horizon_param(&key) {
        Ok(horizon) => {
            let payload = serde_json::to_value(horizon_view(&state.document, horizon))
                .unwrap_or_else(|_| json!({}));
            content_response(&state, &headers, route, payload, started, &request_id).await
        }
        Err(err) => {
            error_response(&state, route, StatusCode::NOT_FOUND, err, started, &request_id).await
        }
    }
}

pub(crate) async fn section_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((key, section)): Path<(String, String)>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/v1/horizons/:key/sections/:section";
    let horizon = match parse_horizon_param(&key) {
        Ok(horizon) => horizon,
        Err(err) => {
            return error_response(&state, route, StatusCode::NOT_FOUND, err, started, &request_id)
                .await;
        }
    };
    let section = match parse_section_param(&section) {
        Ok(section) => section,
        Err(err) => {
            return error_response(&state, route, StatusCode::NOT_FOUND, err, started, &request_id)
                .await;
        }
    };
    let payload = serde_json::to_value(render(&state.document, horizon, section))
        .unwrap_or_else(|_| json!({}));
    content_response(&state, &headers, route, payload, started, &request_id).await
}

pub(crate) async fn diagram_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(key): Path<String>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/v1/horizons/:key/diagram";
    match parse_horizon_param(&key) {
        Ok(horizon) => {
            let payload = serde_json::to_value(diagram_view(&state.document, horizon))
                .unwrap_or_else(|_| json!({}));
            content_response(&state, &headers, route, payload, started, &request_id).await
        }
        Err(err) => {
            error_response(&state, route, StatusCode::NOT_FOUND, err, started, &request_id).await
        }
    }
}

pub(crate) async fn cost_impact_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(key): Path<String>,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let route = "/v1/horizons/:key/cost-impact";
    match parse_horizon_param(&key) {
        Ok(horizon) => {
            let payload = serde_json::to_value(cost_impact_view(&state.document, horizon))
                .unwrap_or_else(|_| json!({}));
            content_response(&state, &headers, route, payload, started, &request_id).await
        }
        Err(err) => {
            error_response(&state, route, StatusCode::NOT_FOUND, err, started, &request_id).await
        }
    }
}

pub(crate) async fn trajectory_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let started = Instant::now();
    let request_id = propagated_request_id(&headers, &state);
    let payload =
        serde_json::to_value(trajectory_view(&state.document)).unwrap_or_else(|_| json!({}));
    content_response(
        &state,
        &headers,
        "/v1/trajectory",
        payload,
        started,
        &request_id,
    )
    .await
}
