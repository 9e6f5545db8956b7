// SPDX-License-Identifier: Apache-2.0

use crate::http::handlers::{api_error_response, session_token_from_headers};
use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use podium_api::ApiError;
use tracing::info;

/// Guards the roadmap surface: requests without an unlocked session are
/// answered with the 401 envelope and never reach a content handler.
pub(crate) async fn session_gate_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let unlocked = session_token_from_headers(request.headers())
        .is_some_and(|token| state.gate.is_unlocked(&token));
    if !unlocked {
        let route = request.uri().path().to_string();
        info!(route = %route, "locked session rejected");
        let response =
            api_error_response(StatusCode::UNAUTHORIZED, ApiError::session_required());
        state
            .metrics
            .observe_request(&route, StatusCode::UNAUTHORIZED, std::time::Duration::ZERO)
            .await;
        return response;
    }
    next.run(request).await
}
