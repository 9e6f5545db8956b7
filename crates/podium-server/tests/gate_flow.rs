use podium_model::builtin_roadmap;
use podium_server::{
    build_router, AppState, MemorySessionStore, SessionGate,
};
use serde_json::Value;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn spawn_server() -> std::net::SocketAddr {
    let app = build_router(AppState::new(builtin_roadmap().clone()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

async fn send_raw(
    addr: std::net::SocketAddr,
    method: &str,
    path: &str,
    headers: &[(&str, &str)],
    body: Option<&str>,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let mut req = format!("{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    for (k, v) in headers {
        req.push_str(&format!("{k}: {v}\r\n"));
    }
    if let Some(body) = body {
        req.push_str(&format!(
            "Content-Type: application/json\r\nContent-Length: {}\r\n",
            body.len()
        ));
    }
    req.push_str("\r\n");
    if let Some(body) = body {
        req.push_str(body);
    }
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response must have separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("http status");
    (status, head.to_string(), body.to_string())
}

fn session_cookie(head: &str) -> String {
    head.lines()
        .find_map(|line| line.strip_prefix("set-cookie: "))
        .expect("set-cookie header present")
        .split(';')
        .next()
        .expect("cookie pair")
        .to_string()
}

fn error_code(body: &str) -> String {
    let json: Value = serde_json::from_str(body).expect("error json");
    json["error"]["code"]
        .as_str()
        .expect("error code string")
        .to_string()
}

#[tokio::test]
async fn anonymous_session_reports_locked_and_content_is_refused() {
    let addr = spawn_server().await;

    let (status, _, body) = send_raw(addr, "GET", "/v1/session", &[], None).await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("session json");
    assert_eq!(json["authenticated"], Value::Bool(false));

    for path in [
        "/v1/roadmap",
        "/v1/horizons/h1",
        "/v1/horizons/h1/sections/overview",
        "/v1/horizons/h2/diagram",
        "/v1/horizons/h3/cost-impact",
        "/v1/trajectory",
    ] {
        let (status, _, body) = send_raw(addr, "GET", path, &[], None).await;
        assert_eq!(status, 401, "{path} must be gated");
        assert_eq!(error_code(&body), "SessionRequired", "{path}");
    }
}

#[tokio::test]
async fn wrong_credentials_surface_the_static_message_and_stay_locked() {
    let addr = spawn_server().await;

    let (status, _, body) = send_raw(
        addr,
        "POST",
        "/v1/session",
        &[],
        Some(r#"{"username": "UKSportAdmin", "password": "wrong"}"#),
    )
    .await;
    assert_eq!(status, 401);
    let json: Value = serde_json::from_str(&body).expect("error json");
    assert_eq!(json["error"]["code"], "InvalidCredentials");
    assert_eq!(json["error"]["message"], "Incorrect username or password.");

    // Retry is allowed and the flag stayed false.
    let (status, _, body) = send_raw(addr, "GET", "/v1/session", &[], None).await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("session json");
    assert_eq!(json["authenticated"], Value::Bool(false));
}

#[tokio::test]
async fn unreadable_body_is_a_bad_request() {
    let addr = spawn_server().await;
    let (status, _, body) = send_raw(addr, "POST", "/v1/session", &[], Some("{not json")).await;
    assert_eq!(status, 400);
    assert_eq!(error_code(&body), "InvalidRequestBody");
}

#[tokio::test]
async fn successful_sign_in_unlocks_the_session_for_subsequent_requests() {
    let addr = spawn_server().await;

    let (status, head, body) = send_raw(
        addr,
        "POST",
        "/v1/session",
        &[],
        Some(r#"{"username": "UKSportAdmin", "password": "UKSport25"}"#),
    )
    .await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("sign-in json");
    assert_eq!(json["authenticated"], Value::Bool(true));
    let cookie = session_cookie(&head);
    assert!(cookie.starts_with("podium_session="));
    assert!(
        !head.to_lowercase().contains("max-age"),
        "session cookie must not outlive the browsing session"
    );

    // Reload within the same session: still unlocked.
    let (status, _, body) =
        send_raw(addr, "GET", "/v1/session", &[("Cookie", &cookie)], None).await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("session json");
    assert_eq!(json["authenticated"], Value::Bool(true));

    let (status, _, _) =
        send_raw(addr, "GET", "/v1/roadmap", &[("Cookie", &cookie)], None).await;
    assert_eq!(status, 200);

    // A fresh session (no cookie) is still locked.
    let (status, _, _) = send_raw(addr, "GET", "/v1/roadmap", &[], None).await;
    assert_eq!(status, 401);
}

#[tokio::test]
async fn whitespace_around_the_username_is_tolerated() {
    let addr = spawn_server().await;
    let (status, _, body) = send_raw(
        addr,
        "POST",
        "/v1/session",
        &[],
        Some(r#"{"username": "  UKSportAdmin  ", "password": "UKSport25"}"#),
    )
    .await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("sign-in json");
    assert_eq!(json["authenticated"], Value::Bool(true));
}

#[tokio::test]
async fn whitespace_in_the_password_is_not_tolerated() {
    let addr = spawn_server().await;
    let (status, _, _) = send_raw(
        addr,
        "POST",
        "/v1/session",
        &[],
        Some(r#"{"username": "UKSportAdmin", "password": " UKSport25 "}"#),
    )
    .await;
    assert_eq!(status, 401);
}

#[tokio::test]
async fn an_injected_gate_replaces_the_default_credentials() {
    let gate = SessionGate::with_credentials(
        Arc::new(MemorySessionStore::default()),
        "Reviewer",
        "letmein",
    );
    let app = build_router(AppState::new(builtin_roadmap().clone()).with_gate(gate));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    let (status, _, _) = send_raw(
        addr,
        "POST",
        "/v1/session",
        &[],
        Some(r#"{"username": "UKSportAdmin", "password": "UKSport25"}"#),
    )
    .await;
    assert_eq!(status, 401);

    let (status, _, _) = send_raw(
        addr,
        "POST",
        "/v1/session",
        &[],
        Some(r#"{"username": "Reviewer", "password": "letmein"}"#),
    )
    .await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn there_is_no_sign_out_transition() {
    let addr = spawn_server().await;
    let (_, head, _) = send_raw(
        addr,
        "POST",
        "/v1/session",
        &[],
        Some(r#"{"username": "UKSportAdmin", "password": "UKSport25"}"#),
    )
    .await;
    let cookie = session_cookie(&head);

    // A later failed attempt does not re-lock the session.
    let (status, _, _) = send_raw(
        addr,
        "POST",
        "/v1/session",
        &[("Cookie", &cookie)],
        Some(r#"{"username": "UKSportAdmin", "password": "wrong"}"#),
    )
    .await;
    assert_eq!(status, 401);
    let (status, _, body) =
        send_raw(addr, "GET", "/v1/session", &[("Cookie", &cookie)], None).await;
    assert_eq!(status, 200);
    let json: Value = serde_json::from_str(&body).expect("session json");
    assert_eq!(json["authenticated"], Value::Bool(true));
}
