#![forbid(unsafe_code)]

use podium_core::{
    ExitCode, ENV_PODIUM_BIND_ADDR, ENV_PODIUM_CONTENT_PATH, ENV_PODIUM_LOG_LEVEL,
};
use podium_server::{build_router, load_document, ApiConfig, AppState};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(env::var(ENV_PODIUM_LOG_LEVEL).unwrap_or_else(|_| "info".to_string()))
    });
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let api_cfg = ApiConfig {
        max_body_bytes: env_usize("PODIUM_MAX_BODY_BYTES", 16 * 1024),
        discovery_ttl: Duration::from_secs(env_u64("PODIUM_DISCOVERY_TTL_SECS", 30)),
        cookie_secure: env_bool("PODIUM_COOKIE_SECURE", false),
        log_json: env_bool("PODIUM_LOG_JSON", true),
    };
    init_tracing(api_cfg.log_json);

    let content_path = env::var(ENV_PODIUM_CONTENT_PATH).ok().map(PathBuf::from);
    let document = match load_document(content_path.as_deref()) {
        Ok(document) => document,
        Err(e) => {
            error!("roadmap content rejected: {e}");
            std::process::exit(ExitCode::Validation as i32);
        }
    };
    info!(
        horizons = document.horizons.len(),
        "roadmap content validated"
    );

    let state = AppState::with_config(document, api_cfg);
    let app = build_router(state.clone());

    let bind_addr =
        env::var(ENV_PODIUM_BIND_ADDR).unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind {bind_addr} failed: {e}"))?;
    info!("podium-server listening on {bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))
}
