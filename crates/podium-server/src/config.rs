use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    pub discovery_ttl: Duration,
    pub cookie_secure: bool,
    pub log_json: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 16 * 1024,
            discovery_ttl: Duration::from_secs(30),
            cookie_secure: false,
            log_json: true,
        }
    }
}
