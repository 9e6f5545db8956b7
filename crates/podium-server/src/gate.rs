//! Session gate: decides whether a request may see the roadmap surface.
//!
//! Two states per session token, `Locked` and `Unlocked`, with a single
//! transition on a successful credential match. There is no sign-out
//! transition; the flag lives until the session token dies with the
//! browsing session.

use rand::Rng;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Fixed credential pair. Compiled in on purpose: this gates a
/// presentation, not access to anything sensitive.
pub const GATE_USERNAME: &str = "UKSportAdmin";
pub const GATE_PASSWORD: &str = "UKSport25";

/// Cookie carrying the opaque session token. No Max-Age, so the browser
/// drops it when the browsing session ends.
pub const SESSION_COOKIE: &str = "podium_session";

/// Boolean flag per session token. Swappable so gate logic is testable
/// without the production store.
pub trait SessionStore: Send + Sync + 'static {
    fn get(&self, token: &str) -> bool;
    fn set(&self, token: &str, unlocked: bool);
}

/// In-process store; sessions do not survive a server restart, matching
/// the session-scoped lifetime of the flag.
#[derive(Default)]
pub struct MemorySessionStore {
    flags: Mutex<HashMap<String, bool>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, token: &str) -> bool {
        self.flags
            .lock()
            .map(|flags| flags.get(token).copied().unwrap_or(false))
            .unwrap_or(false)
    }

    fn set(&self, token: &str, unlocked: bool) {
        if let Ok(mut flags) = self.flags.lock() {
            flags.insert(token.to_string(), unlocked);
        }
    }
}

pub struct SessionGate {
    store: Arc<dyn SessionStore>,
    username: String,
    password: String,
}

impl SessionGate {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self::with_credentials(store, GATE_USERNAME, GATE_PASSWORD)
    }

    #[must_use]
    pub fn with_credentials(store: Arc<dyn SessionStore>, username: &str, password: &str) -> Self {
        Self {
            store,
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Trims the username, compares the pair verbatim, and unlocks the
    /// token on a match. The only failure mode is `false`.
    pub fn authenticate(&self, token: &str, username: &str, password: &str) -> bool {
        let matched = username.trim() == self.username && password == self.password;
        if matched {
            self.store.set(token, true);
        }
        matched
    }

    /// Read-only; an unknown token is locked.
    #[must_use]
    pub fn is_unlocked(&self, token: &str) -> bool {
        self.store.get(token)
    }
}

#[must_use]
pub fn mint_session_token() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill(&mut bytes[..]);
    hex::encode(bytes)
}
