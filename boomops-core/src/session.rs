//! In-memory session store
//!
//! Maps an opaque high-entropy token to an authenticated principal. Sessions
//! expire 24 hours after issuance (absolute, no sliding renewal) and can be
//! destroyed early by logout.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

use crate::auth::Principal;

const SESSION_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug)]
struct SessionEntry {
    principal: Principal,
    expires_at: Instant,
}

#[derive(Debug)]
pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(SESSION_TTL)
    }
}

impl SessionStore {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Issue a session for an authenticated principal, returning the token.
    pub fn create(&self, principal: Principal) -> String {
        let token = generate_token();
        let entry = SessionEntry {
            principal,
            expires_at: Instant::now() + self.ttl,
        };
        debug!("Session created for user: {}", entry.principal.username);
        self.sessions
            .write()
            .unwrap()
            .insert(token.clone(), entry);
        token
    }

    /// Look up the principal for a token. Returns `None` for unknown or
    /// expired tokens; expired entries are dropped on the way out.
    pub fn resolve(&self, token: &str) -> Option<Principal> {
        let now = Instant::now();
        let mut expired = false;
        let principal = {
            let sessions = self.sessions.read().unwrap();
            match sessions.get(token) {
                Some(entry) if entry.expires_at > now => Some(entry.principal.clone()),
                Some(_) => {
                    expired = true;
                    None
                }
                None => None,
            }
        };
        if expired {
            self.sessions.write().unwrap().remove(token);
        }
        principal
    }

    /// Remove a session immediately. Idempotent.
    pub fn destroy(&self, token: &str) {
        if let Some(entry) = self.sessions.write().unwrap().remove(token) {
            debug!("Session destroyed for user: {}", entry.principal.username);
        }
    }
}

/// 256-bit random token, base64url without padding.
fn generate_token() -> String {
    let mut buf = [0u8; 32];
    OsRng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buf)
}
