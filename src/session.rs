//! Session management for authenticated users.
//!
//! Sessions live in a process-held map from token to identity. They are
//! created at login, destroyed at logout, and do not survive a restart;
//! the browser carries only the opaque token in a cookie.

use crate::app_state::AppState;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;
use axum_extra::extract::cookie::CookieJar;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

// ---

/// Name of the browser cookie that carries the session token.
pub const SESSION_COOKIE: &str = "ludoteca_session";

/// Identity bound to a session token.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    //
    pub user_id: i64,
    pub username: String,
}

// ---

/// In-memory session store shared across handlers.
///
/// Cloning is cheap; all clones share the same map. The store is created
/// once at startup and lives as long as the process.
#[derive(Clone, Default)]
pub struct SessionStore {
    //
    inner: Arc<RwLock<HashMap<String, SessionInfo>>>,
}

impl SessionStore {
    // ---

    pub fn new() -> Self {
        // ---
        Self::default()
    }

    /// Creates a new session for the given user and returns its token.
    pub fn create(&self, user_id: i64, username: String) -> String {
        // ---
        let token = Uuid::new_v4().to_string();

        self.inner.write().expect("session store lock poisoned").insert(
            token.clone(),
            SessionInfo {
                user_id,
                username: username.clone(),
            },
        );

        tracing::info!("Created session for user: {}", username);

        token
    }

    /// Looks up the identity behind a token, if the session exists.
    pub fn get(&self, token: &str) -> Option<SessionInfo> {
        // ---
        self.inner
            .read()
            .expect("session store lock poisoned")
            .get(token)
            .cloned()
    }

    /// Destroys a session. Unknown tokens are ignored.
    pub fn destroy(&self, token: &str) {
        // ---
        if let Some(info) = self
            .inner
            .write()
            .expect("session store lock poisoned")
            .remove(token)
        {
            tracing::info!("Destroyed session for user: {}", info.username);
        }
    }
}

// ---

/// The authenticated identity of the current request.
///
/// Extracting this guards a handler: requests without a valid session are
/// short-circuited to a redirect to the login page. The check reads only the
/// session store, never the database.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    //
    pub user_id: i64,
    pub username: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    // ---
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // ---
        let jar = CookieJar::from_headers(&parts.headers);

        let info = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| state.sessions().get(cookie.value()));

        match info {
            Some(info) => Ok(CurrentUser {
                user_id: info.user_id,
                username: info.username,
            }),
            None => Err(Redirect::to("/login")),
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn create_then_get_round_trips_identity() {
        // ---
        let store = SessionStore::new();
        let token = store.create(7, "demo".to_string());

        let info = store.get(&token).expect("session should exist");
        assert_eq!(info.user_id, 7);
        assert_eq!(info.username, "demo");
    }

    #[test]
    fn destroy_removes_session() {
        // ---
        let store = SessionStore::new();
        let token = store.create(1, "demo".to_string());

        store.destroy(&token);
        assert!(store.get(&token).is_none());

        // Destroying again is a no-op
        store.destroy(&token);
    }

    #[test]
    fn unknown_token_yields_nothing() {
        // ---
        let store = SessionStore::new();
        assert!(store.get("not-a-token").is_none());
    }

    #[test]
    fn clones_share_the_same_map() {
        // ---
        let store = SessionStore::new();
        let clone = store.clone();

        let token = store.create(2, "demo".to_string());
        assert!(clone.get(&token).is_some());

        clone.destroy(&token);
        assert!(store.get(&token).is_none());
    }
}
