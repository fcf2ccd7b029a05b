//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The `AppState` contains the
//! repository, the in-memory session store, and the view renderer.
//!
//! The state is designed to be cheaply cloneable (using `Arc` internally
//! where needed) so it can be passed efficiently to each request handler
//! without expensive copying of resources.

use crate::domain::{RendererPtr, RepositoryPtr};
use crate::session::SessionStore;

/// Shared application state passed to all Axum handlers.
///
/// This struct serves as the Dependency Injection container for the
/// application. Handlers depend on the `Repository` and `ViewRenderer`
/// abstractions, not on the SQLite or HTML implementations behind them.
///
/// # Lifecycle
///
/// 1. Created once in `create_router()` during application startup
/// 2. Attached to the Axum router via `.with_state(app_state)`
/// 3. Cloned automatically by Axum for each incoming HTTP request
/// 4. Handlers extract via `State(state): State<AppState>`
///
/// The session store and the database pool behind the repository are
/// process-wide shared state: initialized once, never explicitly torn down.
#[derive(Clone)]
pub(crate) struct AppState {
    /// Repository abstraction for persistent storage (users, games).
    ///
    /// Backed by SQLite with an SQLx connection pool.
    /// Wrapped in `Arc` via `RepositoryPtr` for cheap cloning.
    repository: RepositoryPtr,

    /// In-memory session store mapping tokens to identities.
    ///
    /// Non-persistent; sessions are lost on restart.
    sessions: SessionStore,

    /// View renderer turning page data objects into HTML documents.
    ///
    /// Wrapped in `Arc` via `RendererPtr` for cheap cloning.
    views: RendererPtr,
}

impl AppState {
    // ---

    pub fn new(repository: RepositoryPtr, sessions: SessionStore, views: RendererPtr) -> Self {
        // ---
        AppState {
            repository,
            sessions,
            views,
        }
    }

    /// Get a reference to the repository implementation.
    pub(crate) fn repository(&self) -> &RepositoryPtr {
        // ---
        &self.repository
    }

    /// Get a reference to the session store.
    pub(crate) fn sessions(&self) -> &SessionStore {
        // ---
        &self.sessions
    }

    /// Get a reference to the view renderer.
    pub(crate) fn views(&self) -> &RendererPtr {
        // ---
        &self.views
    }
}

#[cfg(test)]
mod tests {
    // ---

    use super::*;
    use crate::domain::{
        Game, GameDraft, GameFilters, GameStats, Page, Repository, User, ViewRenderer,
    };
    use anyhow::Result;
    use std::sync::Arc;

    // Mock repository for unit tests - not used, just satisfies AppState requirements
    struct MockRepository;

    #[async_trait::async_trait]
    impl Repository for MockRepository {
        // ---

        async fn create_user(&self, _username: &str, _password: &str) -> Result<Option<User>> {
            unimplemented!("Mock repository - not used in AppState unit tests")
        }
        async fn find_user_by_credentials(
            &self,
            _username: &str,
            _password: &str,
        ) -> Result<Option<User>> {
            unimplemented!()
        }
        async fn list_games(&self, _user_id: i64, _filters: &GameFilters) -> Result<Vec<Game>> {
            unimplemented!()
        }
        async fn create_game(&self, _user_id: i64, _draft: &GameDraft) -> Result<Game> {
            unimplemented!()
        }
        async fn get_owned_game(&self, _user_id: i64, _game_id: i64) -> Result<Option<Game>> {
            unimplemented!()
        }
        async fn update_game(
            &self,
            _user_id: i64,
            _game_id: i64,
            _draft: &GameDraft,
        ) -> Result<()> {
            unimplemented!()
        }
        async fn delete_game(&self, _user_id: i64, _game_id: i64) -> Result<()> {
            unimplemented!()
        }
        async fn game_stats(&self, _user_id: i64) -> Result<GameStats> {
            unimplemented!()
        }
        async fn ping(&self) -> Result<()> {
            unimplemented!()
        }
    }

    struct MockRenderer;

    impl ViewRenderer for MockRenderer {
        // ---
        fn render(&self, _page: &Page) -> String {
            String::new()
        }
    }

    #[test]
    fn test_app_state_creation_and_clone() {
        // ---
        // Test basic creation and that Clone works
        let repository = Arc::new(MockRepository);
        let sessions = SessionStore::new();
        let views = Arc::new(MockRenderer);

        let app_state = AppState::new(repository, sessions, views);
        let cloned = app_state.clone();

        // Verify accessors work and that clones share the session store
        let _repo_ref = app_state.repository();
        let _views_ref = app_state.views();
        let token = app_state.sessions().create(1, "demo".to_string());
        assert!(cloned.sessions().get(&token).is_some());
    }
}
